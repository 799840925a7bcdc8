//! Auth command - sign in, sign up and session inspection.

use std::io::Write;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use console::{style, Style};
use skillhub_client::{decode_claims, LoginOutcome, SignupRequest};

use super::{print_header, print_json, print_ok, Context};

/// Arguments for the auth command.
#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Sign in with username and password
    Login {
        /// Account username
        username: String,

        /// Read the password from stdin instead of prompting
        #[arg(long)]
        password_stdin: bool,

        /// Two-factor code, if the account requires one
        #[arg(long)]
        code: Option<String>,
    },

    /// Create a new account
    Signup {
        /// Account username
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Roles to request (e.g. user)
        #[arg(long = "role")]
        roles: Vec<String>,

        /// Read the password from stdin instead of prompting
        #[arg(long)]
        password_stdin: bool,
    },

    /// Show the signed-in user
    Whoami,

    /// Show session status without contacting the server
    Status,

    /// Forget the stored session
    Logout,
}

/// Run the auth command.
pub async fn run(args: AuthArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AuthCommand::Login {
            username,
            password_stdin,
            code,
        } => cmd_login(ctx, &username, password_stdin, code).await,
        AuthCommand::Signup {
            username,
            email,
            roles,
            password_stdin,
        } => cmd_signup(ctx, username, email, roles, password_stdin).await,
        AuthCommand::Whoami => cmd_whoami(ctx).await,
        AuthCommand::Status => cmd_status(ctx),
        AuthCommand::Logout => cmd_logout(ctx),
    }
}

async fn cmd_login(
    ctx: &Context,
    username: &str,
    password_stdin: bool,
    code: Option<String>,
) -> Result<()> {
    let password = read_password(password_stdin)?;
    let client = ctx.client()?;

    let username = match client.auth().login(username, password).await? {
        LoginOutcome::LoggedIn(login) => login.username,
        LoginOutcome::TwoFactorRequired {
            username,
            jwt_token,
        } => {
            let code = match code {
                Some(code) => code,
                None => prompt(&format!("2FA code for {}: ", username))?,
            };
            client
                .auth()
                .complete_two_factor(code.trim(), &jwt_token)
                .await
                .context("Two-factor verification failed")?;
            tracing::info!(%username, "two-factor verification complete");
            username
        }
    };

    // Cache the user so later commands know the caller's id.
    let user = client.auth().refresh_current_user().await?;

    if ctx.json_output {
        print_json(&user)?;
    } else {
        print_ok(format!("Signed in as {}", style(&username).bold()));
        if client.session().is_admin() {
            let dim = Style::new().dim();
            println!("{}", dim.apply_to("Admin privileges detected"));
        }
    }
    Ok(())
}

async fn cmd_signup(
    ctx: &Context,
    username: String,
    email: String,
    roles: Vec<String>,
    password_stdin: bool,
) -> Result<()> {
    let password = read_password(password_stdin)?;
    let client = ctx.client()?;

    let response = client
        .auth()
        .sign_up(&SignupRequest {
            username,
            email,
            password,
            role: roles,
        })
        .await?;

    if ctx.json_output {
        print_json(&response)?;
    } else {
        print_ok(&response.message);
    }
    Ok(())
}

async fn cmd_whoami(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let user = client.auth().refresh_current_user().await?;

    if ctx.json_output {
        return print_json(&user);
    }

    let dim = Style::new().dim();
    print_header("Current User");
    println!("  {:<12} {}", dim.apply_to("id"), user.id);
    println!("  {:<12} {}", dim.apply_to("username"), user.username);
    if let Some(email) = &user.email {
        println!("  {:<12} {}", dim.apply_to("email"), email);
    }
    println!("  {:<12} {}", dim.apply_to("roles"), user.roles.join(", "));
    println!(
        "  {:<12} {}",
        dim.apply_to("2fa"),
        if user.is_two_factor_enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

fn cmd_status(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let session = client.session();

    let token = session.bearer_token();
    let claims = token.as_deref().and_then(|t| decode_claims(t).ok());

    if ctx.json_output {
        return print_json(&serde_json::json!({
            "server": client.base_url().as_str(),
            "authenticated": token.is_some(),
            "username": claims.as_ref().map(|c| c.sub.clone()),
            "roles": claims.as_ref().map(|c| c.role_list()),
            "expiresAt": claims.as_ref().and_then(|c| c.exp),
            "isAdmin": session.is_admin(),
        }));
    }

    let dim = Style::new().dim();
    print_header("Session");
    println!("  {:<12} {}", dim.apply_to("server"), client.base_url());
    match (&token, &claims) {
        (Some(_), Some(claims)) => {
            println!("  {:<12} {}", dim.apply_to("user"), claims.sub);
            println!("  {:<12} {}", dim.apply_to("roles"), claims.role_list().join(", "));
            if let Some(exp) = claims.exp.and_then(|e| chrono::DateTime::from_timestamp(e, 0)) {
                println!("  {:<12} {}", dim.apply_to("expires"), exp);
            }
        }
        (Some(_), None) => {
            println!("  {:<12} {}", dim.apply_to("user"), "token present (unreadable claims)");
        }
        (None, _) => {
            println!("  {}", dim.apply_to("Not signed in. Run 'skillhub auth login <username>'."));
        }
    }
    Ok(())
}

fn cmd_logout(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    client.auth().logout()?;
    if ctx.json_output {
        print_json(&serde_json::json!({ "loggedOut": true }))
    } else {
        print_ok("Signed out");
        Ok(())
    }
}

/// Read a password from stdin or an interactive prompt.
fn read_password(from_stdin: bool) -> Result<String> {
    let password = if from_stdin {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        line.trim_end_matches(['\r', '\n']).to_string()
    } else {
        rpassword::prompt_password("Password: ")?
    };
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    Ok(password)
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
