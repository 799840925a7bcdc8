//! Config command - connection contexts.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;
use skillhub_config::{AuthConfig, Context as ClientContext, ResolvedFrom};

use super::{print_json, Context};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the resolved server and where it came from
    Show,

    /// Show configuration file path
    Path,

    /// Show the current context name
    CurrentContext,

    /// List available contexts
    GetContexts,

    /// Switch to a different context
    UseContext {
        /// Context name to switch to
        name: String,
    },

    /// Create or update a context
    SetContext {
        /// Context name
        name: String,

        /// Server URL (e.g., http://localhost:8080)
        #[arg(long)]
        server: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Environment variable holding a pre-issued JWT
        #[arg(long)]
        token_env: Option<String>,
    },

    /// Delete a context
    DeleteContext {
        /// Context name to delete
        name: String,
    },
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => cmd_show(ctx),
        ConfigCommand::Path => cmd_path(),
        ConfigCommand::CurrentContext => cmd_current_context(),
        ConfigCommand::GetContexts => cmd_get_contexts(ctx),
        ConfigCommand::UseContext { name } => cmd_use_context(&name),
        ConfigCommand::SetContext {
            name,
            server,
            timeout,
            token_env,
        } => cmd_set_context(&name, server, timeout, token_env),
        ConfigCommand::DeleteContext { name } => cmd_delete_context(&name),
    }
}

fn cmd_show(ctx: &Context) -> Result<()> {
    let conn = ctx.connection()?;
    let source = match &conn.from {
        ResolvedFrom::Override => "--server / SKILLHUB_API_URL".to_string(),
        ResolvedFrom::Context(name) => format!("context \"{}\"", name),
        ResolvedFrom::Default => "default".to_string(),
    };

    if ctx.json_output {
        return print_json(&serde_json::json!({
            "server": conn.server,
            "source": source,
            "timeout": conn.timeout,
            "bearerToken": conn.bearer_token.is_some(),
        }));
    }

    let dim = Style::new().dim();
    println!("  {:<10} {}", dim.apply_to("server"), conn.server);
    println!("  {:<10} {}", dim.apply_to("source"), source);
    println!("  {:<10} {}s", dim.apply_to("timeout"), conn.timeout);
    Ok(())
}

fn cmd_path() -> Result<()> {
    match skillhub_config::client_config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("Could not determine config directory"),
    }
    Ok(())
}

fn cmd_current_context() -> Result<()> {
    let config = skillhub_config::load_client_config()?;

    match &config.current_context {
        Some(name) => println!("{}", name),
        None => println!(
            "No current context set. Use 'skillhub config use-context <name>' to set one."
        ),
    }
    Ok(())
}

fn cmd_get_contexts(ctx: &Context) -> Result<()> {
    let config = skillhub_config::load_client_config()?;

    if ctx.json_output {
        return print_json(&config.contexts);
    }

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!();
        println!("Create one with:");
        println!("  skillhub config set-context local --server=http://localhost:8080");
        return Ok(());
    }

    let current = config.current_context.as_deref();

    println!("CURRENT   NAME            SERVER");
    for context in &config.contexts {
        let marker = if current == Some(context.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{}         {:<15} {}", marker, context.name, context.server);
    }
    Ok(())
}

fn cmd_use_context(name: &str) -> Result<()> {
    let mut config = skillhub_config::load_client_config()?;

    config.use_context(name)?;
    skillhub_config::save_client_config(&config)?;

    println!("Switched to context \"{}\".", name);
    Ok(())
}

fn cmd_set_context(
    name: &str,
    server: Option<String>,
    timeout: Option<u64>,
    token_env: Option<String>,
) -> Result<()> {
    let mut config = skillhub_config::load_client_config()?;

    let mut context = match config.get_context(name) {
        Some(existing) => existing.clone(),
        None => {
            let server = server
                .clone()
                .ok_or_else(|| anyhow::anyhow!("--server is required when creating a new context"))?;
            ClientContext::new(name, server)
        }
    };
    let is_new = config.get_context(name).is_none();

    if let Some(url) = server {
        context.server = url;
    }
    if let Some(t) = timeout {
        context.timeout = Some(t);
    }
    if let Some(var) = token_env {
        context.auth = Some(AuthConfig::bearer_env(var));
    }

    // Reject bad URLs before they reach disk.
    let mut candidate = skillhub_config::ClientConfig::new();
    candidate.set_context(context.clone());
    candidate.use_context(name)?;
    candidate.resolve(None)?;

    config.set_context(context);
    if config.current_context.is_none() && config.contexts.len() == 1 {
        config.current_context = Some(name.to_string());
    }
    skillhub_config::save_client_config(&config)?;

    if is_new {
        println!("Context \"{}\" created.", name);
    } else {
        println!("Context \"{}\" modified.", name);
    }
    if config.current_context.as_deref() == Some(name) && config.contexts.len() == 1 {
        println!("Context \"{}\" set as current context.", name);
    }
    Ok(())
}

fn cmd_delete_context(name: &str) -> Result<()> {
    let mut config = skillhub_config::load_client_config()?;

    match config.remove_context(name) {
        Some(_) => {
            skillhub_config::save_client_config(&config)?;
            println!("Context \"{}\" deleted.", name);
            if config.current_context.is_none() {
                println!(
                    "Note: No current context. Use 'skillhub config use-context <name>' to set one."
                );
            }
        }
        None => println!("Context \"{}\" not found.", name),
    }
    Ok(())
}
