//! Users command - profiles and skill preferences.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::SkillHubClient;

use super::{print_header, print_json, print_ok, Context};

/// Arguments for the users command.
#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// Show a user's profile (default: yourself)
    Profile {
        /// User ID
        #[arg(long)]
        user: Option<i64>,
    },

    /// List a user's preferred skills (default: yourself)
    Skills {
        /// User ID
        #[arg(long)]
        user: Option<i64>,
    },

    /// Add skills to your preferences
    AddSkills {
        /// Skill IDs
        #[arg(required = true)]
        skills: Vec<i64>,
    },

    /// Remove a skill from your preferences
    RemoveSkill {
        /// Skill ID
        skill: i64,
    },
}

/// Run the users command.
pub async fn run(args: UsersArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let users = client.users();
    let dim = Style::new().dim();

    match args.command {
        UsersCommand::Profile { user } => {
            let user_id = resolve_user(ctx, &client, user).await?;
            let profile = users.profile(user_id).await?;
            if ctx.json_output {
                return print_json(&profile);
            }
            print_header(&profile.user_name);
            println!("Email:    {}", profile.email.as_deref().unwrap_or("-"));
            println!("Role:     {}", profile.role_name().unwrap_or("-"));
            println!("Enabled:  {}", profile.enabled);
            println!("Locked:   {}", !profile.account_non_locked);
            println!("2FA:      {}", profile.is_two_factor_enabled);
            println!("Premium:  {}", profile.premium);
            if let Some(created) = profile.created_date {
                println!("{}", dim.apply_to(format!("Joined {}", created.date())));
            }
        }
        UsersCommand::Skills { user } => {
            let user_id = resolve_user(ctx, &client, user).await?;
            let skills = users.skills(user_id).await?;
            if ctx.json_output {
                return print_json(&skills);
            }
            print_header("Preferred skills");
            if skills.is_empty() {
                println!("{}", dim.apply_to("None picked yet"));
            }
            for skill in &skills {
                println!(
                    "{} {}",
                    dim.apply_to(format!("[{}]", skill.skill_id)),
                    skill.skill_name
                );
            }
        }
        UsersCommand::AddSkills { skills } => {
            if skills.is_empty() {
                bail!("Pick at least one skill");
            }
            let me = ctx.current_user_id(&client).await?;
            users.set_skill_preferences(me, &skills).await?;
            print_ok(format!("Added {} skill(s) to your preferences", skills.len()));
        }
        UsersCommand::RemoveSkill { skill } => {
            let me = ctx.current_user_id(&client).await?;
            users.remove_skill(me, skill).await?;
            print_ok(format!("Removed skill {} from your preferences", skill));
        }
    }

    Ok(())
}

async fn resolve_user(ctx: &Context, client: &SkillHubClient, user: Option<i64>) -> Result<i64> {
    match user {
        Some(id) => Ok(id),
        None => ctx.current_user_id(client).await,
    }
}
