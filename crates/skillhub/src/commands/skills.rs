//! Skills command - the skill catalogue.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::SkillRequest;

use super::{print_header, print_json, print_ok, truncate, Context};

/// Arguments for the skills command.
#[derive(Args, Debug)]
pub struct SkillsArgs {
    #[command(subcommand)]
    pub command: SkillsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SkillsCommand {
    /// List all skills
    List,

    /// Show a skill
    Show {
        /// Skill ID
        id: i64,
    },

    /// Add a skill
    Create {
        /// Skill name
        name: String,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Rename or re-describe a skill
    Update {
        /// Skill ID
        id: i64,

        /// New name
        name: String,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a skill
    Delete {
        /// Skill ID
        id: i64,
    },
}

/// Run the skills command.
pub async fn run(args: SkillsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let skills = client.skills();
    let dim = Style::new().dim();

    match args.command {
        SkillsCommand::List => {
            let list = skills.list().await?;
            if ctx.json_output {
                return print_json(&list);
            }
            print_header("Skills");
            if list.is_empty() {
                println!("{}", dim.apply_to("No skills found"));
            }
            for skill in &list {
                println!(
                    "{} {}  {}",
                    dim.apply_to(format!("[{}]", skill.skill_id)),
                    skill.skill_name,
                    dim.apply_to(truncate(skill.description.as_deref().unwrap_or(""), 50))
                );
            }
        }
        SkillsCommand::Show { id } => {
            let skill = skills.get(id).await?;
            if ctx.json_output {
                return print_json(&skill);
            }
            print_header(&skill.skill_name);
            if let Some(description) = &skill.description {
                println!("{}", description);
            }
        }
        SkillsCommand::Create { name, description } => {
            let skill = skills
                .create(&SkillRequest {
                    skill_name: name,
                    description,
                })
                .await?;
            if ctx.json_output {
                return print_json(&skill);
            }
            print_ok(format!(
                "Skill created: {} {}",
                skill.skill_name,
                dim.apply_to(format!("[{}]", skill.skill_id))
            ));
        }
        SkillsCommand::Update {
            id,
            name,
            description,
        } => {
            let skill = skills
                .update(
                    id,
                    &SkillRequest {
                        skill_name: name,
                        description,
                    },
                )
                .await?;
            if ctx.json_output {
                return print_json(&skill);
            }
            print_ok(format!("Skill updated: {}", skill.skill_name));
        }
        SkillsCommand::Delete { id } => {
            skills.delete(id).await?;
            print_ok(format!("Skill {} deleted", id));
        }
    }

    Ok(())
}
