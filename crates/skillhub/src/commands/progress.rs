//! Progress command - progress updates against learning plans.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::{ProgressDraft, ProgressEntry, ProgressTemplateType};

use super::{print_header, print_json, print_ok, truncate, Context};

/// Arguments for the progress command.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    #[command(subcommand)]
    pub command: ProgressCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// Record progress on a plan
    Add {
        /// Learning plan ID
        plan: i64,

        /// Short title
        title: String,

        /// Template (certificate, code-demo, daily-log, milestone, project, skill, workshop)
        #[arg(long = "type", default_value = "daily-log")]
        template: ProgressTemplateType,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Date of the update (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List progress entries (your own unless --plan or --all)
    List {
        /// Only entries for this plan
        #[arg(long)]
        plan: Option<i64>,

        /// Everyone's entries
        #[arg(long, conflicts_with = "plan")]
        all: bool,
    },

    /// Edit an entry
    Update {
        /// Entry ID
        id: i64,

        /// Short title
        title: String,

        /// Template type
        #[arg(long = "type", default_value = "daily-log")]
        template: ProgressTemplateType,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Date of the update (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,
    },
}

/// Run the progress command.
pub async fn run(args: ProgressArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let progress = client.progress();
    let dim = Style::new().dim();

    match args.command {
        ProgressCommand::Add {
            plan,
            title,
            template,
            description,
            date,
        } => {
            let draft = draft(title, template, description, date);
            let entry = progress.create(plan, &draft).await?;
            if ctx.json_output {
                return print_json(&entry);
            }
            print_ok(format!(
                "Progress recorded {}",
                dim.apply_to(format!("[{}]", entry.id))
            ));
        }
        ProgressCommand::List { plan, all } => {
            let entries = match (plan, all) {
                (Some(plan), _) => progress.for_plan(plan).await?,
                (None, true) => progress.all().await?,
                (None, false) => progress.mine().await?,
            };
            if ctx.json_output {
                return print_json(&entries);
            }
            print_header("Progress");
            if entries.is_empty() {
                println!("{}", dim.apply_to("No progress recorded"));
            }
            for entry in &entries {
                print_entry(entry);
            }
        }
        ProgressCommand::Update {
            id,
            title,
            template,
            description,
            date,
        } => {
            let draft = draft(title, template, description, date);
            let entry = progress.update(id, &draft).await?;
            if ctx.json_output {
                return print_json(&entry);
            }
            print_ok(format!("Progress {} updated", entry.id));
        }
        ProgressCommand::Delete { id } => {
            progress.delete(id).await?;
            print_ok(format!("Progress {} deleted", id));
        }
    }

    Ok(())
}

fn draft(
    title: String,
    template_type: ProgressTemplateType,
    description: Option<String>,
    date: Option<NaiveDate>,
) -> ProgressDraft {
    ProgressDraft {
        title,
        description,
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        template_type,
    }
}

fn print_entry(entry: &ProgressEntry) {
    let dim = Style::new().dim();
    println!(
        "{} {} {:<12} {}",
        dim.apply_to(format!("[{}]", entry.id)),
        entry.date,
        entry.template_type.as_str().to_lowercase(),
        truncate(&entry.title, 50)
    );
}
