//! Plans command - learning plans and their items.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::{LearningItem, LearningPlan, LearningPlanDraft};

use super::{print_header, print_json, print_ok, Context};

/// Arguments for the plans command.
#[derive(Args, Debug)]
pub struct PlansArgs {
    #[command(subcommand)]
    pub command: PlansCommand,
}

#[derive(Subcommand, Debug)]
pub enum PlansCommand {
    /// Create a learning plan
    Create {
        /// Plan title
        title: String,

        /// Plan description
        #[arg(short, long)]
        description: Option<String>,

        /// Expected start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Expected end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Skill this plan builds
        #[arg(long)]
        skill: Option<i64>,

        /// Post this plan was created from
        #[arg(long)]
        post: Option<i64>,

        /// Initial topics, one per flag
        #[arg(long = "topic")]
        topics: Vec<String>,
    },

    /// List your learning plans
    List,

    /// Show a plan with its items
    Show {
        /// Plan ID
        id: i64,
    },

    /// Change a plan's title, description or dates
    Update {
        /// Plan ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// New status (e.g. IN_PROGRESS, COMPLETED)
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a plan
    Delete {
        /// Plan ID
        id: i64,
    },

    /// Add a topic to a plan
    AddItem {
        /// Plan ID
        plan: i64,

        /// Topic
        topic: String,

        /// Link or book for the topic
        #[arg(long)]
        resource: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<NaiveDate>,
    },

    /// Mark a topic as done
    Complete {
        /// Item ID
        item: i64,
    },

    /// Remove a topic
    RemoveItem {
        /// Item ID
        item: i64,
    },
}

/// Run the plans command.
pub async fn run(args: PlansArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let plans = client.learning_plans();
    let dim = Style::new().dim();

    match args.command {
        PlansCommand::Create {
            title,
            description,
            start,
            end,
            skill,
            post,
            topics,
        } => {
            let draft = LearningPlanDraft {
                title,
                description,
                skill_id: skill,
                post_id: post,
                items: topics.into_iter().map(new_item).collect(),
                ..Default::default()
            }
            .with_dates(start, end);

            let plan = plans.create(&draft).await?;
            if ctx.json_output {
                return print_json(&plan);
            }
            print_ok(format!(
                "Plan created: {} {}",
                plan.title,
                dim.apply_to(format!("[{}]", plan.id))
            ));
        }
        PlansCommand::List => {
            let list = plans.list().await?;
            if ctx.json_output {
                return print_json(&list);
            }
            print_header("Learning Plans");
            if list.is_empty() {
                println!("{}", dim.apply_to("No plans yet"));
            }
            for plan in &list {
                println!(
                    "{} {:<30} {}",
                    dim.apply_to(format!("[{}]", plan.id)),
                    plan.title,
                    dim.apply_to(progress_label(plan))
                );
            }
        }
        PlansCommand::Show { id } => {
            let plan = plans.get(id).await?;
            if ctx.json_output {
                return print_json(&plan);
            }
            print_plan(&plan);
        }
        PlansCommand::Update {
            id,
            title,
            description,
            start,
            end,
            status,
        } => {
            let current = plans.get(id).await?;
            let draft = LearningPlanDraft {
                title: title.unwrap_or(current.title),
                description: description.or(current.description),
                status: status.or(current.status),
                post_id: current.post_id,
                skill_id: current.skill_id,
                items: current.items,
                ..Default::default()
            }
            .with_dates(
                start.or(current.expected_start_date),
                end.or(current.expected_end_date),
            );

            let plan = plans.update(id, &draft).await?;
            if ctx.json_output {
                return print_json(&plan);
            }
            print_ok(format!("Plan {} updated", plan.id));
        }
        PlansCommand::Delete { id } => {
            plans.delete(id).await?;
            print_ok(format!("Plan {} deleted", id));
        }
        PlansCommand::AddItem {
            plan,
            topic,
            resource,
            target,
        } => {
            let item = LearningItem {
                resource,
                target_date: target,
                ..new_item(topic)
            };
            let item = plans.add_item(plan, &item).await?;
            if ctx.json_output {
                return print_json(&item);
            }
            print_ok(format!("Added \"{}\" to plan {}", item.topic, plan));
        }
        PlansCommand::Complete { item } => {
            let item = plans.complete_item(item).await?;
            if ctx.json_output {
                return print_json(&item);
            }
            print_ok(format!("Completed \"{}\"", item.topic));
        }
        PlansCommand::RemoveItem { item } => {
            plans.delete_item(item).await?;
            print_ok(format!("Item {} removed", item));
        }
    }

    Ok(())
}

fn new_item(topic: String) -> LearningItem {
    LearningItem {
        id: None,
        topic,
        resource: None,
        target_date: None,
        completed: false,
    }
}

fn progress_label(plan: &LearningPlan) -> String {
    let pct = plan.completion_percentage.unwrap_or_else(|| {
        let total = plan.items.len();
        let done = plan.items.iter().filter(|i| i.completed).count();
        if total == 0 {
            0.0
        } else {
            done as f64 * 100.0 / total as f64
        }
    });
    match &plan.status {
        Some(status) => format!("{:.0}% · {}", pct, status),
        None => format!("{:.0}%", pct),
    }
}

fn print_plan(plan: &LearningPlan) {
    let dim = Style::new().dim();
    print_header(&plan.title);
    if let Some(description) = &plan.description {
        println!("{}", description);
        println!();
    }
    if let (Some(start), Some(end)) = (plan.expected_start_date, plan.expected_end_date) {
        println!(
            "  {:<10} {} → {} ({} days)",
            dim.apply_to("window"),
            start,
            end,
            plan.expected_duration_days.unwrap_or_default()
        );
    }
    println!("  {:<10} {}", dim.apply_to("progress"), progress_label(plan));
    println!();
    for item in &plan.items {
        let check = if item.completed { "[x]" } else { "[ ]" };
        let id = item.id.map(|i| format!("#{}", i)).unwrap_or_default();
        print!("  {} {} {}", check, item.topic, dim.apply_to(id));
        if let Some(target) = item.target_date {
            print!(" {}", dim.apply_to(format!("by {}", target)));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(items: Vec<LearningItem>, pct: Option<f64>) -> LearningPlan {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Rust",
            "completionPercentage": pct,
            "items": items,
        }))
        .unwrap()
    }

    #[test]
    fn test_progress_label_prefers_server_percentage() {
        assert_eq!(progress_label(&plan(vec![], Some(42.4))), "42%");
    }

    #[test]
    fn test_progress_label_counts_items() {
        let mut done = new_item("ownership".into());
        done.completed = true;
        let items = vec![done, new_item("lifetimes".into())];
        assert_eq!(progress_label(&plan(items, None)), "50%");
        assert_eq!(progress_label(&plan(vec![], None)), "0%");
    }
}
