//! Notifications command.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::api::DEFAULT_PAGE_SIZE;
use skillhub_client::{Notification, NotificationType};

use super::{print_header, print_json, print_ok, Context};

/// Arguments for the notifications command.
#[derive(Args, Debug)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// List notifications, newest first
    List {
        /// Page number (0-based)
        #[arg(long, default_value = "0")]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,

        /// Only show one type (like, comment, post, follow, skill-update)
        #[arg(long = "type")]
        kind: Option<NotificationType>,
    },

    /// Show unread notifications
    Unread,

    /// Mark one notification as read
    Read {
        /// Notification ID
        id: i64,
    },

    /// Mark everything as read
    ReadAll,
}

/// Run the notifications command.
pub async fn run(args: NotificationsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let notifications = client.notifications();
    let user_id = ctx.current_user_id(&client).await?;
    let dim = Style::new().dim();

    match args.command {
        NotificationsCommand::List {
            page,
            size,
            kind: Some(kind),
        } => {
            tracing::debug!(page, size, "type filter ignores paging");
            let list = notifications.by_type(user_id, kind).await?;
            if ctx.json_output {
                return print_json(&list);
            }
            print_header(&format!("{} notifications", kind.as_str().to_lowercase()));
            print_list(&list);
        }
        NotificationsCommand::List {
            page,
            size,
            kind: None,
        } => {
            let result = notifications.list(user_id, page, size).await?;
            if ctx.json_output {
                return print_json(&result);
            }
            print_header("Notifications");
            print_list(&result.content);
            println!();
            println!(
                "{}",
                dim.apply_to(format!(
                    "Page {} of {} ({} total)",
                    result.number + 1,
                    result.total_pages.max(1),
                    result.total_elements
                ))
            );
        }
        NotificationsCommand::Unread => {
            let list = notifications.unread(user_id).await?;
            if ctx.json_output {
                return print_json(&list);
            }
            print_header(&format!("Unread ({})", list.len()));
            print_list(&list);
        }
        NotificationsCommand::Read { id } => {
            notifications.mark_read(id).await?;
            print_ok(format!("Notification {} marked as read", id));
        }
        NotificationsCommand::ReadAll => {
            notifications.mark_all_read(user_id).await?;
            print_ok("All notifications marked as read");
        }
    }

    Ok(())
}

fn print_list(list: &[Notification]) {
    let dim = Style::new().dim();
    if list.is_empty() {
        println!("{}", dim.apply_to("Nothing here"));
        return;
    }
    for n in list {
        let marker = if n.is_read { " " } else { "•" };
        println!(
            "{} {} {:<13} {}",
            marker,
            dim.apply_to(format!("[{}]", n.notification_id)),
            n.notification_type.as_str().to_lowercase(),
            n.message
        );
    }
}
