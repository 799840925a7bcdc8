//! Comments command.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use super::{print_header, print_json, print_ok, Context};

/// Arguments for the comments command.
#[derive(Args, Debug)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub command: CommentsCommand,
}

#[derive(Subcommand, Debug)]
pub enum CommentsCommand {
    /// Comment on a post
    Add {
        /// Post ID
        post: i64,

        /// Comment text
        text: String,
    },

    /// List comments on a post
    List {
        /// Post ID
        post: i64,
    },

    /// Edit one of your comments
    Edit {
        /// Comment ID
        id: i64,

        /// New text
        text: String,
    },

    /// Delete one of your comments
    Delete {
        /// Comment ID
        id: i64,
    },
}

/// Run the comments command.
pub async fn run(args: CommentsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let comments = client.comments();
    let dim = Style::new().dim();

    match args.command {
        CommentsCommand::Add { post, text } => {
            let user_id = ctx.current_user_id(&client).await?;
            let comment = comments.add(post, user_id, &text).await?;
            if ctx.json_output {
                return print_json(&comment);
            }
            print_ok(format!(
                "Comment added {}",
                dim.apply_to(format!("[{}]", comment.comment_id))
            ));
        }
        CommentsCommand::List { post } => {
            let list = comments.list_for_post(post).await?;
            if ctx.json_output {
                return print_json(&list);
            }
            print_header(&format!("Comments on post {}", post));
            if list.is_empty() {
                println!("{}", dim.apply_to("No comments yet"));
            }
            for comment in &list {
                let author = comment
                    .commented_user_name
                    .clone()
                    .unwrap_or_else(|| format!("user {}", comment.user_id));
                println!(
                    "{} {}: {}",
                    dim.apply_to(format!("[{}]", comment.comment_id)),
                    console::style(author).bold(),
                    comment.comment_text
                );
            }
        }
        CommentsCommand::Edit { id, text } => {
            let user_id = ctx.current_user_id(&client).await?;
            let comment = comments.update(id, user_id, &text).await?;
            if ctx.json_output {
                return print_json(&comment);
            }
            print_ok(format!("Comment {} updated", comment.comment_id));
        }
        CommentsCommand::Delete { id } => {
            let user_id = ctx.current_user_id(&client).await?;
            comments.delete(user_id, id).await?;
            print_ok(format!("Comment {} deleted", id));
        }
    }

    Ok(())
}
