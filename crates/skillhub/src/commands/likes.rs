//! Likes command.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{print_json, print_ok, Context};

/// Arguments for the likes command.
#[derive(Args, Debug)]
pub struct LikesArgs {
    #[command(subcommand)]
    pub command: LikesCommand,
}

#[derive(Subcommand, Debug)]
pub enum LikesCommand {
    /// Like a post
    Add {
        /// Post ID
        post: i64,
    },

    /// Remove your like from a post
    Remove {
        /// Post ID
        post: i64,
    },

    /// Show how many likes a post has and whether you liked it
    Show {
        /// Post ID
        post: i64,
    },
}

/// Run the likes command.
pub async fn run(args: LikesArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let user_id = ctx.current_user_id(&client).await?;
    let likes = client.likes();

    match args.command {
        LikesCommand::Add { post } => {
            likes.like(post, user_id).await?;
            print_ok(format!("Liked post {}", post));
        }
        LikesCommand::Remove { post } => {
            likes.unlike(post, user_id).await?;
            print_ok(format!("Unliked post {}", post));
        }
        LikesCommand::Show { post } => {
            let count = likes.count(post).await?;
            let liked = likes.has_liked(post, user_id).await;
            if ctx.json_output {
                return print_json(&serde_json::json!({
                    "postId": post,
                    "count": count,
                    "liked": liked,
                }));
            }
            let heart = if liked { "♥" } else { "♡" };
            println!("{} {} like(s)", heart, count);
        }
    }

    Ok(())
}
