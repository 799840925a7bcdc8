//! Followers command - the follow graph.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::Follower;

use super::{print_header, print_json, print_ok, Context};

/// Arguments for the followers command.
#[derive(Args, Debug)]
pub struct FollowersArgs {
    #[command(subcommand)]
    pub command: FollowersCommand,
}

#[derive(Subcommand, Debug)]
pub enum FollowersCommand {
    /// Follow a user
    Follow {
        /// User ID to follow
        user: i64,
    },

    /// Stop following a user
    Unfollow {
        /// User ID to unfollow
        user: i64,
    },

    /// Who follows a user (default: yourself)
    List {
        /// User ID
        #[arg(long)]
        user: Option<i64>,
    },

    /// Who a user follows (default: yourself)
    Following {
        /// User ID
        #[arg(long)]
        user: Option<i64>,
    },

    /// Follower and following counts
    Stats {
        /// User ID
        #[arg(long)]
        user: Option<i64>,
    },
}

/// Run the followers command.
pub async fn run(args: FollowersArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let followers = client.followers();

    match args.command {
        FollowersCommand::Follow { user } => {
            let me = ctx.current_user_id(&client).await?;
            if followers.is_following(user, me).await? {
                println!("Already following user {}", user);
                return Ok(());
            }
            followers.follow(user, me).await?;
            print_ok(format!("Now following user {}", user));
        }
        FollowersCommand::Unfollow { user } => {
            let me = ctx.current_user_id(&client).await?;
            followers.unfollow(user, me).await?;
            print_ok(format!("Unfollowed user {}", user));
        }
        FollowersCommand::List { user } => {
            let user_id = resolve_user(ctx, &client, user).await?;
            let list = followers.followers(user_id).await?;
            print_follows(ctx, "Followers", &list, |f| f.follower_user_id)?;
        }
        FollowersCommand::Following { user } => {
            let user_id = resolve_user(ctx, &client, user).await?;
            let list = followers.following(user_id).await?;
            print_follows(ctx, "Following", &list, |f| f.user_id)?;
        }
        FollowersCommand::Stats { user } => {
            let user_id = resolve_user(ctx, &client, user).await?;
            let follower_count = followers.follower_count(user_id).await?;
            let following_count = followers.following_count(user_id).await?;
            if ctx.json_output {
                return print_json(&serde_json::json!({
                    "userId": user_id,
                    "followers": follower_count,
                    "following": following_count,
                }));
            }
            println!("{} followers · {} following", follower_count, following_count);
        }
    }

    Ok(())
}

async fn resolve_user(
    ctx: &Context,
    client: &skillhub_client::SkillHubClient,
    user: Option<i64>,
) -> Result<i64> {
    match user {
        Some(id) => Ok(id),
        None => ctx.current_user_id(client).await,
    }
}

fn print_follows(
    ctx: &Context,
    title: &str,
    list: &[Follower],
    other_id: impl Fn(&Follower) -> i64,
) -> Result<()> {
    if ctx.json_output {
        return print_json(list);
    }
    let dim = Style::new().dim();
    print_header(title);
    if list.is_empty() {
        println!("{}", dim.apply_to("Nobody yet"));
    }
    for follow in list {
        let id = other_id(follow);
        // The backend only names the follower side of the edge.
        let name = if id == follow.follower_user_id {
            follow.follower_user_name.clone()
        } else {
            None
        };
        println!(
            "{} {}",
            dim.apply_to(format!("[{}]", id)),
            name.unwrap_or_else(|| format!("user {}", id))
        );
    }
    Ok(())
}
