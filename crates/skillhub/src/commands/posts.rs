//! Posts command - skill posts with media.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use console::Style;
use skillhub_client::{MediaKind, MediaUpload, Post, PostDraft};

use super::{print_header, print_json, print_ok, truncate, Context};

/// Arguments for the posts command.
#[derive(Args, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    /// Share a new post
    Create {
        /// Post text
        description: String,

        /// Skill the post is about
        #[arg(long)]
        skill: Option<i64>,

        /// Keep the post private
        #[arg(long)]
        private: bool,

        /// Image files to attach
        #[arg(long = "image")]
        images: Vec<PathBuf>,

        /// Video file to attach
        #[arg(long)]
        video: Option<PathBuf>,
    },

    /// List a user's posts (default: yourself)
    List {
        /// User ID
        #[arg(long)]
        user: Option<i64>,
    },

    /// Show a post
    Show {
        /// Post ID
        id: i64,
    },

    /// Edit a post
    Update {
        /// Post ID
        id: i64,

        /// New text
        description: String,

        /// Skill the post is about
        #[arg(long)]
        skill: Option<i64>,

        /// Make the post private
        #[arg(long)]
        private: bool,
    },

    /// Delete a post
    Delete {
        /// Post ID
        id: i64,
    },
}

/// Run the posts command.
pub async fn run(args: PostsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    match args.command {
        PostsCommand::Create {
            description,
            skill,
            private,
            images,
            video,
        } => {
            let mut media = Vec::new();
            for path in &images {
                media.push(read_upload(MediaKind::Image, path)?);
            }
            if let Some(path) = &video {
                media.push(read_upload(MediaKind::Video, path)?);
            }

            let draft = PostDraft {
                user_id: ctx.current_user_id(&client).await?,
                description,
                skill_id: skill,
                is_public: !private,
            };
            let post = client.posts().create(&draft, media).await?;
            if ctx.json_output {
                return print_json(&post);
            }
            print_ok(format!(
                "Post created {}",
                dim.apply_to(format!("[{}]", post.post_id))
            ));
        }
        PostsCommand::List { user } => {
            let user_id = match user {
                Some(id) => id,
                None => ctx.current_user_id(&client).await?,
            };
            let posts = client.posts().list_by_user(user_id).await?;
            if ctx.json_output {
                return print_json(&posts);
            }
            print_header("Posts");
            if posts.is_empty() {
                println!("{}", dim.apply_to("No posts found"));
            }
            for post in &posts {
                print_post_line(post);
            }
        }
        PostsCommand::Show { id } => {
            let post = client.posts().get(id).await?;
            if ctx.json_output {
                return print_json(&post);
            }
            print_header(&format!("Post {}", post.post_id));
            if let Some(skill) = &post.skill_name {
                println!("  {:<10} {}", dim.apply_to("skill"), skill);
            }
            if let Some(created) = post.created_at {
                println!("  {:<10} {}", dim.apply_to("created"), created);
            }
            println!();
            println!("{}", post.description.as_deref().unwrap_or(""));
            for media in &post.media {
                println!(
                    "  {} {}",
                    dim.apply_to(media.media_type.to_lowercase()),
                    media.media_url
                );
            }
        }
        PostsCommand::Update {
            id,
            description,
            skill,
            private,
        } => {
            let draft = PostDraft {
                user_id: ctx.current_user_id(&client).await?,
                description,
                skill_id: skill,
                is_public: !private,
            };
            let post = client.posts().update(id, &draft).await?;
            if ctx.json_output {
                return print_json(&post);
            }
            print_ok(format!("Post {} updated", post.post_id));
        }
        PostsCommand::Delete { id } => {
            client.posts().delete(id).await?;
            print_ok(format!("Post {} deleted", id));
        }
    }

    Ok(())
}

fn print_post_line(post: &Post) {
    let dim = Style::new().dim();
    let skill = post
        .skill_name
        .as_deref()
        .map(|s| format!(" #{}", s))
        .unwrap_or_default();
    println!(
        "{} {}{}",
        dim.apply_to(format!("[{}]", post.post_id)),
        truncate(post.description.as_deref().unwrap_or(""), 60),
        dim.apply_to(skill)
    );
}

fn read_upload(kind: MediaKind, path: &Path) -> Result<MediaUpload> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| kind.field_name().to_string());
    Ok(MediaUpload {
        kind,
        mime_type: guess_mime(path).map(str::to_string),
        file_name,
        bytes,
    })
}

fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("a/b/photo.JPG")), Some("image/jpeg"));
        assert_eq!(guess_mime(Path::new("clip.mp4")), Some("video/mp4"));
        assert_eq!(guess_mime(Path::new("notes.txt")), None);
        assert_eq!(guess_mime(Path::new("noext")), None);
    }

    #[test]
    fn test_read_upload_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        std::fs::write(&path, b"png-bytes").unwrap();

        let upload = read_upload(MediaKind::Image, &path).unwrap();
        assert_eq!(upload.file_name, "cat.png");
        assert_eq!(upload.mime_type.as_deref(), Some("image/png"));
        assert_eq!(upload.bytes, b"png-bytes");
    }
}
