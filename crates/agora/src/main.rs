//! Operator CLI for the agora data layer.
//!
//! Usage:
//!   agora migrate
//!   agora post --profile-id <uuid> --content "hello"
//!   agora page --number 2
//!   agora replies <thread-id>
//!   agora profile <name>

use agora::{NewThread, ThreadForest, ThreadPage};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "agora", about = "Threaded-discussion data layer over PostgreSQL")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Post a new thread
    Post {
        /// Authoring profile id
        #[arg(long)]
        profile_id: Uuid,
        /// Thread to reply to; omit to post at top level
        #[arg(long)]
        reply_to: Option<Uuid>,
        /// Post body
        #[arg(long)]
        content: String,
        /// Attached image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Print a page of top-level threads, newest first
    Page {
        /// 1-indexed page number
        #[arg(long, default_value_t = 1)]
        number: i64,
    },
    /// Print a thread and its full reply tree
    Replies {
        /// Root thread id
        thread_id: Uuid,
    },
    /// Look up a public profile by display name
    Profile {
        /// Display name, exact match
        profile_name: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut conn = agora::establish_connection()?;

    match cli.command {
        Command::Migrate => {
            agora::run_migrations(&mut conn)?;
            tracing::info!("Migrations up to date");
        }
        Command::Post {
            profile_id,
            reply_to,
            content,
            image_url,
        } => {
            let message = agora::insert_thread(
                &mut conn,
                NewThread {
                    thread_profile_id: profile_id,
                    thread_reply_thread_id: reply_to,
                    thread_content: content,
                    thread_image_url: image_url,
                },
            )?;
            println!("{message}");
        }
        Command::Page { number } => {
            let page = ThreadPage::new(number)?;
            let threads = agora::select_page_of_threads(&mut conn, page)?;
            tracing::info!(page = page.number(), count = threads.len(), "Fetched page");
            println!("{}", serde_json::to_string_pretty(&threads)?);
        }
        Command::Replies { thread_id } => {
            let threads = agora::select_all_reply_threads_by_thread_id(&mut conn, thread_id)?;
            tracing::info!(count = threads.len(), "Fetched reply tree");
            // Breadth-first display order: root, then replies by depth
            let forest = ThreadForest::from_threads(threads);
            println!(
                "{}",
                serde_json::to_string_pretty(&forest.subtree_of(thread_id))?
            );
        }
        Command::Profile { profile_name } => {
            let profile = agora::select_public_profile_by_profile_name(&mut conn, &profile_name)?;
            match profile {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => println!("null"),
            }
        }
    }

    Ok(())
}
