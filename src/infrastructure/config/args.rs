use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::app_config::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "backbeat",
    version,
    about = "Terminal client for the Backbeat music discovery network",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// API base URL override.
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token.
    Login {
        /// Account username.
        username: String,
        /// Account password.
        #[arg(long, env = "BACKBEAT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show the authenticated user.
    Me,
    /// Browse the artist directory.
    Artists {
        /// Filter by name.
        #[arg(long)]
        search: Option<String>,
        /// Number of pages to fetch.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// List conversations with unread counts.
    Conversations,
    /// Show one conversation's recent messages.
    Messages {
        /// Conversation to open.
        conversation_id: i64,
    },
    /// Show the merged discover video feed.
    Videos,
    /// Join the waitlist.
    Waitlist {
        /// Signup email.
        email: String,
        /// Signup name.
        full_name: String,
    },
}
