use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use backbeat::application::waitlist::join_error_message;
use backbeat::application::{
    ArtistDirectory, AuthSession, ChatThread, ConversationInbox, DiscoverFeed, WaitlistSignup,
};
use backbeat::domain::ApiError;
use backbeat::infrastructure::{ApiClient, AppConfig, CliArgs, Command, KeyringCredentialStore};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn user_error(error: ApiError) -> color_eyre::eyre::Report {
    eyre!(error.user_message())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let mut config = AppConfig::load(args.config.as_deref());
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if let Some(path) = args.log_path {
        config.log_path = Some(path);
    }
    if let Some(base_url) = args.api_base_url {
        config.api_base_url = base_url;
    }

    init_logging(&config)?;
    info!(version = backbeat::VERSION, "Starting Backbeat");

    let credentials = Arc::new(KeyringCredentialStore::new());
    let client = Arc::new(ApiClient::new(
        config.api_base_url.clone(),
        credentials.clone(),
    )?);
    let auth = AuthSession::new(Arc::clone(&client), credentials);

    match args.command {
        Command::Login { username, password } => {
            let user = auth.login(&username, &password).await.map_err(user_error)?;
            println!("Logged in as {} (id {})", user.username, user.id);
        }
        Command::Logout => {
            auth.logout().await;
            println!("Logged out.");
        }
        Command::Me => {
            let user = auth.current_user().await.map_err(user_error)?;
            println!("{} (id {})", user.username, user.id);
            if let Some(email) = user.email {
                println!("email: {email}");
            }
            if let Some(role) = user.role {
                println!("role: {role}");
            }
        }
        Command::Artists { search, pages } => {
            let directory = ArtistDirectory::new(Arc::clone(&client), config.page_size);
            directory
                .load_first_page(search.as_deref())
                .await
                .map_err(user_error)?;

            for _ in 1..pages {
                if !directory.has_more() {
                    break;
                }
                directory.load_more().await;
            }

            for artist in directory.artists() {
                let genre = artist.genre.as_deref().unwrap_or("-");
                println!("{:>6}  {}  [{genre}]", artist.artist_id, artist.artist_name);
            }
        }
        Command::Conversations => {
            let inbox = ConversationInbox::new(Arc::clone(&client));
            inbox.refresh_unread_count().await;
            let conversations = inbox.load().await.map_err(user_error)?;

            println!("{} unread message(s)", inbox.unread_count());
            for conversation in conversations {
                let who = conversation.other_username.as_deref().unwrap_or("?");
                let preview = conversation.last_message.as_deref().unwrap_or("");
                println!("{:>6}  {who}: {preview}", conversation.conversation_id);
            }
        }
        Command::Messages { conversation_id } => {
            let thread = ChatThread::new(Arc::clone(&client), conversation_id);
            let messages = thread.load().await.map_err(user_error)?;
            thread.mark_read().await;

            for message in messages {
                let sender = message
                    .sender_username
                    .unwrap_or_else(|| message.sender_id.to_string());
                println!("[{}] {sender}: {}", message.created_at, message.content);
            }
        }
        Command::Videos => {
            let feed = DiscoverFeed::new(Arc::clone(&client));
            let videos = feed.load_videos().await;

            if videos.is_empty() {
                println!("No videos available.");
            }
            for video in videos {
                let by = video.username.as_deref().unwrap_or("-");
                println!("[{}] {}  ({by})", video.source, video.title);
            }
        }
        Command::Waitlist { email, full_name } => {
            let signup = WaitlistSignup::new(Arc::clone(&client));
            match signup.join(&email, &full_name).await {
                Ok(response) => println!("{}", response.message),
                Err(error) => return Err(eyre!(join_error_message(&error))),
            }
        }
    }

    Ok(())
}
