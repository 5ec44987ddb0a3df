//! Application layer with feature flows built on the shared services.

/// Artist directory browsing.
pub mod artists;
/// Login and session lifecycle.
pub mod auth;
/// One open conversation.
pub mod chat;
/// Merged discover video feed.
pub mod discover;
/// Community feed.
pub mod feed;
/// Conversation inbox.
pub mod inbox;
/// Profile list and social graph.
pub mod profile;
/// Shared services.
pub mod services;
/// Waitlist signup.
pub mod waitlist;

pub use artists::ArtistDirectory;
pub use auth::AuthSession;
pub use chat::ChatThread;
pub use discover::DiscoverFeed;
pub use feed::FeedWall;
pub use inbox::ConversationInbox;
pub use profile::ProfileService;
pub use waitlist::WaitlistSignup;
