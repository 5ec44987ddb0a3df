//! Domain entity definitions.

mod artist;
mod conversation;
mod feed;
mod message;
mod release;
mod token;
mod user;
mod video;
mod waitlist;

pub use artist::{
    Album, Artist, ArtistImageUpload, CloutResponse, PaginatedArtists, ProfileList,
    SingleArtistResponse,
};
pub use conversation::Conversation;
pub use feed::{FeedPost, PostType};
pub use message::{CheckDmResponse, Message, MessagesPage, UnreadCount};
pub use release::UpcomingRelease;
pub use token::AuthToken;
pub use user::{FollowUser, LoginResponse, ProfileImageUpload, User};
pub use video::{DiscoverVideo, MusicVideo, VideoPost};
pub use waitlist::{WaitlistEntry, WaitlistJoinResponse};
