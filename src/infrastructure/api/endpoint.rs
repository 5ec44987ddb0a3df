//! Typed catalog of backend operations.
//!
//! Every logical operation is one variant carrying its required parameters;
//! path, method, and auth requirement are exhaustive mappings, so an unknown
//! operation cannot be constructed.

/// HTTP method of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// PATCH request.
    Patch,
    /// DELETE request.
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// One logical backend operation with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Endpoint {
    // Auth
    Register,
    Login,
    Me,
    UserProfile { user_id: i64 },
    UploadProfileImage,

    // Artists
    Artists,
    Artist { id: i64 },
    CreateArtist,
    UpdateArtist { id: i64 },
    DeleteArtist { id: i64 },
    UploadArtistImage,
    UpdateArtistImage { id: i64 },
    AddAlbums { artist_id: i64 },
    DeleteAlbum { artist_id: i64, album_id: i64 },
    Clout { id: i64 },
    RemoveClout { id: i64 },

    // Feed
    Feed,
    FeedText,
    FeedImage,
    FeedVideo,
    FeedVideoUrl,
    DeleteFeedPost { kind: String, id: i64 },

    // Image posts
    ImagePosts,
    CreateImagePost,
    DeleteImagePost { id: i64 },

    // Videos
    YoutubeFeed,
    CombinedVideoFeed,
    MusicVideos,

    // Music
    UpcomingReleases,

    // Profile list
    ProfileList,
    UserProfileList { user_id: i64 },
    AddToProfileList { artist_id: i64 },
    RemoveFromProfileList { artist_id: i64 },

    // Follows
    Follow { user_id: i64 },
    Unfollow { user_id: i64 },
    Followers { user_id: i64 },
    Following { user_id: i64 },

    // Messages
    Conversations,
    CreateConversation,
    ConversationMessages { id: i64 },
    SendMessage { conversation_id: i64 },
    MarkConversationRead { id: i64 },
    UnreadCount,
    CheckDm { user_id: i64 },

    // Waitlist
    WaitlistJoin,
    WaitlistVerify,
    WaitlistEntries,
    WaitlistApprove { id: i64 },
    WaitlistReject { id: i64 },
    WaitlistToggle,
    WaitlistDelete { id: i64 },

    // Admin
    AdminStats,
    AdminApproveCreator,
    AdminWaitlistEntries,
    AdminResetUser,
}

impl Endpoint {
    /// Returns the request path with all parameters substituted.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            // Auth
            Self::Register => "/users/register".to_string(),
            Self::Login => "/users/login".to_string(),
            Self::Me => "/users/me".to_string(),
            Self::UserProfile { user_id } => format!("/users/{user_id}/profile"),
            Self::UploadProfileImage => "/users/profile-image".to_string(),

            // Artists
            Self::Artists | Self::CreateArtist => "/artists".to_string(),
            Self::Artist { id } | Self::UpdateArtist { id } | Self::DeleteArtist { id } => {
                format!("/artists/{id}")
            }
            Self::UploadArtistImage => "/artists/upload-image".to_string(),
            Self::UpdateArtistImage { id } => format!("/artists/{id}/image"),
            Self::AddAlbums { artist_id } => format!("/artists/{artist_id}/albums"),
            Self::DeleteAlbum {
                artist_id,
                album_id,
            } => format!("/artists/{artist_id}/albums/{album_id}"),
            Self::Clout { id } => format!("/artists/{id}/clout"),
            Self::RemoveClout { id } => format!("/artists/{id}/clout/remove"),

            // Feed
            Self::Feed => "/feed".to_string(),
            Self::FeedText => "/feed/text".to_string(),
            Self::FeedImage => "/feed/image".to_string(),
            Self::FeedVideo => "/feed/video".to_string(),
            Self::FeedVideoUrl => "/feed/video-url".to_string(),
            Self::DeleteFeedPost { kind, id } => format!("/feed/{kind}/{id}"),

            // Image posts
            Self::ImagePosts | Self::CreateImagePost => "/image-posts".to_string(),
            Self::DeleteImagePost { id } => format!("/image-posts/{id}"),

            // Videos
            Self::YoutubeFeed => "/art/youtube-feed".to_string(),
            Self::CombinedVideoFeed => "/art/combined-video-feed".to_string(),
            Self::MusicVideos => "/art/music-videos".to_string(),

            // Music
            Self::UpcomingReleases => "/music/upcoming".to_string(),

            // Profile list
            Self::ProfileList => "/profile/list".to_string(),
            Self::UserProfileList { user_id } => format!("/profile/user/{user_id}"),
            Self::AddToProfileList { artist_id }
            | Self::RemoveFromProfileList { artist_id } => {
                format!("/profile/list/{artist_id}")
            }

            // Follows
            Self::Follow { user_id } => format!("/users/{user_id}/follow"),
            Self::Unfollow { user_id } => format!("/users/{user_id}/unfollow"),
            Self::Followers { user_id } => format!("/users/{user_id}/followers"),
            Self::Following { user_id } => format!("/users/{user_id}/following"),

            // Messages
            Self::Conversations | Self::CreateConversation => {
                "/messages/conversations".to_string()
            }
            Self::ConversationMessages { id } => format!("/messages/conversations/{id}"),
            Self::SendMessage { conversation_id } => {
                format!("/messages/conversations/{conversation_id}")
            }
            Self::MarkConversationRead { id } => {
                format!("/messages/conversations/{id}/read")
            }
            Self::UnreadCount => "/messages/unread-count".to_string(),
            Self::CheckDm { user_id } => format!("/messages/check-dm/{user_id}"),

            // Waitlist
            Self::WaitlistJoin => "/waitlist/join".to_string(),
            Self::WaitlistVerify => "/waitlist/verify".to_string(),
            Self::WaitlistEntries => "/waitlist".to_string(),
            Self::WaitlistApprove { id } => format!("/waitlist/{id}/approve"),
            Self::WaitlistReject { id } => format!("/waitlist/{id}/reject"),
            Self::WaitlistToggle => "/waitlist/toggle".to_string(),
            Self::WaitlistDelete { id } => format!("/waitlist/{id}"),

            // Admin
            Self::AdminStats => "/admin/stats".to_string(),
            Self::AdminApproveCreator => "/admin/approve-creator".to_string(),
            Self::AdminWaitlistEntries => "/admin/waitlist-entries".to_string(),
            Self::AdminResetUser => "/admin/reset-user".to_string(),
        }
    }

    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::Register
            | Self::Login
            | Self::UploadProfileImage
            | Self::CreateArtist
            | Self::UploadArtistImage
            | Self::AddAlbums { .. }
            | Self::FeedText
            | Self::FeedImage
            | Self::FeedVideo
            | Self::FeedVideoUrl
            | Self::CreateImagePost
            | Self::AddToProfileList { .. }
            | Self::Follow { .. }
            | Self::CreateConversation
            | Self::SendMessage { .. }
            | Self::WaitlistJoin
            | Self::WaitlistVerify
            | Self::WaitlistApprove { .. }
            | Self::WaitlistReject { .. }
            | Self::WaitlistToggle
            | Self::AdminApproveCreator
            | Self::Clout { .. } => HttpMethod::Post,

            Self::UpdateArtist { .. }
            | Self::UpdateArtistImage { .. }
            | Self::RemoveClout { .. } => HttpMethod::Put,

            Self::MarkConversationRead { .. } | Self::AdminResetUser => HttpMethod::Patch,

            Self::DeleteArtist { .. }
            | Self::DeleteAlbum { .. }
            | Self::DeleteFeedPost { .. }
            | Self::DeleteImagePost { .. }
            | Self::RemoveFromProfileList { .. }
            | Self::Unfollow { .. }
            | Self::WaitlistDelete { .. } => HttpMethod::Delete,

            _ => HttpMethod::Get,
        }
    }

    /// Returns whether this operation requires a bearer token.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Register
                | Self::Login
                | Self::Artists
                | Self::Artist { .. }
                | Self::ImagePosts
                | Self::YoutubeFeed
                | Self::CombinedVideoFeed
                | Self::MusicVideos
                | Self::UpcomingReleases
                | Self::Followers { .. }
                | Self::Following { .. }
                | Self::WaitlistJoin
                | Self::WaitlistVerify
        )
    }
}
