//! Enums selecting API paths.

/// Message box for `/message/{box}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageWhere {
    /// Received messages
    Inbox,
    /// Unread messages
    Unread,
    /// Sent messages
    Sent,
}

impl MessageWhere {
    /// Path segment for this box.
    pub fn path(&self) -> &'static str {
        match self {
            MessageWhere::Inbox => "/inbox",
            MessageWhere::Unread => "/unread",
            MessageWhere::Sent => "/sent",
        }
    }
}

/// Content section for `/user/{username}/{where}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserContent {
    /// Mixed links and comments
    Overview,
    /// Submitted links
    Submitted,
    /// Authored comments
    Comments,
    /// Upvoted things
    Liked,
    /// Downvoted things
    Disliked,
    /// Hidden things
    Hidden,
    /// Saved things
    Saved,
    /// Gilded things
    Gilded,
}

impl UserContent {
    /// Path segment for this section.
    pub fn path(&self) -> &'static str {
        match self {
            UserContent::Overview => "/overview",
            UserContent::Submitted => "/submitted",
            UserContent::Comments => "/comments",
            UserContent::Liked => "/liked",
            UserContent::Disliked => "/disliked",
            UserContent::Hidden => "/hidden",
            UserContent::Saved => "/saved",
            UserContent::Gilded => "/gilded",
        }
    }
}

/// Category for the sitewide subreddit listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubredditsWhere {
    /// Most active subreddits
    Popular,
    /// Recently created subreddits
    New,
    /// Gold-only subreddits
    Gold,
    /// Default front-page subreddits
    Default,
}

impl SubredditsWhere {
    /// Listing path for this category.
    pub fn path(&self) -> &'static str {
        match self {
            SubredditsWhere::Popular => "/subreddits/popular",
            SubredditsWhere::New => "/subreddits/new",
            SubredditsWhere::Gold => "/subreddits/gold",
            SubredditsWhere::Default => "/subreddits/default",
        }
    }
}

/// Relationship filter for the authenticated user's subreddits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubredditsMineWhere {
    /// Subreddits the user subscribes to
    Subscriber,
    /// Subreddits the user is an approved submitter in
    Contributor,
    /// Subreddits the user moderates
    Moderator,
}

impl SubredditsMineWhere {
    /// Listing path for this relationship.
    pub fn path(&self) -> &'static str {
        match self {
            SubredditsMineWhere::Subscriber => "/subreddits/mine/subscriber",
            SubredditsMineWhere::Contributor => "/subreddits/mine/contributor",
            SubredditsMineWhere::Moderator => "/subreddits/mine/moderator",
        }
    }
}
