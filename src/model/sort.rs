//! Sort orders and vote directions.

/// Sort order for link listings. Selects the listing path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSort {
    /// Currently trending links
    Hot,
    /// Newest links first
    New,
    /// Most disputed links
    Controversial,
    /// Highest scored links
    Top,
}

impl LinkSort {
    /// Path segment for this sort, e.g. `/hot`.
    pub fn path(&self) -> &'static str {
        match self {
            LinkSort::Hot => "/hot",
            LinkSort::New => "/new",
            LinkSort::Controversial => "/controversial",
            LinkSort::Top => "/top",
        }
    }
}

/// Sort order for comment trees. Sent as the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSort {
    /// Best comments first ("confidence" on the wire)
    Confidence,
    /// Highest scored first
    Top,
    /// Newest first
    New,
    /// Currently trending
    Hot,
    /// Most disputed first
    Controversial,
    /// Oldest first
    Old,
    /// Random order
    Random,
}

impl CommentSort {
    /// Parameter value for this sort.
    pub fn as_param(&self) -> &'static str {
        match self {
            CommentSort::Confidence => "confidence",
            CommentSort::Top => "top",
            CommentSort::New => "new",
            CommentSort::Hot => "hot",
            CommentSort::Controversial => "controversial",
            CommentSort::Old => "old",
            CommentSort::Random => "random",
        }
    }
}

/// Sort order for link search. Sent as the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSort {
    /// Best match first
    Relevance,
    /// Newest first
    New,
    /// Highest scored first
    Top,
}

impl SearchSort {
    /// Parameter value for this sort.
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchSort::Relevance => "relevance",
            SearchSort::New => "new",
            SearchSort::Top => "top",
        }
    }
}

/// Direction of a vote on a thing.
///
/// The API encodes the direction as `1`, `0` or `-1`; `Revoke` withdraws a
/// previously cast vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    /// Upvote
    Up,
    /// Withdraw an existing vote
    Revoke,
    /// Downvote
    Down,
}

impl VoteDirection {
    /// Wire value for the `dir` parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            VoteDirection::Up => "1",
            VoteDirection::Revoke => "0",
            VoteDirection::Down => "-1",
        }
    }
}
