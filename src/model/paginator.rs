//! Pagination cursors for listing endpoints.

/// Caller-supplied cursors and page size for listing calls.
///
/// Rendered into query parameters and merged into whatever parameters the
/// operation itself requires. An empty paginator renders to no parameters and
/// requests the first page at the server's default size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paginator {
    /// Fullname cursor: return items after this one
    pub after: Option<String>,
    /// Fullname cursor: return items before this one
    pub before: Option<String>,
    /// Maximum number of items per page
    pub limit: Option<u32>,
    /// Number of items already seen in the listing
    pub count: Option<u32>,
}

impl Paginator {
    /// First page at the server's default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page following the given cursor.
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Page preceding the given cursor.
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of items already seen.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Renders the cursors into query parameters.
    pub fn parameters(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(after) = &self.after {
            params.push(("after".to_string(), after.clone()));
        }
        if let Some(before) = &self.before {
            params.push(("before".to_string(), before.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(count) = self.count {
            params.push(("count".to_string(), count.to_string()));
        }
        params
    }
}
