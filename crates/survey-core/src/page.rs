//! Offset pagination with a clamped page size.

use serde::{Deserialize, Serialize};

/// Smallest page a caller may request.
pub const MIN_PAGE_LIMIT: u32 = 1;

/// Largest page a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// An offset/limit window over an id-ordered listing.
///
/// `limit` is always within `MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    skip: u32,
    limit: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(skip: u32, limit: u32) -> Self {
        let limit = if limit < MIN_PAGE_LIMIT {
            MIN_PAGE_LIMIT
        } else if limit > MAX_PAGE_LIMIT {
            MAX_PAGE_LIMIT
        } else {
            limit
        };
        Self { skip, limit }
    }

    #[must_use]
    pub const fn skip(self) -> u32 {
        self.skip
    }

    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_LIMIT)
    }
}
