//! Session requests.

/// Listing parameters for sessions.
pub type SessionPagination = super::Pagination;
