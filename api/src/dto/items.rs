use lf_shared::PageRequest;
use serde::Deserialize;

/// Raw `?skip=&take=` query
///
/// Kept as strings so malformed values fall back to defaults instead of
/// failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub skip: Option<String>,
    pub take: Option<String>,
}

impl PaginationQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::from_query(self.skip.as_deref(), self.take.as_deref())
    }
}
