//! Pagination related types for list endpoints
//!
//! Listing endpoints page with an offset (`skip`) and a page size (`take`)
//! and report the total number of matching records so clients can compute
//! the page count themselves.

use serde::{Deserialize, Serialize};

/// Offset used when the client sends none
pub const DEFAULT_SKIP: u32 = 0;
/// Page size used when the client sends none
pub const DEFAULT_TAKE: u32 = 3;
/// Largest page a client may request
pub const MAX_TAKE: u32 = 100;

/// Skip/take pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of records to skip
    pub skip: u32,
    /// Number of records to return
    pub take: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            take: DEFAULT_TAKE,
        }
    }
}

impl PageRequest {
    /// Create a new page request, clamping `take` into `1..=MAX_TAKE`
    pub fn new(skip: u32, take: u32) -> Self {
        let take = if take == 0 { DEFAULT_TAKE } else { take.min(MAX_TAKE) };
        Self { skip, take }
    }

    /// Build from raw query-string values.
    ///
    /// Never fails: absent, non-numeric or negative values fall back to the
    /// defaults, and a zero `take` is treated as absent.
    pub fn from_query(skip: Option<&str>, take: Option<&str>) -> Self {
        let skip = parse_non_negative(skip).unwrap_or(DEFAULT_SKIP);
        let take = parse_non_negative(take)
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_TAKE);
        Self::new(skip, take)
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.skip)
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.take)
    }
}

fn parse_non_negative(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<i64>().ok()?;
    if value < 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

/// One page of results plus the total count of matching records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items in this page
    pub items: Vec<T>,

    /// Total number of records matching the listing's filter
    pub total_items_count: u64,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(items: Vec<T>, total_items_count: u64) -> Self {
        Self {
            items,
            total_items_count,
        }
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items_count: self.total_items_count,
        }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
