// Query types - filter criteria and pagination parameters
// All query state lives in the caller and is supplied on every call

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::database::models::CatchRecord;

/// Inclusive timestamp bounds. An absent bound is unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    /// Whether a timestamp falls inside the range.
    ///
    /// Timestamps are ISO-8601 strings in a uniform UTC encoding, so
    /// lexicographic comparison is chronological comparison. A date-only
    /// bound behaves as midnight, matching how the UI supplies it.
    pub fn contains(&self, date: &str) -> bool {
        self.from.as_deref().map_or(true, |from| date >= from)
            && self.to.as_deref().map_or(true, |to| date <= to)
    }
}

/// The combined set of active filter dimensions.
/// Every field defaults to inactive (matches everything).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub location: String,
    pub species: String,
    pub date_range: DateRange,
}

impl FilterCriteria {
    /// True when no dimension is active, i.e. the identity filter.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.location.is_empty()
            && self.species.is_empty()
            && self.date_range.from.is_none()
            && self.date_range.to.is_none()
    }
}

/// A 1-based page request. Non-positive parameters are caller misuse and
/// are rejected here, at construction, so `paginate` itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Result<Self> {
        ensure!(page_number > 0, "page_number must be positive");
        ensure!(page_size > 0, "page_size must be positive");
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One contiguous slice of the filtered sequence, plus page-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<CatchRecord>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}
