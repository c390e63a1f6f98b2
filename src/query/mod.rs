// Catch query engine
//
// Stateless filtering and pagination over a snapshot of catch records. The
// caller owns all query state (current criteria, current page) and passes it
// in fresh on every call; the engine never retains or mutates the snapshot.

pub mod filter;
pub mod paginate;
pub mod types;

pub use filter::filter_catches;
pub use paginate::paginate;
pub use types::{DateRange, FilterCriteria, Page, PageRequest};

use crate::database::models::CatchRecord;

/// Filter a snapshot and return the requested page of the result.
pub fn query_catches(
    catches: &[CatchRecord],
    criteria: &FilterCriteria,
    request: PageRequest,
) -> Page {
    let filtered = filter_catches(catches, criteria);
    paginate(&filtered, request)
}
