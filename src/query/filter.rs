// Catch filtering
// Pure predicate evaluation over a snapshot of catch records

use super::types::FilterCriteria;
use crate::database::models::CatchRecord;

/// Return the catches that satisfy every active filter dimension, in the
/// same relative order as the input. Deterministic, no side effects; an
/// empty result is a valid result, not an error.
pub fn filter_catches(catches: &[CatchRecord], criteria: &FilterCriteria) -> Vec<CatchRecord> {
    if criteria.is_empty() {
        return catches.to_vec();
    }

    let matched: Vec<CatchRecord> = catches
        .iter()
        .filter(|c| matches_criteria(c, criteria))
        .cloned()
        .collect();

    log::debug!("Filter matched {} of {} catches", matched.len(), catches.len());
    matched
}

fn matches_criteria(record: &CatchRecord, criteria: &FilterCriteria) -> bool {
    matches_search_term(record, &criteria.search_term)
        && matches_location(record, &criteria.location)
        && matches_species(record, &criteria.species)
        && criteria.date_range.contains(&record.date)
}

/// Free-text search across location, description, and tags.
fn matches_search_term(record: &CatchRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contains_ci(&record.location, term)
        || contains_ci(&record.description, term)
        || record.tags.iter().any(|tag| contains_ci(tag, term))
}

fn matches_location(record: &CatchRecord, location: &str) -> bool {
    location.is_empty() || contains_ci(&record.location, location)
}

/// Species is matched against the tag list; any tag may carry it.
fn matches_species(record: &CatchRecord, species: &str) -> bool {
    species.is_empty() || record.tags.iter().any(|tag| contains_ci(tag, species))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
