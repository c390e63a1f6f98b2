// Catch statistics
// Pure aggregations over a snapshot of catch records

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::database::models::CatchRecord;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_catches: usize,
    pub unique_locations: usize,
    pub most_common_tag: Option<String>,
}

pub fn summary(catches: &[CatchRecord]) -> Summary {
    let unique_locations = catches
        .iter()
        .map(|c| c.location.as_str())
        .collect::<HashSet<_>>()
        .len();

    Summary {
        total_catches: catches.len(),
        unique_locations,
        most_common_tag: top_tags(catches, 1).into_iter().next().map(|(name, _)| name),
    }
}

/// Catches per calendar month, keyed "YYYY-MM", ascending.
pub fn monthly_counts(catches: &[CatchRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in catches {
        let month = record.date.get(..7).unwrap_or(&record.date);
        *counts.entry(month.to_string()).or_default() += 1;
    }

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort();
    out
}

/// The most used tags, descending by count. Ties break alphabetically.
pub fn top_tags(catches: &[CatchRecord], limit: usize) -> Vec<(String, usize)> {
    ranked(catches.iter().flat_map(|c| c.tags.iter()), limit)
}

/// The most fished locations, descending by count. Ties break alphabetically.
pub fn top_locations(catches: &[CatchRecord], limit: usize) -> Vec<(String, usize)> {
    ranked(catches.iter().map(|c| &c.location), limit)
}

fn ranked<'a>(items: impl Iterator<Item = &'a String>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.as_str()).or_default() += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catch(location: &str, tags: &[&str], date: &str) -> CatchRecord {
        CatchRecord {
            id: format!("catch_{}", date),
            location: location.to_string(),
            description: String::new(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            latitude: None,
            longitude: None,
            image: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let catches = vec![
            catch("Lake A", &["Bass", "sunny"], "2023-01-01"),
            catch("Lake A", &["Bass"], "2023-01-20"),
            catch("River B", &["Trout"], "2023-02-01"),
        ];

        let summary = summary(&catches);
        assert_eq!(summary.total_catches, 3);
        assert_eq!(summary.unique_locations, 2);
        assert_eq!(summary.most_common_tag, Some("Bass".to_string()));
    }

    #[test]
    fn test_summary_of_empty_snapshot() {
        let summary = summary(&[]);
        assert_eq!(summary.total_catches, 0);
        assert_eq!(summary.unique_locations, 0);
        assert_eq!(summary.most_common_tag, None);
    }

    #[test]
    fn test_most_common_tag_tie_breaks_alphabetically() {
        let catches = vec![
            catch("Lake A", &["Trout"], "2023-01-01"),
            catch("River B", &["Bass"], "2023-02-01"),
        ];

        assert_eq!(summary(&catches).most_common_tag, Some("Bass".to_string()));
    }

    #[test]
    fn test_monthly_counts_sorted_ascending() {
        let catches = vec![
            catch("Lake A", &[], "2023-02-10T08:00:00+00:00"),
            catch("Lake A", &[], "2023-01-05T08:00:00+00:00"),
            catch("River B", &[], "2023-02-20T08:00:00+00:00"),
        ];

        assert_eq!(
            monthly_counts(&catches),
            vec![("2023-01".to_string(), 1), ("2023-02".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_tags_orders_and_truncates() {
        let catches = vec![
            catch("Lake A", &["Bass", "sunny"], "2023-01-01"),
            catch("Lake A", &["Bass"], "2023-01-20"),
            catch("River B", &["Trout", "sunny"], "2023-02-01"),
            catch("Ocean C", &["Salmon"], "2023-03-01"),
        ];

        let top = top_tags(&catches, 2);
        assert_eq!(
            top,
            vec![("Bass".to_string(), 2), ("sunny".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_locations() {
        let catches = vec![
            catch("Lake A", &[], "2023-01-01"),
            catch("Lake A", &[], "2023-01-20"),
            catch("River B", &[], "2023-02-01"),
        ];

        assert_eq!(
            top_locations(&catches, 5),
            vec![("Lake A".to_string(), 2), ("River B".to_string(), 1)]
        );
    }
}
