//! Homepage listing composition: filtering, grouping, curated ordering.
//!
//! All functions here are pure views over the in-memory record list; the UI
//! layer re-derives the filtered/grouped view on every input change.

use rustc_hash::FxHashMap;

use crate::catalog::CostRecord;

/// Category display order for the homepage. Grouped output follows this
/// list exactly; categories not listed here are omitted from grouped views.
pub const CATEGORY_ORDER: [&str; 17] = [
    "Home Improvement",
    "Home Systems",
    "Home Services",
    "Outdoor & Property",
    "Electronics",
    "Digital & Marketing",
    "Legal & Business",
    "Finance & Insurance",
    "Health & Wellness",
    "Life Events",
    "Real Estate",
    "Travel & Leisure",
    "Vehicles",
    "Education",
    "Pet Services",
    "Transportation",
    "Utilities",
];

/// Curated slugs for the homepage "popular" rail.
pub const POPULAR_SLUGS: [&str; 6] = [
    "a-bathroom-remodel",
    "a-kitchen-remodel",
    "a-wedding",
    "a-roof-replacement",
    "a-small-business-website",
    "invisalign",
];

/// Case-insensitive substring filter against topic, title, and category.
/// A blank or whitespace-only query returns all records in original order.
pub fn filter_records<'a>(records: &'a [CostRecord], query: &str) -> Vec<&'a CostRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| {
            r.topic.to_lowercase().contains(&query)
                || r.title.to_lowercase().contains(&query)
                || r.category.to_lowercase().contains(&query)
        })
        .collect()
}

/// Group records by category, ordered per `CATEGORY_ORDER`. Record order
/// within a category is preserved; unlisted categories are dropped.
pub fn group_by_category<'a>(
    records: &[&'a CostRecord],
) -> Vec<(&'static str, Vec<&'a CostRecord>)> {
    let mut by_category: FxHashMap<&'a str, Vec<&'a CostRecord>> = FxHashMap::default();
    for &record in records {
        by_category
            .entry(record.category.as_str())
            .or_default()
            .push(record);
    }

    CATEGORY_ORDER
        .iter()
        .filter_map(|category| by_category.remove(*category).map(|group| (*category, group)))
        .collect()
}

/// Filter then group: the view the homepage recomputes on every keystroke.
pub fn filter_and_group<'a>(
    records: &'a [CostRecord],
    query: &str,
) -> Vec<(&'static str, Vec<&'a CostRecord>)> {
    group_by_category(&filter_records(records, query))
}

/// Resolve the curated popular slugs against the catalog. Missing slugs are
/// skipped silently.
pub fn popular<'a>(records: &'a [CostRecord]) -> Vec<&'a CostRecord> {
    POPULAR_SLUGS
        .iter()
        .filter_map(|slug| records.iter().find(|r| r.slug == *slug))
        .collect()
}
