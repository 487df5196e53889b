//! Name search over member records
//!
//! Case-insensitive substring matching on full name and branch name.
//! Matching is diacritic-sensitive: no Unicode normalization is applied,
//! so a query must use the same accents as the stored name.

use crate::traits::Member;

/// Default result cap for interactive search
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Match strength, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Exact,
    Prefix,
    Substring,
}

/// Search members whose full name or branch name contains `query`.
///
/// The query is trimmed; an empty query yields no results, never the whole
/// record set. Results are deterministic: exact and prefix matches rank
/// before plain substring matches, ties break by name length ascending and
/// then by id.
pub fn search<'a>(members: &'a [Member], query: &str, limit: usize) -> Vec<&'a Member> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<(Rank, usize, i64, &Member)> = members
        .iter()
        .filter_map(|m| {
            let name_rank = rank_field(&m.full_name, &needle);
            let branch_rank = m
                .branch_name
                .as_deref()
                .and_then(|b| rank_field(b, &needle));
            let best = match (name_rank, branch_rank) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            }?;
            Some((best, m.full_name.chars().count(), m.id, m))
        })
        .collect();

    hits.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));
    hits.truncate(limit);
    hits.into_iter().map(|(_, _, _, m)| m).collect()
}

fn rank_field(field: &str, needle: &str) -> Option<Rank> {
    let haystack = field.to_lowercase();
    if haystack == *needle {
        Some(Rank::Exact)
    } else if haystack.starts_with(needle) {
        Some(Rank::Prefix)
    } else if haystack.contains(needle) {
        Some(Rank::Substring)
    } else {
        None
    }
}
