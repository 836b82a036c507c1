//! Comparison policies for catalog listings.
//!
//! Every comparator resolves ties down to the game ID, so two distinct
//! records never compare equal - listings are deterministic regardless of
//! the catalog's internal order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::sort::merge_sort;

use super::types::GameRecord;

/// Supported listing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Title A -> Z (case-insensitive), then ID.
    TitleAsc,
    /// Title Z -> A (case-insensitive), then ID.
    TitleDesc,
    /// Borrow count low -> high, then title, then ID.
    BorrowCountAsc,
    /// Borrow count high -> low, then title, then ID.
    BorrowCountDesc,
    /// Publication year old -> new, then title, then ID.
    YearAsc,
}

impl SortOrder {
    /// Compare two records under this policy.
    pub fn compare(&self, a: &GameRecord, b: &GameRecord) -> Ordering {
        match self {
            SortOrder::TitleAsc => by_title(a, b),
            SortOrder::TitleDesc => {
                // Only the primary key flips; the ID tie-break stays
                // ascending.
                title_key(b)
                    .cmp(&title_key(a))
                    .then_with(|| a.id.cmp(&b.id))
            }
            SortOrder::BorrowCountAsc => by_borrow_count(a, b),
            SortOrder::BorrowCountDesc => {
                // Only the primary key flips; tie-breaks stay ascending so
                // equal-count games still list alphabetically.
                b.borrow_count
                    .cmp(&a.borrow_count)
                    .then_with(|| title_key(a).cmp(&title_key(b)))
                    .then_with(|| a.id.cmp(&b.id))
            }
            SortOrder::YearAsc => by_year(a, b),
        }
    }
}

fn title_key(g: &GameRecord) -> String {
    g.title.to_lowercase()
}

fn by_title(a: &GameRecord, b: &GameRecord) -> Ordering {
    title_key(a)
        .cmp(&title_key(b))
        .then_with(|| a.id.cmp(&b.id))
}

fn by_borrow_count(a: &GameRecord, b: &GameRecord) -> Ordering {
    a.borrow_count
        .cmp(&b.borrow_count)
        .then_with(|| title_key(a).cmp(&title_key(b)))
        .then_with(|| a.id.cmp(&b.id))
}

fn by_year(a: &GameRecord, b: &GameRecord) -> Ordering {
    a.year_published
        .cmp(&b.year_published)
        .then_with(|| title_key(a).cmp(&title_key(b)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Copy the given records and merge-sort the copy under `order`.
pub fn sorted(games: &[GameRecord], order: SortOrder) -> Vec<GameRecord> {
    let mut buffer = games.to_vec();
    merge_sort(&mut buffer, &|a, b| order.compare(a, b));
    buffer
}
