//! Predicate search over the catalog.
//!
//! Queries read the backing array directly rather than the identifier
//! index - they need predicate matches, not single-key lookups. Results
//! come back unordered; callers apply the sort engine afterwards.

use super::types::GameRecord;

/// All games whose player range covers `players`.
pub fn find_by_player_count(games: &[GameRecord], players: u32) -> Vec<GameRecord> {
    games
        .iter()
        .filter(|g| g.supports_players(players))
        .cloned()
        .collect()
}
