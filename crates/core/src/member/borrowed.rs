//! Ordered sequence of a member's currently-borrowed game IDs.
//!
//! A minimal list abstraction: indexed get, append, positional insert and
//! remove, first-match removal. The borrow/return state machine guarantees
//! at most one outstanding borrow of a given game per member, so
//! first-match removal is sufficient.

use serde::{Deserialize, Serialize};

/// A member's live borrowed-game IDs, in borrow order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowedGames {
    items: Vec<String>,
}

impl BorrowedGames {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Item at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Append a game ID to the end.
    pub fn add(&mut self, game_id: impl Into<String>) {
        self.items.push(game_id.into());
    }

    /// Insert at `index` (0 = front). Returns false on an invalid index.
    pub fn insert(&mut self, index: usize, game_id: impl Into<String>) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, game_id.into());
        true
    }

    /// Remove the item at `index`. Returns false on an invalid index.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Remove the first entry matching `game_id`. Returns whether a match
    /// was removed.
    pub fn remove_first(&mut self, game_id: &str) -> bool {
        match self.items.iter().position(|id| id == game_id) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    /// Whether the list holds `game_id`.
    pub fn contains(&self, game_id: &str) -> bool {
        self.items.iter().any(|id| id == game_id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is borrowed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the IDs in borrow order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
