//! Catalog store - the owned sequence of game records plus its identifier
//! index.
//!
//! The store is append-mostly: inserts go to the end and index the new
//! position; deletes compact the backing array (every later record shifts
//! down one slot) and therefore trigger a full index rebuild. Insertion
//! order carries no meaning - presentation order always comes from the
//! sort engine.

use tracing::{debug, info};

use crate::error::LibraryError;
use crate::index::GameIndex;

use super::types::GameRecord;

/// Owned game collection with O(1) average lookup by ID.
#[derive(Debug)]
pub struct CatalogStore {
    games: Vec<GameRecord>,
    index: GameIndex,
    max_games: usize,
}

impl CatalogStore {
    /// Create an empty store with a fixed capacity.
    pub fn new(max_games: usize) -> Self {
        Self {
            games: Vec::new(),
            index: GameIndex::new(),
            max_games,
        }
    }

    /// Insert a new game at the end of the array and index its position.
    ///
    /// Fails with `CapacityExceeded` at the fixed maximum and with
    /// `DuplicateGameId` when the ID is already indexed.
    pub fn insert(&mut self, record: GameRecord) -> Result<(), LibraryError> {
        if self.games.len() >= self.max_games {
            return Err(LibraryError::CapacityExceeded {
                what: "game",
                max: self.max_games,
            });
        }
        if self.index.search(&record.id).is_some() {
            return Err(LibraryError::DuplicateGameId(record.id));
        }

        let position = self.games.len();
        self.index.insert(&record.id, position);
        debug!(id = %record.id, position, "game indexed");
        self.games.push(record);
        Ok(())
    }

    /// Remove a game by ID, compacting the array and rebuilding the index.
    ///
    /// A borrowed game cannot be removed. On failure neither the array nor
    /// the index changes.
    pub fn remove(&mut self, id: &str) -> Result<GameRecord, LibraryError> {
        let position = self
            .index
            .search(id)
            .ok_or_else(|| LibraryError::GameNotFound(id.to_string()))?;

        let record = &self.games[position];
        if let Some(borrower) = &record.borrowed_by {
            return Err(LibraryError::GameCurrentlyBorrowed {
                game_id: id.to_string(),
                borrower: borrower.clone(),
            });
        }

        // Vec::remove shifts every later record down one slot, which
        // invalidates all indexed positions above it.
        let removed = self.games.remove(position);
        self.index
            .rebuild(self.games.iter().enumerate().map(|(i, g)| (g.id.as_str(), i)));
        info!(id = %removed.id, remaining = self.games.len(), "game removed");
        Ok(removed)
    }

    /// Look up a game by ID through the index.
    pub fn get(&self, id: &str) -> Result<&GameRecord, LibraryError> {
        self.index
            .search(id)
            .map(|pos| &self.games[pos])
            .ok_or_else(|| LibraryError::GameNotFound(id.to_string()))
    }

    /// Mutable lookup by ID through the index.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut GameRecord, LibraryError> {
        match self.index.search(id) {
            Some(pos) => Ok(&mut self.games[pos]),
            None => Err(LibraryError::GameNotFound(id.to_string())),
        }
    }

    /// Current array position of a game, if present.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.search(id)
    }

    /// All live records in backing-array order.
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Iterate the live records.
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.iter()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True when the catalog holds no games.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Fixed maximum number of records.
    pub fn capacity(&self) -> usize {
        self.max_games
    }

    /// Verify that every live record's indexed position matches its array
    /// position. Test support only.
    #[cfg(test)]
    pub(crate) fn index_is_consistent(&self) -> bool {
        self.index.len() == self.games.len()
            && self
                .games
                .iter()
                .enumerate()
                .all(|(i, g)| self.index.search(&g.id) == Some(i))
    }
}
