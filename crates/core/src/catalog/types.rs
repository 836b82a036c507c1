//! Types for the game catalog.

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Availability state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Available,
    Borrowed,
}

impl GameStatus {
    /// Display label for listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Available => "Available",
            GameStatus::Borrowed => "Borrowed",
        }
    }
}

/// A board game in the catalog.
///
/// The ID is unique and immutable after creation. `borrowed_by` is `Some`
/// iff `status` is [`GameStatus::Borrowed`]; both are mutated together by
/// the borrow/return operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier, e.g. "G001".
    pub id: String,
    /// Title as it appears in listings.
    pub title: String,
    /// Minimum supported player count.
    pub min_players: u32,
    /// Maximum supported player count.
    pub max_players: u32,
    /// Shortest advertised playtime in minutes.
    pub min_playtime: u32,
    /// Longest advertised playtime in minutes.
    pub max_playtime: u32,
    /// Publication year. Negative values are BC (Go: -2200).
    pub year_published: i32,
    /// Current availability.
    pub status: GameStatus,
    /// Member currently holding the game, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowed_by: Option<String>,
    /// Cumulative number of times the game has been borrowed.
    #[serde(default)]
    pub borrow_count: u32,
}

impl GameRecord {
    /// Create a new available game, validating field invariants.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        min_players: u32,
        max_players: u32,
        min_playtime: u32,
        max_playtime: u32,
        year_published: i32,
    ) -> Result<Self, LibraryError> {
        let id = id.into();
        let title = title.into();

        if id.trim().is_empty() {
            return Err(LibraryError::Validation("game ID cannot be empty".into()));
        }
        if title.trim().is_empty() {
            return Err(LibraryError::Validation("title cannot be empty".into()));
        }
        if min_players == 0 || min_players > max_players {
            return Err(LibraryError::Validation(format!(
                "invalid player range {}-{}",
                min_players, max_players
            )));
        }
        if min_playtime == 0 || min_playtime > max_playtime {
            return Err(LibraryError::Validation(format!(
                "invalid playtime range {}-{}",
                min_playtime, max_playtime
            )));
        }

        Ok(Self {
            id,
            title,
            min_players,
            max_players,
            min_playtime,
            max_playtime,
            year_published,
            status: GameStatus::Available,
            borrowed_by: None,
            borrow_count: 0,
        })
    }

    /// True when the game can be borrowed right now.
    pub fn is_available(&self) -> bool {
        self.status == GameStatus::Available
    }

    /// Whether `players` people could play this game.
    pub fn supports_players(&self, players: u32) -> bool {
        self.min_players <= players && players <= self.max_players
    }
}
