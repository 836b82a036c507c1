//! Error taxonomy shared by all library operations.
//!
//! Every failure is recovered at the operation boundary and reported to the
//! caller; none of these are fatal to the session loop.

use thiserror::Error;

/// Errors returned by catalog, roster and lending operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Game ID already exists: {0}")]
    DuplicateGameId(String),

    #[error("Member ID already exists: {0}")]
    DuplicateMemberId(String),

    #[error("Cannot add {what}: storage is full ({max} max)")]
    CapacityExceeded { what: &'static str, max: usize },

    #[error("Game {game_id} is already borrowed by {borrower}")]
    AlreadyBorrowed { game_id: String, borrower: String },

    #[error("Game {0} is not currently borrowed")]
    NotCurrentlyBorrowed(String),

    #[error("Cannot remove {game_id}: currently borrowed by {borrower}")]
    GameCurrentlyBorrowed { game_id: String, borrower: String },

    #[error("Invalid input: {0}")]
    Validation(String),
}
