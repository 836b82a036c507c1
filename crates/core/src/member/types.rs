//! Member record type.

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

use super::borrowed::BorrowedGames;

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier, e.g. "M001".
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Games this member currently holds, in borrow order.
    #[serde(default)]
    pub borrowed: BorrowedGames,
}

impl Member {
    /// Create a member, validating that no required field is empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, LibraryError> {
        let id = id.into();
        let name = name.into();
        let email = email.into();

        if id.trim().is_empty() {
            return Err(LibraryError::Validation("member ID cannot be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(LibraryError::Validation("name cannot be empty".into()));
        }
        if email.trim().is_empty() {
            return Err(LibraryError::Validation("email cannot be empty".into()));
        }

        Ok(Self {
            id,
            name,
            email,
            borrowed: BorrowedGames::new(),
        })
    }

    /// Whether this member currently holds `game_id`.
    pub fn has_borrowed(&self, game_id: &str) -> bool {
        self.borrowed.contains(game_id)
    }

    /// How many games this member currently holds.
    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }
}
