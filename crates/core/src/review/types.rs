//! Review record type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 10;

/// A member's review of a game. Append-only, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub game_id: String,
    pub member_id: String,
    /// Display name of the reviewer at the time of writing.
    pub member_name: String,
    /// Rating from 1 to 10.
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
}

impl Review {
    /// Create a review, validating the rating range and the text.
    pub fn new(
        game_id: impl Into<String>,
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        rating: u8,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, LibraryError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(LibraryError::Validation(format!(
                "rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }
        let text = text.into();
        if text.trim().is_empty() {
            return Err(LibraryError::Validation(
                "review text cannot be empty".into(),
            ));
        }

        Ok(Self {
            game_id: game_id.into(),
            member_id: member_id.into(),
            member_name: member_name.into(),
            rating,
            text,
            date,
        })
    }
}
