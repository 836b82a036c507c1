//! Borrow transaction record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One borrow transaction: who took which game and when, and whether it
/// came back.
///
/// Records are append-only; the only mutation ever applied is
/// [`BorrowRecord::mark_returned`], exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub game_id: String,
    pub member_id: String,
    pub borrow_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub returned: bool,
}

impl BorrowRecord {
    /// Open a new unresolved record.
    pub fn new(
        game_id: impl Into<String>,
        member_id: impl Into<String>,
        borrow_date: NaiveDate,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            member_id: member_id.into(),
            borrow_date,
            return_date: None,
            returned: false,
        }
    }

    /// Set the return date and flag.
    pub fn mark_returned(&mut self, date: NaiveDate) {
        self.return_date = Some(date);
        self.returned = true;
    }

    /// True while the game is still out under this record.
    pub fn is_open(&self) -> bool {
        !self.returned
    }
}
