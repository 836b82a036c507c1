//! Append-only log of borrow transactions.

use chrono::NaiveDate;

use super::types::BorrowRecord;

/// The full transaction history, oldest first.
#[derive(Debug, Default)]
pub struct LendingLog {
    records: Vec<BorrowRecord>,
}

impl LendingLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction.
    pub fn append(&mut self, record: BorrowRecord) {
        self.records.push(record);
    }

    /// Mark the most recent unresolved record for `(game_id, member_id)` as
    /// returned on `date`.
    ///
    /// Scans newest-first so a re-borrow of the same game resolves its own
    /// record and never a historical one. Returns whether an open record
    /// was found.
    pub fn resolve(&mut self, game_id: &str, member_id: &str, date: NaiveDate) -> bool {
        for record in self.records.iter_mut().rev() {
            if record.game_id == game_id && record.member_id == member_id && record.is_open() {
                record.mark_returned(date);
                return true;
            }
        }
        false
    }

    /// All transactions, oldest first.
    pub fn records(&self) -> &[BorrowRecord] {
        &self.records
    }

    /// This member's transactions, oldest first.
    pub fn for_member(&self, member_id: &str) -> Vec<&BorrowRecord> {
        self.records
            .iter()
            .filter(|r| r.member_id == member_id)
            .collect()
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no transaction has happened yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
