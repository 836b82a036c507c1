//! Borrow transaction log.

mod log;
mod types;

pub use log::LendingLog;
pub use types::BorrowRecord;
