//! Members and their borrowed-game lists.

mod borrowed;
mod roster;
mod types;

pub use borrowed::BorrowedGames;
pub use roster::MemberRoster;
pub use types::Member;
