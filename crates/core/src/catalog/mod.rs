//! Game catalog - the owned record store, its listing orders and its
//! predicate queries.
//!
//! The store keeps the identifier index consistent across every structural
//! mutation; listings and searches never mutate the canonical order.

mod ordering;
mod query;
mod store;
mod types;

pub use ordering::{sorted, SortOrder};
pub use query::find_by_player_count;
pub use store::CatalogStore;
pub use types::{GameRecord, GameStatus};
