//! ludoteca-core - the board game library's domain logic.
//!
//! Everything here is synchronous and single-threaded: the catalog store,
//! its identifier index, the sort and query layers, the member roster, the
//! lending state machine and the flat-file persistence. The console front
//! end lives in `ludoteca-cli`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod lending;
pub mod library;
pub mod member;
pub mod review;
pub mod sort;
pub mod storage;

pub use catalog::{CatalogStore, GameRecord, GameStatus, SortOrder};
pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use error::LibraryError;
pub use index::GameIndex;
pub use lending::{BorrowRecord, LendingLog};
pub use library::{Library, LibrarySummary};
pub use member::{BorrowedGames, Member, MemberRoster};
pub use review::Review;
pub use storage::{load_catalog, save_catalog, StorageError};
