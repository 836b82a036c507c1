//! Flat-file catalog persistence.

mod csv;

pub use csv::{load_catalog, save_catalog, StorageError};
