//! Member-written game reviews.

mod types;

pub use types::Review;
