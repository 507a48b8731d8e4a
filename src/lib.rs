//! Student records, per-subject scores and their CSV persistence.

pub mod error;
pub mod model;
pub mod repository;
pub mod scorebook;
pub mod store;

pub use crate::error::{Error, Result};
pub use crate::model::{Grade, Score, Student};
pub use crate::repository::{Repository, StudentRepository};
pub use crate::scorebook::ScoreBook;
pub use crate::store::CsvStore;
