pub mod catalog;
pub mod driver;
pub mod mapper;
pub mod report;
pub mod seed;
pub mod transform;

pub use catalog::*;
pub use driver::*;
pub use mapper::Classified;
pub use report::*;
pub use seed::*;
pub use transform::*;

use thiserror::Error;

use crate::db::DatabaseError;
use crate::legacy::SourceError;
use crate::models::DomainError;

/// Fatal failures that abort before the page loop even starts: the target
/// store is unusable, a client cannot be built, or the reference data
/// cannot be seeded.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("legacy source error: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures that fail a single record. The display text is the failure
/// reason accumulated in the run report; the run continues.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("missing birth date")]
    MissingBirthDate,

    #[error("unparseable birth date: {0}")]
    BirthDate(String),

    #[error("unparseable admin hour: {0}")]
    AdminHour(String),
}
