//! Repository layer — entity-scoped database operations over `&Connection`.

mod allergy;
mod patient;

pub use allergy::*;
pub use patient::*;
