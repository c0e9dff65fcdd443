//! Caremigrate moves patient records out of the legacy pharmacy system
//! into the new store: paginated extraction, per-record transformation
//! with validation and defaulting, idempotent reruns, and an end-of-run
//! report with failure reasons and legacy-to-new id mappings.

pub mod config;
pub mod db;
pub mod facility;
pub mod legacy;
pub mod migrate;
pub mod models;
