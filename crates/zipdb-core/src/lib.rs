// crates/zipdb-core/src/lib.rs

//! An embedded database of US postal-code records.
//!
//! The store is a flat, immutable table loaded once from the CSV source
//! dataset (or a binary cache of it) and queried through a handful of
//! predicates: exact code, code prefix, city/county/area-code matching and
//! geographic radius search around a point.

pub mod common;
pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod text;
pub mod traits;
// Shared raw input (used by the builder/loader)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{Result, ZipError};
pub use crate::geo::{haversine_miles, BoundingBox, SearchPoint};
pub use crate::model::{DefaultZipDb, ZipCodeType, ZipDb, ZipRecord};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, NameMatch, StandardBackend, ZipBackend};
