//! zipdb prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::DbStats;
pub use crate::error::{Result, ZipError};
pub use crate::geo::{haversine_miles, BoundingBox, SearchPoint};
pub use crate::model::{DefaultZipDb, ZipCodeType, ZipDb, ZipRecord};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, NameMatch, StandardBackend, ZipBackend};
