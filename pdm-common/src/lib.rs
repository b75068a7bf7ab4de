//! # PDM Common Library
//!
//! Shared engine for the development-plan metrics services:
//! - Numeric normalization for locale-ambiguous spreadsheet cells
//! - CSV tokenizing and header-alias resolution into raw row records
//! - Canonical models (product goals, rollup buckets, summaries)
//! - Row mappers and the parameterized hierarchy aggregator
//! - TTL-bounded result cache

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod headers;
pub mod mapper;
pub mod model;
pub mod normalize;
pub mod sheet;

pub use error::{Error, Result};
