//! # aequora-core
//!
//! Core crate for the Aequora notification client. Contains the unified
//! error system, configuration schemas, typed identifiers, and the local
//! store trait.
//!
//! This crate has **no** internal dependencies on other Aequora crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
