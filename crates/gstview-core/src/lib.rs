//! # gstview-core - Core Domain Types
//!
//! Foundation crate for gstview. Provides the wire model for the GST lookup
//! payload, error handling, and logging initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, indexmap, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Wire Model (`types`)
//! - [`GstDetails`] - Top-level lookup response (company + financial details)
//! - [`CompanyDetails`] - Legal/trade names, GSTIN, registration date, addresses
//! - [`AddressEntry`], [`Address`] - One registered address with its role
//! - [`FinancialDetails`] - Year-keyed filing map (wire key `fillingData`)
//! - [`FilingRecord`] - One return submission
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gstview_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all gstview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    Address, AddressEntry, CompanyDetails, FilingRecord, FinancialDetails, GstDetails,
};
