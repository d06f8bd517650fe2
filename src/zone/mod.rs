//! Value model for tax jurisdictions.
//!
//! A [`TaxZone`] is a set of [`Territory`]s (country code plus optional
//! [`PostalFilter`]) and a set of named [`RateSchedule`]s with dated
//! percentage histories. Everything here is immutable value data; matching
//! and rate lookup are pure functions.

mod error;
mod postal;
mod types;

pub use error::{CatalogError, RateError};
pub use postal::{PostalFilter, PostalSpec};
pub use types::{Address, RatePeriod, RateSchedule, TaxZone, Territory};
