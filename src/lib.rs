//! # mehrwert
//!
//! EU and Swiss VAT zone resolution: which tax jurisdiction claims a line
//! item, and at which percentage, on a given calculation date.
//!
//! Covers territory matching (postal code carve-outs as lists, numeric
//! ranges and patterns), dated rate histories, the EU cross-border
//! decision procedure (origin, destination, intra-community, event
//! origin) with its Swiss counterpart, and VAT identifier validation.
//! All percentages are [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mehrwert::resolve::*;
//! use mehrwert::zone::Address;
//! use rust_decimal_macros::dec;
//!
//! let engine = ResolutionEngine::european_union().unwrap();
//!
//! // A German store sells a download to a Spanish consumer in 2016:
//! // destination taxation, Spanish standard rate.
//! let item = OrderItemFacts::new(
//!     TaxableType::DigitalGoods,
//!     NaiveDate::from_ymd_opt(2016, 6, 1).unwrap(),
//! );
//! let customer = CustomerFacts::new(Address::with_postal_code("ES", "28001"));
//! let store = StoreFacts::new(Address::with_postal_code("DE", "10115"));
//!
//! let rates = engine.resolve_rates(&item, &customer, &store).unwrap();
//! assert_eq!(rates[0].zone_id, "es");
//! assert_eq!(rates[0].percentage, dec!(0.21));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Zone model, catalogs, resolution engine, VAT ID format checks |
//! | `vies` | Online VIES registry client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod catalog;

#[cfg(feature = "core")]
pub mod resolve;

#[cfg(feature = "core")]
pub mod vatid;

#[cfg(feature = "core")]
pub mod zone;

// Re-export the zone value model at the crate root for convenience
#[cfg(feature = "core")]
pub use crate::zone::*;
