//! Tax identifier validation.
//!
//! Format validation is pure and offline: structural shape, declared
//! country membership, and the regime's identifier prefixes (with the
//! Greek `EL` substitution for the EU). Full validation additionally asks
//! an external registry ([VIES](https://ec.europa.eu/taxation_customs/vies/)
//! for the EU); registry failures degrade to "not certified" instead of
//! failing the calculation.
//!
//! # Example
//!
//! ```rust
//! use mehrwert::catalog::ZoneCatalog;
//! use mehrwert::vatid::{TaxIdValidator, TaxIdentifier};
//!
//! let catalog = ZoneCatalog::european_union().unwrap();
//! let validator = TaxIdValidator::european_union(&catalog, None);
//!
//! // Greece registers under EL, not its ISO code GR.
//! assert!(validator.is_valid_format(&TaxIdentifier::new("EL123456789"), "GR"));
//! assert!(!validator.is_valid_format(&TaxIdentifier::new("GR123456789"), "GR"));
//! ```

mod format;
mod registry;
#[cfg(feature = "vies")]
mod vies;

pub use format::{RegistryPolicy, TaxIdValidator, TaxIdentifier};
pub use registry::{RegistryClient, RegistryError};
#[cfg(feature = "vies")]
pub use vies::ViesClient;
