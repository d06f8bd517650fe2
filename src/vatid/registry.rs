//! The external registry-validation collaborator boundary.

use thiserror::Error;

/// Failure of the external registry service.
///
/// Recoverable: [`TaxIdValidator`](super::TaxIdValidator) degrades any of
/// these to "not certified" and logs them, so a slow or unavailable
/// registry never fails a tax calculation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Connection or timeout failure.
    #[error("registry network error: {0}")]
    Network(String),

    /// The service answered with an error (e.g. member state unavailable).
    #[error("registry service error: {0}")]
    Service(String),

    /// The response could not be read.
    #[error("registry response could not be read: {0}")]
    Response(String),
}

/// Online validation of a tax identifier against a government registry.
///
/// `number` is the identifier without its two-letter country prefix. One
/// time-bounded request per check; no retries.
pub trait RegistryClient: Send + Sync {
    fn check(&self, country_code: &str, number: &str) -> Result<bool, RegistryError>;
}
