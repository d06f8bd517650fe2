use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a zone catalog from its static tables.
///
/// Every variant is a catalog authoring defect. Catalogs are compiled
/// constants, so these surface once, at construction, and are not
/// recoverable at calculation time.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// A postal code pattern spec did not compile.
    #[error("invalid postal code pattern '{pattern}': {source}")]
    Pattern {
        /// The raw authoring spec, slashes included.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A `start:end` postal code range spec could not be read.
    #[error("invalid postal code range '{0}'")]
    Range(String),

    /// A date literal could not be read as `YYYY-MM-DD`.
    #[error("invalid date '{0}'")]
    Date(String),

    /// A zone was authored without any rates.
    #[error("zone '{0}' has no rates")]
    NoRates(String),

    /// A zone must flag exactly one of its rates as the default.
    #[error("zone '{zone}' needs exactly one default rate, found {found}")]
    DefaultRate { zone: String, found: usize },

    /// Rate periods must be non-overlapping and ascending by start date.
    #[error("rate '{rate}' of zone '{zone}' has misordered or overlapping periods")]
    PeriodOrder { zone: String, rate: String },

    /// Only the last period of a rate may be open-ended.
    #[error("rate '{rate}' of zone '{zone}' has an open-ended period before the last")]
    OpenPeriod { zone: String, rate: String },
}

/// Errors raised when a rate percentage is looked up.
///
/// Like [`CatalogError`] these indicate defective catalog data, not bad
/// business input; callers treat them as fatal. Business-data gaps (a
/// customer outside every territory, a missing event address) never
/// surface as errors — they resolve to "no applicable zone".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RateError {
    /// No zone with the requested id exists in the catalog.
    #[error("unknown zone '{0}'")]
    UnknownZone(String),

    /// The zone exists but has no rate with the requested id.
    #[error("zone '{zone}' has no rate '{rate}'")]
    UnknownRate { zone: String, rate: String },

    /// The zone has no rate flagged default.
    #[error("zone '{0}' has no default rate")]
    NoDefaultRate(String),

    /// No period of the rate covers the requested date.
    #[error("rate '{rate}' has no percentage in force on {date}")]
    NoPercentage { rate: String, date: NaiveDate },
}
