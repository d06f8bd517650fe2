//! Tax identifier format validation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry::RegistryClient;
use crate::catalog::ZoneCatalog;

/// A declared tax identifier, e.g. `"DE123456789"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdentifier {
    raw: String,
}

impl TaxIdentifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into().trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The structural shape shared by the whole regime: two letters
    /// followed by 2–12 alphanumeric (or `+`, `*`, `.`) characters.
    /// Independent of any particular country.
    pub fn is_valid_format(&self) -> bool {
        let bytes = self.raw.as_bytes();
        if !(4..=14).contains(&bytes.len()) {
            return false;
        }
        bytes[..2].iter().all(|b| b.is_ascii_alphabetic())
            && bytes[2..]
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'*' | b'.'))
    }

    /// The first two characters, upper-cased.
    pub fn country_prefix(&self) -> String {
        self.raw.chars().take(2).collect::<String>().to_uppercase()
    }

    /// Everything after the country prefix.
    pub fn number(&self) -> &str {
        self.raw.get(2..).unwrap_or("")
    }
}

impl fmt::Display for TaxIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// How a regime certifies an identifier beyond its format.
pub enum RegistryPolicy {
    /// Format validity alone certifies; the regime has no registry.
    FormatOnly,
    /// An online registry confirmation is required. Without a configured
    /// client nothing is ever certified — format validity alone never
    /// suffices for such a regime.
    Registry(Option<Box<dyn RegistryClient>>),
}

impl fmt::Debug for RegistryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormatOnly => f.write_str("FormatOnly"),
            Self::Registry(client) => f
                .debug_tuple("Registry")
                .field(&client.as_ref().map(|_| "…"))
                .finish(),
        }
    }
}

/// Validates tax identifiers against one regime's zone catalog.
///
/// An identifier is well-formed for a regime when its structural shape
/// holds, the declared country belongs to the regime, and its two-letter
/// prefix is the regime's identifier prefix for that country. Prefixes
/// default to the ISO code, with regime-specific substitutions applied
/// first — Greece registers identifiers under `EL`, not its ISO code
/// `GR`.
pub struct TaxIdValidator {
    country_codes: BTreeSet<String>,
    substitutions: Vec<(String, String)>,
    policy: RegistryPolicy,
}

impl TaxIdValidator {
    /// EU validator: registry-backed, with the Greek `GR` → `EL` prefix
    /// substitution.
    pub fn european_union(catalog: &ZoneCatalog, client: Option<Box<dyn RegistryClient>>) -> Self {
        Self::for_catalog(catalog, &[("GR", "EL")], RegistryPolicy::Registry(client))
    }

    /// Swiss validator: format validity certifies, no substitutions.
    pub fn swiss(catalog: &ZoneCatalog) -> Self {
        Self::for_catalog(catalog, &[], RegistryPolicy::FormatOnly)
    }

    /// Validator over explicit substitutions and registry policy.
    pub fn for_catalog(
        catalog: &ZoneCatalog,
        substitutions: &[(&str, &str)],
        policy: RegistryPolicy,
    ) -> Self {
        Self {
            country_codes: catalog.country_codes().into_iter().collect(),
            substitutions: substitutions
                .iter()
                .map(|(iso, prefix)| (iso.to_string(), prefix.to_string()))
                .collect(),
            policy,
        }
    }

    /// Format validity of `id` for the declared country.
    pub fn is_valid_format(&self, id: &TaxIdentifier, country_code: &str) -> bool {
        id.is_valid_format()
            && self.country_codes.contains(country_code)
            && id.country_prefix() == self.expected_prefix(country_code)
    }

    /// Full validity: format, then the regime's registry policy.
    ///
    /// Registry failures degrade to `false` and are logged for audit;
    /// they never propagate as calculation failures.
    pub fn is_valid(&self, id: &TaxIdentifier, country_code: &str) -> bool {
        if !self.is_valid_format(id, country_code) {
            return false;
        }
        match &self.policy {
            RegistryPolicy::FormatOnly => true,
            RegistryPolicy::Registry(None) => false,
            RegistryPolicy::Registry(Some(client)) => {
                match client.check(country_code, id.number()) {
                    Ok(valid) => valid,
                    Err(err) => {
                        log::warn!("registry check failed for '{id}': {err}");
                        false
                    }
                }
            }
        }
    }

    fn expected_prefix<'a>(&'a self, country_code: &'a str) -> &'a str {
        self.substitutions
            .iter()
            .find(|(iso, _)| iso == country_code)
            .map(|(_, prefix)| prefix.as_str())
            .unwrap_or(country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_shape() {
        assert!(TaxIdentifier::new("DE123456789").is_valid_format());
        assert!(TaxIdentifier::new("ATU12345678").is_valid_format());
        assert!(TaxIdentifier::new("FR12").is_valid_format());
        assert!(TaxIdentifier::new("  DE123456789  ").is_valid_format());

        assert!(!TaxIdentifier::new("DE1").is_valid_format());
        assert!(!TaxIdentifier::new("1E123456789").is_valid_format());
        assert!(!TaxIdentifier::new("DE123456789012345").is_valid_format());
        assert!(!TaxIdentifier::new("DE123 456").is_valid_format());
        assert!(!TaxIdentifier::new("").is_valid_format());
    }

    #[test]
    fn prefix_is_uppercased() {
        assert_eq!(TaxIdentifier::new("de123456789").country_prefix(), "DE");
    }

    #[test]
    fn number_drops_prefix() {
        assert_eq!(TaxIdentifier::new("DE123456789").number(), "123456789");
        assert_eq!(TaxIdentifier::new("D").number(), "");
    }
}
