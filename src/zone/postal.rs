//! Postal code inclusion/exclusion filters.
//!
//! Territories refine their country match with postal code specs written
//! in a compact authoring syntax: either a comma list mixing exact codes
//! and inclusive `start:end` numeric ranges (`"6691, 6991:6993"`), or a
//! slash-delimited regular expression (`"/(20)[0-9]{3}/"`).
//!
//! Parsing happens once, at catalog construction, and rejects malformed
//! specs. Evaluation never errors: a code that cannot be read as a number
//! simply fails any range it is tested against.

use regex::Regex;

use super::error::CatalogError;

/// A single parsed postal code specification.
#[derive(Debug, Clone)]
pub enum PostalSpec {
    /// Exact codes and inclusive numeric ranges from a comma list.
    List {
        codes: Vec<String>,
        ranges: Vec<(i64, i64)>,
    },
    /// A regular expression, matched anywhere in the raw code text.
    Pattern(Regex),
}

impl PostalSpec {
    /// Parse the authoring syntax.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let raw = raw.trim();
        if let Some(body) = raw.strip_prefix('/').and_then(|r| r.strip_suffix('/')) {
            let pattern = Regex::new(body).map_err(|source| CatalogError::Pattern {
                pattern: raw.to_string(),
                source,
            })?;
            return Ok(Self::Pattern(pattern));
        }

        let mut codes = Vec::new();
        let mut ranges = Vec::new();
        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Some((lo, hi)) = token.split_once(':') {
                let lo = parse_numeric(lo).ok_or_else(|| CatalogError::Range(token.to_string()))?;
                let hi = parse_numeric(hi).ok_or_else(|| CatalogError::Range(token.to_string()))?;
                if lo > hi {
                    return Err(CatalogError::Range(token.to_string()));
                }
                ranges.push((lo, hi));
            } else {
                codes.push(token.to_string());
            }
        }
        Ok(Self::List { codes, ranges })
    }

    /// Whether `code` matches this spec.
    pub fn matches(&self, code: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(code),
            Self::List { codes, ranges } => {
                if codes.iter().any(|c| c == code) {
                    return true;
                }
                if ranges.is_empty() {
                    return false;
                }
                // Fails closed: a non-numeric code is in no range.
                match parse_numeric(code) {
                    Some(n) => ranges.iter().any(|&(lo, hi)| lo <= n && n <= hi),
                    None => false,
                }
            }
        }
    }
}

/// Strip non-digit characters and parse what remains as an integer.
fn parse_numeric(s: &str) -> Option<i64> {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Included/excluded postal code pair of a territory.
///
/// A code is accepted iff it matches `included` (or no `included` is set)
/// and does not match `excluded` (or no `excluded` is set). A territory
/// without either accepts every code.
#[derive(Debug, Clone, Default)]
pub struct PostalFilter {
    pub included: Option<PostalSpec>,
    pub excluded: Option<PostalSpec>,
}

impl PostalFilter {
    /// Build from raw authoring specs.
    pub fn new(included: Option<&str>, excluded: Option<&str>) -> Result<Self, CatalogError> {
        Ok(Self {
            included: included.map(PostalSpec::parse).transpose()?,
            excluded: excluded.map(PostalSpec::parse).transpose()?,
        })
    }

    /// Whether the filter accepts `code`.
    ///
    /// An absent postal code is evaluated as the empty string, so it fails
    /// inclusion filters and passes exclusion-only filters.
    pub fn accepts(&self, code: Option<&str>) -> bool {
        let code = code.unwrap_or("");
        if let Some(included) = &self.included {
            if !included.matches(code) {
                return false;
            }
        }
        if let Some(excluded) = &self.excluded {
            if excluded.matches(code) {
                return false;
            }
        }
        true
    }
}
