//! Zone catalogs for the supported tax regimes.
//!
//! Each regime's zones are compiled static tables — one entry per
//! jurisdiction with its territories and dated rate history — parsed and
//! validated once at catalog construction. The engine treats a built
//! catalog as a constant; rate changes are shipped as data updates, not
//! runtime mutation.

mod eu;
mod swiss;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::zone::{
    Address, CatalogError, PostalFilter, RatePeriod, RateSchedule, TaxZone, Territory,
};

/// Authoring form of a territory.
pub(crate) struct TerritoryDef {
    country: &'static str,
    included_postal_codes: Option<&'static str>,
    excluded_postal_codes: Option<&'static str>,
}

impl TerritoryDef {
    pub(crate) const fn country(country: &'static str) -> Self {
        Self {
            country,
            included_postal_codes: None,
            excluded_postal_codes: None,
        }
    }

    pub(crate) const fn included(country: &'static str, codes: &'static str) -> Self {
        Self {
            country,
            included_postal_codes: Some(codes),
            excluded_postal_codes: None,
        }
    }

    pub(crate) const fn excluded(country: &'static str, codes: &'static str) -> Self {
        Self {
            country,
            included_postal_codes: None,
            excluded_postal_codes: Some(codes),
        }
    }
}

/// Authoring form of one dated percentage.
pub(crate) struct PeriodDef {
    percentage: Decimal,
    from: &'static str,
    until: Option<&'static str>,
}

impl PeriodDef {
    pub(crate) const fn since(percentage: Decimal, from: &'static str) -> Self {
        Self {
            percentage,
            from,
            until: None,
        }
    }

    pub(crate) const fn between(
        percentage: Decimal,
        from: &'static str,
        until: &'static str,
    ) -> Self {
        Self {
            percentage,
            from,
            until: Some(until),
        }
    }
}

/// Authoring form of a rate.
pub(crate) struct RateDef {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) default: bool,
    pub(crate) periods: &'static [PeriodDef],
}

/// Authoring form of a zone.
pub(crate) struct ZoneDef {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) display_label: &'static str,
    pub(crate) territories: &'static [TerritoryDef],
    pub(crate) rates: &'static [RateDef],
}

/// The fixed set of zones of one tax regime, plus the external zones of a
/// neighbouring regime whose customers this regime must not double-claim.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zones: Vec<TaxZone>,
    external_zones: Vec<TaxZone>,
    intra_community: Option<&'static str>,
}

impl ZoneCatalog {
    /// The EU VAT catalog: member-state zones with their postal carve-outs,
    /// the Corsica and Madeira sub-zones, the synthetic intra-community
    /// zone, and Switzerland as an external zone.
    pub fn european_union() -> Result<Self, CatalogError> {
        Ok(Self {
            zones: build_zones(eu::EU_ZONES)?,
            external_zones: build_zones(swiss::SWISS_ZONES)?,
            intra_community: Some("ic"),
        })
    }

    /// The Swiss VAT catalog: Switzerland, Liechtenstein, and the Büsingen
    /// and Lake Lugano enclaves. No external zones, no intra-community zone.
    pub fn switzerland() -> Result<Self, CatalogError> {
        Ok(Self {
            zones: build_zones(swiss::SWISS_ZONES)?,
            external_zones: Vec::new(),
            intra_community: None,
        })
    }

    /// The regime's own zones, in authoring order.
    pub fn zones(&self) -> &[TaxZone] {
        &self.zones
    }

    /// Zones of the neighbouring regime, consulted only for eligibility.
    pub fn external_zones(&self) -> &[TaxZone] {
        &self.external_zones
    }

    /// Look up a zone by id.
    pub fn zone(&self, id: &str) -> Option<&TaxZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// The synthetic zero-rated zone used for cross-border B2B reporting,
    /// if the regime has one.
    pub fn intra_community_zone(&self) -> Option<&TaxZone> {
        self.intra_community.and_then(|id| self.zone(id))
    }

    /// All zones covering `address`, in authoring order.
    pub fn zones_matching(&self, address: &Address) -> Vec<&TaxZone> {
        self.zones.iter().filter(|z| z.matches(address)).collect()
    }

    /// All external zones covering `address`.
    pub fn external_zones_matching(&self, address: &Address) -> Vec<&TaxZone> {
        self.external_zones
            .iter()
            .filter(|z| z.matches(address))
            .collect()
    }

    /// Country codes of every territory of the regime's own zones,
    /// deduplicated and sorted.
    pub fn country_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .zones
            .iter()
            .flat_map(|z| z.territories.iter().map(|t| t.country_code.clone()))
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }
}

fn build_zones(defs: &[ZoneDef]) -> Result<Vec<TaxZone>, CatalogError> {
    defs.iter().map(build_zone).collect()
}

fn build_zone(def: &ZoneDef) -> Result<TaxZone, CatalogError> {
    let territories = def
        .territories
        .iter()
        .map(|t| {
            let postal_filter = if t.included_postal_codes.is_some()
                || t.excluded_postal_codes.is_some()
            {
                Some(PostalFilter::new(
                    t.included_postal_codes,
                    t.excluded_postal_codes,
                )?)
            } else {
                None
            };
            Ok(Territory {
                country_code: t.country.to_string(),
                postal_filter,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    let rates = def
        .rates
        .iter()
        .map(|r| {
            let periods = r
                .periods
                .iter()
                .map(|p| {
                    Ok(RatePeriod {
                        percentage: p.percentage,
                        start_date: parse_date(p.from)?,
                        end_date: p.until.map(parse_date).transpose()?,
                    })
                })
                .collect::<Result<Vec<_>, CatalogError>>()?;
            Ok(RateSchedule {
                id: r.id.to_string(),
                label: r.label.to_string(),
                periods,
                is_default: r.default,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    let zone = TaxZone {
        id: def.id.to_string(),
        label: def.label.to_string(),
        display_label: def.display_label.to_string(),
        territories,
        rates,
    };
    validate_zone(&zone)?;
    Ok(zone)
}

fn parse_date(s: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CatalogError::Date(s.to_string()))
}

fn validate_zone(zone: &TaxZone) -> Result<(), CatalogError> {
    if zone.rates.is_empty() {
        return Err(CatalogError::NoRates(zone.id.clone()));
    }
    let defaults = zone.rates.iter().filter(|r| r.is_default).count();
    if defaults != 1 {
        return Err(CatalogError::DefaultRate {
            zone: zone.id.clone(),
            found: defaults,
        });
    }
    for rate in &zone.rates {
        for pair in rate.periods.windows(2) {
            let end = pair[0].end_date.ok_or_else(|| CatalogError::OpenPeriod {
                zone: zone.id.clone(),
                rate: rate.id.clone(),
            })?;
            if pair[1].start_date < end {
                return Err(CatalogError::PeriodOrder {
                    zone: zone.id.clone(),
                    rate: rate.id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eu_catalog_builds() {
        let catalog = ZoneCatalog::european_union().unwrap();
        assert!(catalog.zone("de").is_some());
        assert!(catalog.zone("fr_h").is_some());
        assert!(catalog.intra_community_zone().is_some());
        assert_eq!(catalog.external_zones().len(), 1);
    }

    #[test]
    fn swiss_catalog_builds() {
        let catalog = ZoneCatalog::switzerland().unwrap();
        assert!(catalog.zone("ch").is_some());
        assert!(catalog.intra_community_zone().is_none());
        assert!(catalog.external_zones().is_empty());
    }

    #[test]
    fn every_zone_has_one_default_rate() {
        let catalog = ZoneCatalog::european_union().unwrap();
        for zone in catalog.zones() {
            assert_eq!(
                zone.rates.iter().filter(|r| r.is_default).count(),
                1,
                "zone {}",
                zone.id
            );
        }
    }

    #[test]
    fn country_codes_collects_territories() {
        let catalog = ZoneCatalog::european_union().unwrap();
        let codes = catalog.country_codes();
        assert!(codes.contains(&"GR".to_string()));
        assert!(codes.contains(&"MC".to_string()));
        assert!(codes.contains(&"IM".to_string()));
        assert!(!codes.contains(&"CH".to_string()));
    }

    #[test]
    fn ic_zone_reachable_by_id_only() {
        // Its placeholder territory is not an ISO code any address carries.
        let catalog = ZoneCatalog::european_union().unwrap();
        assert!(catalog.intra_community_zone().is_some());
        for code in ["DE", "FR", "CH", "US"] {
            let matched = catalog.zones_matching(&Address::new(code));
            assert!(!matched.iter().any(|z| z.id == "ic"));
        }
    }
}
