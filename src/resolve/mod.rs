//! The cross-border zone resolution engine.
//!
//! [`ResolutionEngine`] consumes order-item, customer and store facts and
//! produces the ordered set of tax zones applicable to one transaction.
//! The shared decision procedure implements the EU rules — eligibility
//! gate, cross-border B2B, event origin, post-2015 digital destination,
//! physical origin/destination — generalized over the catalog it holds; a
//! [`RegimePolicy`] post-processes the result, which is how the Swiss
//! engine stays mutually exclusive with the EU one over the same item.
//!
//! Resolution never errors on business data: an address outside every
//! territory, a missing event address or an absent tax number all degrade
//! to "no applicable zone", a valid and auditable outcome. Only catalog
//! defects ([`RateError`]) surface as failures, and only once rate
//! percentages are pulled.

mod event;
mod facts;

pub use event::{AddressResolver, EntityNode, FieldPathResolver};
pub use facts::{CustomerFacts, OrderItemFacts, ResolvedRate, StoreFacts, TaxableType};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::catalog::ZoneCatalog;
use crate::zone::{Address, CatalogError, RateError, TaxZone};

/// First calendar year the EU destination rule for digital goods applies.
const DIGITAL_DESTINATION_YEAR: i32 = 2015;

/// Facts the overlay may consult, fixed by the shared procedure.
#[derive(Debug)]
pub struct OverlayContext<'a> {
    pub customer_country: &'a str,
    pub store_country: &'a str,
    pub is_event: bool,
    /// The event address, when one was resolved.
    pub event_address: Option<&'a Address>,
}

/// Regime-specific post-processing of the shared decision procedure.
pub trait RegimePolicy: Send + Sync {
    /// Adjust the candidate zones the shared procedure produced.
    fn overlay<'a>(&self, resolved: Vec<&'a TaxZone>, ctx: &OverlayContext<'_>) -> Vec<&'a TaxZone>;
}

/// EU VAT: the shared procedure is the whole procedure.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuVatPolicy;

impl RegimePolicy for EuVatPolicy {
    fn overlay<'a>(
        &self,
        resolved: Vec<&'a TaxZone>,
        _ctx: &OverlayContext<'_>,
    ) -> Vec<&'a TaxZone> {
        resolved
    }
}

/// Swiss VAT: claims only transactions the EU rules leave alone.
///
/// Cross-border sales into the Swiss territories are governed by the
/// seller's regime (the EU intra-community path), and events are Swiss
/// only when held in the customer's own country.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwissVatPolicy;

impl RegimePolicy for SwissVatPolicy {
    fn overlay<'a>(
        &self,
        resolved: Vec<&'a TaxZone>,
        ctx: &OverlayContext<'_>,
    ) -> Vec<&'a TaxZone> {
        if resolved.is_empty() {
            return resolved;
        }
        if !ctx.is_event {
            if ctx.customer_country != ctx.store_country {
                return Vec::new();
            }
            return resolved;
        }
        // Without a resolved event address there is no basis for claiming
        // the event as domestic.
        match ctx.event_address {
            Some(event) if event.country_code == ctx.customer_country => resolved,
            _ => Vec::new(),
        }
    }
}

/// Zone resolution engine for one tax regime.
///
/// Holds the regime's catalog, policy and (optionally) the deployment's
/// event-address rule. Every resolution is a pure function of its inputs;
/// the engine carries no per-call state and is safe to share across
/// threads.
pub struct ResolutionEngine<P: RegimePolicy> {
    catalog: ZoneCatalog,
    policy: P,
    event_addresses: Option<Box<dyn AddressResolver>>,
}

impl ResolutionEngine<EuVatPolicy> {
    /// Engine for the EU VAT regime.
    pub fn european_union() -> Result<Self, CatalogError> {
        Ok(Self::new(ZoneCatalog::european_union()?, EuVatPolicy))
    }
}

impl ResolutionEngine<SwissVatPolicy> {
    /// Engine for the Swiss VAT regime.
    pub fn swiss() -> Result<Self, CatalogError> {
        Ok(Self::new(ZoneCatalog::switzerland()?, SwissVatPolicy))
    }
}

impl<P: RegimePolicy> ResolutionEngine<P> {
    /// Engine over an explicit catalog and policy.
    pub fn new(catalog: ZoneCatalog, policy: P) -> Self {
        Self {
            catalog,
            policy,
            event_addresses: None,
        }
    }

    /// Configure the deployment's event-address rule.
    pub fn with_event_addresses(
        mut self,
        resolver: impl AddressResolver + 'static,
    ) -> Self {
        self.event_addresses = Some(Box::new(resolver));
        self
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// The ordered set of zones applicable to one order item.
    ///
    /// Branches, first match wins:
    /// 1. a store with no presence in the regime but registered in it is
    ///    liable only for B2C digital sales;
    /// 2. cross-border B2B (non-event) is an intra-community supply;
    /// 3. events are taxed where they are held, falling back to the store
    ///    when no event address can be determined;
    /// 4. digital goods (since 2015) are taxed at the destination;
    /// 5. physical goods are taxed at the origin, unless the store is
    ///    registered in the customer's zone because the distance-selling
    ///    threshold was crossed.
    pub fn resolve_zones(
        &self,
        item: &OrderItemFacts<'_>,
        customer: &CustomerFacts,
        store: &StoreFacts,
    ) -> Vec<&TaxZone> {
        let customer_zones = self.catalog.zones_matching(&customer.address);
        let customer_external_zones = self.catalog.external_zones_matching(&customer.address);
        if customer_zones.is_empty() && customer_external_zones.is_empty() {
            // Outside the regime's taxable world entirely.
            return Vec::new();
        }

        let store_zones = self.catalog.zones_matching(&store.address);
        let store_is_registered = self
            .catalog
            .zones()
            .iter()
            .any(|zone| store.is_registered(&zone.id));

        let customer_country = customer.address.country_code.as_str();
        let store_country = store.address.country_code.as_str();
        let has_tax_number = customer.has_tax_number();
        let is_digital = item.taxable_type == TaxableType::DigitalGoods
            && item.calculation_date.year() >= DIGITAL_DESTINATION_YEAR;
        let is_event = item.taxable_type == TaxableType::Events;

        let event_address = if is_event {
            self.resolve_event_address(item)
        } else {
            None
        };

        let resolved = if store_zones.is_empty() && store_is_registered {
            // Registration without presence only creates liability for
            // B2C digital sales.
            if is_digital && !has_tax_number {
                customer_zones
            } else {
                Vec::new()
            }
        } else if !is_event && has_tax_number && customer_country != store_country {
            // Intra-community supply (B2B) for non-events.
            self.catalog.intra_community_zone().into_iter().collect()
        } else if is_event {
            match &event_address {
                Some(event) if has_tax_number && customer_country != event.country_code => {
                    self.catalog.intra_community_zone().into_iter().collect()
                }
                Some(event) => self.catalog.zones_matching(event),
                // No event address could be determined: tax at the store.
                None => store_zones,
            }
        } else if is_digital {
            customer_zones
        } else {
            // Physical goods: origin taxation, unless the store is
            // registered in the customer's zone.
            let registered_in_customer_zone = customer_zones
                .first()
                .is_some_and(|first| store.is_registered(&first.id));
            if registered_in_customer_zone {
                customer_zones
            } else {
                store_zones
            }
        };

        let ctx = OverlayContext {
            customer_country,
            store_country,
            is_event,
            event_address: event_address.as_ref(),
        };
        self.policy.overlay(resolved, &ctx)
    }

    /// The default-rate percentages of the resolved zones on the item's
    /// calculation date, in resolution order.
    pub fn resolve_rates(
        &self,
        item: &OrderItemFacts<'_>,
        customer: &CustomerFacts,
        store: &StoreFacts,
    ) -> Result<Vec<ResolvedRate>, RateError> {
        let date = item.calculation_date;
        self.resolve_zones(item, customer, store)
            .into_iter()
            .map(|zone| {
                let rate = zone
                    .default_rate()
                    .ok_or_else(|| RateError::NoDefaultRate(zone.id.clone()))?;
                Ok(ResolvedRate {
                    zone_id: zone.id.clone(),
                    rate_id: rate.id.clone(),
                    label: rate.label.clone(),
                    percentage: rate.percentage_at(date)?,
                })
            })
            .collect()
    }

    /// The percentage of one named rate of one zone on `date`.
    pub fn rate_at(
        &self,
        zone_id: &str,
        rate_id: &str,
        date: NaiveDate,
    ) -> Result<Decimal, RateError> {
        let zone = self
            .catalog
            .zone(zone_id)
            .ok_or_else(|| RateError::UnknownZone(zone_id.to_string()))?;
        let rate = zone.rate(rate_id).ok_or_else(|| RateError::UnknownRate {
            zone: zone_id.to_string(),
            rate: rate_id.to_string(),
        })?;
        rate.percentage_at(date)
    }

    /// Whether a tax-inclusive price needs a compensating negative tax
    /// line instead of a positive one.
    ///
    /// True iff prices include tax, the customer matches the store
    /// address, and the resolved rates are empty or consist of exactly
    /// the intra-community zero rate.
    pub fn negative_rate_applicable(
        &self,
        resolved: &[ResolvedRate],
        prices_include_tax: bool,
        matches_store_address: bool,
    ) -> bool {
        if !prices_include_tax || !matches_store_address {
            return false;
        }
        match resolved {
            [] => true,
            [only] => self
                .catalog
                .intra_community_zone()
                .is_some_and(|ic| ic.id == only.zone_id),
            _ => false,
        }
    }

    fn resolve_event_address(&self, item: &OrderItemFacts<'_>) -> Option<Address> {
        let resolver = self.event_addresses.as_ref()?;
        let product = item.product?;
        resolver.event_address(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn eu() -> ResolutionEngine<EuVatPolicy> {
        ResolutionEngine::european_union().unwrap()
    }

    #[test]
    fn non_eu_customer_is_untaxed() {
        let engine = eu();
        let item = OrderItemFacts::new(TaxableType::PhysicalGoods, date(2016, 6, 1));
        let customer = CustomerFacts::new(Address::new("US"));
        let store = StoreFacts::new(Address::with_postal_code("DE", "10115"));
        assert!(engine.resolve_zones(&item, &customer, &store).is_empty());
    }

    #[test]
    fn physical_goods_use_store_zone() {
        let engine = eu();
        let item = OrderItemFacts::new(TaxableType::PhysicalGoods, date(2016, 6, 1));
        let customer = CustomerFacts::new(Address::with_postal_code("FR", "75001"));
        let store = StoreFacts::new(Address::with_postal_code("DE", "10115"));
        let zones = engine.resolve_zones(&item, &customer, &store);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id, "de");
    }

    #[test]
    fn rate_at_reads_named_rates() {
        let engine = eu();
        assert_eq!(
            engine.rate_at("de", "reduced", date(2020, 1, 1)).unwrap(),
            dec!(0.07)
        );
        assert!(matches!(
            engine.rate_at("xx", "standard", date(2020, 1, 1)),
            Err(RateError::UnknownZone(_))
        ));
        assert!(matches!(
            engine.rate_at("de", "hotel", date(2020, 1, 1)),
            Err(RateError::UnknownRate { .. })
        ));
    }
}
