//! Property-based tests and edge case tests over the zone catalogs.

use chrono::Days;
use mehrwert::catalog::ZoneCatalog;
use mehrwert::zone::Address;
use proptest::prelude::*;

proptest! {
    /// A zone without postal filters matches on country equality alone.
    #[test]
    fn filterless_zone_matches_on_country_alone(code in "[0-9]{4,7}") {
        let catalog = ZoneCatalog::european_union().unwrap();
        let belgium = catalog.zone("be").unwrap();
        prop_assert!(belgium.matches(&Address::with_postal_code("BE", code.clone())));
        prop_assert!(!belgium.matches(&Address::with_postal_code("NL", code)));
    }

    /// Range filters fail closed: a code with no digits is in no range,
    /// so all-letter codes never hit the Åland exclusion.
    #[test]
    fn letter_codes_never_hit_numeric_ranges(code in "[A-Za-z]{1,8}") {
        let catalog = ZoneCatalog::european_union().unwrap();
        let finland = catalog.zone("fi").unwrap();
        prop_assert!(finland.matches(&Address::with_postal_code("FI", code)));
    }

    /// Every code either stays in mainland Spain or is carved out —
    /// matching is total and deterministic.
    #[test]
    fn spain_split_is_exhaustive(code in "[0-9]{5}") {
        let catalog = ZoneCatalog::european_union().unwrap();
        let address = Address::with_postal_code("ES", code.clone());
        let matched = catalog.zones_matching(&address);
        let carved_out = code.starts_with("35")
            || code.starts_with("38")
            || code.starts_with("51")
            || code.starts_with("52");
        prop_assert_eq!(matched.is_empty(), carved_out);
    }
}

/// Every period of every rate answers for its own boundary dates:
/// start inclusive, end exclusive.
#[test]
fn rate_periods_answer_for_their_boundaries() {
    let catalogs = [
        ZoneCatalog::european_union().unwrap(),
        ZoneCatalog::switzerland().unwrap(),
    ];
    for catalog in &catalogs {
        for zone in catalog.zones() {
            for rate in &zone.rates {
                for period in &rate.periods {
                    assert_eq!(
                        rate.percentage_at(period.start_date).unwrap(),
                        period.percentage,
                        "{}/{} at {}",
                        zone.id,
                        rate.id,
                        period.start_date
                    );
                    if let Some(end) = period.end_date {
                        let last = end.checked_sub_days(Days::new(1)).unwrap();
                        assert_eq!(
                            rate.percentage_at(last).unwrap(),
                            period.percentage,
                            "{}/{} at {}",
                            zone.id,
                            rate.id,
                            last
                        );
                    }
                }
            }
        }
    }
}
