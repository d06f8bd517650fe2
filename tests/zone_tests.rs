use chrono::NaiveDate;
use mehrwert::catalog::ZoneCatalog;
use mehrwert::zone::{Address, RateError};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn eu() -> ZoneCatalog {
    ZoneCatalog::european_union().unwrap()
}

fn matched_ids(catalog: &ZoneCatalog, address: &Address) -> Vec<String> {
    catalog
        .zones_matching(address)
        .iter()
        .map(|z| z.id.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Territory Matching — Plain Countries
// ---------------------------------------------------------------------------

#[test]
fn belgium_matches_on_country_alone() {
    let catalog = eu();
    assert_eq!(matched_ids(&catalog, &Address::new("BE")), ["be"]);
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("BE", "1000")),
        ["be"]
    );
}

#[test]
fn unknown_country_matches_nothing() {
    let catalog = eu();
    assert!(matched_ids(&catalog, &Address::new("US")).is_empty());
    assert!(matched_ids(&catalog, &Address::new("")).is_empty());
}

#[test]
fn monaco_taxes_as_france() {
    let catalog = eu();
    assert_eq!(matched_ids(&catalog, &Address::new("MC")), ["fr"]);
}

#[test]
fn isle_of_man_taxes_as_uk() {
    let catalog = eu();
    assert_eq!(matched_ids(&catalog, &Address::new("IM")), ["gb"]);
}

// ---------------------------------------------------------------------------
// Territory Matching — Postal Carve-Outs
// ---------------------------------------------------------------------------

#[test]
fn austrian_enclaves_tax_as_germany() {
    let catalog = eu();
    // Jungholz.
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("AT", "6691")),
        ["de"]
    );
    // Mittelberg.
    for code in ["6991", "6992", "6993"] {
        assert_eq!(
            matched_ids(&catalog, &Address::with_postal_code("AT", code)),
            ["de"]
        );
    }
    // Vienna stays Austrian.
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("AT", "1010")),
        ["at"]
    );
}

#[test]
fn heligoland_is_outside_every_eu_zone() {
    let catalog = eu();
    assert!(matched_ids(&catalog, &Address::with_postal_code("DE", "27498")).is_empty());
}

#[test]
fn buesingen_is_swiss_not_german() {
    let catalog = eu();
    let buesingen = Address::with_postal_code("DE", "78266");
    assert!(matched_ids(&catalog, &buesingen).is_empty());
    let external: Vec<_> = catalog
        .external_zones_matching(&buesingen)
        .iter()
        .map(|z| z.id.clone())
        .collect();
    assert_eq!(external, ["ch"]);
}

#[test]
fn greek_islands_are_excluded_by_pattern() {
    let catalog = eu();
    // Thassos.
    assert!(matched_ids(&catalog, &Address::with_postal_code("GR", "64004")).is_empty());
    // Samothrace, with the optional space the pattern allows.
    assert!(matched_ids(&catalog, &Address::with_postal_code("GR", "680 02")).is_empty());
    // Skiros.
    assert!(matched_ids(&catalog, &Address::with_postal_code("GR", "34007")).is_empty());
    // Northern Sporades prefix.
    assert!(matched_ids(&catalog, &Address::with_postal_code("GR", "37001")).is_empty());
    // Athens is mainland Greece.
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("GR", "10432")),
        ["gr"]
    );
}

#[test]
fn canary_islands_ceuta_melilla_are_excluded() {
    let catalog = eu();
    for code in ["35001", "38001", "51001", "52001"] {
        assert!(matched_ids(&catalog, &Address::with_postal_code("ES", code)).is_empty());
    }
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("ES", "28001")),
        ["es"]
    );
}

#[test]
fn corsica_has_its_own_zone() {
    let catalog = eu();
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("FR", "20000")),
        ["fr_h"]
    );
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("FR", "75001")),
        ["fr"]
    );
}

#[test]
fn madeira_has_its_own_zone_and_azores_none() {
    let catalog = eu();
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("PT", "9500-321")),
        ["pt_30"]
    );
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("PT", "1000-001")),
        ["pt"]
    );
    // The Azores are outside both mainland and Madeira schedules.
    assert!(matched_ids(&catalog, &Address::with_postal_code("PT", "9000-123")).is_empty());
}

#[test]
fn aland_islands_are_excluded_from_finland() {
    let catalog = eu();
    assert!(matched_ids(&catalog, &Address::with_postal_code("FI", "22100")).is_empty());
    assert_eq!(
        matched_ids(&catalog, &Address::with_postal_code("FI", "00100")),
        ["fi"]
    );
}

#[test]
fn missing_postal_code_passes_exclusion_filters() {
    // A German address without a postal code cannot hit the exclusions.
    let catalog = eu();
    assert_eq!(matched_ids(&catalog, &Address::new("DE")), ["de"]);
    // But it cannot satisfy an inclusion filter either.
    let swiss = ZoneCatalog::switzerland().unwrap();
    assert!(swiss.zones_matching(&Address::new("DE")).is_empty());
}

// ---------------------------------------------------------------------------
// Rate Selection
// ---------------------------------------------------------------------------

#[test]
fn greece_standard_rate_history() {
    let catalog = eu();
    let rate = catalog.zone("gr").unwrap().rate("standard").unwrap();
    assert_eq!(rate.percentage_at(date(2010, 7, 1)).unwrap(), dec!(0.23));
    assert_eq!(rate.percentage_at(date(2015, 5, 31)).unwrap(), dec!(0.23));
    assert_eq!(rate.percentage_at(date(2016, 6, 1)).unwrap(), dec!(0.24));
    assert_eq!(rate.percentage_at(date(2020, 1, 1)).unwrap(), dec!(0.24));
}

#[test]
fn greece_gap_between_periods_is_a_defect() {
    let catalog = eu();
    let rate = catalog.zone("gr").unwrap().rate("standard").unwrap();
    assert!(matches!(
        rate.percentage_at(date(2015, 12, 1)),
        Err(RateError::NoPercentage { .. })
    ));
    assert!(matches!(
        rate.percentage_at(date(2009, 1, 1)),
        Err(RateError::NoPercentage { .. })
    ));
}

#[test]
fn romania_rate_change_at_year_boundary() {
    let catalog = eu();
    let rate = catalog.zone("ro").unwrap().rate("standard").unwrap();
    assert_eq!(rate.percentage_at(date(2016, 12, 31)).unwrap(), dec!(0.20));
    assert_eq!(rate.percentage_at(date(2017, 1, 1)).unwrap(), dec!(0.19));
}

#[test]
fn default_rates_are_the_standard_rates() {
    let catalog = eu();
    let germany = catalog.zone("de").unwrap();
    let default = germany.default_rate().unwrap();
    assert_eq!(default.id, "standard");
    assert_eq!(default.percentage_at(date(2020, 6, 1)).unwrap(), dec!(0.19));
}

#[test]
fn intra_community_rate_is_zero() {
    let catalog = eu();
    let ic = catalog.intra_community_zone().unwrap();
    let rate = ic.default_rate().unwrap();
    assert_eq!(rate.percentage_at(date(2020, 1, 1)).unwrap(), dec!(0));
}

#[test]
fn swiss_rates() {
    let catalog = ZoneCatalog::switzerland().unwrap();
    let ch = catalog.zone("ch").unwrap();
    assert_eq!(
        ch.rate("standard")
            .unwrap()
            .percentage_at(date(2015, 1, 1))
            .unwrap(),
        dec!(0.08)
    );
    assert_eq!(
        ch.rate("hotel")
            .unwrap()
            .percentage_at(date(2015, 1, 1))
            .unwrap(),
        dec!(0.038)
    );
}
