//! EU VAT zone table.
//!
//! One entry per member-state jurisdiction, with the postal carve-outs
//! that move territory between zones (Austrian enclaves taxed by Germany,
//! Corsica and Madeira with their own schedules) and the synthetic
//! intra-community zone for cross-border B2B reporting. Percentages are
//! decimal fractions; dates mark the first day a percentage is in force.

use rust_decimal_macros::dec;

use super::{PeriodDef, RateDef, TerritoryDef, ZoneDef};

pub(crate) static EU_ZONES: &[ZoneDef] = &[
    ZoneDef {
        id: "at",
        label: "Austria",
        display_label: "VAT",
        territories: &[
            // Austria without Jungholz and Mittelberg.
            TerritoryDef::excluded("AT", "6691, 6991:6993"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "1995-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.13), "2016-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "1995-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "be",
        label: "Belgium",
        display_label: "VAT",
        territories: &[TerritoryDef::country("BE")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.21), "1996-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.12), "1992-04-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.06), "1971-01-01")],
            },
            RateDef {
                id: "zero",
                label: "Zero",
                default: false,
                periods: &[PeriodDef::since(dec!(0), "1971-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "bg",
        label: "Bulgaria",
        display_label: "VAT",
        territories: &[TerritoryDef::country("BG")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "2007-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.09), "2011-04-01")],
            },
        ],
    },
    ZoneDef {
        id: "cy",
        label: "Cyprus",
        display_label: "VAT",
        territories: &[TerritoryDef::country("CY")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.19), "2014-01-13")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.09), "2014-01-13")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2004-05-01")],
            },
        ],
    },
    ZoneDef {
        id: "cz",
        label: "Czech Republic",
        display_label: "VAT",
        territories: &[TerritoryDef::country("CZ")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.21), "2013-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.15), "2013-01-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "2015-01-01")],
            },
            RateDef {
                id: "zero",
                label: "Zero",
                default: false,
                periods: &[PeriodDef::since(dec!(0), "2004-05-01")],
            },
        ],
    },
    ZoneDef {
        id: "de",
        label: "Germany",
        display_label: "VAT",
        territories: &[
            // Germany without Heligoland and Büsingen.
            TerritoryDef::excluded("DE", "27498, 78266"),
            // Austria (Jungholz and Mittelberg).
            TerritoryDef::included("AT", "6691, 6991:6993"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.19), "2007-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.07), "1983-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "dk",
        label: "Denmark",
        display_label: "VAT",
        territories: &[TerritoryDef::country("DK")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.25), "1992-01-01")],
            },
            RateDef {
                id: "zero",
                label: "Zero",
                default: false,
                periods: &[PeriodDef::since(dec!(0), "1973-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "ee",
        label: "Estonia",
        display_label: "VAT",
        territories: &[TerritoryDef::country("EE")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "2009-07-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.09), "2009-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "es",
        label: "Spain",
        display_label: "VAT",
        territories: &[
            // Spain without the Canary Islands, Ceuta and Melilla.
            TerritoryDef::excluded("ES", "/(35|38|51|52)[0-9]{3}/"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.21), "2012-09-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "2012-09-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.04), "1995-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "fi",
        label: "Finland",
        display_label: "VAT",
        territories: &[
            // Finland without the Åland Islands.
            TerritoryDef::excluded("FI", "22000:22999"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.24), "2013-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.14), "2013-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "2013-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "fr",
        label: "France",
        display_label: "VAT",
        territories: &[
            // France without Corsica.
            TerritoryDef::excluded("FR", "/(20)[0-9]{3}/"),
            TerritoryDef::country("MC"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "2014-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "2014-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.055), "1982-07-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.021), "1986-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "fr_h",
        label: "France (Corsica)",
        display_label: "VAT",
        territories: &[TerritoryDef::included("FR", "/(20)[0-9]{3}/")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "2014-01-01")],
            },
            RateDef {
                id: "special",
                label: "Special",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "2014-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.021), "1997-09-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.009), "1972-04-01")],
            },
        ],
    },
    ZoneDef {
        id: "gb",
        label: "United Kingdom",
        display_label: "VAT",
        territories: &[TerritoryDef::country("GB"), TerritoryDef::country("IM")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "2011-01-04")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "1997-09-01")],
            },
            RateDef {
                id: "zero",
                label: "Zero",
                default: false,
                periods: &[PeriodDef::since(dec!(0), "1973-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "gr",
        label: "Greece",
        display_label: "VAT",
        territories: &[
            // Greece without Thassos, Samothrace, Skiros, the Northern
            // Sporades, Lesbos, Chios, the Cyclades and the Dodecanese.
            TerritoryDef::excluded(
                "GR",
                "/640 ?04|680 ?02|340 ?07|((370|811|821|840|851) ?[0-9]{2})/",
            ),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[
                    PeriodDef::between(dec!(0.23), "2010-07-01", "2015-06-01"),
                    PeriodDef::since(dec!(0.24), "2016-06-01"),
                ],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.13), "2011-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.06), "2015-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "hr",
        label: "Croatia",
        display_label: "VAT",
        territories: &[TerritoryDef::country("HR")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.25), "2013-07-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.13), "2014-01-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2014-01-01")],
            },
            RateDef {
                id: "zero",
                label: "Zero",
                default: false,
                periods: &[PeriodDef::since(dec!(0), "2013-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "hu",
        label: "Hungary",
        display_label: "VAT",
        territories: &[TerritoryDef::country("HU")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.27), "2012-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.18), "2009-07-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2004-05-01")],
            },
        ],
    },
    ZoneDef {
        id: "ie",
        label: "Ireland",
        display_label: "VAT",
        territories: &[TerritoryDef::country("IE")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.23), "2012-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.135), "2003-01-01")],
            },
            RateDef {
                id: "second_reduced",
                label: "Second Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.09), "2011-07-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.048), "2005-01-01")],
            },
            RateDef {
                id: "zero",
                label: "Zero",
                default: false,
                periods: &[PeriodDef::since(dec!(0), "1972-04-01")],
            },
        ],
    },
    ZoneDef {
        id: "it",
        label: "Italy",
        display_label: "VAT",
        territories: &[
            // Italy without Livigno, Campione d'Italia and Lake Lugano.
            TerritoryDef::excluded("IT", "23030, 22060"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.22), "2013-10-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "1995-02-24")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.04), "1989-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "lt",
        label: "Lithuania",
        display_label: "VAT",
        territories: &[TerritoryDef::country("LT")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.21), "2009-09-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.09), "2004-05-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2004-05-01")],
            },
        ],
    },
    ZoneDef {
        id: "lu",
        label: "Luxembourg",
        display_label: "VAT",
        territories: &[TerritoryDef::country("LU")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.17), "2015-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.14), "2015-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.08), "2015-01-01")],
            },
            RateDef {
                id: "super_reduced",
                label: "Super Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.03), "1983-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "lv",
        label: "Latvia",
        display_label: "VAT",
        territories: &[TerritoryDef::country("LV")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.21), "2012-07-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.12), "2011-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "mt",
        label: "Malta",
        display_label: "VAT",
        territories: &[TerritoryDef::country("MT")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.18), "2004-05-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.07), "2011-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2004-05-01")],
            },
        ],
    },
    ZoneDef {
        id: "nl",
        label: "Netherlands",
        display_label: "VAT",
        territories: &[TerritoryDef::country("NL")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.21), "2012-10-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.06), "1986-10-01")],
            },
        ],
    },
    ZoneDef {
        id: "pl",
        label: "Poland",
        display_label: "VAT",
        territories: &[TerritoryDef::country("PL")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.23), "2011-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.08), "2011-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2011-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "pt",
        label: "Portugal",
        display_label: "VAT",
        territories: &[
            // Portugal without the Azores and Madeira.
            TerritoryDef::excluded("PT", "/(9)[0-9]{3}-[0-9]{3}/"),
        ],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.23), "2011-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.13), "2010-07-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.06), "2010-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "pt_30",
        label: "Portugal (Madeira)",
        display_label: "VAT",
        territories: &[TerritoryDef::included("PT", "/(9)[5-9][0-9]{2}-[0-9]{3}/")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.22), "2012-04-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.12), "2012-04-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2012-04-01")],
            },
        ],
    },
    ZoneDef {
        id: "ro",
        label: "Romania",
        display_label: "VAT",
        territories: &[TerritoryDef::country("RO")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[
                    PeriodDef::between(dec!(0.20), "2016-01-01", "2017-01-01"),
                    PeriodDef::since(dec!(0.19), "2017-01-01"),
                ],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.09), "2008-12-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.05), "2008-12-01")],
            },
        ],
    },
    ZoneDef {
        id: "se",
        label: "Sweden",
        display_label: "VAT",
        territories: &[TerritoryDef::country("SE")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.25), "1995-01-01")],
            },
            RateDef {
                id: "intermediate",
                label: "Intermediate",
                default: false,
                periods: &[PeriodDef::since(dec!(0.12), "1995-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.06), "1996-01-01")],
            },
        ],
    },
    ZoneDef {
        id: "si",
        label: "Slovenia",
        display_label: "VAT",
        territories: &[TerritoryDef::country("SI")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.22), "2013-07-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.095), "2013-07-01")],
            },
        ],
    },
    ZoneDef {
        id: "sk",
        label: "Slovakia",
        display_label: "VAT",
        territories: &[TerritoryDef::country("SK")],
        rates: &[
            RateDef {
                id: "standard",
                label: "Standard",
                default: true,
                periods: &[PeriodDef::since(dec!(0.2), "2011-01-01")],
            },
            RateDef {
                id: "reduced",
                label: "Reduced",
                default: false,
                periods: &[PeriodDef::since(dec!(0.1), "2011-01-01")],
            },
        ],
    },
    // The synthetic intra-community zone, selected by id for cross-border
    // B2B supplies. Its placeholder territory matches no real address.
    ZoneDef {
        id: "ic",
        label: "Intra-Community Supply",
        display_label: "Intra-Community Supply",
        territories: &[TerritoryDef::country("EU")],
        rates: &[RateDef {
            id: "ic",
            label: "Intra-Community Supply",
            default: true,
            periods: &[PeriodDef::since(dec!(0), "1970-01-01")],
        }],
    },
];
