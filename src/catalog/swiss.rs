//! Swiss VAT zone table.
//!
//! A single zone covering Switzerland, Liechtenstein and the two enclaves
//! inside the EU that Swiss VAT claims. The same table serves as the EU
//! catalog's external zone set, so the two regimes can never disagree on
//! which addresses count as Swiss.

use rust_decimal_macros::dec;

use super::{PeriodDef, RateDef, TerritoryDef, ZoneDef};

pub(crate) static SWISS_ZONES: &[ZoneDef] = &[ZoneDef {
    id: "ch",
    label: "Switzerland",
    display_label: "VAT",
    territories: &[
        TerritoryDef::country("CH"),
        TerritoryDef::country("LI"),
        // Büsingen.
        TerritoryDef::included("DE", "78266"),
        // Lake Lugano.
        TerritoryDef::included("IT", "22060"),
    ],
    rates: &[
        RateDef {
            id: "standard",
            label: "Standard",
            default: true,
            periods: &[PeriodDef::since(dec!(0.08), "2011-01-01")],
        },
        RateDef {
            id: "hotel",
            label: "Hotel",
            default: false,
            periods: &[PeriodDef::since(dec!(0.038), "2011-01-01")],
        },
        RateDef {
            id: "reduced",
            label: "Reduced",
            default: false,
            periods: &[PeriodDef::since(dec!(0.025), "2011-01-01")],
        },
    ],
}];
