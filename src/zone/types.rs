use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RateError;
use super::postal::PostalFilter;

/// Postal address of a party, reduced to the parts territory matching reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ISO 3166-1 alpha-2 country code. Empty when unknown; such an
    /// address matches no territory.
    pub country_code: String,
    /// Postal code, if the address carries one.
    pub postal_code: Option<String>,
}

impl Address {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: None,
        }
    }

    pub fn with_postal_code(
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: Some(postal_code.into()),
        }
    }
}

/// A country-scoped region of a tax zone, optionally refined by postal codes.
#[derive(Debug, Clone)]
pub struct Territory {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// Postal refinement; absent means the whole country.
    pub postal_filter: Option<PostalFilter>,
}

impl Territory {
    /// Whether the territory covers `address`.
    pub fn matches(&self, address: &Address) -> bool {
        if address.country_code != self.country_code {
            return false;
        }
        match &self.postal_filter {
            Some(filter) => filter.accepts(address.postal_code.as_deref()),
            None => true,
        }
    }
}

/// One dated percentage of a rate, in force over `[start_date, end_date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePeriod {
    /// The percentage as a decimal fraction, e.g. `0.19` for 19 %.
    pub percentage: Decimal,
    /// First day the percentage is in force.
    pub start_date: NaiveDate,
    /// First day it is no longer in force; open-ended when absent.
    pub end_date: Option<NaiveDate>,
}

impl RatePeriod {
    /// Whether `date` falls inside the period. Calendar dates only.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.end_date.is_none_or(|end| date < end)
    }
}

/// A named rate of a tax zone with its dated percentage history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchedule {
    pub id: String,
    pub label: String,
    /// Non-overlapping, ascending by start date; at most the last period
    /// is open-ended. Enforced by catalog validation.
    pub periods: Vec<RatePeriod>,
    /// Whether this is the zone's default rate.
    pub is_default: bool,
}

impl RateSchedule {
    /// The percentage in force on `date`.
    ///
    /// A date no period covers is a catalog authoring defect; callers
    /// treat the error as fatal rather than user-recoverable.
    pub fn percentage_at(&self, date: NaiveDate) -> Result<Decimal, RateError> {
        self.periods
            .iter()
            .find(|period| period.contains(date))
            .map(|period| period.percentage)
            .ok_or_else(|| RateError::NoPercentage {
                rate: self.id.clone(),
                date,
            })
    }
}

/// A tax jurisdiction: the territories it covers and the rates it levies.
#[derive(Debug, Clone)]
pub struct TaxZone {
    pub id: String,
    pub label: String,
    /// Label shown next to amounts, e.g. "VAT".
    pub display_label: String,
    /// Matched with logical OR.
    pub territories: Vec<Territory>,
    /// Non-empty; exactly one rate flagged default. Enforced by catalog
    /// validation.
    pub rates: Vec<RateSchedule>,
}

impl TaxZone {
    /// Whether any territory of the zone covers `address`.
    pub fn matches(&self, address: &Address) -> bool {
        self.territories.iter().any(|t| t.matches(address))
    }

    /// Look up a rate by id.
    pub fn rate(&self, rate_id: &str) -> Option<&RateSchedule> {
        self.rates.iter().find(|r| r.id == rate_id)
    }

    /// The rate flagged default.
    pub fn default_rate(&self) -> Option<&RateSchedule> {
        self.rates.iter().find(|r| r.is_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(periods: Vec<RatePeriod>) -> RateSchedule {
        RateSchedule {
            id: "standard".into(),
            label: "Standard".into(),
            periods,
            is_default: true,
        }
    }

    #[test]
    fn territory_country_only() {
        let territory = Territory {
            country_code: "BE".into(),
            postal_filter: None,
        };
        assert!(territory.matches(&Address::new("BE")));
        assert!(territory.matches(&Address::with_postal_code("BE", "1000")));
        assert!(!territory.matches(&Address::new("NL")));
        assert!(!territory.matches(&Address::new("")));
    }

    #[test]
    fn period_boundaries() {
        let period = RatePeriod {
            percentage: dec!(0.23),
            start_date: date(2010, 7, 1),
            end_date: Some(date(2015, 6, 1)),
        };
        assert!(!period.contains(date(2010, 6, 30)));
        assert!(period.contains(date(2010, 7, 1)));
        assert!(period.contains(date(2015, 5, 31)));
        assert!(!period.contains(date(2015, 6, 1)));
    }

    #[test]
    fn open_ended_period() {
        let period = RatePeriod {
            percentage: dec!(0.19),
            start_date: date(2007, 1, 1),
            end_date: None,
        };
        assert!(period.contains(date(2007, 1, 1)));
        assert!(period.contains(date(2099, 12, 31)));
    }

    #[test]
    fn percentage_at_picks_covering_period() {
        let rate = schedule(vec![
            RatePeriod {
                percentage: dec!(0.20),
                start_date: date(2016, 1, 1),
                end_date: Some(date(2017, 1, 1)),
            },
            RatePeriod {
                percentage: dec!(0.19),
                start_date: date(2017, 1, 1),
                end_date: None,
            },
        ]);
        assert_eq!(rate.percentage_at(date(2016, 12, 31)).unwrap(), dec!(0.20));
        assert_eq!(rate.percentage_at(date(2017, 1, 1)).unwrap(), dec!(0.19));
    }

    #[test]
    fn percentage_at_outside_all_periods() {
        let rate = schedule(vec![RatePeriod {
            percentage: dec!(0.20),
            start_date: date(2016, 1, 1),
            end_date: None,
        }]);
        let err = rate.percentage_at(date(2015, 12, 31)).unwrap_err();
        assert!(matches!(err, RateError::NoPercentage { .. }));
    }
}
