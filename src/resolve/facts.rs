//! The order-item, customer and store facts the engine consumes, and the
//! rate records it produces.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::event::EntityNode;
use crate::zone::Address;

/// Classification of what an order item sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxableType {
    /// Goods shipped to the customer.
    PhysicalGoods,
    /// Electronically supplied services and downloads.
    DigitalGoods,
    /// Conferences, exhibitions, trainings — taxed where they are held.
    Events,
}

/// Facts about the order item under calculation.
pub struct OrderItemFacts<'a> {
    /// What the item sells.
    pub taxable_type: TaxableType,
    /// The date tax is calculated for. Gates the 2015 digital-goods rule
    /// and selects rate percentages.
    pub calculation_date: NaiveDate,
    /// The purchased product, when event-address resolution needs to walk
    /// its fields.
    pub product: Option<&'a dyn EntityNode>,
}

impl<'a> OrderItemFacts<'a> {
    pub fn new(taxable_type: TaxableType, calculation_date: NaiveDate) -> Self {
        Self {
            taxable_type,
            calculation_date,
            product: None,
        }
    }

    pub fn with_product(
        taxable_type: TaxableType,
        calculation_date: NaiveDate,
        product: &'a dyn EntityNode,
    ) -> Self {
        Self {
            taxable_type,
            calculation_date,
            product: Some(product),
        }
    }
}

impl fmt::Debug for OrderItemFacts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderItemFacts")
            .field("taxable_type", &self.taxable_type)
            .field("calculation_date", &self.calculation_date)
            .field("product", &self.product.map(|_| "…"))
            .finish()
    }
}

/// Facts about the customer the item is sold to.
#[derive(Debug, Clone)]
pub struct CustomerFacts {
    pub address: Address,
    /// Declared tax identifier. Taken at face value during resolution;
    /// validity is a separate concern.
    pub tax_number: Option<String>,
}

impl CustomerFacts {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            tax_number: None,
        }
    }

    pub fn with_tax_number(address: Address, tax_number: impl Into<String>) -> Self {
        Self {
            address,
            tax_number: Some(tax_number.into()),
        }
    }

    /// Whether a non-empty tax identifier was declared.
    pub fn has_tax_number(&self) -> bool {
        self.tax_number.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Facts about the selling store.
#[derive(Debug, Clone)]
pub struct StoreFacts {
    pub address: Address,
    /// Ids of zones the store voluntarily registered to collect tax in,
    /// regardless of physical presence.
    pub registrations: Vec<String>,
}

impl StoreFacts {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            registrations: Vec::new(),
        }
    }

    pub fn with_registrations<I, S>(address: Address, registrations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            address,
            registrations: registrations.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the store is registered in the given zone.
    pub fn is_registered(&self, zone_id: &str) -> bool {
        self.registrations.iter().any(|r| r == zone_id)
    }
}

/// One applicable rate, as handed to the pricing caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRate {
    pub zone_id: String,
    pub rate_id: String,
    pub label: String,
    /// Decimal fraction, e.g. `0.19` for 19 %.
    pub percentage: Decimal,
}
