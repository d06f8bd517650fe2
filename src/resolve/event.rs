//! Event address resolution.
//!
//! Events are taxed where they are held, so the engine needs the address
//! of the event itself, not the customer's or the store's. Deployments
//! configure this as a chain of field names walked from the purchased
//! product: every segment but the last is a single-valued entity
//! reference, the last bears an address. Any empty link along the way
//! means no address can be determined.

use crate::zone::Address;

/// Minimal field access the path walk needs from a product entity graph.
pub trait EntityNode {
    /// The entity a single-valued reference field points to, if the field
    /// exists and is non-empty.
    fn related(&self, field: &str) -> Option<&dyn EntityNode>;

    /// The address held by an address field, if the field exists and is
    /// non-empty.
    fn address(&self, field: &str) -> Option<Address>;
}

/// Resolves the address an event is held at, if one can be determined.
///
/// Absence of a resolver on the engine means no event-address rule is
/// configured for the deployment, which is itself significant to the
/// Swiss overlay.
pub trait AddressResolver: Send + Sync {
    fn event_address(&self, product: &dyn EntityNode) -> Option<Address>;
}

/// Walks a configured `|`-separated chain of field names.
///
/// A single-segment path reads the address directly off the product.
#[derive(Debug, Clone)]
pub struct FieldPathResolver {
    segments: Vec<String>,
}

impl FieldPathResolver {
    /// `path` is e.g. `"field_event|field_venue|field_address"`.
    pub fn new(path: &str) -> Self {
        Self {
            segments: path
                .split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl AddressResolver for FieldPathResolver {
    fn event_address(&self, product: &dyn EntityNode) -> Option<Address> {
        let (address_field, references) = self.segments.split_last()?;
        let mut current = product;
        for field in references {
            current = current.related(field)?;
        }
        current.address(address_field)
    }
}
