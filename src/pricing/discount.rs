//! Discount selection
//!
//! Four rules are evaluated strictly in sequence; each later-matching rule
//! overwrites the previous selection. Last match wins, not first match and
//! not highest value. This override order is an observable contract of the
//! store's pricing and must not be reordered.

use serde::{Deserialize, Serialize};

use super::cart::CartState;
use super::catalog::Catalog;
use super::engine::subtotal;

/// Flat amount off once the subtotal clears 200.
pub const FLAT_10: &str = "flat_10_discount";
/// 5% off one product's line once its quantity clears 10.
pub const BULK_5: &str = "bulk_5_discount";
/// 10% off the subtotal once the cart holds more than 20 items.
pub const BULK_10: &str = "bulk_10_discount";
/// 0.5 per item above 15 on any line, for large carts with a heavy line.
pub const TIERED_50: &str = "tiered_50_discount";

/// A selected discount: rule name plus the amount taken off the subtotal.
///
/// An empty name with amount 0 means no rule matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub name: String,
    pub amount: f64,
}

impl Discount {
    fn named(name: &str, amount: f64) -> Self {
        Self {
            name: name.to_string(),
            amount,
        }
    }

    /// The no-discount sentinel: empty name, zero amount.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}

type Rule = fn(&Catalog, &CartState) -> Option<Discount>;

/// The rule table, in override order. Later entries beat earlier ones.
const RULES: [Rule; 4] = [
    flat_threshold,
    per_product_bulk,
    total_quantity_bulk,
    tiered_overage,
];

/// Picks the applicable discount for the cart, if any.
///
/// Each rule recomputes what it needs from the same snapshot; rules interact
/// only through the override order.
pub fn select_discount(catalog: &Catalog, cart: &CartState) -> Discount {
    let mut selected = Discount::none();
    for rule in RULES {
        if let Some(discount) = rule(catalog, cart) {
            selected = discount;
        }
    }
    selected
}

/// Rule 1: subtotal above 200 earns a flat 10 off.
fn flat_threshold(catalog: &Catalog, cart: &CartState) -> Option<Discount> {
    if subtotal(catalog, cart) > 200.0 {
        return Some(Discount::named(FLAT_10, 10.0));
    }
    None
}

/// Rule 2: the first catalog-order product with more than 10 units earns 5%
/// off that line. The scan stops at the first qualifier even when a later
/// product would yield a larger amount.
fn per_product_bulk(catalog: &Catalog, cart: &CartState) -> Option<Discount> {
    for product in catalog.iter() {
        let quantity = cart.quantity(&product.name);
        if quantity > 10 {
            let amount = product.price * f64::from(quantity) * 5.0 / 100.0;
            return Some(Discount::named(BULK_5, amount));
        }
    }
    None
}

/// Rule 3: more than 20 items in total earns 10% off the subtotal.
fn total_quantity_bulk(catalog: &Catalog, cart: &CartState) -> Option<Discount> {
    if cart.total_quantity() > 20 {
        let amount = subtotal(catalog, cart) * 10.0 / 100.0;
        return Some(Discount::named(BULK_10, amount));
    }
    None
}

/// Rule 4: more than 30 items in total AND some line above 15 units earns
/// 0.5 per unit beyond the 15th on every line.
fn tiered_overage(_catalog: &Catalog, cart: &CartState) -> Option<Discount> {
    let exceeds_30 = cart.total_quantity() > 30;
    let exceeds_15 = cart.quantities.values().any(|&q| q > 15);
    if exceeds_30 && exceeds_15 {
        let overage: u32 = cart
            .quantities
            .values()
            .map(|&q| q.saturating_sub(15))
            .sum();
        return Some(Discount::named(TIERED_50, f64::from(overage) * 0.5));
    }
    None
}
