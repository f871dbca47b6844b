//! Pricing computation
//!
//! The engine is a pure function of catalog + cart snapshot. Nothing is
//! cached between calls and nothing is mutated; every call recomputes the
//! full breakdown, so it is trivially safe to invoke from any number of
//! callers at once.

use serde::{Deserialize, Serialize};

use super::cart::CartState;
use super::catalog::Catalog;
use super::discount::{select_discount, Discount};

/// Flat rate charged per shipping package.
const SHIPPING_RATE_PER_PACKAGE: f64 = 5.0;
/// Items covered by one shipping package.
const ITEMS_PER_PACKAGE: u32 = 10;
/// Gift-wrap charge per item.
const GIFT_WRAP_RATE_PER_ITEM: f64 = 1.0;

/// Full pricing breakdown for one cart snapshot.
///
/// Transient, derived value: recomputed fresh on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: f64,
    pub discount: Discount,
    pub shipping_fee: f64,
    pub gift_wrap_fee: f64,
    pub total: f64,
}

/// Sum of `quantity × unit price` over the catalog.
///
/// Cart entries that name no catalog product contribute nothing here.
pub fn subtotal(catalog: &Catalog, cart: &CartState) -> f64 {
    catalog
        .iter()
        .map(|product| f64::from(cart.quantity(&product.name)) * product.price)
        .sum()
}

/// Shipping fee: one package per started group of 10 items, 5 per package.
///
/// An empty cart ships in zero packages and pays nothing.
pub fn shipping_fee(cart: &CartState) -> f64 {
    let package_count = cart.total_quantity().div_ceil(ITEMS_PER_PACKAGE);
    f64::from(package_count) * SHIPPING_RATE_PER_PACKAGE
}

/// Gift-wrap fee: 1 per item in the cart.
///
/// The per-product gift-wrap flags are part of the cart snapshot but are not
/// consulted here; the charge applies to every item uniformly. This mirrors
/// the store's established behavior (see DESIGN.md).
pub fn gift_wrap_fee(cart: &CartState) -> f64 {
    f64::from(cart.total_quantity()) * GIFT_WRAP_RATE_PER_ITEM
}

/// The single public entry point: composes subtotal, discount selection and
/// both fees into the final breakdown.
pub fn price(catalog: &Catalog, cart: &CartState) -> PricingResult {
    let subtotal = subtotal(catalog, cart);
    let discount = select_discount(catalog, cart);
    let shipping_fee = shipping_fee(cart);
    let gift_wrap_fee = gift_wrap_fee(cart);
    let total = subtotal - discount.amount + shipping_fee + gift_wrap_fee;

    PricingResult {
        subtotal,
        discount,
        shipping_fee,
        gift_wrap_fee,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::discount::{BULK_10, BULK_5, TIERED_50};

    fn cart(entries: &[(&str, u32)]) -> CartState {
        let mut cart = CartState::new();
        for &(name, quantity) in entries {
            cart.quantities.insert(name.to_string(), quantity);
        }
        cart
    }

    fn assert_money(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_cart_prices_to_all_zeros() {
        let result = price(&Catalog::default(), &CartState::new());
        assert_money(result.subtotal, 0.0);
        assert!(result.discount.is_none());
        assert_money(result.shipping_fee, 0.0);
        assert_money(result.gift_wrap_fee, 0.0);
        assert_money(result.total, 0.0);
    }

    #[test]
    fn subtotal_is_linear_in_quantities() {
        let catalog = Catalog::default();
        let single = cart(&[("Product A", 2), ("Product B", 3), ("Product C", 1)]);
        let doubled = cart(&[("Product A", 4), ("Product B", 6), ("Product C", 2)]);
        assert_money(subtotal(&catalog, &doubled), 2.0 * subtotal(&catalog, &single));
    }

    #[test]
    fn subtotal_ignores_unknown_product_names() {
        let catalog = Catalog::default();
        let c = cart(&[("Product A", 2), ("Discontinued", 5)]);
        assert_money(subtotal(&catalog, &c), 40.0);
    }

    #[test]
    fn shipping_fee_steps_every_ten_items() {
        assert_money(shipping_fee(&cart(&[])), 0.0);
        assert_money(shipping_fee(&cart(&[("Product A", 1)])), 5.0);
        assert_money(shipping_fee(&cart(&[("Product A", 10)])), 5.0);
        assert_money(shipping_fee(&cart(&[("Product A", 11)])), 10.0);
        assert_money(shipping_fee(&cart(&[("Product A", 20)])), 10.0);
        assert_money(shipping_fee(&cart(&[("Product A", 21)])), 15.0);
    }

    #[test]
    fn gift_wrap_fee_ignores_the_flags() {
        let mut flagged = cart(&[("Product A", 4), ("Product B", 2)]);
        flagged.gift_wraps.insert("Product A".into(), true);
        let unflagged = cart(&[("Product A", 4), ("Product B", 2)]);
        assert_money(gift_wrap_fee(&flagged), 6.0);
        assert_money(gift_wrap_fee(&unflagged), 6.0);
    }

    #[test]
    fn scenario_single_item() {
        // A:1 → subtotal 20, no discount, shipping 5, wrap 1, total 26
        let result = price(&Catalog::default(), &cart(&[("Product A", 1)]));
        assert_money(result.subtotal, 20.0);
        assert!(result.discount.is_none());
        assert_money(result.shipping_fee, 5.0);
        assert_money(result.gift_wrap_fee, 1.0);
        assert_money(result.total, 26.0);
    }

    #[test]
    fn scenario_per_product_bulk() {
        // A:11 → subtotal 220, bulk_5_discount 11, shipping 10, wrap 11,
        // total 230
        let result = price(&Catalog::default(), &cart(&[("Product A", 11)]));
        assert_money(result.subtotal, 220.0);
        assert_eq!(result.discount.name, BULK_5);
        assert_money(result.discount.amount, 11.0);
        assert_money(result.shipping_fee, 10.0);
        assert_money(result.gift_wrap_fee, 11.0);
        assert_money(result.total, 230.0);
    }

    #[test]
    fn scenario_total_quantity_bulk() {
        // A:25 → subtotal 500, bulk_10_discount 50, shipping 15, wrap 25,
        // total 490
        let result = price(&Catalog::default(), &cart(&[("Product A", 25)]));
        assert_money(result.subtotal, 500.0);
        assert_eq!(result.discount.name, BULK_10);
        assert_money(result.discount.amount, 50.0);
        assert_money(result.shipping_fee, 15.0);
        assert_money(result.gift_wrap_fee, 25.0);
        assert_money(result.total, 490.0);
    }

    #[test]
    fn scenario_tiered_overage() {
        // A:20, B:16 → subtotal 1040, tiered_50_discount 3, shipping 20,
        // wrap 36, total 1093
        let result = price(
            &Catalog::default(),
            &cart(&[("Product A", 20), ("Product B", 16)]),
        );
        assert_money(result.subtotal, 1040.0);
        assert_eq!(result.discount.name, TIERED_50);
        assert_money(result.discount.amount, 3.0);
        assert_money(result.shipping_fee, 20.0);
        assert_money(result.gift_wrap_fee, 36.0);
        assert_money(result.total, 1093.0);
    }

    #[test]
    fn price_is_deterministic_across_calls() {
        let catalog = Catalog::default();
        let c = cart(&[("Product A", 7), ("Product C", 3)]);
        assert_eq!(price(&catalog, &c), price(&catalog, &c));
    }
}
