//! Cart endpoint helpers
//!
//! Small pure functions shared by the handlers: cart-id fallback, conversion
//! of submitted lines into an engine snapshot, and the human-readable
//! checkout report.

use uuid::Uuid;

use super::models::CartLine;
use crate::pricing::{CartState, PricingResult};

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Builds an engine snapshot from submitted lines.
///
/// # Behaviour
///
/// * Lines repeating a product name have their quantities aggregated.
/// * A line's gift-wrap flag turns the product's flag on; once set it stays
///   set for that snapshot.
pub fn cart_state_from_lines(lines: &[CartLine]) -> CartState {
    let mut cart = CartState::new();
    for line in lines {
        *cart.quantities.entry(line.name.clone()).or_insert(0) += line.quantity;
        if line.gift_wrap {
            cart.gift_wraps.insert(line.name.clone(), true);
        }
    }
    cart
}

/// Produces a one-line summary of the cart breakdown for the checkout log.
///
/// Example output:
/// `"subtotal 220.00, discount bulk_5_discount 11.00, shipping 10.00, gift wrap 11.00, total 230.00"`.
pub fn format_breakdown(pricing: &PricingResult) -> String {
    let discount = if pricing.discount.is_none() {
        "none".to_string()
    } else {
        format!("{} {:.2}", pricing.discount.name, pricing.discount.amount)
    };
    format!(
        "subtotal {:.2}, discount {}, shipping {:.2}, gift wrap {:.2}, total {:.2}",
        pricing.subtotal, discount, pricing.shipping_fee, pricing.gift_wrap_fee, pricing.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_lines_aggregate_quantities_and_or_flags() {
        let lines = vec![
            CartLine {
                name: "Product A".into(),
                quantity: 2,
                gift_wrap: true,
            },
            CartLine {
                name: "Product A".into(),
                quantity: 3,
                gift_wrap: false,
            },
            CartLine {
                name: "Product B".into(),
                quantity: 1,
                gift_wrap: false,
            },
        ];

        let cart = cart_state_from_lines(&lines);
        assert_eq!(cart.quantity("Product A"), 5);
        assert_eq!(cart.quantity("Product B"), 1);
        assert!(cart.gift_wrap("Product A"));
        assert!(!cart.gift_wrap("Product B"));
    }

    #[test]
    fn breakdown_formats_to_two_decimals() {
        let pricing = crate::pricing::price(
            &crate::pricing::Catalog::default(),
            &cart_state_from_lines(&[CartLine {
                name: "Product A".into(),
                quantity: 1,
                gift_wrap: false,
            }]),
        );
        assert_eq!(
            format_breakdown(&pricing),
            "subtotal 20.00, discount none, shipping 5.00, gift wrap 1.00, total 26.00"
        );
    }
}
