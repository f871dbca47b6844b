//! Wire models for the cart endpoints
//!
//! These are the request/response shapes exchanged with the presentation
//! layer. The pricing types themselves live in `crate::pricing`.

use serde::{Deserialize, Serialize};

use crate::pricing::PricingResult;

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// One line submitted by the frontend: product name, quantity, wrap flag.
///
/// Quantities are unsigned at the boundary, so negative values are rejected
/// during deserialization and never reach the pricing engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Name of the product
    pub name: String,

    /// Quantity of this line (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Whether this line is flagged for gift wrap
    #[serde(default)]
    pub gift_wrap: bool,
}

/// Input for the sync_cart and price endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCartInput {
    /// Lines making up the cart
    pub items: Vec<CartLine>,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for the checkout endpoint
#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    /// Optional cart identifier
    #[serde(rename = "cartId")]
    pub cart_id: Option<String>,
}

/// Response carrying a freshly computed pricing breakdown
#[derive(Serialize)]
pub struct PriceResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    #[serde(rename = "cartId")]
    pub cart_id: String,

    /// Full breakdown for the cart as priced by this request
    pub pricing: PricingResult,
}
