//! REST API handlers for cart pricing operations
//!
//! Three endpoints: `/price` computes a stateless quote for submitted lines,
//! `/sync_cart` stores the submitted cart and returns its fresh breakdown,
//! `/checkout` prices the stored cart, reports the breakdown and clears it.

use super::{helpers::*, models::*, state::SharedState};
use crate::pricing::{price, CartState};
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/price", post(price_cart))
        .route("/sync_cart", post(sync_cart))
        .route("/checkout", post(checkout))
}

/// Endpoint: POST /price
/// Prices the submitted lines without touching the cart store. This is the
/// recompute-on-every-input path: the frontend calls it whenever a quantity
/// or wrap checkbox changes.
async fn price_cart(
    State(state): State<SharedState>,
    Json(payload): Json<SyncCartInput>,
) -> impl IntoResponse {
    let cart_id = get_or_create_cart_id(payload.cart_id);
    let cart = cart_state_from_lines(&payload.items);
    let pricing = price(&state.catalog, &cart);

    Json(PriceResponse {
        status: "quoted".to_string(),
        cart_id,
        pricing,
    })
}

/// Endpoint: POST /sync_cart
/// Updates the backend state to match the frontend state exactly, then
/// returns the fresh pricing breakdown for the stored cart.
async fn sync_cart(
    State(state): State<SharedState>,
    Json(payload): Json<SyncCartInput>,
) -> impl IntoResponse {
    let cart_id = get_or_create_cart_id(payload.cart_id);
    let cart = cart_state_from_lines(&payload.items);
    let pricing = price(&state.catalog, &cart);

    state.carts.insert(cart_id.clone(), cart);

    Json(PriceResponse {
        status: "updated".to_string(),
        cart_id,
        pricing,
    })
}

/// Endpoint: POST /checkout
/// Prices the stored cart, reports the full breakdown to stdout and removes
/// the cart. An unknown cart id checks out as an empty cart.
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<CheckoutInput>,
) -> impl IntoResponse {
    let cart_id = get_or_create_cart_id(payload.cart_id);

    let cart = state
        .carts
        .remove(&cart_id)
        .map(|(_, cart)| cart)
        .unwrap_or_else(CartState::new);

    let pricing = price(&state.catalog, &cart);

    println!("CHECKOUT: Cart {} - quantities {:?}", cart_id, cart.quantities);
    println!("CHECKOUT: Cart {} - {}", cart_id, format_breakdown(&pricing));

    Json(PriceResponse {
        status: "checked_out".to_string(),
        cart_id,
        pricing,
    })
}
