//! Cart Pricing Engine
//!
//! This library provides a pure cart-pricing engine (subtotal, discount
//! selection, shipping and gift-wrap fees) plus the REST surface that the
//! presentation layer calls on every cart change and on checkout.

// Domain modules
pub mod cart;
pub mod pricing;

// Infrastructure
pub mod router;
