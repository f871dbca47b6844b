//! Pricing Engine
//!
//! Pure cart-pricing logic: given a fixed catalog and a cart snapshot,
//! compute the subtotal, the single applicable discount, the shipping and
//! gift-wrap fees, and the grand total. The engine holds no state and does
//! no I/O; callers supply a fresh snapshot on every call.

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod engine;

// Re-export the engine surface for convenience
pub use cart::CartState;
pub use catalog::{Catalog, Product};
pub use discount::{select_discount, Discount};
pub use engine::{gift_wrap_fee, price, shipping_fee, subtotal, PricingResult};
