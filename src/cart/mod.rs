//! Cart Endpoint Module
//!
//! The server-side caller of the pricing engine:
//! - Wire models (cart lines, inputs, responses)
//! - Endpoint helpers (id fallback, line aggregation, breakdown report)
//! - Application state (catalog + cart store)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
