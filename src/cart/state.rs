//! Cart store and application state
//!
//! Holds the carts known to the server plus the product catalog shared by
//! every pricing call. The catalog is loaded once at startup and never
//! changes afterwards.

use crate::pricing::{Catalog, CartState};
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the catalog and the cart store
pub struct AppState {
    /// Fixed product catalog, loaded once.
    pub catalog: Catalog,

    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, CartState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with the standard catalog and no carts
    pub fn new() -> Self {
        Self::with_catalog(Catalog::default())
    }

    /// Creates a new AppState around a specific catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            carts: DashMap::new(),
        }
    }
}
