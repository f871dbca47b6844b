//! Cart state snapshot
//!
//! A `CartState` is the caller-owned input to the pricing engine: one
//! quantity and one gift-wrap flag per product name. The engine never mutates
//! it and never keeps it around; every pricing call receives a fresh
//! snapshot and recomputes from scratch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-request cart contents: product name → quantity, product name → wrap flag.
///
/// Absent entries read as quantity 0 / flag false. Keys that do not match any
/// catalog product are tolerated: they contribute nothing to monetary sums
/// but do count toward the total item quantity, since the quantity-based fees
/// and rules sum every cart entry regardless of catalog membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Selected quantity per product name
    pub quantities: HashMap<String, u32>,

    /// Gift-wrap flag per product name
    pub gift_wraps: HashMap<String, bool>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity selected for `name`, 0 when absent.
    pub fn quantity(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Whether `name` is flagged for gift wrap, false when absent.
    pub fn gift_wrap(&self, name: &str) -> bool {
        self.gift_wraps.get(name).copied().unwrap_or(false)
    }

    /// Sum of all quantities in the cart, unknown product names included.
    pub fn total_quantity(&self) -> u32 {
        self.quantities.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_quantity() == 0
    }
}
