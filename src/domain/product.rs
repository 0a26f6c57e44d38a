//! Product Domain Model
//!
//! The catalog entity handed to the rest of the application once an import
//! resolves. Callers own the returned values outright.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product from the Golden Leaf catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier, kept as text
    pub id: String,

    /// Human-readable description
    pub description: String,

    /// Price of a single unit
    pub unit_cost: f64,
}

impl Product {
    /// Create a product from its three fields, in wire order
    pub fn new(id: impl Into<String>, description: impl Into<String>, unit_cost: f64) -> Self {
        Product {
            id: id.into(),
            description: description.into(),
            unit_cost,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({:.2})", self.id, self.description, self.unit_cost)
    }
}
