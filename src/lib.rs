//! Golden Leaf Catalog
//!
//! Client for the Golden Leaf store API: imports the products of a category
//! and maps them into typed domain objects.

pub mod cli;
pub mod config;
pub mod domain;
pub mod providers;

pub use crate::config::Settings;
pub use crate::domain::Product;
pub use crate::providers::{handlers, ImportError, ImportResult, ProductFetcher, ResponseHandler};
