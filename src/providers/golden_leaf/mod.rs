//! Golden Leaf Catalog Module
//!
//! Imports products of a category from the Golden Leaf store API and maps
//! them into domain products.

mod client;
mod models;
mod mapper;

pub use client::{ProductFetcher, CATEGORY_PATH};
pub use mapper::GoldenLeafMapper;
pub use models::PartialProduct;
