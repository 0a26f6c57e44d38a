//! Domain types and models

pub mod product;

pub use product::Product;
