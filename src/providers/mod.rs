//! Catalog provider integration
//!
//! ```text
//!   GET /api/product/category/{id}
//!              │
//!   ┌──────────┴──────────┐
//!   │  CatalogHttpClient  │
//!   └──────────┬──────────┘
//!              │ reqwest::Response
//!   ┌──────────┴──────────┐
//!   │   ResponseHandler   │  caller supplied
//!   └──────────┬──────────┘
//!              │ JSON body
//!   ┌──────────┴──────────┐
//!   │  GoldenLeafMapper   │  PartialProduct -> Product
//!   └─────────────────────┘
//! ```

pub mod traits;
pub mod handlers;
pub mod http_client;
pub mod golden_leaf;

// Re-export commonly used types
pub use traits::{
    BoxError,
    ImportError,
    ImportResult,
    ResponseHandler,
    SetupError,
};
pub use http_client::CatalogHttpClient;
pub use golden_leaf::ProductFetcher;
