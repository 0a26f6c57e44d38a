//! Golden Leaf API Client Implementation
//!
//! `ProductFetcher::import_products` runs one strictly sequential pipeline:
//! GET the category, hand the response to the caller's handler, parse the
//! body as a JSON array and map every record into a `Product`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::{debug, instrument, warn};

use crate::config::CatalogSettings;
use crate::domain::Product;
use crate::providers::http_client::CatalogHttpClient;
use crate::providers::traits::{
    BoxError, ImportError, ImportResult, ResponseHandler, SetupError,
};
use super::mapper::GoldenLeafMapper;
use super::models::PartialProduct;

/// Path prefix of the category listing endpoint
pub const CATEGORY_PATH: &str = "/api/product/category/";

/// Characters escaped when a category id is encoded as one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Fetches category listings from the Golden Leaf API
///
/// Holds no per-call state; clones share the connection pool and may run
/// imports concurrently.
#[derive(Debug, Clone)]
pub struct ProductFetcher {
    /// HTTP client
    client: CatalogHttpClient,

    /// API base URL, without trailing slash
    base_url: String,

    /// Percent-encode category ids before substitution
    encode_category: bool,
}

impl ProductFetcher {
    /// Create a fetcher from catalog settings
    pub fn new(settings: &CatalogSettings) -> Result<Self, SetupError> {
        let parsed = url::Url::parse(&settings.base_url)?;
        // The category path is appended to the raw string
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(SetupError::BaseUrlHasQuery(settings.base_url.clone()));
        }

        let client = CatalogHttpClient::new(&settings.user_agent)?;

        debug!(
            host = parsed.host_str().unwrap_or_default(),
            encode_category = settings.encode_category,
            "Product fetcher created"
        );

        Ok(ProductFetcher {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            encode_category: settings.encode_category,
        })
    }

    /// Create a fetcher for the production Golden Leaf host
    pub fn golden_leaf() -> Result<Self, SetupError> {
        Self::new(&CatalogSettings::default())
    }

    /// API base URL in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the listing URL for a category
    ///
    /// The id is substituted verbatim unless `encode_category` is set.
    pub fn category_url(&self, category_id: &str) -> String {
        if self.encode_category {
            format!(
                "{}{}{}",
                self.base_url,
                CATEGORY_PATH,
                utf8_percent_encode(category_id, PATH_SEGMENT)
            )
        } else {
            format!("{}{}{}", self.base_url, CATEGORY_PATH, category_id)
        }
    }

    /// Import every product of a category
    ///
    /// The handler receives the raw response before the body is parsed and
    /// may inspect it, reject it or swap it for another response. The status
    /// code is not checked here; pass `handlers::ensure_success` for that.
    ///
    /// # Errors
    /// Request, handler and parse failures are all reported as [`ImportError`]
    /// wrapping the original cause.
    #[instrument(skip(self, handler))]
    pub async fn import_products<H>(&self, category_id: &str, handler: H) -> ImportResult<Vec<Product>>
    where
        H: ResponseHandler,
    {
        let url = self.category_url(category_id);

        let response = self.client
            .get(&url)
            .await
            .map_err(|e| Self::failure("request", e))?;

        let response = handler
            .handle(response)
            .await
            .map_err(|e| Self::failure("handler", e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::failure("body", e))?;

        let records: Vec<PartialProduct> = serde_json::from_slice(&body)
            .map_err(|e| Self::failure("parse", e))?;

        let products = GoldenLeafMapper::map_products(records);

        debug!(count = products.len(), "Products imported");

        Ok(products)
    }

    fn failure(stage: &'static str, cause: impl Into<BoxError>) -> ImportError {
        let err = ImportError::new(cause);
        warn!(stage, error = %err, "Product import failed");
        err
    }
}
