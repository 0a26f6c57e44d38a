//! Command-line entry points
//!
//! `main.rs` only wires settings and logging; the work happens here so it can
//! run against any `ProductFetcher`.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::providers::{handlers, ProductFetcher};

/// Pick the category id out of the process arguments (program name first)
pub fn category_from_args<I>(args: I) -> anyhow::Result<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .context("Usage: golden-leaf-catalog <category-id>")
}

/// Import a category and write it to `out` as pretty JSON
///
/// Non-2xx responses are rejected through `handlers::ensure_success`.
/// Returns the number of products written.
pub async fn export_category<W>(
    fetcher: &ProductFetcher,
    category_id: &str,
    out: &mut W,
) -> anyhow::Result<usize>
where
    W: Write,
{
    info!(
        category = %category_id,
        url = %fetcher.category_url(category_id),
        "Importing products"
    );

    let products = fetcher
        .import_products(category_id, handlers::ensure_success)
        .await
        .with_context(|| format!("Failed to import category {}", category_id))?;

    serde_json::to_writer_pretty(&mut *out, &products)?;
    writeln!(out)?;

    info!(count = products.len(), "Import finished");

    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_from_args() {
        let category = category_from_args(args(&["golden-leaf-catalog", "12", "extra"])).unwrap();
        assert_eq!(category, "12");
    }

    #[test]
    fn test_missing_category_reports_usage() {
        let err = category_from_args(args(&["golden-leaf-catalog"])).unwrap_err();
        assert!(err.to_string().starts_with("Usage:"));
    }
}
