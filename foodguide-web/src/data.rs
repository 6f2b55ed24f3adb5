//! Catalog fetch.

use foodguide_core::{Catalog, CatalogError};
use gloo::net::http::Request;
use web_sys::RequestCache;

/// Fetch and decode the catalog, bypassing the HTTP cache.
///
/// # Errors
/// Returns [`CatalogError`] on transport failure, a non-2xx status, or a
/// body that does not decode as a catalog. There is no retry.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let resp = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    Ok(Catalog::from_json(&body)?)
}

/// Log the load outcome the way the page reports it.
pub fn log_outcome(result: &Result<Catalog, CatalogError>) {
    match result {
        Ok(catalog) => log::info!(
            "catalog loaded: {} regions, {} items",
            catalog.regions().len(),
            catalog.item_count()
        ),
        Err(err) => log::error!("failed to load catalog: {err}"),
    }
}
