use std::rc::Rc;

use crate::catalog::Catalog;

/// Why the catalog could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Load state of the catalog. Starts as `Loading` and resolves exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogStore {
    #[default]
    Loading,
    Ready(Rc<Catalog>),
    Failed(CatalogError),
}

impl CatalogStore {
    #[must_use]
    pub fn from_result(result: Result<Catalog, CatalogError>) -> Self {
        match result {
            Ok(catalog) => Self::Ready(Rc::new(catalog)),
            Err(err) => Self::Failed(err),
        }
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog.as_ref()),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&CatalogError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_loading() {
        let store = CatalogStore::default();
        assert!(store.is_loading());
        assert!(store.catalog().is_none());
        assert!(store.error().is_none());
    }

    #[test]
    fn store_resolves_from_result() {
        let ready = CatalogStore::from_result(Ok(Catalog::empty()));
        assert!(ready.is_ready());
        assert!(ready.catalog().is_some());

        let failed = CatalogStore::from_result(Err(CatalogError::Status(404)));
        assert!(!failed.is_ready());
        assert_eq!(failed.error(), Some(&CatalogError::Status(404)));
    }

    #[test]
    fn json_errors_convert_with_message() {
        let err = serde_json::from_str::<Catalog>("{").expect_err("truncated json");
        let converted = CatalogError::from(err);
        assert!(matches!(converted, CatalogError::Json(_)));
        assert!(converted.to_string().starts_with("JSON parsing error"));
    }
}
