use thiserror::Error;

/// Errors emitted while loading catalog data.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    /// The catalog payload is not valid JSON for the catalog schema.
    #[error("catalog JSON failed")]
    Json(#[from] serde_json::Error),
}
