use super::CatalogSource;
use super::errors::CatalogError;
use super::model::CatalogSnapshot;

const MOCK_CATALOG_JSON: &str =
    include_str!("../../assets/catalog/mock.json");

/// Catalog backed by the fixture embedded in the binary.
#[derive(Debug, Clone)]
pub(crate) struct MockCatalog {
    snapshot: CatalogSnapshot,
}

impl MockCatalog {
    /// Parse the embedded fixture.
    pub(crate) fn load() -> Result<Self, CatalogError> {
        Self::from_json(MOCK_CATALOG_JSON)
    }

    pub(crate) fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(payload)?;
        Ok(Self { snapshot })
    }

    /// Parse the embedded fixture, falling back to an empty catalog.
    pub(crate) fn load_or_empty() -> Self {
        match Self::load() {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!("failed to load mock catalog, using empty: {err}");
                Self {
                    snapshot: CatalogSnapshot::default(),
                }
            },
        }
    }
}

impl CatalogSource for MockCatalog {
    fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }
}
