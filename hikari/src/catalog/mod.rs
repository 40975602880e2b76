mod errors;
mod mock;
pub(crate) mod model;

pub(crate) use mock::MockCatalog;
use model::CatalogSnapshot;

/// Source of the titles shown on the library screen.
pub(crate) trait CatalogSource: std::fmt::Debug {
    fn snapshot(&self) -> &CatalogSnapshot;
}
