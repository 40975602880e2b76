use serde::{Deserialize, Serialize};

/// Title highlighted at the top of the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FeaturedManga {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    /// Remote cover art; never fetched, kept for a future image loader.
    pub(crate) cover_url: String,
    pub(crate) latest_chapter: String,
    pub(crate) is_new: bool,
}

/// Entry of a horizontal title strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MangaSummary {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) chapter: String,
    pub(crate) cover_url: String,
}

/// Entry of the recently updated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RecentUpdate {
    #[serde(flatten)]
    pub(crate) summary: MangaSummary,
    /// Relative age such as `2h ago`.
    pub(crate) updated_label: String,
}

/// Everything the library screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CatalogSnapshot {
    pub(crate) featured: Option<FeaturedManga>,
    #[serde(default)]
    pub(crate) popular: Vec<MangaSummary>,
    #[serde(default)]
    pub(crate) recently_updated: Vec<RecentUpdate>,
}
