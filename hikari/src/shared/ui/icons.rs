pub(crate) const HOME: &[u8] = include_bytes!("../../../assets/icons/home.svg");
pub(crate) const PERSON: &[u8] =
    include_bytes!("../../../assets/icons/person.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../../assets/icons/settings.svg");
pub(crate) const INFO: &[u8] = include_bytes!("../../../assets/icons/info.svg");
pub(crate) const CLOSE: &[u8] =
    include_bytes!("../../../assets/icons/close.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../../../assets/icons/menu.svg");
pub(crate) const LIBRARY: &[u8] =
    include_bytes!("../../../assets/icons/library.svg");
pub(crate) const UPDATES: &[u8] =
    include_bytes!("../../../assets/icons/update.svg");
pub(crate) const HISTORY: &[u8] =
    include_bytes!("../../../assets/icons/history.svg");
pub(crate) const SEARCH: &[u8] =
    include_bytes!("../../../assets/icons/search.svg");
pub(crate) const BACK: &[u8] = include_bytes!("../../../assets/icons/back.svg");
pub(crate) const FALLBACK: &[u8] =
    include_bytes!("../../../assets/icons/help.svg");

/// Semantic icon identifiers used across screens and widgets.
pub(crate) mod ids {
    pub(crate) const HOUSE: &str = "house.fill";
    pub(crate) const PERSON: &str = "person.fill";
    pub(crate) const GEAR: &str = "gearshape.fill";
    pub(crate) const INFO: &str = "info.circle.fill";
    pub(crate) const CLOSE: &str = "xmark";
    pub(crate) const MENU: &str = "line.horizontal.3";
    pub(crate) const LIBRARY: &str = "books.vertical.fill";
    pub(crate) const UPDATES: &str = "clock.arrow.circlepath";
    pub(crate) const HISTORY: &str = "clock.fill";
    pub(crate) const SEARCH: &str = "magnifyingglass";
    pub(crate) const BACK: &str = "chevron.left";
}

/// Glyph lookup keyed by semantic icon identifier.
pub(crate) trait IconResolver: std::fmt::Debug {
    /// Return SVG bytes for `icon_id`, or `None` when the id is unknown.
    fn lookup(&self, icon_id: &str) -> Option<&'static [u8]>;

    /// Return SVG bytes for `icon_id`, falling back to a generic glyph.
    fn resolve(&self, icon_id: &str) -> &'static [u8] {
        self.lookup(icon_id).unwrap_or(FALLBACK)
    }
}

/// Resolver over the glyphs embedded in the binary.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct EmbeddedIcons;

impl IconResolver for EmbeddedIcons {
    fn lookup(&self, icon_id: &str) -> Option<&'static [u8]> {
        let glyph = match icon_id {
            ids::HOUSE => HOME,
            ids::PERSON => PERSON,
            ids::GEAR => SETTINGS,
            ids::INFO => INFO,
            ids::CLOSE => CLOSE,
            ids::MENU => MENU,
            ids::LIBRARY => LIBRARY,
            ids::UPDATES => UPDATES,
            ids::HISTORY => HISTORY,
            ids::SEARCH => SEARCH,
            ids::BACK => BACK,
            _ => return None,
        };
        Some(glyph)
    }
}
