use crate::shared::ui::icons::ids;

/// Horizontal travel of the panel; `-PANEL_WIDTH` is fully off-screen.
pub(crate) const PANEL_WIDTH: f32 = 300.0;
pub(crate) const HIDDEN_OFFSET: f32 = -PANEL_WIDTH;
pub(crate) const SHOWN_OFFSET: f32 = 0.0;
/// Overlay opacity when the panel is fully shown.
pub(crate) const MAX_OVERLAY_OPACITY: f32 = 0.5;

/// A navigation link listed in the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuEntry {
    pub(crate) label: &'static str,
    pub(crate) icon_id: &'static str,
    pub(crate) destination: &'static str,
}

pub(crate) const MENU_ENTRIES: [MenuEntry; 4] = [
    MenuEntry {
        label: "Início",
        icon_id: ids::HOUSE,
        destination: "/(tabs)",
    },
    MenuEntry {
        label: "Perfil",
        icon_id: ids::PERSON,
        destination: "/(tabs)/profile",
    },
    MenuEntry {
        label: "Configurações",
        icon_id: ids::GEAR,
        destination: "/(tabs)/settings",
    },
    MenuEntry {
        label: "Sobre",
        icon_id: ids::INFO,
        destination: "/(tabs)/about",
    },
];

/// Logical lifecycle phase of the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarPhase {
    Hidden,
    Opening,
    Open,
    Closing,
}

/// Read-only snapshot for the drawer view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel {
    pub(crate) is_mounted: bool,
    pub(crate) offset: f32,
    pub(crate) overlay_opacity: f32,
    pub(crate) entries: &'static [MenuEntry],
}

/// Map the panel offset onto the overlay opacity, clamped to its range.
pub(crate) fn overlay_opacity(offset: f32) -> f32 {
    let progress = (offset - HIDDEN_OFFSET) / (SHOWN_OFFSET - HIDDEN_OFFSET);
    progress.clamp(0.0, 1.0) * MAX_OVERLAY_OPACITY
}

#[cfg(test)]
mod tests {
    use super::{MAX_OVERLAY_OPACITY, overlay_opacity};

    #[test]
    fn given_offset_range_when_interpolated_then_opacity_follows_linearly() {
        assert_eq!(overlay_opacity(-300.0), 0.0);
        assert_eq!(overlay_opacity(0.0), MAX_OVERLAY_OPACITY);
        assert!((overlay_opacity(-150.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn given_offset_outside_range_when_interpolated_then_opacity_is_clamped() {
        assert_eq!(overlay_opacity(-450.0), 0.0);
        assert_eq!(overlay_opacity(20.0), MAX_OVERLAY_OPACITY);
    }
}
