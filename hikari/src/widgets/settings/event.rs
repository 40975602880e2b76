use crate::shared::ui::theme::ColorScheme;

/// Intent events handled by the settings screen.
#[derive(Debug, Clone)]
pub(crate) enum SettingsIntent {
    /// The dark mode toggler was flipped.
    DarkModeToggled(bool),
    /// The shell applied a scheme loaded from disk or chosen elsewhere.
    SyncScheme(ColorScheme),
}

/// Effect events produced by the settings reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsEffect {
    /// Apply and persist the chosen scheme.
    ColorSchemeChanged(ColorScheme),
}

/// Settings event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    /// Intent event reduced by the settings widget.
    Intent(SettingsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SettingsEffect),
}
