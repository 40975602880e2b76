use crate::shared::ui::theme::ColorScheme;

/// Preferences edited on the settings screen.
#[derive(Debug, Default)]
pub(crate) struct SettingsState {
    color_scheme: ColorScheme,
}

impl SettingsState {
    pub(crate) fn new(color_scheme: ColorScheme) -> Self {
        Self { color_scheme }
    }

    pub(crate) fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Replace the scheme and return whether it changed.
    pub(crate) fn set_color_scheme(&mut self, scheme: ColorScheme) -> bool {
        if self.color_scheme == scheme {
            return false;
        }
        self.color_scheme = scheme;
        true
    }
}
