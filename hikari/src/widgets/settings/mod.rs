mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SettingsEffect, SettingsEvent, SettingsIntent};
use iced::Task;
pub(crate) use model::SettingsViewModel;
use state::SettingsState;

use crate::shared::ui::theme::ColorScheme;

/// Settings widget: light/dark preference.
#[derive(Debug, Default)]
pub(crate) struct SettingsWidget {
    state: SettingsState,
}

impl SettingsWidget {
    /// Create the widget around a previously loaded scheme.
    pub(crate) fn new(color_scheme: ColorScheme) -> Self {
        Self {
            state: SettingsState::new(color_scheme),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: SettingsIntent,
    ) -> Task<SettingsEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    pub(crate) fn vm(&self) -> SettingsViewModel {
        SettingsViewModel {
            is_dark: self.state.color_scheme().is_dark(),
        }
    }
}
