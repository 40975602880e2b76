use iced::Task;

use crate::app::{App, AppEvent};
use crate::config;
use crate::shared::ui::theme::ColorScheme;
use crate::widgets::settings::{SettingsEffect, SettingsEvent};

/// Route a settings event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SettingsEvent) -> Task<AppEvent> {
    match event {
        SettingsEvent::Intent(intent) => {
            app.widgets.settings.reduce(intent).map(AppEvent::Settings)
        },
        SettingsEvent::Effect(SettingsEffect::ColorSchemeChanged(scheme)) => {
            apply_color_scheme(app, scheme)
        },
    }
}

/// Report the outcome of a background config save.
pub(crate) fn config_saved(result: Result<(), String>) -> Task<AppEvent> {
    match result {
        Ok(()) => log::debug!("config saved"),
        Err(message) => log::warn!("failed to save config: {message}"),
    }
    Task::none()
}

/// Switch the app theme and persist the preference.
fn apply_color_scheme(app: &mut App, scheme: ColorScheme) -> Task<AppEvent> {
    log::info!("color scheme changed to {scheme:?}");
    app.theme_manager.set_scheme(scheme);
    app.config.color_scheme = scheme;

    let snapshot = app.config.clone();
    Task::perform(
        async move { config::save(&snapshot).map_err(|err| err.to_string()) },
        AppEvent::ConfigSaved,
    )
}
