use iced::Task;

use super::event::{SettingsEffect, SettingsEvent, SettingsIntent};
use super::state::SettingsState;
use crate::shared::ui::theme::ColorScheme;

/// Reduce a settings intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SettingsState,
    intent: SettingsIntent,
) -> Task<SettingsEvent> {
    match apply(state, intent) {
        Some(effect) => Task::done(SettingsEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Apply an intent and return the effect it produces, if any.
pub(crate) fn apply(
    state: &mut SettingsState,
    intent: SettingsIntent,
) -> Option<SettingsEffect> {
    match intent {
        SettingsIntent::DarkModeToggled(is_dark) => {
            let scheme = if is_dark {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            };
            state
                .set_color_scheme(scheme)
                .then_some(SettingsEffect::ColorSchemeChanged(scheme))
        },
        SettingsIntent::SyncScheme(scheme) => {
            state.set_color_scheme(scheme);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::shared::ui::theme::ColorScheme;
    use crate::widgets::settings::event::{SettingsEffect, SettingsIntent};
    use crate::widgets::settings::state::SettingsState;

    #[test]
    fn given_light_scheme_when_dark_mode_enabled_then_scheme_change_is_emitted()
    {
        let mut state = SettingsState::default();

        let effect = apply(&mut state, SettingsIntent::DarkModeToggled(true));

        assert_eq!(state.color_scheme(), ColorScheme::Dark);
        assert_eq!(
            effect,
            Some(SettingsEffect::ColorSchemeChanged(ColorScheme::Dark))
        );
    }

    #[test]
    fn given_dark_scheme_when_dark_mode_enabled_again_then_nothing_is_emitted()
    {
        let mut state = SettingsState::new(ColorScheme::Dark);

        let effect = apply(&mut state, SettingsIntent::DarkModeToggled(true));

        assert!(effect.is_none());
    }

    #[test]
    fn given_external_scheme_when_synced_then_state_follows_silently() {
        let mut state = SettingsState::default();

        let effect =
            apply(&mut state, SettingsIntent::SyncScheme(ColorScheme::Dark));

        assert_eq!(state.color_scheme(), ColorScheme::Dark);
        assert!(effect.is_none());
    }
}
