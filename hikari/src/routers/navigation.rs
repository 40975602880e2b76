use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::tabs;
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent, Route, RouteError,
};
use crate::widgets::settings::SettingsIntent;

/// Route a navigation event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => app
            .widgets
            .navigation
            .reduce(intent)
            .map(AppEvent::Navigation),
        NavigationEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Show the screen registered under `destination`.
pub(crate) fn navigate(app: &mut App, destination: &str) -> Task<AppEvent> {
    route(
        app,
        NavigationEvent::Intent(NavigationIntent::Navigate {
            destination: destination.to_string(),
        }),
    )
}

/// Pop the top screen, if any.
pub(crate) fn back(app: &mut App) -> Task<AppEvent> {
    route(app, NavigationEvent::Intent(NavigationIntent::Back))
}

fn route_effect(app: &mut App, effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::RouteChanged { route } => {
            log::debug!("route changed to {route:?}");
            let active_tab = app.widgets.navigation.vm().active_tab;
            let sync_tabs = tabs::sync_active(app, active_tab);
            if route != Route::Settings {
                return sync_tabs;
            }

            let scheme = app.config.color_scheme;
            let sync_settings = app
                .widgets
                .settings
                .reduce(SettingsIntent::SyncScheme(scheme))
                .map(AppEvent::Settings);
            Task::batch([sync_tabs, sync_settings])
        },
        NavigationEffect::Unmatched { destination } => {
            log::warn!("{}", RouteError::Unmatched { destination });
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{navigate, route};
    use crate::routers::{settings, test_support};
    use crate::shared::ui::theme::ColorScheme;
    use crate::widgets::navigation::{
        NavigationEffect, NavigationEvent, Route, TabRoute,
    };
    use crate::widgets::settings::{SettingsEvent, SettingsIntent};

    #[test]
    fn given_library_when_profile_is_opened_then_it_is_pushed_with_back() {
        let mut app = test_support::app();

        let _task = navigate(&mut app, "/(tabs)/profile");

        let vm = app.widgets.navigation.vm();
        assert_eq!(vm.current, &Route::Profile);
        assert!(vm.can_go_back);
        assert_eq!(vm.active_tab, TabRoute::Library);
    }

    #[test]
    fn given_route_change_to_tab_when_routed_then_tab_bar_follows() {
        let mut app = test_support::app();
        let _task = navigate(&mut app, "/(tabs)/historico");

        let _task = route(
            &mut app,
            NavigationEvent::Effect(NavigationEffect::RouteChanged {
                route: Route::Tab(TabRoute::History),
            }),
        );

        assert_eq!(app.widgets.tabs.vm().active, TabRoute::History);
    }

    #[test]
    fn given_unknown_destination_when_opened_then_not_found_is_shown() {
        let mut app = test_support::app();

        let _task = navigate(&mut app, "/(tabs)/downloads");

        assert_eq!(
            app.widgets.navigation.vm().current,
            &Route::NotFound(String::from("/(tabs)/downloads"))
        );
    }

    #[test]
    fn given_stale_settings_toggle_when_settings_opens_then_it_shows_config() {
        let mut app = test_support::app();
        let _task = settings::route(
            &mut app,
            SettingsEvent::Intent(SettingsIntent::SyncScheme(
                ColorScheme::Dark,
            )),
        );
        assert!(app.widgets.settings.vm().is_dark);

        let _task = route(
            &mut app,
            NavigationEvent::Effect(NavigationEffect::RouteChanged {
                route: Route::Settings,
            }),
        );

        assert_eq!(app.config.color_scheme, ColorScheme::Light);
        assert!(!app.widgets.settings.vm().is_dark);
    }
}
