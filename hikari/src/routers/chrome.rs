use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::{navigation, sidebar};
use crate::widgets::chrome::{ChromeEffect, ChromeEvent};

/// Route a chrome event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Intent(intent) => {
            app.widgets.chrome.reduce(intent).map(AppEvent::Chrome)
        },
        ChromeEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_effect(app: &mut App, effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::ToggleSidebar => {
            app.state.toggle_sidebar();
            sidebar::sync_open(app)
        },
        ChromeEffect::NavigateBack => navigation::back(app),
    }
}

#[cfg(test)]
mod tests {
    use super::route;
    use crate::routers::test_support;
    use crate::widgets::chrome::{ChromeEffect, ChromeEvent};
    use crate::widgets::sidebar::SidebarPhase;

    #[test]
    fn given_hidden_drawer_when_menu_toggles_then_drawer_mounts_and_opens() {
        let mut app = test_support::app();

        let _task =
            route(&mut app, ChromeEvent::Effect(ChromeEffect::ToggleSidebar));

        assert!(app.state.sidebar_visible);
        assert!(app.widgets.sidebar.vm().is_mounted);
        assert_eq!(app.widgets.sidebar.phase(), SidebarPhase::Opening);
    }

    #[test]
    fn given_open_drawer_when_menu_toggles_again_then_drawer_starts_closing() {
        let mut app = test_support::app();

        let _task =
            route(&mut app, ChromeEvent::Effect(ChromeEffect::ToggleSidebar));
        let _task =
            route(&mut app, ChromeEvent::Effect(ChromeEffect::ToggleSidebar));

        assert!(!app.state.sidebar_visible);
        assert!(app.widgets.sidebar.vm().is_mounted);
        assert_eq!(app.widgets.sidebar.phase(), SidebarPhase::Closing);
    }
}
