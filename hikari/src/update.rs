use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Sidebar widget
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        // Chrome widget
        AppEvent::Chrome(event) => routers::chrome::route(app, event),
        // Tabs widget
        AppEvent::Tabs(event) => routers::tabs::route(app, event),
        // Navigation widget
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        // Settings widget
        AppEvent::Settings(event) => routers::settings::route(app, event),
        // Direct operations
        AppEvent::AnimationFrame(now) => routers::sidebar::tick(app, now),
        AppEvent::ConfigSaved(result) => {
            routers::settings::config_saved(result)
        },
        AppEvent::Keyboard(event) => {
            routers::window::handle_keyboard(app, event)
        },
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
