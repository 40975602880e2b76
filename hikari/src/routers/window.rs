use iced::keyboard::{self, key};
use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::routers::{navigation, sidebar};

/// Track the window size used for drawer layout.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.window_size = size;
    Task::none()
}

/// Escape closes an open drawer, otherwise pops the screen stack.
pub(crate) fn handle_keyboard(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        } => {
            if app.state.sidebar_visible {
                app.state.close_sidebar();
                sidebar::sync_open(app)
            } else {
                navigation::back(app)
            }
        },
        _ => Task::none(),
    }
}
