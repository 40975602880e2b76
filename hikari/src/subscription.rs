use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Roughly one frame at 60 Hz.
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Drawer animation frames, only while the spring is moving
    if app.widgets.sidebar.is_animating() {
        subs.push(
            iced::time::every(ANIMATION_FRAME_INTERVAL)
                .map(AppEvent::AnimationFrame),
        );
    }

    Subscription::batch(subs)
}
