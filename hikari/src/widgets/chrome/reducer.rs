use iced::Task;

use super::event::{ChromeEffect, ChromeEvent, ChromeIntent};

/// Reduce a chrome intent into effect events.
pub(crate) fn reduce(intent: ChromeIntent) -> Task<ChromeEvent> {
    Task::done(ChromeEvent::Effect(effect_for(intent)))
}

pub(crate) fn effect_for(intent: ChromeIntent) -> ChromeEffect {
    match intent {
        ChromeIntent::MenuPressed => ChromeEffect::ToggleSidebar,
        ChromeIntent::BackPressed => ChromeEffect::NavigateBack,
    }
}
