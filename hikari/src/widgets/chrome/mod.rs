mod event;
mod model;
mod reducer;
pub(crate) mod view;

pub(crate) use event::{ChromeEffect, ChromeEvent, ChromeIntent};
use iced::Task;
pub(crate) use model::ChromeViewModel;

/// Header bar widget: drawer menu button and back navigation.
#[derive(Debug, Default)]
pub(crate) struct ChromeWidget;

impl ChromeWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Reduce a chrome intent event into effect events.
    pub(crate) fn reduce(&mut self, intent: ChromeIntent) -> Task<ChromeEvent> {
        reducer::reduce(intent)
    }
}
