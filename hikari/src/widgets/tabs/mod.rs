mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{TabsEffect, TabsEvent, TabsIntent};
use iced::Task;
pub(crate) use model::TabsViewModel;
use state::TabsState;

use crate::widgets::navigation::TabRoute;

/// Bottom tab bar widget.
#[derive(Debug, Default)]
pub(crate) struct TabsWidget {
    state: TabsState,
}

impl TabsWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: TabsIntent) -> Task<TabsEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    pub(crate) fn vm(&self) -> TabsViewModel {
        TabsViewModel {
            tabs: &TabRoute::ALL,
            active: self.state.active(),
        }
    }
}
