mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;

pub(crate) use errors::RouteError;
pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
use iced::Task;
pub(crate) use model::{NavigationViewModel, Route, TabRoute};
use state::NavigationState;

/// Navigation widget owning the screen stack.
#[derive(Debug, Default)]
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reduce an intent event into stack updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the header and screen host.
    pub(crate) fn vm(&self) -> NavigationViewModel<'_> {
        NavigationViewModel {
            current: self.state.current(),
            active_tab: self.state.active_tab(),
            can_go_back: self.state.can_go_back(),
        }
    }
}
