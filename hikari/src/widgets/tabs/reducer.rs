use iced::Task;

use super::event::{TabsEffect, TabsEvent, TabsIntent};
use super::state::TabsState;

/// Reduce a tabs intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut TabsState,
    intent: TabsIntent,
) -> Task<TabsEvent> {
    match apply(state, intent) {
        Some(effect) => Task::done(TabsEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Apply an intent and return the effect it produces, if any.
pub(crate) fn apply(
    state: &mut TabsState,
    intent: TabsIntent,
) -> Option<TabsEffect> {
    match intent {
        TabsIntent::Select(tab) => {
            state.set_active(tab);
            Some(TabsEffect::Navigate {
                destination: tab.path(),
            })
        },
        TabsIntent::SyncActive(tab) => {
            state.set_active(tab);
            None
        },
    }
}
