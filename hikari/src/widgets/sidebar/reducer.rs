use std::time::Instant;

use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::model::MENU_ENTRIES;
use super::state::SidebarState;
use crate::shared::animation::OffsetAnimator;

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarCtx {
    /// Timestamp the animator samples against.
    pub(crate) now: Instant,
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce<A: OffsetAnimator>(
    state: &mut SidebarState<A>,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    let effects = apply(state, intent, ctx);
    if effects.is_empty() {
        return Task::none();
    }

    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(SidebarEvent::Effect(effect))),
    )
}

/// Apply an intent to the state and return the effects it produces.
pub(crate) fn apply<A: OffsetAnimator>(
    state: &mut SidebarState<A>,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Vec<SidebarEffect> {
    match intent {
        SidebarIntent::SetOpen(is_open) => {
            state.set_open(is_open, ctx.now);
            Vec::new()
        },
        SidebarIntent::Tick => {
            state.advance(ctx.now);
            Vec::new()
        },
        SidebarIntent::OverlayPressed | SidebarIntent::ClosePressed => {
            if !accepts_gestures(state) {
                return Vec::new();
            }
            vec![SidebarEffect::CloseRequested]
        },
        SidebarIntent::EntrySelected { index } => {
            if !accepts_gestures(state) {
                return Vec::new();
            }
            let Some(entry) = MENU_ENTRIES.get(index) else {
                return Vec::new();
            };
            vec![
                SidebarEffect::Navigate {
                    destination: entry.destination,
                },
                SidebarEffect::CloseRequested,
            ]
        },
    }
}

/// Gestures count only while the drawer is mounted and open.
fn accepts_gestures<A: OffsetAnimator>(state: &SidebarState<A>) -> bool {
    state.is_mounted() && state.is_open()
}
