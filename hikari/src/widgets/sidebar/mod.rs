mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
pub(crate) use model::{PANEL_WIDTH, SidebarPhase, SidebarViewModel};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

use crate::shared::animation::{OffsetAnimator, SpringAnimator};

/// Sidebar drawer widget owning its visibility state and animator.
#[derive(Debug)]
pub(crate) struct SidebarWidget<A = SpringAnimator> {
    state: SidebarState<A>,
}

impl SidebarWidget<SpringAnimator> {
    /// Construct a hidden drawer.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }
}

impl<A: OffsetAnimator> SidebarWidget<A> {
    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        let offset = self.state.offset();
        SidebarViewModel {
            is_mounted: self.state.is_mounted(),
            offset,
            overlay_opacity: model::overlay_opacity(offset),
            entries: &model::MENU_ENTRIES,
        }
    }

    /// Return whether animation frames are needed.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub(crate) fn phase(&self) -> SidebarPhase {
        self.state.phase()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{SidebarCtx, SidebarIntent, SidebarPhase, SidebarWidget};

    #[test]
    fn given_new_widget_when_viewed_then_nothing_is_mounted() {
        let widget = SidebarWidget::new();
        let vm = widget.vm();

        assert!(!vm.is_mounted);
        assert_eq!(vm.overlay_opacity, 0.0);
        assert_eq!(vm.entries.len(), 4);
        assert!(!widget.is_animating());
    }

    #[test]
    fn given_open_intent_when_settled_then_overlay_reaches_full_dim() {
        let t0 = Instant::now();
        let mut widget = SidebarWidget::new();

        let _task = widget
            .reduce(SidebarIntent::SetOpen(true), &SidebarCtx { now: t0 });
        assert!(widget.is_animating());
        assert_eq!(widget.phase(), SidebarPhase::Opening);

        let _task = widget.reduce(
            SidebarIntent::Tick,
            &SidebarCtx {
                now: t0 + Duration::from_secs(3),
            },
        );

        let vm = widget.vm();
        assert!(vm.is_mounted);
        assert_eq!(vm.offset, 0.0);
        assert_eq!(vm.overlay_opacity, 0.5);
        assert_eq!(widget.phase(), SidebarPhase::Open);
    }
}
