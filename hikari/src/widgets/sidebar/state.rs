use std::time::Instant;

use super::model::{HIDDEN_OFFSET, SHOWN_OFFSET, SidebarPhase};
use crate::shared::animation::{
    AnimationCompletion, AnimationHandle, OffsetAnimator, SpringAnimator,
    SpringConfig,
};

/// Drawer spring: no bounce, default speed, clamped to critical damping.
fn drawer_spring() -> SpringConfig {
    SpringConfig::from_bounciness_and_speed(0.0, 12.0).critically_damped()
}

/// Visibility state machine of the drawer.
///
/// `is_open` mirrors the owner's flag. `is_mounted` turns on the instant the
/// drawer opens and turns off only when a close animation settles while the
/// drawer is still closed.
#[derive(Debug)]
pub(crate) struct SidebarState<A = SpringAnimator> {
    is_open: bool,
    is_mounted: bool,
    animator: A,
    spring: SpringConfig,
    /// Animation started by the latest open flag change.
    latest: Option<AnimationHandle>,
}

impl Default for SidebarState<SpringAnimator> {
    fn default() -> Self {
        Self::with_animator(SpringAnimator::new(HIDDEN_OFFSET))
    }
}

impl<A: OffsetAnimator> SidebarState<A> {
    pub(crate) fn with_animator(animator: A) -> Self {
        Self {
            is_open: false,
            is_mounted: false,
            animator,
            spring: drawer_spring(),
            latest: None,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.is_open
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.is_mounted
    }

    pub(crate) fn offset(&self) -> f32 {
        self.animator.value()
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub(crate) fn phase(&self) -> SidebarPhase {
        match (self.is_mounted, self.is_open) {
            (false, _) => SidebarPhase::Hidden,
            (true, true) if self.animator.is_animating() => {
                SidebarPhase::Opening
            },
            (true, true) => SidebarPhase::Open,
            (true, false) => SidebarPhase::Closing,
        }
    }

    /// Follow the owner's open flag. Unchanged values are ignored so a
    /// repeated open never restarts the motion.
    pub(crate) fn set_open(&mut self, is_open: bool, now: Instant) {
        if is_open == self.is_open {
            return;
        }

        self.is_open = is_open;
        if is_open {
            self.is_mounted = true;
        }

        let target = if is_open { SHOWN_OFFSET } else { HIDDEN_OFFSET };
        let start = self.animator.animate_to(target, self.spring, now);
        self.latest = Some(start.handle);
        if let Some(interrupted) = start.interrupted {
            self.on_animation_complete(interrupted);
        }
    }

    /// Advance the running animation to `now`.
    pub(crate) fn advance(&mut self, now: Instant) {
        if let Some(completion) = self.animator.advance(now) {
            self.on_animation_complete(completion);
        }
    }

    fn on_animation_complete(&mut self, completion: AnimationCompletion) {
        if completion.finished
            && !self.is_open
            && completion.target == HIDDEN_OFFSET
            && self.latest == Some(completion.handle)
        {
            self.is_mounted = false;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::{Duration, Instant};

    use super::SidebarState;
    use crate::shared::animation::{
        AnimationCompletion, AnimationHandle, AnimationStart, OffsetAnimator,
        SpringAnimator, SpringConfig,
    };
    use crate::widgets::sidebar::model::{
        HIDDEN_OFFSET, SHOWN_OFFSET, SidebarPhase,
    };

    const SETTLE: Duration = Duration::from_secs(3);

    /// Animator whose completions are scripted by the test.
    #[derive(Debug)]
    pub(crate) struct ScriptedAnimator {
        value: f32,
        running: Option<(AnimationHandle, f32)>,
        next_handle: u64,
        pub(crate) requested_targets: Vec<f32>,
        pub(crate) pending: Option<AnimationCompletion>,
    }

    impl ScriptedAnimator {
        pub(crate) fn new() -> Self {
            Self {
                value: HIDDEN_OFFSET,
                running: None,
                next_handle: 0,
                requested_targets: Vec::new(),
                pending: None,
            }
        }

        /// Settle the running animation on its target at the next advance.
        pub(crate) fn finish_running(&mut self) {
            if let Some((handle, target)) = self.running.take() {
                self.value = target;
                self.pending = Some(AnimationCompletion {
                    handle,
                    target,
                    finished: true,
                });
            }
        }
    }

    impl OffsetAnimator for ScriptedAnimator {
        fn value(&self) -> f32 {
            self.value
        }

        fn target(&self) -> Option<f32> {
            self.running.map(|(_, target)| target)
        }

        fn animate_to(
            &mut self,
            target: f32,
            _config: SpringConfig,
            _now: Instant,
        ) -> AnimationStart {
            self.requested_targets.push(target);
            let interrupted = self.stop();
            let handle = AnimationHandle::for_tests(self.next_handle);
            self.next_handle += 1;
            self.running = Some((handle, target));
            AnimationStart {
                handle,
                interrupted,
            }
        }

        fn advance(&mut self, _now: Instant) -> Option<AnimationCompletion> {
            self.pending.take()
        }

        fn stop(&mut self) -> Option<AnimationCompletion> {
            self.running.take().map(|(handle, target)| AnimationCompletion {
                handle,
                target,
                finished: false,
            })
        }
    }

    fn assert_mount_invariant<A: OffsetAnimator>(state: &SidebarState<A>) {
        let closing_in_flight = state.animator.target() == Some(HIDDEN_OFFSET);
        assert_eq!(
            state.is_mounted(),
            state.is_open() || closing_in_flight,
            "mounted={} open={} target={:?}",
            state.is_mounted(),
            state.is_open(),
            state.animator.target(),
        );
    }

    #[test]
    fn given_new_drawer_when_created_then_it_is_hidden_off_screen() {
        let state = SidebarState::default();

        assert!(!state.is_mounted());
        assert!(!state.is_open());
        assert_eq!(state.offset(), HIDDEN_OFFSET);
        assert_eq!(state.phase(), SidebarPhase::Hidden);
    }

    #[test]
    fn given_hidden_drawer_when_closed_again_then_nothing_animates() {
        let mut state = SidebarState::with_animator(ScriptedAnimator::new());
        state.set_open(false, Instant::now());

        assert!(state.animator.requested_targets.is_empty());
        assert!(!state.is_mounted());
    }

    #[test]
    fn given_hidden_drawer_when_opened_then_it_mounts_before_animating() {
        let mut state = SidebarState::default();
        state.set_open(true, Instant::now());

        assert!(state.is_mounted());
        assert!(state.is_animating());
        assert_eq!(state.offset(), HIDDEN_OFFSET);
        assert_eq!(state.phase(), SidebarPhase::Opening);
    }

    #[test]
    fn given_open_close_cycle_when_animations_settle_then_drawer_unmounts() {
        let t0 = Instant::now();
        let mut state = SidebarState::default();

        state.set_open(true, t0);
        state.advance(t0 + Duration::from_millis(120));
        let offset = state.offset();
        assert!(offset > HIDDEN_OFFSET && offset < SHOWN_OFFSET);

        state.advance(t0 + SETTLE);
        assert_eq!(state.offset(), SHOWN_OFFSET);
        assert_eq!(state.phase(), SidebarPhase::Open);

        let t1 = t0 + SETTLE;
        state.set_open(false, t1);
        assert!(state.is_mounted());
        assert_eq!(state.phase(), SidebarPhase::Closing);

        state.advance(t1 + Duration::from_millis(120));
        assert!(state.is_mounted(), "still closing");

        state.advance(t1 + SETTLE);
        assert!(!state.is_mounted());
        assert_eq!(state.offset(), HIDDEN_OFFSET);
        assert_eq!(state.phase(), SidebarPhase::Hidden);
    }

    #[test]
    fn given_open_drawer_when_opened_again_then_motion_is_not_restarted() {
        let t0 = Instant::now();
        let mut state = SidebarState::default();
        state.set_open(true, t0);
        state.advance(t0 + Duration::from_millis(100));
        let before = state.offset();

        state.set_open(true, t0 + Duration::from_millis(110));
        state.advance(t0 + Duration::from_millis(120));

        assert!(state.offset() >= before);
        assert!(state.offset() > HIDDEN_OFFSET);
    }

    #[test]
    fn given_rapid_open_close_open_when_settled_then_drawer_is_fully_open() {
        let t0 = Instant::now();
        let mut state = SidebarState::default();

        state.set_open(true, t0);
        state.advance(t0 + Duration::from_millis(40));
        state.set_open(false, t0 + Duration::from_millis(60));
        assert!(state.is_mounted());
        state.advance(t0 + Duration::from_millis(80));
        state.set_open(true, t0 + Duration::from_millis(100));
        assert!(state.is_mounted());

        let mut now = t0 + Duration::from_millis(100);
        while state.is_animating() {
            now += Duration::from_millis(16);
            state.advance(now);
            assert!(state.is_mounted(), "unmounted mid-sequence");
        }

        assert_eq!(state.offset(), SHOWN_OFFSET);
        assert_eq!(state.phase(), SidebarPhase::Open);
    }

    #[test]
    fn given_close_redirected_to_open_when_stale_close_completion_arrives_then_drawer_stays_mounted()
     {
        let now = Instant::now();
        let mut state = SidebarState::with_animator(ScriptedAnimator::new());

        state.set_open(true, now);
        state.set_open(false, now);
        state.set_open(true, now);
        assert_eq!(
            state.animator.requested_targets,
            vec![SHOWN_OFFSET, HIDDEN_OFFSET, SHOWN_OFFSET]
        );

        state.animator.pending = Some(AnimationCompletion {
            handle: AnimationHandle::for_tests(1),
            target: HIDDEN_OFFSET,
            finished: true,
        });
        state.advance(now);

        assert!(state.is_mounted());
    }

    #[test]
    fn given_second_close_in_flight_when_stale_close_completion_arrives_then_drawer_stays_mounted()
     {
        let now = Instant::now();
        let mut state = SidebarState::with_animator(ScriptedAnimator::new());

        state.set_open(true, now);
        state.set_open(false, now);
        state.set_open(true, now);
        state.set_open(false, now);

        state.animator.pending = Some(AnimationCompletion {
            handle: AnimationHandle::for_tests(1),
            target: HIDDEN_OFFSET,
            finished: true,
        });
        state.advance(now);
        assert!(state.is_mounted());

        state.animator.finish_running();
        state.advance(now);
        assert!(!state.is_mounted());
    }

    #[test]
    fn given_interrupted_close_when_reported_unfinished_then_mount_is_kept() {
        let now = Instant::now();
        let mut state = SidebarState::with_animator(ScriptedAnimator::new());

        state.set_open(true, now);
        state.animator.finish_running();
        state.advance(now);
        state.set_open(false, now);
        state.animator.stop();
        state.advance(now);

        assert!(state.is_mounted());
        assert_eq!(state.phase(), SidebarPhase::Closing);
    }

    #[test]
    fn given_scripted_close_when_finished_then_drawer_unmounts() {
        let now = Instant::now();
        let mut state = SidebarState::with_animator(ScriptedAnimator::new());

        state.set_open(true, now);
        state.set_open(false, now);
        state.animator.finish_running();
        state.advance(now);

        assert!(!state.is_mounted());
    }

    #[test]
    fn given_toggle_sequence_when_time_advances_then_mount_invariant_holds() {
        let t0 = Instant::now();
        let mut state = SidebarState::<SpringAnimator>::default();
        let schedule: [(u64, bool); 8] = [
            (0, true),
            (90, false),
            (130, true),
            (900, false),
            (950, true),
            (1010, false),
            (2600, true),
            (2700, false),
        ];

        let mut elapsed_ms = 0u64;
        let mut next = 0usize;
        while elapsed_ms <= 6_000 {
            let now = t0 + Duration::from_millis(elapsed_ms);
            if next < schedule.len() && schedule[next].0 <= elapsed_ms {
                state.set_open(schedule[next].1, now);
                next += 1;
            }
            state.advance(now);
            assert_mount_invariant(&state);
            elapsed_ms += 10;
        }

        assert!(!state.is_mounted());
        assert_eq!(state.offset(), HIDDEN_OFFSET);
    }
}
