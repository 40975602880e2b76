use std::time::Instant;

use super::spring::{Spring, SpringConfig};

/// Identity of a started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnimationHandle(u64);

#[cfg(test)]
impl AnimationHandle {
    pub(crate) fn for_tests(id: u64) -> Self {
        Self(id)
    }
}

/// Completion signal delivered once per started animation.
///
/// `finished` is `false` when the animation was redirected or stopped
/// before it settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AnimationCompletion {
    pub(crate) handle: AnimationHandle,
    pub(crate) target: f32,
    pub(crate) finished: bool,
}

/// Result of requesting a new animation target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AnimationStart {
    pub(crate) handle: AnimationHandle,
    pub(crate) interrupted: Option<AnimationCompletion>,
}

/// Capability driving a single animated scalar toward a target.
///
/// Starting a new animation while one is in flight redirects it: the
/// previous animation completes with `finished == false` and the new one
/// continues from the current value.
pub(crate) trait OffsetAnimator {
    /// Current animated value.
    fn value(&self) -> f32;

    /// Target of the in-flight animation, if any.
    fn target(&self) -> Option<f32>;

    fn is_animating(&self) -> bool {
        self.target().is_some()
    }

    /// Animate toward `target`, redirecting any in-flight animation.
    fn animate_to(
        &mut self,
        target: f32,
        config: SpringConfig,
        now: Instant,
    ) -> AnimationStart;

    /// Advance the in-flight animation to `now`.
    fn advance(&mut self, now: Instant) -> Option<AnimationCompletion>;

    /// Cancel the in-flight animation, leaving the value where it is.
    fn stop(&mut self) -> Option<AnimationCompletion>;
}

#[derive(Debug, Clone, Copy)]
struct RunningSpring {
    handle: AnimationHandle,
    spring: Spring,
    started_at: Instant,
}

/// [`OffsetAnimator`] backed by an analytic spring solution.
#[derive(Debug)]
pub(crate) struct SpringAnimator {
    value: f32,
    next_handle: u64,
    running: Option<RunningSpring>,
}

impl SpringAnimator {
    pub(crate) fn new(initial: f32) -> Self {
        Self {
            value: initial,
            next_handle: 0,
            running: None,
        }
    }

    fn allocate_handle(&mut self) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Move the value to the running spring's position at `now`.
    ///
    /// Returns the spring's velocity there, or `0.0` when idle.
    fn sync_value(&mut self, now: Instant) -> f32 {
        let Some(running) = &self.running else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(running.started_at);
        let (position, velocity) = running.spring.sample(elapsed);
        self.value = position;
        velocity
    }
}

impl OffsetAnimator for SpringAnimator {
    fn value(&self) -> f32 {
        self.value
    }

    fn target(&self) -> Option<f32> {
        self.running.as_ref().map(|running| running.spring.to())
    }

    fn animate_to(
        &mut self,
        target: f32,
        config: SpringConfig,
        now: Instant,
    ) -> AnimationStart {
        if let Some(running) = &self.running {
            if running.spring.to() == target {
                return AnimationStart {
                    handle: running.handle,
                    interrupted: None,
                };
            }
        }

        let velocity = self.sync_value(now);
        let interrupted = self.stop();
        let handle = self.allocate_handle();
        self.running = Some(RunningSpring {
            handle,
            spring: Spring::new(self.value, target, velocity, config),
            started_at: now,
        });

        AnimationStart {
            handle,
            interrupted,
        }
    }

    fn advance(&mut self, now: Instant) -> Option<AnimationCompletion> {
        let running = self.running?;
        let elapsed = now.saturating_duration_since(running.started_at);
        let (position, velocity) = running.spring.sample(elapsed);

        if running.spring.is_at_rest(position, velocity) {
            self.value = running.spring.to();
            self.running = None;
            return Some(AnimationCompletion {
                handle: running.handle,
                target: running.spring.to(),
                finished: true,
            });
        }

        self.value = position;
        None
    }

    fn stop(&mut self) -> Option<AnimationCompletion> {
        self.running.take().map(|running| AnimationCompletion {
            handle: running.handle,
            target: running.spring.to(),
            finished: false,
        })
    }
}
