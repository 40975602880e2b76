use std::time::Duration;

const DEFAULT_REST_THRESHOLD: f32 = 0.001;
const CRITICAL_RATIO_EPSILON: f32 = 1e-4;

/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpringConfig {
    pub(crate) stiffness: f32,
    pub(crate) damping: f32,
    pub(crate) mass: f32,
    pub(crate) rest_displacement_threshold: f32,
    pub(crate) rest_speed_threshold: f32,
    pub(crate) overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement_threshold: DEFAULT_REST_THRESHOLD,
            rest_speed_threshold: DEFAULT_REST_THRESHOLD,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Build a spring from origami-style `bounciness` and `speed` values.
    ///
    /// `bounciness` of zero yields a spring that is damped just below the
    /// critical point; pair it with [`SpringConfig::critically_damped`] when
    /// overshoot must be ruled out entirely.
    pub(crate) fn from_bounciness_and_speed(
        bounciness: f32,
        speed: f32,
    ) -> Self {
        let b =
            project_normal(normalize(bounciness / 1.7, 0.0, 20.0), 0.0, 0.8);
        let s = normalize(speed / 1.7, 0.0, 20.0);
        let bouncy_tension = project_normal(s, 0.5, 200.0);
        let bouncy_friction = quadratic_out_interpolation(
            b,
            no_bounce_friction(bouncy_tension),
            0.01,
        );

        Self {
            stiffness: stiffness_from_origami(bouncy_tension),
            damping: damping_from_origami(bouncy_friction),
            ..Self::default()
        }
    }

    /// Replace the damping with the critical value for the current
    /// stiffness and mass.
    pub(crate) fn critically_damped(mut self) -> Self {
        self.damping = 2.0 * (self.stiffness * self.mass).sqrt();
        self
    }

    /// Ratio of actual to critical damping. `1.0` is critical.
    pub(crate) fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }
}

/// A single spring motion from `from` toward `to`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Spring {
    from: f32,
    to: f32,
    initial_velocity: f32,
    config: SpringConfig,
}

impl Spring {
    pub(crate) fn new(
        from: f32,
        to: f32,
        initial_velocity: f32,
        config: SpringConfig,
    ) -> Self {
        Self {
            from,
            to,
            initial_velocity,
            config,
        }
    }

    pub(crate) fn to(&self) -> f32 {
        self.to
    }

    /// Return `(position, velocity)` after `elapsed` time.
    pub(crate) fn sample(&self, elapsed: Duration) -> (f32, f32) {
        let t = elapsed.as_secs_f32();
        let x0 = self.from - self.to;
        let v0 = self.initial_velocity;
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        let (displacement, velocity) =
            if (zeta - 1.0).abs() < CRITICAL_RATIO_EPSILON {
                let b = v0 + omega * x0;
                let decay = (-omega * t).exp();
                ((x0 + b * t) * decay, (v0 - omega * b * t) * decay)
            } else if zeta < 1.0 {
                let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                let a = x0;
                let b = (v0 + zeta * omega * x0) / omega_d;
                let decay = (-zeta * omega * t).exp();
                let (sin, cos) = (omega_d * t).sin_cos();
                let displacement = decay * (a * cos + b * sin);
                let velocity = decay
                    * ((b * omega_d - zeta * omega * a) * cos
                        - (a * omega_d + zeta * omega * b) * sin);
                (displacement, velocity)
            } else {
                let root = (zeta * zeta - 1.0).sqrt();
                let r1 = -omega * (zeta - root);
                let r2 = -omega * (zeta + root);
                let c1 = (v0 - r2 * x0) / (r1 - r2);
                let c2 = x0 - c1;
                let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
                (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
            };

        (self.to + displacement, velocity)
    }

    /// Return whether the sampled state counts as settled on the target.
    pub(crate) fn is_at_rest(&self, position: f32, velocity: f32) -> bool {
        let settled = (position - self.to).abs()
            <= self.config.rest_displacement_threshold
            && velocity.abs() <= self.config.rest_speed_threshold;

        settled
            || (self.config.overshoot_clamping && self.has_overshot(position))
    }

    fn has_overshot(&self, position: f32) -> bool {
        if self.from < self.to {
            position > self.to
        } else {
            position < self.to
        }
    }
}

fn normalize(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

fn project_normal(n: f32, start: f32, end: f32) -> f32 {
    start + n * (end - start)
}

fn linear_interpolation(t: f32, start: f32, end: f32) -> f32 {
    t * end + (1.0 - t) * start
}

fn quadratic_out_interpolation(t: f32, start: f32, end: f32) -> f32 {
    linear_interpolation(2.0 * t - t * t, start, end)
}

fn no_bounce_friction(tension: f32) -> f32 {
    if tension <= 18.0 {
        0.0007 * tension.powi(3) - 0.031 * tension.powi(2)
            + 0.64 * tension
            + 1.28
    } else if tension <= 44.0 {
        0.000044 * tension.powi(3) - 0.006 * tension.powi(2)
            + 0.36 * tension
            + 2.0
    } else {
        0.00000045 * tension.powi(3) - 0.000332 * tension.powi(2)
            + 0.1078 * tension
            + 5.84
    }
}

fn stiffness_from_origami(value: f32) -> f32 {
    (value - 30.0) * 3.62 + 194.0
}

fn damping_from_origami(value: f32) -> f32 {
    (value - 8.0) * 3.0 + 25.0
}
