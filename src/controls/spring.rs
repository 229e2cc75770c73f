//! Damped spring smoothing: the decline buttons commit a target offset
//! or scale instantly, and the rendered value glides there through a
//! spring instead of jumping.

use bevy::math::Vec2;

/// One spring-tracked scalar, integrated semi-implicitly each frame.
/// With `damping >= 2 * sqrt(stiffness)` (critical damping) the value
/// approaches the target without overshooting.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    value: f32,
    velocity: f32,
    target: f32,
}

/// Close enough to the target to snap there and stop.
const POSITION_EPS: f32 = 0.05;
const VELOCITY_EPS: f32 = 0.05;

/// A frame hitch should not make the integrator blow up.
const MAX_DT: f32 = 1.0 / 30.0;

impl Spring {
    pub fn new(value: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` with no residual motion.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn settled(&self) -> bool {
        (self.target - self.value).abs() < POSITION_EPS && self.velocity.abs() < VELOCITY_EPS
    }

    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DT);
        let accel = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
        if self.settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Two springs tracking a 2D offset.
#[derive(Debug, Clone, Copy)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(value: Vec2, stiffness: f32, damping: f32) -> Self {
        Self {
            x: Spring::new(value.x, stiffness, damping),
            y: Spring::new(value.y, stiffness, damping),
        }
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }
}
