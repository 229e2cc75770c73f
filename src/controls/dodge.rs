//! The evasive decline button. Each click (and each hover, mid
//! progression) commits a new offset pointing away from the cursor,
//! bounded by the window; the rendered position springs toward it.
//! The fifth click stops dodging and concedes the page to "thinking."

use bevy::prelude::*;
use rand::{Rng, RngExt};
use tracing::info;

use crate::config::{
    BUTTON_PROGRESSIONS, BUTTON_SIZE, DODGE_JITTER, DODGE_MARGIN, DODGE_MIN_TRAVEL,
    DODGE_REBOUND, DODGE_SCALE_FLOOR, DODGE_SHRINK_PER_CLICK, DODGE_SPRING_DAMPING,
    DODGE_SPRING_STIFFNESS, DODGE_TRAVEL_FACTOR, Z_CONTROLS,
};
use crate::controls::spring::{Spring, Spring2};
use crate::controls::{PointerScreen, rect_contains};
use crate::effects::driver::{Animate, screen_to_world};
use crate::page::PageState;

/// Marker for the button's `Text2d` label child.
#[derive(Component)]
pub struct DodgeLabel;

#[derive(Component, Debug)]
pub struct DodgeButton {
    /// Resting center as a fraction of the view.
    pub anchor: Vec2,
    /// Committed offset from the anchor, screen px.
    pub offset: Vec2,
    /// Rendered offset, springing toward `offset`.
    pub motion: Spring2,
    /// Rendered scale, springing toward the per-click shrink.
    pub scale: Spring,
    pub clicks: usize,
    hovered: bool,
    given_up: bool,
}

impl DodgeButton {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            offset: Vec2::ZERO,
            motion: Spring2::new(Vec2::ZERO, DODGE_SPRING_STIFFNESS, DODGE_SPRING_DAMPING),
            scale: Spring::new(1.0, DODGE_SPRING_STIFFNESS, DODGE_SPRING_DAMPING),
            clicks: 0,
            hovered: false,
            given_up: false,
        }
    }

    /// Rendered center in screen coordinates.
    pub fn center(&self, view: Vec2) -> Vec2 {
        self.anchor * view + self.motion.value()
    }

    fn relocate<R: Rng>(&mut self, pointer: Vec2, view: Vec2, rng: &mut R) {
        let center = self.center(view);
        self.offset = evade(self.offset, pointer, center, BUTTON_SIZE, view, rng);
        self.motion.set_target(self.offset);
    }

    /// Count a click. Returns true on the click that exhausts the
    /// interaction budget; that click never relocates, and later
    /// clicks are ignored.
    pub fn register_click(&mut self) -> bool {
        if self.given_up {
            return false;
        }
        if self.clicks >= BUTTON_PROGRESSIONS.len() - 1 {
            self.given_up = true;
            return true;
        }
        self.clicks += 1;
        self.scale.set_target(dodge_scale(self.clicks));
        false
    }

    pub fn given_up(&self) -> bool {
        self.given_up
    }
}

impl Animate for DodgeButton {
    fn step<R: Rng>(&mut self, dt: f32, _view: Vec2, _rng: &mut R) {
        self.motion.step(dt);
        self.scale.step(dt);
    }

    fn apply(&self, view: Vec2, transform: &mut Transform, _sprite: &mut Sprite) {
        transform.translation = screen_to_world(self.center(view), view).extend(Z_CONTROLS);
        transform.scale = Vec3::splat(self.scale.value());
    }
}

pub fn dodge_scale(clicks: usize) -> f32 {
    (1.0 - clicks as f32 * DODGE_SHRINK_PER_CLICK).max(DODGE_SCALE_FLOOR)
}

/// Compute the next committed offset, away from the pointer.
///
/// Direction is from the pointer through the control center (random if
/// they coincide), perturbed by a small random angle; travel is at
/// least `DODGE_MIN_TRAVEL` or 0.4x the smaller container dimension.
/// A candidate outside the container is pulled back inside to 70% of
/// the bound on that axis, then hard-clamped.
pub fn evade<R: Rng>(
    offset: Vec2,
    pointer: Vec2,
    center: Vec2,
    control: Vec2,
    container: Vec2,
    rng: &mut R,
) -> Vec2 {
    let away = center - pointer;
    let dir = if away.length_squared() > 0.0 {
        away.normalize()
    } else {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        Vec2::new(angle.cos(), angle.sin())
    };

    let angle = dir.y.atan2(dir.x) + rng.random_range(-DODGE_JITTER..DODGE_JITTER);
    let dir = Vec2::new(angle.cos(), angle.sin());

    let travel = DODGE_MIN_TRAVEL.max(container.min_element() * DODGE_TRAVEL_FACTOR);
    let mut next = offset + dir * travel;

    let bound = ((container - control) * 0.5 - Vec2::splat(DODGE_MARGIN)).max(Vec2::ZERO);
    if next.x.abs() > bound.x {
        next.x = next.x.signum() * bound.x * DODGE_REBOUND;
    }
    if next.y.abs() > bound.y {
        next.y = next.y.signum() * bound.y * DODGE_REBOUND;
    }
    next.clamp(-bound, bound)
}

/// Hover and click handling. Pointer not seen yet -> nothing to dodge.
pub fn dodge_interact(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerScreen>,
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
    mut next: ResMut<NextState<PageState>>,
    mut q: Query<&mut DodgeButton>,
    mut labels: Query<&mut Text2d, With<DodgeLabel>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(pointer) = pointer.0 else {
        return;
    };
    let view = window.size();
    let last = BUTTON_PROGRESSIONS.len() - 1;
    let mut rng = rand::rng();

    for mut button in &mut q {
        let over = rect_contains(
            button.center(view),
            BUTTON_SIZE * button.scale.value(),
            pointer,
        );
        let entered = over && !button.hovered;
        button.hovered = over;
        if button.given_up {
            continue;
        }

        // Dodge the approaching cursor mid progression.
        if entered && button.clicks >= 1 && button.clicks < last {
            button.relocate(pointer, view, &mut rng);
        }

        if over && buttons.just_pressed(MouseButton::Left) {
            if button.register_click() {
                info!(clicks = button.clicks + 1, "dodge button gave up");
                next.set(PageState::Thinking);
                continue;
            }
            button.relocate(pointer, view, &mut rng);
            for mut label in &mut labels {
                label.0 = BUTTON_PROGRESSIONS[button.clicks.min(last)].to_string();
            }
        }
    }
}
