//! The shrinking decline button: a fixed scale decrement per click,
//! floored, rendered through the same spring smoothing as the dodge
//! variant. The click that reaches the progression length gives up.

use bevy::prelude::*;
use tracing::info;

use crate::config::{
    BUTTON_PROGRESSIONS, BUTTON_SIZE, SHRINK_PER_CLICK, SHRINK_SCALE_FLOOR,
    SHRINK_SPRING_DAMPING, SHRINK_SPRING_STIFFNESS, Z_CONTROLS,
};
use crate::controls::spring::Spring;
use crate::controls::{PointerScreen, rect_contains};
use crate::effects::driver::{Animate, screen_to_world};
use crate::page::PageState;
use rand::Rng;

/// Marker for the button's `Text2d` label child.
#[derive(Component)]
pub struct ShrinkLabel;

#[derive(Component, Debug)]
pub struct ShrinkButton {
    /// Resting center as a fraction of the view.
    pub anchor: Vec2,
    pub scale: Spring,
    pub clicks: usize,
    given_up: bool,
}

impl ShrinkButton {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            scale: Spring::new(1.0, SHRINK_SPRING_STIFFNESS, SHRINK_SPRING_DAMPING),
            clicks: 0,
            given_up: false,
        }
    }

    pub fn center(&self, view: Vec2) -> Vec2 {
        self.anchor * view
    }

    /// Count a click: shrink one notch, and report true when the
    /// counter reaches the progression length (give up). The final
    /// click both shrinks and gives up; later clicks are ignored.
    pub fn register_click(&mut self) -> bool {
        if self.given_up {
            return false;
        }
        self.clicks += 1;
        self.scale.set_target(shrink_scale(self.clicks));
        if self.clicks >= BUTTON_PROGRESSIONS.len() {
            self.given_up = true;
            return true;
        }
        false
    }

    pub fn given_up(&self) -> bool {
        self.given_up
    }
}

impl Animate for ShrinkButton {
    fn step<R: Rng>(&mut self, dt: f32, _view: Vec2, _rng: &mut R) {
        self.scale.step(dt);
    }

    fn apply(&self, view: Vec2, transform: &mut Transform, _sprite: &mut Sprite) {
        transform.translation = screen_to_world(self.center(view), view).extend(Z_CONTROLS);
        transform.scale = Vec3::splat(self.scale.value());
    }
}

pub fn shrink_scale(clicks: usize) -> f32 {
    (1.0 - clicks as f32 * SHRINK_PER_CLICK).max(SHRINK_SCALE_FLOOR)
}

pub fn shrink_interact(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerScreen>,
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
    mut next: ResMut<NextState<PageState>>,
    mut q: Query<&mut ShrinkButton>,
    mut labels: Query<&mut Text2d, With<ShrinkLabel>>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(pointer) = pointer.0 else {
        return;
    };
    let view = window.size();
    let last = BUTTON_PROGRESSIONS.len() - 1;

    for mut button in &mut q {
        let over = rect_contains(
            button.center(view),
            BUTTON_SIZE * button.scale.value(),
            pointer,
        );
        if !over || button.given_up {
            continue;
        }
        if button.register_click() {
            info!(clicks = button.clicks, "shrink button gave up");
            next.set(PageState::Thinking);
            continue;
        }
        for mut label in &mut labels {
            label.0 = BUTTON_PROGRESSIONS[button.clicks.min(last)].to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_a_clamped_linear_decay() {
        assert_eq!(shrink_scale(0), 1.0);
        assert!((shrink_scale(1) - 0.85).abs() < 1e-6);
        assert!((shrink_scale(3) - 0.55).abs() < 1e-6);
        assert_eq!(shrink_scale(5), SHRINK_SCALE_FLOOR.max(1.0 - 0.75));
        assert_eq!(shrink_scale(100), SHRINK_SCALE_FLOOR);
    }

    #[test]
    fn gives_up_when_the_counter_reaches_the_progression_length() {
        let mut button = ShrinkButton::new(Vec2::new(0.5, 0.5));
        let n = BUTTON_PROGRESSIONS.len();

        for i in 1..n {
            assert!(!button.register_click());
            assert_eq!(button.clicks, i);
            assert!((button.scale.target() - shrink_scale(i)).abs() < 1e-6);
        }
        // The Nth click still shrinks, and gives up.
        assert!(button.register_click());
        assert!(button.given_up());
        assert!((button.scale.target() - shrink_scale(n)).abs() < 1e-6);
        // Exactly once.
        assert!(!button.register_click());
        assert_eq!(button.clicks, n);
    }
}
