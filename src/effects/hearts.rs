//! Ambient heart backdrop: a fixed population of faint hearts drifting
//! upward with a sinusoidal wobble, recycled in place to the bottom
//! edge once they leave the top. Runs from startup to app exit.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::{Rng, RngExt};

use crate::config::{
    HEART_BASE_SIZE, HEART_COUNT, HEART_RECYCLE_MARGIN, HEART_WOBBLE_AMPLITUDE, Z_HEARTS,
};
use crate::effects::driver::{Animate, screen_to_world};
use crate::page::ActiveTheme;

#[derive(Component, Debug, Clone)]
pub struct AmbientHeart {
    pub pos: Vec2,
    pub size: f32,
    /// Upward px per frame.
    pub speed: f32,
    pub opacity: f32,
    /// Phase of the sideways wobble, radians.
    pub wobble: f32,
    pub wobble_speed: f32,
}

impl AmbientHeart {
    pub fn scatter<R: Rng>(view: Vec2, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(rng.random_range(0.0..view.x), rng.random_range(0.0..view.y)),
            size: rng.random_range(10.0..25.0),
            speed: rng.random_range(0.2..0.7),
            opacity: rng.random_range(0.05..0.20),
            wobble: rng.random_range(0.0..std::f32::consts::TAU),
            wobble_speed: rng.random_range(0.01..0.03),
        }
    }
}

impl Animate for AmbientHeart {
    fn step<R: Rng>(&mut self, _dt: f32, view: Vec2, rng: &mut R) {
        self.pos.y -= self.speed;
        self.wobble += self.wobble_speed;
        self.pos.x += self.wobble.sin() * HEART_WOBBLE_AMPLITUDE;

        // Recycle in place once past the top: same slot, new column.
        if self.pos.y < -HEART_RECYCLE_MARGIN {
            self.pos.y = view.y + HEART_RECYCLE_MARGIN;
            self.pos.x = rng.random_range(0.0..view.x);
        }
    }

    fn apply(&self, view: Vec2, transform: &mut Transform, sprite: &mut Sprite) {
        transform.translation = screen_to_world(self.pos, view).extend(Z_HEARTS);
        transform.rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_4);
        transform.scale = Vec3::splat(self.size / HEART_BASE_SIZE);
        sprite.color = sprite.color.with_alpha(self.opacity);
    }
}

pub fn spawn_hearts(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    theme: Res<ActiveTheme>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let view = window.size();
    let mut rng = rand::rng();

    for _ in 0..HEART_COUNT {
        let heart = AmbientHeart::scatter(view, &mut rng);
        commands.spawn((
            Sprite {
                color: theme.0.primary().with_alpha(heart.opacity),
                custom_size: Some(Vec2::splat(HEART_BASE_SIZE)),
                ..default()
            },
            Transform::from_translation(screen_to_world(heart.pos, view).extend(Z_HEARTS)),
            heart,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEW: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn rises_every_step_until_recycled() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut heart = AmbientHeart::scatter(VIEW, &mut rng);
        for _ in 0..50_000 {
            let y = heart.pos.y;
            heart.step(1.0 / 60.0, VIEW, &mut rng);
            if heart.pos.y > y {
                // Only a recycle moves a heart downward.
                assert!(heart.pos.y >= VIEW.y);
                assert!(heart.pos.x >= 0.0 && heart.pos.x < VIEW.x);
                return;
            }
        }
        panic!("heart never recycled");
    }

    #[test]
    fn wobble_drift_stays_bounded_per_step() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut heart = AmbientHeart::scatter(VIEW, &mut rng);
        for _ in 0..1000 {
            let x = heart.pos.x;
            heart.step(1.0 / 60.0, VIEW, &mut rng);
            if heart.pos.y >= VIEW.y {
                continue; // recycle re-randomizes x
            }
            assert!((heart.pos.x - x).abs() <= HEART_WOBBLE_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn backdrop_never_finishes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut heart = AmbientHeart::scatter(VIEW, &mut rng);
        for _ in 0..10_000 {
            heart.step(1.0 / 60.0, VIEW, &mut rng);
            assert!(!heart.finished());
        }
    }
}
