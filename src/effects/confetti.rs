//! Confetti burst fired when the recipient says yes: a batch of heart
//! particles falls in from above the viewport, tumbles under gravity,
//! and fades out near the bottom edge. The burst is self-terminating;
//! re-triggering replaces the whole population.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::{Rng, RngExt};
use tracing::info;

use crate::config::{
    CONFETTI_COUNT, CONFETTI_FADE, CONFETTI_FADE_MARGIN, CONFETTI_GRAVITY, CONFETTI_PALETTE,
    CONFETTI_SIZE, Z_CONFETTI, palette_color,
};
use crate::effects::driver::{Animate, screen_to_world};

#[derive(Component, Debug, Clone)]
pub struct ConfettiParticle {
    pub pos: Vec2,
    /// px per frame.
    pub vel: Vec2,
    /// Degrees; advanced by `rotation_speed` per frame.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color_index: usize,
}

impl ConfettiParticle {
    /// A fresh particle somewhere above the top edge, falling in.
    pub fn scatter<R: Rng>(view: Vec2, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..view.x),
                -20.0 - rng.random_range(0.0..100.0),
            ),
            vel: Vec2::new(rng.random_range(-4.0..4.0), rng.random_range(2.0..5.0)),
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-5.0..5.0),
            scale: rng.random_range(0.5..1.0),
            opacity: 1.0,
            color_index: rng.random_range(0..CONFETTI_PALETTE.len()),
        }
    }
}

impl Animate for ConfettiParticle {
    fn step<R: Rng>(&mut self, _dt: f32, view: Vec2, _rng: &mut R) {
        self.pos += self.vel;
        self.vel.y += CONFETTI_GRAVITY;
        self.rotation += self.rotation_speed;

        // Fade out when near the bottom
        if self.pos.y > view.y - CONFETTI_FADE_MARGIN {
            self.opacity = (self.opacity - CONFETTI_FADE).max(0.0);
        }
    }

    fn finished(&self) -> bool {
        self.opacity <= 0.0
    }

    fn apply(&self, view: Vec2, transform: &mut Transform, sprite: &mut Sprite) {
        transform.translation = screen_to_world(self.pos, view).extend(Z_CONFETTI);
        transform.rotation = Quat::from_rotation_z(-self.rotation.to_radians());
        transform.scale = Vec3::splat(self.scale);
        sprite.color = palette_color(self.color_index).with_alpha(self.opacity);
    }
}

/// Despawn whatever is left of the previous burst and spawn a full
/// fresh population, so repeated triggers never grow the count.
pub fn trigger_confetti(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    live: Query<Entity, With<ConfettiParticle>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let view = window.size();
    for entity in &live {
        commands.entity(entity).despawn();
    }

    let mut rng = rand::rng();
    for _ in 0..CONFETTI_COUNT {
        let particle = ConfettiParticle::scatter(view, &mut rng);
        commands.spawn((
            Sprite {
                color: palette_color(particle.color_index),
                custom_size: Some(CONFETTI_SIZE),
                ..default()
            },
            Transform::from_translation(
                screen_to_world(particle.pos, view).extend(Z_CONFETTI),
            ),
            particle,
        ));
    }
    info!(count = CONFETTI_COUNT, "confetti triggered");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEW: Vec2 = Vec2::new(800.0, 600.0);

    fn population(seed: u64) -> Vec<ConfettiParticle> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..CONFETTI_COUNT)
            .map(|_| ConfettiParticle::scatter(VIEW, &mut rng))
            .collect()
    }

    #[test]
    fn scatter_starts_above_the_view_fully_opaque() {
        for p in population(7) {
            assert!(p.pos.x >= 0.0 && p.pos.x < VIEW.x);
            assert!(p.pos.y <= -20.0 && p.pos.y > -120.0);
            assert!(p.vel.x >= -4.0 && p.vel.x < 4.0);
            assert!(p.vel.y >= 2.0 && p.vel.y < 5.0);
            assert!(p.scale >= 0.5 && p.scale < 1.0);
            assert_eq!(p.opacity, 1.0);
            assert!(p.color_index < CONFETTI_PALETTE.len());
        }
    }

    #[test]
    fn one_step_applies_gravity_to_every_particle() {
        let mut rng = StdRng::seed_from_u64(42);
        for mut p in population(42) {
            let vy = p.vel.y;
            p.step(1.0 / 60.0, VIEW, &mut rng);
            assert!((p.vel.y - (vy + CONFETTI_GRAVITY)).abs() < 1e-6);
            // Nothing starts near the bottom, so nothing has faded yet.
            assert_eq!(p.opacity, 1.0);
        }
    }

    #[test]
    fn opacity_decays_near_the_bottom_and_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = ConfettiParticle::scatter(VIEW, &mut rng);
        p.pos = Vec2::new(100.0, VIEW.y - 10.0);
        p.vel = Vec2::ZERO;

        let mut last = p.opacity;
        for _ in 0..200 {
            p.step(1.0 / 60.0, VIEW, &mut rng);
            assert!(p.opacity <= last);
            assert!(p.opacity >= 0.0);
            last = p.opacity;
        }
        assert!(p.finished());
    }

    #[test]
    fn falls_until_finished() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = ConfettiParticle::scatter(VIEW, &mut rng);
        // Generous bound: crossing the view plus the full fade takes
        // far fewer steps than this under constant gravity.
        let mut steps = 0;
        while !p.finished() && steps < 10_000 {
            p.step(1.0 / 60.0, VIEW, &mut rng);
            steps += 1;
        }
        assert!(p.finished(), "particle never faded out");
    }

    #[test]
    fn retrigger_replaces_the_population() {
        use bevy::ecs::system::RunSystemOnce;
        use bevy::window::PrimaryWindow;

        let mut world = World::new();
        world.spawn((Window::default(), PrimaryWindow));

        world.run_system_once(trigger_confetti).unwrap();
        let mut q = world.query_filtered::<Entity, With<ConfettiParticle>>();
        let first: Vec<Entity> = q.iter(&world).collect();
        assert_eq!(first.len(), CONFETTI_COUNT);

        // A second trigger despawns the old batch before spawning.
        world.run_system_once(trigger_confetti).unwrap();
        let second: Vec<Entity> = q.iter(&world).collect();
        assert_eq!(second.len(), CONFETTI_COUNT);
        for entity in &first {
            assert!(!second.contains(entity), "old particle survived a retrigger");
        }
    }
}
