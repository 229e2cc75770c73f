//! The per-frame contract every animated entity shares: advance state,
//! project it onto the sprite, and report whether it is finished.
//!
//! One generic system drives any implementor; finished entities are
//! despawned, so a burst effect self-terminates once its last particle
//! dies, while ambient effects simply never finish.

use bevy::ecs::component::Mutable;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

/// Simulation state happens in screen coordinates (origin top-left,
/// y down, like the canvas the page was born on); this converts to
/// Bevy world coordinates (origin at the window center, y up).
pub fn screen_to_world(p: Vec2, view: Vec2) -> Vec2 {
    Vec2::new(p.x - 0.5 * view.x, 0.5 * view.y - p.y)
}

pub trait Animate {
    /// Advance one frame. `dt` is the render-frame delta in seconds;
    /// per-frame-tuned effects are free to ignore it.
    fn step<R: Rng>(&mut self, dt: f32, view: Vec2, rng: &mut R);

    /// Finished entities are despawned by the driver.
    fn finished(&self) -> bool {
        false
    }

    /// Write the current state to the rendered sprite.
    fn apply(&self, view: Vec2, transform: &mut Transform, sprite: &mut Sprite);
}

/// Step and redraw every `T` this frame. Window not created yet -> no-op.
pub fn animate<T>(
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut T, &mut Transform, &mut Sprite)>,
) where
    T: Animate + Component<Mutability = Mutable>,
{
    let Ok(window) = windows.single() else {
        return;
    };
    let view = window.size();
    let dt = time.delta_secs();
    let mut rng = rand::rng();

    for (entity, mut item, mut transform, mut sprite) in &mut q {
        item.step(dt, view, &mut rng);
        if item.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        item.apply(view, &mut transform, &mut sprite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_to_world_maps_corners() {
        let view = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_world(Vec2::ZERO, view), Vec2::new(-400.0, 300.0));
        assert_eq!(screen_to_world(view, view), Vec2::new(400.0, -300.0));
        assert_eq!(screen_to_world(0.5 * view, view), Vec2::ZERO);
    }
}
