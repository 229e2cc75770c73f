use bevy::prelude::*;

pub mod confetti;
pub mod driver;
pub mod hearts;

use crate::page::PageState;
use confetti::{ConfettiParticle, trigger_confetti};
use driver::animate;
use hearts::{AmbientHeart, spawn_hearts};

/// Decorative particle systems: the ambient heart backdrop (runs
/// forever) and the confetti burst (fired on yes, self-terminating).
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hearts)
            .add_systems(OnEnter(PageState::Celebrated), trigger_confetti)
            .add_systems(
                Update,
                (animate::<AmbientHeart>, animate::<ConfettiParticle>),
            );
    }
}
