use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub mod dodge;
pub mod shrink;
pub mod spring;

use crate::effects::driver::animate;
use crate::page::PageState;
use dodge::{DodgeButton, dodge_interact};
use shrink::{ShrinkButton, shrink_interact};

/// Last known pointer position in screen coordinates (origin top-left,
/// y down). Kept when the cursor leaves the window, like the global
/// mouse-move listener it replaces; `None` until first seen.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerScreen(pub Option<Vec2>);

/// Track the pointer every frame (no-op while the window has no cursor).
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerScreen>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(position) = window.cursor_position() {
        pointer.0 = Some(position);
    }
}

/// Screen-space point-in-rect test against a control's rendered box.
pub fn rect_contains(center: Vec2, size: Vec2, point: Vec2) -> bool {
    let half = 0.5 * size;
    (point.x - center.x).abs() <= half.x && (point.y - center.y).abs() <= half.y
}

/// The decline-button behaviors and the input plumbing they share.
/// Interaction runs before the animation driver so a committed offset
/// is glided toward on the same frame.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerScreen>().add_systems(
            Update,
            (
                track_pointer,
                (dodge_interact, shrink_interact).run_if(in_state(PageState::Asking)),
                (animate::<DodgeButton>, animate::<ShrinkButton>),
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_inclusive_at_edges() {
        let center = Vec2::new(100.0, 50.0);
        let size = Vec2::new(80.0, 40.0);
        assert!(rect_contains(center, size, center));
        assert!(rect_contains(center, size, Vec2::new(140.0, 70.0)));
        assert!(rect_contains(center, size, Vec2::new(60.0, 30.0)));
        assert!(!rect_contains(center, size, Vec2::new(140.1, 50.0)));
        assert!(!rect_contains(center, size, Vec2::new(100.0, 70.1)));
    }
}
