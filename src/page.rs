//! The hosting page: spawns the message and the answer controls, and
//! owns the `Asking -> Celebrated | Thinking` state machine. Saying yes
//! triggers the confetti burst (see `EffectsPlugin`); a decline control
//! giving up lands in the thinking acknowledgment.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::RngExt;
use tracing::info;

use crate::config::{
    BUTTON_FONT_SIZE, BUTTON_PROGRESSIONS, BUTTON_SIZE, DECLINE_ANCHOR, HEADLINE_ANCHOR,
    HEADLINE_FONT_SIZE, MESSAGE_ANCHOR, MESSAGE_FONT_SIZE, THINKING_MESSAGE, Theme, YES_ANCHOR,
    YES_LABEL, YES_MESSAGES, Z_CONTROLS, Z_TEXT,
};
use crate::controls::dodge::{DodgeButton, DodgeLabel};
use crate::controls::shrink::{ShrinkButton, ShrinkLabel};
use crate::controls::{PointerScreen, rect_contains};
use crate::customize::{Behavior, Customization};
use crate::effects::driver::screen_to_world;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageState {
    #[default]
    Asking,
    /// The recipient said yes.
    Celebrated,
    /// A decline control gave up; the recipient is thinking it over.
    Thinking,
}

/// The theme the sender picked, resolved once at startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ActiveTheme(pub &'static Theme);

/// Entities that only exist while the question is open.
#[derive(Component)]
pub struct AskingUi;

/// The page headline; its text changes with the page state.
#[derive(Component)]
pub struct Headline;

/// Resting center as a fraction of the view, for page entities that
/// do not move on their own (text, the yes/still buttons). One system
/// keeps them anchored through window resizes.
#[derive(Component, Debug, Clone, Copy)]
pub struct StaticAnchor(pub Vec2);

/// The always-accepting answer button.
#[derive(Component, Debug)]
pub struct YesButton;

/// The polite decline variant: one click and it concedes.
#[derive(Component, Debug)]
pub struct StillButton;

pub fn spawn_page(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    custom: Res<Customization>,
    theme: Res<ActiveTheme>,
) {
    commands.spawn(Camera2d);

    let Ok(window) = windows.single() else {
        return;
    };
    let view = window.size();
    let theme = theme.0;

    commands.spawn((
        Headline,
        StaticAnchor(HEADLINE_ANCHOR),
        Text2d::new(custom.headline()),
        TextFont {
            font_size: HEADLINE_FONT_SIZE,
            ..default()
        },
        TextColor(theme.text()),
        Transform::from_translation(
            screen_to_world(HEADLINE_ANCHOR * view, view).extend(Z_TEXT),
        ),
    ));

    commands.spawn((
        StaticAnchor(MESSAGE_ANCHOR),
        Text2d::new(custom.message.clone()),
        TextFont {
            font_size: MESSAGE_FONT_SIZE,
            ..default()
        },
        TextColor(theme.text()),
        Transform::from_translation(
            screen_to_world(MESSAGE_ANCHOR * view, view).extend(Z_TEXT),
        ),
    ));

    spawn_button(
        &mut commands,
        view,
        YES_ANCHOR,
        YES_LABEL,
        theme.primary(),
        theme.text(),
        (YesButton, StaticAnchor(YES_ANCHOR), AskingUi),
        (),
    );

    let decline_label = BUTTON_PROGRESSIONS[0];
    match custom.behavior {
        Behavior::Dodge => spawn_button(
            &mut commands,
            view,
            DECLINE_ANCHOR,
            decline_label,
            theme.secondary(),
            theme.text(),
            (DodgeButton::new(DECLINE_ANCHOR), AskingUi),
            DodgeLabel,
        ),
        Behavior::Shrink => spawn_button(
            &mut commands,
            view,
            DECLINE_ANCHOR,
            decline_label,
            theme.secondary(),
            theme.text(),
            (ShrinkButton::new(DECLINE_ANCHOR), AskingUi),
            ShrinkLabel,
        ),
        Behavior::Still => spawn_button(
            &mut commands,
            view,
            DECLINE_ANCHOR,
            decline_label,
            theme.secondary(),
            theme.text(),
            (StillButton, StaticAnchor(DECLINE_ANCHOR), AskingUi),
            (),
        ),
    }
}

fn spawn_button(
    commands: &mut Commands,
    view: Vec2,
    anchor: Vec2,
    label: &str,
    fill: Color,
    text_color: Color,
    extras: impl Bundle,
    label_extras: impl Bundle,
) {
    commands
        .spawn((
            Sprite {
                color: fill,
                custom_size: Some(BUTTON_SIZE),
                ..default()
            },
            Transform::from_translation(screen_to_world(anchor * view, view).extend(Z_CONTROLS)),
            extras,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new(label),
                TextFont {
                    font_size: BUTTON_FONT_SIZE,
                    ..default()
                },
                TextColor(text_color),
                Transform::from_xyz(0.0, 0.0, 0.1),
                label_extras,
            ));
        });
}

/// Keep anchored page entities (text and the yes/still buttons) in
/// place through window resizes. Draw order is per entity, so only x
/// and y are rewritten.
pub fn place_static_anchors(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut anchored: Query<(&StaticAnchor, &mut Transform)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let view = window.size();
    for (anchor, mut transform) in &mut anchored {
        let position = screen_to_world(anchor.0 * view, view);
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

pub fn yes_interact(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerScreen>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next: ResMut<NextState<PageState>>,
    q: Query<&StaticAnchor, With<YesButton>>,
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
    for anchor in &q {
        if rect_contains(anchor.0 * view, BUTTON_SIZE, pointer) {
            info!(answer = "yes", "response recorded");
            next.set(PageState::Celebrated);
        }
    }
}

pub fn still_interact(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerScreen>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next: ResMut<NextState<PageState>>,
    q: Query<&StaticAnchor, With<StillButton>>,
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
    for anchor in &q {
        if rect_contains(anchor.0 * view, BUTTON_SIZE, pointer) {
            info!(answer = "thinking", "declined politely");
            next.set(PageState::Thinking);
        }
    }
}

pub fn despawn_asking(mut commands: Commands, q: Query<Entity, With<AskingUi>>) {
    for entity in &q {
        commands.entity(entity).despawn();
    }
}

pub fn celebrate_headline(mut headline: Query<&mut Text2d, With<Headline>>) {
    let mut rng = rand::rng();
    let line = YES_MESSAGES[rng.random_range(0..YES_MESSAGES.len())];
    for mut text in &mut headline {
        text.0 = line.to_string();
    }
}

pub fn thinking_headline(mut headline: Query<&mut Text2d, With<Headline>>) {
    for mut text in &mut headline {
        text.0 = THINKING_MESSAGE.to_string();
    }
}

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<PageState>()
            .add_systems(Startup, spawn_page)
            .add_systems(
                Update,
                (
                    place_static_anchors,
                    (yes_interact, still_interact).run_if(in_state(PageState::Asking)),
                ),
            )
            .add_systems(OnExit(PageState::Asking), despawn_asking)
            .add_systems(OnEnter(PageState::Celebrated), celebrate_headline)
            .add_systems(OnEnter(PageState::Thinking), thinking_headline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn anchored_entities_follow_the_window_size() {
        let mut world = World::new();
        world.spawn((Window::default(), PrimaryWindow));
        let view = {
            let mut q = world.query::<&Window>();
            q.single(&world).unwrap().size()
        };
        let text = world
            .spawn((
                StaticAnchor(Vec2::new(0.25, 0.5)),
                Transform::from_xyz(0.0, 0.0, Z_TEXT),
            ))
            .id();
        let button = world
            .spawn((
                YesButton,
                StaticAnchor(YES_ANCHOR),
                Transform::from_xyz(0.0, 0.0, Z_CONTROLS),
            ))
            .id();

        world.run_system_once(place_static_anchors).unwrap();

        let placed = world.get::<Transform>(text).unwrap();
        let expected = screen_to_world(Vec2::new(0.25, 0.5) * view, view);
        assert_eq!(placed.translation.truncate(), expected);
        // Draw order is untouched.
        assert_eq!(placed.translation.z, Z_TEXT);

        let placed = world.get::<Transform>(button).unwrap();
        let expected = screen_to_world(YES_ANCHOR * view, view);
        assert_eq!(placed.translation.truncate(), expected);
        assert_eq!(placed.translation.z, Z_CONTROLS);
    }
}
