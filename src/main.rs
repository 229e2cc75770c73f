use bevy::prelude::*;

use bemyval::config;
use bemyval::controls::ControlsPlugin;
use bemyval::customize;
use bemyval::effects::EffectsPlugin;
use bemyval::page::{ActiveTheme, PagePlugin};

fn main() {
    let custom = customize::load();
    let theme = config::theme_or_default(&custom.theme);

    App::new()
        // Page background from the sender's theme
        .insert_resource(ClearColor(theme.accent()))
        .insert_resource(ActiveTheme(theme))
        .insert_resource(custom)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config::APP_NAME.to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((PagePlugin, EffectsPlugin, ControlsPlugin))
        .run();
}
