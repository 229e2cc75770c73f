use bevy::prelude::*;

pub const APP_NAME: &str = "BemyVal";

/// Confetti burst (triggered when the recipient says yes)
pub const CONFETTI_COUNT: usize = 150;
/// Downward acceleration added to vy every frame (px/frame^2).
pub const CONFETTI_GRAVITY: f32 = 0.1;
/// Opacity lost per frame once a particle nears the bottom edge.
pub const CONFETTI_FADE: f32 = 0.02;
/// Particles start fading this many px above the bottom edge.
pub const CONFETTI_FADE_MARGIN: f32 = 100.0;
/// Base sprite size of one confetti heart (scaled per particle).
pub const CONFETTI_SIZE: Vec2 = Vec2::new(12.0, 12.0);

/// Ambient heart backdrop
pub const HEART_COUNT: usize = 20;
/// Hearts recycle to the bottom once they rise this far above the top.
pub const HEART_RECYCLE_MARGIN: f32 = 30.0;
/// Horizontal drift per frame (scaled by sin of the wobble phase).
pub const HEART_WOBBLE_AMPLITUDE: f32 = 0.5;
/// Sprite size a heart of `size == HEART_BASE_SIZE` renders at.
pub const HEART_BASE_SIZE: f32 = 20.0;

/// Dodge (evasive) decline button
/// Minimum relocation distance in px.
pub const DODGE_MIN_TRAVEL: f32 = 150.0;
/// Relocation distance as a fraction of the smaller container dimension.
pub const DODGE_TRAVEL_FACTOR: f32 = 0.4;
/// Random perturbation of the escape angle, radians (about +/- 15 degrees).
pub const DODGE_JITTER: f32 = 0.25;
/// Keep-out margin between the button and the container edge, px.
pub const DODGE_MARGIN: f32 = 10.0;
/// An out-of-bounds candidate is pulled back to this fraction of the bound.
pub const DODGE_REBOUND: f32 = 0.7;
/// Scale lost per click, and the smallest the dodge button gets.
pub const DODGE_SHRINK_PER_CLICK: f32 = 0.08;
pub const DODGE_SCALE_FLOOR: f32 = 0.7;

/// Shrink decline button
pub const SHRINK_PER_CLICK: f32 = 0.15;
pub const SHRINK_SCALE_FLOOR: f32 = 0.3;

/// Spring smoothing (stiffness / damping, px units)
pub const DODGE_SPRING_STIFFNESS: f32 = 400.0;
pub const DODGE_SPRING_DAMPING: f32 = 35.0;
pub const SHRINK_SPRING_STIFFNESS: f32 = 400.0;
pub const SHRINK_SPRING_DAMPING: f32 = 25.0;

/// Page layout (anchors as fractions of the view, screen space)
pub const HEADLINE_ANCHOR: Vec2 = Vec2::new(0.5, 0.25);
pub const MESSAGE_ANCHOR: Vec2 = Vec2::new(0.5, 0.38);
pub const YES_ANCHOR: Vec2 = Vec2::new(0.38, 0.72);
pub const DECLINE_ANCHOR: Vec2 = Vec2::new(0.62, 0.72);
pub const BUTTON_SIZE: Vec2 = Vec2::new(180.0, 56.0);
pub const BUTTON_FONT_SIZE: f32 = 18.0;
pub const HEADLINE_FONT_SIZE: f32 = 34.0;
pub const MESSAGE_FONT_SIZE: f32 = 22.0;

/// Draw order (z)
pub const Z_HEARTS: f32 = -5.0;
pub const Z_TEXT: f32 = 5.0;
pub const Z_CONTROLS: f32 = 10.0;
pub const Z_CONFETTI: f32 = 50.0;

/// Text shown on the decline button, advancing one entry per click.
/// Its length is the interaction budget for both decline behaviors.
pub const BUTTON_PROGRESSIONS: [&str; 5] = [
    "Let me think 😅",
    "Are you sure?",
    "Don't do this 😭",
    "Last chance 👀",
    "Fine... if you must 💔",
];

pub const YES_LABEL: &str = "Yes 💖";

/// Celebration headline after saying yes, picked at random.
pub const YES_MESSAGES: [&str; 5] = [
    "You just made someone's entire year! 💖",
    "This is the best Valentine's Day ever! 🎉",
    "Love wins! 💕",
    "Someone is doing a happy dance right now! 💃",
    "You have no idea how happy you just made them! 🥰",
];

/// Acknowledgment shown once a decline control gives up.
pub const THINKING_MESSAGE: &str = "No rush. Take all the time you need 💭";

pub const DEFAULT_MESSAGE: &str = "I don't want chocolates. I want you.";

/// Confetti palette (sRGB bytes).
pub const CONFETTI_PALETTE: [[u8; 3]; 5] = [
    [0xFF, 0x6B, 0x9D],
    [0xFF, 0x8F, 0xB5],
    [0xFF, 0xD9, 0x3D],
    [0xC4, 0x45, 0x69],
    [0xFF, 0x69, 0xB4],
];

pub fn palette_color(index: usize) -> Color {
    let [r, g, b] = CONFETTI_PALETTE[index % CONFETTI_PALETTE.len()];
    Color::srgb_u8(r, g, b)
}

/// A selectable page theme: primary drives hearts and the yes button,
/// secondary the decline button, accent the page background.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    primary: [u8; 3],
    secondary: [u8; 3],
    accent: [u8; 3],
    text: [u8; 3],
}

impl Theme {
    pub fn primary(&self) -> Color {
        let [r, g, b] = self.primary;
        Color::srgb_u8(r, g, b)
    }

    pub fn secondary(&self) -> Color {
        let [r, g, b] = self.secondary;
        Color::srgb_u8(r, g, b)
    }

    pub fn accent(&self) -> Color {
        let [r, g, b] = self.accent;
        Color::srgb_u8(r, g, b)
    }

    pub fn text(&self) -> Color {
        let [r, g, b] = self.text;
        Color::srgb_u8(r, g, b)
    }
}

pub const THEMES: [Theme; 5] = [
    Theme {
        id: "romantic",
        name: "Romantic Pink",
        primary: [0xFF, 0x6B, 0x81],
        secondary: [0xFF, 0xD6, 0xE0],
        accent: [0xFF, 0xF0, 0xF3],
        text: [0x3A, 0x22, 0x2E],
    },
    Theme {
        id: "classic",
        name: "Classic Red",
        primary: [0xDC, 0x26, 0x26],
        secondary: [0xFC, 0xA5, 0xA5],
        accent: [0xFE, 0xE2, 0xE2],
        text: [0x3A, 0x18, 0x18],
    },
    Theme {
        id: "lavender",
        name: "Lavender Dream",
        primary: [0x8B, 0x5C, 0xF6],
        secondary: [0xC4, 0xB5, 0xFD],
        accent: [0xED, 0xE9, 0xFE],
        text: [0x2B, 0x1E, 0x45],
    },
    Theme {
        id: "sunset",
        name: "Sunset Glow",
        primary: [0xF9, 0x73, 0x16],
        secondary: [0xFD, 0xBA, 0x74],
        accent: [0xFF, 0xF7, 0xED],
        text: [0x43, 0x25, 0x0D],
    },
    Theme {
        id: "noir",
        name: "Elegant Noir",
        primary: [0xF9, 0xA8, 0xD4],
        secondary: [0xF4, 0x72, 0xB6],
        accent: [0x1A, 0x1A, 0x2E],
        text: [0xFA, 0xF5, 0xFF],
    },
];

/// Look up a theme by id; unknown ids fall back to the first entry.
pub fn theme_or_default(id: &str) -> &'static Theme {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}
