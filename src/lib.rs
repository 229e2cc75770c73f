//! A lighthearted "will you be my valentine" page rendered with Bevy:
//! an ambient heart backdrop, a confetti burst on yes, and a decline
//! button that dodges the cursor, shrinks away, or politely stays put.

pub mod config;
pub mod controls;
pub mod customize;
pub mod effects;
pub mod page;
