use bevy::prelude::*;

/// Marker for the outcome overlay root node.
#[derive(Component)]
pub struct Overlay;

/// Marker for the button that restarts the game.
#[derive(Component)]
pub struct RestartButton;
