use bevy::prelude::*;

use crate::core::GridIndex;

/// Marker for the board backdrop sprite.
#[derive(Component)]
pub struct Board;

/// Marker for the border sprites drawn between tiles.
#[derive(Component)]
pub struct Border;

/// Marker for the sprite stretched over the winning line.
#[derive(Component)]
pub struct WinLine;

/// Component that stores a tile position inside the board.
#[derive(Clone, Copy, Debug, PartialEq, Component, Deref)]
pub struct Tile(GridIndex);

impl From<GridIndex> for Tile {
    fn from(value: GridIndex) -> Self {
        Self(value)
    }
}

impl From<Tile> for GridIndex {
    fn from(value: Tile) -> Self {
        value.0
    }
}
