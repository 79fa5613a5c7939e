use bevy::prelude::*;

use crate::core::GridIndex;

/// Event emitted when a board tile is pressed.
/// Contains the entity of a board whose tile was pressed
/// and a [`GridIndex`] of a tile.
#[derive(Debug, Event)]
pub struct TilePressed {
    board: Entity,
    pos: GridIndex,
}

impl TilePressed {
    pub fn new(board: Entity, pos: GridIndex) -> Self {
        Self { board, pos }
    }

    pub fn board(&self) -> Entity {
        self.board
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }
}
