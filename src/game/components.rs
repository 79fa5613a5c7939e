use bevy::prelude::*;

use crate::core;

/// Component that wraps the rules engine session.
#[derive(Debug, Component, Deref, DerefMut)]
pub struct LocalGame(core::TicTacToe);

impl Default for LocalGame {
    fn default() -> Self {
        Self(core::TicTacToe::default())
    }
}

impl From<core::TicTacToe> for LocalGame {
    fn from(value: core::TicTacToe) -> Self {
        Self(value)
    }
}

/// Component that links an entity to the game entity it belongs to.
#[derive(Clone, Copy, Debug, Component)]
pub struct GameLink(Entity);

impl GameLink {
    pub fn new(game: Entity) -> Self {
        Self(game)
    }

    pub fn get(&self) -> Entity {
        self.0
    }
}
