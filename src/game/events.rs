use bevy::prelude::*;

use crate::core::{GameState, GridIndex, Mark};

/// Event emitted after a mark is successfully placed on the board.
#[derive(Debug, Event)]
pub struct MoveApplied {
    game: Entity,
    player: Mark,
    pos: GridIndex,
}

impl MoveApplied {
    pub fn new(game: Entity, player: Mark, pos: GridIndex) -> Self {
        Self { game, player, pos }
    }

    pub fn game(&self) -> Entity {
        self.game
    }

    pub fn player(&self) -> Mark {
        self.player
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }
}

/// Event emitted after every applied move with the state the game moved into.
#[derive(Debug, Event)]
pub struct StateUpdated {
    game: Entity,
    state: GameState,
}

impl StateUpdated {
    pub fn new(game: Entity, state: GameState) -> Self {
        Self { game, state }
    }

    pub fn game(&self) -> Entity {
        self.game
    }

    pub fn state(&self) -> GameState {
        self.state
    }
}

/// Event emitted when the game is won.
#[derive(Debug, Event)]
pub struct PlayerWon {
    game: Entity,
    player: Mark,
}

impl PlayerWon {
    pub fn new(game: Entity, player: Mark) -> Self {
        Self { game, player }
    }

    pub fn game(&self) -> Entity {
        self.game
    }

    pub fn player(&self) -> Mark {
        self.player
    }
}

/// Event emitted when the game ends with a full board and no winner.
#[derive(Debug, Event)]
pub struct Draw {
    game: Entity,
}

impl Draw {
    pub fn new(game: Entity) -> Self {
        Self { game }
    }

    pub fn game(&self) -> Entity {
        self.game
    }
}

/// Event emitted when the restart control is activated.
#[derive(Debug, Default, Event)]
pub struct GameRestart;
