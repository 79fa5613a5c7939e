mod components;
mod events;
mod systems;

use bevy::prelude::*;

pub use components::{GameLink, LocalGame};
pub use events::{Draw, GameRestart, MoveApplied, PlayerWon, StateUpdated};

use systems::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveApplied>()
            .add_event::<StateUpdated>()
            .add_event::<PlayerWon>()
            .add_event::<Draw>()
            .add_event::<GameRestart>()
            .add_systems(Startup, create_game)
            .add_systems(
                Update,
                (apply_move, handle_state_updated, handle_restart).chain(),
            );
    }
}
