use bevy::prelude::*;

use super::components::{GameLink, LocalGame};
use super::events::{Draw, GameRestart, MoveApplied, PlayerWon, StateUpdated};
use crate::board::{Board, TilePressed};
use crate::core::{self, FinishedState, GameState};
use crate::Settings;

/// Spawn the initial game session on startup.
pub fn create_game(mut commands: Commands, settings: Res<Settings>) {
    let game_entity = commands
        .spawn(LocalGame::from(core::TicTacToe::new(
            settings.board_dimension(),
        )))
        .id();
    debug!("game created: {:?}", game_entity);
}

/// Receive [`TilePressed`] events and apply legal moves to the game.
/// Clicks on occupied cells and clicks after the game is finished
/// are silently ignored.
pub fn apply_move(
    mut game: Query<&mut LocalGame>,
    board: Query<&GameLink, With<Board>>,
    mut tile_pressed: EventReader<TilePressed>,
    mut move_applied: EventWriter<MoveApplied>,
    mut state_updated: EventWriter<StateUpdated>,
) {
    for event in tile_pressed.read() {
        let Ok(game_link) = board.get(event.board()) else {
            continue;
        };
        let Ok(mut game) = game.get_mut(game_link.get()) else {
            continue;
        };
        if game.is_finished() || game.board()[event.pos()].is_some() {
            debug!("ignoring press on tile {}", event.pos());
            continue;
        }
        let Some(player) = game.current_player() else {
            continue;
        };
        match game.make_move(event.pos()) {
            Ok(state) => {
                move_applied.send(MoveApplied::new(game_link.get(), player, event.pos()));
                state_updated.send(StateUpdated::new(game_link.get(), state));
            }
            Err(err) => warn!("move {} failed: {}", event.pos(), err),
        }
    }
}

/// Receive [`StateUpdated`] event and send [`PlayerWon`] or [`Draw`]
/// depending on a new state.
pub fn handle_state_updated(
    mut state_updated: EventReader<StateUpdated>,
    mut player_won: EventWriter<PlayerWon>,
    mut draw: EventWriter<Draw>,
) {
    for event in state_updated.read() {
        match event.state() {
            GameState::Turn(next_player) => {
                debug!("game {:?}: turn of {}", event.game(), next_player);
            }
            GameState::Finished(FinishedState::Win(winner)) => {
                debug!("game {:?}: win of {}", event.game(), winner);
                player_won.send(PlayerWon::new(event.game(), winner));
            }
            GameState::Finished(FinishedState::Draw) => {
                debug!("game {:?}: draw", event.game());
                draw.send(Draw::new(event.game()));
            }
        }
    }
}

/// Receive [`GameRestart`] event, throw away the current session together
/// with every entity linked to it and spawn a fresh one.
/// Stale boards, marks and overlays must not survive a restart.
pub fn handle_restart(
    mut commands: Commands,
    game: Query<Entity, With<LocalGame>>,
    linked: Query<(Entity, &GameLink)>,
    mut restart: EventReader<GameRestart>,
    settings: Res<Settings>,
) {
    if restart.is_empty() {
        return;
    }
    restart.clear();
    for game_entity in game.iter() {
        linked
            .iter()
            .filter(|(_, link)| link.get() == game_entity)
            .for_each(|(entity, _)| commands.entity(entity).despawn_recursive());
        commands.entity(game_entity).despawn_recursive();
    }
    let game_entity = commands
        .spawn(LocalGame::from(core::TicTacToe::new(
            settings.board_dimension(),
        )))
        .id();
    debug!("game restarted: {:?}", game_entity);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Mark;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_event::<TilePressed>();
        app.add_event::<MoveApplied>();
        app.add_event::<StateUpdated>();
        app.add_systems(Update, apply_move);
        app
    }

    fn spawn_game(app: &mut App, game: core::TicTacToe) -> (Entity, Entity) {
        let game_entity = app.world_mut().spawn(LocalGame::from(game)).id();
        let board_entity = app
            .world_mut()
            .spawn((Board, GameLink::new(game_entity)))
            .id();
        (game_entity, board_entity)
    }

    fn press_tile(app: &mut App, board: Entity, pos: (usize, usize)) {
        app.world_mut()
            .resource_mut::<Events<TilePressed>>()
            .send(TilePressed::new(board, pos.into()));
        app.update();
    }

    #[test]
    fn move_is_applied_on_tile_press() {
        let mut app = setup_app();
        let (game_entity, board_entity) = spawn_game(&mut app, core::TicTacToe::default());

        press_tile(&mut app, board_entity, (0, 0));

        let game = app.world().get::<LocalGame>(game_entity).unwrap();
        assert_eq!(*game.board()[(0, 0).into()], Some(Mark::X));
        assert_eq!(game.current_player(), Some(Mark::O));
        assert_eq!(
            app.world().resource::<Events<MoveApplied>>().len(),
            1
        );
    }

    #[test]
    fn press_on_occupied_tile_is_ignored() {
        let mut app = setup_app();
        let (game_entity, board_entity) = spawn_game(&mut app, core::TicTacToe::default());

        press_tile(&mut app, board_entity, (2, 2));
        press_tile(&mut app, board_entity, (2, 2));

        // exactly one mark placed, the player toggled exactly once
        let game = app.world().get::<LocalGame>(game_entity).unwrap();
        assert_eq!(*game.board()[(2, 2).into()], Some(Mark::X));
        assert_eq!(game.current_player(), Some(Mark::O));
        let occupied = game
            .board()
            .all_indexed()
            .filter(|(_, cell)| cell.is_some())
            .count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn press_after_finish_is_ignored() {
        let mut app = setup_app();
        let mut game = core::TicTacToe::default();
        for pos in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            game.make_move(pos.into()).unwrap();
        }
        assert!(game.is_finished());
        let (game_entity, board_entity) = spawn_game(&mut app, game.clone());

        press_tile(&mut app, board_entity, (2, 2));

        let unchanged = app.world().get::<LocalGame>(game_entity).unwrap();
        assert_eq!(**unchanged, game);
        assert_eq!(app.world().resource::<Events<MoveApplied>>().len(), 0);
    }

    #[test]
    fn restart_replaces_session() {
        let mut app = App::new();
        app.add_event::<GameRestart>();
        app.insert_resource(Settings::default());
        app.add_systems(Update, handle_restart);

        let mut game = core::TicTacToe::default();
        game.make_move((0, 0).into()).unwrap();
        let game_entity = app.world_mut().spawn(LocalGame::from(game)).id();
        let board_entity = app
            .world_mut()
            .spawn((Board, GameLink::new(game_entity)))
            .id();

        app.world_mut()
            .resource_mut::<Events<GameRestart>>()
            .send(GameRestart);
        app.update();

        // old entities are gone and a fresh session is spawned
        assert!(app.world().get_entity(game_entity).is_err());
        assert!(app.world().get_entity(board_entity).is_err());
        let mut query = app.world_mut().query::<&LocalGame>();
        let games: Vec<_> = query.iter(app.world()).collect();
        assert_eq!(games.len(), 1);
        assert_eq!(**games[0], core::TicTacToe::default());
    }
}
