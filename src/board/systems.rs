use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{Board, Border, Tile, WinLine};
use super::{
    TilePressed, BOARD_COLOR, BOARD_WINDOW_RATIO, BORDER_COLOR, BORDER_WIDTH, MARK_COLOR,
    MARK_FONT_RATIO, WIN_LINE_COLOR, WIN_LINE_WIDTH,
};
use crate::core::GridIndex;
use crate::game::{GameLink, LocalGame, MoveApplied, PlayerWon};

/// Returns center coordinates for a board tile with given `pos`.
fn calculate_tile_center(
    board_size: Vec2,
    tile_size: Vec2,
    dimension: usize,
    pos: GridIndex,
) -> Vec2 {
    let tile_x = (tile_size.x + BORDER_WIDTH) * pos.col() as f32 + tile_size.x / 2.0
        - board_size.x / 2.0;
    let tile_y = (tile_size.y + BORDER_WIDTH) * (dimension - 1 - pos.row()) as f32
        + tile_size.y / 2.0
        - board_size.y / 2.0;
    Vec2::new(tile_x, tile_y)
}

/// Returns tile size for a given board size.
fn calculate_tile_size(board_size: Vec2, dimension: usize) -> Vec2 {
    let n = dimension as f32;
    let tile_width = (board_size.x - BORDER_WIDTH * (n - 1.0)) / n;
    let tile_height = (board_size.y - BORDER_WIDTH * (n - 1.0)) / n;
    Vec2::new(tile_width, tile_height)
}

/// Spawn board, tile and border sprites for a newly created game.
pub fn create(
    mut commands: Commands,
    window: Query<&Window, With<PrimaryWindow>>,
    game: Query<(Entity, &LocalGame), Added<LocalGame>>,
) {
    let Ok(window) = window.get_single() else {
        return;
    };
    for (game_entity, game) in game.iter() {
        let dimension = game.size();
        let board_size = Vec2::splat(window.width().min(window.height()) * BOARD_WINDOW_RATIO);
        let tile_size = calculate_tile_size(board_size, dimension);
        debug!(
            "create board for game {:?}, size: {}, tile size: {}",
            game_entity, board_size, tile_size,
        );
        commands
            .spawn((
                Sprite::from_color(BOARD_COLOR, board_size),
                Transform::from_translation(Vec3::ZERO),
                Board,
                GameLink::new(game_entity),
            ))
            .with_children(|builder| {
                for (pos, _) in game.board().all_indexed() {
                    let translation =
                        calculate_tile_center(board_size, tile_size, dimension, pos).extend(1.0);
                    builder.spawn((
                        Sprite::from_color(Color::NONE, tile_size),
                        Transform::from_translation(translation),
                        Tile::from(pos),
                    ));
                }
                // draw borders between tiles
                for i in 0..dimension.saturating_sub(1) {
                    let offset = tile_size.x * (i + 1) as f32
                        + BORDER_WIDTH * i as f32
                        + BORDER_WIDTH / 2.0
                        - board_size.x / 2.0;
                    builder.spawn((
                        Sprite::from_color(BORDER_COLOR, Vec2::new(BORDER_WIDTH, board_size.y)),
                        Transform::from_translation(Vec3::new(offset, 0.0, 1.0)),
                        Border,
                    ));
                    builder.spawn((
                        Sprite::from_color(BORDER_COLOR, Vec2::new(board_size.x, BORDER_WIDTH)),
                        Transform::from_translation(Vec3::new(0.0, offset, 1.0)),
                        Border,
                    ));
                }
            });
    }
}

/// Convert mouse presses into [`TilePressed`] events by mapping the cursor
/// position into world coordinates and hit testing tile sprites.
pub fn handle_mouse_input(
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    tiles: Query<(&GlobalTransform, &Sprite, &Tile, &Parent)>,
    mut button_evr: EventReader<MouseButtonInput>,
    mut pressed: EventWriter<TilePressed>,
) {
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    let Ok((camera, camera_transform)) = camera.get_single() else {
        error!("failed to get single camera");
        return;
    };
    for event in button_evr.read() {
        if !event.state.is_pressed() {
            continue;
        }
        let Some(world_position) = window
            .cursor_position()
            .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok())
            .map(|ray| ray.origin.truncate())
        else {
            continue;
        };
        let tile = tiles.iter().find(|(gt, sprite, _, _)| {
            let Some(size) = sprite.custom_size else {
                return false;
            };
            let bounds = Rect::from_center_size(gt.translation().truncate(), size);
            bounds.contains(world_position)
        });
        if let Some((_, _, &tile, parent)) = tile {
            pressed.send(TilePressed::new(parent.get(), tile.into()));
        }
    }
}

/// Receive [`MoveApplied`] event and render the player's mark
/// onto the pressed tile.
pub fn set_tile_mark(
    mut commands: Commands,
    board: Query<(Entity, &GameLink), With<Board>>,
    tiles: Query<(Entity, &Sprite, &Tile, &Parent)>,
    mut move_applied: EventReader<MoveApplied>,
) {
    for event in move_applied.read() {
        let Some((board_entity, _)) = board.iter().find(|(_, link)| link.get() == event.game())
        else {
            continue;
        };
        let Some((tile_entity, sprite, ..)) = tiles.iter().find(|(_, _, &tile, parent)| {
            parent.get() == board_entity && GridIndex::from(tile) == event.pos()
        }) else {
            continue;
        };
        let Some(tile_size) = sprite.custom_size else {
            continue;
        };
        let font_size = tile_size.min_element() * MARK_FONT_RATIO;
        commands.entity(tile_entity).with_child((
            Text2d::new(event.player().to_string()),
            TextFont::from_font_size(font_size),
            TextColor(MARK_COLOR),
            Transform::from_translation(Vec3::new(0.0, 0.0, 1.0)),
        ));
    }
}

/// Receive [`PlayerWon`] event and stretch a line sprite over
/// the winning triple.
pub fn create_win_line(
    mut commands: Commands,
    game: Query<&LocalGame>,
    board: Query<(Entity, &Sprite, &GameLink), With<Board>>,
    mut player_won: EventReader<PlayerWon>,
) {
    for event in player_won.read() {
        let Ok(game) = game.get(event.game()) else {
            continue;
        };
        let Some((board_entity, sprite, _)) =
            board.iter().find(|(.., link)| link.get() == event.game())
        else {
            continue;
        };
        let Some(board_size) = sprite.custom_size else {
            error!("unable to get board size from sprite");
            continue;
        };
        let Some(line) = game.winning_line() else {
            continue;
        };
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            continue;
        };
        let dimension = game.size();
        let tile_size = calculate_tile_size(board_size, dimension);
        let from_center = calculate_tile_center(board_size, tile_size, dimension, first);
        let to_center = calculate_tile_center(board_size, tile_size, dimension, last);
        let center = (from_center + to_center) / 2.0;
        let length = from_center.distance(to_center) + tile_size.min_element() * 0.5;
        let line_vector = (to_center - from_center).normalize();
        let mut transform = Transform::from_translation(center.extend(2.0));
        transform.rotation = Quat::from_rotation_arc(Vec3::Y, line_vector.extend(0.0));
        debug!("create win line from {} to {}", first, last);
        commands.entity(board_entity).with_child((
            Sprite::from_color(WIN_LINE_COLOR, Vec2::new(WIN_LINE_WIDTH, length)),
            transform,
            WinLine,
        ));
    }
}
