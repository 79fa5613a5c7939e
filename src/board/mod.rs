mod components;
mod events;
mod systems;

use bevy::prelude::*;

pub use components::{Board, Tile};
pub use events::TilePressed;

use systems::*;

pub const BORDER_WIDTH: f32 = 2.0;
pub const BOARD_WINDOW_RATIO: f32 = 0.7;
pub const MARK_FONT_RATIO: f32 = 0.6;
pub const WIN_LINE_WIDTH: f32 = 6.0;

pub const BOARD_COLOR: Color = Color::srgb(0.88, 1.0, 0.88);
pub const BORDER_COLOR: Color = Color::BLACK;
pub const MARK_COLOR: Color = Color::BLACK;
pub const WIN_LINE_COLOR: Color = Color::srgb(0.29, 0.40, 0.29);

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TilePressed>().add_systems(
            Update,
            (create, handle_mouse_input, set_tile_mark, create_win_line),
        );
    }
}
