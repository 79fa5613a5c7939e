mod board;
mod core;
mod game;
mod interface;

use bevy::prelude::*;

use crate::board::BoardPlugin;
use crate::game::GamePlugin;
use crate::interface::InterfacePlugin;

pub const WINDOW_SIZE: f32 = 500.0;

/// Presentation settings that are not part of the rules engine.
#[derive(Debug, Resource)]
pub struct Settings {
    board_dimension: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_dimension: core::DEFAULT_BOARD_SIZE,
        }
    }
}

impl Settings {
    pub fn board_dimension(&self) -> usize {
        self.board_dimension
    }
}

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    App::new()
        .insert_resource(Settings::default())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tic Tac Toe".into(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((GamePlugin, BoardPlugin, InterfacePlugin))
        .add_systems(Startup, init_camera)
        .run();
}
