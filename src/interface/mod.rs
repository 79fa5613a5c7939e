mod common;
mod components;
mod systems;

use bevy::prelude::*;

pub use components::{Overlay, RestartButton};

use systems::*;

pub struct InterfacePlugin;

impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (create_overlay, handle_restart_button, update_button_color),
        );
    }
}
