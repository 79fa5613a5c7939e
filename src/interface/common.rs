use bevy::prelude::*;

pub const MESSAGE_FONT_SIZE: f32 = 32.0;
pub const BUTTON_FONT_SIZE: f32 = 30.0;
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

pub const OVERLAY_BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);
pub const PRIMARY_COLOR: Color = Color::srgb(0.29, 0.40, 0.29);
pub const PRIMARY_HOVERED_COLOR: Color = Color::srgb(0.36, 0.48, 0.36);
pub const PRIMARY_PRESSED_COLOR: Color = Color::srgb(0.22, 0.32, 0.22);
pub const SECONDARY_COLOR: Color = Color::srgb(0.88, 1.0, 0.88);

// Styles

pub fn overlay_node() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        height: Val::Percent(100.0),
        width: Val::Percent(100.0),
        ..default()
    }
}

pub fn button_node() -> Node {
    Node {
        width: Val::Px(BUTTON_WIDTH),
        height: Val::Px(BUTTON_HEIGHT),
        margin: UiRect::all(Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn message_text_font() -> TextFont {
    TextFont::from_font_size(MESSAGE_FONT_SIZE)
}

pub fn button_text_font() -> TextFont {
    TextFont::from_font_size(BUTTON_FONT_SIZE)
}
