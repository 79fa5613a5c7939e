use bevy::prelude::*;

use super::common::{
    button_node, button_text_font, message_text_font, overlay_node, OVERLAY_BACKGROUND_COLOR,
    PRIMARY_COLOR, PRIMARY_HOVERED_COLOR, PRIMARY_PRESSED_COLOR, SECONDARY_COLOR,
};
use super::components::{Overlay, RestartButton};
use crate::game::{Draw, GameLink, GameRestart, PlayerWon};

fn spawn_overlay(commands: &mut Commands, game: Entity, message: String) {
    debug!("show overlay for game {:?}: {}", game, message);
    commands
        .spawn((
            overlay_node(),
            BackgroundColor(OVERLAY_BACKGROUND_COLOR),
            Overlay,
            GameLink::new(game),
        ))
        .with_children(|builder| {
            builder.spawn((
                Text::new(message),
                message_text_font(),
                TextColor(SECONDARY_COLOR),
            ));
            builder
                .spawn((
                    Button,
                    button_node(),
                    BackgroundColor(PRIMARY_COLOR),
                    RestartButton,
                ))
                .with_child((
                    Text::new("Restart"),
                    button_text_font(),
                    TextColor(SECONDARY_COLOR),
                ));
        });
}

/// Show the outcome overlay with a restart control when the game ends.
pub fn create_overlay(
    mut commands: Commands,
    mut player_won: EventReader<PlayerWon>,
    mut draw: EventReader<Draw>,
) {
    for event in player_won.read() {
        let message = format!("Player {} wins!", event.player());
        spawn_overlay(&mut commands, event.game(), message);
    }
    for event in draw.read() {
        spawn_overlay(&mut commands, event.game(), "Draw!".into());
    }
}

/// Send [`GameRestart`] when the restart button is pressed.
pub fn handle_restart_button(
    button: Query<&Interaction, (With<Button>, Changed<Interaction>, With<RestartButton>)>,
    mut restart: EventWriter<GameRestart>,
) {
    for interaction in button.iter() {
        if *interaction == Interaction::Pressed {
            restart.send(GameRestart);
        }
    }
}

/// Update button background on interaction changes for hover feedback.
pub fn update_button_color(
    mut button: Query<(&Interaction, &mut BackgroundColor), (With<Button>, Changed<Interaction>)>,
) {
    for (interaction, mut color) in button.iter_mut() {
        *color = match interaction {
            Interaction::Pressed => PRIMARY_PRESSED_COLOR.into(),
            Interaction::Hovered => PRIMARY_HOVERED_COLOR.into(),
            Interaction::None => PRIMARY_COLOR.into(),
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn overlay_created_on_win_and_draw() {
        let mut app = App::new();
        app.add_event::<PlayerWon>();
        app.add_event::<Draw>();
        app.add_systems(Update, create_overlay);

        let game = app.world_mut().spawn_empty().id();
        app.world_mut()
            .resource_mut::<Events<PlayerWon>>()
            .send(PlayerWon::new(game, Mark::X));
        app.update();

        let mut overlay = app.world_mut().query_filtered::<Entity, With<Overlay>>();
        assert_eq!(overlay.iter(app.world()).count(), 1);
        let mut restart = app
            .world_mut()
            .query_filtered::<Entity, With<RestartButton>>();
        assert_eq!(restart.iter(app.world()).count(), 1);

        app.world_mut()
            .resource_mut::<Events<Draw>>()
            .send(Draw::new(game));
        app.update();

        let mut overlay = app.world_mut().query_filtered::<Entity, With<Overlay>>();
        assert_eq!(overlay.iter(app.world()).count(), 2);
    }

    #[test]
    fn restart_button_press_sends_event() {
        let mut app = App::new();
        app.add_event::<GameRestart>();
        app.add_systems(Update, handle_restart_button);

        let button = app
            .world_mut()
            .spawn((Button, RestartButton, Interaction::None))
            .id();
        app.update();
        assert_eq!(app.world().resource::<Events<GameRestart>>().len(), 0);

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Pressed;
        app.update();
        assert_eq!(app.world().resource::<Events<GameRestart>>().len(), 1);
    }
}
