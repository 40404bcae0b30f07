//! Score and lives HUD.
//!
//! Two absolute-positioned Bevy UI text nodes, spawned once at startup and
//! refreshed only when the backing resource actually changes.
//!
//! | System | Schedule | Purpose |
//! |--------|----------|---------|
//! | `setup_hud` | Startup | Spawn the score and lives text nodes |
//! | `hud_score_display_system` | Update | Refresh score text on change |
//! | `hud_lives_display_system` | Update | Refresh lives text on change |

use crate::config::GameConfig;
use crate::player::{PlayerLives, PlayerScore};
use bevy::prelude::*;

/// Marker for the score HUD node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the lives HUD node.
#[derive(Component)]
pub struct HudLivesDisplay;

/// Spawn the permanent top-left score and lives HUD.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0 + config.hud_font_size + 6.0),
                ..default()
            },
            HudLivesDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Lives: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.65, 0.9, 0.65)),
            ));
        });
}

/// Refresh the score text whenever [`PlayerScore`] changes.
pub fn hud_score_display_system(
    score: Option<Res<PlayerScore>>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    let Some(score) = score else {
        return;
    };
    if !score.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!("Score: {}", score.points));
            }
        }
    }
}

/// Refresh the lives text whenever [`PlayerLives`] changes.
pub fn hud_lives_display_system(
    lives: Option<Res<PlayerLives>>,
    parent_query: Query<&Children, With<HudLivesDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    let Some(lives) = lives else {
        return;
    };
    if !lives.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!("Lives: {}", lives.remaining));
            }
        }
    }
}
