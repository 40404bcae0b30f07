use asterfield::audio::GameAudio;
use asterfield::config::GameConfig;
use asterfield::player::{FireCooldown, PlayerIntent};
use asterfield::{asteroid, audio, config, graphics, hud, particles, player, rendering, spawner};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

/// Configure Rapier physics: space has no gravity.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Asterfield".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_game_config overwrites from assets/game.toml
        // (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        // pixels_per_meter(1.0) keeps world units identical to pixels, so the
        // force/torque constants in constants.rs mean what they say.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        .add_plugins(particles::ParticlesPlugin)
        .insert_resource(FireCooldown::default())
        .insert_resource(PlayerIntent::default())
        .insert_resource(GameAudio::default())
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
                hud::setup_hud
                    .after(graphics::setup_camera)
                    .after(config::load_game_config),
                audio::load_game_audio,
                spawner::spawn_opening_wave.after(config::load_game_config),
                player::spawn_player.after(config::load_game_config),
                setup_physics_config,
            ),
        )
        .add_systems(
            Update,
            (
                // Input pipeline: clear, gather, apply — strictly ordered.
                (
                    player::player_intent_clear_system,
                    player::keyboard_to_intent_system,
                    player::apply_player_intent_system,
                )
                    .chain(),
                player::bullet_fire_system,
                player::despawn_old_bullets_system,
                asteroid::bullet_asteroid_hit_system,
                player::player_asteroid_collision_system,
                player::player_respawn_system,
                spawner::field_respawn_system,
                spawner::timed_spawn_system,
                player::immortal_blink_system,
            ),
        )
        .add_systems(
            Update,
            (
                rendering::asteroid_gizmo_system,
                player::ship_gizmo_system,
                player::bullet_gizmo_system,
                hud::hud_score_display_system,
                hud::hud_lives_display_system,
            ),
        )
        .run();
}
