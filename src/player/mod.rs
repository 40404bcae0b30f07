//! Player module: ship entity, input handling, combat, and rendering.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `Immortal`, `Bullet`) and resources (`PlayerScore`, `PlayerLives`, `FireCooldown`) |
//! | [`control`] | Input systems: thrust, rotation, speed clamp |
//! | [`combat`] | Bullet firing, fatal asteroid collisions, respawn cycle |
//! | [`rendering`] | Ship/bullet wireframes and the invulnerability blink |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::player::*` imports without knowing the layout.

pub mod combat;
pub mod control;
pub mod rendering;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{
    bullet_fire_system, despawn_old_bullets_system, player_asteroid_collision_system,
    player_respawn_system,
};
pub use control::{
    apply_player_intent_system, keyboard_to_intent_system, player_intent_clear_system,
    PlayerIntent,
};
pub use rendering::{bullet_gizmo_system, immortal_blink_system, ship_gizmo_system};
pub use state::{
    blink_visible, complete_respawn, Bullet, FireCooldown, Immortal, Player, PlayerLives,
    PlayerScore,
};

// ── Ship spawn ────────────────────────────────────────────────────────────────

use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Spawn the player's ship at the world origin with a fresh invulnerability
/// window.
///
/// The ship uses a ball collider rather than a triangle collider — simpler
/// physics, visually indistinguishable at the wireframe's size.
///
/// Collision groups: the ship is `GROUP_2` and collides with `GROUP_1`
/// (asteroids) only; bullets (`GROUP_3`) pass through it.
pub fn spawn_player_ship(commands: &mut Commands, config: &GameConfig) -> Entity {
    commands
        .spawn((
            Player,
            Immortal::new(config.immortal_duration),
            RigidBody::Dynamic,
            Collider::ball(config.player_collider_radius),
            Velocity::zero(),
            ExternalForce::default(),
            CollisionGroups::new(Group::GROUP_2, Group::GROUP_1),
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(Vec3::ZERO),
            Visibility::default(),
        ))
        .id()
}

/// Startup system: create the session resources and the initial ship.
///
/// Must run after [`crate::config::load_game_config`] so the configured
/// defaults (lives, score, invulnerability window) are in effect.
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(PlayerScore {
        points: config.default_score,
    });
    commands.insert_resource(PlayerLives::from_config(&config));
    spawn_player_ship(&mut commands, &config);
    info!("Player ship spawned at origin");
}
