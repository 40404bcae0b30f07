//! Shooting, fatal asteroid collisions, and the respawn cycle.
//!
//! ## Lifecycle states
//!
//! | State | ECS shape |
//! |-------|-----------|
//! | Active, invulnerable | `Player` entity with [`Immortal`] |
//! | Active, vulnerable   | `Player` entity without [`Immortal`] |
//! | Awaiting respawn     | no `Player` entity, `PlayerLives::respawn_timer` set |
//!
//! A fatal hit zeroes the ship's motion, consumes a life, removes the ship,
//! and starts the respawn countdown. The respawn restores the ship at the
//! origin with a fresh invulnerability window, tells the spawner, and — when
//! the last life was already spent — performs the full score/lives reset.

use super::state::{Bullet, FireCooldown, Immortal, Player, PlayerLives, PlayerScore};
use super::spawn_player_ship;
use crate::asteroid::Asteroid;
use crate::config::GameConfig;
use crate::spawner::SpawnerState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Shooting ──────────────────────────────────────────────────────────────────

/// Fire a bullet from the ship's nose when Space is pressed.
///
/// The cooldown resource enforces the fire-rate limit: it counts down every
/// frame and a shot is only accepted once it reaches zero.
pub fn bullet_fire_system(
    mut commands: Commands,
    q_player: Query<&Transform, With<Player>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut cooldown: ResMut<FireCooldown>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    cooldown.timer = (cooldown.timer - time.delta_secs()).max(0.0);

    let Ok(transform) = q_player.single() else {
        return;
    };

    if !keys.just_pressed(KeyCode::Space) || cooldown.timer > 0.0 {
        return;
    }
    cooldown.timer = config.fire_cooldown;

    let forward = transform.rotation.mul_vec3(Vec3::Y).truncate();
    let spawn_pos = transform.translation.truncate() + forward * 16.0;

    commands.spawn((
        Bullet::default(),
        Transform::from_translation(spawn_pos.extend(0.0)),
        Visibility::default(),
        RigidBody::KinematicVelocityBased,
        Velocity {
            linvel: forward * config.bullet_speed,
            angvel: 0.0,
        },
        Collider::ball(config.bullet_collider_radius),
        // Sensor: raises collision events without transferring momentum, so
        // bullets never shove asteroids around.
        Sensor,
        Ccd { enabled: true },
        CollisionGroups::new(Group::GROUP_3, Group::GROUP_1),
        ActiveCollisionTypes::DYNAMIC_KINEMATIC,
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// Age bullets each frame and despawn the ones past their lifetime.
///
/// Bullets that hit something are despawned by the asteroid hit system;
/// this catches the ones that fly off into nothing.
pub fn despawn_old_bullets_system(
    mut commands: Commands,
    mut q: Query<(Entity, &mut Bullet)>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let dt = time.delta_secs();
    for (entity, mut bullet) in q.iter_mut() {
        bullet.age += dt;
        if bullet.age >= config.bullet_lifetime {
            commands.entity(entity).despawn();
        }
    }
}

// ── Fatal collisions ──────────────────────────────────────────────────────────

/// Detect asteroid–ship collisions and consume a life.
///
/// Hits while the [`Immortal`] window is active cause no state change at
/// all. A fatal hit zeroes linear and angular velocity before the ship is
/// removed, so the respawned ship never inherits stale momentum.
#[allow(clippy::too_many_arguments)]
pub fn player_asteroid_collision_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut q_player: Query<(Entity, &mut Velocity), With<Player>>,
    q_immortal: Query<(), (With<Player>, With<Immortal>)>,
    q_asteroids: Query<(), With<Asteroid>>,
    mut lives: ResMut<PlayerLives>,
    audio: Res<crate::audio::GameAudio>,
    config: Res<GameConfig>,
) {
    let Ok((player_entity, mut velocity)) = q_player.single_mut() else {
        return;
    };

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let other = if e1 == player_entity {
            e2
        } else if e2 == player_entity {
            e1
        } else {
            continue;
        };
        if !q_asteroids.contains(other) {
            continue;
        }

        // Invulnerable: the hit is ignored entirely.
        if !q_immortal.is_empty() {
            return;
        }

        velocity.linvel = Vec2::ZERO;
        velocity.angvel = 0.0;

        lives.register_fatal_hit(config.respawn_delay);
        commands.entity(player_entity).despawn();
        crate::audio::play_death(&mut commands, &audio);

        info!(
            "Ship destroyed. Lives remaining: {}; respawning in {:.1}s",
            lives.remaining, config.respawn_delay
        );
        return;
    }
}

// ── Respawn ───────────────────────────────────────────────────────────────────

/// Count down the respawn timer and restore the ship when it elapses.
///
/// Only ticks while no `Player` entity exists. On completion the ship
/// reappears at the origin with a fresh invulnerability window, the spawner
/// is told the player respawned, and — if the last life was already spent —
/// score and lives are reset to their configured defaults.
pub fn player_respawn_system(
    mut commands: Commands,
    q_player: Query<(), With<Player>>,
    mut lives: ResMut<PlayerLives>,
    mut score: ResMut<PlayerScore>,
    mut spawner: ResMut<SpawnerState>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    if !q_player.is_empty() {
        return;
    }
    if !lives.tick_respawn(time.delta_secs()) {
        return;
    }

    if super::state::complete_respawn(&mut lives, &mut score, &config) {
        info!("Out of lives, session reset to defaults");
    }

    spawn_player_ship(&mut commands, &config);
    spawner.notify_player_respawned();
}
