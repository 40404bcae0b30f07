//! Headless tests for the player lifecycle.
//!
//! The collision tests use [`MinimalPlugins`] — no window, no rendering, no
//! physics step — and inject `CollisionEvent` messages by hand, so the
//! collision system's state changes can be asserted deterministically.
//!
//! Covered scenarios:
//! 1. A hit during the invulnerability window changes nothing.
//! 2. A hit on a vulnerable ship consumes a life, zeroes momentum, removes
//!    the ship, and schedules the respawn.
//! 3. Collisions with non-asteroid entities are ignored.
//! 4. Three fatal hits exhaust all lives; the respawn after the last one
//!    resets score and lives to the session defaults.

use asterfield::asteroid::{Asteroid, SizeTier};
use asterfield::audio::GameAudio;
use asterfield::config::GameConfig;
use asterfield::player::{
    complete_respawn, player_asteroid_collision_system, Immortal, Player, PlayerLives, PlayerScore,
};
use bevy::prelude::*;
use bevy_rapier2d::prelude::{CollisionEvent, Velocity};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a headless app with just the collision system and its resources.
fn collision_app() -> App {
    let config = GameConfig::default();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_message::<CollisionEvent>();
    app.insert_resource(PlayerLives::from_config(&config));
    app.insert_resource(GameAudio::default());
    app.insert_resource(config);
    app.add_systems(Update, player_asteroid_collision_system);
    app
}

/// Spawn a ship with some momentum; `immortal` attaches the grace window.
fn spawn_ship(app: &mut App, immortal: bool) -> Entity {
    let mut entity = app.world_mut().spawn((
        Player,
        Velocity {
            linvel: Vec2::new(40.0, 0.0),
            angvel: 1.0,
        },
        Transform::default(),
    ));
    if immortal {
        entity.insert(Immortal::new(3.0));
    }
    entity.id()
}

fn spawn_rock(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Asteroid, SizeTier(3), Transform::default()))
        .id()
}

fn send_started(app: &mut App, a: Entity, b: Entity) {
    app.world_mut().write_message(CollisionEvent::Started(
        a,
        b,
        bevy_rapier2d::rapier::geometry::CollisionEventFlags::empty(),
    ));
}

fn ship_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<Player>>()
        .iter(app.world())
        .count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A hit while the invulnerability window is active causes no state change:
/// no life lost, no respawn scheduled, ship and momentum untouched.
#[test]
fn hit_during_immortal_window_changes_nothing() {
    let mut app = collision_app();
    let ship = spawn_ship(&mut app, true);
    let rock = spawn_rock(&mut app);

    send_started(&mut app, ship, rock);
    app.update();

    let lives = app.world().resource::<PlayerLives>();
    assert_eq!(lives.remaining, GameConfig::default().default_lives);
    assert_eq!(lives.respawn_timer, None);
    assert_eq!(ship_count(&mut app), 1, "ship must survive the hit");

    let velocity = app.world().get::<Velocity>(ship).unwrap();
    assert_eq!(velocity.linvel, Vec2::new(40.0, 0.0), "momentum untouched");
}

/// A hit on a vulnerable ship consumes exactly one life, removes the ship,
/// and starts the respawn countdown.
#[test]
fn fatal_hit_consumes_life_and_schedules_respawn() {
    let mut app = collision_app();
    let ship = spawn_ship(&mut app, false);
    let rock = spawn_rock(&mut app);

    send_started(&mut app, ship, rock);
    app.update();

    let config = GameConfig::default();
    let lives = app.world().resource::<PlayerLives>();
    assert_eq!(lives.remaining, config.default_lives - 1);
    assert_eq!(lives.respawn_timer, Some(config.respawn_delay));
    assert_eq!(ship_count(&mut app), 0, "ship entity must be removed");
}

/// Touching something that is not an asteroid never costs a life.
#[test]
fn collision_with_non_asteroid_is_ignored() {
    let mut app = collision_app();
    let ship = spawn_ship(&mut app, false);
    let debris = app.world_mut().spawn(Transform::default()).id();

    send_started(&mut app, ship, debris);
    app.update();

    let lives = app.world().resource::<PlayerLives>();
    assert_eq!(lives.remaining, GameConfig::default().default_lives);
    assert_eq!(ship_count(&mut app), 1);
}

/// Three fatal hits run lives down to zero; the respawn completing at zero
/// performs the full score/lives reset, and earlier respawns do not.
#[test]
fn third_death_respawn_resets_session() {
    let config = GameConfig::default();
    let mut lives = PlayerLives::from_config(&config);
    let mut score = PlayerScore::default();
    score.add(500);

    for expected_remaining in [2, 1] {
        lives.register_fatal_hit(config.respawn_delay);
        assert_eq!(lives.remaining, expected_remaining);
        assert!(!lives.tick_respawn(config.respawn_delay * 0.5));
        assert!(lives.tick_respawn(config.respawn_delay));
        assert!(
            !complete_respawn(&mut lives, &mut score, &config),
            "no reset while lives remain"
        );
        assert_eq!(score.points, 500, "score survives ordinary respawns");
    }

    lives.register_fatal_hit(config.respawn_delay);
    assert_eq!(lives.remaining, 0);
    assert!(lives.tick_respawn(config.respawn_delay + 0.1));
    assert!(
        complete_respawn(&mut lives, &mut score, &config),
        "respawn at zero lives must reset the session"
    );
    assert_eq!(score.points, config.default_score);
    assert_eq!(lives.remaining, config.default_lives);
    assert_eq!(lives.respawn_timer, None);
}
