//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read
//! values with `config.spawn_distance`, `config.fire_cooldown`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the authoritative default
//! source used by `GameConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset via `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Spawner ──────────────────────────────────────────────────────────────
    pub spawn_batch_start: u32,
    pub spawn_distance: f32,
    pub spawn_heading_variance_deg: f32,
    pub spawn_escalation_enabled: bool,
    pub field_respawn_delay: f32,
    pub spawn_by_time_enabled: bool,
    pub timed_spawn_delay: f32,
    pub asteroid_drift_speed: f32,

    // ── Asteroid ─────────────────────────────────────────────────────────────
    pub max_size_tier: u32,
    pub score_table: Vec<u32>,
    pub asteroid_base_radius: f32,
    pub split_offset_max: f32,
    pub asteroid_restitution: f32,

    // ── Player: Movement ─────────────────────────────────────────────────────
    pub thrust_force: f32,
    pub rotate_torque: f32,
    pub max_speed: f32,
    pub player_collider_radius: f32,

    // ── Player: Combat ───────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_lifetime: f32,
    pub fire_cooldown: f32,
    pub bullet_collider_radius: f32,

    // ── Player: Lifecycle ────────────────────────────────────────────────────
    pub default_lives: u32,
    pub default_score: u32,
    pub immortal_duration: f32,
    pub blink_period: f32,
    pub respawn_delay: f32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Spawner
            spawn_batch_start: SPAWN_BATCH_START,
            spawn_distance: SPAWN_DISTANCE,
            spawn_heading_variance_deg: SPAWN_HEADING_VARIANCE_DEG,
            spawn_escalation_enabled: SPAWN_ESCALATION_ENABLED,
            field_respawn_delay: FIELD_RESPAWN_DELAY,
            spawn_by_time_enabled: SPAWN_BY_TIME_ENABLED,
            timed_spawn_delay: TIMED_SPAWN_DELAY,
            asteroid_drift_speed: ASTEROID_DRIFT_SPEED,
            // Asteroid
            max_size_tier: MAX_SIZE_TIER,
            score_table: SCORE_TABLE.to_vec(),
            asteroid_base_radius: ASTEROID_BASE_RADIUS,
            split_offset_max: SPLIT_OFFSET_MAX,
            asteroid_restitution: ASTEROID_RESTITUTION,
            // Player: Movement
            thrust_force: THRUST_FORCE,
            rotate_torque: ROTATE_TORQUE,
            max_speed: MAX_SPEED,
            player_collider_radius: PLAYER_COLLIDER_RADIUS,
            // Player: Combat
            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,
            fire_cooldown: FIRE_COOLDOWN,
            bullet_collider_radius: BULLET_COLLIDER_RADIUS,
            // Player: Lifecycle
            default_lives: DEFAULT_LIVES,
            default_score: DEFAULT_SCORE,
            immortal_duration: IMMORTAL_DURATION,
            blink_period: BLINK_PERIOD,
            respawn_delay: RESPAWN_DELAY,
            // HUD
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. A parse error is logged once
/// and the defaults are kept; a missing file is silently ignored (defaults
/// are already in place from `insert_resource`). After loading, the config
/// is sanity-checked once via [`crate::error::validate_config`] — a failed
/// check is logged and the offending feature degrades, it never aborts.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {path}");
            }
            Err(e) => {
                warn!("Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {path} found; using compiled defaults");
        }
    }

    for err in crate::error::validate_config(&config) {
        warn!("config check: {err}");
    }
}
