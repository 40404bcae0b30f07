//! Wave spawner: batch size, escalation, and deferred wave scheduling.
//!
//! [`SpawnerState`] owns the current batch size and two countdowns: a
//! one-shot "field cleared" delay scheduled when the last asteroid dies, and
//! an optional repeating timer for time-based spawning. Both are plain
//! second counters ticked from `Time`, so the scheduling logic is testable
//! without an event loop.
//!
//! Callbacks from the rest of the game arrive as direct method calls:
//! the asteroid hit system calls [`SpawnerState::notify_field_cleared`] and
//! the player respawn system calls [`SpawnerState::notify_player_respawned`].

use crate::asteroid::spawn_asteroid;
use crate::config::GameConfig;
use bevy::prelude::*;
use rand::Rng;

/// Process-wide spawner state. One instance per session.
#[derive(Resource, Debug, Clone)]
pub struct SpawnerState {
    /// Asteroids created per wave. Grows by one after each wave while
    /// escalation is enabled; reset to 0 when the player respawns.
    pub batch_size: u32,
    /// Pending one-shot countdown to the next wave (seconds); `None` when no
    /// wave is scheduled. Set by the field-cleared callback.
    pub field_respawn: Option<f32>,
    /// Repeating countdown for time-based spawning (seconds). Only ticked
    /// when `spawn_by_time_enabled` is set.
    pub timed_spawn: f32,
}

impl SpawnerState {
    /// Build the session-start state from config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            batch_size: config.spawn_batch_start,
            field_respawn: None,
            timed_spawn: config.timed_spawn_delay,
        }
    }

    /// Field-cleared callback: schedule exactly one deferred wave.
    ///
    /// A second notification while a wave is already pending is ignored, so
    /// clearing the field can never stack waves.
    pub fn notify_field_cleared(&mut self, delay: f32) {
        if self.field_respawn.is_none() {
            self.field_respawn = Some(delay);
        }
    }

    /// Player-respawned callback: reset the batch size to zero.
    ///
    /// After this, the next wave spawns nothing and only escalation grows
    /// the count back. Deliberate; see the batch-size note in DESIGN.md.
    pub fn notify_player_respawned(&mut self) {
        self.batch_size = 0;
    }

    /// Count down the pending field-respawn delay. Returns `true` exactly
    /// once, on the tick where the delay elapses.
    pub fn tick_field_respawn(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.field_respawn.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.field_respawn = None;
            true
        } else {
            false
        }
    }

    /// Count down the repeating spawn timer. Returns `true` each time the
    /// period elapses, then re-arms with `period`.
    pub fn tick_timed_spawn(&mut self, dt: f32, period: f32) -> bool {
        self.timed_spawn -= dt;
        if self.timed_spawn <= 0.0 {
            self.timed_spawn = period;
            true
        } else {
            false
        }
    }
}

/// Create one wave of tier-3 asteroids at random points on the spawn circle.
///
/// Each rock gets a uniformly random orientation nudged by a ±15° variance,
/// and drifts roughly inward (toward the origin) with the same variance so
/// waves converge on the play area instead of skimming past it. After the
/// wave, the batch size escalates by one if enabled — including when the
/// wave itself was empty.
pub fn spawn_wave(commands: &mut Commands, state: &mut SpawnerState, config: &GameConfig) {
    let mut rng = rand::thread_rng();
    let variance_max = config.spawn_heading_variance_deg.to_radians();

    for _ in 0..state.batch_size {
        let place_angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let position = Vec2::new(place_angle.cos(), place_angle.sin()) * config.spawn_distance;

        let variance = rng.gen_range(-variance_max..=variance_max);
        let orientation =
            Quat::from_rotation_z(rng.gen_range(0.0..std::f32::consts::TAU) + variance);

        // Inward drift, tilted by the same variance.
        let inward = -position.normalize_or_zero();
        let drift = Vec2::from_angle(variance).rotate(inward) * config.asteroid_drift_speed;

        spawn_asteroid(
            commands,
            position,
            orientation,
            drift,
            config.max_size_tier,
            config,
        );
    }

    if config.spawn_escalation_enabled {
        state.batch_size += 1;
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Startup system: seed the spawner state and spawn the opening wave.
///
/// Must run after [`crate::config::load_game_config`] so the wave uses the
/// final config values.
pub fn spawn_opening_wave(mut commands: Commands, config: Res<GameConfig>) {
    let mut state = SpawnerState::from_config(&config);
    spawn_wave(&mut commands, &mut state, &config);
    info!("Opening wave spawned (next batch: {})", state.batch_size);
    commands.insert_resource(state);
}

/// Tick the pending field-cleared delay and spawn the wave when it elapses.
pub fn field_respawn_system(
    mut commands: Commands,
    mut state: ResMut<SpawnerState>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    if state.tick_field_respawn(time.delta_secs()) {
        spawn_wave(&mut commands, &mut state, &config);
        info!("Field cleared; new wave spawned (next batch: {})", state.batch_size);
    }
}

/// Optional repeating spawn: one wave every `timed_spawn_delay` seconds.
///
/// Inactive unless `spawn_by_time_enabled` is set in the config.
pub fn timed_spawn_system(
    mut commands: Commands,
    mut state: ResMut<SpawnerState>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    if !config.spawn_by_time_enabled {
        return;
    }
    if state.tick_timed_spawn(time.delta_secs(), config.timed_spawn_delay) {
        spawn_wave(&mut commands, &mut state, &config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SpawnerState {
        SpawnerState::from_config(&GameConfig::default())
    }

    // ── Field-cleared scheduling ──────────────────────────────────────────────

    #[test]
    fn field_cleared_schedules_single_deferred_wave() {
        let mut s = state();
        s.notify_field_cleared(2.0);
        assert_eq!(s.field_respawn, Some(2.0));
    }

    #[test]
    fn second_field_cleared_notification_does_not_stack() {
        let mut s = state();
        s.notify_field_cleared(2.0);
        s.tick_field_respawn(0.5);
        s.notify_field_cleared(2.0);
        assert_eq!(
            s.field_respawn,
            Some(1.5),
            "pending delay must not be re-armed by a duplicate notification"
        );
    }

    #[test]
    fn field_respawn_fires_exactly_once() {
        let mut s = state();
        s.notify_field_cleared(1.0);
        assert!(!s.tick_field_respawn(0.6));
        assert!(s.tick_field_respawn(0.6), "delay elapsed, should fire");
        assert!(!s.tick_field_respawn(10.0), "must not fire again");
        assert_eq!(s.field_respawn, None);
    }

    #[test]
    fn no_pending_delay_means_no_fire() {
        let mut s = state();
        assert!(!s.tick_field_respawn(100.0));
    }

    // ── Player-respawn reset ──────────────────────────────────────────────────

    #[test]
    fn player_respawn_zeroes_batch_size() {
        let mut s = state();
        s.batch_size = 7;
        s.notify_player_respawned();
        assert_eq!(s.batch_size, 0);
    }

    // ── Timed spawning ────────────────────────────────────────────────────────

    #[test]
    fn timed_spawn_fires_on_each_period() {
        let mut s = state();
        s.timed_spawn = 3.0;
        assert!(!s.tick_timed_spawn(2.0, 3.0));
        assert!(s.tick_timed_spawn(1.5, 3.0));
        // Re-armed with the full period.
        assert!(!s.tick_timed_spawn(2.0, 3.0));
        assert!(s.tick_timed_spawn(1.5, 3.0));
    }

    #[test]
    fn session_start_uses_configured_batch() {
        let config = GameConfig::default();
        let s = SpawnerState::from_config(&config);
        assert_eq!(s.batch_size, config.spawn_batch_start);
        assert_eq!(s.field_respawn, None);
    }
}
