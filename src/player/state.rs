//! Player components and resources.
//!
//! All ECS components and Bevy resources describing player state live here.
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input + movement
//! - [`super::combat`] — shooting, asteroid collisions, respawn
//! - [`super::rendering`] — ship outline + invulnerability blink

use crate::config::GameConfig;
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.
#[derive(Component)]
pub struct Player;

/// Invulnerability window attached to the ship after every spawn/respawn.
///
/// While present, asteroid collisions are ignored and the ship blinks.
/// Removed by [`super::rendering::immortal_blink_system`] when the window
/// elapses, which forces the ship visible again.
#[derive(Component, Debug, Clone, Copy)]
pub struct Immortal {
    /// Seconds of invulnerability remaining; decremented each frame.
    pub remaining: f32,
    /// Seconds elapsed since the window started; drives the blink phase.
    pub elapsed: f32,
}

impl Immortal {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
            elapsed: 0.0,
        }
    }
}

/// Per-bullet state attached to each fired round.
#[derive(Component, Default)]
pub struct Bullet {
    /// Seconds since this bullet was fired.
    pub age: f32,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Enforces a minimum interval between consecutive shots.
#[derive(Resource, Default)]
pub struct FireCooldown {
    /// Remaining cooldown in seconds; decremented each frame, clamped to 0.
    pub timer: f32,
}

/// The player's session score. Monotonically increases until a full reset.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerScore {
    pub points: u32,
}

impl PlayerScore {
    /// Add a non-negative amount. The HUD refreshes on resource change.
    pub fn add(&mut self, amount: u32) {
        self.points += amount;
    }
}

/// Lives remaining and the pending respawn countdown.
///
/// `respawn_timer == Some(t)` is the "awaiting respawn" state: no ship
/// entity exists and `t` seconds remain before it reappears at the origin.
#[derive(Resource, Debug, Clone)]
pub struct PlayerLives {
    /// Lives left. Decremented on each fatal hit; a respawn completing at 0
    /// performs the full score/lives reset.
    pub remaining: u32,
    /// Active respawn countdown (seconds); `None` while the ship is alive.
    pub respawn_timer: Option<f32>,
}

impl PlayerLives {
    /// Session-start state from config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            remaining: config.default_lives,
            respawn_timer: None,
        }
    }

    /// Record a fatal hit: consume one life and start the respawn countdown.
    pub fn register_fatal_hit(&mut self, respawn_delay: f32) {
        self.remaining = self.remaining.saturating_sub(1);
        self.respawn_timer = Some(respawn_delay);
    }

    /// Count down a pending respawn. Returns `true` exactly once, on the
    /// tick where the delay elapses.
    pub fn tick_respawn(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.respawn_timer.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.respawn_timer = None;
            true
        } else {
            false
        }
    }
}

/// Finish a respawn cycle: when the last life was already spent, restore
/// score and lives to their configured defaults. Returns whether the full
/// reset happened.
pub fn complete_respawn(
    lives: &mut PlayerLives,
    score: &mut PlayerScore,
    config: &GameConfig,
) -> bool {
    if lives.remaining == 0 {
        score.points = config.default_score;
        lives.remaining = config.default_lives;
        true
    } else {
        false
    }
}

/// Compute the blink visibility for a given time into the immortal window.
///
/// The ship is hidden for the first half-period, visible for the second,
/// repeating — a pure function of elapsed time, evaluated each tick.
pub fn blink_visible(elapsed: f32, half_period: f32) -> bool {
    if half_period <= 0.0 {
        return true;
    }
    ((elapsed / half_period) as u32) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accumulates() {
        let mut score = PlayerScore::default();
        score.add(100);
        score.add(20);
        assert_eq!(score.points, 120);
    }

    #[test]
    fn respawn_timer_fires_once() {
        let mut lives = PlayerLives::from_config(&GameConfig::default());
        lives.respawn_timer = Some(3.0);
        assert!(!lives.tick_respawn(2.0));
        assert!(lives.tick_respawn(1.5));
        assert!(!lives.tick_respawn(10.0));
        assert_eq!(lives.respawn_timer, None);
    }

    #[test]
    fn no_pending_respawn_never_fires() {
        let mut lives = PlayerLives::from_config(&GameConfig::default());
        assert!(!lives.tick_respawn(100.0));
    }

    #[test]
    fn blink_alternates_every_half_period() {
        // Hidden first, then visible, repeating on a 0.5 s half-period.
        assert!(!blink_visible(0.0, 0.5));
        assert!(!blink_visible(0.49, 0.5));
        assert!(blink_visible(0.5, 0.5));
        assert!(blink_visible(0.99, 0.5));
        assert!(!blink_visible(1.0, 0.5));
        assert!(blink_visible(1.6, 0.5));
    }

    #[test]
    fn blink_degenerate_period_stays_visible() {
        assert!(blink_visible(1.0, 0.0));
    }
}
