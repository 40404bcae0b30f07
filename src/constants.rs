//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found and reasoned about in
//! one place. Every constant is mirrored by a field on
//! [`crate::config::GameConfig`], which can override it at runtime from
//! `assets/game.toml`.

// ── World / Units ─────────────────────────────────────────────────────────────

/// Pixels per classic arcade "world unit".
///
/// The gameplay rules reason in small units (a tier-3 rock is 3
/// units across, split children scatter within 0.5 units). On screen we work
/// in pixels, so unit-denominated rules are multiplied by this factor.
pub const UNIT_SCALE: f32 = 16.0;

// ── Spawner ───────────────────────────────────────────────────────────────────

/// Asteroids created by the first wave. Escalation adds one per wave after.
pub const SPAWN_BATCH_START: u32 = 1;

/// Distance from the origin at which new asteroids appear (pixels).
///
/// Every wave member lands exactly on this circle, so waves drift in from
/// the periphery rather than popping up on top of the ship.
pub const SPAWN_DISTANCE: f32 = 420.0;

/// Orientation variance applied to each spawned asteroid (degrees, ±).
pub const SPAWN_HEADING_VARIANCE_DEG: f32 = 15.0;

/// Whether each completed wave grows the next wave by one asteroid.
pub const SPAWN_ESCALATION_ENABLED: bool = true;

/// Delay between the last asteroid dying and the replacement wave (seconds).
pub const FIELD_RESPAWN_DELAY: f32 = 2.0;

/// Whether waves are additionally spawned on a fixed repeating period.
pub const SPAWN_BY_TIME_ENABLED: bool = false;

/// Period of the repeating wave timer when [`SPAWN_BY_TIME_ENABLED`] (seconds).
pub const TIMED_SPAWN_DELAY: f32 = 3.0;

/// Initial drift speed given to freshly spawned asteroids (pixels/s).
pub const ASTEROID_DRIFT_SPEED: f32 = 55.0;

// ── Asteroid ──────────────────────────────────────────────────────────────────

/// Largest (and initial) size tier. Splitting decrements the tier; tier-1
/// asteroids are terminal and never split.
pub const MAX_SIZE_TIER: u32 = 3;

/// Score awarded per destroyed tier, indexed by `tier - 1`.
///
/// Smallest rocks are worth the most, classic-cabinet style. Lookups
/// are clamped: tiers past the end earn the last entry, tier 0 earns nothing.
pub const SCORE_TABLE: [u32; 3] = [100, 50, 20];

/// Base outline radius of a tier-1 asteroid (pixels). A tier-N rock is
/// N times this size.
pub const ASTEROID_BASE_RADIUS: f32 = UNIT_SCALE;

/// Maximum distance a split child lands from its parent (pixels).
///
/// Half a world unit, so children always read as fragments of the parent.
pub const SPLIT_OFFSET_MAX: f32 = 0.5 * UNIT_SCALE;

/// Restitution for asteroid colliders.
pub const ASTEROID_RESTITUTION: f32 = 0.9;

// ── Player: Movement ──────────────────────────────────────────────────────────

/// Forward thrust force applied while the thrust key is held.
pub const THRUST_FORCE: f32 = 60_000.0;

/// Torque applied while a rotation key is held.
pub const ROTATE_TORQUE: f32 = 9_000_000.0;

/// Hard cap on the ship's linear speed (pixels/s), enforced every physics step.
pub const MAX_SPEED: f32 = 240.0;

/// Radius of the ship's ball collider (pixels).
pub const PLAYER_COLLIDER_RADIUS: f32 = 12.0;

// ── Player: Combat ────────────────────────────────────────────────────────────

/// Bullet muzzle speed (pixels/s).
pub const BULLET_SPEED: f32 = 500.0;

/// Seconds before an unspent bullet is removed.
pub const BULLET_LIFETIME: f32 = 10.0;

/// Minimum interval between consecutive shots (seconds).
pub const FIRE_COOLDOWN: f32 = 1.0;

/// Radius of the bullet collider (pixels).
pub const BULLET_COLLIDER_RADIUS: f32 = 3.0;

// ── Player: Lifecycle ─────────────────────────────────────────────────────────

/// Lives at session start and after a full reset.
pub const DEFAULT_LIVES: u32 = 3;

/// Score at session start and after a full reset.
pub const DEFAULT_SCORE: u32 = 0;

/// Invulnerability window granted on every spawn and respawn (seconds).
pub const IMMORTAL_DURATION: f32 = 3.0;

/// Half-period of the invulnerability blink (seconds hidden, then visible).
pub const BLINK_PERIOD: f32 = 0.5;

/// Delay between the ship dying and reappearing at the origin (seconds).
pub const RESPAWN_DELAY: f32 = 3.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Font size used by the score and lives HUD text.
pub const HUD_FONT_SIZE: f32 = 22.0;
