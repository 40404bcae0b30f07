//! Game-specific error types.
//!
//! The only failure class this game has is configuration/wiring trouble: a
//! collaborator that cannot be located or a config value outside its sane
//! range. Errors are logged once at startup and the affected feature
//! degrades; nothing retries and nothing aborts a running session.

use std::fmt;

/// Top-level error enum for game setup and validation.
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// A required collaborator (resource, entity, asset) was not found when
    /// a system needed it.
    MissingCollaborator {
        /// Human-readable description of where the lookup occurred.
        context: &'static str,
    },

    /// A configuration value is outside its safe operating range.
    UnsafeConfig {
        /// Name of the config key (for logging).
        name: &'static str,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// The score table is empty, so destroyed asteroids cannot award points.
    EmptyScoreTable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingCollaborator { context } => {
                write!(f, "collaborator not found during '{}'", context)
            }
            GameError::UnsafeConfig { name, safe_range } => {
                write!(f, "config '{}' is outside safe range {}", name, safe_range)
            }
            GameError::EmptyScoreTable => {
                write!(f, "score table is empty; destroys will award 0 points")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Check a loaded [`crate::config::GameConfig`] for values that would break
/// gameplay. Returns every problem found; the caller logs them once and the
/// game continues with whatever behaviour the bad value produces.
pub fn validate_config(config: &crate::config::GameConfig) -> Vec<GameError> {
    let mut errors = Vec::new();
    if config.spawn_distance <= 0.0 {
        errors.push(GameError::UnsafeConfig {
            name: "spawn_distance",
            safe_range: "(0.0, ∞)",
        });
    }
    if config.score_table.is_empty() {
        errors.push(GameError::EmptyScoreTable);
    }
    if config.max_size_tier == 0 {
        errors.push(GameError::UnsafeConfig {
            name: "max_size_tier",
            safe_range: "[1, ∞)",
        });
    }
    if config.blink_period <= 0.0 {
        errors.push(GameError::UnsafeConfig {
            name: "blink_period",
            safe_range: "(0.0, ∞)",
        });
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn default_config_validates_clean() {
        assert!(validate_config(&GameConfig::default()).is_empty());
    }

    #[test]
    fn empty_score_table_is_reported() {
        let mut config = GameConfig::default();
        config.score_table.clear();
        let errors = validate_config(&config);
        assert!(errors.contains(&GameError::EmptyScoreTable));
    }

    #[test]
    fn non_positive_spawn_distance_is_reported() {
        let mut config = GameConfig::default();
        config.spawn_distance = 0.0;
        let errors = validate_config(&config);
        assert!(errors
            .iter()
            .any(|e| matches!(e, GameError::UnsafeConfig { name, .. } if *name == "spawn_distance")));
    }

    #[test]
    fn display_messages_name_the_problem() {
        let err = GameError::MissingCollaborator {
            context: "asteroid spawner lookup",
        };
        assert!(err.to_string().contains("asteroid spawner lookup"));
    }
}
