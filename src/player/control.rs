//! Player input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`player_intent_clear_system`] — resets `PlayerIntent` and `ExternalForce`.
//! 2. [`keyboard_to_intent_system`] — translates thrust/rotation keys into intent.
//! 3. [`apply_player_intent_system`] — converts intent into force/torque and
//!    clamps the ship's linear speed.
//!
//! The intent abstraction makes the movement logic testable: tests populate
//! the resource directly and run only the apply step.

use super::state::Player;
use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Aggregated movement intent for the current frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Forward thrust multiplier. `1.0` applies full `thrust_force`.
    pub thrust: f32,
    /// Rotation direction: `+1.0` = counter-clockwise, `-1.0` = clockwise.
    pub rotate: f32,
}

/// Clear `ExternalForce` and `PlayerIntent` at the start of every frame.
///
/// Must run before any system that writes intent or accumulates forces.
pub fn player_intent_clear_system(
    mut q: Query<&mut ExternalForce, With<Player>>,
    mut intent: ResMut<PlayerIntent>,
) {
    if let Ok(mut force) = q.single_mut() {
        force.force = Vec2::ZERO;
        force.torque = 0.0;
    }
    *intent = PlayerIntent::default();
}

/// Translate keyboard state into [`PlayerIntent`].
///
/// - **W / ↑** → thrust
/// - **A / ←** → rotate counter-clockwise
/// - **D / →** → rotate clockwise
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        intent.thrust = 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        intent.rotate = 1.0;
    } else if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        intent.rotate = -1.0;
    }
}

/// Apply [`PlayerIntent`] as physics force/torque and enforce the speed cap.
///
/// Thrust pushes along the ship's local +Y (nose direction). The linear
/// velocity is clamped to `max_speed` every frame regardless of intent, so
/// sustained thrust can never exceed it.
pub fn apply_player_intent_system(
    intent: Res<PlayerIntent>,
    mut q: Query<(&Transform, &mut ExternalForce, &mut Velocity), With<Player>>,
    config: Res<GameConfig>,
) {
    let Ok((transform, mut force, mut velocity)) = q.single_mut() else {
        return;
    };

    if intent.thrust > 0.0 {
        let forward = transform.rotation.mul_vec3(Vec3::Y).truncate();
        force.force = forward * (intent.thrust * config.thrust_force);
    }
    if intent.rotate != 0.0 {
        force.torque = intent.rotate * config.rotate_torque;
    }

    velocity.linvel = velocity.linvel.clamp_length_max(config.max_speed);
}
