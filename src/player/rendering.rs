//! Ship and bullet rendering, plus the invulnerability blink.
//!
//! Everything is drawn with gizmos as wireframes; the blink works by
//! flipping the ship's [`Visibility`], which the gizmo systems honour.

use super::state::{blink_visible, Immortal, Player};
use crate::config::GameConfig;
use bevy::prelude::*;

use super::state::Bullet;

/// Tick the [`Immortal`] window and drive the cosmetic blink.
///
/// Visibility is a pure function of elapsed time — hidden for one
/// half-period, visible for the next — so there is no per-toggle state to
/// get out of sync. When the window elapses the component is removed and
/// the ship is forced visible.
pub fn immortal_blink_system(
    mut commands: Commands,
    mut q: Query<(Entity, &mut Immortal, &mut Visibility), With<Player>>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let Ok((entity, mut immortal, mut visibility)) = q.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    immortal.remaining -= dt;
    immortal.elapsed += dt;

    if immortal.remaining <= 0.0 {
        commands.entity(entity).remove::<Immortal>();
        *visibility = Visibility::Visible;
        return;
    }

    *visibility = if blink_visible(immortal.elapsed, config.blink_period) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

/// Draw the ship as a wireframe triangle pointing along its local +Y.
///
/// Skipped while the blink has the ship hidden.
pub fn ship_gizmo_system(
    mut gizmos: Gizmos,
    q_player: Query<(&Transform, &Visibility), With<Player>>,
) {
    let Ok((transform, visibility)) = q_player.single() else {
        return;
    };
    if *visibility == Visibility::Hidden {
        return;
    }

    let pos = transform.translation.truncate();
    let rot = transform.rotation;
    let local = [
        Vec2::new(0.0, 14.0),
        Vec2::new(-9.0, -10.0),
        Vec2::new(9.0, -10.0),
    ];
    let world: Vec<Vec2> = local
        .iter()
        .map(|v| pos + rot.mul_vec3(v.extend(0.0)).truncate())
        .collect();
    for i in 0..world.len() {
        gizmos.line_2d(
            world[i],
            world[(i + 1) % world.len()],
            Color::srgb(0.85, 0.95, 1.0),
        );
    }
}

/// Draw each bullet as a small circle.
pub fn bullet_gizmo_system(
    mut gizmos: Gizmos,
    q_bullets: Query<&Transform, With<Bullet>>,
    config: Res<GameConfig>,
) {
    for transform in q_bullets.iter() {
        gizmos.circle_2d(
            transform.translation.truncate(),
            config.bullet_collider_radius,
            Color::srgb(1.0, 0.95, 0.6),
        );
    }
}
