//! Asteroid wireframe rendering.
//!
//! Every asteroid stores its outline polygon in a [`Vertices`] component;
//! this layer draws it as a closed gizmo polyline each frame. Gizmos keep
//! the whole visual layer immediate-mode — no mesh assets to manage when
//! rocks split and despawn many times per second.

use crate::asteroid::{Asteroid, Vertices};
use bevy::prelude::*;

/// Draw each asteroid's outline as a closed white-grey polyline.
pub fn asteroid_gizmo_system(
    mut gizmos: Gizmos,
    q_asteroids: Query<(&Transform, &Vertices), With<Asteroid>>,
) {
    for (transform, vertices) in q_asteroids.iter() {
        let pos = transform.translation.truncate();
        let rot = transform.rotation;
        let world: Vec<Vec2> = vertices
            .0
            .iter()
            .map(|v| pos + rot.mul_vec3(v.extend(0.0)).truncate())
            .collect();
        for i in 0..world.len() {
            gizmos.line_2d(
                world[i],
                world[(i + 1) % world.len()],
                Color::srgb(0.78, 0.78, 0.82),
            );
        }
    }
}
