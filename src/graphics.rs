use bevy::prelude::*;

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d at default scale covers the whole play field.
    commands.spawn(Camera2d);
}
