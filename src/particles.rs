//! Explosion particle effects.
//!
//! Particles are lightweight ECS entities with a [`Particle`] component
//! holding velocity, age, and colour. A two-system pipeline handles them:
//!
//! | System | Schedule | Purpose |
//! |--------|----------|---------|
//! | `attach_particle_mesh_system` | Update | Attach `Mesh2d` to freshly-spawned particles |
//! | `particle_update_system` | Update | Move, fade, and despawn expired particles |
//!
//! A single shared circle mesh ([`ParticleMesh`]) is created at startup to
//! avoid per-particle mesh allocation; each particle gets its own
//! `ColorMaterial` so its alpha can fade individually.

use bevy::prelude::*;
use rand::Rng;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Shared circle mesh used by all particle entities (created once at startup).
#[derive(Resource)]
pub struct ParticleMesh(pub Handle<Mesh>);

// ── Component ─────────────────────────────────────────────────────────────────

/// Short-lived visual particle entity.
#[derive(Component)]
pub struct Particle {
    /// World-space velocity (pixels/s).
    pub velocity: Vec2,
    /// Time alive so far (s).
    pub age: f32,
    /// Total lifetime (s); despawned when `age >= lifetime`.
    pub lifetime: f32,
    /// Base colour (sRGB channels, 0–1).
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// This particle's unique material, written by the attach system.
    pub material: Option<Handle<ColorMaterial>>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_particle_mesh).add_systems(
            Update,
            (attach_particle_mesh_system, particle_update_system).chain(),
        );
    }
}

/// Create the shared circle mesh and store it as a [`ParticleMesh`] resource.
fn init_particle_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(Circle::new(2.0));
    commands.insert_resource(ParticleMesh(handle));
}

// ── Update systems ────────────────────────────────────────────────────────────

/// Attach `Mesh2d` + `MeshMaterial2d` to every newly-spawned [`Particle`].
///
/// Uses [`Added<Particle>`] so it only touches particles that appeared since
/// the last frame.
pub fn attach_particle_mesh_system(
    mut commands: Commands,
    particle_mesh: Res<ParticleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &mut Particle), Added<Particle>>,
) {
    for (entity, mut particle) in query.iter_mut() {
        let mat_handle = materials.add(ColorMaterial::from_color(Color::srgba(
            particle.r, particle.g, particle.b, 1.0,
        )));
        particle.material = Some(mat_handle.clone());
        commands
            .entity(entity)
            .insert((Mesh2d(particle_mesh.0.clone()), MeshMaterial2d(mat_handle)));
    }
}

/// Advance all particles: translate by velocity, fade alpha quadratically,
/// and despawn any whose age has exceeded their lifetime.
pub fn particle_update_system(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &mut Transform, &mut Particle)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut particle) in query.iter_mut() {
        particle.age += dt;

        if particle.age >= particle.lifetime {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation.x += particle.velocity.x * dt;
        transform.translation.y += particle.velocity.y * dt;

        // Quadratic ease-out alpha: bright at birth, rapid fade at end.
        let t = particle.age / particle.lifetime;
        let alpha = (1.0 - t).powi(2);

        if let Some(ref handle) = particle.material {
            if let Some(mat) = materials.get_mut(handle) {
                mat.color = Color::srgba(particle.r, particle.g, particle.b, alpha);
            }
        }
    }
}

// ── Public spawn helper ───────────────────────────────────────────────────────

/// Spawn an explosion burst where an asteroid died.
///
/// Particle count and spread scale with the destroyed tier so a tier-3 rock
/// pops visibly harder than a pebble. `base_vel` is the dead rock's drift,
/// blended in so debris carries its momentum.
pub fn spawn_explosion_particles(commands: &mut Commands, pos: Vec2, base_vel: Vec2, tier: u32) {
    let mut rng = rand::thread_rng();
    let count = 6 + tier * 4;

    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(40.0..140.0) * (1.0 + tier as f32 * 0.3);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed + base_vel * 0.4;

        // Warm grey-orange debris with slight variation.
        let r = rng.gen_range(0.75_f32..0.95_f32);
        let g = rng.gen_range(0.55_f32..0.75_f32);
        let b = rng.gen_range(0.35_f32..0.55_f32);

        let lifetime = rng.gen_range(0.25_f32..0.55_f32);
        let offset = Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));

        commands.spawn((
            Particle {
                velocity,
                age: 0.0,
                lifetime,
                r,
                g,
                b,
                material: None,
            },
            Transform::from_translation((pos + offset).extend(0.9)),
            Visibility::default(),
        ));
    }
}
