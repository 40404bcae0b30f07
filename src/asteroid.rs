//! Asteroid entity: size tiers, splitting, and scoring.
//!
//! Every asteroid carries a [`SizeTier`] in `1..=3`. A bullet hit removes the
//! rock and, for tiers above 1, spawns exactly two children one tier smaller
//! scattered around the parent. Tier-1 rocks are terminal; when the last one
//! dies the spawner is told so it can schedule the next wave.
//!
//! ## Destruction rules by tier
//!
//! | Tier | On bullet hit |
//! |------|---------------|
//! | 1    | award score, despawn; notify spawner if it was the last rock |
//! | 2–3  | award score, despawn, spawn two children at tier − 1 |

use crate::config::GameConfig;
use crate::particles::spawn_explosion_particles;
use crate::player::Bullet;
use crate::spawner::SpawnerState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

/// Marker component for any asteroid entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asteroid;

/// Split generation of an asteroid: 3 = largest/original, 1 = smallest.
///
/// Strictly decreases on split; an asteroid that would drop below 1 is
/// removed instead of splitting.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeTier(pub u32);

/// Polygon outline for wireframe rendering (local space, pixels).
#[derive(Component, Debug, Clone)]
pub struct Vertices(pub Vec<Vec2>);

/// Number of distinct rocky outline variants.
pub const VARIANT_COUNT: u32 = 4;

/// Per-vertex radius multipliers for each outline variant.
///
/// Ten vertices per rock, radii hand-picked to look craggy without any
/// concave collider surprises (all factors stay within 0.62–1.0).
const VARIANT_RADII: [[f32; 10]; VARIANT_COUNT as usize] = [
    [1.0, 0.78, 0.92, 0.70, 0.96, 0.80, 1.0, 0.66, 0.88, 0.74],
    [0.84, 1.0, 0.72, 0.90, 0.68, 0.98, 0.76, 0.92, 0.62, 0.86],
    [0.94, 0.70, 1.0, 0.82, 0.74, 0.90, 0.64, 1.0, 0.78, 0.88],
    [0.72, 0.96, 0.80, 1.0, 0.66, 0.84, 0.94, 0.70, 1.0, 0.76],
];

/// Build the local-space outline polygon for a given variant and tier.
///
/// The outline radius scales linearly with the tier, so a tier-3 rock is
/// three times the size of a tier-1 rock.
pub fn asteroid_outline(variant: u32, tier: u32, base_radius: f32) -> Vec<Vec2> {
    let radii = &VARIANT_RADII[(variant % VARIANT_COUNT) as usize];
    let scale = tier as f32 * base_radius;
    radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let angle = std::f32::consts::TAU * i as f32 / radii.len() as f32;
            Vec2::new(angle.cos(), angle.sin()) * (r * scale)
        })
        .collect()
}

/// Clamped score lookup for a destroyed asteroid of the given tier.
///
/// Total over every tier: tier 0 (a rock beyond tracking) awards nothing,
/// tiers past the end of the table award the last entry, and everything in
/// range reads `table[tier - 1]`.
pub fn score_for_tier(tier: u32, table: &[u32]) -> u32 {
    if tier == 0 || table.is_empty() {
        return 0;
    }
    let idx = (tier as usize).min(table.len()) - 1;
    table[idx]
}

/// Draw an independent random offset for one split child.
///
/// Uniform over the disk of radius `max_offset` around the parent centre.
pub fn split_offset<R: Rng>(rng: &mut R, max_offset: f32) -> Vec2 {
    // Rejection sampling over the unit disk, then scaled.
    loop {
        let candidate = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if candidate.length_squared() <= 1.0 {
            return candidate * max_offset;
        }
    }
}

/// Spawn a single asteroid with an explicit orientation and drift velocity.
///
/// Used both by the wave spawner (random orientation) and by the split path
/// (children inherit the parent's orientation). The outline variant is
/// chosen uniformly at random.
pub fn spawn_asteroid(
    commands: &mut Commands,
    position: Vec2,
    orientation: Quat,
    linvel: Vec2,
    tier: u32,
    config: &GameConfig,
) -> Entity {
    let mut rng = rand::thread_rng();
    let variant = rng.gen_range(0..VARIANT_COUNT);
    let vertices = asteroid_outline(variant, tier, config.asteroid_base_radius);

    let collider = Collider::convex_hull(&vertices)
        .unwrap_or_else(|| Collider::ball(tier as f32 * config.asteroid_base_radius));

    commands
        .spawn((
            (
                Transform::from_translation(position.extend(0.1)).with_rotation(orientation),
                GlobalTransform::default(),
                Visibility::default(),
                Asteroid,
                SizeTier(tier),
                Vertices(vertices),
                RigidBody::Dynamic,
                collider,
            ),
            (
                Restitution::coefficient(config.asteroid_restitution),
                Velocity {
                    linvel,
                    angvel: rng.gen_range(-1.2..1.2),
                },
                CollisionGroups::new(
                    Group::GROUP_1,
                    Group::GROUP_1 | Group::GROUP_2 | Group::GROUP_3,
                ),
                ActiveEvents::COLLISION_EVENTS,
                Sleeping::disabled(),
            ),
        ))
        .id()
}

/// Process bullet–asteroid collision events.
///
/// Matches `CollisionEvent::Started` pairs; ignores `Stopped`. Two `HashSet`s
/// ensure each bullet and each asteroid is processed at most once per frame
/// even when Rapier reports cascading contacts.
///
/// Ordering note: score and spawner state are mutated synchronously here;
/// the wave the spawner schedules on field-cleared fires strictly later.
#[allow(clippy::too_many_arguments)]
pub fn bullet_asteroid_hit_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    q_asteroids: Query<(&SizeTier, &Transform, &Velocity), With<Asteroid>>,
    q_bullets: Query<(), With<Bullet>>,
    q_all_asteroids: Query<Entity, With<Asteroid>>,
    mut spawner: ResMut<SpawnerState>,
    mut score: ResMut<crate::player::PlayerScore>,
    audio: Res<crate::audio::GameAudio>,
    config: Res<GameConfig>,
) {
    let mut processed_asteroids: std::collections::HashSet<Entity> = Default::default();
    let mut processed_bullets: std::collections::HashSet<Entity> = Default::default();
    let mut children_spawned = 0u32;

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let (bullet_entity, asteroid_entity) = if q_bullets.contains(e1) && q_asteroids.contains(e2)
        {
            (e1, e2)
        } else if q_bullets.contains(e2) && q_asteroids.contains(e1) {
            (e2, e1)
        } else {
            continue;
        };

        if processed_bullets.contains(&bullet_entity)
            || processed_asteroids.contains(&asteroid_entity)
        {
            continue;
        }

        let Ok((size, transform, velocity)) = q_asteroids.get(asteroid_entity) else {
            continue; // asteroid already despawned this frame
        };

        processed_bullets.insert(bullet_entity);
        processed_asteroids.insert(asteroid_entity);

        let pos = transform.translation.truncate();
        let tier = size.0;
        let mut rng = rand::thread_rng();

        score.add(score_for_tier(tier, &config.score_table));
        spawn_explosion_particles(&mut commands, pos, velocity.linvel, tier);
        crate::audio::play_explosion(&mut commands, &audio);

        commands.entity(bullet_entity).despawn();
        commands.entity(asteroid_entity).despawn();

        if tier <= 1 {
            // Terminal rock. If nothing else survives this frame, hand the
            // baton back to the spawner for the next wave.
            let survivors = q_all_asteroids
                .iter()
                .filter(|e| !processed_asteroids.contains(e))
                .count();
            if survivors == 0 && children_spawned == 0 {
                spawner.notify_field_cleared(config.field_respawn_delay);
            }
        } else {
            // Split into two children one tier down, scattered around the
            // parent and keeping its orientation.
            for _ in 0..2 {
                let offset = split_offset(&mut rng, config.split_offset_max);
                let drift = velocity.linvel
                    + Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
                spawn_asteroid(
                    &mut commands,
                    pos + offset,
                    transform.rotation,
                    drift,
                    tier - 1,
                    &config,
                );
                children_spawned += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ── score_for_tier ────────────────────────────────────────────────────────

    #[test]
    fn score_reads_one_indexed_table() {
        let table = [100, 50, 20];
        assert_eq!(score_for_tier(1, &table), 100);
        assert_eq!(score_for_tier(2, &table), 50);
        assert_eq!(score_for_tier(3, &table), 20);
    }

    #[test]
    fn score_tier_zero_awards_nothing() {
        assert_eq!(score_for_tier(0, &[100, 50, 20]), 0);
    }

    #[test]
    fn score_clamps_to_last_entry_past_table_end() {
        let table = [100, 50, 20];
        for tier in [4, 5, 100, u32::MAX] {
            assert_eq!(
                score_for_tier(tier, &table),
                20,
                "tier {tier} should clamp to the last table entry"
            );
        }
    }

    #[test]
    fn score_is_total_over_every_positive_tier() {
        // Every tier in [1, ∞) must yield a defined score without panicking.
        let table = [100, 50, 20];
        for tier in 1..2000 {
            let _ = score_for_tier(tier, &table);
        }
    }

    #[test]
    fn score_empty_table_awards_nothing() {
        assert_eq!(score_for_tier(3, &[]), 0);
    }

    // ── split_offset ──────────────────────────────────────────────────────────

    #[test]
    fn split_offset_never_exceeds_maximum() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let offset = split_offset(&mut rng, 8.0);
            assert!(
                offset.length() <= 8.0 + 1e-4,
                "offset {offset:?} exceeds the 8.0 maximum"
            );
        }
    }

    #[test]
    fn split_offsets_are_independent_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = split_offset(&mut rng, 8.0);
        let b = split_offset(&mut rng, 8.0);
        assert_ne!(a, b, "consecutive draws should differ");
    }

    // ── asteroid_outline ──────────────────────────────────────────────────────

    #[test]
    fn outline_has_ten_vertices_for_every_variant() {
        for variant in 0..VARIANT_COUNT {
            assert_eq!(asteroid_outline(variant, 3, 16.0).len(), 10);
        }
    }

    #[test]
    fn outline_scale_is_proportional_to_tier() {
        let tier1 = asteroid_outline(0, 1, 16.0);
        let tier3 = asteroid_outline(0, 3, 16.0);
        let max1 = tier1.iter().map(|v| v.length()).fold(0.0_f32, f32::max);
        let max3 = tier3.iter().map(|v| v.length()).fold(0.0_f32, f32::max);
        assert!(
            (max3 / max1 - 3.0).abs() < 1e-4,
            "tier 3 should be 3× the extent of tier 1 (got ratio {})",
            max3 / max1
        );
    }

    #[test]
    fn outline_variant_index_wraps() {
        assert_eq!(
            asteroid_outline(VARIANT_COUNT, 2, 16.0),
            asteroid_outline(0, 2, 16.0)
        );
    }

    #[test]
    fn outline_produces_valid_convex_hull_collider() {
        for variant in 0..VARIANT_COUNT {
            for tier in 1..=3 {
                let verts = asteroid_outline(variant, tier, 16.0);
                assert!(
                    Collider::convex_hull(&verts).is_some(),
                    "variant {variant} tier {tier} must yield a valid collider"
                );
            }
        }
    }
}
