//! Static world description and seeded entity spawning
//!
//! The world is an ordered list of fixed-width themed segments. Each segment
//! carries a spawn zone (inset from its edges and from the player spawn) used
//! for both its mask piece and its hazards. Spawning draws from a seeded
//! `Pcg32` so a given seed always produces the same layout.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Collectible, EntityRegistry, Hazard};
use crate::consts::*;

/// Axis-aligned rectangle the player or a hazard is confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Clamp a point into the rectangle
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Shrink on every side by the given half-extents
    pub fn inset(&self, half_w: f32, half_h: f32) -> Self {
        Self {
            min: self.min + Vec2::new(half_w, half_h),
            max: self.max - Vec2::new(half_w, half_h),
        }
    }

}

/// One themed slice of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub name: String,
    /// Background fill for the render host
    pub background: u32,
    /// Horizontal spawn zone for this segment's mask and hazards
    pub spawn_min_x: f32,
    pub spawn_max_x: f32,
}

impl Segment {
    /// World-space x range this segment covers
    pub fn x_range(&self) -> (f32, f32) {
        let start = self.index as f32 * SEGMENT_WIDTH;
        (start, start + SEGMENT_WIDTH)
    }
}

/// Static description of the whole world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldModel {
    pub segments: Vec<Segment>,
}

impl WorldModel {
    /// The shipped four-segment world
    pub fn the_hive() -> Self {
        let specs: [(&str, u32, f32, f32); 4] = [
            ("Savannah", 0xe6ccb2, 200.0, 750.0),
            ("Swamp", 0x2d6a4f, 850.0, 1550.0),
            ("Forest", 0x52b788, 1650.0, 2350.0),
            ("Mountain", 0xa8dadc, 2450.0, 3150.0),
        ];
        let segments = specs
            .iter()
            .enumerate()
            .map(|(index, &(name, background, spawn_min_x, spawn_max_x))| Segment {
                index,
                name: name.to_string(),
                background,
                spawn_min_x,
                spawn_max_x,
            })
            .collect();
        Self { segments }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn width(&self) -> f32 {
        self.segments.len() as f32 * SEGMENT_WIDTH
    }

    /// Full world rectangle
    pub fn bounds(&self) -> Bounds {
        Bounds::new(Vec2::ZERO, Vec2::new(self.width(), WORLD_HEIGHT))
    }

    /// Segment name for the HUD, with a sentinel past the known table
    pub fn segment_name(&self, index: usize) -> &str {
        self.segments
            .get(index)
            .map(|s| s.name.as_str())
            .unwrap_or(UNKNOWN_SEGMENT_NAME)
    }

    /// Populate a registry with one mask per segment and 2-3 hazards per
    /// segment, positions drawn from the segment spawn zones.
    pub fn populate(&self, rng: &mut Pcg32) -> EntityRegistry {
        let mut registry = EntityRegistry::new();

        for segment in &self.segments {
            let id = registry.next_entity_id();
            let pos = Vec2::new(
                rng.random_range(segment.spawn_min_x..=segment.spawn_max_x),
                rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX),
            );
            registry.collectibles.push(Collectible {
                id,
                segment: segment.index,
                pos,
            });
        }

        for segment in &self.segments {
            let count = rng.random_range(HAZARDS_PER_SEGMENT_MIN..=HAZARDS_PER_SEGMENT_MAX);
            for _ in 0..count {
                let id = registry.next_entity_id();
                let pos = Vec2::new(
                    rng.random_range(segment.spawn_min_x..=segment.spawn_max_x),
                    rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX),
                );
                let vel = Vec2::new(hazard_component(rng), hazard_component(rng));
                registry.hazards.push(Hazard { id, pos, vel });
            }
        }

        registry
    }
}

/// Draw one hazard velocity component in the configured band. Slow draws get
/// bumped so hazards never crawl.
fn hazard_component(rng: &mut Pcg32) -> f32 {
    let v = rng.random_range(-HAZARD_SPEED_MAX..=HAZARD_SPEED_MAX);
    if v.abs() < HAZARD_SPEED_MIN {
        if v >= 0.0 {
            HAZARD_SPEED_BUMP
        } else {
            -HAZARD_SPEED_BUMP
        }
    } else {
        v
    }
}

/// Advance hazards and reflect them off the world bounds
pub fn integrate_hazards(registry: &mut EntityRegistry, bounds: &Bounds, dt: f32) {
    let inner = bounds.inset(HAZARD_HALF, HAZARD_HALF);
    for hazard in &mut registry.hazards {
        hazard.pos += hazard.vel * dt;
        if hazard.pos.x < inner.min.x || hazard.pos.x > inner.max.x {
            hazard.vel.x = -hazard.vel.x;
        }
        if hazard.pos.y < inner.min.y || hazard.pos.y > inner.max.y {
            hazard.vel.y = -hazard.vel.y;
        }
        hazard.pos = inner.clamp(hazard.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_world_dimensions() {
        let world = WorldModel::the_hive();
        assert_eq!(world.segment_count(), 4);
        assert_eq!(world.width(), 3200.0);
        assert_eq!(world.segments[1].x_range(), (800.0, 1600.0));
    }

    #[test]
    fn test_segment_name_fallback() {
        let world = WorldModel::the_hive();
        assert_eq!(world.segment_name(0), "Savannah");
        assert_eq!(world.segment_name(3), "Mountain");
        assert_eq!(world.segment_name(7), "Unknown");
    }

    #[test]
    fn test_populate_layout() {
        let world = WorldModel::the_hive();
        let mut rng = Pcg32::seed_from_u64(7);
        let registry = world.populate(&mut rng);

        assert_eq!(registry.collectibles.len(), 4);
        for (i, mask) in registry.collectibles.iter().enumerate() {
            let segment = &world.segments[i];
            assert_eq!(mask.segment, i);
            assert!(mask.pos.x >= segment.spawn_min_x && mask.pos.x <= segment.spawn_max_x);
            assert!(mask.pos.y >= SPAWN_Y_MIN && mask.pos.y <= SPAWN_Y_MAX);
        }

        // 2-3 hazards per segment
        assert!(registry.hazards.len() >= 8 && registry.hazards.len() <= 12);
        for hazard in &registry.hazards {
            assert!(hazard.vel.x.abs() >= HAZARD_SPEED_MIN);
            assert!(hazard.vel.y.abs() >= HAZARD_SPEED_MIN);
            assert!(hazard.vel.x.abs() <= HAZARD_SPEED_MAX);
            assert!(hazard.vel.y.abs() <= HAZARD_SPEED_MAX);
        }
    }

    #[test]
    fn test_populate_deterministic() {
        let world = WorldModel::the_hive();
        let a = world.populate(&mut Pcg32::seed_from_u64(99));
        let b = world.populate(&mut Pcg32::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hazard_bounce_stays_in_bounds() {
        let world = WorldModel::the_hive();
        let bounds = world.bounds();
        let mut registry = EntityRegistry::new();
        let id = registry.next_entity_id();
        registry.hazards.push(Hazard {
            id,
            pos: Vec2::new(20.0, 20.0),
            vel: Vec2::new(-200.0, -200.0),
        });

        for _ in 0..600 {
            integrate_hazards(&mut registry, &bounds, 1.0 / 60.0);
            let pos = registry.hazards[0].pos;
            assert!(pos.x >= HAZARD_HALF && pos.x <= world.width() - HAZARD_HALF);
            assert!(pos.y >= HAZARD_HALF && pos.y <= WORLD_HEIGHT - HAZARD_HALF);
        }
        // Velocity reflected, not lost
        assert_eq!(registry.hazards[0].vel.x.abs(), 200.0);
    }
}
