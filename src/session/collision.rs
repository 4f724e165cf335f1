//! Overlap detection between the player and live entities
//!
//! One pass per tick while the session is in Playing. Everything is an
//! axis-aligned box; the detector only emits events, the phase machine
//! decides what they mean (and drops them once it has left Playing).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{EntityRegistry, Player, SessionEvent};
use crate::consts::*;

/// Axis-aligned hitbox, center + half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Standard AABB overlap test (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

/// The player's hitbox at its current position
pub fn player_hitbox(player: &Player) -> Aabb {
    Aabb::new(player.pos, Vec2::new(PLAYER_HALF_W, PLAYER_HALF_H))
}

fn collectible_hitbox(pos: Vec2) -> Aabb {
    Aabb::new(pos, Vec2::splat(COLLECTIBLE_HALF))
}

fn hazard_hitbox(pos: Vec2) -> Aabb {
    Aabb::new(pos, Vec2::splat(HAZARD_HALF))
}

/// Test the player against every live entity and emit one event per overlap.
///
/// Collected masks have already left the registry, so re-entrant overlaps on
/// later frames cannot produce a second `Collect`. Several overlaps in the
/// same tick all get emitted; deduplication is the machine's job.
pub fn detect(player: &Player, registry: &EntityRegistry) -> Vec<SessionEvent> {
    let hitbox = player_hitbox(player);
    let mut events = Vec::new();

    for mask in &registry.collectibles {
        if hitbox.overlaps(&collectible_hitbox(mask.pos)) {
            events.push(SessionEvent::Collect(mask.id));
        }
    }

    for hazard in &registry.hazards {
        if hitbox.overlaps(&hazard_hitbox(hazard.pos)) {
            events.push(SessionEvent::Hit);
        }
    }

    events
}
