//! Session state and core entity types
//!
//! `SessionState` is the cross-scene progress record: it is owned by the
//! application, outlives any single attempt, and is only ever mutated by the
//! phase machine. Everything else here is per-attempt state rebuilt on every
//! restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Tick pipeline suspended; `prev` is restored verbatim on resume
    Paused { prev: PausedFrom },
    /// Player touched a hazard, restart pending
    Hit,
    /// Last mask gathered, outro pending
    Collecting,
    /// Session over, control handed back to the menu
    Ended,
}

/// Phase a pause was entered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PausedFrom {
    Playing,
    Hit,
    Collecting,
}

impl SessionPhase {
    /// True while gameplay systems (movement, hazards, collision) may run
    pub fn is_playing(&self) -> bool {
        matches!(self, SessionPhase::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, SessionPhase::Paused { .. })
    }
}

/// Events produced by collision detection, consumed by the phase machine
/// within the same tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Player overlapped a live mask piece
    Collect(u32),
    /// Player overlapped a hazard
    Hit,
}

/// Cross-scene progress record
///
/// Survives across attempts and scene changes; `reset` is called at session
/// start, on hit-restart, and on quit. The sound setting deliberately
/// survives resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Masks gathered so far
    pub collected_count: u32,
    /// Masks in the world
    pub total_count: u32,
    /// Per-mask collected flag, indexed by collectible id
    pub collected: Vec<bool>,
    /// Sound toggle, flipped by the mute input
    pub sound_enabled: bool,
    /// Segment the camera currently shows
    pub current_segment: usize,
}

impl SessionState {
    pub fn new(total_count: u32) -> Self {
        Self {
            collected_count: 0,
            total_count,
            collected: vec![false; total_count as usize],
            sound_enabled: true,
            current_segment: 0,
        }
    }

    /// Zero progress for a fresh attempt. Sound setting is kept.
    pub fn reset(&mut self) {
        self.collected_count = 0;
        self.collected.fill(false);
        self.current_segment = 0;
    }

    /// Flip the sound setting, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Mark a mask collected. Returns true only on the first transition to
    /// collected; repeat calls are no-ops.
    pub fn mark_collected(&mut self, id: u32) -> bool {
        match self.collected.get_mut(id as usize) {
            Some(flag) if !*flag => {
                *flag = true;
                self.collected_count += 1;
                true
            }
            _ => false,
        }
    }

    /// True once every mask has been gathered
    pub fn all_collected(&self) -> bool {
        self.collected_count == self.total_count
    }
}

/// The player avatar. One per session; position/velocity/facing belong to
/// the movement pass, `alive` to the phase machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite mirroring flag, set from the horizontal movement sign
    pub facing_left: bool,
    pub alive: bool,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            facing_left: false,
            alive: true,
        }
    }
}

/// A mask piece waiting in one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub segment: usize,
    pub pos: Vec2,
}

/// A bouncing enemy. Lives until session teardown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Live entities for the current attempt
///
/// Vectors stay sorted by id (spawn order) for deterministic iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRegistry {
    pub collectibles: Vec<Collectible>,
    pub hazards: Vec<Hazard>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop a collected mask piece. Removal is idempotent.
    pub fn remove_collectible(&mut self, id: u32) {
        self.collectibles.retain(|c| c.id != id);
    }

    pub fn collectible(&self, id: u32) -> Option<&Collectible> {
        self.collectibles.iter().find(|c| c.id == id)
    }
}

/// Deferred one-shot transition scheduled on the session clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeferredTask {
    /// Session clock value the task fires at, in ms
    pub fire_at_ms: f64,
    pub kind: TaskKind,
}

/// What a deferred task does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Hit -> Playing full restart
    RestartAfterHit,
    /// Collecting -> Ended victory hand-off
    FinishCollecting,
}
