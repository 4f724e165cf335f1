//! Scene/render collaborator boundary
//!
//! The presentation layer (canvas, sprites, HUD, particles) lives behind
//! [`SceneHost`]. The core pushes positions, viewport jumps, HUD strings and
//! discrete notices through it once per tick and never reads anything back.
//! A host that fails to draw something must swallow the failure; the session
//! continues as if the cosmetic effect had succeeded.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle the render host keys its scene objects by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderId {
    Player,
    Collectible(u32),
    Hazard(u32),
}

/// Discrete things the presentation layer may want to react to
/// (flashes, shakes, scene changes). Purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionNotice {
    SessionStarted,
    /// Mask with this id was just collected
    Collected(u32),
    /// Player touched a hazard this attempt
    PlayerHit,
    /// Last mask gathered, outro delay running
    Victory,
    /// Session handed control back to the menu
    SessionEnded,
    Paused,
    Resumed,
}

/// HUD labels the core writes to
pub mod hud {
    /// Current segment name
    pub const SEGMENT: &str = "env";
    /// Progress, "collected/total"
    pub const MASKS: &str = "masks";
    /// Player position readout
    pub const POSITION: &str = "pos";
}

/// Render/HUD side of the scene collaborator.
///
/// All methods are fire-and-forget; implementations must not panic on
/// missing resources.
pub trait SceneHost {
    /// Create or move a scene object
    fn place_entity(&mut self, id: RenderId, pos: Vec2);
    /// Drop a scene object (collected mask, torn-down session)
    fn remove_entity(&mut self, id: RenderId);
    /// Jump the viewport to a new page offset
    fn set_viewport_offset(&mut self, x: f32);
    /// Update one HUD line
    fn set_hud_text(&mut self, label: &str, value: &str);
    /// Discrete event for cosmetic reactions
    fn notify(&mut self, notice: SessionNotice);
}

/// Host that ignores everything. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullHost;

impl SceneHost for NullHost {
    fn place_entity(&mut self, _id: RenderId, _pos: Vec2) {}
    fn remove_entity(&mut self, _id: RenderId) {}
    fn set_viewport_offset(&mut self, _x: f32) {}
    fn set_hud_text(&mut self, _label: &str, _value: &str) {}
    fn notify(&mut self, _notice: SessionNotice) {}
}

/// Host that records every call, for assertions in tests and for the demo
/// runner's final report.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub placed: Vec<(RenderId, Vec2)>,
    pub removed: Vec<RenderId>,
    pub viewport_offsets: Vec<f32>,
    pub hud: Vec<(String, String)>,
    pub notices: Vec<SessionNotice>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written for a HUD label
    pub fn hud_value(&self, label: &str) -> Option<&str> {
        self.hud
            .iter()
            .rev()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl SceneHost for RecordingHost {
    fn place_entity(&mut self, id: RenderId, pos: Vec2) {
        self.placed.push((id, pos));
    }

    fn remove_entity(&mut self, id: RenderId) {
        self.removed.push(id);
    }

    fn set_viewport_offset(&mut self, x: f32) {
        self.viewport_offsets.push(x);
    }

    fn set_hud_text(&mut self, label: &str, value: &str) {
        self.hud.push((label.to_string(), value.to_string()));
    }

    fn notify(&mut self, notice: SessionNotice) {
        self.notices.push(notice);
    }
}
