//! The Hive - a top-down mask-collection adventure
//!
//! Core modules:
//! - `session`: Deterministic session core (movement, paging, collisions,
//!   phase machine)
//! - `host`: Scene/render collaborator boundary
//! - `audio`: Sound collaborator boundary
//!
//! All gameplay state lives in [`session`]; `host` and `audio` are the thin
//! traits the presentation layer implements. Nothing in the core panics or
//! returns errors: invalid requests are no-ops and cosmetic failures stay at
//! the boundary.

pub mod audio;
pub mod host;
pub mod session;

pub use audio::{AudioSink, SoundId};
pub use host::{SceneHost, SessionNotice};
pub use session::{Session, SessionState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Full world width (four segments)
    pub const WORLD_WIDTH: f32 = 3200.0;
    /// World height
    pub const WORLD_HEIGHT: f32 = 450.0;
    /// One camera page / themed segment
    pub const SEGMENT_WIDTH: f32 = 800.0;

    /// Player speed in px/s during a normal session
    pub const PLAYER_SPEED: f32 = 250.0;
    /// Player speed in px/s inside the practice pen
    pub const PRACTICE_SPEED: f32 = 200.0;
    /// Player spawn point
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 225.0;
    /// Player hitbox half-extents
    pub const PLAYER_HALF_W: f32 = 24.0;
    pub const PLAYER_HALF_H: f32 = 24.0;

    /// Mask piece hitbox half-extent (square)
    pub const COLLECTIBLE_HALF: f32 = 16.0;
    /// Hazard hitbox half-extent (square)
    pub const HAZARD_HALF: f32 = 12.0;

    /// Hazard velocity is drawn per-axis in [-HAZARD_SPEED_MAX, HAZARD_SPEED_MAX]
    pub const HAZARD_SPEED_MAX: f32 = 200.0;
    /// Components slower than this get bumped so hazards never crawl
    pub const HAZARD_SPEED_MIN: f32 = 80.0;
    /// Magnitude a too-slow component is bumped to (sign preserved)
    pub const HAZARD_SPEED_BUMP: f32 = 100.0;
    /// Hazards per segment, inclusive range
    pub const HAZARDS_PER_SEGMENT_MIN: u32 = 2;
    pub const HAZARDS_PER_SEGMENT_MAX: u32 = 3;

    /// Vertical spawn band for masks and hazards
    pub const SPAWN_Y_MIN: f32 = 50.0;
    pub const SPAWN_Y_MAX: f32 = 400.0;

    /// Delay before a hit attempt restarts, in ms
    pub const HIT_RESTART_DELAY_MS: f64 = 1000.0;
    /// Delay between the last mask and the outro, in ms
    pub const VICTORY_DELAY_MS: f64 = 1000.0;

    /// Practice pen used by the tutorial host
    pub const PRACTICE_MIN_X: f32 = 120.0;
    pub const PRACTICE_MAX_X: f32 = 680.0;
    pub const PRACTICE_MIN_Y: f32 = 230.0;
    pub const PRACTICE_MAX_Y: f32 = 380.0;

    /// HUD label shown when the player is past the known segment table
    pub const UNKNOWN_SEGMENT_NAME: &str = "Unknown";
}
