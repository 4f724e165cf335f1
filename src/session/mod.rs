//! Deterministic session core
//!
//! All gameplay logic lives here. The module must stay pure and
//! deterministic:
//! - Tick-driven, single-threaded, no timers of its own
//! - Seeded RNG only (spawn layouts reproduce from the run seed)
//! - Stable entity iteration order (by spawn id)
//! - No rendering or audio dependencies beyond the collaborator traits

pub mod camera;
pub mod collision;
pub mod machine;
pub mod movement;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::{CameraPager, segment_index_for};
pub use collision::{Aabb, detect, player_hitbox};
pub use machine::{Session, SessionMode};
pub use movement::MovementController;
pub use state::{
    Collectible, DeferredTask, EntityRegistry, Hazard, PausedFrom, Player, SessionEvent,
    SessionPhase, SessionState, TaskKind,
};
pub use tick::{TickInput, tick};
pub use world::{Bounds, Segment, WorldModel, integrate_hazards};
