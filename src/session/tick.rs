//! The per-frame pipeline
//!
//! The host calls [`tick`] once per frame with latched input and the frame
//! delta. Within one tick the order is fixed: pause/mute/restart requests,
//! player movement, camera paging, hazard integration, collision detection,
//! event consumption, deferred-task poll, render sync. No event survives
//! past the tick that produced it.
//!
//! While paused, nothing after the request handling runs and the session
//! clock does not advance, so resuming behaves as though zero time passed.

use super::collision;
use super::machine::Session;
use super::state::{SessionPhase, SessionState};
use super::world::integrate_hazards;
use crate::audio::{AudioSink, SoundId, play_if_enabled};
use crate::host::{RenderId, SceneHost, hud};

/// Input latched by the host for a single tick.
///
/// Directional flags are level-triggered (polled key state); `pause`,
/// `mute` and `restart` are one-shot and must be cleared by the host after
/// the tick consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Toggle pause/resume
    pub pause: bool,
    /// Toggle the sound setting
    pub mute: bool,
    /// Restart the attempt (the R key)
    pub restart: bool,
}

impl TickInput {
    /// True if any movement key is held
    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Advance the session by one frame
pub fn tick(
    session: &mut Session,
    state: &mut SessionState,
    input: &TickInput,
    dt_ms: f64,
    host: &mut dyn SceneHost,
    audio: &mut dyn AudioSink,
) {
    if input.pause {
        if session.phase.is_paused() {
            // The resume frame itself simulates nothing, so a pause of any
            // length is invisible to the session
            session.resume(host);
            return;
        }
        session.pause(host);
    }

    if input.mute {
        if state.toggle_sound() {
            play_if_enabled(audio, state, SoundId::BgMusic);
        } else {
            audio.stop_all();
        }
    }

    if session.phase.is_paused() || session.phase == SessionPhase::Ended {
        return;
    }

    session.clock_ms += dt_ms;
    let dt = (dt_ms / 1000.0) as f32;

    if session.phase.is_playing() {
        // Click on the frame a movement key goes down
        let held = input.any_direction();
        if held && !session.move_keys_held {
            play_if_enabled(audio, state, SoundId::ButtonClick);
        }
        session.move_keys_held = held;

        if input.restart {
            session.restart(state, host, audio);
        } else {
            session.movement.apply(&mut session.player, input, dt);
            if let Some(index) = session.camera.update(session.player.pos.x, &session.world, state)
            {
                host.set_viewport_offset(session.camera.offset());
                host.set_hud_text(hud::SEGMENT, session.world.segment_name(index));
            }
            host.set_hud_text(
                hud::POSITION,
                &format!(
                    "X: {} Y: {}",
                    session.player.pos.x.floor() as i32,
                    session.player.pos.y.floor() as i32
                ),
            );
        }
    }

    // Hazards keep moving through the hit flash and the victory delay;
    // only a pause freezes them.
    let bounds = session.world.bounds();
    integrate_hazards(&mut session.registry, &bounds, dt);

    if session.phase.is_playing() {
        let events = collision::detect(&session.player, &session.registry);
        session.handle_events(&events, state, host, audio);
    }

    session.poll_pending(state, host, audio);

    sync_scene(session, host);
}

/// Push current entity positions to the render host
fn sync_scene(session: &Session, host: &mut dyn SceneHost) {
    if session.phase == SessionPhase::Ended {
        return;
    }
    host.place_entity(RenderId::Player, session.player.pos);
    for mask in &session.registry.collectibles {
        host.place_entity(RenderId::Collectible(mask.id), mask.pos);
    }
    for hazard in &session.registry.hazards {
        host.place_entity(RenderId::Hazard(hazard.id), hazard.pos);
    }
}
