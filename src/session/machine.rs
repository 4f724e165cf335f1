//! Session lifecycle and phase transitions
//!
//! [`Session`] owns everything that lives for one play-through: the live
//! entities, the player, the camera page, the session clock and the single
//! pending deferred transition. The cross-scene [`SessionState`] is owned by
//! the application and passed in by reference; this module is the only code
//! that mutates it.
//!
//! Invalid requests (resume while not paused, a second hit, quitting twice)
//! are silent no-ops, never errors.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::CameraPager;
use super::movement::MovementController;
use super::state::{
    DeferredTask, EntityRegistry, PausedFrom, Player, SessionEvent, SessionPhase, SessionState,
    TaskKind,
};
use super::world::WorldModel;
use crate::audio::{AudioSink, SoundId, play_if_enabled};
use crate::consts::*;
use crate::host::{RenderId, SceneHost, SessionNotice, hud};

/// How a session constrains the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Normal play across the whole world
    Standard,
    /// Tutorial pen: slower speed, movement restricted to a sub-rectangle
    Practice,
}

/// One play-through of the world, from session start to Ended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Run seed; attempt layouts derive from it
    pub seed: u64,
    /// Restart counter, mixed into the spawn seed
    pub attempt: u32,
    pub mode: SessionMode,
    pub world: WorldModel,
    pub phase: SessionPhase,
    /// Session clock in ms; frozen while paused
    pub clock_ms: f64,
    pub player: Player,
    pub registry: EntityRegistry,
    pub movement: MovementController,
    pub camera: CameraPager,
    /// The one pending deferred transition, if any
    pub pending: Option<DeferredTask>,
    /// Whether any movement key was held last tick (for the key-press sound)
    pub(super) move_keys_held: bool,
}

impl Session {
    /// Build and start a fresh session: progress reset, entities spawned,
    /// collaborators told. `state` keeps its sound setting.
    pub fn start(
        seed: u64,
        world: WorldModel,
        mode: SessionMode,
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) -> Self {
        let total = world.segment_count() as u32;
        if state.total_count != total {
            log::warn!(
                "session state sized for {} masks, world has {}; resizing",
                state.total_count,
                total
            );
            state.total_count = total;
            state.collected = vec![false; total as usize];
        }
        state.reset();

        let movement = match mode {
            SessionMode::Standard => MovementController::for_world(&world),
            SessionMode::Practice => MovementController::for_practice(),
        };
        let mut session = Self {
            seed,
            attempt: 0,
            mode,
            world,
            phase: SessionPhase::Playing,
            clock_ms: 0.0,
            player: Player::spawn(),
            registry: EntityRegistry::new(),
            movement,
            camera: CameraPager::new(),
            pending: None,
            move_keys_held: false,
        };
        session.registry = session.world.populate(&mut session.spawn_rng());
        session.announce_start(state, host, audio);
        session
    }

    fn spawn_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.attempt as u64))
    }

    fn announce_start(
        &self,
        state: &SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        log::info!("session start (seed {}, attempt {})", self.seed, self.attempt);
        host.set_viewport_offset(0.0);
        host.set_hud_text(hud::SEGMENT, self.world.segment_name(0));
        host.set_hud_text(
            hud::MASKS,
            &format!("{}/{}", state.collected_count, state.total_count),
        );
        host.notify(SessionNotice::SessionStarted);
        play_if_enabled(audio, state, SoundId::BgMusic);
    }

    /// Full restart: fresh entities, progress zeroed, player respawned.
    /// Used by the hit-delay expiry and the manual restart key.
    pub fn restart(
        &mut self,
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        for mask in &self.registry.collectibles {
            host.remove_entity(RenderId::Collectible(mask.id));
        }
        for hazard in &self.registry.hazards {
            host.remove_entity(RenderId::Hazard(hazard.id));
        }

        self.attempt += 1;
        self.registry = self.world.populate(&mut self.spawn_rng());
        self.player = Player::spawn();
        self.camera = CameraPager::new();
        self.pending = None;
        self.phase = SessionPhase::Playing;
        state.reset();
        self.announce_start(state, host, audio);
    }

    /// Consume the events one collision pass produced. Events arriving after
    /// the phase has left Playing (including mid-batch) are discarded, which
    /// makes the hit transition one-shot per attempt.
    pub fn handle_events(
        &mut self,
        events: &[SessionEvent],
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        for &event in events {
            if !self.phase.is_playing() {
                break;
            }
            match event {
                SessionEvent::Collect(id) => self.collect(id, state, host, audio),
                SessionEvent::Hit => self.hit(state, host, audio),
            }
        }
    }

    fn collect(
        &mut self,
        id: u32,
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        if self.registry.collectible(id).is_none() {
            return;
        }
        self.registry.remove_collectible(id);
        if !state.mark_collected(id) {
            return;
        }
        log::debug!(
            "mask {} collected ({}/{})",
            id,
            state.collected_count,
            state.total_count
        );

        host.remove_entity(RenderId::Collectible(id));
        host.set_hud_text(
            hud::MASKS,
            &format!("{}/{}", state.collected_count, state.total_count),
        );
        host.notify(SessionNotice::Collected(id));
        play_if_enabled(audio, state, SoundId::Pick);

        if state.all_collected() {
            self.phase = SessionPhase::Collecting;
            self.schedule(TaskKind::FinishCollecting, VICTORY_DELAY_MS);
            host.notify(SessionNotice::Victory);
        }
    }

    fn hit(
        &mut self,
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        log::debug!("player hit at {:?}", self.player.pos);
        self.phase = SessionPhase::Hit;
        self.player.alive = false;
        self.schedule(TaskKind::RestartAfterHit, HIT_RESTART_DELAY_MS);
        host.notify(SessionNotice::PlayerHit);
        play_if_enabled(audio, state, SoundId::Fail);
    }

    fn schedule(&mut self, kind: TaskKind, delay_ms: f64) {
        self.pending = Some(DeferredTask {
            fire_at_ms: self.clock_ms + delay_ms,
            kind,
        });
    }

    /// Fire the pending deferred transition once the session clock reaches
    /// it. The clock never advances while paused, so a pause stretches the
    /// delay rather than eating it.
    pub fn poll_pending(
        &mut self,
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        let Some(task) = self.pending else {
            return;
        };
        if self.phase.is_paused() || self.clock_ms < task.fire_at_ms {
            return;
        }
        self.pending = None;
        match task.kind {
            TaskKind::RestartAfterHit => {
                if self.phase == SessionPhase::Hit {
                    self.restart(state, host, audio);
                }
            }
            TaskKind::FinishCollecting => {
                if self.phase == SessionPhase::Collecting {
                    log::info!("all masks gathered, session over");
                    self.phase = SessionPhase::Ended;
                    host.notify(SessionNotice::SessionEnded);
                }
            }
        }
    }

    /// Suspend the tick pipeline. No-op unless currently Playing, Hit or
    /// Collecting.
    pub fn pause(&mut self, host: &mut dyn SceneHost) {
        let prev = match self.phase {
            SessionPhase::Playing => PausedFrom::Playing,
            SessionPhase::Hit => PausedFrom::Hit,
            SessionPhase::Collecting => PausedFrom::Collecting,
            SessionPhase::Paused { .. } | SessionPhase::Ended => return,
        };
        self.phase = SessionPhase::Paused { prev };
        host.notify(SessionNotice::Paused);
    }

    /// Resume exactly where the pause left off: same phase, same entities,
    /// same pending delay. No-op unless paused.
    pub fn resume(&mut self, host: &mut dyn SceneHost) {
        let SessionPhase::Paused { prev } = self.phase else {
            return;
        };
        self.phase = match prev {
            PausedFrom::Playing => SessionPhase::Playing,
            PausedFrom::Hit => SessionPhase::Hit,
            PausedFrom::Collecting => SessionPhase::Collecting,
        };
        host.notify(SessionNotice::Resumed);
    }

    /// Quit back to the menu from the pause screen. Cancels the pending
    /// deferred transition and resets progress as one step, so a stale delay
    /// can never fire into the reset state. No-op unless paused.
    pub fn quit(
        &mut self,
        state: &mut SessionState,
        host: &mut dyn SceneHost,
        audio: &mut dyn AudioSink,
    ) {
        if !self.phase.is_paused() {
            return;
        }
        self.pending = None;
        self.phase = SessionPhase::Ended;
        state.reset();
        audio.stop_all();
        host.notify(SessionNotice::SessionEnded);
        log::info!("session quit to menu");
    }
}
