//! Sound collaborator boundary
//!
//! The core never plays audio itself; it asks an [`AudioSink`] to. A sink
//! failure (missing asset, no output device) is the sink's problem: it must
//! swallow and at most log, never surface anything back into session logic.

use serde::{Deserialize, Serialize};

use crate::session::SessionState;

/// Sounds the session core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundId {
    /// Movement key pressed
    ButtonClick,
    /// Mask piece collected
    Pick,
    /// Hazard contact
    Fail,
    /// Looping background track
    BgMusic,
}

/// Playback side of the audio collaborator.
///
/// Implementations must be infallible from the caller's point of view.
pub trait AudioSink {
    fn play(&mut self, sound: SoundId);
    fn stop_all(&mut self);
}

/// Sink that drops every request. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: SoundId) {}
    fn stop_all(&mut self) {}
}

/// Sink that logs requests instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: SoundId) {
        log::debug!("audio: play {:?}", sound);
    }

    fn stop_all(&mut self) {
        log::debug!("audio: stop all");
    }
}

/// Route a sound through the cross-scene sound toggle
pub fn play_if_enabled(sink: &mut dyn AudioSink, state: &SessionState, sound: SoundId) {
    if state.sound_enabled {
        sink.play(sound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        played: Vec<SoundId>,
    }

    impl AudioSink for CountingSink {
        fn play(&mut self, sound: SoundId) {
            self.played.push(sound);
        }
        fn stop_all(&mut self) {
            self.played.clear();
        }
    }

    #[test]
    fn test_play_respects_toggle() {
        let mut sink = CountingSink::default();
        let mut state = SessionState::new(4);

        play_if_enabled(&mut sink, &state, SoundId::Pick);
        assert_eq!(sink.played, vec![SoundId::Pick]);

        state.toggle_sound();
        play_if_enabled(&mut sink, &state, SoundId::Fail);
        assert_eq!(sink.played, vec![SoundId::Pick]);
    }
}
