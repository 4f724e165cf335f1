//! Headless demo runner
//!
//! Drives a full session with a simple autopilot (walk toward the nearest
//! remaining mask) at a fixed 60 Hz timestep and reports HUD updates and
//! session notices on stdout. Useful for watching the session core work
//! without any presentation layer.
//!
//! Usage: `the-hive [seed] [--dump]`
//!   seed    run seed (default 42)
//!   --dump  print the final session snapshot as JSON

use glam::Vec2;
use the_hive::audio::LogAudio;
use the_hive::host::{RenderId, SceneHost, SessionNotice, hud};
use the_hive::session::{
    Session, SessionMode, SessionPhase, SessionState, TickInput, WorldModel, tick,
};

const FRAME_MS: f64 = 1000.0 / 60.0;
/// Hard cap so a pathological run cannot spin forever
const MAX_TICKS: u64 = 120_000;

/// Host that narrates HUD and notice traffic to stdout
#[derive(Default)]
struct ConsoleHost {
    ticks: u64,
}

impl SceneHost for ConsoleHost {
    fn place_entity(&mut self, _id: RenderId, _pos: Vec2) {}

    fn remove_entity(&mut self, id: RenderId) {
        if let RenderId::Collectible(n) = id {
            println!("[{:>6}] mask {} picked up", self.ticks, n);
        }
    }

    fn set_viewport_offset(&mut self, x: f32) {
        println!("[{:>6}] camera page -> offset {}", self.ticks, x);
    }

    fn set_hud_text(&mut self, label: &str, value: &str) {
        // The position readout changes every tick; everything else is rare
        if label != hud::POSITION {
            println!("[{:>6}] {}: {}", self.ticks, label, value);
        }
    }

    fn notify(&mut self, notice: SessionNotice) {
        println!("[{:>6}] {:?}", self.ticks, notice);
    }
}

/// Walk toward the nearest remaining mask, one axis decision per tick
fn autopilot(session: &Session) -> TickInput {
    let mut input = TickInput::default();
    if session.phase != SessionPhase::Playing {
        return input;
    }
    let player = session.player.pos;
    let Some(target) = session
        .registry
        .collectibles
        .iter()
        .min_by(|a, b| {
            let da = a.pos.distance_squared(player);
            let db = b.pos.distance_squared(player);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| c.pos)
    else {
        return input;
    };

    let delta = target - player;
    if delta.x < -2.0 {
        input.left = true;
    } else if delta.x > 2.0 {
        input.right = true;
    }
    if delta.y < -2.0 {
        input.up = true;
    } else if delta.y > 2.0 {
        input.down = true;
    }
    input
}

fn main() {
    env_logger::init();

    let mut seed = 42u64;
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump" {
            dump = true;
        } else if let Ok(n) = arg.parse() {
            seed = n;
        } else {
            eprintln!("usage: the-hive [seed] [--dump]");
            std::process::exit(2);
        }
    }

    let mut state = SessionState::new(4);
    let mut host = ConsoleHost::default();
    let mut audio = LogAudio;
    let mut session = Session::start(
        seed,
        WorldModel::the_hive(),
        SessionMode::Standard,
        &mut state,
        &mut host,
        &mut audio,
    );

    let mut ticks = 0u64;
    while session.phase != SessionPhase::Ended && ticks < MAX_TICKS {
        let input = autopilot(&session);
        tick(&mut session, &mut state, &input, FRAME_MS, &mut host, &mut audio);
        ticks += 1;
        host.ticks = ticks;
    }

    println!(
        "finished after {} ticks: {:?}, masks {}/{}, {} attempt(s)",
        ticks,
        session.phase,
        state.collected_count,
        state.total_count,
        session.attempt + 1
    );

    if dump {
        match serde_json::to_string_pretty(&session) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("snapshot failed: {err}"),
        }
    }
}
