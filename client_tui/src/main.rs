mod audio;
mod input;
mod renderer;
mod terminal;

use std::io::{self, BufWriter};
use std::path::Path;

use game_core::{load_sounds, run, Config, FramePacer, GameRng, MonotonicClock, Simulation};

use crate::audio::RodioAudio;
use crate::input::TerminalInput;
use crate::renderer::TerminalRenderer;
use crate::terminal::TerminalGuard;

const SOUND_DIR: &str = "sounds";

fn play() -> io::Result<()> {
    let config = Config::default();

    let mut audio = RodioAudio::new()?;
    let guard = TerminalGuard::enter()?;
    let mut input = TerminalInput::new(guard.reports_key_release());
    let loaded = load_sounds(&mut audio, Path::new(SOUND_DIR));
    log::info!("Loaded {loaded} sounds from {SOUND_DIR}/");
    let mut renderer = TerminalRenderer::new(
        BufWriter::new(io::stdout()),
        config.screen_width,
        config.screen_height,
    )?;

    let mut sim = Simulation::new(config, GameRng::from_time());
    let mut pacer = FramePacer::new(MonotonicClock::new());

    run(&mut sim, &mut input, &mut audio, &mut renderer, &mut pacer)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = play() {
        log::error!("Game aborted: {e}");
        eprintln!("pong: {e}");
        std::process::exit(1);
    }
}
