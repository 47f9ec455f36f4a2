use std::io;

use crate::frontend::{AudioSink, InputSource, Renderer};
use crate::pacing::{Clock, FramePacer};
use crate::scene::draw_scene;
use crate::Simulation;

/// Run the game loop until the input source asks to quit.
///
/// Each frame: poll input, pace, step the simulation, play the frame's
/// sounds, draw. I/O errors from the front end end the loop.
pub fn run<I, A, R, C>(
    sim: &mut Simulation,
    input: &mut I,
    audio: &mut A,
    renderer: &mut R,
    pacer: &mut FramePacer<C>,
) -> io::Result<()>
where
    I: InputSource + ?Sized,
    A: AudioSink + ?Sized,
    R: Renderer + ?Sized,
    C: Clock,
{
    log::info!("Entering game loop");
    let mut frames: u64 = 0;

    loop {
        let keys = input.poll()?;
        if keys.quit {
            break;
        }
        sim.set_player_direction(keys.direction());

        let dt = pacer.wait();
        sim.step(dt);

        for sound in sim.events.sounds() {
            audio.play_sound(sound);
        }

        draw_scene(sim, renderer)?;
        frames += 1;
    }

    log::info!(
        "Leaving game loop after {frames} frames, final score {} - {}",
        sim.score.player,
        sim.score.opponent
    );
    Ok(())
}
