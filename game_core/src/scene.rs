use std::io;

use crate::frontend::{Color, Rect, Renderer};
use crate::{Side, Simulation};

const SCORE_Y: f32 = 20.0;
const DASH_WIDTH: f32 = 2.0;
const DASH_LENGTH: f32 = 20.0;
const DASH_COUNT: u32 = 20;

/// Draw one frame of the court: scores, centre line, walls, paddles, ball
pub fn draw_scene<R: Renderer + ?Sized>(sim: &Simulation, renderer: &mut R) -> io::Result<()> {
    let config = &sim.config;
    renderer.clear(Color::BLACK);

    for (side, x) in [(Side::Player, 0.25), (Side::Opponent, 0.75)] {
        renderer.render_text(
            &sim.score.get(side).to_string(),
            config.screen_width * x,
            SCORE_Y,
        );
    }

    let dash_x = (config.screen_width - DASH_WIDTH) / 2.0;
    let dash_step = config.screen_height / DASH_COUNT as f32;
    for i in 0..DASH_COUNT {
        let dash = Rect::new(dash_x, i as f32 * dash_step, DASH_WIDTH, DASH_LENGTH);
        renderer.fill_rect(dash, Color::WHITE);
    }

    let top = Rect::new(0.0, 0.0, config.screen_width, config.wall_thickness);
    let bottom = Rect::new(
        0.0,
        config.screen_height - config.wall_thickness,
        config.screen_width,
        config.wall_thickness,
    );
    renderer.fill_rect(top, Color::WALL);
    renderer.fill_rect(bottom, Color::WALL);

    for side in Side::ALL {
        let paddle = sim.paddle(side);
        renderer.fill_rect(
            Rect::from_center(
                paddle.pos.x,
                paddle.pos.y,
                config.paddle_thickness,
                config.paddle_height,
            ),
            Color::WHITE,
        );
    }

    renderer.fill_rect(
        Rect::from_center(
            sim.ball.pos.x,
            sim.ball.pos.y,
            config.ball_size,
            config.ball_size,
        ),
        Color::WHITE,
    );

    renderer.present()
}
