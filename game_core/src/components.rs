use glam::Vec2;
use rand::Rng;

use crate::config::Config;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left, keyboard controlled
    Opponent, // right, computer controlled
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// Index into per-side arrays
    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Paddle - one per side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, dir: 0 }
    }

    /// Paddle at its starting spot: inset from its edge, vertically centred
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(Vec2::new(config.paddle_x(side), config.screen_height / 2.0))
    }

    /// True when the paddle sits on the left half of the court
    pub fn is_left(&self, config: &Config) -> bool {
        self.pos.x < config.screen_width / 2.0
    }
}

/// The pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to centre with a random diagonal serve
    pub fn reset<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        self.pos = config.center();
        self.vel = serve_velocity(config, rng);
    }
}

/// Serve velocity: fixed angle off the horizontal, quadrant picked uniformly
pub fn serve_velocity<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Vec2 {
    let x_sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let y_sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(
        x_sign * config.serve_angle.cos() * config.ball_speed_initial,
        y_sign * config.serve_angle.sin() * config.ball_speed_initial,
    )
}
