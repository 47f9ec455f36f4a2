use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub wall_thickness: f32,
    pub paddle_thickness: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub max_bounce_angle: f32,
    pub serve_angle: f32,
    pub opponent_dead_zone: f32,
    pub reset_delay_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_thickness: Params::PADDLE_THICKNESS,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_angle: Params::SERVE_ANGLE,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            reset_delay_ms: Params::RESET_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the playfield, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Get X position for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.screen_width - self.paddle_inset,
        }
    }

    pub fn paddle_min_y(&self) -> f32 {
        self.wall_thickness + self.paddle_height / 2.0
    }

    pub fn paddle_max_y(&self) -> f32 {
        self.screen_height - self.wall_thickness - self.paddle_height / 2.0
    }

    /// Clamp paddle Y so the paddle never overlaps a wall
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(self.paddle_min_y(), self.paddle_max_y())
    }

    /// Lowest Y the ball centre may reach before bouncing off the top wall
    pub fn top_bound(&self) -> f32 {
        self.wall_thickness + self.ball_size / 2.0
    }

    /// Highest Y the ball centre may reach before bouncing off the bottom wall
    pub fn bottom_bound(&self) -> f32 {
        self.screen_height - self.wall_thickness - self.ball_size / 2.0
    }
}
