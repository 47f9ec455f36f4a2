use std::f32::consts::FRAC_PI_4;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const WALL_THICKNESS: f32 = 15.0;

    // Paddle
    pub const PADDLE_THICKNESS: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 500.0; // units per second
    pub const PADDLE_INSET: f32 = 15.0; // distance of paddle centre from the side edge

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 500.0;
    pub const BALL_SPEED_MAX: f32 = 700.0;
    pub const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_4; // 45°
    pub const SERVE_ANGLE: f32 = FRAC_PI_4;

    // Opponent
    pub const OPPONENT_DEAD_ZONE: f32 = 5.0;

    // Rounds
    pub const RESET_DELAY_MS: f32 = 2000.0;

    // Frame pacing
    pub const MIN_FRAME_MS: u64 = 16; // ~60 Hz
    pub const MAX_DT: f32 = 0.05; // Clamp to bound error on slow frames
}
