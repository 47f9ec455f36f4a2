pub mod components;
pub mod config;
pub mod frontend;
pub mod pacing;
pub mod params;
pub mod resources;
pub mod runner;
pub mod scene;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frontend::*;
pub use pacing::*;
pub use params::*;
pub use resources::*;
pub use runner::run;
pub use scene::draw_scene;

use systems::*;

/// Sign of `x` with a dead zone: 0 when `|x| <= tolerance`
pub fn sign(x: f32, tolerance: f32) -> i8 {
    if x > tolerance {
        1
    } else if x < -tolerance {
        -1
    } else {
        0
    }
}

/// Complete game state, owned by the frame loop
pub struct Simulation {
    pub config: Config,
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub round: RoundState,
    pub score: Score,
    pub events: Events,
    pub time: Time,
    pub rng: GameRng,
}

impl Simulation {
    /// Fresh game: paddles centred, ball served from centre after the
    /// start countdown.
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let paddles = [
            Paddle::spawn(Side::Player, &config),
            Paddle::spawn(Side::Opponent, &config),
        ];
        let mut ball = Ball::new(config.center(), glam::Vec2::ZERO);
        ball.reset(&config, &mut rng);
        let round = RoundState::reset(config.reset_delay_ms);

        Self {
            config,
            paddles,
            ball,
            round,
            score: Score::new(),
            events: Events::new(),
            time: Time::default(),
            rng,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn set_player_direction(&mut self, dir: i8) {
        self.paddle_mut(Side::Player).dir = dir.signum();
    }

    /// Advance the game by `dt` seconds (capped at [`Params::MAX_DT`])
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, Params::MAX_DT);

        // Clear events at start of frame
        self.events.clear();

        // 1. Opponent picks a direction from where the ball is now
        let dir = opponent_direction(&self.ball, self.paddle(Side::Opponent), &self.config);
        self.paddle_mut(Side::Opponent).dir = dir;

        // 2. Move paddles
        move_paddles(&mut self.paddles, dt, &self.config);

        // 3. Serve countdown
        if self.round.advance(dt) {
            log::debug!("Ball in play, velocity {:?}", self.ball.vel);
        }

        if self.round.is_active() {
            // 4. Move ball
            move_ball(&mut self.ball, dt);

            // 5. Collisions (walls, then paddles)
            check_wall_collision(&mut self.ball, &self.config, &mut self.events);
            check_paddle_collisions(&mut self.ball, &self.paddles, &self.config, &mut self.events);

            // 6. Scoring (ball left the court)
            check_scoring(
                &mut self.ball,
                &mut self.round,
                &mut self.score,
                &mut self.events,
                &self.config,
                &mut self.rng,
            );
        }

        self.time.advance(dt);
    }
}
