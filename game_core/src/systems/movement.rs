use crate::{Ball, Config, Paddle};

/// Apply paddle movement based on direction
pub fn move_paddles(paddles: &mut [Paddle], dt: f32, config: &Config) {
    for paddle in paddles.iter_mut() {
        if paddle.dir != 0 {
            paddle.pos.y += paddle.dir as f32 * config.paddle_speed * dt;

            // Clamp to playfield bounds
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Params, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_paddle_moves_down() {
        let config = Config::new();
        let mut paddles = [Paddle::spawn(Side::Player, &config)];
        paddles[0].dir = 1;

        move_paddles(&mut paddles, 0.02, &config);

        assert!((paddles[0].pos.y - 310.0).abs() < 0.001);
    }

    #[test]
    fn test_idle_paddle_stays_put() {
        let config = Config::new();
        let mut paddles = [Paddle::new(Vec2::new(15.0, 123.0))];

        move_paddles(&mut paddles, 0.05, &config);

        assert_eq!(paddles[0].pos.y, 123.0);
    }

    #[test]
    fn test_paddle_clamped_at_top_wall() {
        let config = Config::new();
        let mut paddles = [Paddle::new(Vec2::new(15.0, 40.0))];
        paddles[0].dir = -1;

        move_paddles(&mut paddles, 0.05, &config);

        assert_eq!(paddles[0].pos.y, config.paddle_min_y());
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, -50.0));
        move_ball(&mut ball, 0.5);
        assert_eq!(ball.pos, Vec2::new(450.0, 275.0));
    }

    proptest! {
        #[test]
        fn paddle_stays_within_walls(
            start in Params::WALL_THICKNESS + Params::PADDLE_HEIGHT / 2.0
                ..=Params::SCREEN_HEIGHT - Params::WALL_THICKNESS - Params::PADDLE_HEIGHT / 2.0,
            dir in -1i8..=1,
            dt in 0.0f32..=Params::MAX_DT,
            frames in 1usize..200,
        ) {
            let config = Config::new();
            let mut paddles = [Paddle::new(Vec2::new(15.0, start))];
            paddles[0].dir = dir;
            for _ in 0..frames {
                move_paddles(&mut paddles, dt, &config);
                prop_assert!(paddles[0].pos.y >= config.paddle_min_y());
                prop_assert!(paddles[0].pos.y <= config.paddle_max_y());
            }
        }
    }
}
