use crate::{sign, Ball, Config, Paddle};

/// Direction for the computer paddle.
///
/// Tracks the ball once it is past the first quarter of the court,
/// otherwise drifts back to the vertical centre. The dead zone keeps the
/// paddle from jittering once it is lined up.
pub fn opponent_direction(ball: &Ball, paddle: &Paddle, config: &Config) -> i8 {
    let target_y = if ball.pos.x > config.screen_width / 4.0 {
        ball.pos.y
    } else {
        config.screen_height / 2.0
    };
    sign(target_y - paddle.pos.y, config.opponent_dead_zone)
}
