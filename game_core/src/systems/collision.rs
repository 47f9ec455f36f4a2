use glam::Vec2;

use crate::{sign, Ball, Config, Events, Paddle};

/// Bounce the ball off the top and bottom walls.
///
/// Only flips when the ball is still heading into the wall, so a ball that
/// is already on its way out is not flipped back in.
pub fn check_wall_collision(ball: &mut Ball, config: &Config, events: &mut Events) {
    let hit_top = ball.pos.y < config.top_bound() && ball.vel.y < 0.0;
    let hit_bottom = ball.pos.y > config.bottom_bound() && ball.vel.y > 0.0;

    if hit_top || hit_bottom {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
        log::trace!("Wall hit at {:?}", ball.pos);
    }
}

/// Check ball collisions with both paddles
pub fn check_paddle_collisions(
    ball: &mut Ball,
    paddles: &[Paddle],
    config: &Config,
    events: &mut Events,
) {
    let reach_y = config.paddle_height / 2.0 + config.ball_size / 2.0;
    let reach_x = config.paddle_thickness / 2.0 + config.ball_size / 2.0;

    for paddle in paddles {
        let diff_y = ball.pos.y - paddle.pos.y;
        let diff_x = ball.pos.x - paddle.pos.x;

        if diff_y.abs() <= reach_y
            && diff_x.abs() <= reach_x
            && ball_moving_towards(ball, paddle, config)
        {
            ball.vel = bounce_velocity(ball.vel, diff_y, config);
            events.ball_hit_paddle = true;
            log::trace!("Paddle hit, offset {diff_y:.1}, new velocity {:?}", ball.vel);
        }
    }
}

/// True when the ball is heading at the given paddle's side of the court
pub fn ball_moving_towards(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    if paddle.is_left(config) {
        ball.vel.x < 0.0
    } else {
        ball.vel.x > 0.0
    }
}

/// Outgoing velocity after a paddle hit.
///
/// The further from the paddle centre the ball lands, the steeper and
/// faster it leaves. A ball overhanging the paddle end leaves steeper than
/// the max bounce angle. A zero velocity component keeps a zero sign, so a
/// ball travelling flat stays flat.
pub fn bounce_velocity(vel: Vec2, diff_y: f32, config: &Config) -> Vec2 {
    let fraction = diff_y.abs() / (config.paddle_height / 2.0);

    let bounce_angle = fraction * config.max_bounce_angle;
    let speed =
        (fraction * config.ball_speed_max).clamp(config.ball_speed_initial, config.ball_speed_max);

    let mut vx = bounce_angle.cos() * sign(vel.x, 0.0) as f32 * speed;
    let mut vy = bounce_angle.sin() * sign(vel.y, 0.0) as f32 * speed;

    // Leave on the same side of the paddle centre as the impact
    if (diff_y > 0.0 && vy < 0.0) || (diff_y < 0.0 && vy > 0.0) {
        vy = -vy;
    }

    // Send it back across the court
    vx = -vx;

    Vec2::new(vx, vy)
}
