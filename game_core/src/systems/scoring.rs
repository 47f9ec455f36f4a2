use rand::Rng;

use crate::{Ball, Config, Events, RoundState, Score, Side};

/// Check if ball left the court (scoring). A point re-serves the ball and
/// restarts the countdown.
pub fn check_scoring<R: Rng + ?Sized>(
    ball: &mut Ball,
    round: &mut RoundState,
    score: &mut Score,
    events: &mut Events,
    config: &Config,
    rng: &mut R,
) {
    let scorer = if ball.pos.x < 0.0 {
        Side::Opponent
    } else if ball.pos.x > config.screen_width {
        Side::Player
    } else {
        return;
    };

    score.increment(scorer);
    match scorer {
        Side::Player => events.player_scored = true,
        Side::Opponent => events.opponent_scored = true,
    }
    log::info!(
        "{scorer:?} scores: {} - {}",
        score.player,
        score.opponent
    );

    ball.reset(config, rng);
    *round = RoundState::reset(config.reset_delay_ms);
}
