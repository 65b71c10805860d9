use crate::{Ball, Config, Events, PlayerSlot, Score};

/// Check if ball left the court (scoring).
///
/// An exit only counts while the ball is still travelling outward, so a
/// ball resting on the boundary and heading back in is not a point.
pub fn check_scoring(ball: &mut Ball, score: &mut Score, config: &Config, events: &mut Events) {
    let scorer = if ball.pos.x <= 0.0 && ball.vel.x < 0.0 {
        PlayerSlot::Right
    } else if ball.pos.x >= config.ball_max_x() && ball.vel.x > 0.0 {
        PlayerSlot::Left
    } else {
        return;
    };

    score.increment(scorer);
    events.scored = Some(scorer);
    ball.reset(scorer, config);

    log::debug!(
        "{} player scored ({} - {})",
        scorer,
        score.left,
        score.right
    );
}
