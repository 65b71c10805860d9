use crate::{Ball, Config, Events, Paddle, PlayerSlot};

/// Flip vertical velocity when the ball touches the top or bottom edge.
///
/// The position is left alone, so the ball may overlap the edge for a frame.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.y <= 0.0 || ball.pos.y >= config.ball_max_y() {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
        log::trace!("ball bounced off wall at y={}", ball.pos.y);
    }
}

/// Check ball collisions with both paddles, left first.
///
/// A hit overwrites `vel.x` with the fixed speed pointing away from the
/// paddle instead of reflecting it, so staying in contact keeps the same
/// direction.
pub fn collide_with_paddles(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    config: &Config,
    events: &mut Events,
) {
    if ball.pos.x <= left.x + config.paddle_width && within_paddle_span(ball, left, config) {
        ball.vel.x = config.ball_speed;
        events.paddle_hit = Some(PlayerSlot::Left);
    }

    if ball.pos.x >= right.x - config.ball_size && within_paddle_span(ball, right, config) {
        ball.vel.x = -config.ball_speed;
        events.paddle_hit = Some(PlayerSlot::Right);
    }
}

fn within_paddle_span(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    ball.pos.y >= paddle.y && ball.pos.y <= paddle.y + config.paddle_height
}
