use crate::{Ball, Config, Paddle, PaddleIntent};

/// Apply paddle movement based on intent.
///
/// The edge guard runs before the move, and up wins when both directions
/// are held unless the paddle is already at the top. A single step never
/// carries the paddle past the edge it was guarded against.
pub fn update_paddle(paddle: &mut Paddle, intent: PaddleIntent, config: &Config) {
    let max_y = config.paddle_max_y();

    if intent.up && paddle.y > 0.0 {
        paddle.y = (paddle.y - config.paddle_speed).max(0.0);
    } else if intent.down && paddle.y < max_y {
        paddle.y = (paddle.y + config.paddle_speed).min(max_y);
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
