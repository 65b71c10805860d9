pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use render::{Color, Presenter};
pub use resources::*;
pub use systems::*;

/// Advance the ball by one tick.
///
/// Order matters: later steps can override earlier ones within the same
/// tick. Integrate, bounce off walls, left paddle, right paddle, then the
/// left and right exits.
pub fn update_ball(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    score: &mut Score,
    config: &Config,
    events: &mut Events,
) {
    // 1. Move ball
    move_ball(ball);

    // 2. Top and bottom walls
    bounce_off_walls(ball, config, events);

    // 3. Paddles
    collide_with_paddles(ball, left, right, config, events);

    // 4. Check scoring (ball exited court)
    check_scoring(ball, score, config, events);
}
