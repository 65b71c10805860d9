use std::fmt;

use glam::Vec2;

use crate::Config;

/// Which side of the court a player owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    Left,
    Right,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::Left, PlayerSlot::Right];
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::Left => f.write_str("left"),
            PlayerSlot::Right => f.write_str("right"),
        }
    }
}

/// Paddle - a player's bat. `x` is fixed, `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub slot: PlayerSlot,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(slot: PlayerSlot, x: f32, y: f32) -> Self {
        Self { slot, x, y }
    }

    /// Paddle at its fixed column, vertically centred
    pub fn spawn(slot: PlayerSlot, config: &Config) -> Self {
        Self::new(slot, config.paddle_x(slot), config.paddle_spawn_y())
    }
}

/// Ball - `pos` is the top-left corner of its bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the centre heading down and to the right
    pub fn spawn(config: &Config) -> Self {
        Self::new(
            config.center(),
            Vec2::new(config.ball_speed, config.ball_speed),
        )
    }

    /// Put the ball back in the centre after a point.
    ///
    /// The ball always heads down, and horizontally toward the player who
    /// just scored.
    pub fn reset(&mut self, scorer: PlayerSlot, config: &Config) {
        self.pos = config.center();
        let dx = match scorer {
            PlayerSlot::Left => -config.ball_speed,
            PlayerSlot::Right => config.ball_speed,
        };
        self.vel = Vec2::new(dx, config.ball_speed);
    }
}

/// Movement intent for a paddle, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}
