use glam::Vec2;

use crate::{Params, PlayerSlot};

/// Game configuration
///
/// Built once before a match and never mutated afterwards; every system
/// reads its geometry and speeds from here instead of global constants.
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub target_fps: u32,
    pub win_hold_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            target_fps: Params::TARGET_FPS,
            win_hold_ms: Params::WIN_HOLD_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for the paddle in the given slot
    pub fn paddle_x(&self, slot: PlayerSlot) -> f32 {
        match slot {
            PlayerSlot::Left => self.paddle_margin,
            PlayerSlot::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Lowest allowed paddle top edge
    pub fn paddle_max_y(&self) -> f32 {
        self.screen_height - self.paddle_height
    }

    /// Paddle top edge that centres it vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Ball spawn and reset point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// X at which the ball touches the right edge
    pub fn ball_max_x(&self) -> f32 {
        self.screen_width - self.ball_size
    }

    /// Y at which the ball touches the bottom edge
    pub fn ball_max_y(&self) -> f32 {
        self.screen_height - self.ball_size
    }
}

/// Per-match settings collected before the loop starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub left_name: String,
    pub right_name: String,
    pub winning_score: u32,
}

impl MatchConfig {
    pub fn new(
        left_name: impl Into<String>,
        right_name: impl Into<String>,
        winning_score: u32,
    ) -> Self {
        Self {
            left_name: left_name.into(),
            right_name: right_name.into(),
            winning_score,
        }
    }

    pub fn name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::Left => &self.left_name,
            PlayerSlot::Right => &self.right_name,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new("Left Player", "Right Player", Params::WIN_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(PlayerSlot::Left), 50.0, "Left paddle X position");
        assert_eq!(config.paddle_x(PlayerSlot::Right), 730.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_bounds() {
        let config = Config::new();
        assert_eq!(config.paddle_max_y(), 450.0);
        assert_eq!(config.paddle_spawn_y(), 225.0);
        assert!(config.paddle_spawn_y() <= config.paddle_max_y());
    }

    #[test]
    fn test_config_center() {
        let config = Config::new();
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
        assert_eq!(config.ball_max_x(), 780.0);
        assert_eq!(config.ball_max_y(), 580.0);
    }

    #[test]
    fn test_match_config_name_by_slot() {
        let setup = MatchConfig::new("Ada", "Grace", 3);
        assert_eq!(setup.name(PlayerSlot::Left), "Ada");
        assert_eq!(setup.name(PlayerSlot::Right), "Grace");
        assert_eq!(setup.winning_score, 3);
    }
}
