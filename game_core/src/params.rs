/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    pub const PADDLE_SPEED: f32 = 5.0; // units per tick
    pub const PADDLE_MARGIN: f32 = 50.0; // gap between screen edge and paddle

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 4.0; // units per tick, both axes

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Frame pacing
    pub const TARGET_FPS: u32 = 60;
    pub const WIN_HOLD_MS: u64 = 2000; // how long the winner banner stays up
}
