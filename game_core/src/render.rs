//! Frame composition
//!
//! Translates match state into primitive draw calls. The presenter owns the
//! pixels; this module only decides what goes where and in which colour.

use std::io;
use std::time::Duration;

use crate::{Ball, Config, MatchConfig, Paddle, PlayerSlot, Score};

/// Palette used by the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    SkyBlue,
    Red,
    Blue,
    Black,
}

/// Drawing surface driven once per tick.
///
/// Coordinates are logical screen units with the origin at the top-left.
pub trait Presenter {
    fn clear(&mut self, color: Color);

    fn fill_rectangle(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32);

    fn fill_ellipse(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32);

    fn draw_text(&mut self, text: &str, color: Color, x: f32, y: f32);

    /// Show the frame and wait out the rest of the frame budget
    fn refresh(&mut self) -> io::Result<()>;

    /// Keep the current frame on screen for `duration`
    fn hold(&mut self, duration: Duration) -> io::Result<()>;
}

const TEXT_MARGIN: f32 = 20.0;
const RIGHT_COLUMN_WIDTH: f32 = 200.0;
const SCORE_ROW: f32 = 20.0;
const NAME_ROW: f32 = 50.0;

/// Everything the presenter needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub config: &'a Config,
    pub setup: &'a MatchConfig,
    pub left: &'a Paddle,
    pub right: &'a Paddle,
    pub ball: &'a Ball,
    pub score: &'a Score,
}

/// Draw background, paddles, ball, scores and names
pub fn draw_scene<P: Presenter + ?Sized>(presenter: &mut P, scene: &Scene<'_>) {
    let config = scene.config;

    presenter.clear(Color::SkyBlue);

    for paddle in [scene.left, scene.right] {
        presenter.fill_rectangle(
            paddle_color(paddle, config),
            paddle.x,
            paddle.y,
            config.paddle_width,
            config.paddle_height,
        );
    }

    presenter.fill_ellipse(
        Color::Black,
        scene.ball.pos.x,
        scene.ball.pos.y,
        config.ball_size,
        config.ball_size,
    );

    for slot in PlayerSlot::ALL {
        let x = label_x(slot, config);
        let label = slot_label(slot);
        presenter.draw_text(
            &format!("{label}: {}", scene.score.get(slot)),
            Color::Black,
            x,
            SCORE_ROW,
        );
        presenter.draw_text(
            &format!("{label}: {}", scene.setup.name(slot)),
            Color::Black,
            x,
            NAME_ROW,
        );
    }
}

/// Winner banner in the middle of the screen
pub fn draw_winner<P: Presenter + ?Sized>(
    presenter: &mut P,
    config: &Config,
    setup: &MatchConfig,
    winner: PlayerSlot,
) {
    let center = config.center();
    presenter.draw_text(&winner_text(setup, winner), Color::Red, center.x, center.y);
}

pub fn winner_text(setup: &MatchConfig, winner: PlayerSlot) -> String {
    format!("{} Wins!", setup.name(winner))
}

// Colour follows which half of the court the paddle sits in.
fn paddle_color(paddle: &Paddle, config: &Config) -> Color {
    if paddle.x < config.screen_width / 2.0 {
        Color::Red
    } else {
        Color::Blue
    }
}

fn label_x(slot: PlayerSlot, config: &Config) -> f32 {
    match slot {
        PlayerSlot::Left => TEXT_MARGIN,
        PlayerSlot::Right => config.screen_width - RIGHT_COLUMN_WIDTH,
    }
}

fn slot_label(slot: PlayerSlot) -> &'static str {
    match slot {
        PlayerSlot::Left => "Left Player",
        PlayerSlot::Right => "Right Player",
    }
}
