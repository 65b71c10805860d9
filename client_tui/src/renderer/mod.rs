pub mod draw;
pub mod limiter;

use std::io;
use std::thread;
use std::time::Duration;

use game_core::{Color, Config, Presenter};
use limiter::FrameLimiter;
use ratatui::{backend::Backend, Terminal};

/// One buffered draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        color: Color,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    Ellipse {
        color: Color,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    Text {
        text: String,
        color: Color,
        x: f64,
        y: f64,
    },
}

/// [`Presenter`] that paints the logical screen onto a ratatui canvas
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    width: f64,
    height: f64,
    background: Color,
    shapes: Vec<Shape>,
    limiter: FrameLimiter,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>, config: &Config) -> Self {
        Self {
            terminal,
            width: f64::from(config.screen_width),
            height: f64::from(config.screen_height),
            background: Color::SkyBlue,
            shapes: Vec::new(),
            limiter: FrameLimiter::new(config.target_fps),
        }
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.shapes.clear();
    }

    fn fill_rectangle(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32) {
        self.shapes.push(Shape::Rect {
            color,
            x: x.into(),
            y: y.into(),
            w: width.into(),
            h: height.into(),
        });
    }

    fn fill_ellipse(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32) {
        self.shapes.push(Shape::Ellipse {
            color,
            x: x.into(),
            y: y.into(),
            w: width.into(),
            h: height.into(),
        });
    }

    fn draw_text(&mut self, text: &str, color: Color, x: f32, y: f32) {
        self.shapes.push(Shape::Text {
            text: text.to_string(),
            color,
            x: x.into(),
            y: y.into(),
        });
    }

    fn refresh(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            width,
            height,
            background,
            shapes,
            limiter,
        } = self;

        terminal.draw(|frame| draw::draw_frame(frame, shapes, *background, *width, *height))?;
        limiter.wait();
        Ok(())
    }

    fn hold(&mut self, duration: Duration) -> io::Result<()> {
        thread::sleep(duration);
        Ok(())
    }
}

pub fn to_tui_color(color: Color) -> ratatui::style::Color {
    use ratatui::style::Color as Tui;

    match color {
        Color::SkyBlue => Tui::Rgb(135, 206, 235),
        Color::Red => Tui::Rgb(220, 20, 20),
        Color::Blue => Tui::Rgb(20, 40, 220),
        Color::Black => Tui::Rgb(0, 0, 0),
    }
}
