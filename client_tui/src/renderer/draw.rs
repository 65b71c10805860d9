use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Points},
    Frame,
};

use super::{to_tui_color, Shape};

/// Sampling grid of the canvas in logical screen units.
///
/// Half-block markers give one sample per column and two per row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
    pub width: f64,
    pub height: f64,
}

impl Grid {
    pub fn for_area(area: Rect, width: f64, height: f64) -> Self {
        Self {
            cols: area.width,
            rows: area.height.saturating_mul(2),
            width,
            height,
        }
    }

    fn step_x(&self) -> f64 {
        self.width / f64::from(self.cols.max(1))
    }

    fn step_y(&self) -> f64 {
        self.height / f64::from(self.rows.max(1))
    }

    /// Sample centres inside `[start, start + len)` along one axis
    fn samples(start: f64, len: f64, step: f64, count: u16) -> impl Iterator<Item = f64> {
        (0..count)
            .map(move |i| (f64::from(i) + 0.5) * step)
            .filter(move |p| *p >= start && *p < start + len)
    }

    /// Canvas y grows upward; logical y grows downward
    pub fn flip_y(&self, y: f64) -> f64 {
        self.height - y
    }
}

/// Canvas points covering a filled rectangle (top-left origin)
pub fn fill_rect(grid: &Grid, x: f64, y: f64, w: f64, h: f64) -> Vec<(f64, f64)> {
    fill_where(grid, x, y, w, h, |_, _| true)
}

/// Canvas points covering a filled ellipse inscribed in the given box
pub fn fill_ellipse(grid: &Grid, x: f64, y: f64, w: f64, h: f64) -> Vec<(f64, f64)> {
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let (rx, ry) = (w / 2.0, h / 2.0);
    fill_where(grid, x, y, w, h, |px, py| {
        let nx = (px - cx) / rx;
        let ny = (py - cy) / ry;
        nx * nx + ny * ny <= 1.0
    })
}

fn fill_where(
    grid: &Grid,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    inside: impl Fn(f64, f64) -> bool,
) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for py in Grid::samples(y, h, grid.step_y(), grid.rows) {
        for px in Grid::samples(x, w, grid.step_x(), grid.cols) {
            if inside(px, py) {
                points.push((px, grid.flip_y(py)));
            }
        }
    }

    // Shapes smaller than one cell still show up
    if points.is_empty() && w > 0.0 && h > 0.0 {
        points.push((x + w / 2.0, grid.flip_y(y + h / 2.0)));
    }
    points
}

pub fn draw_frame(
    frame: &mut Frame,
    shapes: &[Shape],
    background: game_core::Color,
    width: f64,
    height: f64,
) {
    let area = frame.area();
    let grid = Grid::for_area(area, width, height);

    let canvas = Canvas::default()
        .background_color(to_tui_color(background))
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for shape in shapes {
                match shape {
                    Shape::Rect { color, x, y, w, h } => {
                        let coords = fill_rect(&grid, *x, *y, *w, *h);
                        ctx.draw(&Points {
                            coords: &coords,
                            color: to_tui_color(*color),
                        });
                    }
                    Shape::Ellipse { color, x, y, w, h } => {
                        let coords = fill_ellipse(&grid, *x, *y, *w, *h);
                        ctx.draw(&Points {
                            coords: &coords,
                            color: to_tui_color(*color),
                        });
                    }
                    Shape::Text { .. } => {}
                }
            }

            // Text goes on its own layer above the shapes
            ctx.layer();
            for shape in shapes {
                if let Shape::Text { text, color, x, y } = shape {
                    let line = Line::styled(
                        text.clone(),
                        Style::default()
                            .fg(to_tui_color(*color))
                            .bg(to_tui_color(background)),
                    )
                    .bold();
                    ctx.print(*x, grid.flip_y(*y), line);
                }
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        // 800x600 on 100x30 cells: 8 units per column, 10 per half-row
        Grid::for_area(Rect::new(0, 0, 100, 30), 800.0, 600.0)
    }

    #[test]
    fn test_grid_for_area() {
        let grid = grid();
        assert_eq!(grid.cols, 100);
        assert_eq!(grid.rows, 60);
        assert_eq!(grid.step_x(), 8.0);
        assert_eq!(grid.step_y(), 10.0);
    }

    #[test]
    fn test_fill_rect_covers_paddle() {
        let grid = grid();
        let points = fill_rect(&grid, 50.0, 225.0, 20.0, 150.0);

        // Columns at 52, 60, 68; rows at 225..375 -> 15 samples
        assert_eq!(points.len(), 3 * 15);
        assert!(points
            .iter()
            .all(|(x, y)| *x >= 50.0 && *x < 70.0 && *y <= 600.0 - 225.0 && *y > 600.0 - 375.0));
    }

    #[test]
    fn test_fill_ellipse_is_inside_its_box() {
        let grid = grid();
        let points = fill_ellipse(&grid, 400.0, 300.0, 20.0, 20.0);

        assert!(!points.is_empty());
        for (x, y) in points {
            let logical_y = 600.0 - y;
            assert!((400.0..420.0).contains(&x));
            assert!((300.0..320.0).contains(&logical_y));
        }
    }

    #[test]
    fn test_tiny_shape_still_gets_a_point() {
        let grid = Grid::for_area(Rect::new(0, 0, 10, 5), 800.0, 600.0);
        let points = fill_ellipse(&grid, 401.0, 301.0, 2.0, 2.0);
        assert_eq!(points, vec![(402.0, 600.0 - 302.0)]);
    }

    #[test]
    fn test_shape_outside_grid_has_no_samples_but_fallback() {
        let grid = grid();
        let points = fill_rect(&grid, -30.0, 100.0, 20.0, 20.0);
        assert_eq!(points, vec![(-20.0, 600.0 - 110.0)]);
    }

    #[test]
    fn test_zero_area_draws_nothing() {
        let grid = grid();
        assert!(fill_rect(&grid, 10.0, 10.0, 0.0, 10.0).is_empty());
    }
}
