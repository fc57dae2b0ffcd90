//! Terminal line chart of the emission breakdown.
//!
//! Mirrors the textual breakdown: categories in display order on the
//! x-axis, annual kg CO₂ on the y-axis, grid lines on, one marker per
//! category joined by interpolated line segments. The y-axis scales to the
//! largest category; an all-zero breakdown renders as a flat baseline.

use colored::*;
use footprintr_common::model::breakdown::{Category, EmissionBreakdown};

use crate::terminal::{colors, print};

const PLOT_HEIGHT: usize = 11;
const COL_SPACING: usize = 14;
const PLOT_WIDTH: usize = (Category::ALL.len() - 1) * COL_SPACING + 1;
const Y_LABEL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Cell {
    Empty,
    HGrid,
    VGrid,
    Line,
    Marker,
}

struct Canvas {
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    fn new() -> Self {
        Self {
            rows: vec![vec![Cell::Empty; PLOT_WIDTH]; PLOT_HEIGHT],
        }
    }

    /// Higher-ranked cells win, so markers sit on top of line segments and
    /// line segments on top of grid lines.
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if cell > self.rows[row][col] {
            self.rows[row][col] = cell;
        }
    }
}

/// Maps a value onto a canvas row; row 0 is the top of the plot.
fn marker_row(value: f64, max: f64) -> usize {
    let baseline = PLOT_HEIGHT - 1;
    if max <= 0.0 {
        return baseline;
    }
    let scaled = (value / max * baseline as f64).round() as usize;
    baseline - scaled.min(baseline)
}

fn category_col(index: usize) -> usize {
    index * COL_SPACING
}

fn build(breakdown: &EmissionBreakdown) -> Canvas {
    let mut canvas = Canvas::new();
    let max = breakdown.max_value();

    for row in (0..PLOT_HEIGHT).step_by(2) {
        for col in 0..PLOT_WIDTH {
            canvas.set(row, col, Cell::HGrid);
        }
    }
    for index in 0..Category::ALL.len() {
        for row in 0..PLOT_HEIGHT {
            canvas.set(row, category_col(index), Cell::VGrid);
        }
    }

    let points: Vec<(usize, usize)> = breakdown
        .iter()
        .enumerate()
        .map(|(index, (_, value))| (category_col(index), marker_row(value, max)))
        .collect();

    for pair in points.windows(2) {
        let (x0, r0) = pair[0];
        let (x1, r1) = pair[1];
        for col in x0..=x1 {
            let t = (col - x0) as f64 / (x1 - x0) as f64;
            let row = (r0 as f64 + (r1 as f64 - r0 as f64) * t).round() as usize;
            canvas.set(row, col, Cell::Line);
        }
    }

    for (col, row) in points {
        canvas.set(row, col, Cell::Marker);
    }

    canvas
}

fn cell_glyph(cell: Cell) -> ColoredString {
    match cell {
        Cell::Empty => " ".normal(),
        Cell::HGrid => "┈".color(colors::CHART_GRID),
        Cell::VGrid => "┊".color(colors::CHART_GRID),
        Cell::Line => "·".color(colors::CHART_LINE),
        Cell::Marker => "●".color(colors::CHART_LINE).bold(),
    }
}

/// Y tick value for a row, interpolated between 0 at the baseline and the
/// breakdown's max at the top.
fn tick_value(row: usize, max: f64) -> f64 {
    let baseline = (PLOT_HEIGHT - 1) as f64;
    max * (baseline - row as f64) / baseline
}

fn x_axis_labels() -> String {
    let offset = Y_LABEL_WIDTH + 2;
    let mut row: Vec<char> = vec![' '; offset + PLOT_WIDTH + Y_LABEL_WIDTH];
    for (index, category) in Category::ALL.iter().enumerate() {
        let label = category.label();
        let center = offset + category_col(index);
        let start = center.saturating_sub(label.len() / 2);
        for (i, ch) in label.chars().enumerate() {
            row[start + i] = ch;
        }
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Draws the whole chart onto the terminal.
pub fn render(breakdown: &EmissionBreakdown) {
    let canvas = build(breakdown);
    let max = breakdown.max_value();

    print::print(&format!(
        "{}{}",
        " ".repeat(Y_LABEL_WIDTH + 2),
        "kg CO₂/year".color(colors::ACCENT).dimmed()
    ));

    for (row_index, row) in canvas.rows.iter().enumerate() {
        let is_tick = row_index == 0 || row_index == PLOT_HEIGHT / 2 || row_index == PLOT_HEIGHT - 1;
        let gutter = if is_tick {
            format!("{:>width$.1} ", tick_value(row_index, max), width = Y_LABEL_WIDTH)
        } else {
            " ".repeat(Y_LABEL_WIDTH + 1)
        };

        let mut line = format!(
            "{}{}",
            gutter.color(colors::TEXT_DEFAULT),
            "┤".color(colors::SEPARATOR)
        );
        for &cell in row {
            line.push_str(&cell_glyph(cell).to_string());
        }
        print::print(&line);
    }

    let mut axis = format!(
        "{}{}",
        " ".repeat(Y_LABEL_WIDTH + 1),
        "└".color(colors::SEPARATOR)
    );
    for col in 0..PLOT_WIDTH {
        let on_category = (0..Category::ALL.len()).any(|index| category_col(index) == col);
        let glyph = if on_category { "┴" } else { "─" };
        axis.push_str(&format!("{}", glyph.color(colors::SEPARATOR)));
    }
    print::print(&axis);

    print::print(&format!("{}", x_axis_labels().color(colors::PRIMARY)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_row_scaling() {
        // Max value sits at the top, zero at the baseline
        assert_eq!(marker_row(100.0, 100.0), 0);
        assert_eq!(marker_row(0.0, 100.0), PLOT_HEIGHT - 1);
        assert_eq!(marker_row(50.0, 100.0), (PLOT_HEIGHT - 1) / 2);
    }

    #[test]
    fn test_all_zero_breakdown_renders_flat_baseline() {
        let breakdown = EmissionBreakdown::new(0.0, 0.0, 0.0, 0.0);
        let canvas = build(&breakdown);

        for index in 0..Category::ALL.len() {
            assert_eq!(
                canvas.rows[PLOT_HEIGHT - 1][category_col(index)],
                Cell::Marker
            );
        }
        // Nothing above the baseline but grid
        for row in &canvas.rows[..PLOT_HEIGHT - 1] {
            assert!(row.iter().all(|&cell| cell != Cell::Marker));
        }
    }

    #[test]
    fn test_markers_land_on_category_columns() {
        let breakdown = EmissionBreakdown::new(838.8, 546.0, 0.0, 0.0);
        let canvas = build(&breakdown);

        assert_eq!(canvas.rows[0][category_col(0)], Cell::Marker);
        assert_eq!(canvas.rows[PLOT_HEIGHT - 1][category_col(2)], Cell::Marker);
        assert_eq!(canvas.rows[PLOT_HEIGHT - 1][category_col(3)], Cell::Marker);

        let travel_row = marker_row(546.0, 838.8);
        assert_eq!(canvas.rows[travel_row][category_col(1)], Cell::Marker);
    }

    #[test]
    fn test_segments_connect_consecutive_markers() {
        let breakdown = EmissionBreakdown::new(100.0, 100.0, 100.0, 100.0);
        let canvas = build(&breakdown);

        // A constant series draws a straight line across the top row
        for col in 0..PLOT_WIDTH {
            assert!(matches!(canvas.rows[0][col], Cell::Line | Cell::Marker));
        }
    }

    #[test]
    fn test_x_axis_labels_in_display_order() {
        let labels = x_axis_labels();
        let electricity = labels.find("Electricity").unwrap();
        let travel = labels.find("Travel").unwrap();
        let air = labels.find("Air Travel").unwrap();
        let lpg = labels.find("LPG").unwrap();

        assert!(electricity < travel && travel < air && air < lpg);
    }

    #[test]
    fn test_canvas_dimensions() {
        let canvas = Canvas::new();
        assert_eq!(canvas.rows.len(), PLOT_HEIGHT);
        assert!(canvas.rows.iter().all(|row| row.len() == PLOT_WIDTH));
    }
}
