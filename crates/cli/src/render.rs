//! Presentation adapter: turn a structured grid view into bordered text.
//!
//! The engine only says which cells are occupied or highlighted; everything
//! about boxes and markers lives here.

use pinmap_engine::GridView;
use unicode_width::UnicodeWidthStr;

const CELL_WIDTH: usize = 7;

/// Render a grid view as a bordered text grid. The target zone shows its
/// label bracketed plus a `⦿` marker; other occupied zones show `•`.
pub fn render_grid(view: &GridView) -> String {
    let border = horizontal_border(view.cols);
    let mut out = String::new();

    for row in 0..view.rows {
        out.push_str(&border);
        out.push('\n');

        for col in 0..view.cols {
            let cell = view.cell(row, col);
            let label = cell.zone.to_string();
            let content = if cell.highlighted {
                format!("[{label}]")
            } else if cell.occupied {
                format!("{label} •")
            } else {
                label
            };
            out.push('|');
            out.push_str(&center(&content, CELL_WIDTH));
        }
        out.push_str("|\n");

        for col in 0..view.cols {
            let marker = if view.cell(row, col).highlighted { "⦿" } else { "" };
            out.push('|');
            out.push_str(&center(marker, CELL_WIDTH));
        }
        out.push_str("|\n");
    }

    out.push_str(&border);
    out.push('\n');
    out
}

fn horizontal_border(cols: usize) -> String {
    let mut b = String::new();
    for _ in 0..cols {
        b.push('+');
        b.push_str(&"-".repeat(CELL_WIDTH));
    }
    b.push('+');
    b
}

/// Center `s` in `width` display columns (Unicode width aware — `⦿` is one
/// column but two bytes).
fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(width - w - left))
}
