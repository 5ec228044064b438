use crate::{Coord, Engine, LiveSet};

pub const LIVE_GLYPH: char = '◾';
pub const DEAD_GLYPH: char = '◽';

/// Upper bound on the bytes reserved up front for one frame.
const MAX_RESERVED: usize = 1 << 24;

/// Draws the `rows x cols` window whose top-left corner is `top_left`,
/// one line per row.
pub fn render_viewport(cells: &LiveSet, top_left: Coord, rows: usize, cols: usize) -> String {
    let line = cols.saturating_mul(LIVE_GLYPH.len_utf8()).saturating_add(1);
    let mut s = String::with_capacity(rows.saturating_mul(line).min(MAX_RESERVED));
    for i in (0i64..).take(rows) {
        for j in (0i64..).take(cols) {
            let glyph = if cells.contains(&top_left.moved(i, j)) {
                LIVE_GLYPH
            } else {
                DEAD_GLYPH
            };
            s.push(glyph);
        }
        s.push('\n');
    }
    s
}

/// Draws the engine's seed box; cells that wandered off it are not shown.
pub fn render(engine: &impl Engine) -> String {
    let (rows, cols) = engine.dimensions();
    render_viewport(&engine.current_state(), Coord::default(), rows, cols)
}
