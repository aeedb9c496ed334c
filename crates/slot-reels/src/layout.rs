//! Screen placement of reel cells

use slot_core::DisplayConfig;

/// Top-left corner of a cell, displaced by the reel's current offset.
///
/// The y coordinate wraps at the screen height so a spinning reel scrolls off
/// the bottom and re-enters at the top.
pub fn cell_position(display: &DisplayConfig, column: usize, row: usize, offset: f32) -> (f32, f32) {
    let height = display.height as f32;
    let x = display.reel_x[column];
    let y = (display.row_y[row] + offset).rem_euclid(height);
    (x, y)
}
