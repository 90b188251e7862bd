//! Painting pixel grids into the braille canvas.

use danpung_core::{PixelGrid, SCREEN_H};
use ratatui::widgets::canvas::Painter;

/// Paint a grid with its top-left corner at the given world position.
///
/// World coordinates grow downward; the canvas's y axis grows upward, so
/// rows are flipped here. Pixels that land outside the canvas bounds are
/// clipped by the painter.
pub(crate) fn paint_grid(painter: &mut Painter<'_, '_>, grid: &PixelGrid, left: f64, top: f64) {
    for py in 0..grid.height() {
        for px in 0..grid.width() {
            if let Some(color) = grid.get(px, py) {
                let x = left + px as f64;
                let y = SCREEN_H as f64 - (top + py as f64);
                if let Some((gx, gy)) = painter.get_point(x, y) {
                    painter.paint(gx, gy, color);
                }
            }
        }
    }
}
