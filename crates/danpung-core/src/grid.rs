//! Pixel-grid image model.

use ratatui::style::Color;

/// A small image: a rectangle of optional colored pixels.
///
/// `None` cells are transparent and are skipped by [`PixelGrid::blit`], so
/// sprites composite over each other the way alpha-keyed surfaces do. All
/// coordinates are pixel indices with the origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl PixelGrid {
    /// Create a fully transparent grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Build a grid from string art.
    ///
    /// Each row is one line of pixels; the legend maps art characters to
    /// colors. Characters outside the legend (including spaces) stay
    /// transparent. The grid is as wide as the widest row.
    pub fn from_art(rows: &[&str], legend: &[(char, Color)]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if let Some(&(_, color)) = legend.iter().find(|(c, _)| *c == ch) {
                    grid.set(x, y, color);
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read a pixel. Out-of-bounds reads are transparent.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            None
        }
    }

    /// Write a pixel. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = Some(color);
        }
    }

    /// Copy every opaque pixel of `src` onto `self` with its top-left at
    /// `(x, y)`, clipping at the edges.
    pub fn blit(&mut self, src: &PixelGrid, x: i32, y: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                if let Some(color) = src.get(sx, sy) {
                    let dx = x + sx as i32;
                    let dy = y + sy as i32;
                    if dx >= 0 && dy >= 0 {
                        self.set(dx as usize, dy as usize, color);
                    }
                }
            }
        }
    }

    /// Copy out the `w`×`h` sub-image whose top-left is at `(x, y)`.
    ///
    /// Regions reaching past the source edge come back transparent, so a
    /// sprite-sheet frame is always exactly `w`×`h`.
    pub fn slice(&self, x: usize, y: usize, w: usize, h: usize) -> PixelGrid {
        let mut out = PixelGrid::new(w, h);
        for sy in 0..h {
            for sx in 0..w {
                if let Some(color) = self.get(x + sx, y + sy) {
                    out.set(sx, sy, color);
                }
            }
        }
        out
    }

    /// Horizontally mirrored copy.
    pub fn mirrored(&self) -> PixelGrid {
        let mut out = PixelGrid::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(color) = self.get(x, y) {
                    out.set(self.width - 1 - x, y, color);
                }
            }
        }
        out
    }

    /// Copy rotated by `degrees` about the center, sampled nearest-neighbor.
    ///
    /// The output expands to the rotated bounding box, so a rotated sprite
    /// must be re-centered by the caller.
    pub fn rotated(&self, degrees: f32) -> PixelGrid {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        let w = self.width as f32;
        let h = self.height as f32;
        let out_w = (w * cos.abs() + h * sin.abs()).ceil() as usize;
        let out_h = (w * sin.abs() + h * cos.abs()).ceil() as usize;
        let cx = w / 2.0;
        let cy = h / 2.0;
        let ocx = out_w as f32 / 2.0;
        let ocy = out_h as f32 / 2.0;

        let mut out = PixelGrid::new(out_w, out_h);
        for oy in 0..out_h {
            for ox in 0..out_w {
                // Inverse-map the output pixel back into source space.
                let rel_x = ox as f32 + 0.5 - ocx;
                let rel_y = oy as f32 + 0.5 - ocy;
                let sx = rel_x * cos - rel_y * sin + cx;
                let sy = rel_x * sin + rel_y * cos + cy;
                if sx >= 0.0 && sy >= 0.0 {
                    if let Some(color) = self.get(sx as usize, sy as usize) {
                        out.set(ox, oy, color);
                    }
                }
            }
        }
        out
    }

    /// Number of opaque pixels.
    pub fn opaque_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
