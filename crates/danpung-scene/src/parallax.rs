//! Parallax-scrolling backdrop.

use danpung_core::PixelGrid;
use ratatui::widgets::canvas::{Painter, Shape};

use crate::paint::paint_grid;

/// Backdrop scroll in pixels per tick of walking — slower than the walker,
/// which is what sells the depth.
const SCROLL_SPEED: f32 = 0.5;

#[derive(Debug)]
pub struct Parallax {
    tile: PixelGrid,
    screen_w: i32,
    screen_h: i32,
    tiles_x: i32,
    scroll_x: f32,
}

impl Parallax {
    pub fn new(tile: PixelGrid, screen_w: i32, screen_h: i32) -> Self {
        let tiles_x = screen_w / tile.width() as i32 + 2;
        Self {
            tile,
            screen_w,
            screen_h,
            tiles_x,
            scroll_x: 0.0,
        }
    }

    /// Scroll with the walking direction; reset once a full tile has passed
    /// so the offset never grows without bound.
    pub fn update(&mut self, direction: i32) {
        self.scroll_x += direction as f32 * SCROLL_SPEED;
        let tile_w = self.tile.width() as f32;
        if self.scroll_x >= tile_w || self.scroll_x <= -tile_w {
            self.scroll_x = 0.0;
        }
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn screen_w(&self) -> i32 {
        self.screen_w
    }
}

impl Shape for Parallax {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let tile_w = self.tile.width() as i32;
        let tile_h = self.tile.height() as i32;
        let top = (self.screen_h - tile_h) as f64;
        // One spare column on each side keeps both scroll directions
        // seamless.
        for x in -1..self.tiles_x {
            let pos_x = (x * tile_w + self.scroll_x as i32) as f64;
            paint_grid(painter, &self.tile, pos_x, top);
        }
    }
}
