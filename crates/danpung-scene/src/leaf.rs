//! Falling-leaf particle.
//!
//! Each leaf owns its own physics (fall speed, sideways drift, a sinusoidal
//! sway) and a shape morph: a fold amount in [0, 1] that squeezes the drawn
//! body, and a flip flag that collapses it to an edge-on silhouette. Both
//! are pure functions of the clock, recomputed every update, and the base
//! image is redrawn every tick — the morph is continuous and the visual
//! continuity depends on that.

use std::f32::consts::TAU;

use danpung_core::PixelGrid;
use rand::Rng;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

use crate::paint::paint_grid;

/// Autumn palette the spawner picks from: orange, tan, tomato, rust.
pub const LEAF_COLORS: [Color; 4] = [
    Color::Rgb(255, 165, 0),
    Color::Rgb(222, 184, 135),
    Color::Rgb(255, 99, 71),
    Color::Rgb(200, 80, 50),
];

const STEM_COLOR: Color = Color::Rgb(101, 67, 33);
const VEIN_COLOR: Color = Color::Rgb(139, 69, 19);

/// Frames longer than this are treated as a stall, not a huge step.
const STALL_MS: u64 = 100;
/// Reference frame duration: a time factor of 1.0 means one 60 Hz frame.
const BASE_FRAME_MS: f32 = 16.0;
/// How far below the bottom edge a leaf may fall before it is removed.
const EXPIRY_MARGIN: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct Leaf {
    x: f32,
    y: f32,
    size: i32,
    color: Color,
    speed_y: f32,
    speed_x: f32,
    oscillation_amplitude: f32,
    oscillation_frequency: f32,
    oscillation_offset: f32,
    rotation: f32,
    rotation_speed: f32,
    shape_speed: f32,
    shape_phase: f32,
    fold: f32,
    flip: bool,
    bounds_h: f32,
    last_update_ms: u64,
    image: PixelGrid,
}

impl Leaf {
    /// Spawn a leaf just above the visible area with randomized physics.
    pub fn spawn(rng: &mut impl Rng, bounds_w: f32, bounds_h: f32) -> Self {
        let size = rng.gen_range(8..=15);
        let color = LEAF_COLORS[rng.gen_range(0..LEAF_COLORS.len())];
        Self {
            x: rng.gen_range(0.0..=bounds_w),
            y: rng.gen_range(-100.0..=-10.0),
            size,
            color,
            speed_y: rng.gen_range(0.5..2.0),
            speed_x: rng.gen_range(-0.5..0.5),
            oscillation_amplitude: rng.gen_range(0.5..2.0),
            oscillation_frequency: rng.gen_range(0.02..0.05),
            oscillation_offset: rng.gen_range(0.0..TAU),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-2.0..2.0),
            shape_speed: rng.gen_range(0.5..2.0),
            shape_phase: rng.gen_range(0.0..TAU),
            fold: 0.0,
            flip: false,
            bounds_h,
            last_update_ms: 0,
            image: leaf_image(size, color, 0.0, false),
        }
    }

    /// Advance the leaf to `now_ms`: fall, sway, drift, rotate, and re-render
    /// the morphing shape.
    pub fn update(&mut self, now_ms: u64) {
        if self.last_update_ms == 0 {
            self.last_update_ms = now_ms;
        }
        let mut delta = now_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = now_ms;
        if delta > STALL_MS {
            delta = BASE_FRAME_MS as u64;
        }
        let tf = delta as f32 / BASE_FRAME_MS;
        let t = now_ms as f32 * 0.001;

        self.y += self.speed_y * tf;
        self.x += self.oscillation_amplitude
            * (t * self.oscillation_frequency + self.oscillation_offset).sin()
            * tf;
        self.x += self.speed_x * tf;

        self.rotation += self.rotation_speed * tf;
        if self.rotation >= 360.0 {
            self.rotation -= 360.0;
        } else if self.rotation < 0.0 {
            self.rotation += 360.0;
        }

        self.fold = ((t * self.shape_speed + self.shape_phase).sin() + 1.0) / 2.0;
        self.flip = (t * self.shape_speed * 0.7 + self.shape_phase).sin() > 0.5;

        self.image = leaf_image(self.size, self.color, self.fold, self.flip)
            .rotated(self.rotation);
    }

    /// A leaf is done once it has fallen well past the bottom edge. Removal
    /// is the orchestrator's job; this is the only destruction condition.
    pub fn expired(&self) -> bool {
        self.y > self.bounds_h + EXPIRY_MARGIN
    }

    /// Reposition the leaf.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn fold(&self) -> f32 {
        self.fold
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

impl Shape for Leaf {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        // The rotated image grows with the angle; keep it centered on (x, y).
        let left = self.x as f64 - self.image.width() as f64 / 2.0;
        let top = self.y as f64 - self.image.height() as f64 / 2.0;
        paint_grid(painter, &self.image, left, top);
    }
}

/// Draw a leaf onto a transparent 2×size canvas.
///
/// Pure in (size, color, fold, flip): the body is an ellipse whose height
/// shrinks and width grows as the fold rises, with a short stem and up to
/// three veins that fade toward the body color and drop out past folds of
/// 0.5 and 0.7. A flipped leaf is an edge-on silhouette with no veins.
pub fn leaf_image(size: i32, color: Color, fold: f32, flip: bool) -> PixelGrid {
    let s = size as f32;
    let mut grid = PixelGrid::new((size * 2) as usize, (size * 2) as usize);

    if flip {
        fill_ellipse(&mut grid, s, 0.75 * s, 0.7 * s, 0.22 * s, color);
        vline(&mut grid, size as usize, 1.5 * s, 1.8 * s, 2, STEM_COLOR);
        return grid;
    }

    let rx = s * (1.0 + 0.4 * fold) / 2.0;
    let ry = 1.5 * s * (1.0 - 0.6 * fold) / 2.0;
    fill_ellipse(&mut grid, s, 0.75 * s, rx, ry, color);

    vline(&mut grid, size as usize, 1.5 * s, 1.8 * s, 2, STEM_COLOR);

    let vein = blend(VEIN_COLOR, color, fold);
    vline(&mut grid, size as usize, 0.3 * s, 1.3 * s, 1, vein);
    if fold < 0.5 {
        hline(&mut grid, 0.6 * s, 0.7 * s, 1.3 * s, vein);
    }
    if fold < 0.7 {
        hline(&mut grid, 0.9 * s, 0.7 * s, 1.3 * s, vein);
    }

    grid
}

fn fill_ellipse(grid: &mut PixelGrid, cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let y0 = (cy - ry).floor().max(0.0) as usize;
    let y1 = (cy + ry).ceil() as usize;
    let x0 = (cx - rx).floor().max(0.0) as usize;
    let x1 = (cx + rx).ceil() as usize;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                grid.set(x, y, color);
            }
        }
    }
}

fn vline(grid: &mut PixelGrid, x: usize, y0: f32, y1: f32, width: usize, color: Color) {
    for y in y0.round() as usize..=y1.round() as usize {
        for w in 0..width {
            grid.set(x + w, y, color);
        }
    }
}

fn hline(grid: &mut PixelGrid, y: f32, x0: f32, x1: f32, color: Color) {
    let y = y.round() as usize;
    for x in x0.round() as usize..=x1.round() as usize {
        grid.set(x, y, color);
    }
}

/// Linear blend between two RGB colors; stands in for vein alpha, which a
/// cell grid cannot express directly.
fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => from,
    }
}
