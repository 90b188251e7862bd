//! Sprite-sheet character animation and locomotion.
//!
//! The walker is a frame-index animator over a sheet of fixed-size frames
//! plus a target-seeking horizontal mover: input nudges a target x, and the
//! position eases toward it a stride at a time while the walk row plays.
//! Status codes select the sheet row; the sign selects the facing, with
//! negative codes rendered mirrored.

use danpung_core::{InputState, PixelGrid, StatusTable};
use danpung_sprites::{IDLE, WALK_LEFT, WALK_RIGHT};
use ratatui::widgets::canvas::{Painter, Shape};

use crate::paint::paint_grid;

/// Milliseconds between animation frames.
pub const FRAME_INTERVAL_MS: u64 = 60;

/// Pixels the walk target advances per tick of held input.
const PLAYER_SPEED: i32 = 3;

/// Input is ignored unless the walker is within this many pixels of its
/// target — strides commit before new ones queue up.
const ARRIVE_WINDOW: i32 = 10;

#[derive(Debug)]
pub struct Walker {
    p_x: i32,
    p_y: i32,
    t_x: i32,
    t_y: i32,
    frame_w: i32,
    frame_h: i32,
    screen_w: i32,
    sheet: PixelGrid,
    shadow: PixelGrid,
    table: StatusTable,
    status: i32,
    frame: usize,
    old_frame: Option<usize>,
    last_frame_ms: u64,
    image: PixelGrid,
    stepped: bool,
}

impl Walker {
    pub fn new(
        x: i32,
        y: i32,
        frame_w: i32,
        frame_h: i32,
        sheet: PixelGrid,
        shadow: PixelGrid,
        table: StatusTable,
        screen_w: i32,
    ) -> Self {
        let mut walker = Self {
            p_x: x,
            p_y: y,
            t_x: x,
            t_y: y,
            frame_w,
            frame_h,
            screen_w,
            sheet,
            shadow,
            table,
            status: IDLE,
            frame: 0,
            old_frame: None,
            last_frame_ms: 0,
            image: PixelGrid::new(0, 0),
            stepped: false,
        };
        walker.compose_frame();
        walker
    }

    /// Switch animations: reset the frame index and the frame timer.
    pub fn set_status(&mut self, status: i32, now_ms: u64) {
        self.status = status;
        self.frame = 0;
        self.last_frame_ms = now_ms;
    }

    /// Nudge the walk target. Only takes effect while the walker is at (or
    /// near) its current target; mid-stride input is ignored.
    pub fn move_to(&mut self, delta_x: i32, delta_y: i32, now_ms: u64) {
        if (self.p_x - self.t_x).abs() < ARRIVE_WINDOW {
            if delta_x > 0 {
                self.set_status(WALK_RIGHT, now_ms);
            } else if delta_x < 0 {
                self.set_status(WALK_LEFT, now_ms);
            }
            self.t_x += delta_x;
            self.p_y += delta_y;
        }
    }

    /// Advance the animation to `now_ms` and, on a frame change, take one
    /// stride toward the target and recompose the displayed frame.
    pub fn update(&mut self, now_ms: u64) {
        self.stepped = false;
        if now_ms > self.last_frame_ms + FRAME_INTERVAL_MS {
            self.frame = (self.frame + 1) % self.table.get(self.status).frames;
            self.last_frame_ms = now_ms;
        }

        if self.old_frame != Some(self.frame) {
            if (self.p_x - self.t_x).abs() <= 1 {
                self.p_x = self.t_x;
                self.p_y = self.t_y;
                self.set_status(IDLE, now_ms);
            } else {
                self.stepped = true;
                // Floor division eases symmetrically from both sides; a step
                // that floors to zero snaps straight to the target.
                let step = (self.t_x - self.p_x).div_euclid(6);
                if step == 0 {
                    self.p_x = self.t_x;
                }
                self.p_x += step;
            }
            self.compose_frame();
            self.old_frame = Some(self.frame);
        }
    }

    /// Direction of held input, clamped so the walker cannot leave the
    /// screen: -1 left, 1 right, 0 idle.
    pub fn direction(&self, input: InputState) -> i32 {
        if input.left && self.p_x > self.frame_w {
            -1
        } else if input.right && self.p_x < self.screen_w - self.frame_w {
            1
        } else {
            0
        }
    }

    /// Autonomous per-tick movement: steer toward whichever direction is
    /// held.
    pub fn action(&mut self, input: InputState, now_ms: u64) {
        match self.direction(input) {
            -1 => self.move_to(-PLAYER_SPEED, 0, now_ms),
            1 => self.move_to(PLAYER_SPEED, 0, now_ms),
            _ => {}
        }
    }

    /// Slice the current frame out of the sheet, mirror it for negative
    /// statuses, and compose it over the shadow.
    fn compose_frame(&mut self) {
        let entry = self.table.get(self.status);
        let frame = self.frame % entry.frames;
        let fx = frame * self.frame_w as usize;
        let fy = entry.row * self.frame_h as usize;
        let mut cell = self
            .sheet
            .slice(fx, fy, self.frame_w as usize, self.frame_h as usize);
        if self.status < 0 {
            cell = cell.mirrored();
        }
        let mut composed = PixelGrid::new(self.frame_w as usize, self.frame_h as usize + 2);
        composed.blit(&self.shadow, 0, 2);
        composed.blit(&cell, 0, 0);
        self.image = composed;
    }

    /// Whether the last `update` advanced a stride (footstep cue).
    pub fn took_step(&self) -> bool {
        self.stepped
    }

    pub fn position(&self) -> (i32, i32) {
        (self.p_x, self.p_y)
    }

    pub fn target(&self) -> (i32, i32) {
        (self.t_x, self.t_y)
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl Shape for Walker {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let left = (self.p_x - self.frame_w / 2) as f64;
        let top = (self.p_y - self.frame_h / 2) as f64;
        paint_grid(painter, &self.image, left, top);
    }
}
