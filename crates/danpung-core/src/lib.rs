//! Core types for the danpung autumn stroll.
//!
//! Everything here is host-independent: the image model, the sprite-sheet
//! status table, and the input snapshot that the binary hands to the scene
//! once per tick. No module in this crate touches the terminal, the clock,
//! or a random source.

mod grid;
mod status;

pub use grid::PixelGrid;
pub use status::{StatusEntry, StatusTable};

/// Logical canvas width, in pixels.
pub const SCREEN_W: i32 = 800;

/// Logical canvas height, in pixels.
pub const SCREEN_H: i32 = 400;

/// Target frame rate of the main loop, in ticks per second.
pub const TICK_RATE: u64 = 60;

/// Snapshot of the held movement keys, taken by the host once per tick.
///
/// The scene never polls a keyboard; it only ever sees this.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    /// Walk-left key currently held.
    pub left: bool,
    /// Walk-right key currently held.
    pub right: bool,
}
