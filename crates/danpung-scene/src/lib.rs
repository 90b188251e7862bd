//! Animation core for the danpung autumn stroll.
//!
//! Three moving parts, composed by [`SceneState`] once per tick: the falling
//! leaves, the walking character, and the parallax backdrop. Updates take an
//! explicit millisecond clock and random source so the whole scene simulates
//! deterministically without a terminal.

mod leaf;
mod paint;
mod parallax;
mod state;
mod walker;

pub use leaf::{Leaf, LEAF_COLORS, leaf_image};
pub use parallax::Parallax;
pub use state::{SceneEvents, SceneState};
pub use walker::{FRAME_INTERVAL_MS, Walker};
