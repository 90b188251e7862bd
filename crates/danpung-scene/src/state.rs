//! Scene orchestration: one update per tick, one paint per frame.

use danpung_core::{InputState, SCREEN_H, SCREEN_W};
use danpung_sprites::{FRAME_H, FRAME_W};
use rand::Rng;
use ratatui::widgets::canvas::Context;

use crate::leaf::Leaf;
use crate::parallax::Parallax;
use crate::walker::Walker;

/// Per-tick chance of a new leaf entering at the top of the screen.
const LEAF_SPAWN_PROBABILITY: f64 = 0.05;

/// Ground line the walker stands on.
const GROUND_Y: i32 = SCREEN_H - 36;

/// Things that happened during a tick that the host may react to.
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneEvents {
    /// The walker advanced a stride this tick (footstep cue).
    pub stepped: bool,
}

/// The whole animated scene: walker, backdrop, and the active leaf set.
///
/// This owns every entity and is the sole mutator of leaf membership —
/// insertion on the spawn roll, removal once a leaf falls out of bounds.
#[derive(Debug)]
pub struct SceneState {
    walker: Walker,
    background: Parallax,
    leaves: Vec<Leaf>,
    spawn_probability: f64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        let walker = Walker::new(
            SCREEN_W / 2,
            GROUND_Y,
            FRAME_W,
            FRAME_H,
            danpung_sprites::character_sheet(),
            danpung_sprites::shadow(),
            danpung_sprites::status_table(),
            SCREEN_W,
        );
        let background = Parallax::new(danpung_sprites::background_tile(), SCREEN_W, SCREEN_H);
        Self {
            walker,
            background,
            leaves: Vec::new(),
            spawn_probability: LEAF_SPAWN_PROBABILITY,
        }
    }

    /// Override the per-tick leaf spawn chance; the default matches the
    /// ambient density of the demo.
    pub fn set_spawn_probability(&mut self, probability: f64) {
        self.spawn_probability = probability;
    }

    /// Run one tick of the scene at `now_ms`.
    pub fn update(&mut self, now_ms: u64, input: InputState, rng: &mut impl Rng) -> SceneEvents {
        // The backdrop trails the direction the walker is being steered.
        self.background.update(self.walker.direction(input));

        self.walker.update(now_ms);

        if rng.gen_bool(self.spawn_probability) {
            self.leaves
                .push(Leaf::spawn(rng, SCREEN_W as f32, SCREEN_H as f32));
        }
        for leaf in &mut self.leaves {
            leaf.update(now_ms);
        }
        self.leaves.retain(|leaf| !leaf.expired());

        self.walker.action(input, now_ms);

        SceneEvents {
            stepped: self.walker.took_step(),
        }
    }

    /// Paint the scene back to front: backdrop, walker, leaves.
    pub fn render(&self, ctx: &mut Context<'_>) {
        ctx.draw(&self.background);
        ctx.draw(&self.walker);
        for leaf in &self.leaves {
            ctx.draw(leaf);
        }
    }

    pub fn walker(&self) -> &Walker {
        &self.walker
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }
}
