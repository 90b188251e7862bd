use danpung_core::InputState;
use danpung_scene::{Parallax, SceneState};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn parallax_scroll_wraps_to_exactly_zero() {
    let tile = danpung_sprites::background_tile();
    let tile_w = tile.width() as f32;
    let mut background = Parallax::new(tile, 800, 400);

    // 0.5 px per tick: two ticks per pixel of tile width.
    let ticks_to_wrap = (tile_w * 2.0) as usize;
    for _ in 0..ticks_to_wrap - 1 {
        background.update(1);
        assert!(background.scroll_x().abs() < tile_w);
        assert_ne!(background.scroll_x(), 0.0);
    }
    background.update(1);
    assert_eq!(background.scroll_x(), 0.0);

    // Same wrap walking the other way.
    for _ in 0..ticks_to_wrap - 1 {
        background.update(-1);
    }
    background.update(-1);
    assert_eq!(background.scroll_x(), 0.0);
}

#[test]
fn parallax_ignores_idle_ticks() {
    let mut background = Parallax::new(danpung_sprites::background_tile(), 800, 400);
    for _ in 0..100 {
        background.update(0);
    }
    assert_eq!(background.scroll_x(), 0.0);
}

#[test]
fn leaf_population_stays_bounded_under_constant_spawning() {
    let mut scene = SceneState::new();
    scene.set_spawn_probability(1.0);
    let mut rng = StdRng::seed_from_u64(42);

    let mut peak = 0;
    for tick in 1..=600u64 {
        scene.update(tick * 16, InputState::default(), &mut rng);
        peak = peak.max(scene.leaf_count());
        // Nothing may linger past the removal line.
        for leaf in scene.leaves() {
            assert!(leaf.position().1 <= 450.0);
        }
    }

    // One spawn per tick, so a population matching the tick count would
    // mean no leaf was ever removed.
    assert!(scene.leaf_count() < 600, "no leaf was removed");
    assert!(peak <= 600);
    assert!(scene.leaf_count() > 0);
}

#[test]
fn scene_without_input_keeps_the_walker_put() {
    let mut scene = SceneState::new();
    let mut rng = StdRng::seed_from_u64(7);
    let start = scene.walker().position();
    for tick in 1..=120u64 {
        let events = scene.update(tick * 16, InputState::default(), &mut rng);
        assert!(!events.stepped);
    }
    assert_eq!(scene.walker().position(), start);
}

#[test]
fn held_input_moves_walker_and_raises_step_events() {
    let mut scene = SceneState::new();
    scene.set_spawn_probability(0.0);
    let mut rng = StdRng::seed_from_u64(7);
    let held = InputState { left: false, right: true };

    let start = scene.walker().position().0;
    let mut stepped = false;
    for tick in 1..=240u64 {
        stepped |= scene.update(tick * 16, held, &mut rng).stepped;
    }
    assert!(stepped, "a sustained walk never raised a footstep");
    assert!(scene.walker().position().0 > start);
}
