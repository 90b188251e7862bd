use danpung_core::InputState;
use danpung_scene::{FRAME_INTERVAL_MS, Walker};
use danpung_sprites::{FRAME_H, FRAME_W, IDLE, WALK_LEFT, WALK_RIGHT};

const SCREEN_W: i32 = 800;

fn walker_at(x: i32) -> Walker {
    Walker::new(
        x,
        364,
        FRAME_W,
        FRAME_H,
        danpung_sprites::character_sheet(),
        danpung_sprites::shadow(),
        danpung_sprites::status_table(),
        SCREEN_W,
    )
}

/// Advance the clock far enough for one animation frame to elapse.
fn step(walker: &mut Walker, now_ms: &mut u64) {
    *now_ms += FRAME_INTERVAL_MS + 10;
    walker.update(*now_ms);
}

#[test]
fn move_to_sets_target_and_walk_status() {
    let mut walker = walker_at(100);
    walker.move_to(3, 0, 0);
    assert_eq!(walker.target().0, 103);
    assert_eq!(walker.status(), WALK_RIGHT);

    let mut walker = walker_at(100);
    walker.move_to(-3, 0, 0);
    assert_eq!(walker.target().0, 97);
    assert_eq!(walker.status(), WALK_LEFT);
}

#[test]
fn move_to_stops_accumulating_once_mid_stride() {
    let mut walker = walker_at(100);
    for _ in 0..10 {
        walker.move_to(3, 0, 0);
    }
    // 100 → 103 → 106 → 109 → 112; at a gap of 12 the gate closes.
    assert_eq!(walker.target().0, 112);
}

#[test]
fn short_walk_snaps_and_settles_to_idle() {
    let mut walker = walker_at(100);
    walker.move_to(3, 0, 0);

    let mut now = 0u64;
    // First frame change: the stride of (103-100)/6 floors to zero, which
    // snaps straight to the target.
    step(&mut walker, &mut now);
    assert_eq!(walker.position().0, 103);
    assert!(walker.took_step());

    // Next frame change notices the arrival and resets to idle.
    step(&mut walker, &mut now);
    assert_eq!(walker.status(), IDLE);
    assert_eq!(walker.frame(), 0);
    assert!(!walker.took_step());
}

#[test]
fn long_walk_converges_from_either_side() {
    for delta in [60i32, -60] {
        let mut walker = walker_at(400);
        // Feed input across several ticks the way held keys would.
        let mut now = 0u64;
        for _ in 0..4 {
            walker.move_to(delta.signum() * 3, 0, now);
        }
        let target = walker.target().0;

        let mut strides = 0;
        for _ in 0..100 {
            step(&mut walker, &mut now);
            if walker.took_step() {
                strides += 1;
            }
            if walker.status() == IDLE {
                break;
            }
        }
        assert_eq!(walker.position().0, target, "did not land on the target");
        assert_eq!(walker.status(), IDLE);
        assert!(strides > 0);
    }
}

#[test]
fn frame_index_stays_within_the_row() {
    let mut walker = walker_at(200);
    let table = danpung_sprites::status_table();
    let mut now = 0u64;
    for tick in 0..200 {
        if tick % 3 == 0 {
            walker.move_to(3, 0, now);
        }
        now += 16;
        walker.update(now);
        let frames = table.get(walker.status()).frames;
        assert!(walker.frame() < frames, "frame {} of {frames}", walker.frame());
    }
}

#[test]
fn direction_clamps_at_the_screen_edges() {
    let left_held = InputState { left: true, right: false };
    let right_held = InputState { left: false, right: true };

    let walker = walker_at(FRAME_W);
    assert_eq!(walker.direction(left_held), 0);
    let walker = walker_at(FRAME_W + 1);
    assert_eq!(walker.direction(left_held), -1);

    let walker = walker_at(SCREEN_W - FRAME_W);
    assert_eq!(walker.direction(right_held), 0);
    let walker = walker_at(SCREEN_W - FRAME_W - 1);
    assert_eq!(walker.direction(right_held), 1);

    let walker = walker_at(400);
    assert_eq!(walker.direction(InputState::default()), 0);
}

#[test]
fn action_walks_toward_held_input() {
    let mut walker = walker_at(400);
    walker.action(InputState { left: false, right: true }, 0);
    assert_eq!(walker.target().0, 403);
    assert_eq!(walker.status(), WALK_RIGHT);

    let mut walker = walker_at(400);
    walker.action(InputState { left: true, right: false }, 0);
    assert_eq!(walker.target().0, 397);
    assert_eq!(walker.status(), WALK_LEFT);
}
