use danpung_sprites::{FRAME_H, FRAME_W, IDLE, WALK_LEFT, WALK_RIGHT};

#[test]
fn sheet_holds_the_full_frame_grid() {
    let sheet = danpung_sprites::character_sheet();
    assert_eq!(sheet.width(), (FRAME_W * 4) as usize);
    assert_eq!(sheet.height(), (FRAME_H * 2) as usize);
}

#[test]
fn status_table_covers_every_reachable_code() {
    let table = danpung_sprites::status_table();
    for code in [IDLE, WALK_RIGHT, WALK_LEFT] {
        let entry = table
            .lookup(code)
            .unwrap_or_else(|| panic!("status {code} missing from table"));
        assert!(entry.frames > 0);
        assert!(entry.row < 2, "row {} outside the sheet", entry.row);
    }
    // Facing is a render-time mirror: both walk codes share one row.
    assert_eq!(table.get(WALK_LEFT).row, table.get(WALK_RIGHT).row);
}

#[test]
fn every_table_frame_slices_to_real_pixels() {
    let sheet = danpung_sprites::character_sheet();
    let table = danpung_sprites::status_table();
    for entry in table.entries() {
        for frame in 0..entry.frames {
            let cell = sheet.slice(
                frame * FRAME_W as usize,
                entry.row * FRAME_H as usize,
                FRAME_W as usize,
                FRAME_H as usize,
            );
            assert!(
                cell.opaque_count() > 0,
                "status {} frame {frame} is blank",
                entry.code
            );
        }
    }
}

#[test]
fn shadow_sits_in_the_lower_rows() {
    let shadow = danpung_sprites::shadow();
    assert_eq!(shadow.width(), FRAME_W as usize);
    assert_eq!(shadow.height(), FRAME_H as usize);
    assert!(shadow.opaque_count() > 0);
    for y in 0..8 {
        for x in 0..shadow.width() {
            assert_eq!(shadow.get(x, y), None, "shadow pixel above the feet");
        }
    }
}

#[test]
fn background_tile_has_solid_ground() {
    let tile = danpung_sprites::background_tile();
    assert_eq!(tile.width(), 64);
    assert_eq!(tile.height(), 48);
    // The ground band must be gapless or tiling would show the sky through.
    for y in 24..48 {
        for x in 0..64 {
            assert!(tile.get(x, y).is_some(), "hole in the ground at {x},{y}");
        }
    }
}
