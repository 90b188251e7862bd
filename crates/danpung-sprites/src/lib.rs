//! Compiled-in pixel art for the danpung autumn stroll.
//!
//! The character sheet, the shadow and the parallax tile are authored as
//! string art and built into [`PixelGrid`]s at startup. Frames are laid out
//! the way a sprite-sheet image would be: frames left to right, one sheet
//! row per animation, so the walker slices its current frame out of one big
//! grid.

use danpung_core::{PixelGrid, StatusEntry, StatusTable};
use ratatui::style::Color;

/// Width of one character frame, in pixels.
pub const FRAME_W: i32 = 16;

/// Height of one character frame, in pixels.
pub const FRAME_H: i32 = 16;

/// Status code for the idle animation.
pub const IDLE: i32 = 0;

/// Status code for walking while facing right.
pub const WALK_RIGHT: i32 = 4;

/// Status code for walking while facing left (walk row, mirrored).
pub const WALK_LEFT: i32 = -4;

const HAIR: Color = Color::Rgb(88, 56, 34);
const SKIN: Color = Color::Rgb(238, 198, 160);
const COAT: Color = Color::Rgb(168, 52, 38);
const PANTS: Color = Color::Rgb(64, 56, 84);
const BOOTS: Color = Color::Rgb(46, 34, 24);
const SHADOW: Color = Color::Rgb(26, 24, 22);

const TRUNK: Color = Color::Rgb(94, 66, 42);
const CANOPY: Color = Color::Rgb(206, 116, 38);
const CANOPY_DEEP: Color = Color::Rgb(172, 66, 38);
const CANOPY_GOLD: Color = Color::Rgb(222, 172, 62);
const GRASS: Color = Color::Rgb(122, 108, 48);
const GRASS_DARK: Color = Color::Rgb(96, 86, 38);
const FALLEN: Color = Color::Rgb(202, 112, 40);

const CHARACTER_LEGEND: [(char, Color); 5] = [
    ('h', HAIR),
    ('s', SKIN),
    ('c', COAT),
    ('p', PANTS),
    ('b', BOOTS),
];

const SHADOW_LEGEND: [(char, Color); 1] = [('z', SHADOW)];

const TILE_LEGEND: [(char, Color); 4] = [
    ('T', TRUNK),
    ('l', CANOPY),
    ('L', CANOPY_DEEP),
    ('y', CANOPY_GOLD),
];

/// Idle animation, two frames: at rest, and a one-pixel breathing dip.
const IDLE_FRAMES: [[&str; 16]; 2] = [
    [
        "                ",
        "     hhhhhh     ",
        "    hhhhhhhh    ",
        "    hhssssss    ",
        "    hssssss     ",
        "     ssss       ",
        "    cccccccc    ",
        "   cccccccccc   ",
        "   cc cccc cc   ",
        "   ss cccc ss   ",
        "     cccccc     ",
        "     pppppp     ",
        "     pp  pp     ",
        "     pp  pp     ",
        "    bbb  bbb    ",
        "                ",
    ],
    [
        "                ",
        "                ",
        "     hhhhhh     ",
        "    hhhhhhhh    ",
        "    hhssssss    ",
        "    hssssss     ",
        "    cccccccc    ",
        "   cccccccccc   ",
        "   cc cccc cc   ",
        "   ss cccc ss   ",
        "     cccccc     ",
        "     pppppp     ",
        "     pp  pp     ",
        "     pp  pp     ",
        "    bbb  bbb    ",
        "                ",
    ],
];

/// Walk cycle facing right, four frames: contact, passing, contact shifted,
/// passing with a bob. The left-facing walk is this row mirrored.
const WALK_FRAMES: [[&str; 16]; 4] = [
    [
        "                ",
        "     hhhhhh     ",
        "    hhhhhhhh    ",
        "    hhssssss    ",
        "    hssssss     ",
        "     ssss       ",
        "    cccccccc    ",
        "   cccccccccc   ",
        "   cc cccc cc   ",
        "   ss cccc ss   ",
        "     cccccc     ",
        "     pppppp     ",
        "    pp    pp    ",
        "   pp      pp   ",
        "  bbb      bbb  ",
        "                ",
    ],
    [
        "                ",
        "     hhhhhh     ",
        "    hhhhhhhh    ",
        "    hhssssss    ",
        "    hssssss     ",
        "     ssss       ",
        "    cccccccc    ",
        "   cccccccccc   ",
        "   cc cccc cc   ",
        "   ss cccc ss   ",
        "     cccccc     ",
        "     pppppp     ",
        "     pppp       ",
        "     pp pp      ",
        "    bbb bbb     ",
        "                ",
    ],
    [
        "                ",
        "     hhhhhh     ",
        "    hhhhhhhh    ",
        "    hhssssss    ",
        "    hssssss     ",
        "     ssss       ",
        "    cccccccc    ",
        "   cccccccccc   ",
        "   cc cccc cc   ",
        "   ss cccc ss   ",
        "     cccccc     ",
        "     pppppp     ",
        "     pp   pp    ",
        "    pp     pp   ",
        "   bbb     bbb  ",
        "                ",
    ],
    [
        "                ",
        "                ",
        "     hhhhhh     ",
        "    hhhhhhhh    ",
        "    hhssssss    ",
        "    hssssss     ",
        "    cccccccc    ",
        "   cccccccccc   ",
        "   cc cccc cc   ",
        "   ss cccc ss   ",
        "     cccccc     ",
        "     pppppp     ",
        "     pppp       ",
        "     pp pp      ",
        "    bbb bbb     ",
        "                ",
    ],
];

/// Static drop shadow, blitted two pixels below the character frame.
const SHADOW_ART: [&str; 16] = [
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "                ",
    "     zzzzzz     ",
    "   zzzzzzzzzz   ",
    "     zzzzzz     ",
];

/// Scenery half of the parallax tile: two maples on a 64-pixel strip.
/// The ground half below it is filled by [`background_tile`].
const TILE_ART: [&str; 24] = [
    "                                                                ",
    "              lllllllllll                                       ",
    "           lLlllllllllllLllll                                   ",
    "         llLllllyllllllLllllll                                  ",
    "        lllLllllllyylllllLlllll                                 ",
    "        lLlllllLllllllllylllLll                                 ",
    "         lllllLyllllllllllllll  yyyyyyyyy                       ",
    "          lllllllllllllllllll   yylyyyyyylyyy                   ",
    "            lllLllllllllLll     yyyylyyyyyylyyy                 ",
    "              lllllllllll       ylyyyyyllyyyyyy                 ",
    "                llTTTll          yyyyylyyyyyy                   ",
    "                  TTT             yyyyyyyyy                     ",
    "                  TTT               yTTTy                       ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                  TTT                TTT                        ",
    "                 TTTTT              TTTTT                       ",
];

const TILE_W: usize = 64;
const TILE_H: usize = 48;
/// First ground row of the tile; everything above is scenery.
const GROUND_ROW: usize = 24;

/// The status table describing the character sheet.
///
/// Covers every status the walker's state machine can produce: idle, and
/// the walk row under both facings.
pub fn status_table() -> StatusTable {
    StatusTable::new(&[
        StatusEntry { code: IDLE, row: 0, frames: 2 },
        StatusEntry { code: WALK_RIGHT, row: 1, frames: 4 },
        StatusEntry { code: WALK_LEFT, row: 1, frames: 4 },
    ])
}

/// Build the character sprite sheet: idle row on top, walk row below,
/// frames left to right.
pub fn character_sheet() -> PixelGrid {
    let mut sheet = PixelGrid::new((FRAME_W * 4) as usize, (FRAME_H * 2) as usize);
    for (i, art) in IDLE_FRAMES.iter().enumerate() {
        let frame = PixelGrid::from_art(art, &CHARACTER_LEGEND);
        sheet.blit(&frame, i as i32 * FRAME_W, 0);
    }
    for (i, art) in WALK_FRAMES.iter().enumerate() {
        let frame = PixelGrid::from_art(art, &CHARACTER_LEGEND);
        sheet.blit(&frame, i as i32 * FRAME_W, FRAME_H);
    }
    sheet
}

/// Build the static shadow image.
pub fn shadow() -> PixelGrid {
    PixelGrid::from_art(&SHADOW_ART, &SHADOW_LEGEND)
}

/// Build one parallax background tile.
///
/// The scenery strip comes from [`TILE_ART`]; the ground below it is a
/// dithered grass band speckled with fallen leaves. The speckle is hashed
/// from the pixel position so every tile is identical and the seam between
/// neighbouring tiles stays invisible.
pub fn background_tile() -> PixelGrid {
    let mut tile = PixelGrid::new(TILE_W, TILE_H);
    for y in GROUND_ROW..TILE_H {
        for x in 0..TILE_W {
            let mixed = x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17));
            let color = if mixed % 23 == 0 {
                FALLEN
            } else if mixed % 5 == 0 {
                GRASS_DARK
            } else {
                GRASS
            };
            tile.set(x, y, color);
        }
    }
    tile.blit(&PixelGrid::from_art(&TILE_ART, &TILE_LEGEND), 0, 0);
    tile
}
