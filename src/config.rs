// Window
pub const WINDOW_TITLE: &str = "glidemenu";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

// Orthographic view volume
pub const VIEW_HALF_WIDTH: f32 = 5.0;
pub const VIEW_HALF_HEIGHT: f32 = 3.375;
pub const VIEW_NEAR: f32 = -1.0;
pub const VIEW_FAR: f32 = 100.0;
pub const CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

// Tile row layout. Entry i rests at (slot_x(i), ENTRY_ROW_Y, ENTRY_PLANE_Z).
pub const ENTRY_SLOT_ORIGIN_X: f32 = -3.25;
pub const ENTRY_SLOT_SPACING_X: f32 = 1.03;
pub const ENTRY_ROW_Y: f32 = -2.0;
pub const ENTRY_PLANE_Z: f32 = -1.0;

#[inline(always)]
pub fn slot_x(index: usize) -> f32 {
    ENTRY_SLOT_ORIGIN_X + index as f32 * ENTRY_SLOT_SPACING_X
}

// Sub-entry layout rules
pub const SUB_ICON_COL_OFFSET: f32 = 0.52;
pub const SUB_ICON_ROW_SPACING: f32 = 0.7;
pub const SUB_ICON_WIDTH_DIVISOR: f32 = 2.1;
pub const SUB_ICON_HEIGHT_DIVISOR: f32 = 1.5;
pub const SUB_TEXT_BASE_OFFSET: f32 = 0.37;
pub const SUB_TEXT_ROW_SPACING: f32 = 0.37;
pub const SUB_TEXT_HEIGHT_DIVISOR: f32 = 3.0;

// Interpolation rates. Per-frame fractions in (0, 1], not scaled by elapsed
// time, so apparent speed tracks the frame rate.
pub const ENTRY_POSITION_RATE: f32 = 0.2;
pub const ENTRY_SCALE_RATE: f32 = 0.2;
pub const SELECTOR_POSITION_RATE: f32 = 0.2;
pub const SELECTOR_SCALE_RATE: f32 = 0.1;
pub const SELECTOR_COLOR_RATE: f32 = 0.1;

// Bounce feedback on focus change. Nudges are applied to x destinations and
// self-revert after BOUNCE_RESTORE_MS.
pub const BOUNCE_NEAR: f32 = 0.1;
pub const BOUNCE_FAR: f32 = 0.2;
pub const BOUNCE_WIDE: f32 = 0.4;
pub const BOUNCE_RESTORE_MS: u64 = 200;

// Show choreography offsets (ms). Tiles return center-out in rings, the two
// edge tiles slide back in after the last ring, the selector follows, and the
// focused entry re-expands last of all.
pub const SHOW_CENTER_MS: u64 = 1;
pub const SHOW_RING_STAGGER_MS: u64 = 200;
pub const SHOW_EDGE_EXTRA_MS: u64 = 100;
pub const SHOW_SELECTOR_EXTRA_MS: u64 = 200;
pub const SHOW_FINALIZE_EXTRA_MS: u64 = 300;

// Hide choreography offsets (ms).
pub const HIDE_SELECTOR_MS: u64 = 1;
pub const HIDE_BASE_MS: u64 = 100;
pub const HIDE_RING_STAGGER_MS: u64 = 50;

// Off-screen parking positions used by the choreography.
pub const ENTRY_HIDDEN_Y: f32 = -6.0;
pub const SELECTOR_HIDDEN_Y: f32 = -6.0;
pub const EDGE_HIDDEN_X: f32 = 7.0;

// Selector and backdrop tint
pub const SELECTOR_COLOR: [f32; 4] = [0.0, 0.7, 0.6, 0.4];
pub const SELECTOR_Z_BIAS: f32 = 0.1;
pub const TINT_POSITION: [f32; 3] = [-5.0, 5.0, -5.0];
pub const TINT_SCALE: [f32; 3] = [10.0, 20.0, 1.0];
pub const TINT_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const TINT_SHOWN_ALPHA: f32 = 0.7;
pub const TINT_HIDDEN_ALPHA: f32 = 0.0;

// Backdrop plane (covers the whole view, far behind the tiles)
pub const BACKDROP_POSITION: [f32; 3] = [-5.0, 3.375, -10.0];
pub const BACKDROP_SCALE: [f32; 3] = [10.0, 6.75, 1.0];

// Tile artwork dimensions (pixels)
pub const ENTRY_TILE_WIDTH: u32 = 240;
pub const ENTRY_TILE_HEIGHT: u32 = 180;
pub const SUB_ICON_TILE_SIZE: u32 = 55;
pub const SUB_TEXT_TILE_WIDTH: u32 = 240;
pub const SUB_TEXT_TILE_HEIGHT: u32 = 60;
pub const TILE_BACKGROUND: [u8; 4] = [0x55, 0x55, 0x55, 0xff];

// Misc
pub const MAX_DELTA_TIME_MS: f32 = 100.0;
