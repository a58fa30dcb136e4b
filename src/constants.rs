/// Default settings and fixed tuning values for the frame grid.
///
/// Kept free of web-sys types so host tests can `include!` this file.
// Starting values
pub const DEFAULT_FRAME_AMOUNT: u32 = 200; // frames rendered on first load
pub const DEFAULT_FRAME_SIZE: u32 = 70; // px, width and height of each frame
pub const DEFAULT_STEP_SIZE: u32 = 10; // px added/removed per resize key

// Bounds
pub const DEFAULT_MIN_FRAMES: u32 = 1;
pub const DEFAULT_MAX_FRAMES: u32 = 800;
pub const DEFAULT_MIN_FRAME_SIZE: u32 = 10; // px

// Timing
pub const REVEAL_TICK_MS: u32 = 10; // one frame becomes visible per tick
pub const TOAST_DURATION_MS: u32 = 2000;

// Colors
pub const HEX_DIGITS: usize = 6;
pub const COLOR_SPACE: f64 = 16_777_216.0; // 16^6

// DOM contract
pub const FRAMES_ID: &str = "frames";
pub const INFO_SELECTOR: &str = "header .info";
pub const HEADER_SELECTOR: &str = "header";
pub const FOOTER_SELECTOR: &str = "footer";
pub const TOAST_ID: &str = "toast";
pub const CLIPBOARD_INPUT_ID: &str = "clipboardtext";

pub const FRAME_CLASS: &str = "frame";
pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ALONE_CLASS: &str = "alone";
pub const COLOR_ATTR: &str = "data-color";
