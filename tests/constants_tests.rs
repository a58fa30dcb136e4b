// Host-side tests for default settings and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_sit_inside_their_bounds() {
    assert!(DEFAULT_MIN_FRAMES >= 1);
    assert!(DEFAULT_MIN_FRAMES <= DEFAULT_FRAME_AMOUNT);
    assert!(DEFAULT_FRAME_AMOUNT <= DEFAULT_MAX_FRAMES);
    assert!(DEFAULT_MIN_FRAME_SIZE >= 1);
    assert!(DEFAULT_FRAME_SIZE >= DEFAULT_MIN_FRAME_SIZE);
    assert!(DEFAULT_STEP_SIZE > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_is_sensible() {
    assert!(REVEAL_TICK_MS > 0);
    // a toast should outlast a full reveal tick by a wide margin
    assert!(TOAST_DURATION_MS > REVEAL_TICK_MS * 10);
}

#[test]
fn color_space_is_six_hex_digits() {
    assert_eq!(COLOR_SPACE as u64, 16u64.pow(HEX_DIGITS as u32));
    assert_eq!(format!("{:X}", COLOR_SPACE as u64 - 1).len(), HEX_DIGITS);
}

#[test]
fn selectors_are_not_empty() {
    for s in [
        FRAMES_ID,
        INFO_SELECTOR,
        HEADER_SELECTOR,
        FOOTER_SELECTOR,
        TOAST_ID,
        CLIPBOARD_INPUT_ID,
        FRAME_CLASS,
        VISIBLE_CLASS,
        HIDDEN_CLASS,
        ALONE_CLASS,
        COLOR_ATTR,
    ] {
        assert!(!s.is_empty());
    }
}
