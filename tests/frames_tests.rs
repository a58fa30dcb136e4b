// Host-side tests for frame descriptors, markup and the reveal ticker state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod frames {
        include!("../src/core/frames.rs");
    }
}

use crate::core::frames::*;

fn colors() -> Vec<String> {
    ["#A1B2C3", "#000000", "#FFFFFF", "#A1B2C3"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn build_frames_keeps_order_and_size() {
    let colors = colors();
    let frames = build_frames(&colors, 70);
    assert_eq!(frames.len(), colors.len());
    for (f, c) in frames.iter().zip(&colors) {
        assert_eq!(f.color, c);
        assert_eq!(f.size_px, 70);
    }
}

#[test]
fn markup_has_one_element_per_color() {
    let colors = colors();
    let html = frames_markup(&build_frames(&colors, 70));
    assert_eq!(html.matches(r#"class="frame""#).count(), colors.len());
    assert_eq!(html.matches("</div>").count(), colors.len());
}

#[test]
fn markup_records_color_as_fill_and_attribute() {
    let colors = vec!["#A1B2C3".to_string()];
    let html = frames_markup(&build_frames(&colors, 40));
    assert_eq!(
        html,
        r##"<div class="frame" style="width:40px;height:40px;background-color:#A1B2C3" data-color="#A1B2C3"></div>"##
    );
}

#[test]
fn markup_for_nothing_is_empty() {
    assert_eq!(frames_markup(&build_frames(&[], 70)), "");
}

#[test]
fn markup_frames_start_hidden() {
    let html = frames_markup(&build_frames(&colors(), 70));
    assert!(!html.contains("visible"));
}

#[test]
fn reveal_shows_each_frame_once_then_stops() {
    let mut reveal = RevealProgress::new(3);
    assert_eq!(reveal.advance(), RevealStep::Show(0));
    assert_eq!(reveal.advance(), RevealStep::Show(1));
    assert!(!reveal.is_complete());
    assert_eq!(reveal.advance(), RevealStep::Show(2));
    assert!(reveal.is_complete());
    for _ in 0..5 {
        assert_eq!(reveal.advance(), RevealStep::Done);
    }
    assert_eq!(reveal.revealed(), 3);
}

#[test]
fn reveal_of_empty_grid_is_done_immediately() {
    let mut reveal = RevealProgress::new(0);
    assert!(reveal.is_complete());
    assert_eq!(reveal.advance(), RevealStep::Done);
    assert_eq!(reveal.revealed(), 0);
}

#[test]
fn px_formats_css_length() {
    assert_eq!(px(70), "70px");
    assert_eq!(px(0), "0px");
}
