use crate::constants::{COLOR_ATTR, FRAME_CLASS};
use std::fmt::Write;

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSpec<'a> {
    pub color: &'a str,
    pub size_px: u32,
}

/// Descriptors for a whole render pass, one per color, in order.
pub fn build_frames(colors: &[String], size_px: u32) -> Vec<FrameSpec<'_>> {
    colors
        .iter()
        .map(|c| FrameSpec {
            color: c.as_str(),
            size_px,
        })
        .collect()
}

#[inline]
pub fn px(size: u32) -> String {
    format!("{size}px")
}

/// Markup for all frames, built in one pass so the container can be filled
/// with a single `innerHTML` write. Frames start hidden; the reveal ticker
/// adds the visible class later.
pub fn frames_markup(frames: &[FrameSpec<'_>]) -> String {
    // ~110 bytes per frame with a 6-digit color
    let mut out = String::with_capacity(frames.len() * 112);
    for f in frames {
        let _ = write!(
            out,
            r#"<div class="{cls}" style="width:{s}px;height:{s}px;background-color:{c}" {attr}="{c}"></div>"#,
            cls = FRAME_CLASS,
            s = f.size_px,
            c = f.color,
            attr = COLOR_ATTR,
        );
    }
    out
}

/// One step of the reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Show(usize),
    Done,
}

/// Position of the one-by-one reveal. `advance` yields each index once, then
/// `Done` forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealProgress {
    next: usize,
    total: usize,
}

impl RevealProgress {
    pub fn new(total: usize) -> Self {
        Self { next: 0, total }
    }

    pub fn advance(&mut self) -> RevealStep {
        if self.next < self.total {
            let i = self.next;
            self.next += 1;
            RevealStep::Show(i)
        } else {
            RevealStep::Done
        }
    }

    #[inline]
    pub fn revealed(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.next >= self.total
    }
}
