use crate::constants::*;
use crate::core::{build_frames, frames_markup, px, status_text, RevealProgress, RevealStep};
use crate::dom;
use crate::timer::TimerSlot;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// DOM side of the grid: the `#frames` container, the status line and the
/// reveal ticker.
pub struct FrameView {
    document: web::Document,
    container: web::Element,
    reveal: Rc<RefCell<TimerSlot<Interval>>>,
}

impl FrameView {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(FRAMES_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", FRAMES_ID))?;
        Ok(Self {
            document: document.clone(),
            container,
            reveal: Rc::new(RefCell::new(TimerSlot::new())),
        })
    }

    #[inline]
    pub fn container(&self) -> &web::Element {
        &self.container
    }

    /// Replace every frame with one per color and start revealing them.
    pub fn render(&self, colors: &[String], size_px: u32) {
        // stop the old ticker before its frames disappear
        self.reveal.borrow_mut().cancel();

        self.set_status(colors.len());
        let frames = build_frames(colors, size_px);
        self.container.set_inner_html(&frames_markup(&frames));
        log::debug!("[render] {} frames at {}px", frames.len(), size_px);

        self.start_reveal(colors.len());
    }

    /// Apply `size_px` to the frames already on screen.
    pub fn resize(&self, size_px: u32) {
        match self.container.query_selector_all(&format!(".{FRAME_CLASS}")) {
            Ok(list) => dom::set_square_size(&list, &px(size_px)),
            Err(e) => log::warn!("[render] frame lookup failed: {:?}", e),
        }
    }

    pub fn set_chrome_hidden(&self, hidden: bool) {
        dom::set_class(&self.document, HEADER_SELECTOR, HIDDEN_CLASS, hidden);
        dom::set_class(&self.document, FOOTER_SELECTOR, HIDDEN_CLASS, hidden);
        if let Err(e) = self.container.class_list().toggle_with_force(ALONE_CLASS, hidden) {
            log::warn!("[render] toggle .{}: {:?}", ALONE_CLASS, e);
        }
    }

    pub fn reveal_running(&self) -> bool {
        self.reveal.borrow().is_active()
    }

    fn set_status(&self, amount: usize) {
        if let Some(info) = dom::query(&self.document, INFO_SELECTOR) {
            info.set_text_content(Some(&status_text(amount)));
        }
    }

    fn start_reveal(&self, total: usize) {
        let children = self.container.children();
        let slot: Weak<RefCell<TimerSlot<Interval>>> = Rc::downgrade(&self.reveal);
        let mut progress = RevealProgress::new(total);

        let interval = Interval::new(REVEAL_TICK_MS, move || match progress.advance() {
            RevealStep::Show(i) => {
                if let Some(el) = children.item(i as u32) {
                    _ = el.class_list().add_1(VISIBLE_CLASS);
                }
            }
            RevealStep::Done => stop_reveal(&slot),
        });
        self.reveal.borrow_mut().start(interval);
    }
}

// Runs inside the interval's own callback, so the handle is dropped on the
// next turn of the event loop instead of here.
fn stop_reveal(slot: &Weak<RefCell<TimerSlot<Interval>>>) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let finished = slot.borrow_mut().take();
    if let Some(interval) = finished {
        Timeout::new(0, move || drop(interval)).forget();
        log::debug!("[render] reveal complete");
    }
}
