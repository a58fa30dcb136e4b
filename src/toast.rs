use crate::constants::TOAST_ID;
use crate::dom;
use crate::timer::TimerSlot;
use anyhow::anyhow;
use gloo_timers::callback::Timeout;
use web_sys as web;

/// Single-slot transient notification. A new message replaces the visible
/// one and cancels its pending dismissal.
pub struct Toaster {
    document: web::Document,
    dismiss: TimerSlot<Timeout>,
}

impl Toaster {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            dismiss: TimerSlot::new(),
        }
    }

    pub fn show(&mut self, message: &str, duration_ms: u32) {
        self.dismiss.cancel();
        if let Some(old) = self.document.get_element_by_id(TOAST_ID) {
            old.remove();
        }

        let el = match self.create(message) {
            Ok(el) => el,
            Err(e) => {
                log::error!("[toast] {:#}", e);
                return;
            }
        };
        self.dismiss
            .start(Timeout::new(duration_ms, move || el.remove()));
        log::debug!("[toast] {}", message);
    }

    fn create(&self, message: &str) -> anyhow::Result<web::Element> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| anyhow!("{:?}", e))?;
        el.set_id(TOAST_ID);
        el.set_text_content(Some(message));
        dom::body(&self.document)?
            .append_child(&el)
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(el)
    }
}
