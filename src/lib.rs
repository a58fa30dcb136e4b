#![cfg(target_arch = "wasm32")]
use crate::config::{FrameOptions, Settings};
use crate::controller::Controller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clipboard;
mod config;
mod constants;
mod controller;
mod core;
mod dom;
mod events;
mod render;
mod timer;
mod toast;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("color-frames loaded");
    Ok(())
}

/// Handle to one running grid, returned by `init`.
#[wasm_bindgen]
pub struct ColorFrames {
    controller: Rc<RefCell<Controller>>,
}

#[wasm_bindgen]
impl ColorFrames {
    /// New colors at the current amount, same as pressing Enter.
    pub fn reload(&self) {
        self.controller
            .borrow_mut()
            .handle_key(crate::core::KeyAction::Reload);
    }

    #[wasm_bindgen(js_name = frameAmount)]
    pub fn frame_amount(&self) -> u32 {
        self.controller.borrow().grid().settings().frame_amount
    }

    #[wasm_bindgen(js_name = frameSize)]
    pub fn frame_size(&self) -> u32 {
        self.controller.borrow().grid().settings().frame_size
    }

    /// The current color sequence, in frame order.
    pub fn colors(&self) -> js_sys::Array {
        self.controller
            .borrow()
            .grid()
            .colors()
            .iter()
            .map(|c| JsValue::from_str(c))
            .collect()
    }

    #[wasm_bindgen(js_name = chromeHidden)]
    pub fn chrome_hidden(&self) -> bool {
        self.controller.borrow().grid().chrome_hidden()
    }

    #[wasm_bindgen(js_name = revealRunning)]
    pub fn reveal_running(&self) -> bool {
        self.controller.borrow().view().reveal_running()
    }
}

/// Build the grid inside `#frames` and wire keyboard and click handling.
/// `options` may be omitted; see `FrameOptions` for the recognised keys.
#[wasm_bindgen(js_name = initColorFrames)]
pub fn init(options: JsValue) -> Result<ColorFrames, JsValue> {
    init_grid(options).map_err(|e| {
        log::error!("init error: {:#}", e);
        JsValue::from(js_sys::Error::new(&format!("{:#}", e)))
    })
}

fn parse_options(options: JsValue) -> anyhow::Result<FrameOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(FrameOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| anyhow::anyhow!("invalid options: {}", e))
}

fn init_grid(options: JsValue) -> anyhow::Result<ColorFrames> {
    let settings = Settings::from_options(&parse_options(options)?)?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    log::info!("[init] {:?}", settings);

    let controller = Rc::new(RefCell::new(Controller::new(&document, settings)?));
    controller.borrow().render();

    let container: web::Element = controller.borrow().view().container().clone();
    events::pointer::wire_frame_click(&container, controller.clone());
    events::keyboard::wire_keyup(&document, controller.clone());

    Ok(ColorFrames { controller })
}
