use crate::constants::{COLOR_ATTR, FRAME_CLASS};
use crate::controller::Controller;
use crate::core::is_hex_color;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Color recorded on the frame under the click, if the click hit a frame.
pub fn clicked_color(ev: &web::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let frame = target.closest(&format!(".{FRAME_CLASS}")).ok().flatten()?;
    frame.get_attribute(COLOR_ATTR).filter(|c| is_hex_color(c))
}

// One delegated listener on the container covers every frame, including the
// ones created by later renders.
pub fn wire_frame_click(container: &web::Element, controller: Rc<RefCell<Controller>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(color) = clicked_color(&ev) {
            controller.borrow_mut().copy_color(&color);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
