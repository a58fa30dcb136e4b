use crate::controller::Controller;
use crate::core::action_for_key;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keyup(ev: &web::KeyboardEvent, controller: &Rc<RefCell<Controller>>) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    controller.borrow_mut().handle_key(action);
}

// Listeners live for the whole page session.
pub fn wire_keyup(document: &web::Document, controller: Rc<RefCell<Controller>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &controller);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
    closure.forget();
}
