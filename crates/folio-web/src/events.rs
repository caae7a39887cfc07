use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in CSS pixels over the whole viewport. The frame loop
/// reads this each tick; nothing else is derived here.
pub fn wire_pointer_tracking(mouse: Rc<RefCell<input::MouseState>>) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            ms.x = ev.client_x() as f32;
            ms.y = ev.client_y() as f32;
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
