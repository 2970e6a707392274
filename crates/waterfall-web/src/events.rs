use crate::dom;
use crate::frame::FrameContext;
use crate::input::{self, InputState};
use crate::keys::{control_for_key, Control};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn handle_key(ev: &web::KeyboardEvent, input: &Rc<RefCell<InputState>>, down: bool) {
    if let Some(control) = control_for_key(&ev.key()) {
        input.borrow_mut().key(control, down);
        // Keep arrows and space from scrolling the page.
        if matches!(control, Control::Jump) || ev.key().starts_with("Arrow") {
            ev.prevent_default();
        }
    }
}

pub fn wire_keyboard(input: Rc<RefCell<InputState>>) {
    let Some(window) = web::window() else {
        return;
    };

    let input_down = input.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_key(&ev, &input_down, true);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let input_up = input.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_key(&ev, &input_up, false);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // Focus loss swallows keyup events; drop everything instead of steering forever.
    let input_blur = input;
    let blur = Closure::wrap(Box::new(move || {
        input_blur.borrow_mut().held.clear();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}

pub fn wire_pointer(canvas: &web::HtmlCanvasElement, input: Rc<RefCell<InputState>>) {
    let canvas_move = canvas.clone();
    let pointermove = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let uv = input::pointer_canvas_uv(&ev, &canvas_move);
        input.borrow_mut().pointer = input::uv_to_ndc(uv);
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("pointermove", pointermove.as_ref().unchecked_ref());
    pointermove.forget();
}

pub fn wire_mute_button(document: &web::Document, frame_ctx: Rc<RefCell<FrameContext>>) {
    overlay::show_muted(document, frame_ctx.borrow().sim.context().is_muted());
    dom::add_click_listener(document, overlay::mute_button_id(), move || {
        frame_ctx.borrow_mut().toggle_muted();
    });
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
