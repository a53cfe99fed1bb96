// 3d tilt on profile images and click ripples on buttons.

use super::{query_all, set_timeout, Listener};
use crate::effects::pointer::{
    tilt_transform, Ripple, RIPPLE_BUTTON_SELECTOR, RIPPLE_CLASS, RIPPLE_LIFETIME_MS, TILT_RESET,
    TILT_SELECTOR,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

pub(super) fn mount(window: &Window, document: &Document, listeners: &mut Vec<Listener>) -> Result<(), JsValue> {
    for element in query_all(document, TILT_SELECTOR)? {
        let element = match element.dyn_into::<HtmlElement>() {
            Ok(element) => element,
            Err(_) => continue,
        };
        let tilted = element.clone();
        listeners.push(Listener::attach(&element, "mousemove", move |event| {
            if let Err(err) = tilt(&tilted, &event) {
                log!("tilt failed: {:?}", err);
            }
        })?);
        let reset = element.clone();
        listeners.push(Listener::attach(&element, "mouseleave", move |_| {
            if let Err(err) = reset.style().set_property("transform", TILT_RESET) {
                log!("tilt reset failed: {:?}", err);
            }
        })?);
    }

    for button in query_all(document, RIPPLE_BUTTON_SELECTOR)? {
        let window = window.clone();
        let document = document.clone();
        let clicked = button.clone();
        listeners.push(Listener::attach(&button, "click", move |event| {
            if let Err(err) = ripple(&window, &document, &clicked, &event) {
                log!("ripple failed: {:?}", err);
            }
        })?);
    }
    Ok(())
}

fn tilt(element: &HtmlElement, event: &Event) -> Result<(), JsValue> {
    let event = match event.dyn_ref::<MouseEvent>() {
        Some(event) => event,
        None => return Ok(()),
    };
    let rect = element.get_bounding_client_rect();
    let transform = tilt_transform(
        rect.width(),
        rect.height(),
        event.client_x() as f64 - rect.left(),
        event.client_y() as f64 - rect.top(),
    );
    element.style().set_property("transform", &transform)
}

// Spawns a span at the click point and removes it once the animation is over
fn ripple(window: &Window, document: &Document, button: &Element, event: &Event) -> Result<(), JsValue> {
    let event = match event.dyn_ref::<MouseEvent>() {
        Some(event) => event,
        None => return Ok(()),
    };
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        rect.left(),
        rect.top(),
        event.client_x() as f64,
        event.client_y() as f64,
    );

    let span = document
        .create_element("span")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("span is not an HtmlElement"))?;
    span.style().set_property("left", &ripple.left())?;
    span.style().set_property("top", &ripple.top())?;
    span.class_list().add_1(RIPPLE_CLASS)?;
    button.append_child(&span)?;

    set_timeout(window, RIPPLE_LIFETIME_MS as i32, move || span.remove())?;
    Ok(())
}
