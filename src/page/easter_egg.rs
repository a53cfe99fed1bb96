// Konami code listener: rainbow hue rotation on the body for two seconds,
// then an alert.

use super::{set_timeout, Listener};
use crate::effects::konami::{
    KonamiDetector, EASTER_EGG_ANIMATION, EASTER_EGG_DURATION_MS, EASTER_EGG_MESSAGE,
    RAINBOW_KEYFRAMES,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

// Returns the injected keyframes element so unmounting can take it out again
pub(super) fn mount(window: &Window, document: &Document, listeners: &mut Vec<Listener>) -> Result<Option<Element>, JsValue> {
    let keyframes = install_keyframes(document)?;

    let mut detector = KonamiDetector::new();
    let window = window.clone();
    let body_owner = document.clone();
    listeners.push(Listener::attach(document, "keydown", move |event| {
        let key = match event.dyn_ref::<KeyboardEvent>() {
            Some(event) => event.key(),
            None => return,
        };
        if detector.press(&key) {
            if let Err(err) = play(&window, &body_owner) {
                log!("easter egg failed: {:?}", err);
            }
        }
    })?);
    Ok(keyframes)
}

fn install_keyframes(document: &Document) -> Result<Option<Element>, JsValue> {
    let head = match document.head() {
        Some(head) => head,
        None => return Ok(None),
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(RAINBOW_KEYFRAMES));
    head.append_child(&style)?;
    Ok(Some(style))
}

fn play(window: &Window, document: &Document) -> Result<(), JsValue> {
    let body = match document.body() {
        Some(body) => body,
        None => return Ok(()),
    };
    body.style().set_property("animation", EASTER_EGG_ANIMATION)?;

    let alerting = window.clone();
    set_timeout(window, EASTER_EGG_DURATION_MS, move || {
        if let Err(err) = finish(&alerting, &body) {
            log!("easter egg cleanup failed: {:?}", err);
        }
    })?;
    Ok(())
}

fn finish(window: &Window, body: &HtmlElement) -> Result<(), JsValue> {
    body.style().set_property("animation", "")?;
    window.alert_with_message(EASTER_EGG_MESSAGE)
}
