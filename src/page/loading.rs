// Loading screen timeline, started by the window load event (or right away
// when the page already finished loading).

use super::{set_timeout, Listener};
use crate::effects::loading::{
    LoadingStep, BODY_LOADING_CLASS, HIDDEN_CLASS, LOADING_SCREEN_SELECTOR, TYPED_CLASS,
    TYPED_NAME_SELECTOR,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub(super) fn mount(window: &Window, document: &Document, listeners: &mut Vec<Listener>) -> Result<(), JsValue> {
    if document.ready_state() == "complete" {
        schedule(window.clone(), document.clone(), LoadingStep::FIRST);
        return Ok(());
    }
    let loaded_window = window.clone();
    let document = document.clone();
    listeners.push(Listener::attach(window, "load", move |_| {
        schedule(loaded_window.clone(), document.clone(), LoadingStep::FIRST);
    })?);
    Ok(())
}

fn schedule(window: Window, document: Document, step: LoadingStep) {
    let scheduler = window.clone();
    let scheduled = set_timeout(&scheduler, step.delay_ms(), move || {
        if let Err(err) = apply(&document, step) {
            log!("loading step {:?} failed: {:?}", step, err);
        }
        if let Some(next) = step.next() {
            schedule(window, document, next);
        }
    });
    if let Err(err) = scheduled {
        log!("could not schedule loading step {:?}: {:?}", step, err);
    }
}

fn apply(document: &Document, step: LoadingStep) -> Result<(), JsValue> {
    match step {
        LoadingStep::HideScreen => {
            if let Some(screen) = document.query_selector(LOADING_SCREEN_SELECTOR)? {
                screen.class_list().add_1(HIDDEN_CLASS)?;
            }
            if let Some(body) = document.body() {
                body.class_list().remove_1(BODY_LOADING_CLASS)?;
            }
        }
        LoadingStep::MarkTyped => {
            if let Some(name) = document.query_selector(TYPED_NAME_SELECTOR)? {
                name.class_list().add_1(TYPED_CLASS)?;
            }
        }
    }
    Ok(())
}
