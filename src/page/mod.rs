// Mounts every page behavior on the live document: the particle background,
// navigation and scroll tracking, reveal and skill observers, pointer effects,
// the loading screen and the konami easter egg. Markup that is missing from
// the page is skipped, not reported as an error.

mod easter_egg;
mod loading;
mod navigation;
mod observers;
mod pointer;

use crate::animator::Animator;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, ScrollBehavior, ScrollToOptions,
    Window,
};

pub const PARTICLE_CANVAS_ID: &str = "particles-canvas";

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

struct Page {
    animator: Option<Animator>,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    keyframes: Option<Element>,
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(style) = self.keyframes.take() {
            style.remove();
        }
    }
}

// An event listener that detaches itself when dropped
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn attach<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Listener, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log!("could not detach {} listener: {:?}", self.event, err);
        }
    }
}

// An IntersectionObserver and its callback; disconnected when dropped
pub(crate) struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn mount() -> Result<(), JsValue> {
    // the previous page must release its listeners before new ones go in
    unmount();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let animator = if document.get_element_by_id(PARTICLE_CANVAS_ID).is_some() {
        let mut animator = Animator::attach(PARTICLE_CANVAS_ID)?;
        animator.run()?;
        Some(animator)
    } else {
        log!("no #{} on this page, particles disabled", PARTICLE_CANVAS_ID);
        None
    };

    let mut listeners = Vec::new();
    let mut observers = Vec::new();
    loading::mount(&window, &document, &mut listeners)?;
    navigation::mount(&window, &document, &mut listeners)?;
    observers::mount(&window, &document, &mut observers)?;
    pointer::mount(&window, &document, &mut listeners)?;
    let keyframes = easter_egg::mount(&window, &document, &mut listeners)?;

    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            animator,
            listeners,
            observers,
            keyframes,
        })
    });
    Ok(())
}

pub fn unmount() {
    let page = PAGE.with(|page| page.borrow_mut().take());
    drop(page);
}

pub fn particle_count() -> usize {
    PAGE.with(|page| {
        page.borrow()
            .as_ref()
            .and_then(|page| page.animator.as_ref())
            .map_or(0, |animator| animator.particle_count())
    })
}

pub fn is_mounted() -> bool {
    PAGE.with(|page| page.borrow().is_some())
}

pub fn listener_count() -> usize {
    PAGE.with(|page| page.borrow().as_ref().map_or(0, |page| page.listeners.len()))
}

pub fn observer_count() -> usize {
    PAGE.with(|page| page.borrow().as_ref().map_or(0, |page| page.observers.len()))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

// One-shot timeout; the closure frees itself after running
pub(crate) fn set_timeout<F>(window: &Window, delay_ms: i32, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        delay_ms,
    )
}

#[allow(deprecated)]
pub(crate) fn smooth_scroll_to(window: &Window, top: f64) {
    let mut options = ScrollToOptions::new();
    options.top(top);
    options.behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
