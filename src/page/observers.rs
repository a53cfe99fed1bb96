// IntersectionObserver driven behaviors: staggered reveal of marked elements
// and the one-shot skill bar / percentage counter animation.

use super::{query_all, set_timeout, Observer};
use crate::effects::counter::{
    parse_target, skill_stagger_ms, CounterAnimation, ANIMATED_CLASS, COUNTER_TICK_MS,
    PERCENTAGE_SELECTOR, SKILL_BAR_SELECTOR, SKILL_SECTION_SELECTOR, SKILL_THRESHOLD, TARGET_ATTR,
    TARGET_WIDTH_PROPERTY,
};
use crate::effects::reveal::{
    reveal_delay_ms, REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub(super) fn mount(window: &Window, document: &Document, observers: &mut Vec<Observer>) -> Result<(), JsValue> {
    if let Some(observer) = reveal(window, document)? {
        observers.push(observer);
    }
    if let Some(observer) = skills(window, document)? {
        observers.push(observer);
    }
    Ok(())
}

#[allow(deprecated)]
fn observe(
    targets: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    callback: ObserverCallback,
) -> Result<Observer, JsValue> {
    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets {
        observer.observe(target);
    }
    Ok(Observer {
        observer,
        _callback: callback,
    })
}

fn entries(batch: &Array) -> Vec<IntersectionObserverEntry> {
    (0..batch.length())
        .map(|i| batch.get(i).unchecked_into::<IntersectionObserverEntry>())
        .collect()
}

fn reveal(window: &Window, document: &Document) -> Result<Option<Observer>, JsValue> {
    let targets = query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(None);
    }
    let window = window.clone();
    let callback = Closure::wrap(Box::new(move |batch: Array, _observer: IntersectionObserver| {
        // the stagger counts positions in this batch, visible or not
        for (index, entry) in entries(&batch).into_iter().enumerate() {
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let shown = set_timeout(&window, reveal_delay_ms(index as u32) as i32, move || {
                if let Err(err) = target.class_list().add_1(REVEAL_CLASS) {
                    log!("could not reveal element: {:?}", err);
                }
            });
            if let Err(err) = shown {
                log!("could not schedule reveal: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    observe(&targets, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), callback).map(Some)
}

fn skills(window: &Window, document: &Document) -> Result<Option<Observer>, JsValue> {
    let section = match document.query_selector(SKILL_SECTION_SELECTOR)? {
        Some(section) => section,
        None => return Ok(None),
    };
    let bars = query_all(document, SKILL_BAR_SELECTOR)?;
    let percentages = query_all(document, PERCENTAGE_SELECTOR)?;
    let window = window.clone();
    let callback = Closure::wrap(Box::new(move |batch: Array, observer: IntersectionObserver| {
        for entry in entries(&batch) {
            if !entry.is_intersecting() {
                continue;
            }
            if let Err(err) = animate_skills(&window, &bars, &percentages) {
                log!("could not start skill animation: {:?}", err);
            }
            observer.unobserve(&entry.target());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    observe(&[section], SKILL_THRESHOLD, None, callback).map(Some)
}

fn animate_skills(window: &Window, bars: &[Element], percentages: &[Element]) -> Result<(), JsValue> {
    for (index, bar) in bars.iter().enumerate() {
        let bar = bar.clone();
        set_timeout(window, skill_stagger_ms(index as u32) as i32, move || {
            if let Err(err) = fill_bar(&bar) {
                log!("could not fill skill bar: {:?}", err);
            }
        })?;
    }
    for (index, percentage) in percentages.iter().enumerate() {
        let target = parse_target(&percentage.get_attribute(TARGET_ATTR).unwrap_or_default());
        let element = percentage.clone();
        let ticker = window.clone();
        set_timeout(window, skill_stagger_ms(index as u32) as i32, move || {
            run_counter(ticker, element, CounterAnimation::new(target));
        })?;
    }
    Ok(())
}

// The inline width becomes the transition target
fn fill_bar(bar: &Element) -> Result<(), JsValue> {
    if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
        let style = bar.style();
        let width = style.get_property_value("width")?;
        style.set_property(TARGET_WIDTH_PROPERTY, &width)?;
        bar.class_list().add_1(ANIMATED_CLASS)?;
    }
    Ok(())
}

// One tick per timeout until the counter reaches its target
fn run_counter(window: Window, element: Element, mut counter: CounterAnimation) {
    let scheduler = window.clone();
    let scheduled = set_timeout(&scheduler, COUNTER_TICK_MS as i32, move || {
        counter.tick();
        element.set_text_content(Some(&counter.label()));
        if !counter.is_done() {
            run_counter(window, element, counter);
        }
    });
    if let Err(err) = scheduled {
        log!("could not schedule counter tick: {:?}", err);
    }
}
