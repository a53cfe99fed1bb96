// Navbar collapse, scroll progress, active link and dot tracking, parallax
// shapes, the mobile menu and every in-page scrolling link.

use super::{query_all, smooth_scroll_to, Listener};
use crate::effects::menu::{MobileMenu, HAMBURGER_SELECTOR, MENU_OPEN_CLASS, NAV_LIST_SELECTOR};
use crate::effects::navbar::{
    NavbarController, TimerAction, COLLAPSED_CLASS, COLLAPSE_DELAY_MS, NAVBAR_SELECTOR,
    SCROLLED_CLASS,
};
use crate::effects::scroll::{
    link_targets_section, parallax_transform, scroll_progress, scroll_target, ScrollSpy,
    ACTIVE_CLASS, NAV_LINK_SELECTOR, PARALLAX_SELECTOR, PROGRESS_SELECTOR, SCROLL_TOP_LINK_SELECTOR,
    SECTION_DOT_ATTR, SECTION_DOT_SELECTOR, SECTION_SELECTOR,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub(super) fn mount(window: &Window, document: &Document, listeners: &mut Vec<Listener>) -> Result<(), JsValue> {
    let navbar = document
        .query_selector(NAVBAR_SELECTOR)?
        .map(|element| Rc::new(Navbar::new(window, element)));
    if let Some(navbar) = &navbar {
        mount_navbar(navbar, window, listeners)?;
    }

    let menu = match document.query_selector(HAMBURGER_SELECTOR)? {
        Some(hamburger) => {
            let menu = Rc::new(Menu {
                state: RefCell::new(MobileMenu::new()),
                hamburger,
                nav_list: document.query_selector(NAV_LIST_SELECTOR)?,
            });
            let toggled = menu.clone();
            listeners.push(Listener::attach(&menu.hamburger, "click", move |_| {
                toggled.toggle();
            })?);
            Some(menu)
        }
        None => None,
    };

    let tracker = ScrollTracker {
        window: window.clone(),
        document: document.clone(),
        navbar,
        progress: document
            .query_selector(PROGRESS_SELECTOR)?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
        nav_links: query_all(document, NAV_LINK_SELECTOR)?,
        dots: query_all(document, SECTION_DOT_SELECTOR)?,
    };

    for link in &tracker.nav_links {
        let window = window.clone();
        let document = document.clone();
        let menu = menu.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        listeners.push(Listener::attach(link, "click", move |event| {
            event.prevent_default();
            if let Some(menu) = &menu {
                menu.close();
            }
            match document.query_selector(&href) {
                Ok(Some(section)) => scroll_to_section(&window, &section),
                Ok(None) => {}
                Err(err) => log!("nav link {} has no usable target: {:?}", href, err),
            }
        })?);
    }

    for dot in &tracker.dots {
        let window = window.clone();
        let document = document.clone();
        let section_id = dot.get_attribute(SECTION_DOT_ATTR).unwrap_or_default();
        listeners.push(Listener::attach(dot, "click", move |_| {
            if let Some(section) = document.get_element_by_id(&section_id) {
                scroll_to_section(&window, &section);
            }
        })?);
    }

    if let Some(link) = document.query_selector(SCROLL_TOP_LINK_SELECTOR)? {
        let window = window.clone();
        listeners.push(Listener::attach(&link, "click", move |event| {
            event.prevent_default();
            smooth_scroll_to(&window, 0.0);
        })?);
    }

    let tracker = Rc::new(tracker);
    listeners.push(Listener::attach(window, "scroll", move |_| {
        if let Err(err) = tracker.update() {
            log!("scroll update failed: {:?}", err);
        }
    })?);
    Ok(())
}

fn scroll_to_section(window: &Window, section: &Element) {
    if let Some(section) = section.dyn_ref::<HtmlElement>() {
        smooth_scroll_to(window, scroll_target(section.offset_top() as f64));
    }
}

struct Menu {
    state: RefCell<MobileMenu>,
    hamburger: Element,
    nav_list: Option<Element>,
}

impl Menu {
    fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        self.show(open);
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.show(false);
    }

    fn show(&self, open: bool) {
        let elements = std::iter::once(&self.hamburger).chain(self.nav_list.as_ref());
        for element in elements {
            if let Err(err) = element.class_list().toggle_with_force(MENU_OPEN_CLASS, open) {
                log!("could not update menu: {:?}", err);
            }
        }
    }
}

// Pending collapse timeout. The callback is reused for every arm.
struct CollapseTimer {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl CollapseTimer {
    fn apply(&self, action: TimerAction) {
        match action {
            TimerAction::Keep => {}
            TimerAction::Cancel => self.cancel(),
            TimerAction::Arm => {
                self.cancel();
                match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    self.callback.as_ref().unchecked_ref(),
                    COLLAPSE_DELAY_MS as i32,
                ) {
                    Ok(id) => self.pending.set(Some(id)),
                    Err(err) => log!("could not arm navbar timer: {:?}", err),
                }
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for CollapseTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct Navbar {
    element: Element,
    state: Rc<RefCell<NavbarController>>,
    timer: CollapseTimer,
}

impl Navbar {
    fn new(window: &Window, element: Element) -> Navbar {
        let state = Rc::new(RefCell::new(NavbarController::new()));
        let pending = Rc::new(Cell::new(None));

        let fired_state = state.clone();
        let fired_element = element.clone();
        let fired_pending = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            fired_pending.set(None);
            let mut navbar = fired_state.borrow_mut();
            navbar.on_timer_fired();
            render_navbar(&fired_element, &navbar);
        }) as Box<dyn FnMut()>);

        Navbar {
            element,
            state,
            timer: CollapseTimer {
                window: window.clone(),
                pending,
                callback,
            },
        }
    }

    fn handle<F>(&self, event: F)
    where
        F: FnOnce(&mut NavbarController) -> TimerAction,
    {
        let action = {
            let mut state = self.state.borrow_mut();
            let action = event(&mut state);
            render_navbar(&self.element, &state);
            action
        };
        self.timer.apply(action);
    }
}

fn mount_navbar(navbar: &Rc<Navbar>, window: &Window, listeners: &mut Vec<Listener>) -> Result<(), JsValue> {
    let hovered = navbar.clone();
    listeners.push(Listener::attach(&navbar.element, "mouseenter", move |_| {
        hovered.handle(|state| state.on_hover_enter());
    })?);
    let left = navbar.clone();
    listeners.push(Listener::attach(&navbar.element, "mouseleave", move |_| {
        left.handle(|state| state.on_hover_leave());
    })?);
    let clicked = navbar.clone();
    listeners.push(Listener::attach(&navbar.element, "click", move |_| {
        clicked.handle(|state| state.on_click());
    })?);

    let scroll_y = window.scroll_y()?;
    navbar.handle(|state| state.on_load(scroll_y));
    Ok(())
}

fn render_navbar(element: &Element, state: &NavbarController) {
    let classes = element.class_list();
    let rendered = classes
        .toggle_with_force(SCROLLED_CLASS, state.is_scrolled())
        .and_then(|_| classes.toggle_with_force(COLLAPSED_CLASS, state.is_collapsed()));
    if let Err(err) = rendered {
        log!("could not update navbar: {:?}", err);
    }
}

struct ScrollTracker {
    window: Window,
    document: Document,
    navbar: Option<Rc<Navbar>>,
    progress: Option<HtmlElement>,
    nav_links: Vec<Element>,
    dots: Vec<Element>,
}

impl ScrollTracker {
    fn update(&self) -> Result<(), JsValue> {
        let scroll_y = self.window.scroll_y()?;

        if let Some(progress) = &self.progress {
            let document_height = self
                .document
                .document_element()
                .map_or(0.0, |root| root.scroll_height() as f64);
            let viewport_height = self.window.inner_height()?.as_f64().unwrap_or(0.0);
            let percent = scroll_progress(scroll_y, document_height, viewport_height);
            progress
                .style()
                .set_property("width", &format!("{}%", percent))?;
        }

        if let Some(navbar) = &self.navbar {
            navbar.handle(|state| state.on_scroll(scroll_y));
        }

        // offsets move with layout, so sections are measured on every scroll
        let mut spy = ScrollSpy::new();
        for section in query_all(&self.document, SECTION_SELECTOR)? {
            if let Some(section) = section.dyn_ref::<HtmlElement>() {
                spy.add_section(&section.id(), section.offset_top() as f64);
            }
        }
        let active = spy.active(scroll_y);
        for link in &self.nav_links {
            let href = link.get_attribute("href").unwrap_or_default();
            let is_active = active
                .as_deref()
                .map_or(false, |id| link_targets_section(&href, id));
            link.class_list().toggle_with_force(ACTIVE_CLASS, is_active)?;
        }
        for dot in &self.dots {
            let is_active = active.is_some() && dot.get_attribute(SECTION_DOT_ATTR) == active;
            dot.class_list().toggle_with_force(ACTIVE_CLASS, is_active)?;
        }

        for (index, shape) in query_all(&self.document, PARALLAX_SELECTOR)?.iter().enumerate() {
            if let Some(shape) = shape.dyn_ref::<HtmlElement>() {
                shape
                    .style()
                    .set_property("transform", &parallax_transform(index, scroll_y))?;
            }
        }
        Ok(())
    }
}
