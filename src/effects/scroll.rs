// Scroll-driven page state: progress bar width, active section tracking,
// anchor scroll targets and the parallax shapes

use wasm_bindgen::prelude::*;

pub const PROGRESS_SELECTOR: &str = ".scroll-progress";
pub const SECTION_SELECTOR: &str = "section";
pub const NAV_LINK_SELECTOR: &str = ".nav-item a";
pub const SECTION_DOT_SELECTOR: &str = ".section-dot";
pub const SECTION_DOT_ATTR: &str = "data-section";
pub const ACTIVE_CLASS: &str = "active";
pub const PARALLAX_SELECTOR: &str = ".floating-shape";
pub const SCROLL_TOP_LINK_SELECTOR: &str = ".footer a[href=\"#home\"]";

// A section becomes active this many px before its top reaches the viewport top
pub const SPY_LEAD: f64 = 200.0;
// Anchor links stop short of the section so the fixed navbar does not cover it
pub const ANCHOR_OFFSET: f64 = 100.0;

// Percentage of the scrollable distance covered, 0 when the page does not scroll
#[wasm_bindgen]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let total = document_height - viewport_height;
    if !(total > 0.0) {
        return 0.0;
    }
    (scroll_y / total * 100.0).max(0.0).min(100.0)
}

#[wasm_bindgen]
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET
}

// Shapes further down the list move faster; all of them rotate at the same rate
#[wasm_bindgen]
pub fn parallax_transform(index: usize, scroll_y: f64) -> String {
    let speed = (index + 1) as f64 * 0.5;
    format!(
        "translateY({}px) rotate({}deg)",
        scroll_y * speed,
        scroll_y * 0.1
    )
}

// True when a nav link's href points at the section, e.g. "#about" and "about"
#[wasm_bindgen]
pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[derive(Clone, Debug)]
struct Section {
    id: String,
    offset_top: f64,
}

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct ScrollSpy {
    sections: Vec<Section>,
}

#[wasm_bindgen]
impl ScrollSpy {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScrollSpy {
        ScrollSpy::default()
    }

    // Sections are expected in document order
    pub fn add_section(&mut self, id: &str, offset_top: f64) {
        self.sections.push(Section {
            id: id.to_owned(),
            offset_top,
        });
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // Last section, in document order, whose top minus the lead has been scrolled past
    pub fn active(&self, scroll_y: f64) -> Option<String> {
        self.sections
            .iter()
            .filter(|section| scroll_y >= section.offset_top - SPY_LEAD)
            .last()
            .map(|section| section.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        let mut spy = ScrollSpy::new();
        spy.add_section("home", 0.0);
        spy.add_section("about", 900.0);
        spy.add_section("skills", 1800.0);
        spy
    }

    #[test]
    fn progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_without_scroll_range() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_clamps_overscroll() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn active_section_uses_lead() {
        let spy = spy();
        assert_eq!(spy.active(0.0).as_deref(), Some("home"));
        assert_eq!(spy.active(699.0).as_deref(), Some("home"));
        assert_eq!(spy.active(700.0).as_deref(), Some("about"));
        assert_eq!(spy.active(5000.0).as_deref(), Some("skills"));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let mut spy = ScrollSpy::new();
        spy.add_section("intro", 600.0);
        assert_eq!(spy.active(100.0), None);
        assert_eq!(ScrollSpy::new().active(100.0), None);
    }

    #[test]
    fn href_matching() {
        assert!(link_targets_section("#about", "about"));
        assert!(!link_targets_section("about", "about"));
        assert!(!link_targets_section("#about", "skills"));
    }

    #[test]
    fn anchor_target_and_parallax() {
        assert_eq!(scroll_target(900.0), 800.0);
        assert_eq!(parallax_transform(0, 200.0), "translateY(100px) rotate(20deg)");
        assert_eq!(parallax_transform(2, 200.0), "translateY(300px) rotate(20deg)");
    }
}
