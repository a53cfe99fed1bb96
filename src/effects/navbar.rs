// Navbar auto-collapse.
//
// Past `COLLAPSE_THRESHOLD` the navbar collapses after
// `COLLAPSE_DELAY_MS` without scrolling or hovering. Closer to the top it
// always stays expanded.

use wasm_bindgen::prelude::*;

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const COLLAPSED_CLASS: &str = "collapsed";

// Scroll offset past which the navbar gets its `scrolled` styling.
pub const SCROLLED_OFFSET: f64 = 100.0;
// Scroll offset past which the navbar may collapse.
pub const COLLAPSE_THRESHOLD: f64 = 500.0;
// Idle time before collapsing.
pub const COLLAPSE_DELAY_MS: u32 = 666;

// What the host should do with its pending collapse timeout after an event.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    // Leave any pending timeout alone.
    Keep = 0,
    // Clear the pending timeout.
    Cancel = 1,
    // Clear the pending timeout and schedule a new one in `COLLAPSE_DELAY_MS`.
    Arm = 2,
}

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct NavbarController {
    scroll_y: f64,
    hovered: bool,
    scrolled: bool,
    collapsed: bool,
}

#[wasm_bindgen]
impl NavbarController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> NavbarController {
        NavbarController::default()
    }

    // Page load: start the idle timer if the page opened scrolled down.
    pub fn on_load(&mut self, scroll_y: f64) -> TimerAction {
        self.scroll_y = scroll_y;
        self.reset_timer()
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> TimerAction {
        self.scroll_y = scroll_y;
        self.scrolled = scroll_y > SCROLLED_OFFSET;
        if scroll_y <= COLLAPSE_THRESHOLD {
            self.collapsed = false;
            TimerAction::Cancel
        } else {
            self.expand()
        }
    }

    pub fn on_hover_enter(&mut self) -> TimerAction {
        self.hovered = true;
        self.expand()
    }

    pub fn on_hover_leave(&mut self) -> TimerAction {
        self.hovered = false;
        self.reset_timer()
    }

    pub fn on_click(&mut self) -> TimerAction {
        if self.collapsed {
            self.expand()
        } else {
            TimerAction::Keep
        }
    }

    // The collapse timeout elapsed.
    pub fn on_timer_fired(&mut self) {
        if !self.hovered && self.past_threshold() {
            self.collapsed = true;
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl NavbarController {
    fn past_threshold(&self) -> bool {
        self.scroll_y > COLLAPSE_THRESHOLD
    }

    fn expand(&mut self) -> TimerAction {
        self.collapsed = false;
        if self.past_threshold() {
            self.reset_timer()
        } else {
            TimerAction::Keep
        }
    }

    fn reset_timer(&mut self) -> TimerAction {
        if self.past_threshold() {
            TimerAction::Arm
        } else {
            TimerAction::Cancel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_top_never_collapses() {
        let mut nav = NavbarController::new();
        assert_eq!(nav.on_load(0.0), TimerAction::Cancel);
        assert_eq!(nav.on_scroll(300.0), TimerAction::Cancel);
        assert!(nav.is_scrolled());
        nav.on_timer_fired();
        assert!(!nav.is_collapsed());
    }

    #[test]
    fn idle_past_threshold_collapses() {
        let mut nav = NavbarController::new();
        assert_eq!(nav.on_scroll(800.0), TimerAction::Arm);
        nav.on_timer_fired();
        assert!(nav.is_collapsed());
        // scrolling again expands and re-arms
        assert_eq!(nav.on_scroll(820.0), TimerAction::Arm);
        assert!(!nav.is_collapsed());
    }

    #[test]
    fn hover_blocks_collapse() {
        let mut nav = NavbarController::new();
        nav.on_scroll(800.0);
        assert_eq!(nav.on_hover_enter(), TimerAction::Arm);
        nav.on_timer_fired();
        assert!(!nav.is_collapsed());
        assert_eq!(nav.on_hover_leave(), TimerAction::Arm);
        nav.on_timer_fired();
        assert!(nav.is_collapsed());
    }

    #[test]
    fn click_expands_only_when_collapsed() {
        let mut nav = NavbarController::new();
        nav.on_scroll(800.0);
        assert_eq!(nav.on_click(), TimerAction::Keep);
        nav.on_timer_fired();
        assert_eq!(nav.on_click(), TimerAction::Arm);
        assert!(!nav.is_collapsed());
    }

    #[test]
    fn scrolling_back_up_expands_and_cancels() {
        let mut nav = NavbarController::new();
        nav.on_scroll(900.0);
        nav.on_timer_fired();
        assert!(nav.is_collapsed());
        assert_eq!(nav.on_scroll(50.0), TimerAction::Cancel);
        assert!(!nav.is_collapsed());
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut nav = NavbarController::new();
        assert_eq!(nav.on_scroll(500.0), TimerAction::Cancel);
        assert_eq!(nav.on_hover_enter(), TimerAction::Keep);
    }
}
