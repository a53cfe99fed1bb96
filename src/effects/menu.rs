// Mobile navigation menu: the hamburger toggles it, following a nav link closes it

use wasm_bindgen::prelude::*;

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_LIST_SELECTOR: &str = ".nav-list";
pub const MENU_OPEN_CLASS: &str = "active";

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

#[wasm_bindgen]
impl MobileMenu {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MobileMenu {
        MobileMenu::default()
    }

    // Returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    // Returns whether the menu was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
