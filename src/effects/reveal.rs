// Reveal-on-scroll: elements fade in once 15% visible, staggered by their
// position in the observer batch

use wasm_bindgen::prelude::*;

pub const REVEAL_SELECTOR: &str =
    ".scroll-reveal, .scroll-reveal-left, .scroll-reveal-right, .scroll-reveal-scale";
pub const REVEAL_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

#[wasm_bindgen]
pub fn reveal_delay_ms(index: u32) -> u32 {
    index.saturating_mul(REVEAL_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_with_index() {
        assert_eq!(reveal_delay_ms(0), 0);
        assert_eq!(reveal_delay_ms(4), 400);
        assert_eq!(reveal_delay_ms(u32::MAX), u32::MAX);
    }
}
