// Skill percentage counters.
//
// Once the skills section is half visible every `.percentage` element counts
// from 0 up to its `data-target` in 16 ms steps over 1.5 s, each bar starting
// 200 ms after the previous one. The observer fires only once.

use wasm_bindgen::prelude::*;

pub const SKILL_SECTION_SELECTOR: &str = "#skills";
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar-fill";
pub const PERCENTAGE_SELECTOR: &str = ".percentage";
pub const TARGET_ATTR: &str = "data-target";
// Bars keep their inline width; the CSS transition grows them to this property
pub const TARGET_WIDTH_PROPERTY: &str = "--target-width";
pub const ANIMATED_CLASS: &str = "animated";

pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const COUNTER_TICK_MS: u32 = 16;
pub const SKILL_STAGGER_MS: u32 = 200;
pub const SKILL_THRESHOLD: f64 = 0.5;

#[wasm_bindgen]
pub fn skill_stagger_ms(index: u32) -> u32 {
    index.saturating_mul(SKILL_STAGGER_MS)
}

// Reads the leading digits of a `data-target` attribute, so `"85"` and
// `"85%"` both give 85. Anything else counts to 0.
#[wasm_bindgen]
pub fn parse_target(attr: &str) -> u32 {
    let digits: String = attr
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

#[wasm_bindgen]
impl CounterAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new(target: u32) -> CounterAnimation {
        CounterAnimation::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: u32, duration_ms: f64) -> CounterAnimation {
        let target = target as f64;
        let ticks = (duration_ms / COUNTER_TICK_MS as f64).max(1.0);
        CounterAnimation {
            target,
            increment: target / ticks,
            current: 0.0,
            done: false,
        }
    }

    // Advances one tick and returns the value to display.
    pub fn tick(&mut self) -> u32 {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.done = true;
            }
        }
        self.value()
    }

    pub fn value(&self) -> u32 {
        self.current.floor() as u32
    }

    pub fn label(&self) -> String {
        format!("{}%", self.value())
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_target() {
        let mut counter = CounterAnimation::new(90);
        let mut ticks = 0;
        let mut last = 0;
        while !counter.is_done() {
            let value = counter.tick();
            assert!(value >= last);
            last = value;
            ticks += 1;
        }
        assert_eq!(counter.value(), 90);
        assert_eq!(counter.label(), "90%");
        // 1500 / 16 = 93.75 steps, the 94th lands on the target
        assert_eq!(ticks, 94);
    }

    #[test]
    fn saturates_after_done() {
        let mut counter = CounterAnimation::with_duration(10, 32.0);
        assert_eq!(counter.tick(), 5);
        assert_eq!(counter.tick(), 10);
        assert!(counter.is_done());
        assert_eq!(counter.tick(), 10);
    }

    #[test]
    fn zero_target_finishes_at_once() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn target_attribute() {
        assert_eq!(parse_target("85"), 85);
        assert_eq!(parse_target(" 70%"), 70);
        assert_eq!(parse_target("abc"), 0);
        assert_eq!(parse_target(""), 0);
    }

    #[test]
    fn stagger() {
        assert_eq!(skill_stagger_ms(0), 0);
        assert_eq!(skill_stagger_ms(3), 600);
    }
}
