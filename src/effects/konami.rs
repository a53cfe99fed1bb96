// Keystroke easter egg. The last ten keys are compared with the konami sequence.

use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];
pub const EASTER_EGG_ANIMATION: &str = "rainbow 2s infinite";
pub const EASTER_EGG_DURATION_MS: i32 = 2000;
pub const EASTER_EGG_MESSAGE: &str = "🎉 You found the Easter Egg! Congratulations! 🎉";
pub const RAINBOW_KEYFRAMES: &str = "
    @keyframes rainbow {
        0% { filter: hue-rotate(0deg); }
        100% { filter: hue-rotate(360deg); }
    }
";

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct KonamiDetector {
    keys: VecDeque<String>,
}

#[wasm_bindgen]
impl KonamiDetector {
    #[wasm_bindgen(constructor)]
    pub fn new() -> KonamiDetector {
        KonamiDetector {
            keys: VecDeque::with_capacity(KONAMI_SEQUENCE.len()),
        }
    }

    // Records a key and reports whether it completed the sequence
    pub fn press(&mut self, key: &str) -> bool {
        if self.keys.len() == KONAMI_SEQUENCE.len() {
            self.keys.pop_front();
        }
        self.keys.push_back(key.to_owned());
        self.keys.len() == KONAMI_SEQUENCE.len()
            && self.keys.iter().zip(KONAMI_SEQUENCE.iter()).all(|(k, s)| k == s)
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut KonamiDetector, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|key| detector.press(key)).collect()
    }

    #[test]
    fn triggers_on_last_key_only() {
        let mut detector = KonamiDetector::new();
        let hits = feed(&mut detector, &KONAMI_SEQUENCE);
        assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        assert_eq!(hits.last(), Some(&true));
    }

    #[test]
    fn leading_noise_is_forgotten() {
        let mut detector = KonamiDetector::new();
        feed(&mut detector, &["x", "ArrowUp", "Enter", "ArrowUp"]);
        let hits = feed(&mut detector, &KONAMI_SEQUENCE);
        assert_eq!(hits.last(), Some(&true));
    }

    #[test]
    fn wrong_key_breaks_sequence() {
        let mut detector = KonamiDetector::new();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[4] = "ArrowRight";
        assert!(!feed(&mut detector, &keys).into_iter().any(|hit| hit));
    }

    #[test]
    fn case_matters() {
        let mut detector = KonamiDetector::new();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[9] = "A";
        assert!(!feed(&mut detector, &keys).into_iter().any(|hit| hit));
    }

    #[test]
    fn fires_again_after_repeat() {
        let mut detector = KonamiDetector::new();
        feed(&mut detector, &KONAMI_SEQUENCE);
        detector.reset();
        assert_eq!(feed(&mut detector, &KONAMI_SEQUENCE).last(), Some(&true));
    }
}
