// Loading screen. Two seconds after the window load event the overlay is
// hidden, four seconds later the hero name gets its `typed` class so the
// typing caret stops blinking.

pub const LOADING_SCREEN_SELECTOR: &str = ".loading-screen";
pub const HIDDEN_CLASS: &str = "hidden";
pub const BODY_LOADING_CLASS: &str = "loading";
pub const TYPED_NAME_SELECTOR: &str = "#home .name";
pub const TYPED_CLASS: &str = "typed";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadingStep {
    HideScreen,
    MarkTyped,
}

impl LoadingStep {
    pub const FIRST: LoadingStep = LoadingStep::HideScreen;

    // Wait before this step, counted from the previous one (or from load)
    pub fn delay_ms(self) -> i32 {
        match self {
            LoadingStep::HideScreen => 2000,
            LoadingStep::MarkTyped => 4000,
        }
    }

    pub fn next(self) -> Option<LoadingStep> {
        match self {
            LoadingStep::HideScreen => Some(LoadingStep::MarkTyped),
            LoadingStep::MarkTyped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_run_in_order() {
        let mut steps = vec![LoadingStep::FIRST];
        while let Some(next) = steps.last().and_then(|step| step.next()) {
            steps.push(next);
        }
        assert_eq!(steps, vec![LoadingStep::HideScreen, LoadingStep::MarkTyped]);
    }

    #[test]
    fn timeline() {
        assert_eq!(LoadingStep::FIRST.delay_ms(), 2000);
        let typed_at = LoadingStep::FIRST.delay_ms() + LoadingStep::MarkTyped.delay_ms();
        assert_eq!(typed_at, 6000);
    }
}
