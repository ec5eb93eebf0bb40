use crate::constants::HINT_TIMEOUT_S;

pub const HINT_TITLE: &str = "Interactive Background";
pub const HINT_BODY: &str = "Click anywhere to toggle the raining shapes";

/// One-shot usage hint. Hides after a timeout or on the first click, whichever comes first,
/// and never comes back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageHint {
    remaining: f32,
    dismissed: bool,
}

impl Default for UsageHint {
    fn default() -> Self {
        Self::new(HINT_TIMEOUT_S)
    }
}

impl UsageHint {
    pub fn new(timeout: f32) -> Self {
        Self {
            remaining: timeout,
            dismissed: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.dismissed && self.remaining > 0.0
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
    }

    /// Status line for the corner indicator.
    pub fn status(raining: bool) -> &'static str {
        if raining {
            "Click anywhere to pause rain"
        } else {
            "Click anywhere to resume rain"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_timeout() {
        let mut hint = UsageHint::default();
        assert!(hint.is_visible());
        hint.advance(4.9);
        assert!(hint.is_visible());
        hint.advance(0.2);
        assert!(!hint.is_visible());
    }

    #[test]
    fn click_hides_immediately_and_for_good() {
        let mut hint = UsageHint::default();
        hint.dismiss();
        assert!(!hint.is_visible());
        hint.advance(-10.0);
        assert!(!hint.is_visible());
    }

    #[test]
    fn status_follows_rain_state() {
        assert_eq!(UsageHint::status(true), "Click anywhere to pause rain");
        assert_eq!(UsageHint::status(false), "Click anywhere to resume rain");
    }
}
