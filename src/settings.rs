/// Timing and gesture knobs for the interactive pieces of the site.
///
/// Provided as context at the app root; components fall back to
/// [`Settings::default`] when rendered outside of it (e.g. in isolation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub carousel_interval_ms: u64,
    pub swipe_threshold_px: f64,
    pub chat_reply_delay_ms: u64,
    pub nav_scroll_threshold_px: f64,
    pub toast_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 5000,
            swipe_threshold_px: 150.0,
            chat_reply_delay_ms: 1000,
            nav_scroll_threshold_px: 10.0,
            toast_duration_ms: 4000,
        }
    }
}

impl Settings {
    /// Whether the page has scrolled far enough for the nav bar to switch style.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.nav_scroll_threshold_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.carousel_interval_ms, 5000);
        assert_eq!(settings.swipe_threshold_px, 150.0);
        assert_eq!(settings.chat_reply_delay_ms, 1000);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let settings = Settings::default();
        assert!(!settings.is_scrolled(0.0));
        assert!(!settings.is_scrolled(10.0));
        assert!(settings.is_scrolled(10.5));
    }
}
