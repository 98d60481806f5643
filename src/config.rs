use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Every tunable the widgets read. Values mirror the page's CSS breakpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetConfig {
    /// Widths at or below this are Mobile.
    pub mobile_breakpoint: f64,
    /// Widths at or above this show the widest desktop layout.
    pub wide_breakpoint: f64,
    pub items_per_view_wide: f64,
    pub items_per_view_medium: f64,
    pub items_per_view_narrow: f64,
    /// Desktop indicators stand for scroll buckets, not slides, so the count is fixed.
    pub desktop_indicator_count: usize,
    pub swipe_threshold: f64,
    pub resize_debounce_ms: u32,
    pub scroll_debounce_ms: u32,
    /// Used when the browser has no `scrollend` event.
    pub settle_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            wide_breakpoint: 1024.0,
            items_per_view_wide: 3.2,
            items_per_view_medium: 2.5,
            items_per_view_narrow: 1.2,
            desktop_indicator_count: 12,
            swipe_threshold: 50.0,
            resize_debounce_ms: 150,
            scroll_debounce_ms: 50,
            settle_delay_ms: 50,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
        }
    }
}

impl WidgetConfig {
    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint
    }

    /// Fractional number of slides visible at once on desktop layouts.
    pub fn items_per_view(&self, width: f64) -> f64 {
        if width >= self.wide_breakpoint {
            self.items_per_view_wide
        } else if width >= self.mobile_breakpoint {
            self.items_per_view_medium
        } else {
            self.items_per_view_narrow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_mobile() {
        let config = WidgetConfig::default();
        assert!(config.is_mobile_width(768.0));
        assert!(config.is_mobile_width(320.0));
        assert!(!config.is_mobile_width(769.0));
    }

    #[test]
    fn items_per_view_steps() {
        let config = WidgetConfig::default();
        assert_eq!(config.items_per_view(1200.0), 3.2);
        assert_eq!(config.items_per_view(1024.0), 3.2);
        assert_eq!(config.items_per_view(900.0), 2.5);
        assert_eq!(config.items_per_view(768.0), 2.5);
        assert_eq!(config.items_per_view(500.0), 1.2);
    }
}
