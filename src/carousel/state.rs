//! Carousel state machine.
//!
//! Holds the logical position of the carousel and decides what a user action
//! does to it. Methods that move the carousel return the slide index the DOM
//! layer should scroll to, or `None` when the action does not apply in the
//! current mode.

use crate::config::WidgetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Arrow-paged, several (fractional) slides per view.
    Desktop,
    /// Swipe and scroll-snap, one slide per view.
    Mobile,
}

impl Mode {
    pub fn from_width(width: f64, config: &WidgetConfig) -> Self {
        if config.is_mobile_width(width) {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }
}

/// Result of a settled resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The breakpoint was crossed and the carousel entered this mode.
    Entered(Mode),
    /// Same mode as before, only the layout changed.
    Relayout(Mode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    config: WidgetConfig,
    /// One entry per slide: whether the slide has a description overlay.
    overlays: Vec<bool>,
    viewport_width: f64,
    mode: Mode,
    current_index: usize,
    active_description: Option<usize>,
    active_indicator: usize,
}

impl CarouselState {
    pub fn new(overlays: Vec<bool>, viewport_width: f64, config: WidgetConfig) -> Self {
        Self {
            mode: Mode::from_width(viewport_width, &config),
            config,
            overlays,
            viewport_width,
            current_index: 0,
            active_description: None,
            active_indicator: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn active_description(&self) -> Option<usize> {
        self.active_description
    }

    pub fn active_indicator(&self) -> usize {
        self.active_indicator
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn items_per_view(&self) -> f64 {
        self.config.items_per_view(self.viewport_width)
    }

    pub fn max_index(&self) -> usize {
        match self.mode {
            Mode::Mobile => self.item_count().saturating_sub(1),
            Mode::Desktop => {
                let visible = self.items_per_view().ceil() as usize;
                self.item_count().saturating_sub(visible)
            }
        }
    }

    pub fn indicator_count(&self) -> usize {
        match self.mode {
            Mode::Mobile => self.item_count(),
            Mode::Desktop => self.config.desktop_indicator_count,
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.mode != Mode::Desktop {
            return None;
        }
        let target = if self.current_index < self.max_index() {
            self.current_index + 1
        } else {
            0
        };
        self.go_to_slide_desktop(target as isize)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.mode != Mode::Desktop {
            return None;
        }
        let target = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.max_index()
        };
        self.go_to_slide_desktop(target as isize)
    }

    pub fn go_to_slide_desktop(&mut self, index: isize) -> Option<usize> {
        if self.mode != Mode::Desktop {
            return None;
        }
        self.current_index = clamp_index(index, self.max_index());
        self.hide_descriptions();
        Some(self.current_index)
    }

    pub fn go_to_slide(&mut self, index: isize) -> Option<usize> {
        if self.mode != Mode::Mobile || self.item_count() == 0 {
            return None;
        }
        self.current_index = clamp_index(index, self.max_index());
        self.hide_descriptions();
        Some(self.current_index)
    }

    /// Touch gesture from `start_x` to `end_x`. Moving the finger left
    /// (positive displacement) goes forward.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> Option<usize> {
        if self.mode != Mode::Mobile || self.item_count() == 0 {
            return None;
        }
        let diff = start_x - end_x;
        if diff.abs() <= self.config.swipe_threshold {
            return None;
        }

        let last = self.item_count() - 1;
        let target = if diff > 0.0 {
            if self.current_index >= last {
                0
            } else {
                self.current_index + 1
            }
        } else if self.current_index == 0 {
            last
        } else {
            self.current_index - 1
        };
        self.go_to_slide(target as isize)
    }

    /// Indicator clicks use whichever navigation the current mode has.
    pub fn select_indicator(&mut self, index: usize) -> Option<usize> {
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        match self.mode {
            Mode::Mobile => self.go_to_slide(index),
            Mode::Desktop => self.go_to_slide_desktop(index),
        }
    }

    /// Opens the overlay of slide `index`, closing any other. Toggling the
    /// open one closes it. Returns false when nothing changed.
    pub fn toggle_description(&mut self, index: usize) -> bool {
        if !self.overlays.get(index).copied().unwrap_or(false) {
            return false;
        }
        if self.active_description == Some(index) {
            self.active_description = None;
        } else {
            self.active_description = Some(index);
        }
        true
    }

    pub fn hide_descriptions(&mut self) {
        self.active_description = None;
    }

    /// Adopt the slide the user scrolled to. Mobile only.
    pub fn sync_from_scroll(&mut self, closest: usize) -> bool {
        if self.mode != Mode::Mobile {
            return false;
        }
        self.current_index = closest.min(self.max_index());
        self.refresh_indicators();
        true
    }

    pub fn refresh_indicators(&mut self) {
        self.active_indicator = self.current_index;
    }

    pub fn resize(&mut self, width: f64) -> Transition {
        self.viewport_width = width;
        let mode = Mode::from_width(width, &self.config);

        if mode != self.mode {
            self.mode = mode;
            self.current_index = self.current_index.min(self.max_index());
            self.hide_descriptions();
            self.refresh_indicators();
            Transition::Entered(mode)
        } else {
            // Desktop items-per-view may have changed, which moves max_index.
            self.current_index = self.current_index.min(self.max_index());
            Transition::Relayout(mode)
        }
    }
}

fn clamp_index(index: isize, max: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(slides: usize, width: f64) -> CarouselState {
        CarouselState::new(vec![true; slides], width, WidgetConfig::default())
    }

    #[test]
    fn desktop_next_wraps_after_max_index() {
        let mut state = carousel(6, 1200.0);
        assert_eq!(state.mode(), Mode::Desktop);
        assert_eq!(state.max_index(), 2);

        assert_eq!(state.next(), Some(1));
        assert_eq!(state.next(), Some(2));
        assert_eq!(state.next(), Some(0));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn desktop_previous_wraps_to_max_index() {
        let mut state = carousel(6, 1200.0);
        assert_eq!(state.previous(), Some(2));
        assert_eq!(state.previous(), Some(1));
    }

    #[test]
    fn desktop_max_index_depends_on_width() {
        assert_eq!(carousel(6, 900.0).max_index(), 3);
        assert_eq!(carousel(2, 1200.0).max_index(), 0);
        assert_eq!(carousel(0, 1200.0).max_index(), 0);
    }

    #[test]
    fn desktop_navigation_with_fewer_slides_than_view_stays_at_zero() {
        let mut state = carousel(3, 1200.0);
        assert_eq!(state.next(), Some(0));
        assert_eq!(state.previous(), Some(0));
    }

    #[test]
    fn arrows_do_nothing_on_mobile() {
        let mut state = carousel(6, 500.0);
        assert_eq!(state.next(), None);
        assert_eq!(state.previous(), None);
        assert_eq!(state.go_to_slide_desktop(1), None);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn mobile_swipe_forward_wraps() {
        let mut state = carousel(6, 500.0);
        assert_eq!(state.mode(), Mode::Mobile);

        assert_eq!(state.swipe(300.0, 230.0), Some(1));
        assert_eq!(state.go_to_slide(5), Some(5));
        assert_eq!(state.swipe(300.0, 230.0), Some(0));
    }

    #[test]
    fn mobile_swipe_backward_wraps() {
        let mut state = carousel(6, 500.0);
        assert_eq!(state.swipe(100.0, 200.0), Some(5));
        assert_eq!(state.swipe(100.0, 200.0), Some(4));
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut state = carousel(6, 500.0);
        assert_eq!(state.swipe(300.0, 250.0), None);
        assert_eq!(state.swipe(250.0, 300.0), None);
        assert_eq!(state.current_index(), 0);

        assert_eq!(state.swipe(300.0, 249.0), Some(1));
    }

    #[test]
    fn swipe_is_ignored_on_desktop() {
        let mut state = carousel(6, 1200.0);
        assert_eq!(state.swipe(300.0, 100.0), None);
        assert_eq!(state.go_to_slide(3), None);
    }

    #[test]
    fn go_to_slide_clamps_out_of_range() {
        let mut state = carousel(6, 500.0);
        assert_eq!(state.go_to_slide(3), Some(3));
        assert_eq!(state.go_to_slide(-5), Some(0));
        assert_eq!(state.go_to_slide(6 + 5), Some(5));
    }

    #[test]
    fn go_to_slide_desktop_clamps_to_max_index() {
        let mut state = carousel(6, 1200.0);
        assert_eq!(state.go_to_slide_desktop(11), Some(2));
        assert_eq!(state.go_to_slide_desktop(-1), Some(0));
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut state = carousel(0, 500.0);
        assert_eq!(state.swipe(300.0, 0.0), None);
        assert_eq!(state.go_to_slide(2), None);
        assert_eq!(state.indicator_count(), 0);
        assert!(!state.toggle_description(0));
    }

    #[test]
    fn only_one_description_open() {
        let mut state = carousel(4, 1200.0);
        assert!(state.toggle_description(0));
        assert_eq!(state.active_description(), Some(0));

        assert!(state.toggle_description(2));
        assert_eq!(state.active_description(), Some(2));

        assert!(state.toggle_description(2));
        assert_eq!(state.active_description(), None);
    }

    #[test]
    fn slide_without_overlay_ignores_toggle() {
        let mut state = CarouselState::new(vec![true, false], 500.0, WidgetConfig::default());
        assert!(state.toggle_description(0));
        assert!(!state.toggle_description(1));
        assert_eq!(state.active_description(), Some(0));
        assert!(!state.toggle_description(7));
    }

    #[test]
    fn navigation_closes_descriptions() {
        let mut state = carousel(6, 1200.0);
        state.toggle_description(1);
        state.next();
        assert_eq!(state.active_description(), None);

        let mut state = carousel(6, 500.0);
        state.toggle_description(1);
        state.swipe(300.0, 200.0);
        assert_eq!(state.active_description(), None);
    }

    #[test]
    fn indicator_count_per_mode() {
        assert_eq!(carousel(6, 500.0).indicator_count(), 6);
        assert_eq!(carousel(6, 1200.0).indicator_count(), 12);
        assert_eq!(carousel(30, 1200.0).indicator_count(), 12);
    }

    #[test]
    fn indicators_follow_after_refresh() {
        let mut state = carousel(6, 500.0);
        state.go_to_slide(4);
        assert_eq!(state.active_indicator(), 0);
        state.refresh_indicators();
        assert_eq!(state.active_indicator(), 4);
    }

    #[test]
    fn select_indicator_uses_mode_navigation() {
        let mut mobile = carousel(6, 500.0);
        assert_eq!(mobile.select_indicator(4), Some(4));

        let mut desktop = carousel(6, 1200.0);
        assert_eq!(desktop.select_indicator(9), Some(2));
    }

    #[test]
    fn crossing_breakpoint_enters_new_mode() {
        let mut state = carousel(6, 500.0);
        state.go_to_slide(5);
        state.toggle_description(5);

        assert_eq!(state.resize(1200.0), Transition::Entered(Mode::Desktop));
        assert_eq!(state.indicator_count(), 12);
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.active_indicator(), 2);
        assert_eq!(state.active_description(), None);
        assert_eq!(state.swipe(300.0, 100.0), None);
        assert_eq!(state.next(), Some(0));

        assert_eq!(state.resize(768.0), Transition::Entered(Mode::Mobile));
        assert_eq!(state.indicator_count(), 6);
        assert_eq!(state.next(), None);
        assert_eq!(state.swipe(300.0, 100.0), Some(1));
    }

    #[test]
    fn resize_within_mode_reclamps_desktop_index() {
        let mut state = carousel(6, 900.0);
        assert_eq!(state.go_to_slide_desktop(3), Some(3));
        assert_eq!(state.resize(1300.0), Transition::Relayout(Mode::Desktop));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn scroll_sync_only_on_mobile() {
        let mut mobile = carousel(6, 500.0);
        assert!(mobile.sync_from_scroll(3));
        assert_eq!(mobile.current_index(), 3);
        assert_eq!(mobile.active_indicator(), 3);

        let mut desktop = carousel(6, 1200.0);
        assert!(!desktop.sync_from_scroll(3));
        assert_eq!(desktop.current_index(), 0);
    }

    #[test]
    fn index_stays_in_range_through_mixed_actions() {
        let mut state = carousel(5, 1100.0);
        let widths = [1100.0, 500.0, 800.0, 1400.0, 320.0];
        for step in 0..60usize {
            match step % 6 {
                0 => {
                    state.next();
                }
                1 => {
                    state.swipe(0.0, 80.0);
                }
                2 => {
                    state.select_indicator(step);
                }
                3 => {
                    state.resize(widths[step % widths.len()]);
                }
                4 => {
                    state.previous();
                }
                _ => {
                    state.go_to_slide(step as isize - 30);
                }
            }
            assert!(state.current_index() <= state.max_index());
        }
    }
}
