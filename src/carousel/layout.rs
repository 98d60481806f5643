//! Scroll geometry for the carousel track.
//!
//! Everything here works on plain numbers read from the DOM so the math can be
//! checked without a browser.

/// Horizontal extent of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Desktop paging: each step moves by one fractional item width.
pub fn desktop_offset(index: usize, container_width: f64, items_per_view: f64) -> f64 {
    if items_per_view <= 0.0 {
        return 0.0;
    }
    index as f64 * (container_width / items_per_view)
}

/// Mobile paging: scroll so `item` (offset relative to the track) sits in the
/// middle of the container. Never negative.
pub fn centered_offset(item: Span, container_width: f64) -> f64 {
    (item.left - container_width / 2.0 + item.width / 2.0).max(0.0)
}

/// Index of the item whose center is nearest the container's center.
/// Ties keep the earlier item. Returns `None` for an empty track.
pub fn closest_to_center(container: Span, items: &[Span]) -> Option<usize> {
    let target = container.center();
    let mut best: Option<(usize, f64)> = None;

    for (index, item) in items.iter().enumerate() {
        let distance = (target - item.center()).abs();
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_offset_is_fractional_page() {
        assert_eq!(desktop_offset(0, 1000.0, 2.5), 0.0);
        assert_eq!(desktop_offset(2, 1000.0, 2.5), 800.0);
        assert_eq!(desktop_offset(3, 0.0, 3.2), 0.0);
    }

    #[test]
    fn centered_offset_floors_at_zero() {
        // First slide is narrower than half the container.
        assert_eq!(centered_offset(Span::new(10.0, 300.0), 400.0), 0.0);
        // Third slide of a 300px-wide strip in a 400px container.
        assert_eq!(centered_offset(Span::new(600.0, 300.0), 400.0), 550.0);
    }

    #[test]
    fn closest_to_center_picks_nearest_item() {
        let container = Span::new(0.0, 400.0);
        let items = [
            Span::new(-500.0, 300.0),
            Span::new(-180.0, 300.0),
            Span::new(60.0, 300.0),
            Span::new(380.0, 300.0),
        ];
        assert_eq!(closest_to_center(container, &items), Some(2));
    }

    #[test]
    fn closest_to_center_keeps_first_on_tie() {
        let container = Span::new(0.0, 200.0);
        let items = [Span::new(0.0, 100.0), Span::new(100.0, 100.0)];
        assert_eq!(closest_to_center(container, &items), Some(0));
    }

    #[test]
    fn closest_to_center_empty_track() {
        assert_eq!(closest_to_center(Span::new(0.0, 100.0), &[]), None);
    }
}
