//! Scroll Position
//!
//! Snapshot of document and viewport geometry, and the bottom check.

/// Layout values read at one instant, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Total height of the document
    pub scroll_height: f64,
    /// Vertical scroll offset
    pub scroll_y: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_height: f64, scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_height,
            scroll_y,
            viewport_height,
        }
    }

    /// Pixels left below the viewport; negative on overscroll
    pub fn distance_to_bottom(&self) -> f64 {
        self.scroll_height - (self.scroll_y + self.viewport_height)
    }

    /// Strictly closer than `threshold`: a distance equal to the threshold is not near
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Metrics with a given distance to the bottom
    fn at_distance(distance: f64) -> ScrollMetrics {
        ScrollMetrics::new(2000.0, 2000.0 - 800.0 - distance, 800.0)
    }

    #[test]
    fn test_distance() {
        assert_eq!(ScrollMetrics::new(3000.0, 1000.0, 900.0).distance_to_bottom(), 1100.0);
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        assert!(!at_distance(50.0).is_near_bottom(50.0));
        assert!(at_distance(49.0).is_near_bottom(50.0));
        assert!(at_distance(49.5).is_near_bottom(50.0));
    }

    #[test]
    fn test_near_bottom_over_range() {
        for d in 0..50 {
            assert!(at_distance(d as f64).is_near_bottom(50.0), "distance {}", d);
        }
        for d in 50..400 {
            assert!(!at_distance(d as f64).is_near_bottom(50.0), "distance {}", d);
        }
    }

    #[test]
    fn test_overscroll_and_short_pages() {
        // rubber-band scrolling past the end
        assert!(at_distance(-30.0).is_near_bottom(50.0));
        // document shorter than the viewport
        assert!(ScrollMetrics::new(500.0, 0.0, 800.0).is_near_bottom(50.0));
    }
}
