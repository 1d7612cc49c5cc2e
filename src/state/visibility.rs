/// Fraction of a section that must be on screen before it counts as in view.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Folds intersection observer entries for one section into an "in view" flag.
///
/// The flag follows the section in and out of the viewport for as long as the
/// observer lives; it is never latched. A section that is never observed stays
/// out of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    visible: bool,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one observer entry. Returns the new flag only when it flipped.
    ///
    /// The observer also reports crossings while the ratio drops back under
    /// the threshold with `is_intersecting` still set, so both are checked.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> Option<bool> {
        let visible = is_intersecting && ratio >= self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_out_of_view() {
        let tracker = VisibilityTracker::default();
        assert!(!tracker.is_visible());
        assert_eq!(tracker.threshold(), 0.1);
    }

    #[test]
    fn test_threshold_boundary() {
        let mut tracker = VisibilityTracker::default();

        // intersecting, but under 10%
        assert_eq!(tracker.observe(true, 0.05), None);
        assert!(!tracker.is_visible());

        assert_eq!(tracker.observe(true, 0.1), Some(true));
        assert!(tracker.is_visible());

        // dropping back under the threshold while still intersecting
        assert_eq!(tracker.observe(true, 0.09), Some(false));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_retriggers() {
        let mut tracker = VisibilityTracker::default();
        let changes = [
            (true, 0.5),
            (false, 0.0),
            (true, 0.3),
            (true, 1.0),
            (false, 0.0),
        ]
        .into_iter()
        .filter_map(|(hit, ratio)| tracker.observe(hit, ratio))
        .collect::<Vec<_>>();
        assert_eq!(changes, vec![true, false, true, false]);
    }

    #[test]
    fn test_not_intersecting_ignores_ratio() {
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.observe(false, 0.8), None);
        assert!(!tracker.is_visible());
    }
}
