//! L4 Atomic Layer: Viewport intersection thresholds
//!
//! An element is tracked against two horizontal lines inside the viewport.
//! The entry line sits `entry` of the way down the viewport and is crossed by
//! the element's top edge; the exit line sits `exit` of the way down and is
//! crossed by the element's bottom edge.

/// Vertical extent of an element in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Visible window of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }
}

/// Entry/exit viewport fractions (0.0 = top edge, 1.0 = bottom edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoints {
    pub entry: f64,
    pub exit: f64,
}

impl Default for TriggerPoints {
    fn default() -> Self {
        Self {
            entry: 0.8,
            exit: 0.2,
        }
    }
}

/// Where an element sits relative to the trigger lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// Top edge still below the entry line
    #[default]
    Before,
    /// Between the lines
    Active,
    /// Bottom edge above the exit line
    After,
}

/// Line crossings, named after the scroll direction that caused them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolling down, top crossed the entry line
    Enter,
    /// Scrolling down, bottom crossed the exit line
    Leave,
    /// Scrolling up, bottom came back below the exit line
    EnterBack,
    /// Scrolling up, top went back below the entry line
    LeaveBack,
}

impl TriggerPoints {
    pub fn zone(&self, bounds: Bounds, viewport: Viewport) -> Zone {
        let entry_line = viewport.scroll_top + viewport.height * self.entry;
        let exit_line = viewport.scroll_top + viewport.height * self.exit;

        if bounds.top > entry_line {
            Zone::Before
        } else if bounds.bottom() < exit_line {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

/// Events fired when an element moves from zone `from` to zone `to`.
///
/// A jump across both lines in one observation fires both events in order.
pub fn crossings(from: Zone, to: Zone) -> &'static [TriggerEvent] {
    use TriggerEvent::*;
    match (from, to) {
        (Zone::Before, Zone::Active) => &[Enter],
        (Zone::Active, Zone::After) => &[Leave],
        (Zone::Before, Zone::After) => &[Enter, Leave],
        (Zone::After, Zone::Active) => &[EnterBack],
        (Zone::Active, Zone::Before) => &[LeaveBack],
        (Zone::After, Zone::Before) => &[EnterBack, LeaveBack],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_against_default_lines() {
        let points = TriggerPoints::default();
        let element = Bounds::new(1000.0, 400.0);

        // Entry line at 800: element top at 1000 is below it
        assert_eq!(points.zone(element, Viewport::new(0.0, 1000.0)), Zone::Before);
        // Entry line at 1000: top reaches it exactly
        assert_eq!(points.zone(element, Viewport::new(200.0, 1000.0)), Zone::Active);
        // Exit line at 1500: bottom (1400) is above it
        assert_eq!(points.zone(element, Viewport::new(1300.0, 1000.0)), Zone::After);
    }

    #[test]
    fn test_crossings() {
        assert_eq!(crossings(Zone::Before, Zone::Active), [TriggerEvent::Enter]);
        assert_eq!(crossings(Zone::Active, Zone::Before), [TriggerEvent::LeaveBack]);
        assert_eq!(
            crossings(Zone::Before, Zone::After),
            [TriggerEvent::Enter, TriggerEvent::Leave]
        );
        assert!(crossings(Zone::Active, Zone::Active).is_empty());
    }
}
