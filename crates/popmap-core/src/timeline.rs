// crates/popmap-core/src/timeline.rs

//! # Timeline
//!
//! The selected year and the two ways to change it: dragging the slider
//! (`set_year`) and the decade arrows (`step_year`). Both return the new year
//! only when it actually changed, which is the caller's signal to redraw.

use crate::error::{PopMapError, Result};
use crate::model::Year;
use serde::{Deserialize, Serialize};

/// First year shown when the map opens.
pub const INITIAL_YEAR: Year = 1970;

/// Arrow-button step, one decade.
pub const STEP: Year = 10;

/// Inclusive slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    min: Year,
    max: Year,
}

impl YearRange {
    pub fn new(min: Year, max: Year) -> Result<Self> {
        if min > max {
            return Err(PopMapError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Year {
        self.min
    }

    pub fn max(&self) -> Year {
        self.max
    }

    #[inline]
    pub fn clamp(&self, year: Year) -> Year {
        year.clamp(self.min, self.max)
    }

    pub fn contains(&self, year: Year) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Which arrow was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    /// Signed step for this direction.
    pub fn delta(self, step: Year) -> Year {
        match self {
            Direction::Back => step.saturating_neg(),
            Direction::Forward => step,
        }
    }

    /// Tooltip for the arrow button.
    pub fn title(self) -> &'static str {
        match self {
            Direction::Back => "Previous decade",
            Direction::Forward => "Next decade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    range: YearRange,
    current: Year,
    step: Year,
}

impl Timeline {
    /// Starts at `initial`, clamped into `range`.
    pub fn new(range: YearRange, initial: Year) -> Self {
        Self {
            range,
            current: range.clamp(initial),
            step: STEP,
        }
    }

    /// Overrides the arrow step (default [`STEP`]). The step must be
    /// positive so that `Direction::Forward` never moves back.
    pub fn with_step(mut self, step: Year) -> Result<Self> {
        if step <= 0 {
            return Err(PopMapError::Config(format!(
                "step must be positive, got {step}"
            )));
        }
        self.step = step;
        Ok(self)
    }

    pub fn current(&self) -> Year {
        self.current
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    pub fn step(&self) -> Year {
        self.step
    }

    /// Slider input. Returns the new year, or `None` if nothing changed.
    pub fn set_year(&mut self, year: Year) -> Option<Year> {
        self.transition(self.range.clamp(year))
    }

    /// `clamp(current + delta, min, max)`. Returns `None` (and leaves the
    /// state alone) when the result equals the current year, e.g. when
    /// stepping outward from a boundary.
    pub fn step_year(&mut self, delta: Year) -> Option<Year> {
        let target = self.range.clamp(self.current.saturating_add(delta));
        self.transition(target)
    }

    pub fn step_towards(&mut self, direction: Direction) -> Option<Year> {
        self.step_year(direction.delta(self.step))
    }

    fn transition(&mut self, year: Year) -> Option<Year> {
        if year == self.current {
            return None;
        }
        self.current = year;
        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline::new(YearRange::new(1950, 2030).unwrap(), INITIAL_YEAR)
    }

    #[test]
    fn starts_at_1970() {
        assert_eq!(timeline().current(), 1970);
    }

    #[test]
    fn initial_year_is_clamped_into_range() {
        let t = Timeline::new(YearRange::new(1980, 2020).unwrap(), INITIAL_YEAR);
        assert_eq!(t.current(), 1980);
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            YearRange::new(2000, 1990),
            Err(PopMapError::InvalidRange { min: 2000, max: 1990 })
        ));
        assert!(YearRange::new(2000, 2000).is_ok());
    }

    #[test]
    fn step_moves_one_decade() {
        let mut t = timeline();
        assert_eq!(t.step_towards(Direction::Forward), Some(1980));
        assert_eq!(t.step_towards(Direction::Back), Some(1970));
        assert_eq!(t.step_towards(Direction::Back), Some(1960));
    }

    #[test]
    fn step_clamps_to_bounds() {
        let mut t = Timeline::new(YearRange::new(1955, 2025).unwrap(), 1960);
        assert_eq!(t.step_year(-10), Some(1955));
        assert_eq!(t.current(), 1955);
    }

    #[test]
    fn stepping_outward_at_boundary_is_noop() {
        let mut t = timeline();
        t.set_year(2030);
        assert_eq!(t.step_year(STEP), None);
        assert_eq!(t.current(), 2030);

        t.set_year(1950);
        assert_eq!(t.step_year(-STEP), None);
        assert_eq!(t.current(), 1950);
    }

    #[test]
    fn any_step_sequence_stays_in_range() {
        let mut t = timeline();
        let range = t.range();
        // Deterministic mixed walk, heavy on both directions.
        let pattern = [1, 1, 1, -1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -1, 1];
        for i in 0..400 {
            let sign = if i % 37 < 18 { -1 } else { pattern[i % pattern.len()] };
            t.step_year(sign * STEP);
            assert!(range.contains(t.current()), "left range at {}", t.current());
        }
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let mut t = timeline();
        assert_eq!(t.step_year(Year::MAX), Some(2030));
        assert_eq!(t.step_year(Year::MIN), Some(1950));
    }

    #[test]
    fn set_year_clamps_and_reports_change() {
        let mut t = timeline();
        assert_eq!(t.set_year(1970), None);
        assert_eq!(t.set_year(1990), Some(1990));
        assert_eq!(t.set_year(3000), Some(2030));
        assert_eq!(t.set_year(1000), Some(1950));
    }

    #[test]
    fn custom_step_must_be_positive() {
        assert!(matches!(timeline().with_step(0), Err(PopMapError::Config(_))));
        assert!(matches!(timeline().with_step(-5), Err(PopMapError::Config(_))));

        let mut t = timeline().with_step(5).unwrap();
        assert_eq!(t.step_towards(Direction::Forward), Some(1975));
        assert_eq!(t.step_towards(Direction::Back), Some(1970));
    }

    #[test]
    fn arrow_titles() {
        assert_eq!(Direction::Back.title(), "Previous decade");
        assert_eq!(Direction::Forward.title(), "Next decade");
        assert_eq!(Direction::Back.delta(10), -10);
    }
}
