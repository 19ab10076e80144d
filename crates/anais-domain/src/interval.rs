//! Year interval module
//!
//! A textual reference such as "segunda metade do século XVIII" resolves to a
//! closed interval of whole years inside one century.

use crate::century::CENTURY_SPAN;
use crate::statistics::round_half_even;

/// Closed interval `[start, end]` of whole years
///
/// Ordering is lexicographic on `(start, end)`, which is the order in which
/// resolved intervals are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearInterval {
    /// First year of the interval
    pub start: i32,
    /// Last year of the interval
    pub end: i32,
}

impl YearInterval {
    /// Create a new year interval
    ///
    /// # Panics
    /// Panics if `start > end`
    pub fn new(start: i32, end: i32) -> Self {
        assert!(start <= end, "Interval start must be <= end");

        Self { start, end }
    }

    /// The full century starting at `base_year`: `[base_year, base_year + 100]`
    pub fn whole_century(base_year: i32) -> Self {
        Self::new(base_year, base_year.saturating_add(CENTURY_SPAN))
    }

    /// A sub-span of the century starting at `base_year`
    ///
    /// Both offsets are clamped to `[0, 100]` independently and swapped when
    /// inverted, so the result always lies inside the whole century.
    pub fn within_century(base_year: i32, start_offset: i64, end_offset: i64) -> Self {
        let span = i64::from(CENTURY_SPAN);
        let mut start_offset = start_offset.clamp(0, span);
        let mut end_offset = end_offset.clamp(0, span);

        if start_offset > end_offset {
            std::mem::swap(&mut start_offset, &mut end_offset);
        }

        // Offsets are within [0, 100] so the narrowing cannot truncate
        Self::new(
            base_year.saturating_add(start_offset as i32),
            base_year.saturating_add(end_offset as i32),
        )
    }

    /// Exact midpoint of the interval
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.start) + f64::from(self.end)) / 2.0
    }

    /// Year standing in for this interval when merged with numeric years
    ///
    /// The midpoint rounded half to even: `[1700, 1725]` gives 1712 and
    /// `[1725, 1750]` gives 1738.
    pub fn representative_year(&self) -> i32 {
        // The midpoint of two i32 values always fits in i32
        round_half_even(self.midpoint()) as i32
    }

    /// Number of years spanned (end - start)
    pub fn width(&self) -> i32 {
        self.end - self.start
    }

    /// Check if the interval contains a year
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// The interval as a `(start, end)` pair
    pub fn as_tuple(&self) -> (i32, i32) {
        (self.start, self.end)
    }
}

impl From<YearInterval> for (i32, i32) {
    fn from(interval: YearInterval) -> Self {
        interval.as_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = YearInterval::new(1700, 1750);
        assert_eq!(interval.start, 1700);
        assert_eq!(interval.end, 1750);
    }

    #[test]
    fn test_whole_century() {
        assert_eq!(YearInterval::whole_century(1700), YearInterval::new(1700, 1800));
    }

    #[test]
    fn test_within_century_clamps_offsets() {
        let interval = YearInterval::within_century(1700, -20, 150);
        assert_eq!(interval, YearInterval::new(1700, 1800));
    }

    #[test]
    fn test_within_century_swaps_inverted_offsets() {
        let interval = YearInterval::within_century(1800, 75, 25);
        assert_eq!(interval, YearInterval::new(1825, 1875));
    }

    #[test]
    fn test_representative_year_rounds_half_to_even() {
        assert_eq!(YearInterval::new(1700, 1725).representative_year(), 1712);
        assert_eq!(YearInterval::new(1725, 1750).representative_year(), 1738);
        assert_eq!(YearInterval::new(1700, 1750).representative_year(), 1725);
        assert_eq!(YearInterval::new(1700, 1800).representative_year(), 1750);
    }

    #[test]
    fn test_ordering_is_by_start_then_end() {
        let mut intervals = vec![
            YearInterval::new(1750, 1800),
            YearInterval::new(1700, 1800),
            YearInterval::new(1700, 1750),
        ];
        intervals.sort();
        assert_eq!(
            intervals,
            vec![
                YearInterval::new(1700, 1750),
                YearInterval::new(1700, 1800),
                YearInterval::new(1750, 1800),
            ]
        );
    }

    #[test]
    fn test_width_and_contains() {
        let interval = YearInterval::new(1650, 1700);
        assert_eq!(interval.width(), 50);
        assert!(interval.contains(1650));
        assert!(interval.contains(1700));
        assert!(!interval.contains(1701));
    }

    #[test]
    #[should_panic]
    fn test_invalid_bounds() {
        YearInterval::new(1800, 1700);
    }
}
