use crate::core::VariableTable;
use crate::error::{PlotResult, RangeError};
use crate::expr::Expression;

/// Relative slack applied when deciding whether `end` is the last step.
const STEP_COUNT_EPSILON: f64 = 1e-9;

/// Most values a single sweep may produce.
pub const MAX_SWEEP_STEPS: usize = 10_000_000;

/// Validated numeric range; values are `start + i * step` for `i in 0..len`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

impl SweepRange {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(RangeError::NonFinite { start, end, step });
        }
        if step == 0.0 {
            return Err(RangeError::ZeroStep);
        }

        let span = end - start;
        if span != 0.0 && span.signum() != step.signum() {
            return Err(RangeError::Unreachable { start, end, step });
        }

        let ratio = span / step;
        if !ratio.is_finite() {
            return Err(RangeError::NonFinite { start, end, step });
        }
        let steps = (ratio + STEP_COUNT_EPSILON * ratio.max(1.0)).floor();
        if steps >= MAX_SWEEP_STEPS as f64 {
            return Err(RangeError::TooManySteps {
                steps: steps + 1.0,
                limit: MAX_SWEEP_STEPS,
            });
        }
        let len = steps as usize + 1;

        Ok(Self {
            start,
            end,
            step,
            len,
        })
    }

    /// Evaluates start, end and step (in that order) against `variables`.
    pub fn from_expressions(
        start: &Expression,
        end: &Expression,
        step: &Expression,
        variables: &VariableTable,
    ) -> PlotResult<Self> {
        let start = start.eval(variables)?;
        let end = end.eval(variables)?;
        let step = step.eval(variables)?;
        Ok(Self::new(start, end, step)?)
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    /// Number of values produced; always at least one.
    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Restartable: each call yields a fresh iterator from `start`.
    #[must_use]
    pub fn values(self) -> SweepValues {
        SweepValues {
            range: self,
            index: 0,
        }
    }
}

/// Lazy iterator over the values of a [`SweepRange`].
#[derive(Debug, Clone)]
pub struct SweepValues {
    range: SweepRange,
    index: usize,
}

impl Iterator for SweepValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.range.len {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let value = self.range.start + index as f64 * self.range.step;
        let is_last = self.index == self.range.len;
        let tolerance = STEP_COUNT_EPSILON * self.range.step.abs();
        if is_last && (value - self.range.end).abs() <= tolerance {
            return Some(self.range.end);
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepValues {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_when_start_equals_end() {
        let range = SweepRange::new(3.0, 3.0, 0.5).expect("range");
        assert_eq!(range.values().collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn descending_range_with_negative_step() {
        let range = SweepRange::new(1.0, -1.0, -1.0).expect("range");
        assert_eq!(range.values().collect::<Vec<_>>(), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn end_is_not_overshot_when_step_does_not_divide_span() {
        let range = SweepRange::new(0.0, 1.0, 0.3).expect("range");
        let values: Vec<f64> = range.values().collect();
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| *v <= 1.0));
    }

    #[test]
    fn fractional_step_lands_on_end() {
        let range = SweepRange::new(-1.0, 1.0, 0.05).expect("range");
        assert_eq!(range.len(), 41);
        assert_eq!(range.values().last(), Some(1.0));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            SweepRange::new(f64::NAN, 1.0, 1.0),
            Err(RangeError::NonFinite { .. })
        ));
    }

    #[test]
    fn step_count_is_capped() {
        let steps = MAX_SWEEP_STEPS as f64;
        assert_eq!(
            SweepRange::new(0.0, steps - 1.0, 1.0).expect("range").len(),
            MAX_SWEEP_STEPS
        );
        assert!(matches!(
            SweepRange::new(0.0, steps, 1.0),
            Err(RangeError::TooManySteps { .. })
        ));
        assert!(matches!(
            SweepRange::new(0.0, 1e30, 1.0),
            Err(RangeError::TooManySteps { limit: MAX_SWEEP_STEPS, .. })
        ));
    }

    #[test]
    fn values_report_exact_size() {
        let range = SweepRange::new(0.0, 10.0, 2.5).expect("range");
        let mut values = range.values();
        assert_eq!(values.len(), 5);
        values.next();
        assert_eq!(values.len(), 4);
    }
}
