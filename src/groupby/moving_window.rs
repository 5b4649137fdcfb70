use std::ops::Range;

use crate::column::{Column, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};
use crate::groupby::{Grouping, IncrementalReducer, Reduction};

/// Overlapping groups of the `window_size` most recent rows
///
/// Group `i` covers rows `[i + 1 - window_size, i]`. Until the window is
/// completely populated the group is empty, so there are as many groups as
/// rows and the first `window_size - 1` of them are empty.
///
/// `sum` runs incrementally for boolean, integer, float and text columns. The
/// running count of live values only grows with incoming values and shrinks
/// (down to zero) with incoming nulls; it is not decremented when a value
/// leaves the window. A window is reported as null whenever that count is
/// zero, which can differ from the per-group fold once nulls have entered.
///
/// Text sums concatenate; a value leaving the window retracts exactly one
/// leading character, which is only exact for single-character values.
#[derive(Debug, Clone)]
pub struct GroupingByMovingWindow {
    keys: Column,
    window_size: usize,
    size: usize,
}

impl GroupingByMovingWindow {
    /// Windows of `window_size` rows over `size` rows
    pub fn new(window_size: usize, size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidInput("window size must be > 0".to_string()));
        }
        log::debug!("grouping by moving window {}: {} groups", window_size, size);
        Ok(Self {
            keys: Int64Column::sequence(0, size as i64).into(),
            window_size,
            size,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Rows covered by group `group_index`; empty until the window is full
    pub fn group_range(&self, group_index: usize) -> Range<usize> {
        match (group_index + 1).checked_sub(self.window_size) {
            Some(start) => start..group_index + 1,
            None => 0..0,
        }
    }

    fn rolling_sum<S: RollingSum>(
        &self,
        values: impl Fn(usize) -> Option<S::Value>,
    ) -> Vec<Option<S::Value>> {
        let mut output = Vec::with_capacity(self.size);
        let mut rolling_sum = S::default();
        let mut value_count = 0usize;

        for i in 0..self.size {
            match values(i) {
                Some(v) => {
                    rolling_sum.roll_in(v);
                    value_count += 1;
                }
                None => value_count = value_count.saturating_sub(1),
            }
            if i >= self.window_size {
                if let Some(leaving) = values(i - self.window_size) {
                    rolling_sum.roll_out(leaving);
                }
            }
            if i + 1 >= self.window_size && value_count > 0 {
                output.push(Some(rolling_sum.total()));
            } else {
                output.push(None);
            }
        }

        output
    }

    fn rolling_concat(&self, column: &StringColumn) -> Vec<Option<String>> {
        let mut output = Vec::with_capacity(self.size);
        let mut buffer = String::new();
        let mut value_count = 0usize;

        for i in 0..self.size {
            match column.value(i) {
                Some(v) => {
                    buffer.push_str(v);
                    value_count += 1;
                }
                None => value_count = value_count.saturating_sub(1),
            }
            if i >= self.window_size
                && column.value(i - self.window_size).is_some()
                && !buffer.is_empty()
            {
                buffer.remove(0);
            }
            if i + 1 >= self.window_size && value_count > 0 {
                output.push(Some(buffer.clone()));
            } else {
                output.push(None);
            }
        }

        output
    }
}

impl Grouping for GroupingByMovingWindow {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        assert!(group_index < self.size, "group index {} out of range", group_index);
        let range = self.group_range(group_index);
        column.slice(range.start, range.end)
    }

    fn incremental(&self) -> Option<&dyn IncrementalReducer> {
        Some(self)
    }
}

impl IncrementalReducer for GroupingByMovingWindow {
    fn reduce(&self, column: &Column, reduction: Reduction) -> Option<Column> {
        if reduction != Reduction::Sum {
            return None;
        }
        let sums = match column {
            Column::Boolean(_) => {
                let ints = column.to_int64().ok()?;
                Int64Column::from_options(self.rolling_sum::<IntegerSum>(|i| ints.value(i))).into()
            }
            Column::Int64(col) => {
                Int64Column::from_options(self.rolling_sum::<IntegerSum>(|i| col.value(i))).into()
            }
            Column::Float64(col) => {
                Float64Column::from_options(self.rolling_sum::<FloatSum>(|i| col.value(i))).into()
            }
            Column::String(col) => StringColumn::from_options(self.rolling_concat(col)).into(),
            Column::Object(_) => return None,
        };
        Some(sums)
    }
}

/// Running sum that values can enter and leave
trait RollingSum: Default {
    type Value: Copy;

    fn roll_in(&mut self, value: Self::Value);
    fn roll_out(&mut self, value: Self::Value);
    fn total(&self) -> Self::Value;
}

#[derive(Default)]
struct IntegerSum(i64);

impl RollingSum for IntegerSum {
    type Value = i64;

    fn roll_in(&mut self, value: i64) {
        self.0 = self.0.wrapping_add(value);
    }

    fn roll_out(&mut self, value: i64) {
        self.0 = self.0.wrapping_sub(value);
    }

    fn total(&self) -> i64 {
        self.0
    }
}

/// Float sum keeping non-finite values out of the running total
///
/// Subtracting a NaN or an infinity can never restore the total, so they are
/// counted instead and applied when the total is read.
#[derive(Default)]
struct FloatSum {
    finite: f64,
    nan: usize,
    positive_infinite: usize,
    negative_infinite: usize,
}

impl FloatSum {
    fn counter(&mut self, value: f64) -> Option<&mut usize> {
        if value.is_nan() {
            Some(&mut self.nan)
        } else if value == f64::INFINITY {
            Some(&mut self.positive_infinite)
        } else if value == f64::NEG_INFINITY {
            Some(&mut self.negative_infinite)
        } else {
            None
        }
    }
}

impl RollingSum for FloatSum {
    type Value = f64;

    fn roll_in(&mut self, value: f64) {
        match self.counter(value) {
            Some(count) => *count += 1,
            None => self.finite += value,
        }
    }

    fn roll_out(&mut self, value: f64) {
        match self.counter(value) {
            Some(count) => *count = count.saturating_sub(1),
            None => self.finite -= value,
        }
    }

    fn total(&self) -> f64 {
        match (self.nan, self.positive_infinite, self.negative_infinite) {
            (0, 0, 0) => self.finite,
            (0, _, 0) => f64::INFINITY,
            (0, 0, _) => f64::NEG_INFINITY,
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Scalar;

    #[test]
    fn test_partial_windows_are_empty() {
        let grouping = GroupingByMovingWindow::new(3, 5).unwrap();
        let col: Column = Int64Column::new(vec![1, 2, 3, 4, 5]).into();
        assert!(grouping.apply(&col, 1).is_empty());
        assert_eq!(
            grouping.apply(&col, 4).scalars(),
            vec![Scalar::Int64(3), Scalar::Int64(4), Scalar::Int64(5)]
        );
    }

    #[test]
    fn test_rolling_sum_matches_example() {
        let grouping = GroupingByMovingWindow::new(2, 4).unwrap();
        let col: Column = Int64Column::new(vec![1, 2, 3, 4]).into();
        let result = grouping.sum(&col).unwrap();
        assert_eq!(
            result.values().scalars(),
            vec![Scalar::Null, Scalar::Int64(3), Scalar::Int64(5), Scalar::Int64(7)]
        );
    }

    #[test]
    fn test_min_max_use_per_group_fold() {
        let grouping = GroupingByMovingWindow::new(2, 3).unwrap();
        let col: Column = Int64Column::new(vec![5, 1, 4]).into();
        assert!(grouping.reduce_incrementally(&col, Reduction::Min).is_none());
        assert_eq!(
            grouping.min(&col).unwrap().values().scalars(),
            vec![Scalar::Null, Scalar::Int64(1), Scalar::Int64(1)]
        );
    }

    #[test]
    fn test_float_sum_recovers_after_nan_leaves() {
        let grouping = GroupingByMovingWindow::new(2, 4).unwrap();
        let col: Column = Float64Column::new(vec![f64::NAN, 1.0, 2.0, 3.0]).into();
        let rolling = grouping.sum(&col).unwrap().values().scalars();

        assert_eq!(rolling[0], Scalar::Null);
        assert!(rolling[1].as_f64().unwrap().is_nan());
        assert_eq!(&rolling[2..], &[Scalar::Float64(3.0), Scalar::Float64(5.0)]);
    }

    #[test]
    fn test_float_sum_with_infinities() {
        let grouping = GroupingByMovingWindow::new(2, 4).unwrap();
        let col: Column =
            Float64Column::new(vec![f64::INFINITY, 1.0, f64::NEG_INFINITY, 2.0]).into();
        let rolling = grouping.sum(&col).unwrap().values().scalars();

        assert_eq!(rolling[1], Scalar::Float64(f64::INFINITY));
        assert_eq!(rolling[2], Scalar::Float64(f64::NEG_INFINITY));
        assert_eq!(rolling[3], Scalar::Float64(f64::NEG_INFINITY));
    }

    #[test]
    fn test_zero_window_is_rejected() {
        assert!(matches!(
            GroupingByMovingWindow::new(0, 3),
            Err(Error::InvalidInput(_))
        ));
    }

    impl GroupingByMovingWindow {
        fn reduce_incrementally(&self, column: &Column, reduction: Reduction) -> Option<Column> {
            IncrementalReducer::reduce(self, column, reduction)
        }
    }
}
