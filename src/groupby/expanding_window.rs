use std::cmp::Ordering;
use std::ops::Range;

use crate::column::{
    compare_f64, BooleanColumn, Column, Float64Column, Int64Column, ObjectColumn, StringColumn,
};
use crate::groupby::{Grouping, IncrementalReducer, Reduction};

/// Prefix groups: group `i` covers rows `0..=i`
///
/// `sum`, `min` and `max` are computed in a single running pass. Positions
/// before the first non-null value are null; afterwards the running value is
/// carried across null rows.
#[derive(Debug, Clone)]
pub struct GroupingByExpandingWindow {
    keys: Column,
    size: usize,
}

impl GroupingByExpandingWindow {
    pub fn new(size: usize) -> Self {
        log::debug!("grouping by expanding window: {} groups", size);
        Self {
            keys: Int64Column::sequence(0, size as i64).into(),
            size,
        }
    }

    /// Rows covered by group `group_index`
    pub fn group_range(&self, group_index: usize) -> Range<usize> {
        0..group_index + 1
    }

    /// Running fold over rows `0..size`
    ///
    /// `step` combines the running value with the next non-null value.
    fn running<T: Clone>(
        &self,
        value: impl Fn(usize) -> Option<T>,
        step: impl Fn(T, T) -> T,
    ) -> Vec<Option<T>> {
        let mut output = Vec::with_capacity(self.size);
        let mut current: Option<T> = None;
        for i in 0..self.size {
            if let Some(v) = value(i) {
                current = Some(match current.take() {
                    Some(c) => step(c, v),
                    None => v,
                });
            }
            output.push(current.clone());
        }
        output
    }

    fn running_sum(&self, column: &Column) -> Option<Column> {
        let sums = match column {
            Column::Boolean(col) => Int64Column::from_options(
                self.running(|i| col.value(i).map(i64::from), i64::wrapping_add),
            )
            .into(),
            Column::Int64(col) => {
                Int64Column::from_options(self.running(|i| col.value(i), i64::wrapping_add)).into()
            }
            Column::Float64(col) => {
                Float64Column::from_options(self.running(|i| col.value(i), |a, b| a + b)).into()
            }
            Column::String(col) => StringColumn::from_options(self.running(
                |i| col.value(i).map(str::to_string),
                |mut a, b| {
                    a.push_str(&b);
                    a
                },
            ))
            .into(),
            Column::Object(_) => return None,
        };
        Some(sums)
    }

    /// Running extremum; `keep` is the ordering under which the running value survives
    fn running_extremum(&self, column: &Column, keep: Ordering) -> Column {
        let pick = |current_vs_next: Ordering| {
            current_vs_next == keep || current_vs_next == Ordering::Equal
        };
        match column {
            Column::Boolean(col) => BooleanColumn::from_options(
                self.running(|i| col.value(i), |a, b| if pick(a.cmp(&b)) { a } else { b }),
            )
            .into(),
            Column::Int64(col) => Int64Column::from_options(
                self.running(|i| col.value(i), |a, b| if pick(a.cmp(&b)) { a } else { b }),
            )
            .into(),
            Column::Float64(col) => Float64Column::from_options(self.running(
                |i| col.value(i),
                |a, b| if pick(compare_f64(a, b)) { a } else { b },
            ))
            .into(),
            Column::String(col) => StringColumn::from_options(
                self.running(|i| col.value(i), |a, b| if pick(a.cmp(b)) { a } else { b })
                    .into_iter()
                    .map(|v| v.map(str::to_string))
                    .collect(),
            )
            .into(),
            Column::Object(col) => ObjectColumn::new(
                self.running(|i| col.value(i), |a, b| if pick(a.cmp(b)) { a } else { b })
                    .into_iter()
                    .map(|v| v.cloned())
                    .collect(),
            )
            .into(),
        }
    }
}

impl Grouping for GroupingByExpandingWindow {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        assert!(group_index < self.size, "group index {} out of range", group_index);
        column.slice(0, group_index + 1)
    }

    fn incremental(&self) -> Option<&dyn IncrementalReducer> {
        Some(self)
    }
}

impl IncrementalReducer for GroupingByExpandingWindow {
    fn reduce(&self, column: &Column, reduction: Reduction) -> Option<Column> {
        match reduction {
            Reduction::Sum => self.running_sum(column),
            Reduction::Min => Some(self.running_extremum(column, Ordering::Less)),
            Reduction::Max => Some(self.running_extremum(column, Ordering::Greater)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnType, Scalar};

    #[test]
    fn test_running_sum_skips_leading_nulls() {
        let col: Column =
            Int64Column::from_options(vec![None, Some(1), Some(2), None, Some(3)]).into();
        let grouping = GroupingByExpandingWindow::new(5);
        assert_eq!(
            grouping.sum(&col).unwrap().values().scalars(),
            vec![
                Scalar::Null,
                Scalar::Int64(1),
                Scalar::Int64(3),
                Scalar::Int64(3),
                Scalar::Int64(6),
            ]
        );
    }

    #[test]
    fn test_running_min_and_max() {
        let col: Column = Int64Column::from_options(vec![Some(3), Some(1), None, Some(2)]).into();
        let grouping = GroupingByExpandingWindow::new(4);
        assert_eq!(
            grouping.min(&col).unwrap().values().scalars(),
            vec![Scalar::Int64(3), Scalar::Int64(1), Scalar::Int64(1), Scalar::Int64(1)]
        );
        assert_eq!(
            grouping.max(&col).unwrap().values().scalars(),
            vec![Scalar::Int64(3), Scalar::Int64(3), Scalar::Int64(3), Scalar::Int64(3)]
        );
    }

    #[test]
    fn test_boolean_sum_counts_trues() {
        let col: Column = BooleanColumn::new(vec![true, false, true]).into();
        let result = GroupingByExpandingWindow::new(3).sum(&col).unwrap();
        assert_eq!(result.values().column_type(), ColumnType::Int64);
        assert_eq!(
            result.values().scalars(),
            vec![Scalar::Int64(1), Scalar::Int64(1), Scalar::Int64(2)]
        );
    }

    #[test]
    fn test_string_running_values() {
        let col: Column = StringColumn::from_strs(&["b", "a", "c"]).into();
        let grouping = GroupingByExpandingWindow::new(3);
        assert_eq!(
            grouping.sum(&col).unwrap().values().scalars(),
            vec![
                Scalar::String("b".into()),
                Scalar::String("ba".into()),
                Scalar::String("bac".into()),
            ]
        );
        assert_eq!(
            grouping.min(&col).unwrap().values().scalars(),
            vec![
                Scalar::String("b".into()),
                Scalar::String("a".into()),
                Scalar::String("a".into()),
            ]
        );
    }

    #[test]
    fn test_empty_input_keeps_type() {
        let col: Column = Float64Column::new(Vec::new()).into();
        let result = GroupingByExpandingWindow::new(0).max(&col).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.values().column_type(), ColumnType::Float64);
    }

    #[test]
    fn test_object_sum_falls_back_to_fold() {
        let col: Column = ObjectColumn::from_values(vec![1i64, 2]).into();
        let grouping = GroupingByExpandingWindow::new(2);
        assert!(grouping.sum(&col).is_err());
        assert_eq!(
            grouping.max(&col).unwrap().values().scalars(),
            vec![Scalar::Object(1i64.into()), Scalar::Object(2i64.into())]
        );
    }
}
