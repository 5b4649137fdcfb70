//! Grouping and per-group reductions
//!
//! A [`Grouping`] is a key column plus a rule that maps each key to a bucket
//! of row positions. It is computed once from a source column (or a row
//! count) and can then reduce any number of target columns of matching
//! length. Each reduction returns a [`GroupingDataFrame`] aligned with the
//! keys.
//!
//! Strategies:
//!
//! | strategy | buckets | keys |
//! |----------|---------|------|
//! | [`GroupingByValue`] | one per distinct value | sorted values (primitive) or first occurrence order (object) |
//! | [`GroupingByInterval`] | one per interval between min and max | interval starts |
//! | [`GroupingByCount`] | consecutive chunks of fixed size | `0..n` |
//! | [`GroupingByPartitions`] | fixed number of consecutive chunks | `0..n` |
//! | [`GroupingByMovingWindow`] | the last `window_size` rows, overlapping | `0..rows` |
//! | [`GroupingByExpandingWindow`] | rows `0..=i`, overlapping | `0..rows` |
//! | [`GroupingStatic`] | caller supplied | caller supplied |

mod by_count;
mod by_interval;
mod by_value;
mod expanding_window;
mod facade;
mod moving_window;
mod result;
mod static_grouping;

use std::fmt::Debug;

use crate::column::{Aggregation, Column, ColumnBuilder, ColumnType, Int64Column};
use crate::error::Result;

pub use by_count::{GroupingByCount, GroupingByPartitions};
pub use by_interval::{GroupingByInterval, MAX_INTERVAL_GROUPS};
pub use by_value::GroupingByValue;
pub use expanding_window::GroupingByExpandingWindow;
pub use facade::{DataFrameGrouping, SeriesGrouping};
pub use moving_window::GroupingByMovingWindow;
pub use result::GroupingDataFrame;
pub use static_grouping::GroupingStatic;

/// Built-in per-group reductions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Min,
    Max,
}

impl Reduction {
    /// Reduce a whole column
    pub fn apply(&self, column: &Column) -> Result<crate::column::Scalar> {
        match self {
            Reduction::Sum => column.sum(),
            Reduction::Min => Ok(column.min()),
            Reduction::Max => Ok(column.max()),
        }
    }

    /// Type of the per-group result for a column of `column_type`
    pub fn output_type(&self, column_type: ColumnType) -> ColumnType {
        match self {
            Reduction::Sum => column_type.sum_type(),
            Reduction::Min | Reduction::Max => column_type,
        }
    }
}

/// Optional fast path a grouping can provide for built-in reductions
///
/// Windowed groupings overlap heavily, so reducing them group by group
/// repeats work. An incremental reducer walks the column once instead.
/// Returning `None` hands the reduction back to the generic per-group fold.
pub trait IncrementalReducer {
    fn reduce(&self, column: &Column, reduction: Reduction) -> Option<Column>;
}

/// Shared contract of all grouping strategies
pub trait Grouping: Debug + Send + Sync {
    /// Key column, one entry per group
    fn keys(&self) -> &Column;

    /// Number of groups
    fn size(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Sub-column of `column` holding the members of group `group_index`
    ///
    /// # Panics
    /// Callers guarantee `group_index < size()`; other indices panic.
    fn apply(&self, column: &Column, group_index: usize) -> Column;

    /// Incremental fast path, if the strategy has one
    fn incremental(&self) -> Option<&dyn IncrementalReducer> {
        None
    }

    /// Reduce every group with a user function
    ///
    /// The value column's type follows the function's output.
    fn aggregate(&self, column: &Column, function: &Aggregation) -> Result<GroupingDataFrame> {
        let mut builder = ColumnBuilder::with_capacity(column.column_type(), self.size());
        for i in 0..self.size() {
            builder.push(self.apply(column, i).aggregate(function)?);
        }
        GroupingDataFrame::with_default_names(self.keys().clone(), builder.build())
    }

    /// Number of elements per group, nulls included
    fn count(&self, column: &Column) -> Result<GroupingDataFrame> {
        let counts = (0..self.size())
            .map(|i| self.apply(column, i).len() as i64)
            .collect();
        GroupingDataFrame::with_default_names(self.keys().clone(), Int64Column::new(counts).into())
    }

    fn sum(&self, column: &Column) -> Result<GroupingDataFrame> {
        self.reduce(column, Reduction::Sum)
    }

    fn min(&self, column: &Column) -> Result<GroupingDataFrame> {
        self.reduce(column, Reduction::Min)
    }

    fn max(&self, column: &Column) -> Result<GroupingDataFrame> {
        self.reduce(column, Reduction::Max)
    }

    /// Apply a built-in reduction, preferring the incremental path
    fn reduce(&self, column: &Column, reduction: Reduction) -> Result<GroupingDataFrame> {
        if let Some(values) = self
            .incremental()
            .and_then(|reducer| reducer.reduce(column, reduction))
        {
            log::trace!("{:?} over {} rows: incremental path", reduction, column.len());
            return GroupingDataFrame::with_default_names(self.keys().clone(), values);
        }

        log::trace!("{:?} over {} groups: per-group fold", reduction, self.size());
        let output_type = reduction.output_type(column.column_type());
        let mut builder = ColumnBuilder::with_capacity(output_type, self.size());
        for i in 0..self.size() {
            builder.push(reduction.apply(&self.apply(column, i))?);
        }
        GroupingDataFrame::with_default_names(self.keys().clone(), builder.build())
    }
}

/// Collect index buckets into owned slices
pub(crate) fn into_buckets(buckets: Vec<Vec<usize>>) -> Vec<Box<[usize]>> {
    buckets.into_iter().map(Vec::into_boxed_slice).collect()
}
