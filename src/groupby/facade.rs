//! Groupings bound to their source
//!
//! [`SeriesGrouping`] keeps the column a grouping reduces, so reductions need
//! no arguments. [`DataFrameGrouping`] keeps a whole table and reduces its
//! columns by name, labelling the result after the grouping and the target.

use crate::column::{Aggregation, Column};
use crate::config::{GroupingConfig, GROUP_KEY};
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::groupby::{
    Grouping, GroupingByCount, GroupingByExpandingWindow, GroupingByInterval,
    GroupingByMovingWindow, GroupingByPartitions, GroupingByValue, GroupingDataFrame,
};

/// A grouping bound to a single column
#[derive(Debug)]
pub struct SeriesGrouping<'a> {
    source: &'a Column,
    grouping: Box<dyn Grouping>,
    config: GroupingConfig,
}

impl<'a> SeriesGrouping<'a> {
    pub fn new(source: &'a Column, grouping: impl Grouping + 'static) -> Self {
        Self {
            source,
            grouping: Box::new(grouping),
            config: GroupingConfig::default(),
        }
    }

    /// Name results as `config` says
    pub fn with_config(mut self, config: GroupingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn source(&self) -> &Column {
        self.source
    }

    pub fn grouping(&self) -> &dyn Grouping {
        self.grouping.as_ref()
    }

    pub fn size(&self) -> usize {
        self.grouping.size()
    }

    pub fn is_empty(&self) -> bool {
        self.grouping.is_empty()
    }

    pub fn keys(&self) -> &Column {
        self.grouping.keys()
    }

    /// Members of group `group_index`
    pub fn apply(&self, group_index: usize) -> Column {
        self.grouping.apply(self.source, group_index)
    }

    pub fn aggregate(&self, function: &Aggregation) -> Result<GroupingDataFrame> {
        self.named(self.grouping.aggregate(self.source, function)?)
    }

    pub fn count(&self) -> Result<GroupingDataFrame> {
        self.named(self.grouping.count(self.source)?)
    }

    pub fn sum(&self) -> Result<GroupingDataFrame> {
        self.named(self.grouping.sum(self.source)?)
    }

    pub fn min(&self) -> Result<GroupingDataFrame> {
        self.named(self.grouping.min(self.source)?)
    }

    pub fn max(&self) -> Result<GroupingDataFrame> {
        self.named(self.grouping.max(self.source)?)
    }

    fn named(&self, result: GroupingDataFrame) -> Result<GroupingDataFrame> {
        if self.config == GroupingConfig::default() {
            Ok(result)
        } else {
            result.with_config(&self.config)
        }
    }
}

/// A grouping bound to a table
///
/// `label` names the key column of every renamed result: the grouped column
/// for value and interval groupings, `key` otherwise. Reducing the grouped
/// column itself would give both result columns the same name, so
/// `aggregate`, `sum`, `min` and `max` return
/// [`Error::DuplicateColumnName`](crate::error::Error::DuplicateColumnName)
/// for it.
#[derive(Debug)]
pub struct DataFrameGrouping<'a> {
    label: String,
    source: &'a DataFrame,
    grouping: Box<dyn Grouping>,
}

impl<'a> DataFrameGrouping<'a> {
    pub fn new(
        label: impl Into<String>,
        source: &'a DataFrame,
        grouping: impl Grouping + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            source,
            grouping: Box::new(grouping),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &DataFrame {
        self.source
    }

    pub fn grouping(&self) -> &dyn Grouping {
        self.grouping.as_ref()
    }

    pub fn size(&self) -> usize {
        self.grouping.size()
    }

    pub fn is_empty(&self) -> bool {
        self.grouping.is_empty()
    }

    pub fn keys(&self) -> &Column {
        self.grouping.keys()
    }

    /// Members of group `group_index` in column `name`
    pub fn apply(&self, name: &str, group_index: usize) -> Result<Column> {
        Ok(self.grouping.apply(self.source.column(name)?, group_index))
    }

    /// Group sizes, counted over the table's index
    ///
    /// The result keeps the default `key` / `value` names.
    pub fn count(&self) -> Result<GroupingDataFrame> {
        self.grouping.count(&self.source.index_or_positions())
    }

    pub fn aggregate(&self, name: &str, function: &Aggregation) -> Result<GroupingDataFrame> {
        let column = self.source.column(name)?;
        self.grouping
            .aggregate(column, function)?
            .with_names(self.label.clone(), name)
    }

    pub fn sum(&self, name: &str) -> Result<GroupingDataFrame> {
        let column = self.source.column(name)?;
        self.grouping.sum(column)?.with_names(self.label.clone(), name)
    }

    pub fn min(&self, name: &str) -> Result<GroupingDataFrame> {
        let column = self.source.column(name)?;
        self.grouping.min(column)?.with_names(self.label.clone(), name)
    }

    pub fn max(&self, name: &str) -> Result<GroupingDataFrame> {
        let column = self.source.column(name)?;
        self.grouping.max(column)?.with_names(self.label.clone(), name)
    }
}

impl Column {
    /// Group this column by its distinct values
    pub fn group_by_value(&self) -> SeriesGrouping<'_> {
        SeriesGrouping::new(self, GroupingByValue::from_column(self))
    }

    /// Group this numeric column into intervals of width `interval`
    pub fn group_by_interval(&self, interval: i64) -> Result<SeriesGrouping<'_>> {
        Ok(SeriesGrouping::new(
            self,
            GroupingByInterval::from_column(self, interval)?,
        ))
    }

    /// Consecutive chunks of `partition_size` rows
    pub fn group_by_count(&self, partition_size: usize) -> Result<SeriesGrouping<'_>> {
        Ok(SeriesGrouping::new(
            self,
            GroupingByCount::new(partition_size, self.len())?,
        ))
    }

    /// `partition_count` chunks of roughly equal size
    pub fn group_by_partitions(&self, partition_count: usize) -> Result<SeriesGrouping<'_>> {
        Ok(SeriesGrouping::new(
            self,
            GroupingByPartitions::new(partition_count, self.len())?,
        ))
    }

    /// Windows over the last `window_size` rows
    pub fn group_by_moving_window(&self, window_size: usize) -> Result<SeriesGrouping<'_>> {
        Ok(SeriesGrouping::new(
            self,
            GroupingByMovingWindow::new(window_size, self.len())?,
        ))
    }

    /// Windows over all rows up to each position
    pub fn group_by_expanding_window(&self) -> SeriesGrouping<'_> {
        SeriesGrouping::new(self, GroupingByExpandingWindow::new(self.len()))
    }
}

impl DataFrame {
    /// Group rows by the distinct values of column `name`
    pub fn group_by_value(&self, name: &str) -> Result<DataFrameGrouping<'_>> {
        let grouping = GroupingByValue::from_column(self.column(name)?);
        Ok(DataFrameGrouping::new(name, self, grouping))
    }

    /// Group rows by intervals of width `interval` over column `name`
    pub fn group_by_interval(&self, name: &str, interval: i64) -> Result<DataFrameGrouping<'_>> {
        let grouping = GroupingByInterval::from_column(self.column(name)?, interval)?;
        Ok(DataFrameGrouping::new(name, self, grouping))
    }

    pub fn group_by_count(&self, partition_size: usize) -> Result<DataFrameGrouping<'_>> {
        let grouping = GroupingByCount::new(partition_size, self.row_count())?;
        Ok(DataFrameGrouping::new(GROUP_KEY, self, grouping))
    }

    pub fn group_by_partitions(&self, partition_count: usize) -> Result<DataFrameGrouping<'_>> {
        let grouping = GroupingByPartitions::new(partition_count, self.row_count())?;
        Ok(DataFrameGrouping::new(GROUP_KEY, self, grouping))
    }

    pub fn group_by_moving_window(&self, window_size: usize) -> Result<DataFrameGrouping<'_>> {
        let grouping = GroupingByMovingWindow::new(window_size, self.row_count())?;
        Ok(DataFrameGrouping::new(GROUP_KEY, self, grouping))
    }

    pub fn group_by_expanding_window(&self) -> DataFrameGrouping<'_> {
        let grouping = GroupingByExpandingWindow::new(self.row_count());
        DataFrameGrouping::new(GROUP_KEY, self, grouping)
    }
}
