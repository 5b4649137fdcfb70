use std::ops::Range;

use crate::column::{Column, Int64Column};
use crate::error::{Error, Result};
use crate::groupby::Grouping;

/// Consecutive chunks of `partition_size` rows; the last chunk holds the remainder
#[derive(Debug, Clone)]
pub struct GroupingByCount {
    keys: Column,
    partition_size: usize,
    size: usize,
}

impl GroupingByCount {
    /// Chunk `size` rows into groups of `partition_size`
    pub fn new(partition_size: usize, size: usize) -> Result<Self> {
        if partition_size == 0 {
            return Err(Error::InvalidInput("partition size must be > 0".to_string()));
        }
        let partitions = size.div_ceil(partition_size);
        log::debug!(
            "grouping by count {}: {} rows -> {} groups",
            partition_size,
            size,
            partitions
        );
        Ok(Self {
            keys: Int64Column::sequence(0, partitions as i64).into(),
            partition_size,
            size,
        })
    }

    /// Rows covered by group `group_index`
    pub fn group_range(&self, group_index: usize) -> Range<usize> {
        let from = group_index * self.partition_size;
        let to = ((group_index + 1) * self.partition_size).min(self.size);
        from..to
    }
}

impl Grouping for GroupingByCount {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        let range = self.group_range(group_index);
        column.slice(range.start, range.end)
    }
}

/// Exactly `partition_count` consecutive chunks of approximately equal size
///
/// Chunk boundaries are `round(i * size / partition_count)`; chunks are empty
/// when there are more partitions than rows.
#[derive(Debug, Clone)]
pub struct GroupingByPartitions {
    keys: Column,
    partition_count: usize,
    size: usize,
}

impl GroupingByPartitions {
    /// Split `size` rows into `partition_count` chunks
    pub fn new(partition_count: usize, size: usize) -> Result<Self> {
        if partition_count == 0 {
            return Err(Error::InvalidInput("partition count must be > 0".to_string()));
        }
        log::debug!(
            "grouping by partitions: {} rows -> {} groups",
            size,
            partition_count
        );
        Ok(Self {
            keys: Int64Column::sequence(0, partition_count as i64).into(),
            partition_count,
            size,
        })
    }

    /// Rows covered by group `group_index`
    pub fn group_range(&self, group_index: usize) -> Range<usize> {
        let per_partition = self.size as f64 / self.partition_count as f64;
        let from = (group_index as f64 * per_partition).round() as usize;
        let to = ((group_index + 1) as f64 * per_partition).round() as usize;
        from..to
    }
}

impl Grouping for GroupingByPartitions {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        let range = self.group_range(group_index);
        column.slice(range.start, range.end)
    }
}
