use crate::column::Column;
use crate::error::{Error, Result};
use crate::groupby::{into_buckets, Grouping};

/// Grouping over caller supplied keys and row positions
///
/// Buckets are taken as given: they are neither checked against a row count
/// nor required to partition the rows.
#[derive(Debug, Clone)]
pub struct GroupingStatic {
    keys: Column,
    buckets: Vec<Box<[usize]>>,
}

impl GroupingStatic {
    /// Pair `keys` with one bucket of row positions per key
    pub fn new(keys: Column, buckets: Vec<Vec<usize>>) -> Result<Self> {
        if keys.len() != buckets.len() {
            return Err(Error::LengthMismatch {
                expected: keys.len(),
                actual: buckets.len(),
            });
        }
        log::debug!("static grouping: {} groups", buckets.len());
        Ok(Self {
            keys,
            buckets: into_buckets(buckets),
        })
    }

    /// Same as [`GroupingStatic::new`] with borrowed buckets
    pub fn from_slices(keys: Column, buckets: &[&[usize]]) -> Result<Self> {
        Self::new(keys, buckets.iter().map(|b| b.to_vec()).collect())
    }

    pub fn buckets(&self) -> &[Box<[usize]>] {
        &self.buckets
    }
}

impl Grouping for GroupingStatic {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        column.project(&self.buckets[group_index])
    }
}
