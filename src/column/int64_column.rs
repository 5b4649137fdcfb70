use std::sync::Arc;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of 64-bit integers
#[derive(Debug, Clone)]
pub struct Int64Column {
    pub(crate) data: Arc<[i64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
}

impl Int64Column {
    /// Create a column without nulls
    pub fn new(data: Vec<i64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: None,
        }
    }

    /// Create a named column without nulls
    pub fn with_name(data: Vec<i64>, name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: Some(name.into()),
        }
    }

    /// Create a column whose `nulls` flags mark null positions
    pub fn with_nulls(data: Vec<i64>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::null_mask(&nulls),
            name: None,
        }
    }

    /// Create a column from optional values
    pub fn from_options(values: Vec<Option<i64>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data = values.into_iter().map(Option::unwrap_or_default).collect();
        Self::with_nulls(data, nulls)
    }

    /// Sequence `start, start + 1, ..., end - 1`
    pub fn sequence(start: i64, end: i64) -> Self {
        Self::new((start..end).collect())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Checked access to the element at `index`
    pub fn get(&self, index: usize) -> Result<Option<i64>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }
        Ok(self.value(index))
    }

    /// Element at `index`, `None` when null
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> Option<i64> {
        let raw = self.data[index];
        if self.is_null_at(index) {
            None
        } else {
            Some(raw)
        }
    }

    #[inline]
    fn is_null_at(&self, index: usize) -> bool {
        match &self.null_mask {
            Some(mask) => utils::is_set(mask, index),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        (0..self.data.len()).map(move |i| self.value(i))
    }

    /// Sum of the non-null values, `None` when there are none
    pub fn sum(&self) -> Option<i64> {
        self.iter()
            .flatten()
            .fold(None, |acc: Option<i64>, v| Some(acc.map_or(v, |s| s.wrapping_add(v))))
    }

    /// Smallest non-null value
    pub fn min(&self) -> Option<i64> {
        self.iter().flatten().min()
    }

    /// Largest non-null value
    pub fn max(&self) -> Option<i64> {
        self.iter().flatten().max()
    }

    /// New column holding the elements at `indices`, in that order
    pub fn take(&self, indices: &[usize]) -> Self {
        let values = indices.iter().map(|&i| self.value(i)).collect();
        Self::from_options(values).named(self.name.clone())
    }

    /// New column holding the elements in `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        let values = (from..to).map(|i| self.value(i)).collect();
        Self::from_options(values).named(self.name.clone())
    }

    fn named(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

impl ColumnTrait for Int64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Int64
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_null(&self, index: usize) -> bool {
        assert!(index < self.data.len(), "index {} out of bounds", index);
        self.is_null_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int64_reductions_skip_nulls() {
        let col = Int64Column::from_options(vec![Some(3), None, Some(-2), Some(7)]);
        assert_eq!(col.sum(), Some(8));
        assert_eq!(col.min(), Some(-2));
        assert_eq!(col.max(), Some(7));

        let all_null = Int64Column::from_options(vec![None, None]);
        assert_eq!(all_null.sum(), None);
        assert_eq!(all_null.min(), None);
    }

    #[test]
    fn test_int64_take_keeps_nulls() {
        let col = Int64Column::from_options(vec![Some(1), None, Some(3)]);
        let taken = col.take(&[2, 1, 0]);
        assert_eq!(taken.iter().collect::<Vec<_>>(), vec![Some(3), None, Some(1)]);
        assert!(col.get(3).is_err());
    }
}
