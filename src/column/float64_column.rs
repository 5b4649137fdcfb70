use std::cmp::Ordering;
use std::sync::Arc;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Ordering used for float elements: numeric order, with NaN placed by its
/// total order so that sorting stays deterministic.
#[inline]
pub(crate) fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Column of 64-bit floats
#[derive(Debug, Clone)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
}

impl Float64Column {
    /// Create a column without nulls
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: None,
        }
    }

    /// Create a named column without nulls
    pub fn with_name(data: Vec<f64>, name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: Some(name.into()),
        }
    }

    /// Create a column whose `nulls` flags mark null positions
    pub fn with_nulls(data: Vec<f64>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::null_mask(&nulls),
            name: None,
        }
    }

    /// Create a column from optional values
    pub fn from_options(values: Vec<Option<f64>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data = values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
        Self::with_nulls(data, nulls)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Checked access to the element at `index`
    pub fn get(&self, index: usize) -> Result<Option<f64>> {
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
    pub fn value(&self, index: usize) -> Option<f64> {
        let raw = self.data[index];
        match &self.null_mask {
            Some(mask) if utils::is_set(mask, index) => None,
            _ => Some(raw),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        (0..self.data.len()).map(move |i| self.value(i))
    }

    /// Sum of the non-null values, `None` when there are none
    pub fn sum(&self) -> Option<f64> {
        self.iter()
            .flatten()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |s| s + v)))
    }

    /// Smallest non-null value
    pub fn min(&self) -> Option<f64> {
        self.iter().flatten().min_by(|a, b| compare_f64(*a, *b))
    }

    /// Largest non-null value
    pub fn max(&self) -> Option<f64> {
        self.iter().flatten().max_by(|a, b| compare_f64(*a, *b))
    }

    /// Mean of the non-null values
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// New column holding the elements at `indices`, in that order
    pub fn take(&self, indices: &[usize]) -> Self {
        let mut col = Self::from_options(indices.iter().map(|&i| self.value(i)).collect());
        col.name = self.name.clone();
        col
    }

    /// New column holding the elements in `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        let mut col = Self::from_options((from..to).map(|i| self.value(i)).collect());
        col.name = self.name.clone();
        col
    }
}

impl ColumnTrait for Float64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Float64
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_null(&self, index: usize) -> bool {
        self.value(index).is_none()
    }
}
