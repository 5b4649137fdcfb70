use std::sync::Arc;

use crate::column::common::{ColumnTrait, ColumnType};
use crate::column::scalar::ObjectValue;
use crate::error::{Error, Result};

/// Column of generic object values; an absent object is null
#[derive(Debug, Clone)]
pub struct ObjectColumn {
    pub(crate) data: Arc<[Option<ObjectValue>]>,
    pub(crate) name: Option<String>,
}

impl ObjectColumn {
    /// Create a column from optional values
    pub fn new(data: Vec<Option<ObjectValue>>) -> Self {
        Self {
            data: data.into(),
            name: None,
        }
    }

    /// Create a column without nulls
    pub fn from_values<T: Into<ObjectValue>>(values: Vec<T>) -> Self {
        Self::new(values.into_iter().map(|v| Some(v.into())).collect())
    }

    /// Create a named column
    pub fn with_name(data: Vec<Option<ObjectValue>>, name: impl Into<String>) -> Self {
        let mut col = Self::new(data);
        col.name = Some(name.into());
        col
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Checked access to the element at `index`
    pub fn get(&self, index: usize) -> Result<Option<&ObjectValue>> {
        self.data
            .get(index)
            .map(Option::as_ref)
            .ok_or(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            })
    }

    /// Element at `index`, `None` when null
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> Option<&ObjectValue> {
        self.data[index].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&ObjectValue>> + '_ {
        self.data.iter().map(Option::as_ref)
    }

    pub fn min(&self) -> Option<&ObjectValue> {
        self.iter().flatten().min()
    }

    pub fn max(&self) -> Option<&ObjectValue> {
        self.iter().flatten().max()
    }

    /// New column holding the elements at `indices`, in that order
    pub fn take(&self, indices: &[usize]) -> Self {
        Self {
            data: indices.iter().map(|&i| self.data[i].clone()).collect(),
            name: self.name.clone(),
        }
    }

    /// New column holding the elements in `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        Self {
            data: self.data[from..to].to_vec().into(),
            name: self.name.clone(),
        }
    }
}

impl ColumnTrait for ObjectColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Object
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_null(&self, index: usize) -> bool {
        self.data[index].is_none()
    }
}
