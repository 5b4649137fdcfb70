use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::{BooleanColumn, Float64Column, Int64Column, ObjectColumn, StringColumn};
use crate::error::{Error, Result};

/// Element type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Boolean,
    Int64,
    Float64,
    String,
    Object,
}

impl ColumnType {
    /// Whether values of this type can be used as numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Boolean | ColumnType::Int64 | ColumnType::Float64)
    }

    /// Position in the widening order used when unifying mixed values
    pub(crate) fn rank(&self) -> u8 {
        match self {
            ColumnType::Boolean => 0,
            ColumnType::Int64 => 1,
            ColumnType::Float64 => 2,
            ColumnType::String => 3,
            ColumnType::Object => 4,
        }
    }

    /// Type of the column produced by summing a column of this type
    pub fn sum_type(&self) -> ColumnType {
        match self {
            ColumnType::Boolean => ColumnType::Int64,
            other => *other,
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::String => "string",
            ColumnType::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Operations shared by every typed column
pub trait ColumnTrait: Debug + Send + Sync {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the column holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type
    fn column_type(&self) -> ColumnType;

    /// Optional column name
    fn name(&self) -> Option<&str>;

    /// Whether the element at `index` is null
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn is_null(&self, index: usize) -> bool;
}

/// A typed, null-aware, immutable column
///
/// Cloning a column shares its buffers.
#[derive(Debug, Clone)]
pub enum Column {
    Boolean(BooleanColumn),
    Int64(Int64Column),
    Float64(Float64Column),
    String(StringColumn),
    Object(ObjectColumn),
}

/// Bitmap of boolean flags, one bit per element
#[derive(Debug, Clone)]
pub struct BitMask {
    pub(crate) data: Arc<[u8]>,
    pub(crate) len: usize,
}

impl BitMask {
    /// Create a bitmask with all bits unset
    pub fn new(length: usize) -> Self {
        let bytes_needed = (length + 7) / 8;
        Self {
            data: vec![0u8; bytes_needed].into(),
            len: length,
        }
    }

    /// Create a bitmask from a slice of flags
    pub fn from_bools(bools: &[bool]) -> Self {
        Self {
            data: utils::create_bitmask(bools),
            len: bools.len(),
        }
    }

    /// Checked bit access
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        Ok(self.bit(index))
    }

    /// Bit access without the length check
    ///
    /// # Panics
    /// Panics if `index` lies beyond the backing bytes.
    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        utils::is_set(&self.data, index)
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bitmask holds no bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Bitmask helpers shared by the typed columns
pub mod utils {
    use std::sync::Arc;

    /// Pack a slice of flags into a bitmask
    pub fn create_bitmask(flags: &[bool]) -> Arc<[u8]> {
        let bytes_needed = (flags.len() + 7) / 8;
        let mut data = vec![0u8; bytes_needed];

        for (i, &is_set) in flags.iter().enumerate() {
            if is_set {
                data[i / 8] |= 1 << (i % 8);
            }
        }

        data.into()
    }

    /// Null mask for `flags`, or `None` when no flag is set
    pub fn null_mask(flags: &[bool]) -> Option<Arc<[u8]>> {
        if flags.iter().any(|&is_null| is_null) {
            Some(create_bitmask(flags))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_set(mask: &[u8], index: usize) -> bool {
        (mask[index / 8] & (1 << (index % 8))) != 0
    }
}

impl Column {
    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            Column::Boolean(col) => col.len(),
            Column::Int64(col) => col.len(),
            Column::Float64(col) => col.len(),
            Column::String(col) => col.len(),
            Column::Object(col) => col.len(),
        }
    }

    /// Whether the column holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Boolean(_) => ColumnType::Boolean,
            Column::Int64(_) => ColumnType::Int64,
            Column::Float64(_) => ColumnType::Float64,
            Column::String(_) => ColumnType::String,
            Column::Object(_) => ColumnType::Object,
        }
    }

    /// Optional column name
    pub fn name(&self) -> Option<&str> {
        self.as_trait().name()
    }

    /// Whether the element at `index` is null
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn is_null(&self, index: usize) -> bool {
        self.as_trait().is_null(index)
    }

    /// Number of null elements
    pub fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }

    pub(crate) fn as_trait(&self) -> &dyn ColumnTrait {
        match self {
            Column::Boolean(col) => col,
            Column::Int64(col) => col,
            Column::Float64(col) => col,
            Column::String(col) => col,
            Column::Object(col) => col,
        }
    }
}

impl From<BooleanColumn> for Column {
    fn from(col: BooleanColumn) -> Self {
        Column::Boolean(col)
    }
}

impl From<Int64Column> for Column {
    fn from(col: Int64Column) -> Self {
        Column::Int64(col)
    }
}

impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}

impl From<ObjectColumn> for Column {
    fn from(col: ObjectColumn) -> Self {
        Column::Object(col)
    }
}
