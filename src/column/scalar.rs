//! Single nullable values and the generic object element type

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use crate::column::ColumnType;

/// Element of an object column
///
/// Object values are hashable and totally ordered so they can serve as
/// grouping keys. Floats compare by their total order; values of different
/// variants order by variant.
#[derive(Debug, Clone)]
pub enum ObjectValue {
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Tuple(Vec<ObjectValue>),
}

impl ObjectValue {
    fn variant_rank(&self) -> u8 {
        match self {
            ObjectValue::Boolean(_) => 0,
            ObjectValue::Int64(_) => 1,
            ObjectValue::Float64(_) => 2,
            ObjectValue::String(_) => 3,
            ObjectValue::Tuple(_) => 4,
        }
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ObjectValue {}

impl PartialOrd for ObjectValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObjectValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ObjectValue::Boolean(a), ObjectValue::Boolean(b)) => a.cmp(b),
            (ObjectValue::Int64(a), ObjectValue::Int64(b)) => a.cmp(b),
            (ObjectValue::Float64(a), ObjectValue::Float64(b)) => a.total_cmp(b),
            (ObjectValue::String(a), ObjectValue::String(b)) => a.cmp(b),
            (ObjectValue::Tuple(a), ObjectValue::Tuple(b)) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

impl Hash for ObjectValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant_rank().hash(state);
        match self {
            ObjectValue::Boolean(v) => v.hash(state),
            ObjectValue::Int64(v) => v.hash(state),
            ObjectValue::Float64(v) => v.to_bits().hash(state),
            ObjectValue::String(v) => v.hash(state),
            ObjectValue::Tuple(v) => v.hash(state),
        }
    }
}

impl Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectValue::Boolean(v) => write!(f, "{}", v),
            ObjectValue::Int64(v) => write!(f, "{}", v),
            ObjectValue::Float64(v) => write!(f, "{}", v),
            ObjectValue::String(v) => write!(f, "{}", v),
            ObjectValue::Tuple(values) => {
                write!(f, "(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<&str> for ObjectValue {
    fn from(v: &str) -> Self {
        ObjectValue::String(v.to_string())
    }
}

impl From<String> for ObjectValue {
    fn from(v: String) -> Self {
        ObjectValue::String(v)
    }
}

impl From<i64> for ObjectValue {
    fn from(v: i64) -> Self {
        ObjectValue::Int64(v)
    }
}

impl From<f64> for ObjectValue {
    fn from(v: f64) -> Self {
        ObjectValue::Float64(v)
    }
}

impl From<bool> for ObjectValue {
    fn from(v: bool) -> Self {
        ObjectValue::Boolean(v)
    }
}

/// One nullable value of any element type
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Object(ObjectValue),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Element type of the value, `None` for null
    pub fn value_type(&self) -> Option<ColumnType> {
        match self {
            Scalar::Null => None,
            Scalar::Boolean(_) => Some(ColumnType::Boolean),
            Scalar::Int64(_) => Some(ColumnType::Int64),
            Scalar::Float64(_) => Some(ColumnType::Float64),
            Scalar::String(_) => Some(ColumnType::String),
            Scalar::Object(_) => Some(ColumnType::Object),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int64(v) => Some(*v),
            Scalar::Boolean(v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float64(v) => Some(*v),
            Scalar::Int64(v) => Some(*v as f64),
            Scalar::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Wrap a non-null value as a generic object
    pub(crate) fn into_object(self) -> Option<ObjectValue> {
        match self {
            Scalar::Null => None,
            Scalar::Boolean(v) => Some(ObjectValue::Boolean(v)),
            Scalar::Int64(v) => Some(ObjectValue::Int64(v)),
            Scalar::Float64(v) => Some(ObjectValue::Float64(v)),
            Scalar::String(v) => Some(ObjectValue::String(v)),
            Scalar::Object(v) => Some(v),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "NULL"),
            Scalar::Boolean(v) => write!(f, "{}", v),
            Scalar::Int64(v) => write!(f, "{}", v),
            Scalar::Float64(v) => write!(f, "{}", v),
            Scalar::String(v) => write!(f, "{}", v),
            Scalar::Object(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Boolean(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float64(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<ObjectValue> for Scalar {
    fn from(v: ObjectValue) -> Self {
        Scalar::Object(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}
