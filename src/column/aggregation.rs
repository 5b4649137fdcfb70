//! User-defined reductions from a column to a single value

use std::fmt;
use std::sync::Arc;

use crate::column::{Column, ColumnType, ObjectValue, Scalar};
use crate::error::Result;

type BooleanFn = Arc<dyn Fn(&[bool]) -> Scalar + Send + Sync>;
type Int64Fn = Arc<dyn Fn(&[i64]) -> Scalar + Send + Sync>;
type Float64Fn = Arc<dyn Fn(&[f64]) -> Scalar + Send + Sync>;
type StringFn = Arc<dyn Fn(&[&str]) -> Scalar + Send + Sync>;
type ObjectFn = Arc<dyn Fn(&[&ObjectValue]) -> Scalar + Send + Sync>;
type NativeFn = Arc<dyn Fn(&Column) -> Scalar + Send + Sync>;

/// A reduction from a column to one value
///
/// Typed variants coerce the column to their input type first and receive
/// only the non-null values; when a group has no non-null value the result is
/// null and the function is not invoked. The `Native` variant receives the
/// group's column as is, nulls included.
///
/// The output type is whatever the function returns, so an integer column
/// can reduce to floats or text.
#[derive(Clone)]
pub enum Aggregation {
    Boolean(BooleanFn),
    Int64(Int64Fn),
    Float64(Float64Fn),
    String(StringFn),
    Object(ObjectFn),
    Native(NativeFn),
}

impl Aggregation {
    pub fn boolean<F, R>(f: F) -> Self
    where
        F: Fn(&[bool]) -> R + Send + Sync + 'static,
        R: Into<Scalar>,
    {
        Aggregation::Boolean(Arc::new(move |values| f(values).into()))
    }

    pub fn int64<F, R>(f: F) -> Self
    where
        F: Fn(&[i64]) -> R + Send + Sync + 'static,
        R: Into<Scalar>,
    {
        Aggregation::Int64(Arc::new(move |values| f(values).into()))
    }

    pub fn float64<F, R>(f: F) -> Self
    where
        F: Fn(&[f64]) -> R + Send + Sync + 'static,
        R: Into<Scalar>,
    {
        Aggregation::Float64(Arc::new(move |values| f(values).into()))
    }

    pub fn string<F, R>(f: F) -> Self
    where
        F: Fn(&[&str]) -> R + Send + Sync + 'static,
        R: Into<Scalar>,
    {
        Aggregation::String(Arc::new(move |values| f(values).into()))
    }

    pub fn object<F, R>(f: F) -> Self
    where
        F: Fn(&[&ObjectValue]) -> R + Send + Sync + 'static,
        R: Into<Scalar>,
    {
        Aggregation::Object(Arc::new(move |values| f(values).into()))
    }

    pub fn native<F, R>(f: F) -> Self
    where
        F: Fn(&Column) -> R + Send + Sync + 'static,
        R: Into<Scalar>,
    {
        Aggregation::Native(Arc::new(move |column| f(column).into()))
    }

    /// First non-null element, in the column's native type
    pub fn first() -> Self {
        Self::native(|column: &Column| {
            (0..column.len())
                .find(|&i| !column.is_null(i))
                .map_or(Scalar::Null, |i| column.scalar_at(i))
        })
    }

    /// Last non-null element, in the column's native type
    pub fn last() -> Self {
        Self::native(|column: &Column| {
            (0..column.len())
                .rev()
                .find(|&i| !column.is_null(i))
                .map_or(Scalar::Null, |i| column.scalar_at(i))
        })
    }

    /// Arithmetic mean as a float
    pub fn mean() -> Self {
        Self::float64(|values: &[f64]| values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Number of non-null elements
    pub fn count_values() -> Self {
        Self::native(|column: &Column| (column.len() - column.null_count()) as i64)
    }

    /// Element type the column is converted to before invocation
    pub fn input_type(&self) -> Option<ColumnType> {
        match self {
            Aggregation::Boolean(_) => Some(ColumnType::Boolean),
            Aggregation::Int64(_) => Some(ColumnType::Int64),
            Aggregation::Float64(_) => Some(ColumnType::Float64),
            Aggregation::String(_) => Some(ColumnType::String),
            Aggregation::Object(_) => Some(ColumnType::Object),
            Aggregation::Native(_) => None,
        }
    }
}

impl fmt::Debug for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.input_type() {
            Some(input) => write!(f, "Aggregation({})", input),
            None => write!(f, "Aggregation(native)"),
        }
    }
}

impl Column {
    /// Reduce the column with `function`
    pub fn aggregate(&self, function: &Aggregation) -> Result<Scalar> {
        let scalar = match function {
            Aggregation::Native(f) => f(self),
            Aggregation::Boolean(f) => {
                let values: Vec<bool> = self.to_boolean()?.iter().flatten().collect();
                invoke(&values, |v| f(v))
            }
            Aggregation::Int64(f) => {
                let values: Vec<i64> = self.to_int64()?.iter().flatten().collect();
                invoke(&values, |v| f(v))
            }
            Aggregation::Float64(f) => {
                let values: Vec<f64> = self.to_float64()?.iter().flatten().collect();
                invoke(&values, |v| f(v))
            }
            Aggregation::String(f) => {
                let col = self.to_string_column();
                let values: Vec<&str> = col.iter().flatten().collect();
                invoke(&values, |v| f(v))
            }
            Aggregation::Object(f) => {
                let col = self.to_object();
                let values: Vec<&ObjectValue> = col.iter().flatten().collect();
                invoke(&values, |v| f(v))
            }
        };
        Ok(scalar)
    }
}

fn invoke<T>(values: &[T], f: impl Fn(&[T]) -> Scalar) -> Scalar {
    if values.is_empty() {
        Scalar::Null
    } else {
        f(values)
    }
}
