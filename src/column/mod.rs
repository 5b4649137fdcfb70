//! Typed, null-aware columns
//!
//! A column is an immutable sequence of elements of one [`ColumnType`], each
//! either a value or null. Operations that transform a column return a new
//! one; buffers are shared between clones.

mod aggregation;
mod boolean_column;
mod builder;
mod cast;
mod common;
mod float64_column;
mod int64_column;
mod object_column;
mod ops;
mod scalar;
mod string_column;

pub use aggregation::Aggregation;
pub use boolean_column::BooleanColumn;
pub use builder::ColumnBuilder;
pub use common::{utils, BitMask, Column, ColumnTrait, ColumnType};
pub(crate) use float64_column::compare_f64;
pub use float64_column::Float64Column;
pub use int64_column::Int64Column;
pub use object_column::ObjectColumn;
pub use scalar::{ObjectValue, Scalar};
pub use string_column::StringColumn;
