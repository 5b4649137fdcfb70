//! Element access, projection, ordering and reductions on type-erased columns

use std::cmp::Ordering;

use crate::column::float64_column::compare_f64;
use crate::column::{
    BooleanColumn, Column, ColumnType, Float64Column, Int64Column, ObjectColumn, Scalar,
    StringColumn,
};
use crate::error::{Error, Result};

impl Column {
    /// Checked access to the element at `index`
    pub fn value(&self, index: usize) -> Result<Scalar> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len(),
            });
        }
        Ok(self.scalar_at(index))
    }

    /// Element at `index` as a scalar
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn scalar_at(&self, index: usize) -> Scalar {
        match self {
            Column::Boolean(col) => col.value(index).into(),
            Column::Int64(col) => col.value(index).into(),
            Column::Float64(col) => col.value(index).into(),
            Column::String(col) => col.value(index).into(),
            Column::Object(col) => col.value(index).cloned().into(),
        }
    }

    /// All elements as scalars
    pub fn scalars(&self) -> Vec<Scalar> {
        (0..self.len()).map(|i| self.scalar_at(i)).collect()
    }

    /// Copy of this column carrying `name`
    pub fn with_name(&self, name: impl Into<String>) -> Column {
        let mut col = self.clone();
        match &mut col {
            Column::Boolean(c) => c.set_name(name),
            Column::Int64(c) => c.set_name(name),
            Column::Float64(c) => c.set_name(name),
            Column::String(c) => c.set_name(name),
            Column::Object(c) => c.set_name(name),
        }
        col
    }

    /// New column of the same type holding the elements at `indices`
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub fn project(&self, indices: &[usize]) -> Column {
        match self {
            Column::Boolean(col) => col.take(indices).into(),
            Column::Int64(col) => col.take(indices).into(),
            Column::Float64(col) => col.take(indices).into(),
            Column::String(col) => col.take(indices).into(),
            Column::Object(col) => col.take(indices).into(),
        }
    }

    /// New column of the same type holding the elements in `[from, to)`
    ///
    /// # Panics
    /// Panics if `from > to` or `to > len()`.
    pub fn slice(&self, from: usize, to: usize) -> Column {
        assert!(
            from <= to && to <= self.len(),
            "slice [{}, {}) out of bounds for length {}",
            from,
            to,
            self.len()
        );
        match self {
            Column::Boolean(col) => col.slice(from, to).into(),
            Column::Int64(col) => col.slice(from, to).into(),
            Column::Float64(col) => col.slice(from, to).into(),
            Column::String(col) => col.slice(from, to).into(),
            Column::Object(col) => col.slice(from, to).into(),
        }
    }

    /// Zero-length column of the same type
    pub fn empty_like(&self) -> Column {
        Column::empty(self.column_type())
    }

    /// Zero-length column of `column_type`
    pub fn empty(column_type: ColumnType) -> Column {
        match column_type {
            ColumnType::Boolean => BooleanColumn::new(Vec::new()).into(),
            ColumnType::Int64 => Int64Column::new(Vec::new()).into(),
            ColumnType::Float64 => Float64Column::new(Vec::new()).into(),
            ColumnType::String => StringColumn::new(Vec::new()).into(),
            ColumnType::Object => ObjectColumn::new(Vec::new()).into(),
        }
    }

    /// Permutation that sorts the column ascending
    ///
    /// The sort is stable and places nulls first.
    pub fn sorted_index(&self) -> Vec<usize> {
        let mut index: Vec<usize> = (0..self.len()).collect();
        match self {
            Column::Boolean(col) => index.sort_by(|&a, &b| col.value(a).cmp(&col.value(b))),
            Column::Int64(col) => index.sort_by(|&a, &b| col.value(a).cmp(&col.value(b))),
            Column::Float64(col) => {
                index.sort_by(|&a, &b| compare_nullable(col.value(a), col.value(b), compare_f64))
            }
            Column::String(col) => index.sort_by(|&a, &b| col.value(a).cmp(&col.value(b))),
            Column::Object(col) => index.sort_by(|&a, &b| col.value(a).cmp(&col.value(b))),
        }
        index
    }

    /// Compare the element at `index` with the element of `other` at `other_index`
    ///
    /// Nulls are equal to each other and order before any value. Numeric
    /// columns of different types compare by value; any other mix compares as
    /// generic objects.
    pub fn compare(&self, index: usize, other: &Column, other_index: usize) -> Ordering {
        match (self, other) {
            (Column::Boolean(a), Column::Boolean(b)) => a.value(index).cmp(&b.value(other_index)),
            (Column::Int64(a), Column::Int64(b)) => a.value(index).cmp(&b.value(other_index)),
            (Column::Float64(a), Column::Float64(b)) => {
                compare_nullable(a.value(index), b.value(other_index), compare_f64)
            }
            (Column::String(a), Column::String(b)) => a.value(index).cmp(&b.value(other_index)),
            (Column::Object(a), Column::Object(b)) => a.value(index).cmp(&b.value(other_index)),
            _ if self.column_type().is_numeric() && other.column_type().is_numeric() => {
                compare_nullable(
                    self.scalar_at(index).as_f64(),
                    other.scalar_at(other_index).as_f64(),
                    compare_f64,
                )
            }
            _ => self
                .scalar_at(index)
                .into_object()
                .cmp(&other.scalar_at(other_index).into_object()),
        }
    }

    /// Whether the element at `index` equals the element of `other` at `other_index`
    pub fn equals(&self, index: usize, other: &Column, other_index: usize) -> bool {
        self.compare(index, other, other_index) == Ordering::Equal
    }

    /// Sum of the non-null elements
    ///
    /// Booleans sum to the number of `true` values, strings concatenate.
    /// Yields a null scalar when no non-null element exists.
    pub fn sum(&self) -> Result<Scalar> {
        match self {
            Column::Boolean(col) => Ok(col.sum().into()),
            Column::Int64(col) => Ok(col.sum().into()),
            Column::Float64(col) => Ok(col.sum().into()),
            Column::String(col) => Ok(col.sum().into()),
            Column::Object(_) => Err(Error::InvalidOperation(
                "sum is not supported for object columns".to_string(),
            )),
        }
    }

    /// Smallest non-null element, null when there is none
    pub fn min(&self) -> Scalar {
        match self {
            Column::Boolean(col) => col.min().into(),
            Column::Int64(col) => col.min().into(),
            Column::Float64(col) => col.min().into(),
            Column::String(col) => col.min().into(),
            Column::Object(col) => col.min().cloned().into(),
        }
    }

    /// Largest non-null element, null when there is none
    pub fn max(&self) -> Scalar {
        match self {
            Column::Boolean(col) => col.max().into(),
            Column::Int64(col) => col.max().into(),
            Column::Float64(col) => col.max().into(),
            Column::String(col) => col.max().into(),
            Column::Object(col) => col.max().cloned().into(),
        }
    }
}

fn compare_nullable<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: Fn(T, T) -> Ordering,
{
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_index_is_stable_with_nulls_first() {
        let col: Column = Int64Column::from_options(vec![Some(3), None, Some(1), Some(3), None]).into();
        assert_eq!(col.sorted_index(), vec![1, 4, 2, 0, 3]);
    }

    #[test]
    fn test_compare_across_numeric_types() {
        let ints: Column = Int64Column::new(vec![1, 2]).into();
        let floats: Column = Float64Column::new(vec![1.0, 1.5]).into();
        assert!(ints.equals(0, &floats, 0));
        assert_eq!(ints.compare(1, &floats, 1), Ordering::Greater);
    }

    #[test]
    fn test_nulls_compare_equal() {
        let col: Column = StringColumn::from_options(vec![None, Some("a".to_string()), None]).into();
        assert!(col.equals(0, &col, 2));
        assert_eq!(col.compare(0, &col, 1), Ordering::Less);
    }

    #[test]
    fn test_object_sum_is_rejected() {
        let col: Column = ObjectColumn::from_values(vec![1i64, 2]).into();
        assert!(matches!(col.sum(), Err(Error::InvalidOperation(_))));
        assert_eq!(col.max(), Scalar::Object(2i64.into()));
    }
}
