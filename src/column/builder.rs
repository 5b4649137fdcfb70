//! Accumulation of scalars and sub-columns into one column

use crate::column::{
    BooleanColumn, Column, ColumnType, Float64Column, Int64Column, ObjectColumn, Scalar,
    StringColumn,
};

/// Mutable accumulator that finalizes into an immutable column
///
/// The output type is the widest type among the pushed non-null values
/// (`Boolean < Int64 < Float64 < String < Object`). When nothing non-null was
/// pushed, the fallback type is used.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    fallback: ColumnType,
    values: Vec<Scalar>,
}

impl ColumnBuilder {
    pub fn new(fallback: ColumnType) -> Self {
        Self {
            fallback,
            values: Vec::new(),
        }
    }

    pub fn with_capacity(fallback: ColumnType, capacity: usize) -> Self {
        Self {
            fallback,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append one value
    pub fn push(&mut self, value: impl Into<Scalar>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// Append every element of `column`
    pub fn push_column(&mut self, column: &Column) -> &mut Self {
        self.values.extend(column.scalars());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Type the built column will have
    pub fn output_type(&self) -> ColumnType {
        self.values
            .iter()
            .filter_map(Scalar::value_type)
            .max_by_key(ColumnType::rank)
            .unwrap_or(self.fallback)
    }

    /// Finalize into a column
    pub fn build(self) -> Column {
        let output_type = self.output_type();
        let values = self.values;
        match output_type {
            ColumnType::Boolean => {
                BooleanColumn::from_options(values.iter().map(Scalar::as_bool).collect()).into()
            }
            ColumnType::Int64 => {
                Int64Column::from_options(values.iter().map(Scalar::as_i64).collect()).into()
            }
            ColumnType::Float64 => {
                Float64Column::from_options(values.iter().map(Scalar::as_f64).collect()).into()
            }
            ColumnType::String => StringColumn::from_options(
                values
                    .iter()
                    .map(|v| (!v.is_null()).then(|| v.to_string()))
                    .collect(),
            )
            .into(),
            ColumnType::Object => {
                ObjectColumn::new(values.into_iter().map(Scalar::into_object).collect()).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_widens_mixed_numbers() {
        let mut builder = ColumnBuilder::new(ColumnType::Int64);
        builder.push(1i64).push(Scalar::Null).push(2.5);
        let col = builder.build();
        assert_eq!(col.column_type(), ColumnType::Float64);
        assert_eq!(
            col.scalars(),
            vec![Scalar::Float64(1.0), Scalar::Null, Scalar::Float64(2.5)]
        );
    }

    #[test]
    fn test_builder_falls_back_when_all_null() {
        let mut builder = ColumnBuilder::new(ColumnType::String);
        builder.push(Scalar::Null);
        let col = builder.build();
        assert_eq!(col.column_type(), ColumnType::String);
        assert!(col.is_null(0));

        assert_eq!(ColumnBuilder::new(ColumnType::Boolean).build().len(), 0);
    }

    #[test]
    fn test_builder_appends_sub_columns() {
        let mut builder = ColumnBuilder::new(ColumnType::Int64);
        builder.push_column(&Int64Column::new(vec![1, 2]).into());
        builder.push_column(&BooleanColumn::new(vec![true]).into());
        let col = builder.build();
        assert_eq!(
            col.scalars(),
            vec![Scalar::Int64(1), Scalar::Int64(2), Scalar::Int64(1)]
        );
    }
}
