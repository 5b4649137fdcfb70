use std::collections::HashMap;

use crate::column::{Column, ObjectColumn, ObjectValue};
use crate::groupby::{into_buckets, Grouping};

/// One bucket per distinct value of the source column
///
/// Key order depends on the element type:
///
/// * boolean, integer, float and string columns are grouped through their
///   sort permutation, so keys come out in ascending order (null first);
/// * object columns are grouped by hash in a single scan, so keys come out in
///   order of first occurrence.
///
/// Callers relying on either order should pick the element type
/// accordingly. Within a bucket, rows of a primitive column are in sort order
/// (ties by position) and rows of an object column are in position order.
#[derive(Debug, Clone)]
pub struct GroupingByValue {
    keys: Column,
    buckets: Vec<Box<[usize]>>,
}

impl GroupingByValue {
    /// Group `column` by its distinct values
    pub fn from_column(column: &Column) -> Self {
        let grouping = match column {
            _ if column.is_empty() => Self {
                keys: column.empty_like(),
                buckets: Vec::new(),
            },
            Column::Object(objects) => Self::from_objects(objects),
            _ => Self::from_sorted(column),
        };
        log::debug!(
            "grouping by value: {} rows -> {} groups",
            column.len(),
            grouping.buckets.len()
        );
        grouping
    }

    fn from_sorted(column: &Column) -> Self {
        let sorted = column.sorted_index();

        let mut buckets = Vec::new();
        let mut bucket_offset = 0;
        for i in 1..sorted.len() {
            if !column.equals(sorted[i - 1], column, sorted[i]) {
                buckets.push(sorted[bucket_offset..i].to_vec());
                bucket_offset = i;
            }
        }
        buckets.push(sorted[bucket_offset..].to_vec());

        Self::from_buckets(column, buckets)
    }

    fn from_objects(objects: &ObjectColumn) -> Self {
        let mut positions: HashMap<Option<&ObjectValue>, usize> = HashMap::new();
        let mut buckets: Vec<Vec<usize>> = Vec::new();

        for (row, value) in objects.iter().enumerate() {
            let bucket = *positions.entry(value).or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[bucket].push(row);
        }

        Self::from_buckets(&Column::Object(objects.clone()), buckets)
    }

    fn from_buckets(column: &Column, buckets: Vec<Vec<usize>>) -> Self {
        let key_index: Vec<usize> = buckets.iter().map(|b| b[0]).collect();
        Self {
            keys: column.project(&key_index),
            buckets: into_buckets(buckets),
        }
    }

    /// Row positions of every group
    pub fn buckets(&self) -> &[Box<[usize]>] {
        &self.buckets
    }
}

impl Grouping for GroupingByValue {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        column.project(&self.buckets[group_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Int64Column, Scalar, StringColumn};

    #[test]
    fn test_primitive_keys_are_sorted() {
        let col: Column = Int64Column::new(vec![3, 1, 2, 1, 3]).into();
        let grouping = GroupingByValue::from_column(&col);

        assert_eq!(
            grouping.keys().scalars(),
            vec![Scalar::Int64(1), Scalar::Int64(2), Scalar::Int64(3)]
        );
        assert_eq!(&*grouping.buckets()[0], &[1, 3]);
        assert_eq!(&*grouping.buckets()[2], &[0, 4]);
    }

    #[test]
    fn test_nulls_form_one_leading_bucket() {
        let col: Column =
            StringColumn::from_options(vec![Some("b".into()), None, Some("a".into()), None]).into();
        let grouping = GroupingByValue::from_column(&col);

        assert_eq!(grouping.size(), 3);
        assert!(grouping.keys().is_null(0));
        assert_eq!(&*grouping.buckets()[0], &[1, 3]);
    }

    #[test]
    fn test_object_keys_keep_first_occurrence() {
        let col: Column = ObjectColumn::from_values(vec!["z", "a", "z", "m"]).into();
        let grouping = GroupingByValue::from_column(&col);

        assert_eq!(
            grouping.keys().scalars(),
            vec![
                Scalar::Object("z".into()),
                Scalar::Object("a".into()),
                Scalar::Object("m".into()),
            ]
        );
        assert_eq!(&*grouping.buckets()[0], &[0, 2]);
    }

    #[test]
    fn test_empty_column_has_no_groups() {
        let col: Column = Int64Column::new(Vec::new()).into();
        let grouping = GroupingByValue::from_column(&col);
        assert!(grouping.is_empty());
        assert_eq!(grouping.size(), 0);
    }
}
