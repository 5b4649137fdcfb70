//! Shared fixtures for the grouping integration tests
#![allow(dead_code)]

use pandrs_grouping::{
    BooleanColumn, Column, DataFrame, Float64Column, Grouping, Int64Column, Scalar, StringColumn,
};

/// Small sales table: region, units (one null), price, promo flag
pub fn sales_frame() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_column(
        "region",
        StringColumn::from_strs(&["west", "east", "west", "north", "east", "west"]),
    )
    .unwrap();
    df.add_column(
        "units",
        Int64Column::from_options(vec![Some(4), Some(1), None, Some(7), Some(3), Some(2)]),
    )
    .unwrap();
    df.add_column(
        "price",
        Float64Column::new(vec![2.5, 10.0, 3.0, 1.25, 8.0, 2.0]),
    )
    .unwrap();
    df.add_column(
        "promo",
        BooleanColumn::new(vec![true, false, true, true, false, false]),
    )
    .unwrap();
    df
}

/// Integer column of `len` rows with a null every `null_every` rows
pub fn int_column_with_nulls(len: usize, null_every: usize) -> Column {
    Int64Column::from_options(
        (0..len)
            .map(|i| {
                if null_every > 0 && i % null_every == null_every - 1 {
                    None
                } else {
                    Some((i as i64 * 7) % 11 - 5)
                }
            })
            .collect(),
    )
    .into()
}

/// Every row position covered by the grouping's buckets, in bucket order
pub fn covered_rows(grouping: &dyn Grouping, len: usize) -> Vec<i64> {
    let positions: Column = Int64Column::sequence(0, len as i64).into();
    (0..grouping.size())
        .flat_map(|i| grouping.apply(&positions, i).scalars())
        .filter_map(|s| s.as_i64())
        .collect()
}

pub fn ints(values: &[i64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::Int64(v)).collect()
}
