mod common;

use common::{ints, sales_frame};
use pandrs_grouping::error::{Error, Result};
use pandrs_grouping::{
    Aggregation, Column, ColumnType, GroupingConfig, Int64Column, Scalar, StringColumn,
};

#[test]
fn test_series_grouping_by_value() -> Result<()> {
    let col: Column = StringColumn::from_strs(&["x", "y", "x"]).into();
    let grouping = col.group_by_value();

    assert_eq!(grouping.size(), 2);
    assert_eq!(grouping.source().len(), 3);
    assert_eq!(grouping.apply(0).len(), 2);

    let summed = grouping.sum()?;
    assert_eq!(
        summed.values().scalars(),
        vec![Scalar::String("xx".into()), Scalar::String("y".into())]
    );
    assert_eq!(summed.key_name(), "key");
    assert_eq!(summed.value_name(), "value");
    Ok(())
}

#[test]
fn test_series_window_entry_points() -> Result<()> {
    let col: Column = Int64Column::new(vec![1, 2, 3, 4, 5]).into();

    assert_eq!(col.group_by_count(2)?.size(), 3);
    assert_eq!(col.group_by_partitions(2)?.count()?.values().scalars(), ints(&[3, 2]));
    assert_eq!(
        col.group_by_moving_window(3)?.max()?.values().scalar_at(4),
        Scalar::Int64(5)
    );
    assert_eq!(
        col.group_by_expanding_window().sum()?.values().scalars(),
        ints(&[1, 3, 6, 10, 15])
    );
    assert_eq!(col.group_by_interval(2)?.keys().scalars(), ints(&[0, 2, 4]));
    Ok(())
}

#[test]
fn test_series_invalid_parameters() {
    let col: Column = Int64Column::new(vec![1, 2]).into();
    assert!(matches!(col.group_by_count(0), Err(Error::InvalidInput(_))));
    assert!(matches!(col.group_by_partitions(0), Err(Error::InvalidInput(_))));
    assert!(matches!(col.group_by_moving_window(0), Err(Error::InvalidInput(_))));
    assert!(matches!(col.group_by_interval(-1), Err(Error::InvalidInput(_))));
}

#[test]
fn test_frame_grouping_labels_results() -> Result<()> {
    let df = sales_frame();
    let grouping = df.group_by_value("region")?;
    assert_eq!(grouping.label(), "region");

    let totals = grouping.sum("units")?;
    assert_eq!(totals.key_name(), "region");
    assert_eq!(totals.value_name(), "units");
    assert_eq!(totals.frame().index_name(), Some("region"));
    assert_eq!(totals.values().scalars(), ints(&[4, 7, 6]));

    let cheapest = grouping.min("price")?;
    assert_eq!(cheapest.value_name(), "price");
    assert_eq!(cheapest.values().scalar_at(1), Scalar::Float64(1.25));

    let firsts = grouping.aggregate("units", &Aggregation::first())?;
    assert_eq!(firsts.values().scalars(), ints(&[1, 7, 4]));
    Ok(())
}

#[test]
fn test_frame_count_over_index() -> Result<()> {
    let mut df = sales_frame();
    let counts = df.group_by_value("region")?.count()?;
    assert_eq!(counts.key_name(), "key");
    assert_eq!(counts.values().scalars(), ints(&[2, 1, 3]));

    df.set_index("units")?;
    let counts = df.group_by_count(4)?.count()?;
    assert_eq!(counts.values().scalars(), ints(&[4, 2]));
    Ok(())
}

#[test]
fn test_frame_row_based_groupings_use_default_label() -> Result<()> {
    let df = sales_frame();

    let windows = df.group_by_moving_window(2)?.sum("price")?;
    assert_eq!(windows.key_name(), "key");
    assert_eq!(windows.value_name(), "price");
    assert_eq!(windows.len(), df.row_count());
    assert!(windows.values().is_null(0));
    assert_eq!(windows.values().scalar_at(1), Scalar::Float64(12.5));

    let running = df.group_by_expanding_window().max("units")?;
    assert_eq!(running.values().scalars(), ints(&[4, 4, 4, 7, 7, 7]));

    let halves = df.group_by_partitions(2)?.sum("promo")?;
    assert_eq!(halves.values().column_type(), ColumnType::Int64);
    assert_eq!(halves.values().scalars(), ints(&[2, 1]));
    Ok(())
}

#[test]
fn test_frame_interval_grouping() -> Result<()> {
    let df = sales_frame();
    let grouping = df.group_by_interval("price", 5)?;
    let result = grouping.max("price")?;
    assert_eq!(result.key_name(), "price");
    assert_eq!(result.values().scalars().len(), result.keys().len());
    assert!(grouping.sum("price").is_ok());
    assert!(matches!(
        df.group_by_interval("region", 5),
        Err(Error::ColumnTypeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_reducing_the_grouped_column_collides() -> Result<()> {
    let df = sales_frame();
    let grouping = df.group_by_value("region")?;
    assert!(grouping.count().is_ok());
    assert!(matches!(
        grouping.min("region"),
        Err(Error::DuplicateColumnName(_))
    ));
    Ok(())
}

#[test]
fn test_config_names_results() -> Result<()> {
    let config = GroupingConfig::from_toml_str("key_name = \"bucket\"\nvalue_name = \"total\"")?;
    let col: Column = Int64Column::new(vec![3, 3, 9]).into();
    let result = col.group_by_value().with_config(config).sum()?;

    assert_eq!(result.key_name(), "bucket");
    assert_eq!(result.value_name(), "total");
    assert_eq!(result.frame().column("total")?.scalars(), ints(&[6, 9]));
    Ok(())
}
