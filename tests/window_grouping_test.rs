mod common;

use common::{ints, int_column_with_nulls};
use pandrs_grouping::error::Result;
use pandrs_grouping::{
    Aggregation, BooleanColumn, Column, ColumnType, Float64Column, Grouping,
    GroupingByExpandingWindow, GroupingByMovingWindow, Int64Column, Reduction, Scalar,
    StringColumn,
};

fn per_group(reduction: Reduction) -> Aggregation {
    Aggregation::native(move |column: &Column| reduction.apply(column).unwrap_or(Scalar::Null))
}

#[test]
fn test_moving_sum() -> Result<()> {
    let col: Column = Int64Column::new(vec![1, 2, 3, 4]).into();
    let grouping = GroupingByMovingWindow::new(2, col.len())?;

    let result = grouping.sum(&col)?;
    assert_eq!(result.keys().scalars(), ints(&[0, 1, 2, 3]));
    assert_eq!(
        result.values().scalars(),
        vec![Scalar::Null, Scalar::Int64(3), Scalar::Int64(5), Scalar::Int64(7)]
    );
    Ok(())
}

#[test]
fn test_moving_sum_agrees_with_fold_without_nulls() -> Result<()> {
    let col = int_column_with_nulls(40, 0);
    for window in [1usize, 3, 5, 40, 41] {
        let grouping = GroupingByMovingWindow::new(window, col.len())?;
        assert_eq!(
            grouping.sum(&col)?.values().scalars(),
            grouping.aggregate(&col, &per_group(Reduction::Sum))?.values().scalars(),
            "window {}",
            window
        );
    }
    Ok(())
}

#[test]
fn test_moving_sum_live_count_after_nulls() -> Result<()> {
    let col: Column = Int64Column::from_options(vec![Some(1), None, Some(3), Some(4)]).into();
    let grouping = GroupingByMovingWindow::new(2, col.len())?;

    // an incoming null lowers the live count even though the window still holds a value
    assert_eq!(
        grouping.sum(&col)?.values().scalars(),
        vec![Scalar::Null, Scalar::Null, Scalar::Int64(3), Scalar::Int64(7)]
    );
    assert_eq!(
        grouping.aggregate(&col, &per_group(Reduction::Sum))?.values().scalars(),
        vec![Scalar::Null, Scalar::Int64(1), Scalar::Int64(3), Scalar::Int64(7)]
    );
    Ok(())
}

#[test]
fn test_moving_sum_of_floats_and_booleans() -> Result<()> {
    let floats: Column = Float64Column::new(vec![0.5, 1.5, 2.0]).into();
    let grouping = GroupingByMovingWindow::new(2, 3)?;
    assert_eq!(
        grouping.sum(&floats)?.values().scalars(),
        vec![Scalar::Null, Scalar::Float64(2.0), Scalar::Float64(3.5)]
    );

    let flags: Column = BooleanColumn::new(vec![true, true, false]).into();
    let result = grouping.sum(&flags)?;
    assert_eq!(result.values().column_type(), ColumnType::Int64);
    assert_eq!(
        result.values().scalars(),
        vec![Scalar::Null, Scalar::Int64(2), Scalar::Int64(1)]
    );
    Ok(())
}

#[test]
fn test_moving_text_sum_retracts_one_character() -> Result<()> {
    let letters: Column = StringColumn::from_strs(&["a", "b", "c"]).into();
    let grouping = GroupingByMovingWindow::new(2, 3)?;
    assert_eq!(
        grouping.sum(&letters)?.values().scalars(),
        vec![
            Scalar::Null,
            Scalar::String("ab".into()),
            Scalar::String("bc".into()),
        ]
    );

    let words: Column = StringColumn::from_strs(&["ab", "cd", "ef"]).into();
    assert_eq!(
        grouping.sum(&words)?.values().scalar_at(2),
        Scalar::String("bcdef".into())
    );
    Ok(())
}

#[test]
fn test_moving_min_max_per_window() -> Result<()> {
    let col: Column = Int64Column::new(vec![5, 3, 8, 1, 4]).into();
    let grouping = GroupingByMovingWindow::new(3, col.len())?;

    assert_eq!(
        grouping.min(&col)?.values().scalars(),
        vec![Scalar::Null, Scalar::Null, Scalar::Int64(3), Scalar::Int64(1), Scalar::Int64(1)]
    );
    assert_eq!(
        grouping.max(&col)?.values().scalars(),
        vec![Scalar::Null, Scalar::Null, Scalar::Int64(8), Scalar::Int64(8), Scalar::Int64(8)]
    );
    assert_eq!(grouping.count(&col)?.values().scalars(), ints(&[0, 0, 3, 3, 3]));
    Ok(())
}

#[test]
fn test_window_larger_than_input() -> Result<()> {
    let col: Column = Int64Column::new(vec![1, 2]).into();
    let grouping = GroupingByMovingWindow::new(5, col.len())?;
    assert_eq!(grouping.size(), 2);
    assert_eq!(
        grouping.sum(&col)?.values().scalars(),
        vec![Scalar::Null, Scalar::Null]
    );
    Ok(())
}

#[test]
fn test_expanding_sum_fills_after_first_value() -> Result<()> {
    let col: Column =
        Int64Column::from_options(vec![None, Some(1), Some(2), None, Some(3)]).into();
    let grouping = GroupingByExpandingWindow::new(col.len());

    assert_eq!(
        grouping.sum(&col)?.values().scalars(),
        vec![
            Scalar::Null,
            Scalar::Int64(1),
            Scalar::Int64(3),
            Scalar::Int64(3),
            Scalar::Int64(6),
        ]
    );
    Ok(())
}

#[test]
fn test_expanding_min_ignores_nulls() -> Result<()> {
    let col: Column = Int64Column::from_options(vec![Some(3), Some(1), None, Some(2)]).into();
    let grouping = GroupingByExpandingWindow::new(col.len());
    assert_eq!(grouping.min(&col)?.values().scalars(), ints(&[3, 1, 1, 1]));
    Ok(())
}

#[test]
fn test_expanding_reductions_agree_with_fold() -> Result<()> {
    let col = int_column_with_nulls(30, 4);
    let grouping = GroupingByExpandingWindow::new(col.len());

    for reduction in [Reduction::Sum, Reduction::Min, Reduction::Max] {
        assert_eq!(
            grouping.reduce(&col, reduction)?.values().scalars(),
            grouping.aggregate(&col, &per_group(reduction))?.values().scalars(),
            "{:?}",
            reduction
        );
    }
    Ok(())
}

#[test]
fn test_expanding_boolean_extremes_stay_boolean() -> Result<()> {
    let col: Column =
        BooleanColumn::from_options(vec![Some(true), None, Some(false), Some(true)]).into();
    let grouping = GroupingByExpandingWindow::new(col.len());

    let min = grouping.min(&col)?;
    assert_eq!(min.values().column_type(), ColumnType::Boolean);
    assert_eq!(
        min.values().scalars(),
        vec![
            Scalar::Boolean(true),
            Scalar::Boolean(true),
            Scalar::Boolean(false),
            Scalar::Boolean(false),
        ]
    );
    Ok(())
}

#[test]
fn test_expanding_over_no_rows() -> Result<()> {
    let col: Column = StringColumn::new(Vec::new()).into();
    let grouping = GroupingByExpandingWindow::new(0);
    for reduction in [Reduction::Sum, Reduction::Min, Reduction::Max] {
        let result = grouping.reduce(&col, reduction)?;
        assert!(result.is_empty());
        assert_eq!(result.values().column_type(), ColumnType::String);
    }
    Ok(())
}
