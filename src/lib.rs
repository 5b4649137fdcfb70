//! Grouping and aggregation over typed, null-aware columns
//!
//! ```
//! use pandrs_grouping::{Column, DataFrame, Int64Column, StringColumn};
//!
//! let mut df = DataFrame::new();
//! df.add_column("region", StringColumn::from_strs(&["west", "east", "west"])).unwrap();
//! df.add_column("units", Int64Column::new(vec![4, 1, 6])).unwrap();
//!
//! let totals = df.group_by_value("region").unwrap().sum("units").unwrap();
//! assert_eq!(totals.key_name(), "region");
//! assert_eq!(totals.len(), 2);
//!
//! let col: Column = Int64Column::new(vec![1, 2, 3, 4]).into();
//! let rolling = col.group_by_moving_window(2).unwrap().sum().unwrap();
//! assert!(rolling.values().is_null(0));
//! ```

pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod groupby;

// Re-export commonly used types
pub use column::{
    Aggregation, BooleanColumn, Column, ColumnBuilder, ColumnType, Float64Column, Int64Column,
    ObjectColumn, ObjectValue, Scalar, StringColumn,
};
pub use config::GroupingConfig;
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use groupby::{
    DataFrameGrouping, Grouping, GroupingByCount, GroupingByExpandingWindow, GroupingByInterval,
    GroupingByMovingWindow, GroupingByPartitions, GroupingByValue, GroupingDataFrame,
    GroupingStatic, IncrementalReducer, Reduction, SeriesGrouping, MAX_INTERVAL_GROUPS,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
