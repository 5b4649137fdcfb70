use crate::column::{Column, ColumnType, Int64Column};
use crate::error::{Error, Result};
use crate::groupby::{into_buckets, Grouping};

/// Upper bound on the number of interval groups, empty ones included
pub const MAX_INTERVAL_GROUPS: usize = 1 << 24;

/// One bucket per fixed-width interval between the column's min and max
///
/// Keys are the interval starts (`start * interval, (start + 1) * interval,
/// ...` with `start = floor(min / interval)`), so intermediate buckets may be
/// empty. Values are compared as integers; float columns truncate toward
/// zero. Null rows belong to no bucket.
#[derive(Debug, Clone)]
pub struct GroupingByInterval {
    keys: Column,
    buckets: Vec<Box<[usize]>>,
}

impl GroupingByInterval {
    /// Group a numeric column into intervals of width `interval`
    pub fn from_column(column: &Column, interval: i64) -> Result<Self> {
        if interval <= 0 {
            return Err(Error::InvalidInput(format!(
                "interval must be > 0, got {}",
                interval
            )));
        }
        if !column.column_type().is_numeric() {
            return Err(Error::ColumnTypeMismatch {
                name: column.name().unwrap_or("<unnamed>").to_string(),
                expected: ColumnType::Int64,
                found: column.column_type(),
            });
        }

        let values = column.to_int64()?;
        let (min, max) = match (values.min(), values.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                log::debug!("grouping by interval {}: no values", interval);
                return Ok(Self {
                    keys: Int64Column::new(Vec::new()).into(),
                    buckets: Vec::new(),
                });
            }
        };

        // bounds are computed in i128 so extreme values cannot overflow
        let width = i128::from(interval);
        let start = i128::from(min).div_euclid(width);
        let stop = i128::from(max).div_euclid(width) + 1;
        let count = usize::try_from(stop - start)
            .ok()
            .filter(|&count| count <= MAX_INTERVAL_GROUPS)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "interval {} over [{}, {}] yields more than {} groups",
                    interval, min, max, MAX_INTERVAL_GROUPS
                ))
            })?;
        let offset = start * width;

        let keys = (start..stop)
            .map(|i| i64::try_from(i * width))
            .collect::<std::result::Result<Vec<i64>, _>>()
            .map_err(|_| {
                Error::InvalidInput(format!(
                    "interval {} starting below {} is not representable",
                    interval, min
                ))
            })?;
        let mut buckets = vec![Vec::new(); count];
        for (row, value) in values.iter().enumerate() {
            if let Some(value) = value {
                buckets[(i128::from(value) - offset).div_euclid(width) as usize].push(row);
            }
        }

        log::debug!(
            "grouping by interval {}: {} rows -> {} groups",
            interval,
            column.len(),
            count
        );

        Ok(Self {
            keys: Int64Column::new(keys).into(),
            buckets: into_buckets(buckets),
        })
    }

    /// Row positions of every group
    pub fn buckets(&self) -> &[Box<[usize]>] {
        &self.buckets
    }
}

impl Grouping for GroupingByInterval {
    fn keys(&self) -> &Column {
        &self.keys
    }

    fn apply(&self, column: &Column, group_index: usize) -> Column {
        column.project(&self.buckets[group_index])
    }
}
