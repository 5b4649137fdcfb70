//! Table of equally long named columns with an optional index column

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::column::{Column, Int64Column};
use crate::error::{Error, Result};

/// Ordered collection of named, equally long columns
///
/// One of the columns may be designated as the row index.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    // column data
    pub(crate) columns: Vec<Column>,
    // column name -> position
    pub(crate) column_indices: HashMap<String, usize>,
    // column order
    pub(crate) column_names: Vec<String>,
    pub(crate) row_count: usize,
    // name of the index column
    pub(crate) index: Option<String>,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_indices.contains_key(name)
    }

    /// Add a column
    pub fn add_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column_indices.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        let column_len = column.len();
        if !self.columns.is_empty() && column_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column_len,
            });
        }

        self.column_indices.insert(name.clone(), self.columns.len());
        self.columns.push(column);
        self.column_names.push(name);
        self.row_count = column_len;

        Ok(())
    }

    /// Column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.column_indices
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Rename a column; the index designation follows the column
    pub fn rename_column(&mut self, old_name: &str, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();

        if self.column_indices.contains_key(&new_name) && old_name != new_name {
            return Err(Error::DuplicateColumnName(new_name));
        }

        let column_idx = self
            .column_indices
            .remove(old_name)
            .ok_or_else(|| Error::ColumnNotFound(old_name.to_string()))?;
        self.column_indices.insert(new_name.clone(), column_idx);
        self.column_names[column_idx] = new_name.clone();

        if self.index.as_deref() == Some(old_name) {
            self.index = Some(new_name);
        }

        Ok(())
    }

    /// Designate an existing column as the row index
    pub fn set_index(&mut self, name: &str) -> Result<()> {
        if !self.contains_column(name) {
            return Err(Error::ColumnNotFound(name.to_string()));
        }
        self.index = Some(name.to_string());
        Ok(())
    }

    /// Name of the index column, if one is designated
    pub fn index_name(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// The index column, if one is designated
    pub fn index(&self) -> Option<&Column> {
        self.index
            .as_deref()
            .and_then(|name| self.column_indices.get(name))
            .map(|&idx| &self.columns[idx])
    }

    /// The index column, or the row positions when no index is designated
    pub fn index_or_positions(&self) -> Column {
        match self.index() {
            Some(index) => index.clone(),
            None => Int64Column::sequence(0, self.row_count as i64).into(),
        }
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        if self.columns.is_empty() {
            return write!(f, "DataFrame (0 rows x 0 columns)");
        }

        writeln!(f, "DataFrame ({} rows x {} columns):", self.row_count, self.columns.len())?;

        for name in &self.column_names {
            let marker = if self.index.as_deref() == Some(name.as_str()) { "*" } else { "" };
            write!(f, " {:<15} |", format!("{}{}", name, marker))?;
        }
        writeln!(f)?;
        for _ in &self.column_names {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        for row in 0..self.row_count.min(MAX_ROWS) {
            for column in &self.columns {
                write!(f, " {:<15} |", column.scalar_at(row).to_string())?;
            }
            writeln!(f)?;
        }

        if self.row_count > MAX_ROWS {
            writeln!(f, "... ({} more rows)", self.row_count - MAX_ROWS)?;
        }

        Ok(())
    }
}
