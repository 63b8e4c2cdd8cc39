//! Tabular payload type
//!
//! A `Frame` is an ordered set of equally long, uniquely labelled, typed
//! columns. It is the value cached functions are expected to produce.

mod column;

pub use column::{Column, ColumnData, DType};

use crate::error::{CacheError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Column-oriented table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct Frame {
    columns: Vec<Column>,
}

/// Unchecked wire shape of a `Frame`; decoding goes through `Frame::new`
#[derive(Deserialize)]
struct RawFrame {
    columns: Vec<Column>,
}

impl TryFrom<RawFrame> for Frame {
    type Error = CacheError;

    fn try_from(raw: RawFrame) -> Result<Self> {
        Frame::new(raw.columns)
    }
}

impl Frame {
    /// Build a frame, checking that columns line up
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let height = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != height) {
                return Err(CacheError::InvalidFrame(format!(
                    "column '{}' has {} rows, expected {}",
                    bad.label,
                    bad.len(),
                    height
                )));
            }
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.label.as_str()) {
                return Err(CacheError::InvalidFrame(format!(
                    "duplicate column label '{}'",
                    column.label
                )));
            }
        }

        Ok(Self { columns })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Single integer column labelled `0`
    pub fn from_values(values: Vec<i64>) -> Self {
        Self {
            columns: vec![Column::new("0", ColumnData::Int64(values))],
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn dtypes(&self) -> Vec<DType> {
        self.columns.iter().map(Column::dtype).collect()
    }

    pub fn column(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.label == label)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = self.height();
        let index: Vec<String> = (0..height).map(|r| r.to_string()).collect();
        let index_width = index.iter().map(String::len).max().unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| (0..height).map(|r| c.data.cell(r)).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(c, col)| {
                col.iter()
                    .map(String::len)
                    .chain(std::iter::once(c.label.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (column, &width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.label)?;
        }
        writeln!(f)?;

        for (row, label) in index.iter().enumerate() {
            write!(f, "{:<index_width$}", label)?;
            for (col, &width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", col[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
