//! Typed frame columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    Int64,
    Float64,
    Bool,
    Utf8,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::Int64 => "int64",
            DType::Float64 => "float64",
            DType::Bool => "bool",
            DType::Utf8 => "utf8",
        };
        f.write_str(name)
    }
}

/// Column values, stored contiguously per type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
    Utf8(Vec<String>),
}

impl ColumnData {
    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Int64(_) => DType::Int64,
            ColumnData::Float64(_) => DType::Float64,
            ColumnData::Bool(_) => DType::Bool,
            ColumnData::Utf8(_) => DType::Utf8,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Utf8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the value at `row` for display
    pub(crate) fn cell(&self, row: usize) -> String {
        match self {
            ColumnData::Int64(v) => v[row].to_string(),
            ColumnData::Float64(v) => v[row].to_string(),
            ColumnData::Bool(v) => v[row].to_string(),
            ColumnData::Utf8(v) => v[row].clone(),
        }
    }
}

/// A labelled column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(label: impl Into<String>, data: ColumnData) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_and_len() {
        let col = Column::new("price", ColumnData::Float64(vec![1.5, 2.0]));
        assert_eq!(col.dtype(), DType::Float64);
        assert_eq!(col.len(), 2);
        assert!(!col.is_empty());
    }

    #[test]
    fn test_cell_rendering() {
        let data = ColumnData::Utf8(vec!["a".into(), "bc".into()]);
        assert_eq!(data.cell(1), "bc");
        assert_eq!(ColumnData::Bool(vec![true]).cell(0), "true");
        assert_eq!(DType::Int64.to_string(), "int64");
    }
}
