use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Task;

pub const PRODUCT_BACKLOG: &str = "product-backlog";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tasks: Vec::new(),
        }
    }
}

/// Fixed, ordered set of column ids a board is built from. Users never add or
/// remove columns; the layout comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    column_ids: Vec<String>,
    default_column: String,
}

impl ColumnLayout {
    pub fn new(column_ids: Vec<String>, default_column: impl Into<String>) -> Result<Self, String> {
        let default_column = default_column.into();

        if column_ids.is_empty() {
            return Err("Column layout must contain at least one column".into());
        }

        for (idx, id) in column_ids.iter().enumerate() {
            if id.is_empty() {
                return Err("Column ids must not be empty".into());
            }
            if column_ids[..idx].contains(id) {
                return Err(format!("Duplicate column id in layout: {}", id));
            }
        }

        if !column_ids.contains(&default_column) {
            return Err(format!(
                "Default column {} is not part of the layout: {}",
                default_column,
                column_ids.join(", ")
            ));
        }

        Ok(Self {
            column_ids,
            default_column,
        })
    }

    pub fn column_ids(&self) -> &[String] {
        &self.column_ids
    }

    pub fn default_column(&self) -> &str {
        &self.default_column
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            column_ids: vec![
                PRODUCT_BACKLOG.into(),
                "sprint-backlog".into(),
                "in-progress".into(),
                "review".into(),
                "done".into(),
            ],
            default_column: PRODUCT_BACKLOG.into(),
        }
    }
}

impl fmt::Display for ColumnLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_ids.join(" | "))
    }
}
