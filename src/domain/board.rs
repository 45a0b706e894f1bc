use serde::{Deserialize, Serialize};

use crate::domain::{task_id_from_millis, Column, ColumnLayout, Task};

/// Wire form of a board, as written to and read from `board.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub columns: Vec<Column>,
}

/// In-memory board. Columns are fixed by the layout at construction; only the
/// tasks inside them change.
#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Column>,
    default_column: String,
}

impl Board {
    pub fn new(layout: &ColumnLayout) -> Self {
        Self {
            columns: layout.column_ids().iter().map(Column::new).collect(),
            default_column: layout.default_column().to_string(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn default_column(&self) -> &str {
        &self.default_column
    }

    pub fn has_column(&self, column_id: &str) -> bool {
        self.columns.iter().any(|c| c.id == column_id)
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }

    /// Column id holding the first task with `task_id`.
    pub fn column_of(&self, task_id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
            .map(|c| c.id.as_str())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Returns a `task-<millis>` id not yet used on this board, bumping the
    /// millisecond component past any collision.
    pub fn next_task_id(&self, now_millis: i64) -> String {
        let mut millis = now_millis;
        loop {
            let id = task_id_from_millis(millis);
            if self.task(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    /// Appends `task` to the end of `column_id`. Hands the task back when the
    /// column does not exist.
    pub fn append_task(&mut self, column_id: &str, task: Task) -> Result<(), Task> {
        match self.columns.iter_mut().find(|c| c.id == column_id) {
            Some(column) => {
                column.tasks.push(task);
                Ok(())
            }
            None => Err(task),
        }
    }

    pub fn remove_task(&mut self, task_id: &str) -> Option<Task> {
        for column in &mut self.columns {
            if let Some(idx) = column.tasks.iter().position(|t| t.id == task_id) {
                return Some(column.tasks.remove(idx));
            }
        }
        None
    }

    /// Relocates a task to the end of `column_id`. Returns false and leaves the
    /// board untouched when either the task or the column is unknown.
    pub fn move_task(&mut self, task_id: &str, column_id: &str) -> bool {
        if !self.has_column(column_id) || self.task(task_id).is_none() {
            return false;
        }

        match self.remove_task(task_id) {
            Some(task) => self.append_task(column_id, task).is_ok(),
            None => false,
        }
    }

    pub fn clear_tasks(&mut self) {
        for column in &mut self.columns {
            column.tasks.clear();
        }
    }

    pub fn to_document(&self) -> BoardDocument {
        BoardDocument {
            columns: self.columns.clone(),
        }
    }
}
