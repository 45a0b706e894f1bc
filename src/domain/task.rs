use serde::{Deserialize, Serialize};

pub const TASK_ID_PREFIX: &str = "task-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Time-based task id, e.g. `task-1729252800123`.
pub fn task_id_from_millis(millis: i64) -> String {
    format!("{}{}", TASK_ID_PREFIX, millis)
}
