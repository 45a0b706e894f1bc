use crate::domain::{Board, KanbanError, Task};

pub struct TaskService;

impl TaskService {
    /// Creates a task in the board's default column. A missing or empty title
    /// cancels creation and returns `None`.
    pub fn create_task(
        board: &mut Board,
        title: Option<&str>,
        description: Option<&str>,
        now_millis: i64,
    ) -> Result<Option<Task>, KanbanError> {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            tracing::debug!("Task creation cancelled: empty title");
            return Ok(None);
        };

        let task = Task::new(
            board.next_task_id(now_millis),
            title,
            description.unwrap_or_default(),
        );
        let column_id = board.default_column().to_string();

        board.append_task(&column_id, task.clone()).map_err(|_| {
            KanbanError::Internal(format!("Default column {} is missing", column_id))
        })?;

        tracing::info!(
            task_id = task.id.as_str(),
            column_id = column_id.as_str(),
            "Task created"
        );

        Ok(Some(task))
    }

    /// Applies non-empty values; empty or missing ones keep the current text.
    pub fn edit_task(
        board: &mut Board,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Task, KanbanError> {
        let task = board
            .task_mut(id)
            .ok_or_else(|| KanbanError::NotFound(format!("Task not found: {}", id)))?;

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            task.title = title.to_string();
        }
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            task.description = description.to_string();
        }

        Ok(task.clone())
    }

    /// Removes the task only when `confirmed`; otherwise returns `None` and
    /// leaves the board as it was.
    pub fn delete_task(
        board: &mut Board,
        id: &str,
        confirmed: bool,
    ) -> Result<Option<Task>, KanbanError> {
        if board.task(id).is_none() {
            return Err(KanbanError::NotFound(format!("Task not found: {}", id)));
        }

        if !confirmed {
            tracing::debug!(task_id = id, "Delete not confirmed, keeping task");
            return Ok(None);
        }

        let removed = board.remove_task(id);
        if removed.is_some() {
            tracing::info!(task_id = id, "Task deleted");
        }
        Ok(removed)
    }

    /// Appends the task to `column_id`. Returns the column it landed in, or
    /// `None` when dropped outside any column.
    pub fn move_task(
        board: &mut Board,
        id: &str,
        column_id: Option<&str>,
    ) -> Result<Option<String>, KanbanError> {
        let from = board
            .column_of(id)
            .map(str::to_owned)
            .ok_or_else(|| KanbanError::NotFound(format!("Task not found: {}", id)))?;

        let Some(column_id) = column_id else {
            return Ok(None);
        };

        if !board.move_task(id, column_id) {
            tracing::debug!(task_id = id, column_id, "Drop target is not a column");
            return Ok(None);
        }

        tracing::info!(
            task_id = id,
            from_column = from.as_str(),
            to_column = column_id,
            "Task moved"
        );

        Ok(Some(column_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnLayout, PRODUCT_BACKLOG};

    fn board() -> Board {
        Board::new(&ColumnLayout::default())
    }

    #[test]
    fn test_create_appends_to_default_column() {
        let mut board = board();
        let task = TaskService::create_task(&mut board, Some("Write spec"), Some("draft v1"), 42)
            .unwrap()
            .unwrap();

        assert_eq!(task.id, "task-42");
        assert_eq!(board.column(PRODUCT_BACKLOG).unwrap().tasks, vec![task]);
    }

    #[test]
    fn test_create_with_empty_title_is_cancelled() {
        let mut board = board();
        assert!(TaskService::create_task(&mut board, None, Some("x"), 1).unwrap().is_none());
        assert!(TaskService::create_task(&mut board, Some(""), None, 1).unwrap().is_none());
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_create_in_same_millisecond_gets_unique_ids() {
        let mut board = board();
        let a = TaskService::create_task(&mut board, Some("a"), None, 7).unwrap().unwrap();
        let b = TaskService::create_task(&mut board, Some("b"), None, 7).unwrap().unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(b.description, "");
    }

    #[test]
    fn test_edit_keeps_fields_for_empty_values() {
        let mut board = board();
        let task = TaskService::create_task(&mut board, Some("old"), Some("desc"), 1)
            .unwrap()
            .unwrap();

        let edited = TaskService::edit_task(&mut board, &task.id, Some("new"), Some("")).unwrap();
        assert_eq!(edited.title, "new");
        assert_eq!(edited.description, "desc");

        let edited = TaskService::edit_task(&mut board, &task.id, None, Some("more")).unwrap();
        assert_eq!(edited.title, "new");
        assert_eq!(edited.description, "more");
    }

    #[test]
    fn test_edit_unknown_task() {
        let mut board = board();
        let err = TaskService::edit_task(&mut board, "task-0", Some("x"), None).unwrap_err();
        assert!(matches!(err, KanbanError::NotFound(_)));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut board = board();
        let task = TaskService::create_task(&mut board, Some("keep"), None, 1)
            .unwrap()
            .unwrap();

        assert!(TaskService::delete_task(&mut board, &task.id, false).unwrap().is_none());
        assert_eq!(board.task(&task.id), Some(&task));

        let removed = TaskService::delete_task(&mut board, &task.id, true).unwrap();
        assert_eq!(removed, Some(task));
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_move_outside_column_is_noop() {
        let mut board = board();
        let task = TaskService::create_task(&mut board, Some("a"), None, 1)
            .unwrap()
            .unwrap();

        assert_eq!(TaskService::move_task(&mut board, &task.id, None).unwrap(), None);
        assert_eq!(TaskService::move_task(&mut board, &task.id, Some("trash")).unwrap(), None);
        assert_eq!(
            TaskService::move_task(&mut board, &task.id, Some("done")).unwrap(),
            Some("done".to_string())
        );
        assert_eq!(board.column_of(&task.id), Some("done"));
    }
}
