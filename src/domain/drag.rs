use crate::domain::Board;

/// Tracks the task currently being dragged on one board.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    dragged_task: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Moved { task_id: String, column_id: String },
    NoActiveDrag,
    OutsideColumn,
    TaskGone,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged_task(&self) -> Option<&str> {
        self.dragged_task.as_deref()
    }

    /// Starts dragging `task_id`. Unknown ids leave the coordinator unchanged.
    pub fn start(&mut self, board: &Board, task_id: &str) -> bool {
        if board.task(task_id).is_none() {
            return false;
        }
        self.dragged_task = Some(task_id.to_string());
        true
    }

    /// Drops the dragged task onto `column_id`. The drag stays active until
    /// [`DragCoordinator::end`] is called.
    pub fn drop_on(&self, board: &mut Board, column_id: Option<&str>) -> DropOutcome {
        let Some(task_id) = self.dragged_task.as_deref() else {
            return DropOutcome::NoActiveDrag;
        };

        let Some(column_id) = column_id.filter(|id| board.has_column(id)) else {
            return DropOutcome::OutsideColumn;
        };

        if board.move_task(task_id, column_id) {
            DropOutcome::Moved {
                task_id: task_id.to_string(),
                column_id: column_id.to_string(),
            }
        } else {
            DropOutcome::TaskGone
        }
    }

    pub fn end(&mut self) -> Option<String> {
        self.dragged_task.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnLayout, Task};

    fn board() -> Board {
        let layout = ColumnLayout::new(vec!["todo".into(), "done".into()], "todo").unwrap();
        let mut board = Board::new(&layout);
        board.append_task("todo", Task::new("a", "A", "")).unwrap();
        board
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut board = board();
        let drag = DragCoordinator::new();
        assert_eq!(drag.drop_on(&mut board, Some("done")), DropOutcome::NoActiveDrag);
        assert_eq!(board.column_of("a"), Some("todo"));
    }

    #[test]
    fn test_start_ignores_unknown_task() {
        let board = board();
        let mut drag = DragCoordinator::new();
        assert!(!drag.start(&board, "missing"));
        assert_eq!(drag.dragged_task(), None);
    }

    #[test]
    fn test_drag_and_drop_moves_task() {
        let mut board = board();
        let mut drag = DragCoordinator::new();
        assert!(drag.start(&board, "a"));

        let outcome = drag.drop_on(&mut board, Some("done"));
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task_id: "a".into(),
                column_id: "done".into()
            }
        );
        assert_eq!(board.column_of("a"), Some("done"));
        assert_eq!(drag.end(), Some("a".into()));
        assert_eq!(drag.dragged_task(), None);
    }

    #[test]
    fn test_drop_outside_column_is_noop() {
        let mut board = board();
        let mut drag = DragCoordinator::new();
        drag.start(&board, "a");

        assert_eq!(drag.drop_on(&mut board, None), DropOutcome::OutsideColumn);
        assert_eq!(drag.drop_on(&mut board, Some("trash")), DropOutcome::OutsideColumn);
        assert_eq!(board.column_of("a"), Some("todo"));
    }

    #[test]
    fn test_drop_after_task_removed() {
        let mut board = board();
        let mut drag = DragCoordinator::new();
        drag.start(&board, "a");
        board.remove_task("a");

        assert_eq!(drag.drop_on(&mut board, Some("done")), DropOutcome::TaskGone);
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_coordinators_are_independent() {
        let board = board();
        let mut first = DragCoordinator::new();
        let second = DragCoordinator::new();
        first.start(&board, "a");
        assert_eq!(first.dragged_task(), Some("a"));
        assert_eq!(second.dragged_task(), None);
    }
}
