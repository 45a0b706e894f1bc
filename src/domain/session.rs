use crate::domain::{Board, ColumnLayout, DragCoordinator};

/// One rendered board together with its drag state.
#[derive(Debug, Clone)]
pub struct BoardSession {
    pub board: Board,
    pub drag: DragCoordinator,
}

impl BoardSession {
    pub fn new(layout: &ColumnLayout) -> Self {
        Self {
            board: Board::new(layout),
            drag: DragCoordinator::new(),
        }
    }
}
