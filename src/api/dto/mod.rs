pub mod board;
pub mod tasks;

pub use board::{DragStateResponse, DropRequest, DropResponse, StartDragRequest};
pub use tasks::{
    CreateTaskRequest, DeleteTaskQuery, DeleteTaskResponse, MoveTaskRequest, MoveTaskResponse,
    UpdateTaskRequest,
};
