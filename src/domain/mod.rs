pub mod board;
pub mod column;
pub mod drag;
pub mod error;
pub mod session;
pub mod task;

pub use board::{Board, BoardDocument};
pub use column::{Column, ColumnLayout, PRODUCT_BACKLOG};
pub use drag::{DragCoordinator, DropOutcome};
pub use error::{KanbanError, INVALID_IMPORT_MESSAGE};
pub use session::BoardSession;
pub use task::{task_id_from_millis, Task, TASK_ID_PREFIX};
