pub mod board_serializer;
pub mod task_service;

pub use board_serializer::{BoardSerializer, ImportReport, EXPORT_FILE_NAME};
pub use task_service::TaskService;
