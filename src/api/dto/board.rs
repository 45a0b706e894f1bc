use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StartDragRequest {
    pub task_id: String,
}

#[derive(Debug, Serialize)]
pub struct DragStateResponse {
    pub dragged_task: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DropRequest {
    #[serde(default)]
    pub column_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DropResponse {
    pub moved: bool,
    pub task_id: Option<String>,
    pub column_id: Option<String>,
}
