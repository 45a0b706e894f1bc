use axum::{extract::State, Json};

use crate::api::dto::{DragStateResponse, DropRequest, DropResponse, StartDragRequest};
use crate::api::handlers::sse::BoardEvent;
use crate::api::AppState;
use crate::domain::DropOutcome;

pub async fn start_drag(
    State(state): State<AppState>,
    Json(req): Json<StartDragRequest>,
) -> Json<DragStateResponse> {
    let mut session = state.session.lock().await;
    let session = &mut *session;

    if !session.drag.start(&session.board, &req.task_id) {
        tracing::debug!(task_id = req.task_id.as_str(), "Ignoring drag of unknown task");
    }

    Json(DragStateResponse {
        dragged_task: session.drag.dragged_task().map(str::to_owned),
    })
}

pub async fn drop_task(
    State(state): State<AppState>,
    Json(req): Json<DropRequest>,
) -> Json<DropResponse> {
    let outcome = {
        let mut session = state.session.lock().await;
        let session = &mut *session;
        session.drag.drop_on(&mut session.board, req.column_id.as_deref())
    };

    match outcome {
        DropOutcome::Moved { task_id, column_id } => {
            tracing::info!(
                task_id = task_id.as_str(),
                column_id = column_id.as_str(),
                "Task dropped"
            );
            state.publish(&BoardEvent::TaskMoved {
                task_id: task_id.clone(),
                to_column: column_id.clone(),
            });
            Json(DropResponse {
                moved: true,
                task_id: Some(task_id),
                column_id: Some(column_id),
            })
        }
        other => {
            tracing::debug!(outcome = ?other, "Drop ignored");
            Json(DropResponse {
                moved: false,
                task_id: None,
                column_id: None,
            })
        }
    }
}

pub async fn end_drag(State(state): State<AppState>) -> Json<DragStateResponse> {
    let mut session = state.session.lock().await;
    session.drag.end();
    Json(DragStateResponse { dragged_task: None })
}
