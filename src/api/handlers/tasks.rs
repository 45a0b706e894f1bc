use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::{
    CreateTaskRequest, DeleteTaskQuery, DeleteTaskResponse, MoveTaskRequest, MoveTaskResponse,
    UpdateTaskRequest,
};
use crate::api::handlers::sse::BoardEvent;
use crate::api::AppState;
use crate::domain::{KanbanError, Task};
use crate::services::TaskService;

pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Response, KanbanError> {
    let created = {
        let mut session = state.session.lock().await;
        let now = chrono::Utc::now().timestamp_millis();
        TaskService::create_task(
            &mut session.board,
            req.title.as_deref(),
            req.description.as_deref(),
            now,
        )?
        .map(|task| (session.board.default_column().to_string(), task))
    };

    let Some((column_id, task)) = created else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    state.publish(&BoardEvent::TaskCreated {
        column_id,
        task: task.clone(),
    });

    Ok((StatusCode::CREATED, Json(task)).into_response())
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, KanbanError> {
    let task = {
        let mut session = state.session.lock().await;
        TaskService::edit_task(
            &mut session.board,
            &id,
            req.title.as_deref(),
            req.description.as_deref(),
        )?
    };

    state.publish(&BoardEvent::TaskUpdated { task: task.clone() });

    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DeleteTaskQuery>,
) -> Result<Json<DeleteTaskResponse>, KanbanError> {
    let removed = {
        let mut session = state.session.lock().await;
        TaskService::delete_task(&mut session.board, &id, query.confirm)?
    };

    let deleted = removed.is_some();
    if deleted {
        state.publish(&BoardEvent::TaskDeleted {
            task_id: id.clone(),
        });
    }

    Ok(Json(DeleteTaskResponse { id, deleted }))
}

pub async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveTaskRequest>,
) -> Result<Json<MoveTaskResponse>, KanbanError> {
    let (moved_to, column_id) = {
        let mut session = state.session.lock().await;
        let moved_to =
            TaskService::move_task(&mut session.board, &id, req.column_id.as_deref())?;
        let column_id = session.board.column_of(&id).unwrap_or_default().to_string();
        (moved_to, column_id)
    };

    if let Some(to_column) = &moved_to {
        state.publish(&BoardEvent::TaskMoved {
            task_id: id.clone(),
            to_column: to_column.clone(),
        });
    }

    Ok(Json(MoveTaskResponse {
        id,
        moved: moved_to.is_some(),
        column_id,
    }))
}
