use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::api::handlers::sse::BoardEvent;
use crate::api::AppState;
use crate::domain::{BoardDocument, KanbanError};
use crate::services::{BoardSerializer, ImportReport, EXPORT_FILE_NAME};

pub async fn get_board(State(state): State<AppState>) -> Json<BoardDocument> {
    let session = state.session.lock().await;
    Json(BoardSerializer::export(&session.board))
}

pub async fn export_board(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, KanbanError> {
    let body = {
        let session = state.session.lock().await;
        BoardSerializer::export_json(&session.board)?
    };

    tracing::info!(bytes = body.len(), "Board exported");

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/json; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}

pub async fn import_board(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportReport>, KanbanError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| KanbanError::BadRequest(format!("Failed to read multipart field: {}", e)))?
        .ok_or_else(|| KanbanError::BadRequest("No file uploaded".into()))?;

    let filename = field.file_name().map(str::to_owned);
    let data = field
        .bytes()
        .await
        .map_err(|e| KanbanError::BadRequest(format!("Failed to read file data: {}", e)))?;

    let text = String::from_utf8(data.to_vec()).map_err(|e| {
        tracing::error!(error = %e, "Error parsing JSON: upload is not UTF-8");
        KanbanError::InvalidImport(e.to_string())
    })?;

    tracing::debug!(filename = ?filename, bytes = text.len(), "Importing board");

    let report = {
        let mut session = state.session.lock().await;
        let now = chrono::Utc::now().timestamp_millis();
        let report = BoardSerializer::import(&mut session.board, &text, now)?;
        session.drag.end();
        report
    };

    state.publish(&BoardEvent::BoardImported {
        imported: report.imported,
        dropped: report.dropped,
        skipped: report.skipped,
    });

    Ok(Json(report))
}
