use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Board, BoardDocument, KanbanError, Task};

pub const EXPORT_FILE_NAME: &str = "board.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Tasks placed on the board.
    pub imported: usize,
    /// Tasks whose column id did not match any column.
    pub dropped: usize,
    /// Column or task entries that could not be read at all.
    pub skipped: usize,
}

pub struct BoardSerializer;

impl BoardSerializer {
    // ── Export ─────────────────────────────────────────────────

    pub fn export(board: &Board) -> BoardDocument {
        board.to_document()
    }

    /// Pretty-printed (2-space) JSON for `board.json`.
    pub fn export_json(board: &Board) -> Result<String, KanbanError> {
        let document = Self::export(board);
        Ok(serde_json::to_string_pretty(&document)?)
    }

    // ── Import ─────────────────────────────────────────────────

    /// Parses `text` into a board object without touching any board.
    pub fn parse(text: &str) -> Result<Map<String, Value>, KanbanError> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            tracing::error!(error = %e, "Error parsing JSON");
            KanbanError::InvalidImport(e.to_string())
        })?;

        match value {
            Value::Object(map) => Ok(map),
            other => {
                tracing::error!(
                    found = json_kind(&other),
                    "Error parsing JSON: board document must be an object"
                );
                Err(KanbanError::InvalidImport(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        }
    }

    /// Replaces every task on `board` with the tasks described by `text`.
    ///
    /// Nothing is mutated unless `text` parses. Once it does, the board is
    /// cleared unconditionally and the document is read leniently: unknown
    /// column ids drop their tasks, unreadable entries are skipped, missing
    /// text fields become empty.
    pub fn import(
        board: &mut Board,
        text: &str,
        now_millis: i64,
    ) -> Result<ImportReport, KanbanError> {
        let document = Self::parse(text)?;
        board.clear_tasks();
        let report = Self::load(board, &document, now_millis);

        tracing::info!(
            imported = report.imported,
            dropped = report.dropped,
            skipped = report.skipped,
            "Board imported"
        );

        Ok(report)
    }

    fn load(board: &mut Board, document: &Map<String, Value>, now_millis: i64) -> ImportReport {
        let mut report = ImportReport::default();

        let Some(columns) = document.get("columns").and_then(Value::as_array) else {
            tracing::warn!("Imported document has no columns array, board left empty");
            return report;
        };

        for column_entry in columns {
            let Some(column_id) = column_entry.get("id").and_then(Value::as_str) else {
                report.skipped += 1;
                continue;
            };
            let Some(tasks) = column_entry.get("tasks").and_then(Value::as_array) else {
                report.skipped += 1;
                continue;
            };

            for task_entry in tasks {
                let Some(fields) = task_entry.as_object() else {
                    report.skipped += 1;
                    continue;
                };

                let id = scalar_text(fields.get("id"))
                    .unwrap_or_else(|| board.next_task_id(now_millis));
                let task = Task::new(
                    id,
                    scalar_text(fields.get("title")).unwrap_or_default(),
                    scalar_text(fields.get("description")).unwrap_or_default(),
                );

                match board.append_task(column_id, task) {
                    Ok(()) => report.imported += 1,
                    Err(task) => {
                        tracing::debug!(
                            task_id = task.id.as_str(),
                            column_id,
                            "Dropping imported task for unknown column"
                        );
                        report.dropped += 1;
                    }
                }
            }
        }

        report
    }
}

/// Text for a scalar JSON value; `None` for null, arrays and objects.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
