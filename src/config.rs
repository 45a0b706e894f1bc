use serde::Deserialize;

use crate::domain::{ColumnLayout, PRODUCT_BACKLOG};

const DEFAULT_COLUMNS: &str = "product-backlog,sprint-backlog,in-progress,review,done";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub frontend_dir: String,
    pub cors_origin: String,
    pub columns: Vec<String>,
    pub default_column: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(21547),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "../frontend/dist".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:21548,http://127.0.0.1:21548".into()),
            columns: parse_columns(
                &std::env::var("BOARD_COLUMNS").unwrap_or_else(|_| DEFAULT_COLUMNS.into()),
            ),
            default_column: std::env::var("DEFAULT_COLUMN")
                .unwrap_or_else(|_| PRODUCT_BACKLOG.into()),
        })
    }

    pub fn column_layout(&self) -> Result<ColumnLayout, anyhow::Error> {
        ColumnLayout::new(self.columns.clone(), self.default_column.clone())
            .map_err(anyhow::Error::msg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 21547,
            frontend_dir: "../frontend/dist".into(),
            cors_origin: "http://localhost:21548,http://127.0.0.1:21548".into(),
            columns: parse_columns(DEFAULT_COLUMNS),
            default_column: PRODUCT_BACKLOG.into(),
        }
    }
}

fn parse_columns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
