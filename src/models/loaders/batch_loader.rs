use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionBatch;
use std::path::Path;
use tokio::fs;

/// 저장된 일괄 파일(.toml / .json)을 다시 읽는다
pub async fn load_batch(path: &Path) -> AppResult<QuestionBatch> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let display = path.display().to_string();
    let batch: QuestionBatch = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(&content).map_err(|source| FileError::JsonFailed {
            path: display,
            source,
        })?
    } else {
        toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: display,
            source,
        })?
    };

    Ok(batch)
}
