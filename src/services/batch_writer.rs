//! 일괄 저장 서비스
//!
//! 문제 묶음을 그대로 출력 폴더에 파일 하나로 쓴다. 저장소에 대한 일괄 등록 역할.

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionBatch;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 일괄 저장 서비스
pub struct BatchWriter {
    output_folder: PathBuf,
    format: OutputFormat,
}

impl BatchWriter {
    pub fn new(output_folder: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_folder: output_folder.into(),
            format,
        }
    }

    /// 출력 파일 경로 (`<폴더>/<이름>.<형식>`)
    pub fn target_path(&self, stem: &str) -> PathBuf {
        self.output_folder
            .join(format!("{}.{}", stem, self.format.extension()))
    }

    /// 묶음을 저장하고 쓴 경로를 돌려준다
    ///
    /// # 인자
    /// - `stem`: 확장자 없는 출력 파일 이름 (보통 소스 파일 이름)
    /// - `batch`: 저장할 문제 묶음
    pub async fn write(&self, stem: &str, batch: &QuestionBatch) -> AppResult<PathBuf> {
        let path = self.target_path(stem);
        let content = self.render(&path, batch)?;

        fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| AppError::file_write_failed(self.output_folder.display().to_string(), e))?;
        fs::write(&path, content)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        debug!(
            "저장 완료: {} ({} 문제)",
            path.display(),
            batch.questions.len()
        );
        Ok(path)
    }

    fn render(&self, path: &Path, batch: &QuestionBatch) -> AppResult<String> {
        let display = path.display().to_string();
        let content = match self.format {
            OutputFormat::Toml => {
                toml::to_string_pretty(batch).map_err(|source| FileError::TomlSerializeFailed {
                    path: display,
                    source,
                })?
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(batch).map_err(|source| FileError::JsonFailed {
                    path: display,
                    source,
                })?
            }
        };
        Ok(content)
    }
}
