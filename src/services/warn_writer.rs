//! 경고 기록 서비스
//!
//! 문제가 하나도 나오지 않은 소스를 경고 파일(`Config::warn_file`)에 남긴다

use crate::error::{AppError, AppResult};
use std::io::Write;
use tracing::debug;

/// 경고 기록 서비스
///
/// - 소스 하나당 한 줄: `소스 | 사유`
/// - 파일이 없으면 만들고, 있으면 뒤에 덧붙인다
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 경고 파일 경로로 만든다
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 경고 한 줄을 쓴다
    ///
    /// # 인자
    /// - `source`: 소스 파일 이름
    /// - `reason`: 사유
    pub fn write(&self, source: &str, reason: &str) -> AppResult<()> {
        debug!("경고 기록: {} | {}", source, reason);

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        writeln!(file, "{} | {}", source, reason)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        Ok(())
    }
}
