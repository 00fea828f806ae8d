use crate::error::{AppError, FileError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// OCR/PDF 추출이 끝난 원문 하나
#[derive(Debug, Clone)]
pub struct SourceText {
    /// 파일 이름 (로그와 출력 파일명에 사용)
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

impl SourceText {
    /// 확장자를 뗀 파일 이름
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// 텍스트 파일 하나를 읽는다
pub async fn load_source(path: &Path) -> Result<SourceText> {
    if !path.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: path.display().to_string(),
        })
        .into());
    }

    let text = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    Ok(SourceText {
        name: path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
        path: path.to_path_buf(),
        text,
    })
}

/// 폴더 안의 모든 .txt 파일을 이름 순으로 읽는다
///
/// 읽을 수 없는 파일은 경고만 남기고 건너뛴다.
pub async fn load_all_sources(folder_path: &str) -> Result<Vec<SourceText>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("폴더를 읽을 수 없습니다: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "불러오는 중: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_source(&path).await {
            Ok(source) => {
                tracing::info!("{} 글자 읽음", source.text.chars().count());
                sources.push(source);
            }
            Err(e) => {
                tracing::warn!("파일을 읽지 못했습니다 {}: {}", path.display(), e);
            }
        }
    }

    Ok(sources)
}
