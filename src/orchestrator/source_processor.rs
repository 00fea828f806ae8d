//! 소스 하나 처리기
//!
//! 텍스트 파일 하나를 읽어서 메타데이터 추정 → 파싱 → 저장(또는 경고)까지 진행한다

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, BusinessError, FileError};
use crate::models::question::QuestionBatch;
use crate::models::SourceText;
use crate::parser::{self, ParseSummary};
use crate::services::{BatchWriter, PreviewList, WarnWriter};
use crate::utils::logging::truncate_text;

/// 소스 하나의 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// 문제 n개를 저장함
    Parsed(usize),
    /// 문제가 하나도 나오지 않음
    Empty,
}

/// 소스 파일 하나를 처리한다
///
/// # 인자
/// - `source`: 읽어 둔 원문
/// - `source_index`: 소스 번호 (로그용, 1부터)
/// - `config`: 설정 (과목/회차 입력값을 여기서 복사해 쓴다)
pub async fn process_source(
    source: SourceText,
    source_index: usize,
    config: &Config,
) -> Result<SourceOutcome> {
    info!("[소스 {}] 시작: {}", source_index, source.name);

    let hint = parser::extract_metadata(&source.text);
    if config.verbose_logging && !hint.is_empty() {
        info!(
            "[소스 {}] 추정 회차: {:?}, 추정 과목: {:?}",
            source_index, hint.workbook_title, hint.subject
        );
    }
    let (subject, workbook_title) =
        hint.resolve(&config.default_subject, &config.default_workbook_title);

    let records = parser::parse_text(&source.text, &subject, &workbook_title);
    let preview = PreviewList::new(records);

    if preview.is_empty() {
        let reason = BusinessError::EmptyResult {
            source_name: source.name.clone(),
        };
        warn!("[소스 {}] ⚠️ {}", source_index, reason);
        WarnWriter::new(&config.warn_file).write(&source.name, &reason.to_string())?;
        // 결과가 없는 소스는 다시 손볼 수 있도록 남겨 둔다
        return Ok(SourceOutcome::Empty);
    }

    let summary = ParseSummary::of(preview.records());
    log_summary(source_index, &summary);
    if config.verbose_logging {
        for (i, record) in preview.records().iter().enumerate() {
            info!(
                "[소스 {}]   {}. [{}] {}",
                source_index,
                i + 1,
                record.subject,
                truncate_text(&record.question_text, 40)
            );
        }
    }

    let batch = QuestionBatch::new(
        source.name.clone(),
        workbook_title,
        subject,
        preview.into_records(),
    );
    let writer = BatchWriter::new(&config.output_folder, config.output_format);
    let path = writer
        .write(&source.stem(), &batch)
        .await
        .with_context(|| format!("저장 실패: {}", source.name))?;
    info!("[소스 {}] ✓ 저장: {}", source_index, path.display());

    cleanup_source(&source.path, source_index, config.remove_processed).await?;

    Ok(SourceOutcome::Parsed(summary.questions))
}

/// 처리가 끝난 소스 파일을 지운다 (설정된 경우만)
async fn cleanup_source(path: &Path, source_index: usize, remove: bool) -> Result<()> {
    if !remove {
        return Ok(());
    }

    if path.exists() {
        tokio::fs::remove_file(path).await.map_err(|source| {
            AppError::File(FileError::DeleteFailed {
                path: path.display().to_string(),
                source,
            })
        })?;
        info!("[소스 {}] 🗑️ 소스 삭제: {}", source_index, path.display());
    } else {
        warn!("[소스 {}] ⚠️ 소스 파일이 없습니다: {}", source_index, path.display());
    }

    Ok(())
}

fn log_summary(source_index: usize, summary: &ParseSummary) {
    info!("[소스 {}] 파싱된 문제: {}", source_index, summary.questions);
    if summary.missing_answer > 0 {
        warn!(
            "[소스 {}] 정답 없는 문제: {}",
            source_index, summary.missing_answer
        );
    }
    if summary.incomplete_choices > 0 {
        warn!(
            "[소스 {}] 보기가 4개 미만인 문제: {}",
            source_index, summary.incomplete_choices
        );
    }
}
