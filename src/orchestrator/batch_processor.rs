//! 여러 소스를 배치 단위로 동시에 처리한다

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::error;

use crate::config::Config;
use crate::models::SourceText;
use crate::orchestrator::source_processor::{process_source, SourceOutcome};
use crate::utils::logging::{section, Border};

/// 전체 처리 통계
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub parsed: usize,
    pub empty: usize,
    pub failed: usize,
    pub questions: usize,
}

impl ProcessingStats {
    pub fn total(&self) -> usize {
        self.parsed + self.empty + self.failed
    }

    /// 최종 보고용 줄 목록
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("✅ 파싱 성공: {}/{}", self.parsed, self.total()),
            format!("⚠️ 결과 없음: {}", self.empty),
            format!("❌ 실패: {}", self.failed),
            format!("📝 저장한 문제: {}", self.questions),
        ]
    }

    fn absorb(&mut self, other: ProcessingStats) {
        self.parsed += other.parsed;
        self.empty += other.empty;
        self.failed += other.failed;
        self.questions += other.questions;
    }
}

/// 모든 소스를 `max_concurrent_sources` 개씩 나누어 처리한다
pub async fn process_all_sources(
    sources: Vec<SourceText>,
    config: &Config,
) -> Result<ProcessingStats> {
    let batch_size = config.max_concurrent_sources.max(1);
    let semaphore = Arc::new(Semaphore::new(batch_size));
    let total = sources.len();
    let total_batches = total.div_ceil(batch_size);
    let mut stats = ProcessingStats::default();

    let mut remaining = sources.into_iter();
    for batch_num in 1..=total_batches {
        let batch: Vec<SourceText> = remaining.by_ref().take(batch_size).collect();
        let batch_start = (batch_num - 1) * batch_size;
        let batch_len = batch.len();

        section(
            Border::Heavy,
            &format!("📦 {}/{} 번째 배치 시작", batch_num, total_batches),
            &[format!(
                "📄 소스: {}-{} / 전체 {}",
                batch_start + 1,
                batch_start + batch_len,
                total
            )],
        );

        let batch_stats = process_batch(batch, batch_start, semaphore.clone(), config).await?;
        section(
            Border::Light,
            &format!(
                "✓ {} 번째 배치 완료: 파싱 성공 {}/{}",
                batch_num, batch_stats.parsed, batch_len
            ),
            &[],
        );
        stats.absorb(batch_stats);
    }

    Ok(stats)
}

/// 배치 하나를 동시에 처리한다
async fn process_batch(
    batch: Vec<SourceText>,
    batch_start: usize,
    semaphore: Arc<Semaphore>,
    config: &Config,
) -> Result<ProcessingStats> {
    let mut handles = Vec::with_capacity(batch.len());

    for (idx, source) in batch.into_iter().enumerate() {
        let source_index = batch_start + idx + 1;
        let permit = semaphore.clone().acquire_owned().await?;
        // 각 작업이 과목/회차 입력값을 따로 가진다
        let config = config.clone();

        let handle = tokio::spawn(async move {
            let _permit = permit;
            process_source(source, source_index, &config).await
        });
        handles.push((source_index, handle));
    }

    let mut stats = ProcessingStats::default();
    let results = futures::future::join_all(
        handles
            .into_iter()
            .map(|(source_index, handle)| async move { (source_index, handle.await) }),
    )
    .await;

    for (source_index, result) in results {
        match result {
            Ok(Ok(SourceOutcome::Parsed(count))) => {
                stats.parsed += 1;
                stats.questions += count;
            }
            Ok(Ok(SourceOutcome::Empty)) => stats.empty += 1,
            Ok(Err(e)) => {
                error!("[소스 {}] ❌ 처리 중 오류: {:#}", source_index, e);
                stats.failed += 1;
            }
            Err(e) => {
                error!("[소스 {}] 작업 실행 실패: {}", source_index, e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}
