pub mod batch_processor;
pub mod source_processor;

pub use batch_processor::{process_all_sources, ProcessingStats};
pub use source_processor::{process_source, SourceOutcome};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::load_all_sources;
use crate::utils::logging::{self, Border};

/// 애플리케이션 본체
pub struct App {
    config: Config,
}

impl App {
    /// 로그 파일을 준비하고 시작 정보를 남긴다
    pub fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)?;
        logging::section(
            Border::Heavy,
            "🚀 문제 일괄 등록 시작",
            &[
                format!("📁 입력 폴더: {}", config.input_folder),
                format!("📊 최대 동시 처리 수: {}", config.max_concurrent_sources),
            ],
        );
        Ok(Self { config })
    }

    /// 입력 폴더의 모든 소스를 처리하고 통계를 돌려준다
    pub async fn run(&self) -> Result<ProcessingStats> {
        info!("\n📁 입력 폴더를 살펴보는 중...");
        let sources = load_all_sources(&self.config.input_folder).await?;

        if sources.is_empty() {
            warn!("⚠️ 처리할 텍스트 파일이 없습니다. 종료합니다");
            return Ok(ProcessingStats::default());
        }

        info!(
            "✓ 처리할 텍스트 파일 {} 개, {} 개씩 나누어 처리합니다",
            sources.len(),
            self.config.max_concurrent_sources
        );

        let stats = process_all_sources(sources, &self.config).await?;

        logging::report_final(&stats.summary_lines(), &self.config.output_log_file)?;

        Ok(stats)
    }
}
