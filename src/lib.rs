//! # Bulk Import
//!
//! 자격증 기출 문제 일괄 등록 도구
//!
//! ## 구조
//!
//! ### ① 파서（Parser）
//! - `parser/` - 태그가 붙은 텍스트를 문제 목록으로 바꾸는 핵심
//! - `normalize` - 줄 정리, `rules` - 줄 분류, `metadata` - 회차/과목 추정
//!
//! ### ② 모델（Models）
//! - `QuestionRecord` - 문제 한 건, `QuestionBatch` - 일괄 저장 단위
//! - `loaders/` - 원문 텍스트와 저장된 묶음 읽기
//!
//! ### ③ 서비스（Services）
//! - `PreviewList` - 저장 전 편집
//! - `BatchWriter` - 일괄 저장, `WarnWriter` - 결과 없는 소스 기록
//!
//! ### ④ 오케스트레이션（Orchestration）
//! - `orchestrator/batch_processor` - 소스 여러 개를 배치로 동시 처리
//! - `orchestrator/source_processor` - 소스 하나 처리
//!
//! ## 모듈

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 자주 쓰는 타입 재수출
pub use config::{Config, OutputFormat};
pub use error::{AppError, AppResult};
pub use models::{Choices, QuestionBatch, QuestionRecord};
pub use orchestrator::{process_source, App, ProcessingStats, SourceOutcome};
pub use parser::{extract_metadata, parse_text, MetadataHint, ParseSummary};
pub use services::PreviewList;
