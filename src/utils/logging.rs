//! 실행 로그 도우미
//!
//! 실행 로그 파일(`Config::output_log_file`)은 시작할 때 머리말을 쓰고, 끝날 때
//! 처리 결과를 덧붙인다. 콘솔 출력은 `section` 하나로 테두리를 맞춘다.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tracing::info;

const BORDER_WIDTH: usize = 60;

/// 구분선 모양
#[derive(Debug, Clone, Copy)]
pub enum Border {
    Heavy,
    Light,
}

impl Border {
    fn line(self) -> String {
        match self {
            Border::Heavy => "=".repeat(BORDER_WIDTH),
            Border::Light => "─".repeat(BORDER_WIDTH),
        }
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 실행 로그 파일을 새로 만들고 머리말을 쓴다
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let border = Border::Heavy.line();
    let header = format!("{border}\n문제 일괄 등록 로그 - {}\n{border}\n\n", timestamp());
    fs::write(log_file_path, header)
        .with_context(|| format!("로그 파일을 만들 수 없습니다: {}", log_file_path))
}

/// 실행 로그 파일 끝에 줄들을 덧붙인다
pub fn append_log_lines(log_file_path: &str, lines: &[String]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("로그 파일을 열 수 없습니다: {}", log_file_path))?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// 제목과 본문 줄을 구분선으로 감싸 출력한다
///
/// # 인자
/// - `border`: 구분선 모양
/// - `title`: 첫 줄
/// - `lines`: 제목 아래 줄들 (비어 있으면 제목만)
pub fn section(border: Border, title: &str, lines: &[String]) {
    let border = border.line();
    info!("{}", border);
    info!("{}", title);
    for line in lines {
        info!("{}", line);
    }
    info!("{}", border);
}

/// 처리 결과 블록. 콘솔에 출력하고 같은 내용을 로그 파일에도 남긴다.
pub fn report_final(summary: &[String], log_file_path: &str) -> Result<()> {
    let title = format!("📊 전체 처리 결과 ({})", timestamp());
    section(Border::Heavy, &title, summary);

    let mut lines = Vec::with_capacity(summary.len() + 1);
    lines.push(title);
    lines.extend(summary.iter().cloned());
    append_log_lines(log_file_path, &lines)?;

    info!("로그 파일: {}", log_file_path);
    Ok(())
}

/// 긴 문장을 로그용으로 자른다 (글자 수 기준)
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
