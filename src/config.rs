use crate::error::ConfigError;
use std::str::FromStr;

/// 일괄 저장 파일 형식
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Toml => "toml",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// 프로그램 설정
#[derive(Clone, Debug)]
pub struct Config {
    /// 동시에 처리할 소스 파일 수
    pub max_concurrent_sources: usize,
    /// 추출된 텍스트(.txt)가 있는 폴더
    pub input_folder: String,
    /// 일괄 저장 파일을 쓸 폴더
    pub output_folder: String,
    pub output_format: OutputFormat,
    /// 입력된 과목명 (비어 있으면 본문에서 추정)
    pub default_subject: String,
    /// 입력된 회차 (비어 있으면 본문에서 추정)
    pub default_workbook_title: String,
    /// 상세 로그 출력 여부
    pub verbose_logging: bool,
    /// 실행 로그 파일
    pub output_log_file: String,
    /// 결과 없는 소스를 기록할 파일
    pub warn_file: String,
    /// 처리가 끝난 소스 파일 삭제 여부
    pub remove_processed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_sources: 4,
            input_folder: "input_text".to_string(),
            output_folder: "output_toml".to_string(),
            output_format: OutputFormat::Toml,
            default_subject: String::new(),
            default_workbook_title: String::new(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
            remove_processed: false,
        }
    }
}

impl Config {
    /// 환경 변수에서 설정을 읽는다. 값이 없거나 해석할 수 없으면 기본값.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_sources: env_parse("MAX_CONCURRENT_SOURCES")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(default.max_concurrent_sources),
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            output_format: env_parse("OUTPUT_FORMAT").unwrap_or(default.output_format),
            default_subject: std::env::var("DEFAULT_SUBJECT").unwrap_or(default.default_subject),
            default_workbook_title: std::env::var("DEFAULT_WORKBOOK_TITLE")
                .unwrap_or(default.default_workbook_title),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            remove_processed: env_parse("REMOVE_PROCESSED").unwrap_or(default.remove_processed),
        }
    }
}

fn env_parse<T: FromStr>(var_name: &str) -> Option<T> {
    let value = std::env::var(var_name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(
                "{}",
                ConfigError::EnvVarParseFailed {
                    var_name: var_name.to_string(),
                    value,
                    expected_type: std::any::type_name::<T>().to_string(),
                }
            );
            None
        }
    }
}
