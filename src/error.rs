use thiserror::Error;

/// 애플리케이션 오류 타입
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 관련 오류
    #[error("파일 오류: {0}")]
    File(#[from] FileError),
    /// 업무 로직 오류
    #[error("업무 오류: {0}")]
    Business(#[from] BusinessError),
    /// 설정 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
}

/// 파일 관련 오류
#[derive(Debug, Error)]
pub enum FileError {
    /// 파일 없음
    #[error("파일이 없습니다: {path}")]
    NotFound { path: String },
    /// 읽기 실패
    #[error("파일 읽기 실패 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 삭제 실패
    #[error("파일 삭제 실패 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 직렬화 실패
    #[error("TOML 저장 실패 ({path}): {source}")]
    TomlSerializeFailed {
        path: String,
        #[source]
        source: toml::ser::Error,
    },
    /// TOML 파싱 실패
    #[error("TOML 파싱 실패 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// JSON 처리 실패
    #[error("JSON 처리 실패 ({path}): {source}")]
    JsonFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 폴더 없음
    #[error("폴더가 없습니다: {path}")]
    DirectoryNotFound { path: String },
}

/// 업무 로직 오류
#[derive(Debug, Error)]
pub enum BusinessError {
    /// 파싱 결과가 없음
    #[error("파싱된 문제가 없습니다: {source_name}")]
    EmptyResult { source_name: String },
    /// 인덱스 범위 초과
    #[error("인덱스 {index} 가 범위 [0, {len}) 를 벗어났습니다")]
    IndexOutOfRange { index: usize, len: usize },
    /// 보기 칸 번호 오류
    #[error("보기 번호 {slot} 는 0~3 이어야 합니다")]
    InvalidChoiceSlot { slot: usize },
    /// 정답 값 오류
    #[error("정답 {answer} 는 0~4 이어야 합니다")]
    InvalidAnswer { answer: u8 },
}

/// 설정 오류
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 환경 변수 해석 실패
    #[error("환경 변수 {var_name} 해석 실패: '{value}' 를 {expected_type} 로 바꿀 수 없습니다")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 알 수 없는 출력 형식
    #[error("알 수 없는 출력 형식: {value} (toml 또는 json)")]
    UnknownOutputFormat { value: String },
}

// ========== 편의 생성자 ==========

impl AppError {
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        AppError::Business(BusinessError::IndexOutOfRange { index, len })
    }
}

/// 애플리케이션 결과 타입
pub type AppResult<T> = Result<T, AppError>;
