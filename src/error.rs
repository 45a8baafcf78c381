use std::path::PathBuf;

use thiserror::Error;

mod code;
mod formatter;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;

/// リモート取得失敗の原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCause {
    /// 非 2xx ステータス
    Status(u16),
    /// タイムアウト
    Timeout,
    /// 接続失敗など
    Transport(String),
}

impl std::fmt::Display for FetchCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchCause::Status(status) => write!(f, "HTTP status {}", status),
            FetchCause::Timeout => write!(f, "request timed out"),
            FetchCause::Transport(message) => write!(f, "{}", message),
        }
    }
}

/// kitctl統一エラー型
#[derive(Debug, Error)]
pub enum KitError {
    #[error("Registry unavailable at {location}: {reason}")]
    RegistryUnavailable { location: String, reason: String },

    #[error("Component not found: {name}")]
    ComponentNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("Failed to fetch {url}: {cause}")]
    FetchFailed { url: String, cause: FetchCause },

    #[error("Source file not found: {}", .0.display())]
    SourceFileNotFound(PathBuf),

    #[error("Refusing to write outside the project: {0}")]
    UnsafeTarget(String),

    #[error("Invalid project config: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Install incomplete: {}", incomplete_detail(.not_found, .failed))]
    InstallIncomplete { not_found: usize, failed: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KitError>;

fn incomplete_detail(not_found: &usize, failed: &usize) -> String {
    let mut parts = Vec::new();
    if *not_found > 0 {
        parts.push(format!("{} component(s) not found", not_found));
    }
    if *failed > 0 {
        parts.push(format!("{} file(s) failed", failed));
    }
    parts.join(", ")
}

impl KitError {
    /// 取得失敗（ステータスコード付き）
    pub fn fetch_status(url: impl Into<String>, status: u16) -> Self {
        KitError::FetchFailed {
            url: url.into(),
            cause: FetchCause::Status(status),
        }
    }

    /// reqwest のエラーを FetchFailed に変換
    pub fn from_transport(url: impl Into<String>, err: &reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            FetchCause::Timeout
        } else if let Some(status) = err.status() {
            FetchCause::Status(status.as_u16())
        } else {
            FetchCause::Transport(err.to_string())
        };
        KitError::FetchFailed {
            url: url.into(),
            cause,
        }
    }

    /// FetchFailed の場合のステータスコード
    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            KitError::FetchFailed {
                cause: FetchCause::Status(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            KitError::FetchFailed { cause, .. } => match cause {
                FetchCause::Status(status) => *status == 429 || (500..600).contains(status),
                FetchCause::Timeout | FetchCause::Transport(_) => true,
            },
            _ => false,
        }
    }

    /// エラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            KitError::RegistryUnavailable { .. } => ErrorCode::Reg001,
            KitError::ComponentNotFound { .. } => ErrorCode::Cmp001,
            KitError::FetchFailed { cause, .. } => match cause {
                FetchCause::Transport(_) => ErrorCode::Net001,
                FetchCause::Timeout => ErrorCode::Net002,
                FetchCause::Status(_) => ErrorCode::Net003,
            },
            KitError::SourceFileNotFound(_) => ErrorCode::Io001,
            KitError::Io(_) => ErrorCode::Io002,
            KitError::Config(_) => ErrorCode::Cfg001,
            KitError::Json(_) => ErrorCode::Cfg002,
            KitError::InvalidArgument(_) => ErrorCode::Val001,
            KitError::UnsafeTarget(_) => ErrorCode::Val002,
            KitError::InstallIncomplete { .. } => ErrorCode::Ins001,
        }
    }
}
