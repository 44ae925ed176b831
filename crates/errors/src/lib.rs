//! errors - 统一错误处理
//!
//! 客户端错误分类：本地校验 / 传输 / 服务端状态 / 两段写不一致

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 网络层失败（连接拒绝、超时等），请求未必到达服务端
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端返回非 2xx 状态码
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    /// 本地存储（搜索历史槽位）读写失败
    #[error("Storage error: {0}")]
    Storage(String),

    /// 两段写不一致：库存已更新但历史记录写入失败
    #[error("Partial write: {0}")]
    PartialWrite(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn partial_write(msg: impl Into<String>) -> Self {
        Self::PartialWrite(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 从 HTTP 状态码和响应体构造错误
    ///
    /// 服务端约定：失败响应体为 `{"error": "..."}`
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    "请求失败".to_string()
                } else {
                    body.to_string()
                }
            });

        match status {
            404 => Self::NotFound(message),
            400 => Self::Validation(message),
            _ => Self::Server { status, message },
        }
    }

    /// 是否值得重试
    ///
    /// 只有传输错误和服务端 5xx 视为瞬时故障；校验类错误重试无意义
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// 是否为本地（提交前）校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// 服务端失败响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_parses_error_body() {
        let err = AppError::from_status(404, r#"{"error": "货物不存在"}"#);
        assert!(matches!(err, AppError::NotFound(ref m) if m == "货物不存在"));
    }

    #[test]
    fn test_from_status_falls_back_to_raw_body() {
        let err = AppError::from_status(500, "boom");
        assert!(matches!(err, AppError::Server { status: 500, ref message } if message == "boom"));
    }

    #[test]
    fn test_from_status_empty_body() {
        let err = AppError::from_status(502, "");
        assert!(matches!(err, AppError::Server { status: 502, ref message } if message == "请求失败"));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(AppError::transport("connection refused").is_retryable());
        assert!(AppError::server(503, "busy").is_retryable());
        assert!(!AppError::server(404, "missing").is_retryable());
        assert!(!AppError::validation("空关键词").is_retryable());
    }
}
