//! 单价值对象

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 单价错误
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("单价不能为空")]
    Empty,
    #[error("单价格式无效: {0}")]
    Invalid(String),
    #[error("单价不能为负数")]
    Negative,
}

/// 单价值对象
///
/// 以分为单位存储，避免浮点累积误差；线上接口按元（浮点数）交换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price(i64);

impl Price {
    pub fn zero() -> Self {
        Self(0)
    }

    /// 从分创建
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        if cents < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(cents))
    }

    /// 从元（浮点数）创建，用于解码服务端响应
    pub fn from_decimal(yuan: f64) -> Result<Self, PriceError> {
        if !yuan.is_finite() {
            return Err(PriceError::Invalid(yuan.to_string()));
        }
        Self::from_cents((yuan * 100.0).round() as i64)
    }

    /// 从用户输入字符串解析
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let yuan: f64 = trimmed
            .parse()
            .map_err(|_| PriceError::Invalid(trimmed.to_string()))?;
        Self::from_decimal(yuan)
    }

    /// 转换为元（浮点数），用于编码请求体
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "¥{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
