//! 强类型 ID 定义
//!
//! ID 由服务端分配，对客户端是不透明字符串（线上字段名 `_id`）

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 货物 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct GoodsId(pub String);

impl GoodsId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GoodsId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 历史记录 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct HistoryId(pub String);

impl HistoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HistoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
