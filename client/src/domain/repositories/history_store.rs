//! 历史记录仓储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::{HistoryEntry, NewHistoryEntry};
use crate::domain::value_objects::HistoryId;

/// 历史记录仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 获取所有历史记录
    async fn list_history(&self) -> AppResult<Vec<HistoryEntry>>;

    /// 追加历史记录
    async fn add_history(&self, entry: &NewHistoryEntry) -> AppResult<()>;

    /// 删除单条历史记录
    async fn delete_history(&self, id: &HistoryId) -> AppResult<()>;

    /// 清空所有历史记录
    async fn clear_history(&self) -> AppResult<()>;
}
