//! 搜索词日志存储接口
//!
//! 单个本地命名槽位，与服务端状态完全独立

use async_trait::async_trait;
use errors::AppResult;

/// 搜索词日志存储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TermLogStore: Send + Sync {
    /// 读取搜索词列表；槽位不存在视为空列表
    async fn load(&self) -> AppResult<Vec<String>>;

    /// 覆盖写入搜索词列表
    async fn save(&self, terms: &[String]) -> AppResult<()>;

    /// 删除槽位
    async fn clear(&self) -> AppResult<()>;
}
