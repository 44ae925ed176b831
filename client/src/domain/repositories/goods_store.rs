//! 货物仓储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::{Goods, GoodsDraft, GoodsPatch};
use crate::domain::value_objects::GoodsId;

/// 货物仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GoodsStore: Send + Sync {
    /// 获取所有货物
    async fn list_goods(&self) -> AppResult<Vec<Goods>>;

    /// 新建货物
    async fn add_goods(&self, draft: &GoodsDraft) -> AppResult<()>;

    /// 更新货物（部分字段）
    async fn update_goods(&self, id: &GoodsId, patch: &GoodsPatch) -> AppResult<()>;

    /// 删除货物
    async fn delete_goods(&self, id: &GoodsId) -> AppResult<()>;

    /// 按关键词搜索货物（服务端按名称匹配）
    async fn search_goods(&self, keyword: &str) -> AppResult<Vec<Goods>>;
}
