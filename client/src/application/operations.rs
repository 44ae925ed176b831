//! 操作表单控制器
//!
//! 出入库是两段有序写入：先改库存，再追加历史记录。
//! 历史追加对瞬时故障做有限重试；重试耗尽时库存已改而历史缺失，
//! 以错误日志留痕供对账，不做回滚补偿

use std::sync::Arc;

use common::{with_conditional_retry, RetryConfig};
use errors::{AppError, AppResult};
use tracing::{error, info};

use crate::application::commands::{DepositCommand, UpsertGoodsCommand, WithdrawCommand};
use crate::domain::entities::{GoodsPatch, NewHistoryEntry};
use crate::domain::enums::MovementType;
use crate::domain::repositories::{GoodsStore, HistoryStore};

/// 操作表单控制器
pub struct OperationHandler {
    goods: Arc<dyn GoodsStore>,
    history: Arc<dyn HistoryStore>,
    retry: RetryConfig,
}

impl OperationHandler {
    pub fn new(goods: Arc<dyn GoodsStore>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            goods,
            history,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// 取出：库存减 quantity，随后追加一条出库记录
    pub async fn withdraw(&self, cmd: WithdrawCommand) -> AppResult<()> {
        let quantity = cmd.validate()?;
        let new_stock = cmd
            .goods
            .stock_after_out(quantity.get())
            .ok_or_else(|| AppError::validation("库存不足"))?;

        self.apply_movement(&cmd.goods, MovementType::Out, quantity.get(), new_stock)
            .await
    }

    /// 放入：库存加 quantity，随后追加一条入库记录
    pub async fn deposit(&self, cmd: DepositCommand) -> AppResult<()> {
        let quantity = cmd.validate()?;
        let new_stock = cmd.goods.stock_after_in(quantity.get());

        self.apply_movement(&cmd.goods, MovementType::In, quantity.get(), new_stock)
            .await
    }

    /// 新建或编辑货物；不产生配对的历史记录
    pub async fn upsert_goods(&self, cmd: UpsertGoodsCommand) -> AppResult<()> {
        let draft = cmd.validate()?;

        match &cmd.target {
            Some(id) => {
                info!(goods_id = %id, name = %draft.name, "Updating goods");
                self.goods
                    .update_goods(id, &GoodsPatch::from_draft(&draft))
                    .await
            }
            None => {
                info!(name = %draft.name, "Creating goods");
                self.goods.add_goods(&draft).await
            }
        }
    }

    /// 两段写入：库存更新成功后追加历史记录
    async fn apply_movement(
        &self,
        goods: &crate::domain::entities::Goods,
        movement: MovementType,
        quantity: u32,
        new_stock: u32,
    ) -> AppResult<()> {
        info!(
            goods_id = %goods.id(),
            movement = %movement.as_wire_str(),
            quantity,
            new_stock,
            "Applying stock movement"
        );

        self.goods
            .update_goods(goods.id(), &GoodsPatch::stock_only(new_stock))
            .await?;

        let entry = NewHistoryEntry {
            goods_id: goods.id().clone(),
            goods_name: goods.name().to_string(),
            movement,
            quantity: domain_core::Quantity::new(quantity)
                .map_err(|e| AppError::internal(e.to_string()))?,
            location: goods.location().to_string(),
            price: goods.price(),
        };

        let append = with_conditional_retry(
            &self.retry,
            "add_history",
            || self.history.add_history(&entry),
            AppError::is_retryable,
        )
        .await;

        if let Err(e) = append {
            // 库存已更新但历史追加失败：留痕供人工对账
            error!(
                goods_id = %goods.id(),
                movement = %movement.as_wire_str(),
                quantity,
                new_stock,
                error = %e,
                "Stock updated but history append failed; reconciliation required"
            );
            return Err(AppError::partial_write(format!(
                "库存已更新为 {} 但历史记录写入失败: {}",
                new_stock, e
            )));
        }

        Ok(())
    }
}
