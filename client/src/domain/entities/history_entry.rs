//! 出入库历史记录实体

use chrono::{DateTime, Local, NaiveDate};
use domain_core::{Entity, Price, Quantity};
use serde::{Deserialize, Serialize};

use crate::domain::enums::MovementType;
use crate::domain::value_objects::{GoodsId, HistoryId};

/// 出入库历史记录
///
/// 创建后不可变，只能删除。goodsId 是弱引用，不校验对应货物是否仍存在
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 记录 ID
    id: HistoryId,
    /// 关联货物 ID（后端原生记录没有该字段）
    goods_id: Option<GoodsId>,
    /// 货物名称快照
    goods_name: String,
    /// 出入库类型
    movement: MovementType,
    /// 数量（解码时已归一为正数）
    quantity: u32,
    /// 位置快照
    location: String,
    /// 单价快照
    price: Option<Price>,
    /// 发生时间（缺失或无法解析时为 None）
    occurred_at: Option<DateTime<Local>>,
}

impl HistoryEntry {
    /// 从各部分构建记录（用于从线上响应解码）
    pub fn from_parts(
        id: HistoryId,
        goods_id: Option<GoodsId>,
        goods_name: String,
        movement: MovementType,
        quantity: u32,
        location: String,
        price: Option<Price>,
        occurred_at: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            id,
            goods_id,
            goods_name,
            movement,
            quantity,
            location,
            price,
            occurred_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &HistoryId {
        &self.id
    }

    pub fn goods_id(&self) -> Option<&GoodsId> {
        self.goods_id.as_ref()
    }

    pub fn goods_name(&self) -> &str {
        &self.goods_name
    }

    pub fn movement(&self) -> MovementType {
        self.movement
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price(&self) -> Option<Price> {
        self.price
    }

    pub fn occurred_at(&self) -> Option<DateTime<Local>> {
        self.occurred_at
    }

    /// 发生日期（本地日历日）
    pub fn occurred_on(&self) -> Option<NaiveDate> {
        self.occurred_at.map(|t| t.date_naive())
    }

    /// 显示用时间，零填充 `HH:MM`；时间缺失时为空字符串
    pub fn time_display(&self) -> String {
        match self.occurred_at {
            Some(t) => t.format("%H:%M").to_string(),
            None => String::new(),
        }
    }
}

impl Entity for HistoryEntry {
    type Id = HistoryId;

    fn id(&self) -> &HistoryId {
        &self.id
    }
}

/// 新增历史记录的写入模型
///
/// 与库存更新成对写入；新建/编辑货物不产生历史记录
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub goods_id: GoodsId,
    pub goods_name: String,
    pub movement: MovementType,
    pub quantity: Quantity,
    pub location: String,
    pub price: Price,
}
