//! 货物实体

use chrono::{DateTime, Local};
use domain_core::{Entity, Price};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GoodsId;

/// 低库存阈值：库存在 (0, 10] 区间视为低库存
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// 货物实体
///
/// 库存不变量: stock >= 0 恒成立，违反该不变量的写入在提交前被客户端拒绝
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goods {
    /// 货物 ID（服务端分配）
    id: GoodsId,
    /// 名称
    name: String,
    /// 存放位置
    location: String,
    /// 单价
    price: Price,
    /// 当前库存
    stock: u32,
    /// 描述
    description: String,
    /// 创建时间
    created_at: Option<DateTime<Local>>,
}

impl Goods {
    /// 从各部分构建货物（用于从线上响应解码）
    pub fn from_parts(
        id: GoodsId,
        name: String,
        location: String,
        price: Price,
        stock: u32,
        description: String,
        created_at: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            id,
            name,
            location,
            price,
            stock,
            description,
            created_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &GoodsId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> Option<DateTime<Local>> {
        self.created_at
    }

    // ========== 库存状态 ==========

    /// 库存充足（> 10）
    pub fn is_in_stock(&self) -> bool {
        self.stock > LOW_STOCK_THRESHOLD
    }

    /// 低库存（0 < stock <= 10）
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= LOW_STOCK_THRESHOLD
    }

    /// 取出 quantity 之后的库存；库存不足时返回 None
    pub fn stock_after_out(&self, quantity: u32) -> Option<u32> {
        self.stock.checked_sub(quantity)
    }

    /// 放入 quantity 之后的库存，无上限约束
    pub fn stock_after_in(&self, quantity: u32) -> u32 {
        self.stock.saturating_add(quantity)
    }
}

impl Entity for Goods {
    type Id = GoodsId;

    fn id(&self) -> &GoodsId {
        &self.id
    }
}

/// 新建货物的写入模型
#[derive(Debug, Clone)]
pub struct GoodsDraft {
    pub name: String,
    pub location: String,
    pub price: Price,
    pub stock: u32,
    pub description: String,
}

/// 货物部分更新
///
/// 只有 Some 的字段会被编码进请求体
#[derive(Debug, Clone, Default)]
pub struct GoodsPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl GoodsPatch {
    /// 仅更新库存
    pub fn stock_only(stock: u32) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }

    /// 整体编辑
    pub fn from_draft(draft: &GoodsDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            location: Some(draft.location.clone()),
            price: Some(draft.price),
            stock: Some(draft.stock),
            description: Some(draft.description.clone()),
        }
    }
}
