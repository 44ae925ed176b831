//! 操作表单命令
//!
//! 校验失败是本地错误：立即返回，不发出网络请求，不改动任何状态

use domain_core::{Price, Quantity};
use errors::{AppError, AppResult};

use crate::domain::entities::{Goods, GoodsDraft};
use crate::domain::value_objects::GoodsId;

/// 取出（出库）命令
#[derive(Debug, Clone)]
pub struct WithdrawCommand {
    pub goods: Goods,
    pub quantity: u32,
}

impl WithdrawCommand {
    /// 校验：数量 >= 1 且不超过当前库存
    pub fn validate(&self) -> AppResult<Quantity> {
        let quantity =
            Quantity::new(self.quantity).map_err(|e| AppError::validation(e.to_string()))?;

        if self.goods.stock_after_out(quantity.get()).is_none() {
            return Err(AppError::validation("库存不足"));
        }

        Ok(quantity)
    }
}

/// 放入（入库）命令
#[derive(Debug, Clone)]
pub struct DepositCommand {
    pub goods: Goods,
    pub quantity: u32,
}

impl DepositCommand {
    /// 校验：数量 >= 1，入库无上限约束
    pub fn validate(&self) -> AppResult<Quantity> {
        Quantity::new(self.quantity).map_err(|e| AppError::validation(e.to_string()))
    }
}

/// 新建/编辑货物命令
///
/// target 存在时为编辑，否则为新建
#[derive(Debug, Clone, Default)]
pub struct UpsertGoodsCommand {
    pub target: Option<GoodsId>,
    pub name: String,
    pub location: String,
    /// 用户输入的单价字符串
    pub price: String,
    pub stock: Option<u32>,
    pub description: String,
}

impl UpsertGoodsCommand {
    /// 校验：名称与位置去空白后非空，单价可解析；库存缺省为 0
    pub fn validate(&self) -> AppResult<GoodsDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("请输入货物名称"));
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(AppError::validation("请输入存放位置"));
        }

        let price = Price::parse(&self.price).map_err(|e| AppError::validation(e.to_string()))?;

        Ok(GoodsDraft {
            name: name.to_string(),
            location: location.to_string(),
            price,
            stock: self.stock.unwrap_or(0),
            description: self.description.trim().to_string(),
        })
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goods(stock: u32) -> Goods {
        Goods::from_parts(
            GoodsId::new("1"),
            "螺丝".to_string(),
            "A-01".to_string(),
            Price::from_cents(250).unwrap(),
            stock,
            String::new(),
            None,
        )
    }

    #[test]
    fn test_withdraw_rejects_excess_quantity() {
        let cmd = WithdrawCommand {
            goods: goods(5),
            quantity: 6,
        };
        assert!(cmd.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_withdraw_allows_draining_stock() {
        let cmd = WithdrawCommand {
            goods: goods(5),
            quantity: 5,
        };
        assert_eq!(cmd.validate().unwrap().get(), 5);
    }

    #[test]
    fn test_withdraw_rejects_zero_quantity() {
        let cmd = WithdrawCommand {
            goods: goods(5),
            quantity: 0,
        };
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn test_deposit_has_no_upper_bound() {
        let cmd = DepositCommand {
            goods: goods(5),
            quantity: 10_000,
        };
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn test_upsert_requires_trimmed_fields() {
        let cmd = UpsertGoodsCommand {
            name: "  ".to_string(),
            location: "A-01".to_string(),
            price: "1.5".to_string(),
            ..Default::default()
        };
        assert!(cmd.validate().is_err());

        let cmd = UpsertGoodsCommand {
            name: "螺丝".to_string(),
            location: "".to_string(),
            price: "1.5".to_string(),
            ..Default::default()
        };
        assert!(cmd.validate().is_err());

        let cmd = UpsertGoodsCommand {
            name: "螺丝".to_string(),
            location: "A-01".to_string(),
            price: "not-a-number".to_string(),
            ..Default::default()
        };
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn test_upsert_defaults_stock_to_zero() {
        let cmd = UpsertGoodsCommand {
            name: " 螺丝 ".to_string(),
            location: "A-01".to_string(),
            price: "2.5".to_string(),
            ..Default::default()
        };
        let draft = cmd.validate().unwrap();
        assert_eq!(draft.name, "螺丝");
        assert_eq!(draft.stock, 0);
        assert_eq!(draft.price.as_cents(), 250);
    }
}
