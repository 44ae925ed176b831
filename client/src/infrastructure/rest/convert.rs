//! 线上行到领域实体的转换
//!
//! 时间解析兼容三种来源：小程序写入的 RFC 3339、服务端原生的
//! `YYYY-MM-DD HH:MM:SS`、以及纯日期；解析失败按时间缺失处理

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use domain_core::Price;
use errors::{AppError, AppResult};
use tracing::warn;

use crate::domain::entities::{Goods, HistoryEntry};
use crate::domain::enums::MovementType;
use crate::domain::value_objects::{GoodsId, HistoryId};

use super::wire::{GoodsRow, HistoryRow};

/// 解析线上时间字段
pub(super) fn parse_wire_time(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Local));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Local.from_local_datetime(&t).single();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .and_then(|t| Local.from_local_datetime(&t).single());
    }
    None
}

fn row_id(id: Option<String>, numeric_id: Option<i64>) -> Option<String> {
    id.or_else(|| numeric_id.map(|n| n.to_string()))
}

/// 货物行 -> 货物实体
pub(super) fn goods_from_row(row: GoodsRow) -> AppResult<Goods> {
    let id = row_id(row.id, row.numeric_id)
        .ok_or_else(|| AppError::decode("goods row missing both _id and id"))?;

    let stock = row.stock.or(row.quantity).unwrap_or(0).max(0) as u32;

    let price = Price::from_decimal(row.price)
        .map_err(|e| AppError::decode(format!("invalid price for goods {}: {}", id, e)))?;

    let created_at = row
        .create_time
        .as_deref()
        .or(row.created_at.as_deref())
        .and_then(parse_wire_time);

    Ok(Goods::from_parts(
        GoodsId::new(id),
        row.name,
        row.location,
        price,
        stock,
        row.description.unwrap_or_default(),
        created_at,
    ))
}

/// 历史记录行 -> 历史记录实体
pub(super) fn history_from_row(row: HistoryRow) -> AppResult<HistoryEntry> {
    let id = row_id(row.id, row.numeric_id)
        .ok_or_else(|| AppError::decode("history row missing both _id and id"))?;

    let movement_raw = row
        .movement
        .as_deref()
        .or(row.operation_type.as_deref())
        .ok_or_else(|| AppError::decode(format!("history {} missing movement type", id)))?;
    let movement = MovementType::from_wire(movement_raw).ok_or_else(|| {
        AppError::decode(format!("history {} has unknown movement {}", id, movement_raw))
    })?;

    // 服务端原生出库记录带符号，归一为正数
    let quantity = row.quantity.unsigned_abs().min(u32::MAX as u64) as u32;

    let price = match row.price {
        Some(p) => match Price::from_decimal(p) {
            Ok(price) => Some(price),
            Err(e) => {
                warn!(history_id = %id, error = %e, "Dropping unparseable price snapshot");
                None
            }
        },
        None => None,
    };

    let occurred_at = row
        .time
        .as_deref()
        .or(row.timestamp.as_deref())
        .and_then(parse_wire_time);

    Ok(HistoryEntry::from_parts(
        HistoryId::new(id),
        row.goods_id.map(GoodsId::new),
        row.goods_name.or(row.goods_name_native).unwrap_or_default(),
        movement,
        quantity,
        row.location.unwrap_or_default(),
        price,
        occurred_at,
    ))
}
