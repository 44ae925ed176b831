//! 首页视图模型
//!
//! 货物列表统计与最近操作记录

use std::sync::Arc;

use chrono::{DateTime, Local};
use errors::AppResult;
use serde::Serialize;

use crate::domain::entities::{Goods, HistoryEntry};
use crate::domain::repositories::{GoodsStore, HistoryStore};

/// 首页展示的最近记录条数
const RECENT_LIMIT: usize = 5;

/// 库存统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockStats {
    /// 货物总数
    pub total: usize,
    /// 库存充足数（stock > 10）
    pub in_stock: usize,
    /// 低库存数（0 < stock <= 10）
    pub low_stock: usize,
}

/// 对已拉取的货物集合求统计，纯函数，空集合得全零
pub fn stock_stats(goods: &[Goods]) -> StockStats {
    StockStats {
        total: goods.len(),
        in_stock: goods.iter().filter(|g| g.is_in_stock()).count(),
        low_stock: goods.iter().filter(|g| g.is_low_stock()).count(),
    }
}

/// 最近操作记录（含展示用相对时间）
#[derive(Debug, Clone)]
pub struct RecentEntry {
    pub entry: HistoryEntry,
    pub time_display: String,
}

/// 取最近 n 条记录并渲染相对时间
pub fn recent_history(
    entries: &[HistoryEntry],
    now: DateTime<Local>,
) -> Vec<RecentEntry> {
    entries
        .iter()
        .take(RECENT_LIMIT)
        .map(|entry| RecentEntry {
            time_display: entry
                .occurred_at()
                .map(|at| relative_time(at, now))
                .unwrap_or_default(),
            entry: entry.clone(),
        })
        .collect()
}

/// 相对时间渲染：刚刚 / N分钟前 / N小时前 / N天前 / "M-D H:MM"
pub fn relative_time(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let diff = now.signed_duration_since(then);
    let secs = diff.num_seconds();

    if secs < 60 {
        return "刚刚".to_string();
    }
    if secs < 3600 {
        return format!("{}分钟前", secs / 60);
    }
    if secs < 86_400 {
        return format!("{}小时前", secs / 3600);
    }
    if secs < 604_800 {
        return format!("{}天前", secs / 86_400);
    }
    format!("{}", then.format("%-m-%-d %-H:%M"))
}

/// 首页视图状态
#[derive(Debug, Clone)]
pub struct HomeView {
    pub goods: Vec<Goods>,
    pub stats: StockStats,
    pub recent: Vec<RecentEntry>,
}

/// 首页屏幕控制器
pub struct HomeScreen {
    goods: Arc<dyn GoodsStore>,
    history: Arc<dyn HistoryStore>,
}

impl HomeScreen {
    pub fn new(goods: Arc<dyn GoodsStore>, history: Arc<dyn HistoryStore>) -> Self {
        Self { goods, history }
    }

    /// 屏幕显示时加载：货物列表 + 统计 + 最近记录
    pub async fn load(&self) -> AppResult<HomeView> {
        let goods = self.goods.list_goods().await?;
        let stats = stock_stats(&goods);

        let history = self.history.list_history().await?;
        let recent = recent_history(&history, Local::now());

        Ok(HomeView {
            goods,
            stats,
            recent,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use domain_core::Price;

    use super::*;
    use crate::domain::value_objects::GoodsId;

    fn goods(id: &str, stock: u32) -> Goods {
        Goods::from_parts(
            GoodsId::new(id),
            format!("货物{}", id),
            "A-01".to_string(),
            Price::zero(),
            stock,
            String::new(),
            None,
        )
    }

    #[test]
    fn test_empty_collection_yields_zeros() {
        assert_eq!(stock_stats(&[]), StockStats::default());
    }

    #[test]
    fn test_zero_stock_counts_in_neither_bucket() {
        let list = vec![goods("1", 0), goods("2", 5), goods("3", 15)];
        let stats = stock_stats(&list);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_stock, 1);
        assert_eq!(stats.low_stock, 1);
        // stock = 0 的货物两个桶都不计入
        assert!(stats.low_stock + stats.in_stock < stats.total);
    }

    #[test]
    fn test_buckets_cover_all_when_no_zero_stock() {
        let list = vec![goods("1", 1), goods("2", 10), goods("3", 11)];
        let stats = stock_stats(&list);
        assert_eq!(stats.low_stock + stats.in_stock, stats.total);
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let at = |h: u32, m: u32| Local.with_ymd_and_hms(2024, 6, 15, h, m, 0).unwrap();

        assert_eq!(relative_time(now, now), "刚刚");
        assert_eq!(relative_time(at(11, 55), now), "5分钟前");
        assert_eq!(relative_time(at(9, 0), now), "3小时前");
        assert_eq!(
            relative_time(Local.with_ymd_and_hms(2024, 6, 13, 12, 0, 0).unwrap(), now),
            "2天前"
        );
        assert_eq!(
            relative_time(Local.with_ymd_and_hms(2024, 6, 1, 8, 5, 0).unwrap(), now),
            "6-1 8:05"
        );
    }
}
