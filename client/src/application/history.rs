//! 历史记录视图模型
//!
//! 按日历日分桶、按出入库类型筛选、汇总统计。
//! 分组输出按时间倒序（今天、昨天、更早日期递减，未知时间垫底），
//! 组内保持输入顺序；统计始终基于未筛选的完整列表

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use errors::AppResult;
use serde::Serialize;

use crate::domain::entities::HistoryEntry;
use crate::domain::enums::MovementType;
use crate::domain::repositories::HistoryStore;

/// 未知日期分组标签
const UNKNOWN_LABEL: &str = "未知";

/// 历史记录筛选模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    In,
    Out,
}

impl HistoryFilter {
    fn matches(&self, entry: &HistoryEntry) -> bool {
        match self {
            Self::All => true,
            Self::In => entry.movement() == MovementType::In,
            Self::Out => entry.movement() == MovementType::Out,
        }
    }
}

/// 日期分桶键，倒序排列时未知日期排在所有已知日期之后
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DateBucket {
    Known(NaiveDate),
    Unknown,
}

/// 一个日期分组
#[derive(Debug, Clone)]
pub struct HistoryGroup {
    /// 展示标签: "今天" / "昨天" / "YYYY-MM-DD" / "未知"
    pub label: String,
    pub entries: Vec<HistoryEntry>,
}

/// 出入库统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub today_in: u64,
    pub today_out: u64,
    pub total_in: u64,
    pub total_out: u64,
}

/// 按日历日分组
///
/// 组间按日期倒序（今天在前），组内保持输入顺序；
/// 时间缺失或无法解析的记录归入末尾的 "未知" 组
pub fn group_by_date(entries: &[HistoryEntry], today: NaiveDate) -> Vec<HistoryGroup> {
    let yesterday = today.pred_opt();

    let mut buckets: BTreeMap<DateBucket, Vec<HistoryEntry>> = BTreeMap::new();
    for entry in entries {
        let bucket = match entry.occurred_on() {
            Some(date) => DateBucket::Known(date),
            None => DateBucket::Unknown,
        };
        buckets.entry(bucket).or_default().push(entry.clone());
    }

    // BTreeMap 升序；倒序遍历得到 今天 -> 昨天 -> 更早；Unknown 是最大键，
    // 倒序后会排在最前，单独拎出来垫底
    let unknown = buckets.remove(&DateBucket::Unknown);

    let mut groups: Vec<HistoryGroup> = buckets
        .into_iter()
        .rev()
        .map(|(bucket, entries)| {
            let label = match bucket {
                DateBucket::Known(date) if date == today => "今天".to_string(),
                DateBucket::Known(date) if Some(date) == yesterday => "昨天".to_string(),
                DateBucket::Known(date) => date.format("%Y-%m-%d").to_string(),
                DateBucket::Unknown => unreachable!("unknown bucket removed above"),
            };
            HistoryGroup { label, entries }
        })
        .collect();

    if let Some(entries) = unknown {
        groups.push(HistoryGroup {
            label: UNKNOWN_LABEL.to_string(),
            entries,
        });
    }

    groups
}

/// 对完整（未筛选）列表求统计
///
/// 日期无法解析的记录计入总量，不计入今日量
pub fn history_stats(entries: &[HistoryEntry], today: NaiveDate) -> HistoryStats {
    let mut stats = HistoryStats::default();

    for entry in entries {
        let quantity = u64::from(entry.quantity());
        let is_today = entry.occurred_on() == Some(today);

        match entry.movement() {
            MovementType::In => {
                stats.total_in += quantity;
                if is_today {
                    stats.today_in += quantity;
                }
            }
            MovementType::Out => {
                stats.total_out += quantity;
                if is_today {
                    stats.today_out += quantity;
                }
            }
        }
    }

    stats
}

/// 历史屏幕视图状态
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub filter: HistoryFilter,
    pub groups: Vec<HistoryGroup>,
    pub stats: HistoryStats,
}

/// 从已拉取的完整列表推导视图状态
///
/// 分组反映当前筛选；统计与筛选无关
pub fn derive_view(
    entries: &[HistoryEntry],
    filter: HistoryFilter,
    today: NaiveDate,
) -> HistoryView {
    let filtered: Vec<HistoryEntry> = entries
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect();

    HistoryView {
        filter,
        groups: group_by_date(&filtered, today),
        stats: history_stats(entries, today),
    }
}

/// 历史屏幕控制器
pub struct HistoryScreen {
    history: Arc<dyn HistoryStore>,
}

impl HistoryScreen {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    /// 屏幕显示时加载并按当前筛选推导视图
    pub async fn load(&self, filter: HistoryFilter) -> AppResult<HistoryView> {
        let entries = self.history.list_history().await?;
        Ok(derive_view(&entries, filter, Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone};
    use domain_core::Price;

    use super::*;
    use crate::domain::value_objects::HistoryId;

    fn entry(
        id: &str,
        movement: MovementType,
        quantity: u32,
        at: Option<DateTime<Local>>,
    ) -> HistoryEntry {
        HistoryEntry::from_parts(
            HistoryId::new(id),
            None,
            "螺丝".to_string(),
            movement,
            quantity,
            "A-01".to_string(),
            Some(Price::zero()),
            at,
        )
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> Option<DateTime<Local>> {
        Some(Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_group_labels_and_order() {
        // 输入故意乱序：更早日期在前
        let entries = vec![
            entry("1", MovementType::In, 1, at(2024, 6, 10, 8)),
            entry("2", MovementType::In, 2, at(2024, 6, 15, 10)),
            entry("3", MovementType::Out, 3, at(2024, 6, 14, 9)),
            entry("4", MovementType::In, 4, at(2024, 6, 15, 11)),
        ];

        let groups = group_by_date(&entries, today());
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["今天", "昨天", "2024-06-10"]);

        // 组内保持输入顺序
        let today_ids: Vec<&str> = groups[0].entries.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(today_ids, vec!["2", "4"]);
    }

    #[test]
    fn test_grouping_is_stable() {
        let entries = vec![
            entry("1", MovementType::In, 3, at(2024, 6, 15, 10)),
            entry("2", MovementType::In, 5, at(2024, 6, 14, 9)),
        ];

        let first = group_by_date(&entries, today());
        let second = group_by_date(&entries, today());

        let shape = |groups: &[HistoryGroup]| -> Vec<(String, Vec<String>)> {
            groups
                .iter()
                .map(|g| {
                    (
                        g.label.clone(),
                        g.entries.iter().map(|e| e.id().to_string()).collect(),
                    )
                })
                .collect()
        };
        assert_eq!(shape(&first), shape(&second));
    }

    #[test]
    fn test_unknown_date_groups_last() {
        let entries = vec![
            entry("1", MovementType::In, 1, None),
            entry("2", MovementType::In, 2, at(2024, 6, 15, 10)),
        ];

        let groups = group_by_date(&entries, today());
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["今天", "未知"]);
    }

    #[test]
    fn test_stats_sum_by_type_and_day() {
        let entries = vec![
            entry("1", MovementType::In, 3, at(2024, 6, 15, 10)),
            entry("2", MovementType::In, 5, at(2024, 6, 14, 9)),
            entry("3", MovementType::Out, 2, at(2024, 6, 15, 12)),
        ];

        let stats = history_stats(&entries, today());
        assert_eq!(stats.total_in, 8);
        assert_eq!(stats.today_in, 3);
        assert_eq!(stats.total_out, 2);
        assert_eq!(stats.today_out, 2);
    }

    #[test]
    fn test_unknown_date_counts_in_totals_only() {
        let entries = vec![entry("1", MovementType::In, 7, None)];

        let stats = history_stats(&entries, today());
        assert_eq!(stats.total_in, 7);
        assert_eq!(stats.today_in, 0);
    }

    #[test]
    fn test_stats_ignore_filter() {
        let entries = vec![
            entry("1", MovementType::In, 3, at(2024, 6, 15, 10)),
            entry("2", MovementType::Out, 5, at(2024, 6, 15, 11)),
        ];

        let view = derive_view(&entries, HistoryFilter::In, today());
        // 分组只剩入库记录
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].entries.len(), 1);
        // 统计仍然覆盖全部记录
        assert_eq!(view.stats.total_out, 5);
        assert_eq!(view.stats.today_out, 5);
    }
}
