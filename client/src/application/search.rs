//! 搜索聚合器
//!
//! 合并关键词命中与位置命中（按 ID 去重），并维护有界的、
//! 去重的、最近优先的本地搜索词日志

use std::collections::HashSet;
use std::sync::Arc;

use errors::{AppError, AppResult};
use tracing::warn;

use crate::domain::entities::Goods;
use crate::domain::repositories::{GoodsStore, TermLogStore};

/// 搜索词日志容量上限
pub const MAX_TERMS: usize = 10;

/// 合并关键词命中与位置命中
///
/// 关键词命中在前（保持原顺序），其后追加位置命中（location 含关键词，
/// 大小写敏感的子串匹配），已出现的 ID 跳过
pub fn merge_results(keyword_matches: Vec<Goods>, all_goods: &[Goods], keyword: &str) -> Vec<Goods> {
    let mut seen: HashSet<String> = keyword_matches
        .iter()
        .map(|g| g.id().as_str().to_string())
        .collect();

    let mut merged = keyword_matches;
    for goods in all_goods {
        if goods.location().contains(keyword) && seen.insert(goods.id().as_str().to_string()) {
            merged.push(goods.clone());
        }
    }

    merged
}

/// 记录一次搜索词：去重、插入最前、截断到容量上限
pub fn record_term(mut terms: Vec<String>, term: &str) -> Vec<String> {
    terms.retain(|t| t != term);
    terms.insert(0, term.to_string());
    terms.truncate(MAX_TERMS);
    terms
}

/// 一次成功搜索的结果
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub keyword: String,
    pub results: Vec<Goods>,
    /// 更新后的搜索词日志
    pub terms: Vec<String>,
}

/// 搜索屏幕控制器
pub struct SearchScreen {
    goods: Arc<dyn GoodsStore>,
    terms: Arc<dyn TermLogStore>,
}

impl SearchScreen {
    pub fn new(goods: Arc<dyn GoodsStore>, terms: Arc<dyn TermLogStore>) -> Self {
        Self { goods, terms }
    }

    /// 屏幕进入时加载搜索词日志
    pub async fn load_terms(&self) -> AppResult<Vec<String>> {
        self.terms.load().await
    }

    /// 执行一次搜索
    ///
    /// 空关键词（去空白后）是校验错误，不发出任何请求。
    /// 远端失败时原样返回错误，已展示的结果和搜索词日志都不被触碰
    pub async fn search(&self, raw_keyword: &str) -> AppResult<SearchOutcome> {
        let keyword = raw_keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::validation("请输入搜索关键词"));
        }

        let keyword_matches = self.goods.search_goods(keyword).await?;
        let all_goods = self.goods.list_goods().await?;
        let results = merge_results(keyword_matches, &all_goods, keyword);

        // 仅在远端搜索成功后更新日志
        let logged = self.terms.load().await.unwrap_or_default();
        let terms = record_term(logged, keyword);
        if let Err(e) = self.terms.save(&terms).await {
            // 槽位写入失败不影响本次搜索结果，下次搜索会重写
            warn!(error = %e, "Failed to persist search term log");
        }

        Ok(SearchOutcome {
            keyword: keyword.to_string(),
            results,
            terms,
        })
    }

    /// 清除搜索词日志
    pub async fn clear_terms(&self) -> AppResult<()> {
        self.terms.clear().await
    }
}
