//! REST 客户端
//!
//! 状态码在 [200, 300) 视为成功，其余把响应体作为错误上抛；
//! 网络层失败归类为传输错误

use async_trait::async_trait;
use chrono::Local;
use config::ApiConfig;
use errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::entities::{Goods, GoodsDraft, GoodsPatch, HistoryEntry, NewHistoryEntry};
use crate::domain::repositories::{GoodsStore, HistoryStore};
use crate::domain::value_objects::{GoodsId, HistoryId};

use super::convert::{goods_from_row, history_from_row};
use super::wire::{
    GoodsListResponse, GoodsPatchBody, HistoryListResponse, NewGoodsBody, NewHistoryBody,
};

/// 面向库存后端的 REST 客户端
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// 按配置构建客户端
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        info!("Connecting to inventory backend at {}", config.base_url);

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 发送请求并做统一的状态码检查
    async fn execute(&self, request: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_status(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        debug!(path, "GET");
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<()> {
        debug!(path, "POST");
        self.execute(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    async fn put_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<()> {
        debug!(path, "PUT");
        self.execute(self.http.put(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        debug!(path, "DELETE");
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[async_trait]
impl GoodsStore for RestClient {
    async fn list_goods(&self) -> AppResult<Vec<Goods>> {
        let response: GoodsListResponse = self.get_json("/api/goods", &[]).await?;
        response.goods.into_iter().map(goods_from_row).collect()
    }

    async fn add_goods(&self, draft: &GoodsDraft) -> AppResult<()> {
        let body = NewGoodsBody {
            name: &draft.name,
            location: &draft.location,
            price: draft.price.to_decimal(),
            stock: draft.stock,
            description: &draft.description,
            create_time: Local::now().to_rfc3339(),
        };
        self.post_json("/api/goods", &body).await
    }

    async fn update_goods(&self, id: &GoodsId, patch: &GoodsPatch) -> AppResult<()> {
        let body = GoodsPatchBody {
            name: patch.name.as_deref(),
            location: patch.location.as_deref(),
            price: patch.price.map(|p| p.to_decimal()),
            stock: patch.stock,
            description: patch.description.as_deref(),
        };
        self.put_json(&format!("/api/goods/by/_id/{}", id.as_str()), &body)
            .await
    }

    async fn delete_goods(&self, id: &GoodsId) -> AppResult<()> {
        self.delete(&format!("/api/goods/by/_id/{}", id.as_str()))
            .await
    }

    async fn search_goods(&self, keyword: &str) -> AppResult<Vec<Goods>> {
        let response: GoodsListResponse = self
            .get_json("/api/goods/search", &[("q", keyword)])
            .await?;
        response.goods.into_iter().map(goods_from_row).collect()
    }
}

#[async_trait]
impl HistoryStore for RestClient {
    async fn list_history(&self) -> AppResult<Vec<HistoryEntry>> {
        let response: HistoryListResponse = self.get_json("/api/history", &[]).await?;
        response.history.into_iter().map(history_from_row).collect()
    }

    async fn add_history(&self, entry: &NewHistoryEntry) -> AppResult<()> {
        let body = NewHistoryBody {
            goods_id: entry.goods_id.as_str(),
            goods_name: &entry.goods_name,
            movement: entry.movement.as_wire_str(),
            quantity: entry.quantity.get(),
            location: &entry.location,
            price: entry.price.to_decimal(),
        };
        self.post_json("/api/history", &body).await
    }

    async fn delete_history(&self, id: &HistoryId) -> AppResult<()> {
        self.delete(&format!("/api/history/by/_id/{}", id.as_str()))
            .await
    }

    async fn clear_history(&self) -> AppResult<()> {
        self.delete("/api/history/clear").await
    }
}
