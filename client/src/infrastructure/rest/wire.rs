//! 线上行结构
//!
//! 服务端对部分字段同时输出新旧两种名字（`stock`/`quantity`、
//! `time`/`timestamp` 等），行结构把两种都接住，归一交给 convert

use serde::{Deserialize, Serialize};

/// `GET /api/goods`、`GET /api/goods/search` 响应
#[derive(Debug, Deserialize)]
pub struct GoodsListResponse {
    #[serde(default)]
    pub goods: Vec<GoodsRow>,
}

/// `GET /api/history` 响应
#[derive(Debug, Deserialize)]
pub struct HistoryListResponse {
    #[serde(default)]
    pub history: Vec<HistoryRow>,
}

/// 货物行
#[derive(Debug, Deserialize)]
pub struct GoodsRow {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// 旧式数字主键，缺少 `_id` 时回退使用
    #[serde(rename = "id")]
    pub numeric_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: f64,
    pub stock: Option<i64>,
    /// `stock` 的旧名
    pub quantity: Option<i64>,
    pub description: Option<String>,
    #[serde(rename = "createTime")]
    pub create_time: Option<String>,
    /// `createTime` 的服务端原生名
    pub created_at: Option<String>,
}

/// 历史记录行
#[derive(Debug, Deserialize)]
pub struct HistoryRow {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "id")]
    pub numeric_id: Option<i64>,
    #[serde(rename = "goodsId")]
    pub goods_id: Option<String>,
    #[serde(rename = "goodsName")]
    pub goods_name: Option<String>,
    /// `goodsName` 的服务端原生名
    #[serde(rename = "goods_name")]
    pub goods_name_native: Option<String>,
    #[serde(rename = "type")]
    pub movement: Option<String>,
    /// `type` 的服务端原生名，取值 `入库`/`出库`
    pub operation_type: Option<String>,
    /// 服务端原生出库记录为负数，解码时取绝对值
    #[serde(default)]
    pub quantity: i64,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub time: Option<String>,
    /// `time` 的服务端原生名
    pub timestamp: Option<String>,
}

/// `POST /api/goods` 请求体
#[derive(Debug, Serialize)]
pub struct NewGoodsBody<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub price: f64,
    pub stock: u32,
    pub description: &'a str,
    #[serde(rename = "createTime")]
    pub create_time: String,
}

/// `PUT /api/goods/by/_id/{id}` 请求体；None 字段不编码
#[derive(Debug, Default, Serialize)]
pub struct GoodsPatchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

/// `POST /api/history` 请求体
#[derive(Debug, Serialize)]
pub struct NewHistoryBody<'a> {
    #[serde(rename = "goodsId")]
    pub goods_id: &'a str,
    #[serde(rename = "goodsName")]
    pub goods_name: &'a str,
    #[serde(rename = "type")]
    pub movement: &'a str,
    pub quantity: u32,
    pub location: &'a str,
    pub price: f64,
}
