//! cangku-client - 库存管理小程序客户端
//!
//! 面向远程 REST 接口的货物 CRUD 与出入库记录客户端，
//! 核心是列表响应到视图状态的聚合推导逻辑

pub mod application;
pub mod domain;
pub mod infrastructure;
