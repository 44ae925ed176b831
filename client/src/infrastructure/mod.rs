//! 基础设施层 - 远端 REST 适配器与本地存储适配器

pub mod rest;
pub mod storage;
