//! 远端 REST 适配器
//!
//! 线上行结构、行到领域实体的转换、以及 reqwest 客户端

mod client;
mod convert;
mod wire;

pub use client::*;
