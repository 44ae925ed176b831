//! 仓储接口（端口）
//!
//! 屏幕控制器在构造时注入 `Arc<dyn …>`，不存在全局可变命名空间

mod goods_store;
mod history_store;
mod term_log_store;

pub use goods_store::*;
pub use history_store::*;
pub use term_log_store::*;
