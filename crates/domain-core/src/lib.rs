//! domain-core - 跨模块共享的领域核心类型
//!
//! 包含极少数需要跨界限上下文共享的值对象

mod entity;
mod price;
mod quantity;

pub use entity::*;
pub use price::*;
pub use quantity::*;
