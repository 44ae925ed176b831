//! 领域实体

mod goods;
mod history_entry;

pub use goods::*;
pub use history_entry::*;
