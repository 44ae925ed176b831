//! 本地存储适配器

mod term_log;

pub use term_log::*;
