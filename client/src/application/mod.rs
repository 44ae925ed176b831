//! 应用层 - 视图状态推导与屏幕控制器
//!
//! 每个屏幕在显示时拉取远端数据，把原始列表喂给对应的视图模型，
//! 推导结果只归当前屏幕所有，离开即丢弃

pub mod commands;
pub mod history;
pub mod home;
pub mod operations;
pub mod screen;
pub mod search;
