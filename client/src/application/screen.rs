//! 屏幕生命周期
//!
//! 传输层不会在导航离开时取消在途请求；每个屏幕持有一个取消范围，
//! 屏幕已离开后到达的完成结果被丢弃，不再触碰已死的视图状态

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// 屏幕生命周期句柄
#[derive(Debug, Clone)]
pub struct ScreenLifetime {
    token: CancellationToken,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// 屏幕是否仍然活跃
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// 导航离开：之后所有 `run` 中的完成结果都会被丢弃
    pub fn leave(&self) {
        self.token.cancel();
    }

    /// 在屏幕生命周期内运行一个操作
    ///
    /// 屏幕离开后返回 None；调用方对 None 不做任何状态更新
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            _ = self.token.cancelled() => None,
            out = fut => {
                if self.is_active() {
                    Some(out)
                } else {
                    None
                }
            }
        }
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}
