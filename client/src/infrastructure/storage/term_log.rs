//! 搜索词日志的文件槽位实现
//!
//! 数据目录下单个 JSON 文件，对应设备本地存储里的一个命名槽位。
//! 槽位缺失读作空列表；内容损坏时重置为空列表而不是让搜索页瘫痪

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use errors::{AppError, AppResult};
use tracing::warn;

use crate::domain::repositories::TermLogStore;

/// 槽位文件名
const SLOT_NAME: &str = "search_history.json";

/// 文件槽位存储
pub struct FileTermLogStore {
    path: PathBuf,
}

impl FileTermLogStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SLOT_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TermLogStore for FileTermLogStore {
    async fn load(&self) -> AppResult<Vec<String>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::storage(e.to_string())),
        };

        match serde_json::from_slice(&raw) {
            Ok(terms) => Ok(terms),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt term log slot, resetting");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, terms: &[String]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::storage(e.to_string()))?;
        }

        let raw = serde_json::to_vec(terms).map_err(|e| AppError::storage(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| AppError::storage(e.to_string()))
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> FileTermLogStore {
        let dir = std::env::temp_dir().join(format!(
            "cangku-term-log-{}-{}",
            tag,
            std::process::id()
        ));
        FileTermLogStore::new(dir)
    }

    #[tokio::test]
    async fn test_missing_slot_reads_empty() {
        let store = temp_store("missing");
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let store = temp_store("roundtrip");
        let terms = vec!["螺丝".to_string(), "A-01".to_string()];
        store.save(&terms).await.unwrap();
        assert_eq!(store.load().await.unwrap(), terms);
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_slot_resets_to_empty() {
        let store = temp_store("corrupt");
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), b"{not json")
            .await
            .unwrap();
        assert!(store.load().await.unwrap().is_empty());
        store.clear().await.unwrap();
    }
}
