use crate::cache::ObjectCache;
use crate::services::notifications::Notifier;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和通知后台任务
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 创建缓存实例
    let cache = crate::cache::create_cache();
    warn!("Cache backend initialized");

    // 启动邮件通知后台任务
    Notifier::spawn();
    warn!("Notification worker started");

    StartupContext { storage, cache }
}
