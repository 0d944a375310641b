//! 进程内对象缓存（Moka）
//!
//! 目前只用于 JWT 中间件的 token -> 用户 查找，避免每个请求都
//! 打一次数据库。

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use tracing::debug;

use crate::config::AppConfig;

pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new() -> Self {
        let config = AppConfig::get();
        let inner = Cache::builder()
            .max_capacity(config.cache.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.cache.default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            config.cache.max_capacity
        );
        Self { inner }
    }
}

impl Default for MokaCacheWrapper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // Moka 在创建时就设置了全局的 TTL 策略，这里的 ttl 参数被忽略
        self.inner.insert(key, value).await;

        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

pub fn create_cache() -> Arc<dyn ObjectCache> {
    Arc::new(MokaCacheWrapper::new())
}
