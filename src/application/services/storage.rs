use async_trait::async_trait;

/// String key/value storage for client-side preferences.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}
