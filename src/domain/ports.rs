use crate::config::Profile;
use crate::domain::model::{Country, NewCountry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable country records keyed by a store-assigned id.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<Country>>;

    /// Exact name match ignoring case. When several rows share a name the
    /// first inserted one is returned.
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Country>>;

    /// Always inserts a new row.
    async fn save(&self, country: NewCountry) -> Result<Country>;

    async fn count(&self) -> Result<u64>;
}

/// Upstream provider of raw country records.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// `None` when the upstream answered with JSON `null`. Elements are left
    /// undecoded so that one malformed record cannot fail the whole fetch.
    async fn fetch_all(&self) -> Result<Option<Vec<serde_json::Value>>>;
}

pub trait ConfigProvider: Send + Sync {
    fn profile(&self) -> Profile;
    fn source_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn database_path(&self) -> &str;
    fn bind_addr(&self) -> &str;
}
