use crate::config::Profile;
use crate::domain::model::RawCountry;
use crate::domain::ports::{CountrySource, CountryStore};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub fetched: usize,
    pub saved: usize,
    pub failed: usize,
}

/// One-shot import of upstream countries into the store.
pub struct CountryImporter<S: CountrySource> {
    source: S,
    store: Arc<dyn CountryStore>,
}

impl<S: CountrySource> CountryImporter<S> {
    pub fn new(source: S, store: Arc<dyn CountryStore>) -> Self {
        Self { source, store }
    }

    /// Fetches once and saves every record in order. A fetch failure aborts
    /// the import; a failure on a single record is logged and skipped.
    pub async fn run(&self) -> Result<ImportReport> {
        tracing::info!("🌍 Fetching countries from upstream API...");
        let raw_records = match self.source.fetch_all().await? {
            Some(records) if !records.is_empty() => records,
            _ => {
                tracing::warn!("No countries fetched from the API.");
                return Ok(ImportReport::default());
            }
        };

        let mut report = ImportReport {
            fetched: raw_records.len(),
            ..ImportReport::default()
        };
        tracing::info!("Fetched {} raw country records", report.fetched);

        for raw in raw_records {
            match self.import_one(&raw).await {
                Ok(name) => {
                    report.saved += 1;
                    tracing::debug!("Saved country: {}", name);
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::error!("Error processing country data: {} ({})", raw, e);
                }
            }
        }

        tracing::info!(
            "✅ Import finished: {} fetched, {} saved, {} failed",
            report.fetched,
            report.saved,
            report.failed
        );
        Ok(report)
    }

    async fn import_one(&self, raw: &serde_json::Value) -> Result<String> {
        let raw_country: RawCountry = serde_json::from_value(raw.clone())?;
        let saved = self.store.save(raw_country.project()).await?;
        Ok(saved.name)
    }

    /// 僅在允許匯入的 profile 下執行；抓取失敗只記錄，不中斷服務啟動
    pub async fn run_on_startup(&self, profile: Profile) -> Option<ImportReport> {
        if !profile.imports_on_startup() {
            tracing::info!("Profile '{}' does not import on startup, skipping", profile);
            return None;
        }

        match self.run().await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!("❌ Error fetching data from the API: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                None
            }
        }
    }
}
