use crate::domain::model::{CountryDetail, CountrySummary};
use crate::domain::ports::CountryStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// Read-side projections over the country store.
#[derive(Clone)]
pub struct CountryService {
    store: Arc<dyn CountryStore>,
}

impl CountryService {
    pub fn new(store: Arc<dyn CountryStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<CountrySummary>> {
        let countries = self.store.find_all().await?;
        Ok(countries.iter().map(CountrySummary::from).collect())
    }

    /// `None` when no stored name matches ignoring case.
    pub async fn get_details(&self, name: &str) -> Result<Option<CountryDetail>> {
        let country = self.store.find_by_name_ignore_case(name).await?;
        Ok(country.as_ref().map(CountryDetail::from))
    }
}
