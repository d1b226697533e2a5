// Adapters layer: concrete implementations of the domain ports.

pub mod rest_countries;
pub mod sqlite;

pub use rest_countries::RestCountriesClient;
pub use sqlite::SqliteCountryStore;
