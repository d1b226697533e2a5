pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{RestCountriesClient, SqliteCountryStore};
pub use crate::api::build_router;
pub use crate::config::{CliConfig, Profile, TomlConfig};
pub use crate::core::{CountryImporter, CountryService, ImportReport};
pub use crate::utils::error::{Result, ServiceError};
