pub mod importer;
pub mod service;

pub use importer::{CountryImporter, ImportReport};
pub use service::CountryService;
