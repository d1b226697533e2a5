use crate::config::{
    Profile, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bind_addr, validate_database_path, validate_source_url, validate_timeout_secs,
    Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "country-service")]
#[command(about = "Imports country records and serves them over a small REST API")]
pub struct CliConfig {
    /// Execution profile (dev, test, prod). Defaults to prod; only dev imports on startup.
    #[arg(long, env = "COUNTRY_SERVICE_PROFILE")]
    pub profile: Option<Profile>,

    #[arg(long, env = "COUNTRY_SERVICE_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// SQLite database file, or `:memory:`
    #[arg(long, env = "COUNTRY_SERVICE_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: String,

    #[arg(long, env = "COUNTRY_SERVICE_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub request_timeout: u64,

    /// Path to a TOML configuration file; replaces the flags above except --profile
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn profile(&self) -> Profile {
        self.profile.unwrap_or_default()
    }

    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout
    }

    fn database_path(&self) -> &str {
        &self.database
    }

    fn bind_addr(&self) -> &str {
        &self.bind
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_source_url("source_url", &self.source_url)?;
        validate_database_path("database", &self.database)?;
        validate_bind_addr("bind", &self.bind)?;
        validate_timeout_secs("request_timeout", self.request_timeout)?;
        Ok(())
    }
}
