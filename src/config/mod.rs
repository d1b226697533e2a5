pub mod cli;
pub mod toml_config;

use crate::utils::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_SOURCE_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,capital,population";
pub const DEFAULT_DATABASE_PATH: &str = ":memory:";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Execution profile. Only `Dev` imports countries on startup, so it has to
/// be asked for explicitly; an unconfigured service starts as `Prod`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Profile {
    Dev,
    Test,
    #[default]
    Prod,
}

impl Profile {
    pub fn imports_on_startup(self) -> bool {
        matches!(self, Profile::Dev)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Dev => "dev",
            Profile::Test => "test",
            Profile::Prod => "prod",
        }
    }
}

impl FromStr for Profile {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Profile::Dev),
            "test" => Ok(Profile::Test),
            "prod" | "production" => Ok(Profile::Prod),
            other => Err(ServiceError::InvalidConfigValueError {
                field: "profile".to_string(),
                value: other.to_string(),
                reason: "Expected one of: dev, test, prod".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Profile {
    type Error = ServiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.as_str().to_string()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
