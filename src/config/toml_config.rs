use crate::config::{
    Profile, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{
    validate_bind_addr, validate_database_path, validate_source_url, validate_timeout_secs,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub service: ServiceSection,
    pub source: SourceSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    pub profile: Profile,
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SOURCE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATABASE_PATH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列指定的 profile 優先於檔案設定
    pub fn with_profile_override(mut self, profile: Option<Profile>) -> Self {
        if let Some(profile) = profile {
            self.service.profile = profile;
        }
        self
    }
}

impl ConfigProvider for TomlConfig {
    fn profile(&self) -> Profile {
        self.service.profile
    }

    fn source_url(&self) -> &str {
        &self.source.endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.source.timeout_seconds
    }

    fn database_path(&self) -> &str {
        &self.database.path
    }

    fn bind_addr(&self) -> &str {
        &self.service.bind_addr
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_source_url("source.endpoint", &self.source.endpoint)?;
        validate_timeout_secs("source.timeout_seconds", self.source.timeout_seconds)?;
        validate_database_path("database.path", &self.database.path)?;
        validate_bind_addr("service.bind_addr", &self.service.bind_addr)?;
        Ok(())
    }
}
