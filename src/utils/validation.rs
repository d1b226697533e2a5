use crate::utils::error::{Result, ServiceError};
use std::net::SocketAddr;
use url::Url;

/// Upper bound on the upstream request timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 600;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> ServiceError {
    ServiceError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The country source must be an absolute http(s) URL with a host.
pub fn validate_source_url(field: &str, endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| invalid(field, endpoint, format!("Invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            endpoint,
            format!("Country source must be http or https, got {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field, endpoint, "Country source URL has no host"));
    }

    Ok(url)
}

/// `:memory:` selects an in-memory SQLite database; anything else is a file path.
pub fn validate_database_path(field: &str, path: &str) -> Result<()> {
    if path == ":memory:" {
        return Ok(());
    }
    if path.trim().is_empty() {
        return Err(invalid(field, path, "Database path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path, "Database path contains NUL bytes"));
    }
    if path.ends_with('/') || path.ends_with('\\') {
        return Err(invalid(field, path, "Database path points at a directory"));
    }
    Ok(())
}

pub fn validate_timeout_secs(field: &str, secs: u64) -> Result<()> {
    if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(invalid(
            field,
            secs,
            format!("Timeout must be between 1 and {} seconds", MAX_TIMEOUT_SECS),
        ));
    }
    Ok(())
}

pub fn validate_bind_addr(field: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| invalid(field, addr, format!("Invalid listen address: {}", e)))
}
