#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::SeedActivity;
use crate::domain::seed;
use crate::utils::error::{ActivityError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Fully resolved settings the server runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub verbose: bool,
    pub log_json: bool,
    pub activities: Vec<SeedActivity>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            verbose: false,
            log_json: false,
            activities: seed::default_activities(),
        }
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub verbose: bool,
    pub log_json: bool,
}

impl Settings {
    /// CLI overrides win over the file, the file wins over defaults.
    pub fn resolve(file: Option<TomlConfig>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        Self {
            host: overrides
                .host
                .or_else(|| file.host().map(str::to_string))
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.port()).unwrap_or(defaults.port),
            static_dir: overrides
                .static_dir
                .or_else(|| file.static_dir().map(str::to_string))
                .unwrap_or(defaults.static_dir),
            verbose: overrides.verbose || file.verbose().unwrap_or(defaults.verbose),
            log_json: overrides.log_json || file.log_json().unwrap_or(defaults.log_json),
            activities: file.activities.unwrap_or(defaults.activities),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        if self.host.chars().any(char::is_whitespace) {
            return Err(ActivityError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: self.host.clone(),
                reason: "Host cannot contain whitespace".to_string(),
            });
        }
        validate_range("server.port", self.port, 1, u16::MAX)?;
        validate_path("server.static_dir", &self.static_dir)?;
        Ok(())
    }
}
