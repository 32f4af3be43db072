use super::toml_config::TomlConfig;
use super::{Overrides, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mergington-activities")]
#[command(about = "Mergington High School extracurricular activities registry")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long)]
    pub static_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file (if any), applies CLI overrides and validates
    /// the result.
    pub fn into_settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let overrides = Overrides {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir,
            verbose: self.verbose,
            log_json: self.log_json,
        };

        let settings = Settings::resolve(file, overrides);
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "mergington-activities",
            "--port",
            "9000",
            "--static-dir",
            "./public",
            "-v",
        ]);

        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.static_dir.as_deref(), Some("./public"));
        assert!(cli.verbose);
        assert!(!cli.log_json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_into_settings_reads_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 8123\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["mergington-activities", "--config", path.as_str(), "--port", "8124"]);
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8124);
    }

    #[test]
    fn test_into_settings_rejects_bad_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 0\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["mergington-activities", "--config", path.as_str()]);
        assert!(cli.into_settings().is_err());
    }
}
