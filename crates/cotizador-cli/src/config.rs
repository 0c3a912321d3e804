// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use cotizador_app::DEFAULT_FOLIO_SEED;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;

pub const APP_NAME: &str = "cotizador";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub folio: Folio,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: Output::default(),
            branding: Branding::default(),
            folio: Folio::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Output {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Branding {
    pub logo_primary: Option<String>,
    pub logo_secondary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Folio {
    pub seed: Option<u32>,
}

impl Default for Folio {
    fn default() -> Self {
        Self {
            seed: Some(DEFAULT_FOLIO_SEED),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub filter: Option<String>,
    pub dir: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: Some("info".to_owned()),
            dir: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("COTIZADOR_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set COTIZADOR_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [output], [branding], [folio], and [logging]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(dir) = &self.output.dir
            && dir.trim().is_empty()
        {
            bail!("output.dir in {} must not be blank", path.display());
        }

        // Page one places both logos; a single logo would leave a hole.
        match (&self.branding.logo_primary, &self.branding.logo_secondary) {
            (Some(_), None) | (None, Some(_)) => {
                bail!(
                    "branding in {} must set both logo_primary and logo_secondary, or neither",
                    path.display()
                );
            }
            _ => {}
        }

        Ok(())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output
            .dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn logo_paths(&self) -> Option<(PathBuf, PathBuf)> {
        match (&self.branding.logo_primary, &self.branding.logo_secondary) {
            (Some(primary), Some(secondary)) => {
                Some((PathBuf::from(primary), PathBuf::from(secondary)))
            }
            _ => None,
        }
    }

    pub fn folio_seed(&self) -> u32 {
        self.folio.seed.unwrap_or(DEFAULT_FOLIO_SEED)
    }

    pub fn log_filter(&self) -> &str {
        self.logging.filter.as_deref().unwrap_or("info")
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.logging.dir {
            return Ok(PathBuf::from(dir));
        }
        let data_root = dirs::data_local_dir()
            .ok_or_else(|| anyhow!("cannot resolve data directory; set logging.dir in config"))?;
        Ok(data_root.join(APP_NAME).join("logs"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# cotizador config\n# Place this file at: {}\n\nversion = 1\n\n[output]\n# Directory that receives Cotizacion_<MODEL>.pdf. Default is the working directory.\n# dir = \"/home/ventas/cotizaciones\"\n\n[branding]\n# Both logos or neither. Page one places them side by side in the header.\n# logo_primary = \"/opt/cotizador/logo.png\"\n# logo_secondary = \"/opt/cotizador/logo2.png\"\n\n[folio]\nseed = {}\n\n[logging]\nfilter = \"info\"\n# dir = \"/var/log/cotizador\"\n",
            path.display(),
            DEFAULT_FOLIO_SEED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.folio_seed(), 7309);
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert!(config.logo_paths().is_none());
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[folio]\nseed = 9000\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[output], [branding], [folio], and [logging]"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[output]\ndir = \"/tmp/quotes\"\n[folio]\nseed = 100\n[logging]\nfilter = \"debug\"\n",
        )?;
        let config = Config::load(&path)?;
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/quotes"));
        assert_eq!(config.folio_seed(), 100);
        assert_eq!(config.log_filter(), "debug");
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn single_logo_is_rejected() -> Result<()> {
        let (_temp, path) =
            write_config("version = 1\n[branding]\nlogo_primary = \"/opt/logo.png\"\n")?;
        let error = Config::load(&path).expect_err("single logo should fail");
        assert!(error.to_string().contains("both logo_primary and logo_secondary"));
        Ok(())
    }

    #[test]
    fn both_logos_parse_into_paths() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[branding]\nlogo_primary = \"/opt/logo.png\"\nlogo_secondary = \"/opt/logo2.png\"\n",
        )?;
        let config = Config::load(&path)?;
        let (primary, secondary) = config.logo_paths().expect("both logos set");
        assert_eq!(primary, PathBuf::from("/opt/logo.png"));
        assert_eq!(secondary, PathBuf::from("/opt/logo2.png"));
        Ok(())
    }

    #[test]
    fn blank_output_dir_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[output]\ndir = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank output dir should fail");
        assert!(error.to_string().contains("output.dir"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("COTIZADOR_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("COTIZADOR_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("COTIZADOR_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn log_dir_prefers_config_value() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[logging]\ndir = \"/var/log/cotizador\"\n")?;
        let config = Config::load(&path)?;
        assert_eq!(config.log_dir()?, PathBuf::from("/var/log/cotizador"));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[output]"));
        assert!(example.contains("[branding]"));
        assert!(example.contains("[folio]"));
        assert!(example.contains("[logging]"));
        assert!(example.contains("seed = 7309"));
        Ok(())
    }
}
