use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::spdx::SpdxRegistry;

/// Root configuration structure, deserialized from `.spdx-expr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ids to accept on top of the embedded SPDX list.
#[derive(Debug, Default, Deserialize)]
pub struct RegistryConfig {
    /// Extra license ids, e.g. `"LicenseRef-Acme-Proprietary"`.
    #[serde(default)]
    pub licenses: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Report format used when `--report` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl Config {
    /// The embedded registry extended with the configured ids.
    pub fn registry(&self) -> SpdxRegistry {
        let mut registry = SpdxRegistry::embedded().clone();
        registry.extend(
            self.registry.licenses.iter().cloned(),
            self.registry.exceptions.iter().cloned(),
        );
        registry
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.spdx-expr/config.toml`
/// 3. `~/.config/spdx-expr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".spdx-expr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("spdx-expr").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spdx::{IdentifierRegistry, SpdxExpression};

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.output.format, OutputFormat::Terminal);
        assert!(cfg.registry.licenses.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let cfg: Config = toml::from_str(
            r#"
[registry]
licenses = ["LicenseRef-Acme"]
exceptions = ["Acme-linking-exception"]

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.registry.licenses, vec!["LicenseRef-Acme".to_string()]);
        assert_eq!(cfg.registry.exceptions.len(), 1);
    }

    #[test]
    fn test_registry_includes_configured_ids() {
        let cfg: Config = toml::from_str("[registry]\nlicenses = [\"LicenseRef-Acme\"]\n").unwrap();
        let registry = cfg.registry();
        assert!(registry.is_known_license("LicenseRef-Acme"));
        assert!(registry.is_known_license("MIT"));

        let expr = SpdxExpression::parse("LicenseRef-Acme OR Foo").unwrap();
        let ids: Vec<String> = expr.license_set(&registry).into_iter().collect();
        assert_eq!(ids, vec!["LicenseRef-Acme".to_string()]);
    }

    #[test]
    fn test_load_project_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".spdx-expr");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[registry]\nexceptions = [\"X-exception\"]\n").unwrap();

        let cfg = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(cfg.registry.exceptions, vec!["X-exception".to_string()]);
    }

    #[test]
    fn test_load_invalid_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\nformat = \"pdf\"\n").unwrap();

        assert!(load_config(dir.path(), Some(&path)).is_err());
    }
}
