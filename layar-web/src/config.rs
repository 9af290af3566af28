use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use layar_core::brand::BrandRule;
use layar_core::BrandClassifier;
use serde::Deserialize;

/// Site configuration. Every section has built-in defaults; a missing
/// `config.toml` runs the site as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub brands: BrandsConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the cinema data document, read once per page request.
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/data.json"),
        }
    }
}

/// The brand vocabulary lives here so adding a chain is a config change, not
/// a code change. An empty rule list falls back to the built-in vocabulary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrandsConfig {
    pub rules: Vec<BrandRule>,
}

impl BrandsConfig {
    pub fn classifier(&self) -> BrandClassifier {
        if self.rules.is_empty() {
            BrandClassifier::default()
        } else {
            BrandClassifier::new(self.rules.clone())
        }
    }
}

/// Best-effort Wikipedia summary lookup for films without a written synopsis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub enabled: bool,
    pub api_base: String,
    pub page_base: String,
    pub timeout_seconds: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: "https://id.wikipedia.org/api/rest_v1/page/summary".to_string(),
            page_base: "https://id.wikipedia.org/wiki".to_string(),
            timeout_seconds: 4,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.path, PathBuf::from("data/data.json"));
        assert!(config.summary.enabled);
    }

    #[test]
    fn partial_files_keep_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 8088\n\n[[brands.rules]]\nlabel = \"Flix\"\nneedles = [\"flix\"]"
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.data.path, PathBuf::from("data/data.json"));

        let brands = config.brands.classifier();
        assert_eq!(brands.classify(Some("Flix Grand Galaxy")), "Flix");
    }

    #[test]
    fn empty_brand_rules_fall_back_to_the_builtin_vocabulary() {
        let brands = BrandsConfig::default().classifier();
        assert_eq!(brands.classify(Some("CGV Sun Plaza")), "CGV");
    }
}
