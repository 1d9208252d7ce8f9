use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::DiagramResult;
use crate::export::ExportFormat;
use crate::theme::ThemeMode;

/// ## Structure
/// Configuration file for the `convert` command. Every field is optional in
/// the YAML file; command line flags override what is loaded.
///
/// ```text
/// Config
///   ├── format: ExportFormat   (json, dot, mermaid, csv-nodes, csv-connectors)
///   ├── pretty: bool
///   ├── seed: Option<u64>      (reproducible leaf ids)
///   ├── theme: ThemeMode       (light, dark)
///   └── output: Option<String>
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub format: ExportFormat,
    pub pretty: bool,
    pub seed: Option<u64>,
    pub theme: ThemeMode,
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty: true,
            seed: None,
            theme: ThemeMode::Light,
            output: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> DiagramResult<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> DiagramResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> DiagramResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_serialization() {
        let config = Config {
            format: ExportFormat::Mermaid,
            seed: Some(3),
            ..Default::default()
        };
        let yaml_str = config.to_yaml().unwrap();
        assert!(yaml_str.contains("format: mermaid"));
        assert!(yaml_str.contains("seed: 3"));
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let yaml_str = r#"
format: dot
theme: dark
"#;
        let config = Config::from_yaml(yaml_str).unwrap();
        assert_eq!(config.format, ExportFormat::Dot);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.pretty);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = Config::from_yaml("format: svg").unwrap_err();
        assert!(matches!(err, crate::errors::DiagramError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pretty: false\nseed: 11\noutput: out.json").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.output.as_deref(), Some("out.json"));
    }
}
