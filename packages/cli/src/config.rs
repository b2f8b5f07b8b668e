use autocompaste_editor::EditorConfig;
use autocompaste_engine::IndexOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "autocompaste.config.json";

/// AutoComPaste configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Manifest listing the reference texts
    #[serde(default = "default_sources")]
    pub sources: String,

    /// Search options
    #[serde(default)]
    pub index: IndexOptions,

    /// Completion options
    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_sources() -> String {
    "texts.json".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!("Loaded {}", config_path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Manifest path, preferring an explicit override
    pub fn manifest_path(&self, cwd: &Path, manifest: Option<&Path>) -> PathBuf {
        match manifest {
            Some(path) => cwd.join(path),
            None => cwd.join(&self.sources),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            index: IndexOptions::default(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocompaste_editor::AppendHistoryPolicy;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "sources": "corpus/texts.json",
            "index": { "minQueryChars": 4, "maxResults": 10 },
            "editor": {
                "list": { "maxWidth": 400 },
                "appendHistory": "retain"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.sources, "corpus/texts.json");
        assert_eq!(config.index.min_query_chars, 4);
        assert_eq!(config.index.max_results, Some(10));
        assert_eq!(config.editor.list.max_width, 400);
        assert_eq!(config.editor.list.max_height, 200);
        assert_eq!(config.editor.append_history, AppendHistoryPolicy::Retain);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.sources, "texts.json");
        assert_eq!(config.index, IndexOptions::default());
        assert_eq!(config.editor, EditorConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.sources, "texts.json");
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "sources": "books.json" }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(
            config.manifest_path(dir.path(), None),
            dir.path().join("books.json")
        );
        assert_eq!(
            config.manifest_path(dir.path(), Some(Path::new("other.json"))),
            dir.path().join("other.json")
        );
    }
}
