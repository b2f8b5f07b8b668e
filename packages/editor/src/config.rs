//! Editor settings

use crate::EditorError;
use serde::{Deserialize, Serialize};

/// When the append history is thrown away
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppendHistoryPolicy {
    /// Any edit that did not come from the controller empties the history
    #[default]
    ClearOnEdit,

    /// Keep the history until it is popped empty
    Retain,
}

/// Size limits for the suggestion list, in pixels.
///
/// These are hints for the display surface; the controller never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGeometry {
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

fn default_max_width() -> u32 {
    300
}

fn default_max_height() -> u32 {
    200
}

impl Default for ListGeometry {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            max_height: default_max_height(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    #[serde(default)]
    pub list: ListGeometry,

    #[serde(default)]
    pub append_history: AppendHistoryPolicy,
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.list.max_width == 0 {
            return Err(EditorError::InvalidConfig(
                "list.maxWidth cannot be 0".to_string(),
            ));
        }

        if self.list.max_height == 0 {
            return Err(EditorError::InvalidConfig(
                "list.maxHeight cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.list.max_width, 300);
        assert_eq!(config.list.max_height, 200);
        assert_eq!(config.append_history, AppendHistoryPolicy::ClearOnEdit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "list": { "maxWidth": 480 },
            "appendHistory": "retain"
        }"#;

        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.list.max_width, 480);
        assert_eq!(config.list.max_height, 200);
        assert_eq!(config.append_history, AppendHistoryPolicy::Retain);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let mut config = EditorConfig::default();
        config.list.max_height = 0;
        assert!(matches!(
            config.validate(),
            Err(EditorError::InvalidConfig(_))
        ));
    }
}
