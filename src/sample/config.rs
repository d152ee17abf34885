//! Sample description: output names, icon and document content
//!
//! The built-in sample is compiled in from `assets/sample.yaml`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icon::{IconError, IconSpec};

const BUILTIN_SAMPLE: &str = include_str!("../../assets/sample.yaml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse sample description as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid icon: {0}")]
    Icon(#[from] IconError),
    #[error("invalid sample description: {0}")]
    Invalid(String),
}

/// One append operation, applied in order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ContentStep {
    Heading {
        text: String,
        level: u8,
    },
    Paragraph {
        text: String,
        #[serde(default)]
        style: Option<String>,
    },
    /// Appended to the most recent paragraph
    Run {
        text: String,
        #[serde(default)]
        bold: Option<bool>,
        #[serde(default)]
        italic: Option<bool>,
    },
    /// Picture paragraph; `path` defaults to the generated icon
    Picture {
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        width_in: Option<f64>,
        #[serde(default)]
        height_in: Option<f64>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Document file name, relative to the working directory
    pub output: String,
    /// Icon file name, relative to the working directory
    pub icon_path: String,
    pub icon: IconSpec,
    pub content: Vec<ContentStep>,
}

impl SampleConfig {
    /// The fixed sample shipped with the binary
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_SAMPLE)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: SampleConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.trim().is_empty() {
            return Err(ConfigError::Invalid("output file name is empty".to_string()));
        }
        if self.icon_path.trim().is_empty() {
            return Err(ConfigError::Invalid("icon path is empty".to_string()));
        }
        self.icon.validate()?;

        if let Some(ContentStep::Run { .. }) = self.content.first() {
            return Err(ConfigError::Invalid("a run step needs a preceding paragraph".to_string()));
        }

        for (idx, step) in self.content.iter().enumerate() {
            if let ContentStep::Picture { width_in, height_in, .. } = step {
                for (label, value) in [("width_in", width_in), ("height_in", height_in)] {
                    if let Some(v) = value {
                        if !(*v > 0.0) || !v.is_finite() {
                            return Err(ConfigError::Invalid(format!(
                                "step {}: {} must be a positive number, got {}",
                                idx, label, v
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sample_parses() {
        let config = SampleConfig::builtin().unwrap();
        assert_eq!(config.output, "Test_Document.docx");
        assert_eq!(config.icon_path, "test_icon.png");
        assert_eq!((config.icon.width, config.icon.height), (100, 100));
        assert_eq!(config.icon.background, [73, 109, 137]);
        assert_eq!(config.icon.lines.len(), 2);
        assert_eq!(config.icon.lines[0].from, (20, 50));
        assert_eq!(config.content.len(), 8);
    }

    #[test]
    fn test_builtin_sample_content_order() {
        let config = SampleConfig::builtin().unwrap();
        assert_eq!(
            config.content[0],
            ContentStep::Heading { text: "YUUKA 测试文档".to_string(), level: 0 }
        );
        assert_eq!(
            config.content[2],
            ContentStep::Run { text: " 这是一个加粗的测试文本。".to_string(), bold: Some(true), italic: None }
        );
        assert_eq!(
            config.content[5],
            ContentStep::Picture { path: None, width_in: Some(1.0), height_in: None }
        );
    }

    #[test]
    fn test_leading_run_rejected() {
        let yaml = r#"
output: out.docx
icon_path: icon.png
icon: { width: 4, height: 4, background: [0, 0, 0] }
content:
  - step: run
    text: orphan
"#;
        let err = SampleConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_positive_picture_width_rejected() {
        let yaml = r#"
output: out.docx
icon_path: icon.png
icon: { width: 4, height: 4, background: [0, 0, 0] }
content:
  - step: picture
    width_in: 0
"#;
        let err = SampleConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("width_in"));
    }

    #[test]
    fn test_zero_icon_rejected() {
        let yaml = r#"
output: out.docx
icon_path: icon.png
icon: { width: 0, height: 4, background: [0, 0, 0] }
content: []
"#;
        assert!(matches!(SampleConfig::from_yaml_str(yaml), Err(ConfigError::Icon(_))));
    }

    #[test]
    fn test_unknown_step_is_a_yaml_error() {
        let yaml = r#"
output: out.docx
icon_path: icon.png
icon: { width: 4, height: 4, background: [0, 0, 0] }
content:
  - step: table
"#;
        assert!(matches!(SampleConfig::from_yaml_str(yaml), Err(ConfigError::Yaml(_))));
    }
}
