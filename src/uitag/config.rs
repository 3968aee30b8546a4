//! # Configuration
//!
//! Widget configuration is read from `uitag.json`. The CLI looks for it in
//! `--config <dir>` when given, otherwise in the OS config directory; a
//! missing file means compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `debug` | `false` | Emit a state snapshot after every step |
//! | `preassigned_type` | `unassigned` | Type given to ids arriving through `assigned` |
//! | `id_placeholder` | `issue #` | Id input placeholder while no id is set |
//! | `type_placeholder` | `mark as` | Type input placeholder while no type is set |
//! | `attribute_prefix` | `data-` | Prefix of externally visible attribute names |

use crate::error::{Result, TagError};
use crate::model::TagType;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "uitag.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetConfig {
    pub debug: bool,

    /// Type used for tags supplied through the `assigned` attribute.
    pub preassigned_type: TagType,

    pub id_placeholder: String,

    pub type_placeholder: String,

    pub attribute_prefix: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debug: false,
            preassigned_type: TagType::Unassigned,
            id_placeholder: "issue #".to_string(),
            type_placeholder: "mark as".to_string(),
            attribute_prefix: "data-".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: WidgetConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()?;
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.preassigned_type.is_defined() {
            return Err(TagError::Config(
                "preassigned_type must name a real type, not 'undefined'".to_string(),
            ));
        }
        Ok(())
    }
}

/// OS-specific directory holding `uitag.json`.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "uitag", "uitag").map(|dirs| dirs.config_dir().to_path_buf())
}
