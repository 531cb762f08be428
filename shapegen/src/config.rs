//! Render configuration (renderer.toml)
//!
//! Display flags a viewer applies when drawing generated meshes. The flags
//! live in one explicit struct, loaded once and then changed only through
//! [`RenderConfig::toggle`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error loading or saving a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Rendering flags
///
/// Missing keys take their defaults, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Draw triangle edges only (default: false)
    #[serde(default)]
    pub wireframe: bool,
    /// Cull back-facing triangles (default: false)
    #[serde(default)]
    pub backface_culling: bool,
    /// Visualize vertex normals (default: false)
    #[serde(default)]
    pub draw_normals: bool,
    /// Visualize texture coordinates (default: false)
    #[serde(default)]
    pub draw_texcoords: bool,
    /// Enable depth testing (default: true)
    #[serde(default = "default_true")]
    pub depth_test: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wireframe: false,
            backface_culling: false,
            draw_normals: false,
            draw_texcoords: false,
            depth_test: default_true(),
        }
    }
}

/// A single flag flip requested at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderToggle {
    Wireframe,
    BackfaceCulling,
    DrawNormals,
    DrawTexcoords,
}

impl RenderToggle {
    /// Map a key name to its toggle (F1, F2, N, T; case-insensitive)
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key.to_uppercase().as_str() {
            "F1" => Some(Self::Wireframe),
            "F2" => Some(Self::BackfaceCulling),
            "N" => Some(Self::DrawNormals),
            "T" => Some(Self::DrawTexcoords),
            _ => None,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    /// Callers that prefer defaults for a missing file can check
    /// [`Path::exists`] first.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Flip one flag, returning its new value
    pub fn toggle(&mut self, toggle: RenderToggle) -> bool {
        let flag = match toggle {
            RenderToggle::Wireframe => &mut self.wireframe,
            RenderToggle::BackfaceCulling => &mut self.backface_culling,
            RenderToggle::DrawNormals => &mut self.draw_normals,
            RenderToggle::DrawTexcoords => &mut self.draw_texcoords,
        };
        *flag = !*flag;
        *flag
    }
}
