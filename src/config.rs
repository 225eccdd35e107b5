//! Generator configuration.
//!
//! Everything that varies between target environments lives here: indentation, the tool version stamped into the
//! banner, the `using` preamble, the debugger attribute switch, and the well-known role table.

use std::collections::BTreeMap;
use std::path::Path;

use routegen_core::lang::well_known::{self, WellKnownTypes};
use serde::Deserialize;
use thiserror::Error;

use crate::version::ROUTEGEN_VERSION;

/// Generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Version stamped into the generated-file banner
    pub tool_version: String,
    /// Namespaces imported at the top of every unit, in order
    pub usings: Vec<String>,
    /// Whether dispatch routines carry the debugger step-through attribute
    pub debugger_step_through: bool,
    /// Target names of the framework types the generator refers to
    pub well_known: WellKnownTypes,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            tool_version: ROUTEGEN_VERSION.to_string(),
            usings: vec![
                "Microsoft.AspNetCore.Builder".to_string(),
                "Microsoft.Extensions.DependencyInjection".to_string(),
            ],
            debugger_step_through: true,
            well_known: WellKnownTypes::default(),
        }
    }
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown well-known role `{0}`")]
    UnknownRole(String),
}

/// On-disk shape; every field is optional and falls back to the default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    indent_width: Option<usize>,
    tool_version: Option<String>,
    usings: Option<Vec<String>>,
    debugger_step_through: Option<bool>,
    well_known: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }

    pub fn with_usings(mut self, usings: Vec<String>) -> Self {
        self.usings = usings;
        self
    }

    pub fn with_debugger_step_through(mut self, enabled: bool) -> Self {
        self.debugger_step_through = enabled;
        self
    }

    pub fn with_well_known(mut self, well_known: WellKnownTypes) -> Self {
        self.well_known = well_known;
        self
    }

    /// Parse a JSON config document, applying it over the defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(text)?;
        let mut config = Self::default();
        if let Some(width) = file.indent_width {
            config.indent_width = width;
        }
        if let Some(version) = file.tool_version {
            config.tool_version = version;
        }
        if let Some(usings) = file.usings {
            config.usings = usings;
        }
        if let Some(enabled) = file.debugger_step_through {
            config.debugger_step_through = enabled;
        }
        for (key, name) in file.well_known {
            let role = well_known::from_key(&key).ok_or(ConfigError::UnknownRole(key))?;
            config.well_known.set(role, name);
        }
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
