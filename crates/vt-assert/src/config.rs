use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vt_core::errors::{ErrorInfo, VtError};
use vt_core::render::RenderOptions;
use vt_core::serde::from_yaml_slice;

use crate::approx::{MAX_SIGNIFICANT_FIGURES, MIN_SIGNIFICANT_FIGURES};

fn config_error(code: &str, message: impl Into<String>) -> VtError {
    VtError::Config(ErrorInfo::new(code, message.into()))
}

/// YAML-configurable knobs for the comparison engines and the printer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Precision used when deep equality meets a floating point operand.
    #[serde(default = "EngineConfig::default_equality_significant_figures")]
    pub equality_significant_figures: u32,
    /// Deepest container nesting the engines will walk.
    #[serde(default = "EngineConfig::default_max_depth")]
    pub max_depth: usize,
    /// Spaces per nesting level in rendered diagnostics.
    #[serde(default = "EngineConfig::default_indent_width")]
    pub indent_width: usize,
}

impl EngineConfig {
    const fn default_equality_significant_figures() -> u32 {
        MAX_SIGNIFICANT_FIGURES
    }

    const fn default_max_depth() -> usize {
        256
    }

    const fn default_indent_width() -> usize {
        2
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), VtError> {
        let sig = self.equality_significant_figures;
        if !(MIN_SIGNIFICANT_FIGURES..=MAX_SIGNIFICANT_FIGURES).contains(&sig) {
            return Err(VtError::Config(
                ErrorInfo::new(
                    "equality-precision-out-of-range",
                    format!("equality_significant_figures must lie in 1..=15, got {sig}"),
                )
                .with_context("field", "equality_significant_figures"),
            ));
        }
        if self.max_depth == 0 {
            return Err(config_error(
                "max-depth-zero",
                "max_depth must allow at least one level of nesting",
            ));
        }
        Ok(())
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, VtError> {
        let config: EngineConfig = from_yaml_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, VtError> {
        let bytes = fs::read(path).map_err(|err| {
            VtError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_slice(&bytes).map_err(|err| match err {
            VtError::Serde(info) | VtError::Config(info) => {
                VtError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Printer layout derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_width: self.indent_width,
            max_depth: self.max_depth,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            equality_significant_figures: Self::default_equality_significant_figures(),
            max_depth: Self::default_max_depth(),
            indent_width: Self::default_indent_width(),
        }
    }
}
