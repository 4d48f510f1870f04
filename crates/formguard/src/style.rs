// File: src/style.rs
// Purpose: Styling conventions for rendered error state, loadable from formguard.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Visual conventions for presented errors: the class names the markup
/// carries and the inline style of message nodes.
///
/// Every field has a default, so a partial document overrides only what it
/// names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorStyle {
    #[serde(default = "default_message_color")]
    pub message_color: String,

    #[serde(default = "default_message_font_size")]
    pub message_font_size: String,

    #[serde(default = "default_message_margin_top")]
    pub message_margin_top: String,

    #[serde(default = "default_message_margin_bottom")]
    pub message_margin_bottom: String,

    #[serde(default = "default_border_color")]
    pub border_color: String,

    #[serde(default = "default_field_class")]
    pub field_class: String,

    #[serde(default = "default_message_class")]
    pub message_class: String,
}

// Default values
fn default_message_color() -> String {
    "red".to_string()
}

fn default_message_font_size() -> String {
    "0.9rem".to_string()
}

fn default_message_margin_top() -> String {
    "3px".to_string()
}

fn default_message_margin_bottom() -> String {
    "7px".to_string()
}

fn default_border_color() -> String {
    "red".to_string()
}

fn default_field_class() -> String {
    "formguard-error-field".to_string()
}

fn default_message_class() -> String {
    "formguard-error-message".to_string()
}

// Default implementation
impl Default for ErrorStyle {
    fn default() -> Self {
        Self {
            message_color: default_message_color(),
            message_font_size: default_message_font_size(),
            message_margin_top: default_message_margin_top(),
            message_margin_bottom: default_message_margin_bottom(),
            border_color: default_border_color(),
            field_class: default_field_class(),
            message_class: default_message_class(),
        }
    }
}

impl ErrorStyle {
    /// Load style conventions from formguard.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let style: ErrorStyle = toml::from_str(&content)
            .with_context(|| format!("Failed to parse style file: {:?}", path))?;

        Ok(style)
    }

    /// Load style conventions from the default path (./formguard.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formguard.toml")
    }

    /// Inline style string for a message node.
    pub fn message_css(&self) -> String {
        format!(
            "color: {}; font-size: {}; margin-top: {}; margin-bottom: {};",
            self.message_color,
            self.message_font_size,
            self.message_margin_top,
            self.message_margin_bottom
        )
    }

    /// CSS block covering both the field and message classes, for callers
    /// that style through a stylesheet instead of inline attributes.
    pub fn stylesheet(&self) -> String {
        format!(
            ".{} {{\n    border-color: {};\n}}\n.{} {{\n    color: {};\n    font-size: {};\n    margin-top: {};\n    margin-bottom: {};\n}}\n",
            self.field_class,
            self.border_color,
            self.message_class,
            self.message_color,
            self.message_font_size,
            self.message_margin_top,
            self.message_margin_bottom
        )
    }
}
