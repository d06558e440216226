//! Shared configuration loader for autorpt.
//!
//! `defaults/autorpt.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`ReportConfig`].

use autorpt_babel::formats::html::HtmlTheme;
use autorpt_babel::AssembleOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};

pub use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/autorpt.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "autorpt.toml";

/// Top-level configuration consumed by autorpt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub report: ReportSettings,
    pub tables: TablesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub start_header_level: u8,
    #[serde(default)]
    pub title: Option<String>,
}

/// How spreadsheet tables are introduced.
#[derive(Debug, Clone, Deserialize)]
pub struct TablesConfig {
    pub include_header: bool,
    pub summary: bool,
}

/// Format-specific output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Modern,
    Serif,
}

impl From<ThemeName> for HtmlTheme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Modern => HtmlTheme::Modern,
            ThemeName::Serif => HtmlTheme::Serif,
        }
    }
}

impl ReportConfig {
    /// Options passed to the output format named `format`.
    pub fn format_options(&self, format: &str) -> HashMap<String, String> {
        let mut options = HashMap::new();
        if format == "html" {
            let theme = match self.output.html.theme {
                ThemeName::Modern => "modern",
                ThemeName::Serif => "serif",
            };
            options.insert("theme".to_string(), theme.to_string());
        }
        options
    }

    /// Assembler settings for a report written in `format`.
    pub fn assemble_options(&self, format: &str) -> AssembleOptions {
        AssembleOptions {
            include_table_header: self.tables.include_header,
            table_summary: self.tables.summary,
            format_options: self.format_options(format),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=9).contains(&self.report.start_header_level) {
            return Err(ConfigError::Message(format!(
                "report.start_header_level must be between 1 and 9, got {}",
                self.report.start_header_level
            )));
        }
        Ok(self)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and check the configuration.
    pub fn build(self) -> Result<ReportConfig, ConfigError> {
        self.builder
            .build()?
            .try_deserialize::<ReportConfig>()?
            .validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ReportConfig, ConfigError> {
    Loader::new().build()
}
