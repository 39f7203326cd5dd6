use crate::models::ReplacementRule;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default directory holding the chart components
pub const DEFAULT_TARGET_DIR: &str = "frontend/komponen/bagan";

/// Default candidate file suffix
pub const DEFAULT_EXTENSION: &str = ".tsx";

/// Default noun printed in the summary line
pub const DEFAULT_SUMMARY_LABEL: &str = "chart files";

/// Built-in color table, in application order.
pub const DEFAULT_REPLACEMENTS: [(&str, &str); 13] = [
    ("var(--bg-secondary)", "#171a20"),
    ("var(--bg-border)", "#393c41"),
    ("var(--bg-tertiary)", "#222222"),
    ("var(--text-primary)", "#eeeeee"),
    ("var(--text-secondary)", "#8a8d91"),
    ("var(--text-muted)", "#5c5e62"),
    ("var(--accent-primary)", "#3e6ae1"),
    ("var(--accent-secondary)", "#f7c948"),
    ("var(--accent-tertiary)", "#3e6ae1"),
    ("var(--data-grid)", "#393c41"),
    ("var(--status-warning)", "#f7c948"),
    ("var(--status-critical)", "#e31937"),
    ("var(--status-online)", "#00d448"),
];

/// Run configuration from recolor.yaml
///
/// Every key is optional; anything left out falls back to the built-in
/// defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecolorConfig {
    #[serde(rename = "Recolor_Settings", default)]
    pub settings: RecolorSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecolorSettings {
    #[serde(rename = "Target Dir", default = "default_target_dir")]
    pub target_dir: String,

    #[serde(rename = "Extension", default = "default_extension")]
    pub extension: String,

    #[serde(rename = "Summary Label", default = "default_summary_label")]
    pub summary_label: String,

    #[serde(rename = "Replacements", default = "default_replacements")]
    pub replacements: IndexMap<String, String>,
}

impl Default for RecolorSettings {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            extension: default_extension(),
            summary_label: default_summary_label(),
            replacements: default_replacements(),
        }
    }
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            settings: RecolorSettings::default(),
        }
    }
}

fn default_target_dir() -> String {
    DEFAULT_TARGET_DIR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_summary_label() -> String {
    DEFAULT_SUMMARY_LABEL.to_string()
}

fn default_replacements() -> IndexMap<String, String> {
    DEFAULT_REPLACEMENTS
        .iter()
        .map(|(pattern, replacement)| (pattern.to_string(), replacement.to_string()))
        .collect()
}

impl RecolorConfig {
    /// Replacement rules in configured order
    pub fn rules(&self) -> Vec<ReplacementRule> {
        self.settings
            .replacements
            .iter()
            .map(|(pattern, replacement)| ReplacementRule::new(pattern, replacement))
            .collect()
    }

    pub fn with_target_dir(mut self, target_dir: impl Into<String>) -> Self {
        self.settings.target_dir = target_dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.settings.extension = extension.into();
        self
    }

    /// Apply command line overrides on top of a loaded configuration
    pub fn apply_overrides(self, target_dir: Option<String>, extension: Option<String>) -> Self {
        let config = match target_dir {
            Some(dir) => self.with_target_dir(dir),
            None => self,
        };
        match extension {
            Some(extension) => config.with_extension(extension),
            None => config,
        }
    }
}
