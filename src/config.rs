//! Application configuration.
//!
//! Centralizes the constants used throughout the shell. Text assets and the
//! default filesystem manifest are embedded at compile time using
//! `include_str!`. Runtime overrides live in [`ShellConfig`], loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome banner printed before the first prompt.
pub const WELCOME_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Manifest describing the built-in virtual filesystem.
pub const DEFAULT_MANIFEST: &str = include_str!("../assets/fs/manifest.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "termfolio";

/// Default user shown in the prompt.
pub const DEFAULT_USER: &str = "sahabandu";

/// Default host shown in the prompt.
pub const DEFAULT_HOST: &str = "portfolio";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Display marker for the filesystem root.
pub const ROOT_MARKER: &str = "~";

/// Manifest format version understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

// =============================================================================
// Animation Configuration
// =============================================================================

/// Delay between two revealed lines of streamed output (milliseconds).
pub const LINE_DELAY_MS: u64 = 150;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime settings, typically read from `termfolio.toml`.
///
/// ```toml
/// [prompt]
/// user = "guest"
/// host = "portfolio"
///
/// [animation]
/// line_delay_ms = 150
/// enabled = true
///
/// [filesystem]
/// manifest = "site/manifest.json"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: PromptConfig,
    pub animation: AnimationConfig,
    pub filesystem: FilesystemConfig,
}

/// Identity shown in `user@host:path$` prompts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Pacing of streamed output.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds between two revealed lines.
    pub line_delay_ms: u64,
    /// When false, streamed output is still revealed line by line but
    /// without waiting between lines.
    pub enabled: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            line_delay_ms: LINE_DELAY_MS,
            enabled: true,
        }
    }
}

/// Where the virtual filesystem comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilesystemConfig {
    /// External JSON manifest; the embedded one is used when absent.
    pub manifest: Option<PathBuf>,
}

impl ShellConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Effective delay between streamed lines.
    pub fn line_delay(&self) -> Duration {
        if self.animation.enabled {
            Duration::from_millis(self.animation.line_delay_ms)
        } else {
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt.user, DEFAULT_USER);
        assert_eq!(config.prompt.host, DEFAULT_HOST);
        assert_eq!(config.line_delay(), Duration::from_millis(150));
        assert!(config.filesystem.manifest.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = ShellConfig::from_toml("[prompt]\nuser = \"guest\"\n").unwrap();
        assert_eq!(config.prompt.user, "guest");
        assert_eq!(config.prompt.host, DEFAULT_HOST);
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn test_animation_disabled() {
        let config = ShellConfig::from_toml("[animation]\nenabled = false\n").unwrap();
        assert_eq!(config.line_delay(), Duration::ZERO);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ShellConfig::from_toml("[animation]\nline_delay_ms = \"fast\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ShellConfig::load(Path::new("/nonexistent/termfolio.toml")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_help_text_ends_with_blank_line() {
        let lines: Vec<&str> = HELP_TEXT.lines().collect();
        assert_eq!(lines.first(), Some(&"Available commands:"));
        assert_eq!(lines.last(), Some(&""));
    }
}
