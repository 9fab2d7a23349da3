//! TOML configuration for the bot.
//!
//! ```toml
//! [bot]
//! token = "..."
//! prefix = "pc!"
//! owner_id = "405798011172814868"
//!
//! [dispatch]
//! strict_greedy = false
//!
//! [logging]
//! level = "info"
//! ```

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::dispatch::domain::UserId;
use crate::dispatch::services::DispatchOptions;

const DEFAULT_PREFIX: &str = "pc!";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `bot.prefix` is empty or contains whitespace.
    #[error("bot.prefix must be non-empty and contain no whitespace")]
    InvalidPrefix,
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// Connection and identity settings.
    pub bot: BotSection,
    /// Dispatcher behaviour.
    pub dispatch: DispatchSection,
    /// Log output.
    pub logging: LoggingConfig,
}

/// `[bot]` section.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotSection {
    /// Gateway credential. Never logged.
    pub token: String,
    /// Literal command prefix.
    pub prefix: String,
    /// User allowed to run owner-only commands.
    pub owner_id: Option<String>,
}

impl Default for BotSection {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: DEFAULT_PREFIX.to_owned(),
            owner_id: None,
        }
    }
}

impl fmt::Debug for BotSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotSection")
            .field("token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

/// `[dispatch]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchSection {
    /// Reject surplus tokens unless the last argument is a greedy tail.
    pub strict_greedy: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl BotConfig {
    /// Parses and validates a TOML document.
    ///
    /// Missing sections and keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidPrefix`] for an unusable prefix.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.bot.prefix.is_empty() || config.bot.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPrefix);
        }
        Ok(config)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// as [`Self::from_toml_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source: std::io::Error| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::other("path must include a file name"))
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_toml_str(&contents)
    }

    /// Dispatcher options derived from the `[bot]` and `[dispatch]` sections.
    #[must_use]
    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            prefix: self.bot.prefix.clone(),
            strict_greedy: self.dispatch.strict_greedy,
        }
    }

    /// The configured owner, if any.
    #[must_use]
    pub fn owner_id(&self) -> Option<UserId> {
        self.bot
            .owner_id
            .as_deref()
            .filter(|owner| !owner.is_empty())
            .map(UserId::new)
    }
}
