//! Graph build configuration.
//!
//! # Responsibility
//! - Hold the keyword vocabulary and link weighting constants as named,
//!   tunable fields.
//! - Load overrides from JSON files and reject unusable values.
//!
//! # Invariants
//! - Keywords are trimmed, lowercased and unique after normalization.
//! - Weights are finite and non-negative.
//! - `link_threshold` is finite and within `(0, 1]`, so every emitted link
//!   has positive strength.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_KEYWORDS: &[&str] = &[
    "important",
    "todo",
    "decision",
    "lesson",
    "project",
    "person",
    "idea",
];

/// Default long-term memory file read by the build.
pub const DEFAULT_LONG_TERM_FILE: &str = "MEMORY.md";
/// Default directory holding daily log files.
pub const DEFAULT_DAILY_DIR: &str = "memory";
/// File extension of markdown memory documents.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Link scoring weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkWeights {
    /// Added once per tag shared by both nodes.
    pub shared_tag: f64,
    /// Added when both nodes carry the same date.
    pub same_date: f64,
    /// Added once per significant title word of the first node found in the
    /// second node's title.
    pub shared_title_word: f64,
    /// Title words need strictly more characters than this to count.
    pub min_title_word_chars: usize,
    /// Minimum raw score for a link to be emitted.
    pub link_threshold: f64,
}

impl Default for LinkWeights {
    fn default() -> Self {
        Self {
            shared_tag: 0.3,
            same_date: 0.2,
            shared_title_word: 0.15,
            min_title_word_chars: 3,
            link_threshold: 0.2,
        }
    }
}

impl LinkWeights {
    /// Validates weight ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("shared_tag", self.shared_tag),
            ("same_date", self.same_date),
            ("shared_title_word", self.shared_title_word),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "weight `{name}` must be a finite non-negative number, got {value}"
                )));
            }
        }

        if !self.link_threshold.is_finite()
            || self.link_threshold <= 0.0
            || self.link_threshold > 1.0
        {
            return Err(ConfigError::Invalid(format!(
                "link_threshold must be within (0, 1], got {}",
                self.link_threshold
            )));
        }

        Ok(())
    }
}

/// Extraction and linking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Significant words tagged when found anywhere in a node's content.
    pub keywords: Vec<String>,
    pub weights: LinkWeights,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
            weights: LinkWeights::default(),
        }
    }
}

impl GraphConfig {
    /// Creates a config with a custom vocabulary and default weights.
    ///
    /// The vocabulary is normalized the same way file-loaded configs are.
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self {
            keywords: keywords
                .into_iter()
                .map(|kw| kw.as_ref().to_string())
                .collect(),
            weights: LinkWeights::default(),
        };
        config.normalize();
        config
    }

    /// Reads, normalizes and validates a JSON config file.
    ///
    /// Missing fields fall back to defaults.
    ///
    /// # Errors
    /// - `ConfigError::Io` when the file cannot be read.
    /// - `ConfigError::Parse` when the content is not a valid config object.
    /// - `ConfigError::Invalid` when a value is out of range.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parses, normalizes and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Trims, lowercases and de-duplicates the keyword vocabulary.
    pub fn normalize(&mut self) {
        let mut normalized = Vec::<String>::with_capacity(self.keywords.len());
        for keyword in &self.keywords {
            let value = keyword.trim().to_lowercase();
            if value.is_empty() || normalized.contains(&value) {
                continue;
            }
            normalized.push(value);
        }
        self.keywords = normalized;
    }

    /// Validates weight ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }
}

/// Where the build finds markdown documents under a memory directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    /// Long-term memory file, relative to the memory directory.
    pub long_term_file: String,
    /// Daily log directory, relative to the memory directory.
    pub daily_dir: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            long_term_file: DEFAULT_LONG_TERM_FILE.to_string(),
            daily_dir: DEFAULT_DAILY_DIR.to_string(),
        }
    }
}

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
