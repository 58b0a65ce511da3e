//! Logging setup.
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout carries only
//! the rendered conversation.
//!
//! # Example
//!
//! ```
//! use travel_planner::telemetry::{TracingFormat, TracingSettings};
//! use tracing::Level;
//!
//! TracingSettings::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .with_env_filter("voyage_agent=debug,reqwest=warn")
//!     .init();
//! ```

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Single-line output (default).
    #[default]
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

impl core::str::FromStr for TracingFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Subscriber settings.
///
/// Filter precedence: an explicit `env_filter`, then `RUST_LOG`, then
/// `level`.
#[derive(Debug, Clone)]
pub struct TracingSettings {
    /// Maximum log level when no filter is given.
    pub level: Level,
    /// Output format.
    pub format: TracingFormat,
    /// Filter directives, e.g. `voyage_agent=debug,reqwest=warn`.
    pub env_filter: Option<String>,
}

impl Default for TracingSettings {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: TracingFormat::default(),
            env_filter: None,
        }
    }
}

impl TracingSettings {
    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets explicit filter directives.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level.as_str());
        match &self.env_filter {
            Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| fallback()),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
        }
    }

    /// Installs the global subscriber. Does nothing if one is already set.
    pub fn init(&self) {
        let filter = self.filter();
        let installed = match self.format {
            TracingFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            TracingFormat::Compact => tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            TracingFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        if installed.is_ok() {
            tracing::debug!(level = %self.level, format = ?self.format, "logging initialized");
        }
    }
}
