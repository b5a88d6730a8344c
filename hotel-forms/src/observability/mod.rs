//! Logging setup
//!
//! Validation outcomes, toasts and fragment failures are emitted as `tracing`
//! events. Hosts call [`init`] (or [`ObservabilityConfig::init`]) once at start-up
//! to route them somewhere.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// One JSON object per event
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Initialize logging with defaults for the current build profile
///
/// `RUST_LOG` overrides the filter. Debug builds log pretty output at
/// `debug` (`trace` for this crate), release builds log JSON at `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use hotel_forms::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("page initialised");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    ObservabilityConfig::default().init()
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to the start-up event
    pub service_name: String,

    /// Output format
    pub format: LogFormat,

    /// Filter directives used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "hotel-forms".to_string(),
            format: LogFormat::default(),
            default_filter: if cfg!(debug_assertions) {
                "debug,hotel_forms=trace".to_string()
            } else {
                "info".to_string()
            },
        }
    }
}

impl ObservabilityConfig {
    /// Create a config for a named service
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Emit JSON regardless of build profile
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }

    /// Emit pretty output regardless of build profile
    #[must_use]
    pub const fn with_pretty(mut self) -> Self {
        self.format = LogFormat::Pretty;
        self
    }

    /// Replace the fallback filter
    #[must_use]
    pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
        self.default_filter = directives.into();
        self
    }

    /// Filter in effect: `RUST_LOG` if set, otherwise the fallback
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> anyhow::Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Pretty => registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?,
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?,
        }

        tracing::debug!(service = %self.service_name, format = ?self.format, "logging initialised");
        Ok(())
    }
}
