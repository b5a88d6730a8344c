//! Configuration management for hotel-forms
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `HOTEL_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/hotel-forms/{service}/config.toml` (user config, XDG)
//! 4. `/etc/hotel-forms/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [toast]
//! duration_ms = 3000
//!
//! [site]
//! partials_dir = "./public"
//! videos = ["videos/video1.mp4", "videos/video2.mp4"]
//!
//! [booking]
//! advance_years = 1
//!
//! [[forms]]
//! id = "callback-form"
//! success_message = "Ще се свържем с Вас."
//!
//! [[forms.fields]]
//! id = "phone"
//! required = true
//! message = "Моля въведете телефон."
//! ```
//!
//! Declaring `[[forms]]` replaces the built-in contact and reservation tables.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::HotelFormsError;
use crate::forms::{presets, FormSchema};

/// Toast settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ToastSettings {
    /// How long confirmation messages stay visible
    #[validate(range(min = 1, max = 60000))]
    pub duration_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

impl ToastSettings {
    /// Toast duration as a [`Duration`]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Page glue settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SiteSettings {
    /// Directory holding the shared HTML partials
    pub partials_dir: PathBuf,

    /// Header partial, relative to `partials_dir`
    #[validate(length(min = 1))]
    pub header_partial: String,

    /// Footer partial, relative to `partials_dir`
    #[validate(length(min = 1))]
    pub footer_partial: String,

    /// Element receiving the header
    pub header_placeholder: String,

    /// Element receiving the footer
    pub footer_placeholder: String,

    /// Background video playlist, played in order and looped
    #[validate(length(min = 1))]
    pub videos: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            partials_dir: PathBuf::from("./public"),
            header_partial: "header.html".to_string(),
            footer_partial: "footer.html".to_string(),
            header_placeholder: "header-placeholder".to_string(),
            footer_placeholder: "footer-placeholder".to_string(),
            videos: (1..=5).map(|n| format!("videos/video{n}.mp4")).collect(),
        }
    }
}

/// Reservation settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookingSettings {
    /// How many years ahead an arrival date may be booked
    #[validate(range(min = 1, max = 5))]
    pub advance_years: u32,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self { advance_years: 1 }
    }
}

/// Complete hotel-forms configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SiteConfig {
    /// Toast settings
    #[serde(default)]
    #[validate(nested)]
    pub toast: ToastSettings,

    /// Page glue settings
    #[serde(default)]
    #[validate(nested)]
    pub site: SiteSettings,

    /// Reservation settings
    #[serde(default)]
    #[validate(nested)]
    pub booking: BookingSettings,

    /// Form tables
    #[serde(default = "presets::all")]
    pub forms: Vec<FormSchema>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            toast: ToastSettings::default(),
            site: SiteSettings::default(),
            booking: BookingSettings::default(),
            forms: presets::all(),
        }
    }
}

impl SiteConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`HOTEL_*`, use `__` for nesting)
    /// 2. `./config.toml`
    /// 3. `~/.config/hotel-forms/{service_name}/config.toml`
    /// 4. `/etc/hotel-forms/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Values fail validation (see [`Self::check`])
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hotel_forms::config::SiteConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = SiteConfig::load_for_service("hotel-site")?;
    /// let duration = config.toast.duration();
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config
        let system_config = PathBuf::from("/etc/hotel-forms")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables
        figment = figment.merge(Env::prefixed("HOTEL_").split("__").lowercase(true));

        let config: Self = figment.extract()?;
        config.check()?;
        tracing::debug!(service = service_name, forms = config.forms.len(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults (plus environment overrides).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid TOML, does not match the
    /// configuration shape, or fails validation.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hotel_forms::config::SiteConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = SiteConfig::load_from("./config/production.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config: Self = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("HOTEL_").split("__").lowercase(true))
            .extract()?;
        config.check()?;
        Ok(config)
    }

    /// Validate value ranges and require unique form ids
    ///
    /// # Errors
    ///
    /// Returns [`HotelFormsError::InvalidConfig`] for out-of-range values and
    /// [`HotelFormsError::Config`] when two forms share an id.
    pub fn check(&self) -> Result<(), HotelFormsError> {
        self.validate()?;

        let mut seen = HashSet::new();
        for form in &self.forms {
            if !seen.insert(form.id()) {
                return Err(HotelFormsError::Config(format!(
                    "form '{}' is configured more than once",
                    form.id()
                )));
            }
        }
        Ok(())
    }

    /// Find a form table by id
    ///
    /// # Errors
    ///
    /// Returns [`HotelFormsError::UnknownForm`] if no form has this id.
    pub fn form(&self, id: &str) -> Result<&FormSchema, HotelFormsError> {
        self.forms
            .iter()
            .find(|form| form.id() == id)
            .ok_or_else(|| HotelFormsError::UnknownForm(id.to_string()))
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use hotel_forms::config::SiteConfig;
    ///
    /// let path = SiteConfig::recommended_path("hotel-site");
    /// // Returns: ~/.config/hotel-forms/hotel-site/config.toml
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("hotel-forms")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}
