//! # Engine Configuration
//!
//! Layered runtime configuration:
//!
//! 1. Built-in defaults (production endpoint, standard timeouts)
//! 2. An optional TOML file named by the `FAIRFARE_CONFIG` variable
//! 3. `FAIRFARE_*` environment overrides, nested keys separated by
//!    `__` (for example `FAIRFARE_LIVE_PROVIDER__BASE_URL`)
//!
//! Later layers win. [`EngineConfig::default`] is always valid, so a
//! bare environment runs against production defaults.
//!
//! # Examples
//!
//! ```
//! use fairfare::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.live_provider().base_url(), "https://nammayatri.in/api");
//! assert!(config.fixed_surge().is_none());
//! ```

use crate::domain::services::eligibility::{EligibilityPolicy, ExclusionZone};
use crate::domain::services::surge::{FixedSurge, SurgeModel, TimeOfDaySurge};
use crate::domain::value_objects::{BoundingBox, Provider};
use crate::infrastructure::providers::namma_yatri::{
    DEFAULT_BASE_URL, DEFAULT_SETTLE_DELAY_MS, DEFAULT_TIMEOUT_MS,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "FAIRFARE";

/// Environment variable naming an optional TOML file.
const CONFIG_PATH_VAR: &str = "FAIRFARE_CONFIG";

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized.
    #[error("configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// An exclusion zone names a provider this engine does not know.
    #[error("unknown provider in exclusion zone: {0}")]
    UnknownProvider(String),
}

/// Connection settings for the live provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LiveProviderConfig {
    base_url: String,
    timeout_ms: u64,
    settle_delay_ms: u64,
}

impl Default for LiveProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl LiveProviderConfig {
    /// Sets the endpoint base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout in milliseconds.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the wait between the search and estimates phases in
    /// milliseconds.
    #[must_use]
    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    /// Returns the endpoint base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the settle delay in milliseconds.
    #[inline]
    #[must_use]
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }

    /// Returns the settle delay as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// One configured exclusion zone, keyed by provider id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExclusionZoneConfig {
    provider: String,
    keyword: String,
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl ExclusionZoneConfig {
    /// Returns the provider id this zone applies to.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the address keyword matched by this zone.
    #[inline]
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Resolves the configured id and bounds into domain types.
    fn resolve(&self) -> Result<(Provider, ExclusionZone), ConfigError> {
        let provider = self
            .provider
            .parse::<Provider>()
            .map_err(|_| ConfigError::UnknownProvider(self.provider.clone()))?;
        let zone = ExclusionZone::new(
            &self.keyword,
            BoundingBox::new(self.min_lat, self.max_lat, self.min_lng, self.max_lng),
        );
        Ok((provider, zone))
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    live_provider: LiveProviderConfig,
    exclusion_zones: Vec<ExclusionZoneConfig>,
    fixed_surge: Option<f64>,
}

impl EngineConfig {
    /// Loads configuration from all layers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the named file is missing or
    /// unparseable, or if an override has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            builder = builder.add_source(File::from(PathBuf::from(path)));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Sets the live provider settings.
    #[must_use]
    pub fn with_live_provider(mut self, live_provider: LiveProviderConfig) -> Self {
        self.live_provider = live_provider;
        self
    }

    /// Pins surge to a fixed multiplier instead of time-of-day draws.
    #[must_use]
    pub fn with_fixed_surge(mut self, multiplier: f64) -> Self {
        self.fixed_surge = Some(multiplier);
        self
    }

    /// Returns the live provider settings.
    #[inline]
    #[must_use]
    pub fn live_provider(&self) -> &LiveProviderConfig {
        &self.live_provider
    }

    /// Returns the configured exclusion zones.
    #[inline]
    #[must_use]
    pub fn exclusion_zones(&self) -> &[ExclusionZoneConfig] {
        &self.exclusion_zones
    }

    /// Returns the pinned surge multiplier, if any.
    #[inline]
    #[must_use]
    pub fn fixed_surge(&self) -> Option<f64> {
        self.fixed_surge
    }

    /// Builds the eligibility policy: the standard zones plus every
    /// configured one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProvider`] if a zone names a
    /// provider id that does not parse.
    pub fn eligibility_policy(&self) -> Result<EligibilityPolicy, ConfigError> {
        let mut policy = EligibilityPolicy::with_default_zones();
        for config in &self.exclusion_zones {
            let (provider, zone) = config.resolve()?;
            policy = policy.with_exclusion(provider, zone);
        }
        Ok(policy)
    }

    /// Builds the surge model: fixed when pinned, time-of-day draws
    /// otherwise.
    #[must_use]
    pub fn surge_model(&self) -> Arc<dyn SurgeModel> {
        match self.fixed_surge {
            Some(multiplier) => Arc::new(FixedSurge::new(multiplier)),
            None => Arc::new(TimeOfDaySurge::new()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Location;
    use config::FileFormat;

    #[test]
    fn defaults_point_at_production() {
        let config = EngineConfig::default();
        assert_eq!(config.live_provider().base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.live_provider().timeout_ms(), 5_000);
        assert_eq!(config.live_provider().settle_delay_ms(), 1_000);
        assert_eq!(
            config.live_provider().settle_delay(),
            Duration::from_millis(1_000)
        );
        assert!(config.exclusion_zones().is_empty());
        assert!(config.fixed_surge().is_none());
    }

    #[test]
    fn toml_layer_overrides_defaults() {
        let toml = r#"
            fixed_surge = 1.25

            [live_provider]
            base_url = "https://staging.test/api"
            settle_delay_ms = 50

            [[exclusion_zones]]
            provider = "namma-yatri"
            keyword = "shimla"
            min_lat = 31.0
            max_lat = 31.2
            min_lng = 77.1
            max_lng = 77.3
        "#;
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        let config: EngineConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.live_provider().base_url(), "https://staging.test/api");
        assert_eq!(config.live_provider().settle_delay_ms(), 50);
        // Untouched keys keep their defaults.
        assert_eq!(config.live_provider().timeout_ms(), 5_000);
        assert_eq!(config.fixed_surge(), Some(1.25));
        assert_eq!(config.exclusion_zones().len(), 1);
        assert_eq!(config.exclusion_zones().first().unwrap().keyword(), "shimla");
    }

    #[test]
    fn configured_zones_extend_the_default_policy() {
        let toml = r#"
            [[exclusion_zones]]
            provider = "ola"
            keyword = "shimla"
            min_lat = 31.0
            max_lat = 31.2
            min_lng = 77.1
            max_lng = 77.3
        "#;
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        let config: EngineConfig = settings.try_deserialize().unwrap();
        let policy = config.eligibility_policy().unwrap();

        let shimla = Location::new("Mall Road, Shimla", 31.1048, 77.1734, "p");
        let chandigarh = Location::new("Sector 17, Chandigarh", 30.7410, 76.7790, "q");
        assert!(!policy.is_eligible(Provider::Ola, &shimla));
        // The standard zones are still in force.
        assert!(!policy.is_eligible(Provider::NammaYatri, &chandigarh));
        assert!(policy.is_eligible(Provider::Uber, &shimla));
    }

    #[test]
    fn unknown_provider_in_zone_is_rejected() {
        let zone = ExclusionZoneConfig {
            provider: "rapido".to_string(),
            keyword: "anywhere".to_string(),
            min_lat: 0.0,
            max_lat: 1.0,
            min_lng: 0.0,
            max_lng: 1.0,
        };
        let config = EngineConfig {
            live_provider: LiveProviderConfig::default(),
            exclusion_zones: vec![zone],
            fixed_surge: None,
        };

        let err = config.eligibility_policy().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider(ref p) if p == "rapido"));
        assert!(err.to_string().contains("rapido"));
    }

    #[test]
    fn pinned_surge_builds_a_fixed_model() {
        let config = EngineConfig::default().with_fixed_surge(1.3);
        let model = config.surge_model();
        let first = model.current_multiplier();
        let second = model.current_multiplier();
        assert!((first - 1.3).abs() < f64::EPSILON);
        assert!((second - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn unpinned_surge_draws_within_published_bounds() {
        let model = EngineConfig::default().surge_model();
        for _ in 0..50 {
            let multiplier = model.current_multiplier();
            assert!((1.0..1.5).contains(&multiplier), "out of range: {multiplier}");
        }
    }

    #[test]
    fn builder_setters_override_fields() {
        let config = EngineConfig::default().with_live_provider(
            LiveProviderConfig::default()
                .with_base_url("https://mock.test")
                .with_timeout_ms(250)
                .with_settle_delay_ms(10),
        );
        assert_eq!(config.live_provider().base_url(), "https://mock.test");
        assert_eq!(config.live_provider().timeout_ms(), 250);
        assert_eq!(config.live_provider().settle_delay_ms(), 10);
    }
}
