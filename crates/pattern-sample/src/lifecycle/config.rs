//! # Configuration
//!
//! Which demos run is read from the `PATTERN_DEMOS` environment variable, a
//! comma-separated list of names:
//!
//! ```bash
//! PATTERN_DEMOS=builder,observer cargo run -p pattern-sample
//! ```
//!
//! Names are case-insensitive. Unknown names are skipped with a warning; if nothing valid
//! remains, every demo runs. Demos always run in their canonical order, at most once.
//!
//! The environment is read once per process: [`DemoConfig::global`] is the singleton demo.

use super::error::DemoError;
use pattern_framework::Singleton;
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Environment variable holding the demo selection.
pub const DEMOS_ENV: &str = "PATTERN_DEMOS";

static GLOBAL: Singleton<DemoConfig> = Singleton::new("demo_config");

/// One runnable demo, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demo {
    Singleton,
    Strategy,
    Decorator,
    Builder,
    Factory,
    Observer,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Singleton,
        Demo::Strategy,
        Demo::Decorator,
        Demo::Builder,
        Demo::Factory,
        Demo::Observer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Singleton => "singleton",
            Demo::Strategy => "strategy",
            Demo::Decorator => "decorator",
            Demo::Builder => "builder",
            Demo::Factory => "factory",
            Demo::Observer => "observer",
        }
    }
}

impl FromStr for Demo {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let de: StrDeserializer<'_, ValueError> = name.as_str().into_deserializer();
        Demo::deserialize(de).map_err(|_| DemoError::UnknownDemo(s.trim().to_string()))
    }
}

/// The selected demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    demos: Vec<Demo>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demos: Demo::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Parses a selection such as `"decorator, Builder"`.
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };

        let mut demos: Vec<Demo> = value
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .filter_map(|part| match part.parse::<Demo>() {
                Ok(demo) => Some(demo),
                Err(e) => {
                    warn!(error = %e, "Skipping demo");
                    None
                }
            })
            .collect();
        demos.sort();
        demos.dedup();

        if demos.is_empty() {
            debug!(value, "No demos selected, running all");
            return Self::default();
        }
        Self { demos }
    }

    /// Reads [`DEMOS_ENV`].
    pub fn from_env() -> Self {
        let value = std::env::var(DEMOS_ENV).ok();
        Self::from_value(value.as_deref())
    }

    /// The process-wide configuration, read from the environment on first use.
    pub fn global() -> Result<&'static DemoConfig, DemoError> {
        Ok(GLOBAL.get_or_init(Self::from_env)?)
    }

    pub fn demos(&self) -> &[Demo] {
        &self.demos
    }

    pub fn is_enabled(&self, demo: Demo) -> bool {
        self.demos.contains(&demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_names_parse_case_insensitively() {
        assert_eq!(" Builder ".parse::<Demo>(), Ok(Demo::Builder));
        assert_eq!("OBSERVER".parse::<Demo>(), Ok(Demo::Observer));
        assert_eq!(
            "visitor".parse::<Demo>(),
            Err(DemoError::UnknownDemo("visitor".into()))
        );
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>(), Ok(demo));
        }
    }

    #[test]
    fn test_missing_or_empty_selects_all() {
        assert_eq!(DemoConfig::from_value(None).demos(), &Demo::ALL);
        assert_eq!(DemoConfig::from_value(Some("")).demos(), &Demo::ALL);
        assert_eq!(DemoConfig::from_value(Some(" , ")).demos(), &Demo::ALL);
    }

    #[test]
    fn test_selection_is_canonical_and_deduplicated() {
        let config = DemoConfig::from_value(Some("observer,builder,visitor,builder"));
        assert_eq!(config.demos(), &[Demo::Builder, Demo::Observer]);
        assert!(!config.is_enabled(Demo::Factory));
    }

    #[test]
    fn test_only_unknown_names_selects_all() {
        assert_eq!(DemoConfig::from_value(Some("visitor")).demos(), &Demo::ALL);
    }
}
