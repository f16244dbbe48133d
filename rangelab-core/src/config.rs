//! Slider configuration.
//!
//! Two layers:
//! - `SliderConfig` — construction parameters, including the value formatter.
//! - `SliderSettings` — the serializable subset, loaded from TOML and
//!   overridable from the command line. Converts into a `SliderConfig`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Bounds, Selection, SliderError, DEFAULT_MAX, DEFAULT_MIN};

/// Suffix appended by the default formatter.
pub const DEFAULT_SUFFIX: &str = " ₽";

/// Display formatter applied to floored selection values.
pub type Formatter = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Formatter printing the value followed by `suffix`.
pub fn suffix_formatter(suffix: impl Into<String>) -> Formatter {
    let suffix = suffix.into();
    Box::new(move |value| format!("{value}{suffix}"))
}

/// Construction parameters for a `RangeSlider`.
pub struct SliderConfig {
    /// Lower bound of the track. Default 320.
    pub min: f64,
    /// Upper bound of the track. Must exceed `min`. Default 980.
    pub max: f64,
    /// Label formatter. Receives floored values; never affects stored state.
    /// Default appends ` ₽`.
    pub format_value: Formatter,
    /// Initial selection. `None` selects the full `[min, max]` range.
    pub selected: Option<Selection>,
}

impl SliderConfig {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    pub fn with_formatter(mut self, format_value: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.format_value = Box::new(format_value);
        self
    }

    pub fn with_selected(mut self, from: f64, to: f64) -> Self {
        self.selected = Some(Selection::new(from, to));
        self
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            format_value: suffix_formatter(DEFAULT_SUFFIX),
            selected: None,
        }
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

/// Errors from loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SliderError),
}

/// Serializable slider settings.
///
/// ```toml
/// min = 0
/// max = 100
/// suffix = " $"
///
/// [selected]
/// from = 20
/// to = 80
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    pub min: f64,
    pub max: f64,
    pub suffix: String,
    pub selected: Option<Selection>,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            suffix: DEFAULT_SUFFIX.to_string(),
            selected: None,
        }
    }
}

/// Command-line overrides layered on top of file settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub suffix: Option<String>,
}

impl SliderSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: SliderSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Resolved bounds and initial selection.
    pub fn resolve(&self) -> Result<(Bounds, Selection), ConfigError> {
        let bounds = Bounds::new(self.min, self.max)?;
        let selection = match self.selected {
            Some(s) => s.validate(&bounds)?,
            None => Selection::full(&bounds),
        };
        Ok((bounds, selection))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Apply overrides. A lone `from` or `to` keeps the other end of the
    /// current selection, or of the full range when none is set.
    pub fn apply_overrides(&mut self, overrides: SettingsOverrides) {
        if let Some(min) = overrides.min {
            self.min = min;
        }
        if let Some(max) = overrides.max {
            self.max = max;
        }
        if let Some(suffix) = overrides.suffix {
            self.suffix = suffix;
        }
        if overrides.from.is_some() || overrides.to.is_some() {
            let base = self.selected.unwrap_or(Selection::new(self.min, self.max));
            self.selected = Some(Selection::new(
                overrides.from.unwrap_or(base.from),
                overrides.to.unwrap_or(base.to),
            ));
        }
    }

    pub fn to_config(&self) -> SliderConfig {
        SliderConfig {
            min: self.min,
            max: self.max,
            format_value: suffix_formatter(self.suffix.clone()),
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter_appends_currency() {
        let config = SliderConfig::default();
        assert_eq!((config.format_value)(320.0), "320 ₽");
        assert_eq!((config.format_value)(-4.0), "-4 ₽");
    }

    #[test]
    fn builder_sets_fields() {
        let config = SliderConfig::new(0.0, 100.0)
            .with_selected(20.0, 80.0)
            .with_formatter(|v| format!("${v}"));
        assert_eq!(config.min, 0.0);
        assert_eq!(config.selected, Some(Selection::new(20.0, 80.0)));
        assert_eq!((config.format_value)(5.0), "$5");
    }

    #[test]
    fn empty_toml_is_default() {
        let settings = SliderSettings::from_toml_str("").unwrap();
        assert_eq!(settings, SliderSettings::default());
    }

    #[test]
    fn toml_with_selection() {
        let settings = SliderSettings::from_toml_str(
            "min = 0.0\nmax = 100.0\nsuffix = \" pts\"\n\n[selected]\nfrom = 20.0\nto = 80.0\n",
        )
        .unwrap();
        let (bounds, selection) = settings.resolve().unwrap();
        assert_eq!(bounds.max(), 100.0);
        assert_eq!(selection, Selection::new(20.0, 80.0));
        assert_eq!((settings.to_config().format_value)(20.0), "20 pts");
    }

    #[test]
    fn invalid_bounds_rejected() {
        let err = SliderSettings::from_toml_str("min = 5.0\nmax = 5.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(SliderError::InvalidBounds { .. })));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = SliderSettings::from_toml_str("min = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_fill_missing_selection_end() {
        let mut settings = SliderSettings::default();
        settings.apply_overrides(SettingsOverrides {
            min: Some(0.0),
            max: Some(100.0),
            from: Some(30.0),
            ..Default::default()
        });
        assert_eq!(settings.selected, Some(Selection::new(30.0, 100.0)));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn settings_roundtrip_through_toml() {
        let mut settings = SliderSettings::default();
        settings.selected = Some(Selection::new(400.0, 900.0));
        let text = settings.to_toml_string().unwrap();
        let back = SliderSettings::from_toml_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
