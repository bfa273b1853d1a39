//! Configuration loading and management

use crate::core::ConfigError;
use crate::core::order::{NewOrder, PaymentStatus};
use crate::core::query::VisibilityFilter;
use crate::storage::DEFAULT_FIRST_ID;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

/// Bounds of the max-distance control, in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self { min: 1.0, max: 20.0 }
    }
}

impl DistanceRange {
    /// Clamp `value` into the range; NaN falls back to `min`
    ///
    /// Never panics. An inverted range yields `max`, and a NaN bound is
    /// ignored.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.max(self.min).min(self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Complete configuration for a dispatch board session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Id given to the first stored order
    pub first_order_id: u64,

    /// Initial assignment threshold, in kilometers
    pub max_distance: f64,

    /// Allowed range for the assignment threshold
    pub distance_range: DistanceRange,

    /// Initial list filter
    pub visibility: VisibilityFilter,

    /// Orders inserted when the board starts
    pub seed_orders: Vec<NewOrder>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            first_order_id: DEFAULT_FIRST_ID,
            max_distance: 5.0,
            distance_range: DistanceRange::default(),
            visibility: VisibilityFilter::default(),
            seed_orders: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let config: Self = parse_yaml(&read_config_file(path)?, Some(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = parse_yaml(yaml, None)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the numeric settings are consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = self.distance_range;
        if !range.min.is_finite() || range.min < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "distanceRange.min".to_string(),
                value: range.min.to_string(),
                message: "must be a finite number, zero or more".to_string(),
            });
        }
        if !range.max.is_finite() || range.max < range.min {
            return Err(ConfigError::InvalidValue {
                field: "distanceRange.max".to_string(),
                value: range.max.to_string(),
                message: format!("must be finite and not below min ({})", range.min),
            });
        }
        if !range.contains(self.max_distance) {
            return Err(ConfigError::InvalidValue {
                field: "maxDistance".to_string(),
                value: self.max_distance.to_string(),
                message: format!("must lie within {}..={}", range.min, range.max),
            });
        }
        Ok(())
    }

    /// Merge configuration layers on top of the defaults
    ///
    /// Only the settings a layer sets override earlier ones; seed orders are
    /// concatenated in the order the layers are given. The result is
    /// validated once every layer is applied.
    pub fn merge(layers: Vec<BoardConfigLayer>) -> Result<Self, ConfigError> {
        let mut merged = Self::default();
        for layer in layers {
            layer.apply_to(&mut merged);
        }
        merged.validate()?;
        Ok(merged)
    }

    /// Board preloaded with three sample orders
    pub fn default_config() -> Self {
        Self {
            seed_orders: vec![
                NewOrder::new("Burger King", "Whopper Burger", 2, 3.5, PaymentStatus::Unpaid),
                NewOrder::new("Dominos", "Farmhouse Pizza", 1, 8.0, PaymentStatus::Paid),
                NewOrder::new("KFC", "Chicken Bucket", 4, 2.1, PaymentStatus::Unpaid),
            ],
            ..Self::default()
        }
    }
}

/// Visibility settings a layer may override
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisibilityLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_unpaid: Option<bool>,
}

/// One partial configuration file, as used by [`BoardConfig::merge`]
///
/// Keys missing from the file stay `None` and leave earlier values alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfigLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_range: Option<DistanceRange>,
    pub visibility: VisibilityLayer,
    pub seed_orders: Vec<NewOrder>,
}

impl BoardConfigLayer {
    /// Load a layer from a YAML file, without validating it
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        parse_yaml(&read_config_file(path)?, Some(path))
    }

    /// Load a layer from a YAML string, without validating it
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        parse_yaml(yaml, None)
    }

    fn apply_to(self, config: &mut BoardConfig) {
        if let Some(first_order_id) = self.first_order_id {
            config.first_order_id = first_order_id;
        }
        if let Some(max_distance) = self.max_distance {
            config.max_distance = max_distance;
        }
        if let Some(distance_range) = self.distance_range {
            config.distance_range = distance_range;
        }
        if let Some(show_paid) = self.visibility.show_paid {
            config.visibility.show_paid = show_paid;
        }
        if let Some(show_unpaid) = self.visibility.show_unpaid {
            config.visibility.show_unpaid = show_unpaid;
        }
        config.seed_orders.extend(self.seed_orders);
    }
}

impl From<BoardConfig> for BoardConfigLayer {
    fn from(config: BoardConfig) -> Self {
        Self {
            first_order_id: Some(config.first_order_id),
            max_distance: Some(config.max_distance),
            distance_range: Some(config.distance_range),
            visibility: VisibilityLayer {
                show_paid: Some(config.visibility.show_paid),
                show_unpaid: Some(config.visibility.show_unpaid),
            },
            seed_orders: config.seed_orders,
        }
    }
}

fn read_config_file(path: &str) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_string(),
        },
        _ => ConfigError::IoError {
            message: e.to_string(),
        },
    })
}

fn parse_yaml<T: DeserializeOwned>(yaml: &str, file: Option<&str>) -> Result<T, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
        file: file.map(str::to_string),
        message: e.to_string(),
    })
}
