//! Project configuration for Kiln.
//!
//! This module provides the main `KilnConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module; for layered loading with
//! environment overrides, see the `loader` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::resolver::ProfileResolver;
use crate::settings::GlobalSettings;
use crate::tables::ResolverTables;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KilnConfig {
    #[serde(default)]
    pub tables: ResolverTables,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

/// Partial overrides applied by [`KilnConfig::materialize_profile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub tables: Value,

    #[serde(default)]
    pub settings: Value,
}

impl KilnConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::KilnConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "tables": {
    ///         "dev_server": { "port": 9000 }
    ///     }
    /// });
    ///
    /// let config = KilnConfig::from_value(value).unwrap();
    /// assert_eq!(config.tables.dev_server.port, 9000);
    /// assert_eq!(config.tables.dev_server.host, "0.0.0.0");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Resolver over this config's tables.
    pub fn resolver(&self) -> ProfileResolver {
        ProfileResolver::new(self.tables.clone())
    }

    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl KilnConfig {
    /// Apply the overrides of profile `profile` on top of the base config.
    ///
    /// Objects merge key by key, arrays and scalars replace. `None` returns
    /// the config unchanged.
    ///
    /// # Errors
    ///
    /// `UnknownProfile` when the name is not declared, and
    /// `InvalidProfileOverride` when the merged value no longer deserializes.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let profile_cfg =
            self.profiles
                .get(name)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownProfile {
                    name: name.to_string(),
                })?;

        if !profile_cfg.tables.is_null() {
            self.tables = apply_override(&self.tables, &profile_cfg.tables)?;
        }

        if !profile_cfg.settings.is_null() {
            self.settings = apply_override(&self.settings, &profile_cfg.settings)?;
        }

        tracing::debug!(profile = name, "materialized profile overrides");
        Ok(self)
    }
}

fn apply_override<T>(base: &T, update: &Value) -> ConfigResult<T>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let mut merged = serde_json::to_value(base).map_err(|err| {
        ConfigError::InvalidProfileOverride {
            message: err.to_string(),
        }
    })?;
    merge_values(&mut merged, update);
    serde_json::from_value(merged).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
