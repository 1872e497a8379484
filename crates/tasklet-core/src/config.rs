use anyhow::Context;
use serde::Deserialize;

use crate::storage::DEFAULT_STORAGE_KEY;
use crate::view::{
  FilterMode,
  SortMode
};

/// Widget settings shipped as a TOML asset.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct WidgetConfig {
  pub storage_key:    String,
  pub title:          String,
  pub placeholder:    String,
  pub default_sort:   String,
  pub default_filter: String
}

impl Default for WidgetConfig {
  fn default() -> Self {
    Self {
      storage_key:    DEFAULT_STORAGE_KEY
        .to_string(),
      title:          "To-Do List"
        .to_string(),
      placeholder:    "Enter a task"
        .to_string(),
      default_sort:   SortMode::Default
        .as_str()
        .to_string(),
      default_filter: FilterMode::All
        .as_str()
        .to_string()
    }
  }
}

impl WidgetConfig {
  pub fn from_toml(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<WidgetConfig>(raw)
        .context(
          "failed to parse widget config"
        )?;

    if config.storage_key.trim().is_empty()
    {
      tracing::warn!(
        "blank storage key; using \
         default"
      );
      config.storage_key =
        DEFAULT_STORAGE_KEY.to_string();
    }
    Ok(config)
  }

  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml(raw) {
      | Ok(config) => {
        tracing::info!(
          storage_key = %config.storage_key,
          "loaded widget config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(error = %format!("{error:#}"), "failed to parse widget config; using defaults");
        Self::default()
      }
    }
  }

  pub fn sort(&self) -> SortMode {
    self
      .default_sort
      .parse()
      .unwrap_or_else(|error| {
        tracing::warn!(%error, "invalid default sort; using default");
        SortMode::default()
      })
  }

  pub fn filter(&self) -> FilterMode {
    self
      .default_filter
      .parse()
      .unwrap_or_else(|error| {
        tracing::warn!(%error, "invalid default filter; using all");
        FilterMode::default()
      })
  }
}
