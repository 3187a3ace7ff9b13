// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::str::FromStr;

use crate::grid::{cell_pixel_height, row_pixel_height};
use crate::{Error, FieldSpec, ResourceFields, ResourceMatcher, Result, View, ViewConfig};

/// Configuration for the scheduler time grid.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct SchedulerConfig {
    /// Enabled views.
    #[serde(default)]
    pub views: ViewConfig,

    /// Time grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,

    /// Resource matching, if the scheduler shows resources.
    #[serde(default)]
    pub resources: Option<ResourceFields>,

    /// Editor field definitions.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl SchedulerConfig {
    /// Reads and validates the configuration from a TOML file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = content.parse()?;
        tracing::debug!(views = ?config.views.available_views(), "config loaded");
        Ok(config)
    }

    /// Checks the grid dimensions and that at least one view is enabled.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.views.active_view()?;
        Ok(())
    }

    /// The view shown first.
    pub fn active_view(&self) -> Result<View> {
        self.views.active_view()
    }

    /// The resource matcher, when resources are configured.
    pub fn resource_matcher(&self) -> Option<ResourceMatcher> {
        self.resources
            .as_ref()
            .map(|fields| ResourceMatcher::resolve(fields, &self.fields))
    }
}

impl FromStr for SchedulerConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Dimensions of the time grid.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Total height of the grid table.
    pub height: f64,

    /// Minutes per cell.
    pub step: u32,

    /// First hour shown.
    pub start_hour: u8,

    /// Hour the grid ends at, exclusive.
    pub end_hour: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: 600.0,
            step: 60,
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl GridConfig {
    /// Checks that the dimensions describe a non-empty grid.
    pub fn validate(&self) -> Result<()> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::Config(format!(
                "grid height must be positive, got {}",
                self.height
            )));
        }
        if self.step == 0 {
            return Err(Error::Config("grid step must be positive".to_string()));
        }
        if self.end_hour > 24 || self.start_hour >= self.end_hour {
            return Err(Error::Config(format!(
                "grid hours must satisfy start_hour < end_hour <= 24, got {}..{}",
                self.start_hour, self.end_hour
            )));
        }
        Ok(())
    }

    /// Number of hour rows.
    pub fn hour_count(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Height of one hour row.
    pub fn row_height(&self) -> f64 {
        row_pixel_height(self.height, f64::from(self.hour_count()))
    }

    /// Height of one minute within a row.
    pub fn minute_height(&self) -> f64 {
        cell_pixel_height(self.row_height(), f64::from(self.step))
    }
}
