// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors raised while loading or resolving scheduler configuration.
///
/// The interval queries and grid helpers never fail; only configuration does.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the month, week or day views is enabled.
    #[error("No views were selected: enable at least one of month, week or day")]
    NoViewEnabled,

    /// The configuration could not be parsed or holds invalid values.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("Failed to read config file at {}: {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result alias with the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
