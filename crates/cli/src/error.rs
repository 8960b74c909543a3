// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use watchbill::CoreError;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a roster configuration.
    #[error("Failed to parse configuration {path}: {source}")]
    ParseConfig {
        path: String,
        source: serde_json::Error,
    },

    /// The export directory could not be prepared or written.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A CSV sheet could not be written.
    #[error("Failed to write sheet {path}: {source}")]
    WriteSheet { path: String, source: csv::Error },

    /// The run could not be rendered as JSON.
    #[error("Failed to render run as JSON: {0}")]
    RenderJson(#[from] serde_json::Error),

    /// The engine rejected the configuration.
    #[error(transparent)]
    Engine(#[from] CoreError),

    /// Validation failed and `--strict` was given.
    #[error("Roster failed validation: {failed}")]
    ValidationFailed { failed: String },
}
