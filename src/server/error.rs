//! Typed pipeline errors.
//!
//! One variant per terminal failure state of the run pipeline, so callers
//! can branch on the failure kind instead of parsing messages. All variants
//! are fatal: the first one raised aborts the remaining stages.

use std::path::PathBuf;

use thiserror::Error;

/// Terminal failure states of a `startserver` run.
#[derive(Debug, Error)]
pub enum RunError {
    /// No usable installation could be located, or a located one is missing
    /// its expected executables.
    #[error("server resolution failed: {0}")]
    Resolution(String),

    /// The external archive tool reported failure.
    #[error("failed to extract {archive} (unzip exited with status {code})")]
    Extraction { archive: PathBuf, code: i32 },

    /// An external process could not be spawned or waited on.
    #[error("failed to run {program}: {reason}")]
    Spawn {
        program: String,
        reason: anyhow::Error,
    },

    /// The debug configuration file could not be read or written.
    #[error("failed to update {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An extra command file could not be read.
    #[error("failed to read command file {path}: {source}")]
    CommandFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The management CLI rejected the command batch.
    #[error("jboss-cli rejected the command batch (exit status {code})")]
    CliApplication { code: i32 },

    /// The server process exited with a non-zero status.
    #[error("server exited with status {code}")]
    Launch { code: i32 },

    /// The caller cancelled the run while the server was running.
    #[error("run interrupted")]
    Interrupted,
}
