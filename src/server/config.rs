//! Server configuration profile and the feature toggle set.

use std::path::PathBuf;

/// Standalone configuration profile the server starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerConfig {
    #[default]
    Standalone,
    Microprofile,
    Full,
    FullHa,
}

impl ServerConfig {
    /// Pick the profile from the toggle set. When several profile flags are
    /// set the most specific wins: microprofile, then full, then ha.
    #[must_use]
    pub fn from_toggles(toggles: &FeatureToggles) -> Self {
        if toggles.microprofile {
            Self::Microprofile
        } else if toggles.full {
            Self::Full
        } else if toggles.ha {
            Self::FullHa
        } else {
            Self::Standalone
        }
    }

    /// Configuration file name passed to `--server-config` and `-c`.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Standalone => "standalone.xml",
            Self::Microprofile => "standalone-microprofile.xml",
            Self::Full => "standalone-full.xml",
            Self::FullHa => "standalone-full-ha.xml",
        }
    }
}

/// Immutable per-run feature toggles, built once from the CLI flags and
/// passed by reference through the pipeline.
#[derive(Debug, Clone, Default)]
pub struct FeatureToggles {
    /// Wipe the current installation and re-extract before starting.
    pub clean: bool,
    /// Set console and root logger levels to DEBUG.
    pub debug_logging: bool,
    /// Add the OpenTelemetry extension and subsystem.
    pub otel: bool,
    /// Add the Micrometer extension and subsystem.
    pub micrometer: bool,
    pub microprofile: bool,
    pub full: bool,
    pub ha: bool,
    /// Make the debug agent suspend the JVM until a debugger attaches.
    pub suspend: bool,
    /// Stop after configuration without starting the server.
    pub dry_run: bool,
    /// Extra management command files, applied in the given order.
    pub command_files: Vec<PathBuf>,
}
