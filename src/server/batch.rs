//! Composing the ordered management-command batch from feature toggles.

use std::path::PathBuf;

use super::config::{FeatureToggles, ServerConfig};
use super::error::RunError;

const LOGGING_COMMANDS: [&str; 2] = [
    "/subsystem=logging/console-handler=CONSOLE:write-attribute(name=level,value=DEBUG)",
    "/subsystem=logging/root-logger=ROOT:write-attribute(name=level,value=DEBUG)",
];

const OTEL_COMMANDS: [&str; 4] = [
    "/extension=org.wildfly.extension.opentelemetry:add()",
    "/subsystem=opentelemetry:add()",
    "/subsystem=opentelemetry:write-attribute(name=sampler-type,value=on)",
    "/subsystem=opentelemetry:write-attribute(name=batch-delay,value=10)",
];

const MICROMETER_COMMANDS: [&str; 3] = [
    "/extension=org.wildfly.extension.micrometer:add",
    "/subsystem=micrometer:add(endpoint=\"http://localhost:4318/v1/metrics\",step=\"1\")",
    "/subsystem=undertow:write-attribute(name=statistics-enabled,value=true)",
];

/// An ordered batch of management commands, immutable after composition.
///
/// The first command is always the `embed-server` preamble; a batch holding
/// nothing else is "trivial" and skips the CLI session entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBatch(Vec<String>);

impl CommandBatch {
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.0
    }

    /// `true` when only the mandatory `embed-server` preamble is present.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.0.len() <= 1
    }

    /// Render the batch as newline-delimited CLI input.
    #[must_use]
    pub fn as_input(&self) -> Vec<u8> {
        let mut input = self.0.join("\n");
        input.push('\n');
        input.into_bytes()
    }
}

/// Compose the command batch. Pure: command-file contents arrive as
/// already-loaded lines (see [`load_command_files`]).
///
/// Fixed order: the `embed-server` preamble, logging commands, OpenTelemetry
/// commands, Micrometer commands, then the extra lines verbatim.
#[must_use]
pub fn compose(toggles: &FeatureToggles, config: ServerConfig, extra: &[String]) -> CommandBatch {
    let mut commands = vec![format!("embed-server --server-config={}", config.file_name())];

    if toggles.debug_logging {
        commands.extend(LOGGING_COMMANDS.map(String::from));
    }
    if toggles.otel {
        commands.extend(OTEL_COMMANDS.map(String::from));
    }
    if toggles.micrometer {
        commands.extend(MICROMETER_COMMANDS.map(String::from));
    }
    commands.extend(extra.iter().cloned());

    CommandBatch(commands)
}

/// Load every command file and flatten their lines, file by file in the
/// given order, each file's lines in file order.
///
/// # Errors
///
/// Returns [`RunError::CommandFile`] naming the first unreadable file.
pub fn load_command_files(files: &[PathBuf]) -> Result<Vec<String>, RunError> {
    let mut lines = Vec::new();
    for path in files {
        let text = std::fs::read_to_string(path).map_err(|source| RunError::CommandFile {
            path: path.clone(),
            source,
        })?;
        lines.extend(text.lines().map(String::from));
    }
    Ok(lines)
}
