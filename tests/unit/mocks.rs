//! Shared mock infrastructure for unit tests.
//!
//! Provides canned [`CommandRunner`] implementations so each test file
//! doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};

use anyhow::Result;
use startserver::command_runner::CommandRunner;

pub fn exit_status(code: i32) -> ExitStatus {
    ExitStatus::from_raw(code << 8)
}

// ── Mock: no process may be spawned ──────────────────────────────────────────

/// Fails the test if any external command is started.
pub struct NoProcessRunner;

impl CommandRunner for NoProcessRunner {
    async fn run(&self, program: &str, _args: &[&str]) -> Result<Output> {
        anyhow::bail!("unexpected process start: {program}")
    }

    async fn stream<F>(
        &self,
        program: &str,
        _args: &[&str],
        _input: Option<&[u8]>,
        _on_line: F,
    ) -> Result<ExitStatus>
    where
        F: FnMut(&str),
    {
        anyhow::bail!("unexpected process start: {program}")
    }
}

// ── Mock: recording runner ───────────────────────────────────────────────────

/// One recorded `stream` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCall {
    pub program: String,
    pub args: Vec<String>,
    pub input: Option<Vec<u8>>,
}

/// Records every invocation and returns canned results.
pub struct RecordingRunner {
    pub runs: RefCell<Vec<(String, Vec<String>)>>,
    pub streams: RefCell<Vec<StreamCall>>,
    /// Exit code returned from `run`.
    pub run_code: i32,
    /// Exit code returned from `stream`.
    pub stream_code: i32,
    /// Lines emitted to the caller's sink on every `stream` call.
    pub stream_lines: Vec<String>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self {
            runs: RefCell::new(Vec::new()),
            streams: RefCell::new(Vec::new()),
            run_code: 0,
            stream_code: 0,
            stream_lines: Vec::new(),
        }
    }

    pub fn with_stream_code(code: i32) -> Self {
        Self {
            stream_code: code,
            ..Self::succeeding()
        }
    }

    pub fn with_run_code(code: i32) -> Self {
        Self {
            run_code: code,
            ..Self::succeeding()
        }
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.runs.borrow_mut().push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
        Ok(Output {
            status: exit_status(self.run_code),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }

    async fn stream<F>(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&[u8]>,
        mut on_line: F,
    ) -> Result<ExitStatus>
    where
        F: FnMut(&str),
    {
        self.streams.borrow_mut().push(StreamCall {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            input: input.map(<[u8]>::to_vec),
        });
        for line in &self.stream_lines {
            on_line(line);
        }
        Ok(exit_status(self.stream_code))
    }
}
