//! Generic external command execution.
//!
//! This trait is NOT tied to any particular tool — it runs `unzip`,
//! `jboss-cli.sh`, and `standalone.sh` alike. The production implementation
//! uses tokio; test doubles can return canned results without spawning
//! processes.

use std::process::{ExitStatus, Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process fails to spawn or cannot be waited on.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command, optionally feeding `input` to its stdin, forwarding
    /// every stdout line to `on_line` as it arrives. Stderr is inherited.
    ///
    /// # Errors
    ///
    /// Returns an error if the process fails to spawn or cannot be waited on.
    async fn stream<F>(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&[u8]>,
        on_line: F,
    ) -> Result<ExitStatus>
    where
        F: FnMut(&str);
}

/// Production `CommandRunner` — uses tokio for async process execution.
///
/// Every spawn sets `kill_on_drop(true)` so a child never outlives a
/// cancelled run: dropping the in-flight future reaps the process.
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Read stdout/stderr CONCURRENTLY with wait() to avoid pipe deadlock.
        // If the child writes more than the OS pipe buffer, it blocks on
        // write; calling child.wait() alone would then never resolve.
        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stdout_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stderr_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
        );
        Ok(Output {
            status: status.with_context(|| format!("waiting for {program}"))?,
            stdout,
            stderr,
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
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        // Write stdin in a spawned task so it progresses concurrently with
        // the stdout drain — feeding a large batch while the child floods
        // stdout must not deadlock on full pipe buffers. Dropping the handle
        // at the end of the task closes the pipe, signalling EOF.
        let stdin_task = input.map(|input| {
            let stdin_handle = child.stdin.take();
            let input_owned = input.to_vec();
            tokio::spawn(async move {
                if let Some(mut stdin) = stdin_handle {
                    use tokio::io::AsyncWriteExt;
                    let _ = stdin.write_all(&input_owned).await;
                    let _ = stdin.shutdown().await;
                }
            })
        });

        let stdout_handle = child.stdout.take();
        let (status, ()) = tokio::join!(child.wait(), async {
            if let Some(h) = stdout_handle {
                let mut lines = BufReader::new(h).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    on_line(&line);
                }
            }
        });
        if let Some(task) = stdin_task {
            let _ = task.await;
        }

        status.with_context(|| format!("waiting for {program}"))
    }
}
