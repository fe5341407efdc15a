//! The compile-invocation lifecycle.
//!
//! One invocation: materialize the buffer to a scratch file, run the external
//! compiler with that path as its only argument, block until it exits, drain
//! both output streams, remove the scratch file, hand back text for display.
//! The scratch file is removed on every exit path, including spawn failure.

use crate::config::{InvokeError, InvokerConfig, Result};
use crate::output::{OutputCollector, OutputLimits};
use crate::scratch::SourceScratch;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Message shown when the compiler binary cannot be located or executed.
pub const COMPILER_NOT_FOUND_MESSAGE: &str =
    "Compiler not found. Please check your compiler installation.";

/// Structured outcome of one invocation whose child process launched.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub stdout: String,
    pub stderr: String,
    /// Exit code if the child exited normally. Recorded, never interpreted:
    /// a failed compile still shows its diagnostics the same way.
    pub exit_code: Option<i32>,
    /// True when either stream hit its capture limit.
    pub truncated: bool,
}

impl CompileOutcome {
    /// Display text: stdout, a blank line, stderr, in that fixed order,
    /// even when one or both streams are empty.
    pub fn display_text(&self) -> String {
        format!("{}\n\n{}", self.stdout, self.stderr)
    }
}

/// Runs the external compiler over a text buffer.
pub struct CompileInvoker {
    config: InvokerConfig,
}

impl CompileInvoker {
    pub fn new(config: InvokerConfig) -> Result<Self> {
        config.validate()?;
        Ok(CompileInvoker { config })
    }

    pub fn config(&self) -> &InvokerConfig {
        &self.config
    }

    /// Compile `source` and return text for display.
    ///
    /// Never fails: launch problems come back as a human-readable message
    /// instead of the combined streams.
    pub fn invoke(&self, source: &str) -> String {
        match self.run_compiler(source) {
            Ok(outcome) => {
                if let Some(code) = outcome.exit_code {
                    if code != 0 {
                        log::info!("Compiler exited with status {}", code);
                    }
                }
                if outcome.truncated {
                    log::warn!("Compiler output exceeded the capture limit and was truncated");
                }
                outcome.display_text()
            }
            Err(e) => failure_text(&e),
        }
    }

    /// Run one invocation and return the structured outcome.
    pub fn run_compiler(&self, source: &str) -> Result<CompileOutcome> {
        let scratch = SourceScratch::create(
            &self.config.scratch_dir,
            &self.config.source_suffix,
            source,
        )?;
        log::debug!("Scratch source at {}", scratch.path().display());

        let mut child = Command::new(&self.config.compiler_path)
            .arg(scratch.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                // Missing and unexecutable are one failure kind to the user.
                ErrorKind::NotFound | ErrorKind::PermissionDenied => InvokeError::CompilerNotFound,
                _ => InvokeError::Launch(e.to_string()),
            })?;

        let collector = OutputCollector::new(OutputLimits {
            stdout_limit: self.config.stream_limit,
            stderr_limit: self.config.stream_limit,
        });
        let collected = collector.collect(child.stdout.take(), child.stderr.take());

        let status = child
            .wait()
            .map_err(|e| InvokeError::Launch(e.to_string()))?;

        Ok(CompileOutcome {
            stdout: String::from_utf8_lossy(&collected.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&collected.stderr).into_owned(),
            exit_code: status.code(),
            truncated: collected.truncated(),
        })
    }
}

/// Map an invocation failure to its user-facing display text.
pub fn failure_text(err: &InvokeError) -> String {
    match err {
        InvokeError::CompilerNotFound => COMPILER_NOT_FOUND_MESSAGE.to_string(),
        other => format!("Compilation failed: {}", other),
    }
}
