//! Invocation configuration and crate-wide error types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvokeError>;

#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Compiler binary not found or not executable")]
    CompilerNotFound,

    #[error("Launch error: {0}")]
    Launch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Configuration for one compiler front-end instance.
///
/// The invoker itself reads no environment variables and persists nothing;
/// callers construct this (usually from CLI flags over the defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokerConfig {
    /// Path to the external compiler binary.
    pub compiler_path: PathBuf,
    /// Suffix for scratch source files, signalling the input dialect.
    pub source_suffix: String,
    /// Directory scratch files are created in.
    pub scratch_dir: PathBuf,
    /// Per-stream capture limit in bytes.
    pub stream_limit: usize,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        InvokerConfig {
            compiler_path: PathBuf::from("./pscompiler"),
            source_suffix: ".pseudo".to_string(),
            scratch_dir: std::env::temp_dir(),
            stream_limit: 8 * 1024 * 1024,
        }
    }
}

impl InvokerConfig {
    /// Validate the configuration before any runtime setup.
    pub fn validate(&self) -> Result<()> {
        if self.compiler_path.as_os_str().is_empty() {
            return Err(InvokeError::Config(
                "Compiler path must not be empty".to_string(),
            ));
        }
        if !self.source_suffix.starts_with('.') || self.source_suffix.len() < 2 {
            return Err(InvokeError::Config(format!(
                "Source suffix '{}' must be a non-empty extension starting with '.'",
                self.source_suffix
            )));
        }
        if self.stream_limit == 0 {
            return Err(InvokeError::Config(
                "Stream limit must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
