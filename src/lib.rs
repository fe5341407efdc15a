//! pseudopad: a desktop front-end for the external `pscompiler` binary
//!
//! The user types source text, presses Compile, and sees whatever the
//! compiler wrote to its output streams. The compiler itself is an opaque
//! external executable; this crate only handles the invocation lifecycle
//! and a thin presentation layer over it.
//!
//! # Architecture
//!
//! ## Invocation lifecycle
//! - [`invoker`]: one synchronous compile invocation, from scratch file to
//!   display text
//! - [`scratch`]: invocation-scoped scratch source files with guaranteed
//!   removal on every exit path
//! - [`output`]: bounded, deadlock-free capture of child stdout/stderr
//!
//! ## Configuration ([`config`])
//! - [`config::InvokerConfig`]: compiler path, scratch suffix/dir, capture
//!   limits, validated before use
//!
//! ## Presentation
//! - [`app`]: eframe editor window; owns no logic, renders invoke results
//!   verbatim
//! - [`theme`]: gruvbox palette for the window
//! - [`cli`]: headless compile and compiler-presence checks
//!
//! # Design Principles
//!
//! 1. **One contract** - everything testable lives in the invoker; the
//!    window is a view over it
//! 2. **Scoped artifacts** - the scratch file cannot outlive its invocation
//! 3. **Always displayable** - an invocation produces text for the user,
//!    never a program fault

// Invocation lifecycle
pub mod invoker;
pub mod output;
pub mod scratch;

// Configuration
pub mod config;

// Presentation
pub mod app;
pub mod cli;
pub mod theme;

// Re-export commonly used types for convenience
pub use config::{InvokeError, InvokerConfig, Result};
pub use invoker::{CompileInvoker, CompileOutcome, COMPILER_NOT_FOUND_MESSAGE};
