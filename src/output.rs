//! Bounded collection of child process output streams.
//!
//! Stdout and stderr are drained on dedicated threads so a child writing
//! heavily to both streams can never deadlock on a full pipe. Collection has
//! no timeout: the invoker blocks until the child closes its streams.

use std::io::{BufReader, Read};
use std::process::{ChildStderr, ChildStdout};
use std::thread;

/// Per-stream capture limits (bytes).
#[derive(Debug, Clone, Copy)]
pub struct OutputLimits {
    pub stdout_limit: usize,
    pub stderr_limit: usize,
}

impl Default for OutputLimits {
    fn default() -> Self {
        OutputLimits {
            stdout_limit: 8 * 1024 * 1024,
            stderr_limit: 8 * 1024 * 1024,
        }
    }
}

/// Integrity of one captured stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamIntegrity {
    /// Captured to EOF within the limit.
    Complete,
    /// Limit hit; the remainder was drained and discarded.
    Truncated,
    /// Read failed mid-stream; capture holds what arrived before the error.
    ReadError,
}

/// Captured output of one child process.
#[derive(Debug, Clone)]
pub struct CollectedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub stdout_integrity: StreamIntegrity,
    pub stderr_integrity: StreamIntegrity,
}

impl CollectedOutput {
    pub fn truncated(&self) -> bool {
        self.stdout_integrity == StreamIntegrity::Truncated
            || self.stderr_integrity == StreamIntegrity::Truncated
    }
}

/// Output collector with bounded per-stream capture.
pub struct OutputCollector {
    limits: OutputLimits,
}

impl OutputCollector {
    pub fn new(limits: OutputLimits) -> Self {
        OutputCollector { limits }
    }

    /// Drain both streams to EOF, blocking until the child closes them.
    pub fn collect(
        &self,
        stdout: Option<ChildStdout>,
        stderr: Option<ChildStderr>,
    ) -> CollectedOutput {
        let stdout_limit = self.limits.stdout_limit;
        let stderr_limit = self.limits.stderr_limit;

        let stdout_handle =
            stdout.map(|s| thread::spawn(move || collect_stream(s, stdout_limit)));
        let stderr_handle =
            stderr.map(|s| thread::spawn(move || collect_stream(s, stderr_limit)));

        let (stdout, stdout_integrity) = match stdout_handle {
            Some(handle) => handle
                .join()
                .unwrap_or((Vec::new(), StreamIntegrity::ReadError)),
            None => (Vec::new(), StreamIntegrity::Complete),
        };
        let (stderr, stderr_integrity) = match stderr_handle {
            Some(handle) => handle
                .join()
                .unwrap_or((Vec::new(), StreamIntegrity::ReadError)),
            None => (Vec::new(), StreamIntegrity::Complete),
        };

        CollectedOutput {
            stdout,
            stderr,
            stdout_integrity,
            stderr_integrity,
        }
    }
}

/// Collect a single stream up to `limit`, then keep draining so the writer
/// never blocks on a full pipe.
fn collect_stream<R: Read + Send + 'static>(stream: R, limit: usize) -> (Vec<u8>, StreamIntegrity) {
    let mut reader = BufReader::new(stream);
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    let mut integrity = StreamIntegrity::Complete;

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if integrity == StreamIntegrity::Truncated {
                    continue;
                }
                if buffer.len() + n > limit {
                    let remaining = limit - buffer.len();
                    buffer.extend_from_slice(&chunk[..remaining]);
                    integrity = StreamIntegrity::Truncated;
                } else {
                    buffer.extend_from_slice(&chunk[..n]);
                }
            }
            Err(e) => {
                log::warn!("Stream read failed during collection: {}", e);
                integrity = StreamIntegrity::ReadError;
                break;
            }
        }
    }

    (buffer, integrity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = OutputLimits::default();
        assert_eq!(limits.stdout_limit, 8 * 1024 * 1024);
        assert_eq!(limits.stderr_limit, 8 * 1024 * 1024);
    }

    #[test]
    fn missing_streams_collect_empty() {
        let collector = OutputCollector::new(OutputLimits::default());
        let result = collector.collect(None, None);

        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
        assert_eq!(result.stdout_integrity, StreamIntegrity::Complete);
        assert_eq!(result.stderr_integrity, StreamIntegrity::Complete);
        assert!(!result.truncated());
    }

    #[test]
    fn collect_stream_captures_to_eof() {
        let data: &[u8] = b"hello from the compiler\n";
        let (captured, integrity) = collect_stream(data, 1024);
        assert_eq!(captured, data);
        assert_eq!(integrity, StreamIntegrity::Complete);
    }

    #[test]
    fn collect_stream_truncates_and_drains() {
        let data = vec![b'x'; 10_000];
        let (captured, integrity) = collect_stream(std::io::Cursor::new(data), 100);
        assert_eq!(captured.len(), 100);
        assert_eq!(integrity, StreamIntegrity::Truncated);
    }

    #[test]
    fn collect_stream_exact_limit_is_complete() {
        let data = vec![b'y'; 100];
        let (captured, integrity) = collect_stream(std::io::Cursor::new(data), 100);
        assert_eq!(captured.len(), 100);
        assert_eq!(integrity, StreamIntegrity::Complete);
    }
}
