//! Shared I/O endpoints handed to command actions.
//!
//! `OutputSink` stands in for process stdout and `StdinPipe` for
//! interactive stdin. Both are cheap clones over a shared buffer so the
//! app view, every client view, and the running action all see the same
//! bytes. Access is sequential (one invocation at a time); the `Mutex` is
//! only there so actions can be `Send + Sync`.

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink capturing everything a command action writes.
///
/// Invariant: the buffer is drained after each read, so consecutive
/// invocations never observe each other's output.
#[derive(Clone, Default)]
pub struct OutputSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl OutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the buffer, returning its contents with surrounding
    /// whitespace trimmed.
    pub fn take_trimmed(&self) -> String {
        let mut buf = self.buf.lock().unwrap();
        let text = String::from_utf8_lossy(&buf).trim().to_string();
        buf.clear();
        text
    }

    /// Bytes currently buffered, without draining.
    pub fn len(&self) -> usize {
        self.buf.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for OutputSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Staged interactive input, consumed by actions that prompt the user.
///
/// A run consumes whatever was staged before it; an unstaged run reads
/// end-of-input immediately.
#[derive(Clone, Default)]
pub struct StdinPipe {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl StdinPipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the staged input with `text`.
    pub fn stage(&self, text: &str) {
        let mut buf = self.buf.lock().unwrap();
        buf.clear();
        buf.extend_from_slice(text.as_bytes());
    }

    /// Take the staged input as a readable cursor, leaving the pipe empty.
    pub fn take_reader(&self) -> Cursor<Vec<u8>> {
        let mut buf = self.buf.lock().unwrap();
        Cursor::new(std::mem::take(&mut *buf))
    }
}
