use std::io::{Result as IoResult, Write};

/// Memory-backed writer for capturing what a command prints.
///
/// Commands write through `&mut dyn Write`; the interpreter turns the captured bytes
/// into at most one output line afterwards.
#[derive(Debug, Default)]
pub struct MemWriter {
    buf: Vec<u8>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured text with one trailing newline removed.
    ///
    /// Returns `None` when nothing was written, which is different from a command that
    /// printed an empty line (`Some("")`).
    pub fn into_line(self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let mut text = String::from_utf8_lossy(&self.buf).into_owned();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Some(text)
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
