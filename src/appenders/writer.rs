//! Sink over any `io::Write`

use crate::core::{Result, Sink};
use std::io::Write;

/// Adapts an arbitrary writer into a [`Sink`]
///
/// # Example
///
/// ```
/// use rust_logger_facade::appenders::WriterSink;
/// use rust_logger_facade::core::Sink;
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write_entry(b"line\n").unwrap();
/// assert_eq!(sink.get_ref().as_slice(), b"line\n");
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_entry(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf)?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
