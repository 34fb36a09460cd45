use super::error::Result;

/// Byte-stream destination for encoded entries
pub trait Sink: Send {
    /// Write one fully encoded entry
    fn write_entry(&mut self, buf: &[u8]) -> Result<()>;
    /// Flush anything buffered
    fn sync(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
