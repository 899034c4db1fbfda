//! Record sinks the table writer emits into
//!
//! The table writer only knows how to hand a finished record to something that
//! encodes it. [`RecordSink`] is that seam: `csv::Writer` is the production
//! implementation, `Vec<Vec<String>>` collects records in memory.

use crate::error::Result;
use std::io;

/// Encoder capable of writing one record at a time.
///
/// Implementations may buffer internally. [`TableWriter`](crate::TableWriter)
/// calls `write_record` only and leaves `flush` to the owner of the sink.
pub trait RecordSink {
    /// Encode and write one record.
    fn write_record(&mut self, fields: &[String]) -> Result<()>;

    /// Push any buffered output down to the underlying destination.
    fn flush(&mut self) -> Result<()>;
}

impl<W: io::Write> RecordSink for csv::Writer<W> {
    fn write_record(&mut self, fields: &[String]) -> Result<()> {
        csv::Writer::write_record(self, fields)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        csv::Writer::flush(self)?;
        Ok(())
    }
}

/// Keeps every record in memory, one `Vec<String>` per record.
impl RecordSink for Vec<Vec<String>> {
    fn write_record(&mut self, fields: &[String]) -> Result<()> {
        self.push(fields.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn write_record(&mut self, fields: &[String]) -> Result<()> {
        (**self).write_record(fields)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
