//! Table writer with handle-addressed columns
//!
//! Headers are registered first and each registration hands back a [`Column`].
//! Once the headers are locked the header record is written and rows are filled
//! through those handles, so the position of a column never leaks into the code
//! that produces its values.

use crate::error::{Result, TableError};
use crate::row::Row;
use crate::sink::RecordSink;
use crate::types::Column;
use log::{debug, trace};
use std::io;

const DEFAULT_HEADER_CAPACITY: usize = 10;

const ERR_HEADERS_LOCKED: &str = "csvwizard: trying to add a header after header lock";
const ERR_HEADERS_NOT_LOCKED: &str = "csvwizard: trying to add a row before header lock";
const ERR_LOCKED_TWICE: &str = "csvwizard: headers are already locked";

/// CSV writer whose rows are addressed by column handle
///
/// The writer moves through two states. While unlocked, [`add_header`] registers
/// columns. [`lock_headers`] freezes them, writes the header record and allocates
/// the row buffer. From then on rows are obtained with [`create_row`], filled by
/// handle and committed. Calling an operation in the wrong state is a bug in the
/// caller and panics.
///
/// The writer never flushes its sink. Use [`get_mut`] or [`into_inner`] to
/// flush once all rows are committed.
///
/// # Examples
///
/// ```
/// use csvwizard::TableWriter;
///
/// let mut writer = TableWriter::from_writer(Vec::new());
/// let name = writer.add_header("Name");
/// let age = writer.add_header("Age");
/// writer.lock_headers().unwrap();
///
/// let mut row = writer.create_row();
/// row.set(name, "Alice");
/// row.set_int(age, 30);
/// row.commit().unwrap();
///
/// let bytes = writer.into_inner().into_inner().unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "Name,Age\nAlice,30\n");
/// ```
///
/// [`add_header`]: TableWriter::add_header
/// [`lock_headers`]: TableWriter::lock_headers
/// [`create_row`]: TableWriter::create_row
/// [`get_mut`]: TableWriter::get_mut
/// [`into_inner`]: TableWriter::into_inner
pub struct TableWriter<S: RecordSink> {
    headers: Vec<String>,
    headers_locked: bool,

    sink: S,
    buf: Vec<String>,
}

impl<S: RecordSink> TableWriter<S> {
    /// Wrap a record sink
    pub fn new(sink: S) -> Self {
        Self::with_header_capacity(sink, DEFAULT_HEADER_CAPACITY)
    }

    fn with_header_capacity(sink: S, capacity: usize) -> Self {
        TableWriter {
            headers: Vec::with_capacity(capacity),
            headers_locked: false,

            sink,
            buf: Vec::new(),
        }
    }

    /// Register a header and return the handle used to fill its cells.
    ///
    /// Handles are zero-based and follow registration order.
    ///
    /// # Panics
    ///
    /// Panics if the headers are already locked.
    pub fn add_header(&mut self, name: impl Into<String>) -> Column {
        if self.headers_locked {
            panic!("{}", ERR_HEADERS_LOCKED);
        }

        let col = Column::new(self.headers.len());
        self.headers.push(name.into());
        col
    }

    /// Freeze the header list and write it as the first record.
    ///
    /// The writer is locked even when writing the header record fails.
    ///
    /// # Panics
    ///
    /// Panics if the headers are already locked.
    pub fn lock_headers(&mut self) -> Result<()> {
        if self.headers_locked {
            panic!("{}", ERR_LOCKED_TWICE);
        }

        self.headers_locked = true;
        self.buf = vec![String::new(); self.headers.len()];
        debug!("headers locked with {} columns", self.headers.len());

        self.sink.write_record(&self.headers)
    }

    /// Hand out the row buffer.
    ///
    /// This is the same buffer every time, never a fresh allocation. It is empty
    /// after a successful commit; values set on a row that was dropped without
    /// committing are still there.
    ///
    /// # Panics
    ///
    /// Panics if the headers are not locked yet.
    pub fn create_row(&mut self) -> Row<'_, S> {
        self.assert_locked();
        Row::new(self)
    }

    /// Write the row buffer as one record and clear it.
    ///
    /// On error the buffer keeps its values and nothing is retried.
    ///
    /// # Panics
    ///
    /// Panics if the headers are not locked yet.
    pub fn commit_row(&mut self) -> Result<()> {
        self.assert_locked();

        self.sink.write_record(&self.buf)?;
        trace!("committed row of {} cells", self.buf.len());

        for cell in &mut self.buf {
            cell.clear();
        }
        Ok(())
    }

    /// Commit a row supplied by the caller instead of the row buffer.
    ///
    /// `values` must hold exactly one cell per header, in column order. The
    /// values are copied into the row buffer and committed like [`commit_row`],
    /// so the buffer is clear afterwards on success.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowWidthMismatch`] without writing anything when the
    /// width is wrong, or the sink's error.
    ///
    /// # Panics
    ///
    /// Panics if the headers are not locked yet.
    ///
    /// [`commit_row`]: TableWriter::commit_row
    pub fn commit_values<T: AsRef<str>>(&mut self, values: &[T]) -> Result<()> {
        self.assert_locked();

        if values.len() != self.buf.len() {
            return Err(TableError::RowWidthMismatch {
                expected: self.buf.len(),
                actual: values.len(),
            });
        }

        for (cell, value) in self.buf.iter_mut().zip(values) {
            cell.clear();
            cell.push_str(value.as_ref());
        }
        self.commit_row()
    }

    /// Registered headers in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Whether [`lock_headers`](TableWriter::lock_headers) has been called
    pub fn is_locked(&self) -> bool {
        self.headers_locked
    }

    /// Handle of the first header with the given name
    pub fn column(&self, name: &str) -> Option<Column> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(Column::new)
    }

    /// Get a reference to the underlying sink
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the underlying sink, e.g. to flush it
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unwrap the writer, returning the sink without flushing it
    pub fn into_inner(self) -> S {
        self.sink
    }

    pub(crate) fn cells(&self) -> &[String] {
        &self.buf
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [String] {
        &mut self.buf
    }

    fn assert_locked(&self) {
        if !self.headers_locked {
            panic!("{}", ERR_HEADERS_NOT_LOCKED);
        }
    }
}

impl<W: io::Write> TableWriter<csv::Writer<W>> {
    /// Wrap an `io::Write` in a default-dialect `csv::Writer`
    pub fn from_writer(writer: W) -> Self {
        TableWriter::new(csv::Writer::from_writer(writer))
    }
}

/// Builder for creating configured table writers
#[derive(Debug, Clone, Default)]
pub struct TableWriterBuilder {
    header_capacity: Option<usize>,
    delimiter: Option<u8>,
    headers: Vec<String>,
}

impl TableWriterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the header list
    pub fn with_header_capacity(mut self, capacity: usize) -> Self {
        self.header_capacity = Some(capacity);
        self
    }

    /// Set the field delimiter used by [`build_csv`](TableWriterBuilder::build_csv)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Register headers up front, in order.
    ///
    /// Their handles can be looked up with [`TableWriter::column`].
    pub fn with_headers<I, T>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self
    }

    /// Build a writer around any record sink
    pub fn build<S: RecordSink>(self, sink: S) -> TableWriter<S> {
        let capacity = self
            .header_capacity
            .unwrap_or(DEFAULT_HEADER_CAPACITY)
            .max(self.headers.len());

        let mut writer = TableWriter::with_header_capacity(sink, capacity);
        for header in self.headers {
            writer.add_header(header);
        }
        writer
    }

    /// Build a writer that encodes CSV into `writer`
    pub fn build_csv<W: io::Write>(self, writer: W) -> TableWriter<csv::Writer<W>> {
        let sink = csv::WriterBuilder::new()
            .delimiter(self.delimiter.unwrap_or(b','))
            .from_writer(writer);
        self.build(sink)
    }
}
