//! Column handles

use std::fmt;

/// Stable handle to a registered column.
///
/// Handles are issued by [`TableWriter::add_header`](crate::TableWriter::add_header)
/// in registration order, starting at zero, and stay valid for the lifetime of
/// the writer that issued them. Using a handle with a different writer is a bug
/// and may panic on an out-of-range index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(usize);

impl Column {
    pub(crate) fn new(index: usize) -> Self {
        Column(index)
    }

    /// Zero-based position of the column in every emitted record
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<Column> for usize {
    fn from(col: Column) -> Self {
        col.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
