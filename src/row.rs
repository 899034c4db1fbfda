//! Borrowed view over the writer's row buffer

use crate::error::Result;
use crate::sink::RecordSink;
use crate::types::Column;
use crate::writer::TableWriter;
use std::fmt;
use std::ops::{Index, IndexMut};

/// The row currently being filled
///
/// Obtained from [`TableWriter::create_row`]. It mutably borrows the writer, so
/// it cannot be kept past the next `create_row` or commit. Cells are addressed
/// by [`Column`] handle; unset cells are written as empty fields.
pub struct Row<'a, S: RecordSink> {
    writer: &'a mut TableWriter<S>,
}

impl<'a, S: RecordSink> Row<'a, S> {
    pub(crate) fn new(writer: &'a mut TableWriter<S>) -> Self {
        Row { writer }
    }

    /// Overwrite a cell, reusing its allocation
    pub fn set(&mut self, col: Column, value: impl AsRef<str>) {
        let cell = &mut self[col];
        cell.clear();
        cell.push_str(value.as_ref());
    }

    /// Write an integer into a cell without going through `to_string`
    pub fn set_int<I: itoa::Integer>(&mut self, col: Column, value: I) {
        let mut num_buffer = itoa::Buffer::new();
        self.set(col, num_buffer.format(value));
    }

    /// Current value of a cell
    pub fn get(&self, col: Column) -> &str {
        &self[col]
    }

    pub fn len(&self) -> usize {
        self.writer.cells().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer.cells().is_empty()
    }

    /// All cells in column order
    pub fn as_slice(&self) -> &[String] {
        self.writer.cells()
    }

    /// Write this row and clear the buffer for the next one.
    ///
    /// See [`TableWriter::commit_row`].
    pub fn commit(self) -> Result<()> {
        self.writer.commit_row()
    }
}

impl<S: RecordSink> Index<Column> for Row<'_, S> {
    type Output = String;

    fn index(&self, col: Column) -> &String {
        &self.writer.cells()[col.index()]
    }
}

impl<S: RecordSink> IndexMut<Column> for Row<'_, S> {
    fn index_mut(&mut self, col: Column) -> &mut String {
        &mut self.writer.cells_mut()[col.index()]
    }
}

impl<S: RecordSink> fmt::Debug for Row<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
