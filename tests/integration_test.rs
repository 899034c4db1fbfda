//! Integration tests for csvwizard

use csvwizard::{RecordSink, TableError, TableWriter, TableWriterBuilder};
use std::io::{self, Write};
use tempfile::NamedTempFile;

/// Sink that rejects every record after the first `accept` ones
struct FailingSink {
    accept: usize,
    attempts: usize,
    records: Vec<Vec<String>>,
}

impl FailingSink {
    fn new(accept: usize) -> Self {
        FailingSink {
            accept,
            attempts: 0,
            records: Vec::new(),
        }
    }
}

impl RecordSink for FailingSink {
    fn write_record(&mut self, fields: &[String]) -> csvwizard::Result<()> {
        self.attempts += 1;
        if self.records.len() >= self.accept {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed").into());
        }
        self.records.push(fields.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> csvwizard::Result<()> {
        Ok(())
    }
}

/// Writer that fails once its byte budget is used up
struct FullDisk {
    remaining: usize,
}

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_and_read_roundtrip() {
    let temp = NamedTempFile::new().unwrap();

    {
        let file = temp.reopen().unwrap();
        let mut writer = TableWriterBuilder::new().with_delimiter(b';').build_csv(file);

        let x = writer.add_header("x");
        let y = writer.add_header("y");
        writer.lock_headers().unwrap();

        let mut row1 = writer.create_row();
        row1.set(x, "123");
        row1.set(y, "456");
        row1.commit().unwrap();

        let mut row2 = writer.create_row();
        row2.set(y, "777");
        row2.commit().unwrap();

        writer.get_mut().flush().unwrap();
    }

    let content = std::fs::read_to_string(temp.path()).unwrap();
    assert_eq!(content.trim(), "x;y\n123;456\n;777");
}

#[test]
fn test_default_dialect() {
    let mut writer = TableWriter::from_writer(Vec::new());
    let x = writer.add_header("x");
    let y = writer.add_header("y");
    writer.lock_headers().unwrap();

    let mut row = writer.create_row();
    row.set(x, "hello, world");
    row.set(y, "say \"hi\"");
    row.commit().unwrap();

    let bytes = writer.into_inner().into_inner().unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "x,y\n\"hello, world\",\"say \"\"hi\"\"\"\n"
    );
}

#[test]
fn test_reordering_headers_moves_values_with_them() {
    fn render(order: &[&str]) -> Vec<Vec<String>> {
        let mut writer = TableWriter::new(Vec::<Vec<String>>::new());
        let cols: Vec<_> = order.iter().map(|h| (*h, writer.add_header(*h))).collect();
        writer.lock_headers().unwrap();

        let mut row = writer.create_row();
        for (name, col) in &cols {
            row.set(*col, format!("{}-value", name));
        }
        row.commit().unwrap();
        writer.into_inner()
    }

    let forward = render(&["name", "age", "height"]);
    let reversed = render(&["height", "age", "name"]);

    assert_eq!(forward[1], vec!["name-value", "age-value", "height-value"]);
    assert_eq!(reversed[1], vec!["height-value", "age-value", "name-value"]);
}

#[test]
fn test_unset_cells_are_empty_after_commit() {
    let mut writer = TableWriter::new(Vec::<Vec<String>>::new());
    let a = writer.add_header("a");
    let b = writer.add_header("b");
    let c = writer.add_header("c");
    writer.lock_headers().unwrap();

    let mut row = writer.create_row();
    row.set(a, "1");
    row.set(b, "2");
    row.set(c, "3");
    row.commit().unwrap();

    let mut row = writer.create_row();
    assert!(row.as_slice().iter().all(|cell| cell.is_empty()));
    row.set(b, "only b");
    row.commit().unwrap();

    writer.create_row().commit().unwrap();

    let records = writer.into_inner();
    assert_eq!(records.len(), 4);
    assert_eq!(records[2], vec!["", "only b", ""]);
    assert_eq!(records[3], vec!["", "", ""]);
}

#[test]
fn test_failed_commit_propagates_without_retry() {
    let mut sink = FailingSink::new(2);
    let mut writer = TableWriter::new(&mut sink);
    let a = writer.add_header("a");
    writer.lock_headers().unwrap();

    let mut row = writer.create_row();
    row.set(a, "kept");
    row.commit().unwrap();

    let mut row = writer.create_row();
    row.set(a, "rejected");
    let err = row.commit().unwrap_err();
    assert!(matches!(err, TableError::IoError(ref e) if e.kind() == io::ErrorKind::BrokenPipe));

    // Failed row stays in the buffer
    assert_eq!(writer.create_row().get(a), "rejected");

    drop(writer);
    assert_eq!(sink.attempts, 3);
    assert_eq!(sink.records.len(), 2);
}

#[test]
fn test_failed_header_write_still_locks() {
    let mut writer = TableWriter::new(FailingSink::new(0));
    writer.add_header("a");

    assert!(writer.lock_headers().is_err());
    assert!(writer.is_locked());
    assert_eq!(writer.get_ref().attempts, 1);
}

#[test]
fn test_csv_io_failure_surfaces_on_flush() {
    let mut writer = TableWriter::from_writer(FullDisk { remaining: 4 });
    let a = writer.add_header("column");
    writer.lock_headers().unwrap();

    let mut row = writer.create_row();
    row.set(a, "value");
    row.commit().unwrap();

    // csv::Writer buffers records; the disk error shows up when the caller flushes
    let err = RecordSink::flush(writer.get_mut()).unwrap_err();
    assert!(matches!(err, TableError::IoError(_)));
}

#[test]
fn test_commit_values_roundtrip() {
    let temp = NamedTempFile::new().unwrap();

    {
        let mut writer = TableWriter::from_writer(temp.reopen().unwrap());
        writer.add_header("id");
        writer.add_header("name");
        writer.lock_headers().unwrap();

        writer.commit_values(&["1", "Alice"]).unwrap();
        assert!(matches!(
            writer.commit_values(&["2"]),
            Err(TableError::RowWidthMismatch { .. })
        ));
        writer.commit_values(&["3", "Carol"]).unwrap();
        writer.get_mut().flush().unwrap();
    }

    let content = std::fs::read_to_string(temp.path()).unwrap();
    assert_eq!(content, "id,name\n1,Alice\n3,Carol\n");
}

#[test]
fn test_large_dataset_streaming() {
    let temp = NamedTempFile::new().unwrap();
    let num_rows = 1000;

    {
        let mut writer = TableWriter::from_writer(temp.reopen().unwrap());
        let id = writer.add_header("ID");
        let value = writer.add_header("Value");
        writer.lock_headers().unwrap();

        for i in 0..num_rows {
            let mut row = writer.create_row();
            row.set_int(id, i);
            row.set(value, format!("Value_{}", i));
            row.commit().unwrap();
        }
        writer.get_mut().flush().unwrap();
    }

    let content = std::fs::read_to_string(temp.path()).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), num_rows + 1);
    assert_eq!(lines[0], "ID,Value");
    assert_eq!(lines[num_rows], format!("{},Value_{}", num_rows - 1, num_rows - 1));
}
