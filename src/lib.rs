//! # csvwizard
//!
//! A CSV writer that doesn't stand in your way as your reports evolve.
//!
//! Writing rows positionally is fine for a one-off export. Long-living reports
//! are rarely like that: columns get added, removed and reordered, and every
//! positional `write_record` call has to be kept in step by hand. csvwizard
//! hands out a [`Column`] handle per header instead, and rows are filled by
//! handle, so moving a column is a one-line change.
//!
//! ## Features
//!
//! - **Handle-addressed cells**: column order lives in one place
//! - **Zero per-row allocation**: one row buffer reused for the whole run
//! - **Empty by default**: cells you forget to set are written empty, never stale
//! - **Pluggable encoder**: any [`RecordSink`], with `csv::Writer` built in
//!
//! ## Quick Start
//!
//! ```rust
//! use csvwizard::TableWriterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut writer = TableWriterBuilder::new()
//!     .with_delimiter(b';')
//!     .build_csv(Vec::new());
//!
//! let x = writer.add_header("x");
//! let y = writer.add_header("y");
//! writer.lock_headers()?;
//!
//! let mut row = writer.create_row();
//! row.set(x, "123");
//! row.set(y, "456");
//! row.commit()?;
//!
//! let mut row = writer.create_row();
//! row.set(y, "777");
//! row.commit()?;
//!
//! let bytes = writer.into_inner().into_inner()?;
//! assert_eq!(String::from_utf8(bytes)?, "x;y\n123;456\n;777\n");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod row;
pub mod sink;
pub mod types;
pub mod writer;

pub use error::{Result, TableError};
pub use row::Row;
pub use sink::RecordSink;
pub use types::Column;
pub use writer::{TableWriter, TableWriterBuilder};
