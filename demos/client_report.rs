//! Writes a small client report to stdout
//!
//! Try adding an empty column between name and age, swapping age and height,
//! or dropping age entirely: only the `add_header` lines and the matching
//! `set` calls change.

use csvwizard::TableWriter;
use std::io;

struct Client {
    name: &'static str,
    age: u64,
    height: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clients = [
        Client { name: "John Smith", age: 34, height: 181 },
        Client { name: "Peter Smith", age: 44, height: 179 },
        Client { name: "John Sebastine", age: 33, height: 159 },
        Client { name: "Markus Hallberg", age: 18, height: 169 },
        Client { name: "John Wonapaska", age: 59, height: 170 },
    ];

    let mut writer = TableWriter::from_writer(io::stdout().lock());

    let col_name = writer.add_header("Client name");
    let col_age = writer.add_header("Client age");
    let col_height = writer.add_header("Client height (predicted)");
    writer.lock_headers()?;

    for c in &clients {
        let mut row = writer.create_row();
        row.set(col_name, c.name);
        row.set_int(col_age, c.age);
        row.set_int(col_height, c.height);
        row.commit()?;
    }

    writer.get_mut().flush()?;
    Ok(())
}
