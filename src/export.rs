//! Export of individuals to text and JSON sinks.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::individual::Individual;

/// Lists the non-empty routes as `Route #k: c1 c2 ...`, one per line.
impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, route) in self.routes().iter().filter(|r| !r.is_empty()).enumerate() {
            write!(f, "Route #{}:", i + 1)?;
            for client in route.clients() {
                write!(f, " {}", client)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Write the routes of an individual followed by its cost.
pub fn write_individual<W: Write>(individual: &Individual, mut writer: W) -> io::Result<()> {
    write!(writer, "{}", individual)?;
    writeln!(writer, "Cost {}", individual.cost())?;
    writer.flush()
}

/// Save an individual to a file in the plain-text route format.
pub fn save_individual<P: AsRef<Path>>(individual: &Individual, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    write_individual(individual, BufWriter::new(file))
}

/// Write an individual, with its routes and derived measures, as JSON.
pub fn write_json<W: Write>(individual: &Individual, writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, individual).map_err(io::Error::from)
}
