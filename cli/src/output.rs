use serde::Serialize;
use sparse_life_lib::{Config, LivingSet};
use std::io::{self, Write};

/// A generation as printed with `--each`.
#[derive(Debug, Serialize)]
struct Generation<'a> {
    generation: i64,
    cells: &'a LivingSet,
}

/// Writes living sets as JSON, one document per line.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pretty: bool,
}

impl Printer {
    /// Create a printer, pretty-printing if `pretty` is set.
    pub const fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write the living cells as an array of `[row, col]` pairs.
    pub fn write_cells(&self, out: &mut impl Write, cells: &LivingSet) -> io::Result<()> {
        self.write(out, cells)
    }

    /// Write the configuration of the run.
    pub fn write_config(&self, out: &mut impl Write, config: &Config) -> io::Result<()> {
        self.write(out, config)
    }

    /// Write the living cells together with their generation number.
    pub fn write_generation(
        &self,
        out: &mut impl Write,
        generation: i64,
        cells: &LivingSet,
    ) -> io::Result<()> {
        self.write(out, &Generation { generation, cells })
    }

    fn write<T: Serialize>(&self, out: &mut impl Write, value: &T) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, value)?;
        } else {
            serde_json::to_writer(&mut *out, value)?;
        }
        writeln!(out)
    }
}
