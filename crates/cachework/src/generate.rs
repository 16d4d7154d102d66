//! Workload file emission
//!
//! One linear pass: capacity line first, then `OPERATION_COUNT` random
//! records. Nothing is retained in memory beyond the line being written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::error::Result;
use crate::workload::{Operation, CAPACITY, OPERATION_COUNT};

/// Output filename, relative to the working directory
pub const DEFAULT_FILENAME: &str = "lru_input.txt";

/// Write a complete workload to the given writer
///
/// Emits `1 + OPERATION_COUNT` newline-terminated lines: the capacity
/// directive, then the operation records.
pub fn write_workload<W: Write, R: Rng>(writer: &mut W, rng: &mut R) -> Result<()> {
    writeln!(writer, "CAPACITY {}", CAPACITY)?;

    for _ in 0..OPERATION_COUNT {
        writeln!(writer, "{}", Operation::random(rng))?;
    }

    Ok(())
}

/// Generate a workload file at the given path
///
/// Truncates any existing file, so repeated runs replace rather than
/// append. The handle is dropped on every exit path, including write
/// failures; the explicit flush keeps buffered write errors from being
/// swallowed on drop.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut rng = rand::thread_rng();

    write_workload(&mut writer, &mut rng)?;
    writer.flush()?;

    Ok(())
}
