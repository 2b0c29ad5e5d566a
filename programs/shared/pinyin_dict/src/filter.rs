use crate::record::{LineError, LineOutcome};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Emitted(usize),
    Skipped,
    Failed,
}

/// Runs one raw input line through `convert` and writes whatever comes out.
///
/// A line that fails is logged with its content and dropped; only write errors come back as `Err`.
pub fn process_line<W: Write>(
    wtr: &mut W,
    raw: &[u8],
    convert: impl FnOnce(&str) -> LineOutcome,
) -> io::Result<Handled> {
    let raw = trim_newline(raw);
    let outcome = match std::str::from_utf8(raw) {
        Ok(line) => match convert(line) {
            LineOutcome::Failed(e) => {
                log::error!("{}:{}", e, line);
                return Ok(Handled::Failed);
            }
            outcome => outcome,
        },
        Err(e) => {
            log::error!("{}:{}", LineError::from(e), String::from_utf8_lossy(raw));
            return Ok(Handled::Failed);
        }
    };
    let records = outcome.records();
    for record in records {
        writeln!(wtr, "{}", record)?;
    }
    Ok(if records.is_empty() {
        Handled::Skipped
    } else {
        Handled::Emitted(records.len())
    })
}

fn trim_newline(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Running totals for the end-of-input summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub lines: usize,
    pub records: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Tally {
    pub fn add(&mut self, handled: Handled) {
        self.lines += 1;
        match handled {
            Handled::Emitted(n) => self.records += n,
            Handled::Skipped => self.skipped += 1,
            Handled::Failed => self.failed += 1,
        }
    }

    pub fn log(&self) {
        log::debug!(
            "{} lines read, {} records written, {} skipped, {} failed",
            self.lines,
            self.records,
            self.skipped,
            self.failed
        );
    }
}
