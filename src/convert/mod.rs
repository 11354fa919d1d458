//! The conversion driver - read blocks, transform records, write CSV.
//!
//! [`Converter`] ties the two halves together: [`BlockReader`] supplies
//! line-aligned blocks, each block is split into record lines, and every
//! valid line becomes one CSV row. The loop is single-threaded and
//! fail-fast: a read or write error aborts the run, a wrong-length line
//! only costs a warning.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::reader::BlockReader;
use crate::record::{CSV_HEADER, DmfRecord, RECORD_LEN};

/// Counters reported after a successful conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of CSV data rows written (header excluded).
    pub records_written: u64,

    /// Number of non-empty lines skipped for having the wrong length.
    pub lines_skipped: u64,

    /// Number of blocks handed to the transformer.
    pub blocks_processed: u64,
}

/// Converts DMF input streams to CSV output streams.
///
/// # Example
///
/// ```
/// use dmf2csv::{ConvertConfig, Converter};
/// use std::io::Cursor;
///
/// let converter = Converter::new(ConvertConfig::default());
/// let mut output = Vec::new();
/// let summary = converter.convert(Cursor::new(&b""[..]), &mut output)?;
///
/// assert_eq!(summary.records_written, 0);
/// // Header is written even for empty input
/// assert!(output.starts_with(b"Type,"));
/// # Ok::<(), dmf2csv::ConvertError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Converts a byte stream of DMF records into CSV on `output`.
    ///
    /// Writes the 13-column header first, then one row per valid record
    /// line, flushing the CSV writer after each block and once at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] on an invalid configuration, a read failure,
    /// or a CSV write failure. All are fatal; nothing is retried.
    pub fn convert<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<ConvertSummary, ConvertError> {
        self.config.validate()?;

        let mut csv = csv::Writer::from_writer(output);
        csv.write_record(CSV_HEADER)?;
        csv.flush()?;

        let mut summary = ConvertSummary::default();

        for block in BlockReader::new(input, self.config) {
            let block = block?;
            let (written, skipped) = write_block(&block, &mut csv)?;

            summary.blocks_processed += 1;
            summary.records_written += written;
            summary.lines_skipped += skipped;

            debug!(
                block_bytes = block.len(),
                records = written,
                skipped,
                "processed block"
            );
        }

        csv.flush()?;
        Ok(summary)
    }

    /// Opens `input`, creates `output`, and runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the input cannot be opened or the
    /// output cannot be created, plus everything [`Converter::convert`]
    /// can return.
    pub fn convert_path(&self, input: &Path, output: &Path) -> Result<ConvertSummary, ConvertError> {
        let input = File::open(input)?;
        let output = File::create(output)?;
        self.convert(input, BufWriter::new(output))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertConfig::default())
    }
}

/// Transforms one line-aligned block into CSV rows.
///
/// Empty lines are skipped silently, wrong-length lines with a warning.
/// Returns `(rows_written, lines_skipped)` for the block. A sink failure
/// stops the block immediately; the remaining lines are not processed.
fn write_block<W: Write>(
    block: &[u8],
    csv: &mut csv::Writer<W>,
) -> Result<(u64, u64), ConvertError> {
    let mut written = 0u64;
    let mut skipped = 0u64;

    for line in block.split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }

        let Some(record) = DmfRecord::parse(line) else {
            warn!(
                length = line.len(),
                expected = RECORD_LEN,
                "skipping line with unexpected length"
            );
            skipped += 1;
            continue;
        };

        csv.write_record(&record.normalize().into_row())?;
        written += 1;
    }

    csv.flush()?;
    Ok((written, skipped))
}
