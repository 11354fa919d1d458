//! dmf2csv
//!
//! Streaming converter for the fixed-width SSN Death Master File (DMF)
//! format to CSV.
//!
//! `dmf2csv` reads the proprietary 100-character-per-record DMF layout in
//! large blocks and emits one CSV row per valid record. It is built around
//! two small primitives:
//!
//! - [`BlockReader`] - streams an input source in bounded blocks while
//!   guaranteeing no record is ever split across two blocks
//! - [`DmfRecord`] - fixed-offset field extraction and normalization for a
//!   single 100-character record line
//!
//! The crate intentionally:
//! - does NOT load the whole input into memory
//! - does NOT run anything concurrently
//! - does NOT validate record contents beyond line length
//! - does NOT support configurable column layouts
//!
//! It only does one thing: **Read DMF records → write CSV rows**
//!
//! # Example
//!
//! ```no_run
//! use dmf2csv::{ConvertConfig, ConvertError, Converter};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConvertError> {
//!     let converter = Converter::new(ConvertConfig::default());
//!     let summary = converter.convert_path(Path::new("dmf.txt"), Path::new("dmf.csv"))?;
//!     println!("wrote {} records", summary.records_written);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod convert;
mod error;
mod normalize;
mod reader;
mod record;

//
// Public surface (intentionally tiny)
//

pub use config::{ConvertConfig, DEFAULT_BLOCK_SIZE};
pub use convert::{ConvertSummary, Converter};
pub use error::ConvertError;
pub use reader::{BlockReader, split_last_newline};
pub use record::{CSV_HEADER, DmfRecord, RECORD_LEN};
