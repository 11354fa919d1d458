//! Block reader - streams input in bounded blocks aligned to record lines.
//!
//! This module implements the read side of the converter:
//!
//! - [`split_last_newline`] - pure function splitting a buffer after its
//!   last newline
//! - [`BlockReader`] - iterator that yields blocks from a [`std::io::Read`]
//!   source, guaranteeing no line is ever split across two blocks
//!
//! A raw read may end in the middle of a record line. The reader holds that
//! trailing partial line back as the pending remainder and prefixes it to
//! the next block, so every block handed downstream ends exactly at a line
//! boundary. The remainder is the only state carried across reads.

use std::io::Read;

use bytes::Bytes;

use crate::config::ConvertConfig;
use crate::error::ConvertError;

/// Splits a buffer at its last newline.
///
/// Returns `(complete, remainder)` where `complete` ends with the last `\n`
/// in `data` (inclusive) and `remainder` is everything after it. If `data`
/// contains no newline, `complete` is empty and `remainder` is all of
/// `data`. The remainder therefore never contains a newline.
///
/// # Example
///
/// ```
/// use dmf2csv::split_last_newline;
///
/// let (complete, remainder) = split_last_newline(b"one\ntwo\npart");
/// assert_eq!(complete, b"one\ntwo\n");
/// assert_eq!(remainder, b"part");
/// ```
pub fn split_last_newline(data: &[u8]) -> (&[u8], &[u8]) {
    match data.iter().rposition(|&b| b == b'\n') {
        Some(index) => data.split_at(index + 1),
        None => data.split_at(0),
    }
}

/// An iterator that yields line-aligned blocks from a reader.
///
/// `BlockReader` reads up to [`ConvertConfig::block_size`] bytes at a time
/// and yields `Result<Bytes, ConvertError>` blocks. Each yielded block is
/// the pending remainder from the previous read followed by the complete
/// portion of the current read; the trailing partial line becomes the new
/// remainder. At end of input the final remainder (which may hold one last
/// unterminated line) is yielded once, then iteration ends.
///
/// A read error ends iteration after yielding the error once; there is no
/// retry.
///
/// Note: a raw read that contains no newline at all is absorbed entirely
/// into the remainder and reading continues, so input without line breaks
/// grows the remainder without bound.
///
/// # Example
///
/// ```
/// use dmf2csv::{BlockReader, ConvertConfig};
/// use std::io::Cursor;
///
/// let input = Cursor::new(&b"alpha\nbeta\ngamma"[..]);
/// let reader = BlockReader::new(input, ConvertConfig::default().with_block_size(8));
///
/// let blocks: Vec<_> = reader.collect::<Result<Vec<_>, _>>()?;
/// let joined: Vec<u8> = blocks.concat();
/// assert_eq!(joined, b"alpha\nbeta\ngamma");
/// # Ok::<(), dmf2csv::ConvertError>(())
/// ```
pub struct BlockReader<R> {
    reader: R,
    block_size: usize,
    pending: Vec<u8>,
    finished: bool,
}

impl<R: Read> BlockReader<R> {
    /// Creates a new block reader over `reader`.
    ///
    /// # Arguments
    ///
    /// * `reader` - The source of data
    /// * `config` - Conversion configuration providing the block size
    pub fn new(reader: R, config: ConvertConfig) -> Self {
        Self {
            reader,
            block_size: config.block_size(),
            pending: Vec::new(),
            finished: false,
        }
    }

    /// Takes the pending remainder, leaving it empty.
    fn take_pending(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.pending)
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = Result<Bytes, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let mut buf = vec![0u8; self.block_size];
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    // End of stream - flush the final remainder if any
                    self.finished = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    return Some(Ok(Bytes::from(self.take_pending())));
                }
                Ok(n) => {
                    let (complete, remainder) = split_last_newline(&buf[..n]);
                    if complete.is_empty() {
                        // No newline in this read, keep accumulating
                        self.pending.extend_from_slice(remainder);
                        continue;
                    }

                    let mut block = self.take_pending();
                    block.extend_from_slice(complete);
                    self.pending.extend_from_slice(remainder);
                    return Some(Ok(Bytes::from(block)));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &[u8], block_size: usize) -> Vec<Bytes> {
        let config = ConvertConfig::default().with_block_size(block_size);
        BlockReader::new(Cursor::new(input), config)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_split_basic() {
        let (complete, remainder) = split_last_newline(b"a\nb\ncd");
        assert_eq!(complete, b"a\nb\n");
        assert_eq!(remainder, b"cd");
    }

    #[test]
    fn test_split_no_newline() {
        let (complete, remainder) = split_last_newline(b"abc");
        assert_eq!(complete, b"");
        assert_eq!(remainder, b"abc");
    }

    #[test]
    fn test_split_newline_first() {
        let (complete, remainder) = split_last_newline(b"\nabc");
        assert_eq!(complete, b"\n");
        assert_eq!(remainder, b"abc");
    }

    #[test]
    fn test_split_trailing_newline() {
        let (complete, remainder) = split_last_newline(b"abc\n");
        assert_eq!(complete, b"abc\n");
        assert_eq!(remainder, b"");
    }

    #[test]
    fn test_split_empty() {
        let (complete, remainder) = split_last_newline(b"");
        assert_eq!(complete, b"");
        assert_eq!(remainder, b"");
    }

    #[test]
    fn test_remainder_never_contains_newline() {
        for input in [&b"a\nb\nc"[..], b"\n\n\n", b"no newline", b""] {
            let (_, remainder) = split_last_newline(input);
            assert!(!remainder.contains(&b'\n'));
        }
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(read_all(b"", 8).is_empty());
    }

    #[test]
    fn test_blocks_end_on_line_boundaries() {
        let input = b"alpha\nbeta\ngamma\ndelta\n";
        for block_size in 1..=input.len() + 1 {
            let blocks = read_all(input, block_size);
            for block in &blocks[..blocks.len() - 1] {
                assert_eq!(
                    block.last(),
                    Some(&b'\n'),
                    "non-final block must end at a line boundary (block_size {})",
                    block_size
                );
            }
        }
    }

    #[test]
    fn test_concatenation_preserves_input() {
        let input = b"alpha\nbeta\ngamma\ndelta";
        for block_size in 1..=input.len() + 1 {
            let joined: Vec<u8> = read_all(input, block_size).concat();
            assert_eq!(joined, input, "lost bytes at block_size {}", block_size);
        }
    }

    #[test]
    fn test_final_unterminated_line_flushed() {
        let blocks = read_all(b"done\npartial", 6);
        assert_eq!(blocks.last().unwrap().as_ref(), b"partial");
    }

    #[test]
    fn test_no_newline_input_accumulates() {
        // One oversized "record" with no line breaks: absorbed whole
        let blocks = read_all(b"0123456789", 3);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_ref(), b"0123456789");
    }

    #[test]
    fn test_read_error_is_fatal() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let mut reader =
            BlockReader::new(FailingReader, ConvertConfig::default().with_block_size(64));
        assert!(matches!(reader.next(), Some(Err(ConvertError::Io(_)))));
        assert!(reader.next().is_none(), "iteration must end after an error");
    }
}
