//! Configuration for conversion behavior.
//!
//! [`ConvertConfig`] controls how much of the input file is pulled into
//! memory per read. The block size bounds peak memory use: the converter
//! never holds more than one block plus the pending partial record.
//!
//! # Example
//!
//! ```
//! use dmf2csv::ConvertConfig;
//!
//! // 1 MiB blocks instead of the default 100 MiB
//! let config = ConvertConfig::new(1024 * 1024)?;
//! # Ok::<(), dmf2csv::ConvertError>(())
//! ```

use crate::error::ConvertError;

/// Default read block size (100 MiB).
pub const DEFAULT_BLOCK_SIZE: usize = 100 * 1024 * 1024;

/// Configuration for a conversion run.
///
/// The block size is the read quantum of the streaming loop. Any value
/// larger than zero is valid; records crossing a block boundary are
/// reassembled by the reader, so the choice only affects memory use and
/// syscall count, never output.
///
/// # Example
///
/// ```
/// use dmf2csv::ConvertConfig;
///
/// // Use the default configuration
/// let config = ConvertConfig::default();
///
/// // Builder pattern
/// let config = ConvertConfig::default().with_block_size(64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConvertConfig {
    /// Read block size in bytes.
    block_size: usize,
}

impl ConvertConfig {
    /// Creates a new configuration with the specified block size.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidConfig`] if `block_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dmf2csv::ConvertConfig;
    ///
    /// let config = ConvertConfig::new(8192)?;
    /// assert_eq!(config.block_size(), 8192);
    /// # Ok::<(), dmf2csv::ConvertError>(())
    /// ```
    pub fn new(block_size: usize) -> Result<Self, ConvertError> {
        if block_size == 0 {
            return Err(ConvertError::InvalidConfig {
                message: "block size must be non-zero",
            });
        }

        Ok(Self { block_size })
    }

    /// Sets the block size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ConvertConfig::validate`] to check if the configuration is valid.
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Returns the block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use dmf2csv::ConvertConfig;
    ///
    /// let config = ConvertConfig::default().with_block_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConvertError> {
        Self::new(self.block_size).map(|_| ())
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.block_size(), DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConvertConfig::default().with_block_size(4096);
        assert_eq!(config.block_size(), 4096);
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let result = ConvertConfig::new(0);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_after_builder() {
        assert!(ConvertConfig::default().with_block_size(0).validate().is_err());
        assert!(ConvertConfig::default().with_block_size(1).validate().is_ok());
    }
}
