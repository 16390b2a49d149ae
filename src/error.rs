//! Error handling for the zcontainers library
//!
//! Every fallible container operation reports failure through [`ZError`].
//! Absent results (missing key, empty container, index past the end on the
//! uniform operations) are `Option::None`, not errors.

use thiserror::Error;

/// Main error type for the zcontainers library
#[derive(Error, Debug)]
pub enum ZError {
    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Memory allocation failures during growth
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Invalid data, e.g. a string buffer holding non-UTF-8 bytes
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Operation resolved to the fallback of a type that does not support it
    #[error("Unsupported operation `{operation}` for {type_name}")]
    Unsupported {
        /// Uniform operation name
        operation: &'static str,
        /// Static type of the handle the operation was invoked on
        type_name: &'static str,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ZError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create an unsupported-operation error
    pub fn unsupported(operation: &'static str, type_name: &'static str) -> Self {
        Self::Unsupported {
            operation,
            type_name,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfMemory { .. } => true,
            Self::OutOfBounds { .. } => false,
            Self::InvalidData { .. } => false,
            Self::Unsupported { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfBounds { .. } => "bounds",
            Self::OutOfMemory { .. } => "memory",
            Self::InvalidData { .. } => "data",
            Self::Unsupported { .. } => "unsupported",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ZError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(ZError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        assert!(check_bounds(5, 10).is_ok());
        assert!(check_bounds(10, 10).is_err());
        assert!(check_bounds(15, 10).is_err());
        assert!(check_bounds(0, 0).is_err());
        assert!(check_bounds(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_error_categories() {
        let io_err = ZError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert_eq!(io_err.category(), "io");
        assert!(io_err.is_recoverable());

        let bounds_err = ZError::out_of_bounds(5, 3);
        assert_eq!(bounds_err.category(), "bounds");
        assert!(!bounds_err.is_recoverable());

        let memory_err = ZError::out_of_memory(1024);
        assert_eq!(memory_err.category(), "memory");
        assert!(memory_err.is_recoverable());

        let data_err = ZError::invalid_data("bad utf-8");
        assert_eq!(data_err.category(), "data");
        assert!(!data_err.is_recoverable());

        let unsupported = ZError::unsupported("push", "Foo");
        assert_eq!(unsupported.category(), "unsupported");
        assert!(!unsupported.is_recoverable());

        let config_err = ZError::configuration("load factor");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let bounds_display = format!("{}", ZError::out_of_bounds(10, 5));
        assert!(bounds_display.contains("Out of bounds"));
        assert!(bounds_display.contains("10"));
        assert!(bounds_display.contains("5"));

        let unsupported = format!("{}", ZError::unsupported("push", "my::Widget"));
        assert!(unsupported.contains("push"));
        assert!(unsupported.contains("my::Widget"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: ZError = io_error.into();
        assert_eq!(err.category(), "io");
        assert!(format!("{}", err).contains("I/O error"));
    }
}
