//! Error types for the product catalog engine
//!
//! Most of the pipeline is infallible by construction: the CSV codec has no
//! fail path, filtering and rendering are pure transformations, and startup
//! load failures degrade to empty collections. The errors that remain are
//! user-facing (credential rejection, bad edit targets) or environmental
//! (file I/O, snapshot serialization).

use thiserror::Error;

/// Main error type for the catalog engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// An explicitly selected import file could not be read
    ///
    /// Only raised for files the user asked to import; a kind with no file
    /// selected is simply left unchanged.
    #[error("Failed to read import file '{path}': {message}")]
    ImportRead {
        /// Path of the file that failed to read
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// Edit targeted a product index outside the collection
    #[error("Product index {index} out of range (catalog has {len} products)")]
    ProductIndex {
        /// The requested index
        index: usize,
        /// Current number of products
        len: usize,
    },

    /// Edit targeted a field name the record does not have
    #[error("Unknown field '{field}'")]
    UnknownField {
        /// The unrecognized field name
        field: String,
    },

    /// The entered credential did not match the configured gate value
    ///
    /// Reported immediately and synchronously; no stored state changes.
    #[error("Credential rejected")]
    CredentialRejected,

    /// Snapshot serialization failed
    #[error("Snapshot error: {message}")]
    Snapshot {
        /// Description of the serialization failure
        message: String,
    },
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        CatalogError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Snapshot {
            message: error.to_string(),
        }
    }
}

impl CatalogError {
    /// Create an ImportRead error
    pub fn import_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::ImportRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a ProductIndex error
    pub fn product_index(index: usize, len: usize) -> Self {
        CatalogError::ProductIndex { index, len }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: &str) -> Self {
        CatalogError::UnknownField {
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::io(
        CatalogError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::import_read(
        CatalogError::import_read("fees.csv", "No such file"),
        "Failed to read import file 'fees.csv': No such file"
    )]
    #[case::product_index(
        CatalogError::product_index(7, 3),
        "Product index 7 out of range (catalog has 3 products)"
    )]
    #[case::unknown_field(
        CatalogError::unknown_field("colour"),
        "Unknown field 'colour'"
    )]
    #[case::credential(CatalogError::CredentialRejected, "Credential rejected")]
    fn test_error_display(#[case] error: CatalogError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: CatalogError = io_error.into();
        assert!(matches!(error, CatalogError::Io { .. }));
    }
}
