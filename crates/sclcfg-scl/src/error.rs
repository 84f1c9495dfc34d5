//! Error types for SCL document handling.

use thiserror::Error;

/// Errors that can occur while loading an SCL document.
#[derive(Debug, Error)]
pub enum SclError {
    /// The document is not well-formed XML or does not match the SCL shape.
    #[error("failed to parse SCL document: {source}")]
    Parse {
        /// The underlying deserialization error.
        #[source]
        source: quick_xml::DeError,
    },
}

impl From<quick_xml::DeError> for SclError {
    fn from(source: quick_xml::DeError) -> Self {
        SclError::Parse { source }
    }
}
