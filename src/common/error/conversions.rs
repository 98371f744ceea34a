//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors raised
//! by the archive and formatting layers into the unified Error type.

use super::types::Error;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Encoding(format!("ZIP error: {}", err))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Encoding(format!("XML write error: {}", err))
    }
}
