/*! Identifier trait

All identifiers should implement [Identifier] to be useable in filters and pipelines.
!*/
use crate::error::Error;

use super::Identification;

pub trait Identifier {
    /// returns the top language identification for `text`.
    ///
    /// Fails with [Error::Unidentified] when no language can be found
    /// (empty text, digits or punctuation only...).
    fn identify(&self, text: &str) -> Result<Identification, Error>;
}
