//! Common trait for model access backends.

use super::InterchangeError;
use crate::model::Model;

/// A backend that turns raw document bytes into a typed [`Model`].
///
/// The extraction engine only ever sees the resulting `Model`; a backend is
/// the single place that touches bytes.
pub trait ModelSource: Send + Sync {
    /// Human-readable name of the backend.
    fn name(&self) -> &'static str;

    /// File extension(s) this backend reads.
    fn extensions(&self) -> &'static [&'static str];

    /// Read a model from bytes.
    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError>;

    /// Quick check that the input looks like something this backend reads.
    ///
    /// This does not fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        std::str::from_utf8(input)
            .map(|_| ())
            .map_err(|e| InterchangeError::xml(format!("Invalid UTF-8: {e}")))
    }
}
