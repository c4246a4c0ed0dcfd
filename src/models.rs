//! Precondition-violation error for public-API inputs.
//!
//! [`InvalidArgumentsError`] is the degenerate second entity of this crate:
//! it has no code concept and never carries a cause. It holds exactly one
//! synthesized attribute, the offending value names collapsed into a single
//! space-joined string by the factory.

use std::error::Error;
use std::fmt;

/// Error raised when a caller passes malformed or missing input to the
/// library's own public API.
///
/// The single attribute is the trailing-space join of the offending value
/// names: `["A", "B"]` becomes `"A B "`. That exact formatting is part of
/// the compatibility contract with downstream message templates, including
/// the separator after the last token.
#[must_use = "errors should be returned or logged"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentsError {
    attribute: String,
}

impl InvalidArgumentsError {
    /// Wrap an already-joined attribute string.
    ///
    /// Call sites go through [`crate::factory::invalid_arguments`], which
    /// owns the join policy; this constructor only stores the result.
    #[inline]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Get the synthesized attribute (the joined value names).
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl fmt::Display for InvalidArgumentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arguments: {}", self.attribute)
    }
}

impl Error for InvalidArgumentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_attribute_verbatim() {
        let err = InvalidArgumentsError::new("serviceTag hostName ");
        assert_eq!(err.attribute(), "serviceTag hostName ");
    }

    #[test]
    fn display_includes_attribute() {
        let err = InvalidArgumentsError::new("powerState ");
        assert_eq!(err.to_string(), "invalid arguments: powerState ");
    }

    #[test]
    fn never_carries_a_cause() {
        let err = InvalidArgumentsError::new("x ");
        assert!(Error::source(&err).is_none());
    }
}
