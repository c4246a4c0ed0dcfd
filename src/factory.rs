//! Error factory: one parameterized constructor plus thin named wrappers.
//!
//! # Join Policies
//!
//! The attribute shape each call site produces is part of the contract
//! with its message template, and three historically distinct shaping
//! policies exist:
//!
//! - **TrailingSpace** — all values collapse into one attribute with a
//!   space *after* each token, including the last: `["A","B"]` → `"A B "`
//! - **LeadingSpace** — all values collapse into one attribute with a
//!   space *before* each token: `["A","B"]` → `" A B"`
//! - **None** — values pass through verbatim as distinct attributes, in
//!   order; the only policy that preserves multiple attributes
//!
//! These are kept as three separately named operations rather than unified,
//! because downstream templates depend on the exact shape each call site
//! has always produced.
//!
//! # Raising vs. building
//!
//! The `fail_*` family always returns `Err` and is generic over `T`, so a
//! caller can `return factory::fail_joined(code, &names);` from any
//! fallible function. The `error*` family returns the built value and
//! leaves raising to the caller. Callers rely on which family raises; the
//! two are distinct on purpose.

use crate::{CoreError, InvalidArgumentsError, SharedCause};
use std::error::Error;
use std::sync::Arc;

// ============================================================================
// Join Policies
// ============================================================================

/// How a list of context values is shaped into error attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinPolicy {
    /// Each value becomes its own attribute, order preserved.
    None,
    /// One attribute; a space follows every token, including the last.
    TrailingSpace,
    /// One attribute; a space precedes every token.
    LeadingSpace,
}

fn join_trailing(values: &[&str]) -> String {
    let mut joined = String::new();
    for value in values {
        joined.push_str(value);
        joined.push(' ');
    }
    joined
}

fn join_leading(values: &[&str]) -> String {
    let mut joined = String::new();
    for value in values {
        joined.push(' ');
        joined.push_str(value);
    }
    joined
}

// ============================================================================
// Parameterized Constructor
// ============================================================================

/// Options record for building a [`CoreError`] in one step.
///
/// The named wrappers below all reduce to an `ErrorParts` build; the record
/// is public so callers with unusual shapes can construct directly.
///
/// ```rust
/// use wsman_errors::{ErrorParts, JoinPolicy};
///
/// let err = ErrorParts {
///     code: Some(20249),
///     source: None,
///     values: &["10.0.0.5", "host1"],
///     join: JoinPolicy::None,
/// }
/// .build();
/// assert_eq!(err.attributes(), ["10.0.0.5", "host1"]);
/// ```
pub struct ErrorParts<'a> {
    /// Error code, or `None` to leave the error unclassified.
    pub code: Option<i32>,
    /// Shared cause to attach, if any.
    pub source: Option<SharedCause>,
    /// Context values, shaped per `join`.
    pub values: &'a [&'a str],
    /// Attribute shaping policy.
    pub join: JoinPolicy,
}

impl ErrorParts<'_> {
    /// Build the error value. Pure; never raises.
    ///
    /// Under either space policy an empty value list still yields a single
    /// empty attribute, matching the historical joining behavior.
    pub fn build(self) -> CoreError {
        let mut err = CoreError::new();
        if let Some(code) = self.code {
            err = err.with_code(code);
        }
        if let Some(source) = self.source {
            err = err.with_shared_source(source);
        }
        match self.join {
            JoinPolicy::None => {
                for value in self.values {
                    err = err.with_attribute(*value);
                }
            }
            JoinPolicy::TrailingSpace => {
                err = err.with_attribute(join_trailing(self.values));
            }
            JoinPolicy::LeadingSpace => {
                err = err.with_attribute(join_leading(self.values));
            }
        }
        err
    }
}

// ============================================================================
// Raising Family (always Err)
// ============================================================================

/// Raise an [`InvalidArgumentsError`] naming the offending input values.
///
/// The names collapse into one trailing-space-joined attribute:
/// `["A","B"]` → `"A B "`. Always returns `Err`.
#[inline]
pub fn invalid_arguments<T>(value_names: &[&str]) -> Result<T, InvalidArgumentsError> {
    Err(InvalidArgumentsError::new(join_trailing(value_names)))
}

/// Raise a [`CoreError`] with one leading-space-joined attribute and no
/// cause. Always returns `Err`.
#[inline]
pub fn fail_joined<T>(code: i32, value_names: &[&str]) -> crate::Result<T> {
    Err(ErrorParts {
        code: Some(code),
        source: None,
        values: value_names,
        join: JoinPolicy::LeadingSpace,
    }
    .build())
}

/// Raise a [`CoreError`] with one leading-space-joined attribute and the
/// given cause attached. Always returns `Err`.
#[inline]
pub fn fail_joined_with_source<T, E>(
    code: i32,
    source: E,
    value_names: &[&str],
) -> crate::Result<T>
where
    E: Error + Send + Sync + 'static,
{
    Err(ErrorParts {
        code: Some(code),
        source: Some(Arc::new(source)),
        values: value_names,
        join: JoinPolicy::LeadingSpace,
    }
    .build())
}

/// Raise a [`CoreError`] whose attribute sequence is exactly
/// `attribute_values`, unmodified and in order.
///
/// This is the only raising path that preserves multiple distinct
/// attributes rather than collapsing them into one joined string. A zero
/// length slice yields an empty attribute sequence. Always returns `Err`.
#[inline]
pub fn fail_with_attributes<T>(
    code: i32,
    source: Option<SharedCause>,
    attribute_values: &[&str],
) -> crate::Result<T> {
    Err(ErrorParts {
        code: Some(code),
        source,
        values: attribute_values,
        join: JoinPolicy::None,
    }
    .build())
}

/// Raise a [`CoreError`] carrying only the code. Always returns `Err`.
#[inline]
pub fn fail<T>(code: i32) -> crate::Result<T> {
    Err(error(code))
}

/// Raise a [`CoreError`] carrying the code and a cause. Always returns
/// `Err`.
#[inline]
pub fn fail_with_source<T, E>(code: i32, source: E) -> crate::Result<T>
where
    E: Error + Send + Sync + 'static,
{
    Err(error(code).with_source(source))
}

// ============================================================================
// Building Family (never raises)
// ============================================================================

/// Build a [`CoreError`] with only the code set and an empty attribute
/// sequence.
#[inline]
pub fn error(code: i32) -> CoreError {
    CoreError::new().with_code(code)
}

/// Build a [`CoreError`] with the code set and a cause attached.
#[inline]
pub fn error_with_source<E>(code: i32, source: E) -> CoreError
where
    E: Error + Send + Sync + 'static,
{
    error(code).with_source(source)
}

/// Build a [`CoreError`] with the code, an optional shared cause, and a
/// single verbatim attribute.
#[inline]
pub fn error_for_param(code: i32, source: Option<SharedCause>, param_name: &str) -> CoreError {
    ErrorParts {
        code: Some(code),
        source,
        values: &[param_name],
        join: JoinPolicy::None,
    }
    .build()
}

// ============================================================================
// Tests
// ============================================================================
