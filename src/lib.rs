//! # wsman-errors
//!
//! Structured error construction and classification for clients of remote
//! hardware management endpoints (BMC-class devices reached over
//! WS-Management/HTTP).
//!
//! ## Design Philosophy
//!
//! 1. **One canonical error shape** — every failure path produces a
//!    [`CoreError`] carrying a numeric code, an ordered attribute list, and
//!    an optional linked cause, never an ad-hoc error type
//! 2. **Codes select templates** — the numeric code picks an externally
//!    maintained, localizable message template; attributes are positional
//!    substitutions into it, so attribute order is part of the contract
//! 3. **Classification is total** — a caught transport failure always maps
//!    to a raised error; the catch-all branch leaves the code unset rather
//!    than failing internally
//! 4. **Stateless and synchronous** — every operation is a pure function
//!    from its arguments to a returned or raised value, safe to call from
//!    unrelated threads with no coordination
//!
//! ## Raising vs. building
//!
//! The factory keeps two distinct families:
//!
//! - `fail_*` operations always return `Err` and are typed so call sites
//!   can `return` them directly from any fallible function
//! - `error*` operations build and return the value, leaving the decision
//!   to raise with the caller
//!
//! Callers rely on which family always raises; the two are never collapsed.
//!
//! ## Quick Start
//!
//! ```rust
//! use wsman_errors::{codes, factory, Result};
//!
//! fn check_power_state(state: &str) -> Result<()> {
//!     if state.is_empty() {
//!         return factory::fail_with_attributes(
//!             codes::CONNECTION_FAILED,
//!             None,
//!             &["10.0.0.5", "host1"],
//!         );
//!     }
//!     Ok(())
//! }
//!
//! let err = check_power_state("").unwrap_err();
//! assert_eq!(err.code(), Some(wsman_errors::codes::CONNECTION_FAILED));
//! assert_eq!(err.attributes(), ["10.0.0.5", "host1"]);
//! ```
//!
//! ## Classifying transport failures
//!
//! The transport layer hands the classifier a failure exposing a
//! [`FailureKind`]; the classifier selects the canonical code and raises:
//!
//! ```rust,ignore
//! match client.enumerate(&endpoint) {
//!     Ok(items) => items,
//!     Err(cause) => {
//!         return classify_connection_failure(cause, &device_addr, &host);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;
use std::error::Error;
use std::fmt;
use std::result;
use std::sync::Arc;

pub mod classify;
pub mod codes;
pub mod factory;
pub mod logging;
pub mod models;

pub use classify::*;
pub use factory::*;
pub use logging::*;
pub use models::*;

/// Type alias for Results using the canonical error type.
pub type Result<T> = result::Result<T, CoreError>;

/// Shared handle to the originating lower-level failure.
///
/// Causes are reference-counted rather than boxed: the structured error
/// shares ownership of the failure for diagnostic chaining and never copies
/// or mutates it.
pub type SharedCause = Arc<dyn Error + Send + Sync + 'static>;

/// The canonical structured error value.
///
/// # Key Properties
///
/// - `code` is set once at construction; `None` is the "unset code"
///   sentinel meaning an unclassified failure, not the absence of an error
/// - `attributes` is always a real (possibly empty) sequence, never a null
///   container, and insertion order is significant
/// - the linked cause, when present, is shared via [`SharedCause`] and
///   exposed through [`std::error::Error::source`]
///
/// Errors are created fresh for every failure occurrence and either
/// returned to a caller or raised immediately; they are never pooled or
/// reused.
#[must_use = "errors should be returned or logged"]
pub struct CoreError {
    code: Option<i32>,
    attributes: SmallVec<[String; 4]>,
    source: Option<SharedCause>,
}

impl CoreError {
    /// Create an error with no code, no attributes, and no cause.
    ///
    /// This is the catch-all shape the classifier emits when no
    /// classification branch matches. Consumers must treat the unset code
    /// as "unclassified failure".
    #[inline]
    pub fn new() -> Self {
        Self {
            code: None,
            attributes: SmallVec::new(),
            source: None,
        }
    }

    /// Set the error code. Codes are set once at construction time and
    /// never reassigned afterward.
    #[inline]
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Append one context attribute. Attributes are positional template
    /// substitutions, so append order matters.
    #[inline]
    pub fn with_attribute(mut self, value: impl Into<String>) -> Self {
        self.attributes.push(value.into());
        self
    }

    /// Attach a shared cause for diagnostic chaining.
    #[inline]
    pub fn with_shared_source(mut self, source: SharedCause) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach an owned cause, taking shared ownership of it.
    #[inline]
    pub fn with_source<E>(self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_source(Arc::new(source))
    }

    /// Get the error code, or `None` for an unclassified failure.
    #[inline]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Get the ordered attribute sequence.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Check whether a classification matched (the code is set).
    #[inline]
    pub const fn is_classified(&self) -> bool {
        self.code.is_some()
    }

    /// Get the shared cause handle, if one is attached.
    ///
    /// For plain chain walking prefer [`std::error::Error::source`]; this
    /// accessor exists for callers that need to retain shared ownership.
    #[inline]
    pub fn shared_source(&self) -> Option<&SharedCause> {
        self.source.as_ref()
    }

    /// Create a borrowed structured report for log rendering.
    ///
    /// The returned [`ErrorReport`] borrows from `self` and cannot outlive
    /// this error, which keeps log formatting allocation-free and prevents
    /// retention of error data beyond the logging call.
    #[inline]
    pub fn report(&self) -> ErrorReport<'_> {
        ErrorReport::new(
            self.code,
            &self.attributes,
            self.source.as_ref().map(|s| s.as_ref() as &(dyn Error + 'static)),
        )
    }

    /// Callback-style report access for frameworks that need it.
    ///
    /// ```rust
    /// # use wsman_errors::factory;
    /// # let err = factory::error(20249);
    /// err.with_report(|report| {
    ///     let mut line = String::new();
    ///     report.write_to(&mut line).unwrap();
    ///     // hand `line` to the logger; report dies here
    /// });
    /// ```
    #[inline]
    pub fn with_report<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorReport<'_>) -> R,
    {
        let report = self.report();
        f(&report)
    }
}

impl Default for CoreError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CoreError {
    /// Code-oriented rendering, allocation-free.
    ///
    /// Format: `"management endpoint error {code}: {attr0}, {attr1}"`, or
    /// `"unclassified management endpoint failure"` when no code is set.
    ///
    /// This is a diagnostic fallback; user-facing text comes from the
    /// external localization layer that owns the code's message template.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "management endpoint error {}", code)?,
            None => f.write_str("unclassified management endpoint failure")?,
        }
        let mut sep = ": ";
        for attribute in &self.attributes {
            f.write_str(sep)?;
            f.write_str(attribute)?;
            sep = ", ";
        }
        Ok(())
    }
}

impl fmt::Debug for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreError")
            .field("code", &self.code)
            .field("attributes", &self.attributes)
            .field("source", &self.source.as_ref().map(|_| "<PRESENT>"))
            .finish()
    }
}

impl PartialEq for CoreError {
    /// Field equality on code and attributes; identity equality on the
    /// cause (two errors are equal only when they share the same cause
    /// allocation, or both have none).
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.attributes == other.attributes
            && match (&self.source, &other.source) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn Error + 'static))
    }
}
