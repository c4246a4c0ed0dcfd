//! Borrowed structured report for log rendering.
//!
//! [`ErrorReport`] borrows from the [`CoreError`] that created it and
//! cannot outlive it, so a logging framework consumes the data immediately
//! instead of retaining it. Rendering writes directly into a caller
//! supplied `fmt::Write` with no intermediate allocation, and individual
//! fields are truncated so a pathological attribute cannot blow up log
//! output.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Maximum length for any individual field in rendered output.
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Indicator appended to truncated fields.
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log view over a [`CoreError`].
///
/// Obtained via [`CoreError::report`] or [`CoreError::with_report`]; the
/// lifetime ties the report to the error.
///
/// ```rust
/// use wsman_errors::factory;
///
/// let err = factory::error_for_param(20249, None, "host1");
/// let mut line = String::new();
/// err.report().write_to(&mut line).unwrap();
/// assert_eq!(line, "[code=20249] attr0='host1'");
/// ```
///
/// [`CoreError`]: crate::CoreError
/// [`CoreError::report`]: crate::CoreError::report
/// [`CoreError::with_report`]: crate::CoreError::with_report
#[derive(Debug)]
pub struct ErrorReport<'a> {
    code: Option<i32>,
    attributes: &'a [String],
    source: Option<&'a (dyn Error + 'static)>,
}

impl<'a> ErrorReport<'a> {
    #[inline]
    pub(crate) fn new(
        code: Option<i32>,
        attributes: &'a [String],
        source: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Self {
            code,
            attributes,
            source,
        }
    }

    /// The error code, or `None` for an unclassified failure.
    #[inline]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// The ordered attribute sequence.
    #[inline]
    pub const fn attributes(&self) -> &'a [String] {
        self.attributes
    }

    /// The chained cause, if one is attached.
    #[inline]
    pub const fn source(&self) -> Option<&'a (dyn Error + 'static)> {
        self.source
    }

    /// Render the report into a writer without allocating for the common
    /// case.
    ///
    /// Format: `[code=238034] attr0='10.0.0.5' attr1='host1'
    /// source='connection timed out'`, with `[code=unset]` for
    /// unclassified failures. Attribute fields longer than an internal
    /// bound are truncated with a visible indicator.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[code={}]", code)?,
            None => f.write_str("[code=unset]")?,
        }

        for (idx, attribute) in self.attributes.iter().enumerate() {
            write!(f, " attr{}='{}'", idx, bounded(attribute))?;
        }

        if let Some(source) = self.source {
            write!(f, " source='{}'", source)?;
        }

        Ok(())
    }
}

/// Bound a field for display, truncating at a UTF-8 boundary with a
/// visible indicator. Borrows when no truncation is needed.
fn bounded(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let limit = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());
    let mut idx = limit;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut out = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    out.push_str(&s[..idx]);
    out.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use std::io;

    #[test]
    fn renders_code_and_attributes() {
        let err = factory::fail_with_attributes::<()>(238034, None, &["10.0.0.5", "host1"])
            .unwrap_err();
        let mut line = String::new();
        err.report().write_to(&mut line).unwrap();
        assert_eq!(line, "[code=238034] attr0='10.0.0.5' attr1='host1'");
    }

    #[test]
    fn renders_unset_code() {
        let err = crate::CoreError::new();
        let mut line = String::new();
        err.report().write_to(&mut line).unwrap();
        assert_eq!(line, "[code=unset]");
    }

    #[test]
    fn renders_source() {
        let err = factory::error_with_source(20249, io::Error::from(io::ErrorKind::TimedOut));
        let mut line = String::new();
        err.report().write_to(&mut line).unwrap();
        assert!(line.starts_with("[code=20249] source='"));
    }

    #[test]
    fn truncates_long_attributes() {
        let long = "a".repeat(MAX_FIELD_OUTPUT_LEN + 100);
        let err = factory::error_for_param(20249, None, &long);

        let mut line = String::new();
        err.report().write_to(&mut line).unwrap();

        assert!(line.contains(TRUNCATION_INDICATOR));
        assert!(line.len() < MAX_FIELD_OUTPUT_LEN + 64);
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        let long = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let bounded = bounded(&long);
        assert!(std::str::from_utf8(bounded.as_bytes()).is_ok());
        assert!(bounded.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn short_fields_borrow() {
        let bounded = bounded("short");
        assert!(matches!(bounded, Cow::Borrowed(_)));
    }

    #[test]
    fn callback_report_matches_direct_report() {
        let err = factory::error(20249);
        let direct = {
            let mut line = String::new();
            err.report().write_to(&mut line).unwrap();
            line
        };
        let via_callback = err.with_report(|report| {
            let mut line = String::new();
            report.write_to(&mut line).unwrap();
            line
        });
        assert_eq!(direct, via_callback);
    }
}
