//! Canonical error codes observed by downstream consumers.
//!
//! Each code selects a message template maintained by the external
//! localization layer; the error's attributes are substituted positionally
//! into that template. The numeric values are part of the externally
//! observed contract and must not change.
//!
//! The "unset code" sentinel (`CoreError::code() == None`) is not listed
//! here: it is not a template selector but the classifier's catch-all
//! marker for an unclassified failure.

/// Connection with endpoint: `{0}` failed for host: `{1}` detail: `{2}`.
///
/// Raised for socket timeouts and for HTTP failures that carry a positive
/// status code.
pub const CONNECTION_FAILED_DETAIL: i32 = 238034;

/// Connection with endpoint: `{0}` failed for host: `{1}`.
///
/// Raised for HTTP failures whose status code is zero or negative, where
/// no transport detail is available.
pub const CONNECTION_FAILED: i32 = 20249;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        // Externally observed values; a change here breaks downstream
        // template lookup.
        assert_eq!(CONNECTION_FAILED_DETAIL, 238034);
        assert_eq!(CONNECTION_FAILED, 20249);
    }
}
