//! Connection-failure classification.
//!
//! The transport layer is the producer of the failures inspected here; this
//! module only requires that a failure expose a [`FailureKind`]. The
//! classifier is a total match over the three kinds and is terminal in
//! every branch: its sole job is error-code selection, never recovery.
//!
//! # Decision tree
//!
//! | Kind                      | Code                        | Attributes          |
//! |---------------------------|-----------------------------|---------------------|
//! | `Timeout`                 | [`codes::CONNECTION_FAILED_DETAIL`] | device, host |
//! | `HttpStatus(s)`, `s > 0`  | [`codes::CONNECTION_FAILED_DETAIL`] | device, host |
//! | `HttpStatus(s)`, `s <= 0` | [`codes::CONNECTION_FAILED`]        | device, host |
//! | `Other`                   | unset                       | none                |
//!
//! A positive HTTP status is inspected but does not currently select a
//! distinct template beyond the `> 0` split. The catch-all branch emits an
//! error with the code unset rather than failing internally; consumers
//! treat an unset code as "unclassified failure".

use crate::{codes, CoreError, ErrorParts, JoinPolicy, SharedCause};
use std::error::Error;
use std::sync::Arc;

/// The concrete kind of a caught transport failure, as reported by the
/// transport collaborator.
///
/// A closed variant instead of runtime type inspection: the transport layer
/// tags its failures, and classification becomes a total match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The socket timed out before the endpoint responded.
    Timeout,
    /// An HTTP-level failure carrying the transport's status code. A value
    /// of zero or below means no usable status was observed.
    HttpStatus(i32),
    /// Any other failure kind.
    Other,
}

/// Seam to the external transport layer.
///
/// Implemented by the transport's failure type so the classifier can
/// inspect the kind without knowing the concrete transport.
pub trait TransportFailure: Error + Send + Sync + 'static {
    /// Report the concrete kind of this failure.
    fn kind(&self) -> FailureKind;
}

/// Classify a caught transport failure and raise the canonical error.
///
/// Never returns normally: every branch raises a [`CoreError`] with the
/// original failure attached as the cause. `device_address` and
/// `host_name_or_address` become the two positional attributes, in that
/// order, for every classified branch.
pub fn classify_connection_failure<T, E>(
    cause: E,
    device_address: &str,
    host_name_or_address: &str,
) -> crate::Result<T>
where
    E: TransportFailure,
{
    let kind = cause.kind();
    let source: SharedCause = Arc::new(cause);

    let err = match kind {
        FailureKind::Timeout => connection_error(
            codes::CONNECTION_FAILED_DETAIL,
            source,
            device_address,
            host_name_or_address,
        ),
        FailureKind::HttpStatus(status) if status > 0 => connection_error(
            codes::CONNECTION_FAILED_DETAIL,
            source,
            device_address,
            host_name_or_address,
        ),
        FailureKind::HttpStatus(_) => connection_error(
            codes::CONNECTION_FAILED,
            source,
            device_address,
            host_name_or_address,
        ),
        // Unclassified: cause only, code left unset.
        FailureKind::Other => CoreError::new().with_shared_source(source),
    };
    Err(err)
}

fn connection_error(
    code: i32,
    source: SharedCause,
    device_address: &str,
    host_name_or_address: &str,
) -> CoreError {
    ErrorParts {
        code: Some(code),
        source: Some(source),
        values: &[device_address, host_name_or_address],
        join: JoinPolicy::None,
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    /// Stand-in for the transport layer's failure type.
    #[derive(Debug)]
    struct FakeTransportError {
        kind: FailureKind,
    }

    impl fmt::Display for FakeTransportError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "transport failure: {:?}", self.kind)
        }
    }

    impl Error for FakeTransportError {}

    impl TransportFailure for FakeTransportError {
        fn kind(&self) -> FailureKind {
            self.kind
        }
    }

    fn classify(kind: FailureKind) -> CoreError {
        classify_connection_failure::<(), _>(
            FakeTransportError { kind },
            "10.0.0.5",
            "host1",
        )
        .unwrap_err()
    }

    #[test]
    fn timeout_maps_to_detail_code() {
        let err = classify(FailureKind::Timeout);
        assert_eq!(err.code(), Some(codes::CONNECTION_FAILED_DETAIL));
        assert_eq!(err.attributes(), ["10.0.0.5", "host1"]);
        assert!(Error::source(&err).is_some());
    }

    #[test]
    fn positive_http_status_maps_to_detail_code() {
        let err = classify(FailureKind::HttpStatus(503));
        assert_eq!(err.code(), Some(codes::CONNECTION_FAILED_DETAIL));
        assert_eq!(err.attributes(), ["10.0.0.5", "host1"]);
    }

    #[test]
    fn zero_http_status_maps_to_plain_code() {
        let err = classify(FailureKind::HttpStatus(0));
        assert_eq!(err.code(), Some(codes::CONNECTION_FAILED));
        assert_eq!(err.attributes(), ["10.0.0.5", "host1"]);
    }

    #[test]
    fn negative_http_status_maps_to_plain_code() {
        let err = classify(FailureKind::HttpStatus(-1));
        assert_eq!(err.code(), Some(codes::CONNECTION_FAILED));
    }

    #[test]
    fn other_failures_stay_unclassified_with_cause_only() {
        let err = classify(FailureKind::Other);
        assert_eq!(err.code(), None);
        assert!(!err.is_classified());
        assert!(err.attributes().is_empty());
        assert!(Error::source(&err).is_some());
    }

    #[test]
    fn cause_message_survives_chaining() {
        let err = classify(FailureKind::Timeout);
        let chained = Error::source(&err).unwrap();
        assert!(chained.to_string().contains("Timeout"));
    }
}
