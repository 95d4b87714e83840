// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::types::ErrorType;
use std::io;

/// Errors surfaced by the binding layer.
///
/// `InvalidArgument` is always raised before any native call is made. The
/// remaining variants describe what the engine reported, or why the engine
/// could not be reached at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was rejected locally; the engine was not called.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine returned failure for `operation`.
    ///
    /// `code` is the engine's last-error value read immediately after the
    /// failing call, `ErrorType::NO_ERROR` when the engine did not set one.
    #[error("{operation} failed: {code}")]
    NativeCallFailed {
        operation: &'static str,
        code: ErrorType,
    },

    /// The size query of a query-then-fill transfer returned zero.
    #[error("{operation} returned no data")]
    NoData { operation: &'static str },

    /// The fill phase of a transfer wrote nothing after a non-zero size query.
    #[error("{operation} transferred nothing after reporting {expected} bytes")]
    TransferFailed {
        operation: &'static str,
        expected: u32,
    },

    /// The native libraries could not be loaded or bound.
    #[error("native library {library} unavailable: {reason}")]
    NativeLibraryUnavailable { library: String, reason: String },

    /// The call violates the lifecycle or attribute-stack contract.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Reading from or writing to a caller supplied stream failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_failure_names_the_code() {
        let err = Error::NativeCallFailed {
            operation: "ilConvertImage",
            code: ErrorType::INVALID_CONVERSION,
        };
        assert_eq!(err.to_string(), "ilConvertImage failed: INVALID_CONVERSION");
    }

    #[test]
    fn unknown_code_prints_hex() {
        let err = Error::NativeCallFailed {
            operation: "ilLoadL",
            code: ErrorType(0x0ABC),
        };
        assert_eq!(err.to_string(), "ilLoadL failed: 0x0ABC");
    }
}
