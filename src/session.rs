// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    engine::Engine,
    error::{Error, Result},
    runtime::{EngineGuard, Runtime},
    types::ErrorType,
};
use std::{
    ffi::{c_char, CStr, CString},
    path::Path,
};
use tracing::warn;

/// A live claim on an initialized engine.
///
/// Every engine operation is a method on `Session`. Holding one guarantees
/// the engine has been initialized; dropping it releases the claim and the
/// last release shuts the engine down.
///
/// Each method locks the engine once, performs one logical transaction, and
/// unlocks. Failures are read from the engine's last-error channel before
/// the lock is released, so the reported code always belongs to the failing
/// call. Methods never retry.
///
/// The bound image and every engine parameter are shared by all sessions
/// of a runtime. Only a single method call is atomic: after `bind` on one
/// thread, another thread may bind a different image before the next call
/// runs, so threads sharing a runtime must coordinate which image is bound
/// across a sequence of calls.
///
/// The operations are grouped by concern across the crate's modules: handle
/// management, global state, pixel transfer, file and memory I/O, image
/// information and the utility transforms.
pub struct Session<'rt> {
    runtime: &'rt Runtime,
}

impl<'rt> Session<'rt> {
    pub(crate) fn new(runtime: &'rt Runtime) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &'rt Runtime {
        self.runtime
    }

    pub(crate) fn engine(&self) -> EngineGuard<'rt> {
        self.runtime.engine()
    }

    /// Runs `f` under the engine lock.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut dyn Engine) -> R) -> R {
        let mut engine = self.engine();
        f(&mut **engine)
    }

    /// Runs a native call reporting success as a boolean, converting a
    /// `false` return into `NativeCallFailed` with the engine's error code.
    pub(crate) fn call(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut dyn Engine) -> bool,
    ) -> Result<()> {
        let mut engine = self.engine();
        if f(&mut **engine) {
            Ok(())
        } else {
            Err(failure(&mut **engine, operation))
        }
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.runtime.release();
    }
}

/// Reads the last error and packages it for `operation`.
pub(crate) fn failure(engine: &mut dyn Engine, operation: &'static str) -> Error {
    let code = ErrorType(engine.il_get_error());
    warn!("{} failed: {}", operation, code);
    Error::NativeCallFailed { operation, code }
}

/// Converts a caller string to the engine's narrow, null-terminated form.
pub(crate) fn c_string(what: &str, value: &str) -> Result<CString> {
    if value.is_empty() {
        return Err(Error::invalid(format!("{what} must not be empty")));
    }
    CString::new(value).map_err(|_| Error::invalid(format!("{what} contains a NUL byte")))
}

pub(crate) fn c_path(path: &Path) -> Result<CString> {
    let value = path
        .to_str()
        .ok_or_else(|| Error::invalid(format!("path {} is not UTF-8", path.display())))?;
    c_string("file name", value)
}

/// Copies a borrowed engine string into an owned one.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL terminated string that stays valid
/// for the duration of this call.
pub(crate) unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolver::Variant, testing::FakeEngine};

    #[test]
    fn failed_call_carries_error_code() {
        let fake = FakeEngine::new();
        let runtime = Runtime::with_engine(Variant::current(), fake.clone());
        let session = runtime.acquire();
        fake.fail_next(ErrorType::OUT_OF_MEMORY);
        let err = session.call("ilClearImage", |e| e.il_clear_image()).unwrap_err();
        match err {
            Error::NativeCallFailed { operation, code } => {
                assert_eq!(operation, "ilClearImage");
                assert_eq!(code, ErrorType::OUT_OF_MEMORY);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn strings_are_validated() {
        assert!(c_string("file name", "").is_err());
        assert!(c_string("file name", "a\0b").is_err());
        assert_eq!(c_string("file name", "a.png").unwrap().as_bytes(), b"a.png");
    }

    #[test]
    fn null_engine_string_is_none() {
        assert_eq!(unsafe { owned_string(std::ptr::null()) }, None);
    }
}
