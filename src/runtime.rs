// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Process-wide engine ownership and the reference counted lifecycle.
//!
//! A [`Runtime`] pairs one dispatch table with the counter that brackets its
//! use. Callers obtain a [`Session`] through [`Runtime::acquire`]; the first
//! session initializes the core engine and then the utility subsystem, and
//! dropping the last session shuts the engine down.
//!
//! Two locks are involved. The lifecycle lock guards the counter and the
//! initialized flags; the engine lock serializes every foreign call. When
//! both are needed the lifecycle lock is always taken first.

use crate::{
    engine::Engine,
    error::{Error, Result},
    native::NativeEngine,
    resolver::{LibraryPaths, Variant},
    session::Session,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, info, warn};

pub(crate) type EngineGuard<'a> = MutexGuard<'a, Box<dyn Engine>>;

#[derive(Debug, Default)]
struct Lifecycle {
    refs: usize,
    core_ready: bool,
    utility_ready: bool,
}

/// Cached outcome of a failed process-wide resolution.
#[derive(Debug, Clone)]
struct Unavailable {
    library: String,
    reason: String,
}

impl From<&Unavailable> for Error {
    fn from(value: &Unavailable) -> Self {
        Error::NativeLibraryUnavailable {
            library: value.library.clone(),
            reason: value.reason.clone(),
        }
    }
}

/// An engine dispatch table together with its lifecycle state.
pub struct Runtime {
    variant: Variant,
    lifecycle: Mutex<Lifecycle>,
    engine: Mutex<Box<dyn Engine>>,
}

impl Runtime {
    /// Returns the process-wide native runtime, resolving it on first use.
    ///
    /// Library paths come from [`LibraryPaths::from_env`] for the current
    /// [`Variant`]. Resolution runs once per process; its outcome, success or
    /// failure, is cached and returned to every later caller.
    ///
    /// # Errors
    ///
    /// Returns `NativeLibraryUnavailable` when either library could not be
    /// loaded or bound. The same error is returned for the life of the
    /// process.
    pub fn global() -> Result<&'static Runtime> {
        static GLOBAL: OnceLock<Result<Runtime, Unavailable>> = OnceLock::new();

        GLOBAL
            .get_or_init(|| {
                let variant = Variant::current();
                let paths = LibraryPaths::from_env(variant);
                Runtime::load(variant, &paths).map_err(|err| match err {
                    Error::NativeLibraryUnavailable { library, reason } => {
                        Unavailable { library, reason }
                    }
                    other => Unavailable {
                        library: paths.core.display().to_string(),
                        reason: other.to_string(),
                    },
                })
            })
            .as_ref()
            .map_err(Error::from)
    }

    /// Loads the native libraries at `paths` into a new runtime.
    ///
    /// # Errors
    ///
    /// Returns `NativeLibraryUnavailable` when either library could not be
    /// opened or is missing an entry point.
    pub fn load(variant: Variant, paths: &LibraryPaths) -> Result<Self> {
        match NativeEngine::load(paths) {
            Ok(engine) => {
                info!(
                    "resolved {} engine from {} and {}",
                    variant,
                    paths.core.display(),
                    paths.utility.display()
                );
                Ok(Self::with_engine(variant, engine))
            }
            Err(err) => {
                warn!("{} engine unavailable: {}", variant, err);
                Err(err)
            }
        }
    }

    /// Wraps an arbitrary dispatch table.
    pub fn with_engine(variant: Variant, engine: impl Engine + 'static) -> Self {
        Self {
            variant,
            lifecycle: Mutex::new(Lifecycle::default()),
            engine: Mutex::new(Box::new(engine)),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Starts a session, initializing the engine if this is the first one.
    pub fn acquire(&self) -> Session<'_> {
        let mut lifecycle = self.lifecycle();
        if lifecycle.refs == 0 {
            self.init_locked(&mut lifecycle);
        }
        lifecycle.refs += 1;
        debug!("session acquired, {} active", lifecycle.refs);
        Session::new(self)
    }

    /// Initializes the core engine and then the utility subsystem.
    ///
    /// Each step only runs if it has not already, so repeated calls are
    /// harmless.
    pub fn initialize(&self) {
        let mut lifecycle = self.lifecycle();
        self.init_locked(&mut lifecycle);
    }

    /// Shuts the engine down outside of the session counter.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` while any session is alive.
    pub fn shutdown(&self) -> Result<()> {
        let mut lifecycle = self.lifecycle();
        if lifecycle.refs > 0 {
            return Err(Error::PreconditionViolation(format!(
                "cannot shut down with {} active sessions",
                lifecycle.refs
            )));
        }
        self.shutdown_locked(&mut lifecycle);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        let lifecycle = self.lifecycle();
        lifecycle.core_ready && lifecycle.utility_ready
    }

    /// Number of live sessions.
    pub fn ref_count(&self) -> usize {
        self.lifecycle().refs
    }

    pub(crate) fn release(&self) {
        let mut lifecycle = self.lifecycle();
        match lifecycle.refs {
            0 => warn!("session released with no active sessions"),
            1 => {
                lifecycle.refs = 0;
                debug!("last session released");
                self.shutdown_locked(&mut lifecycle);
            }
            _ => {
                lifecycle.refs -= 1;
                debug!("session released, {} active", lifecycle.refs);
            }
        }
    }

    /// Locks the engine for one transaction.
    pub(crate) fn engine(&self) -> EngineGuard<'_> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn init_locked(&self, lifecycle: &mut Lifecycle) {
        if lifecycle.core_ready && lifecycle.utility_ready {
            return;
        }
        let mut engine = self.engine();
        if !lifecycle.core_ready {
            engine.il_init();
            lifecycle.core_ready = true;
        }
        if !lifecycle.utility_ready {
            engine.ilu_init();
            lifecycle.utility_ready = true;
        }
        debug!("engine initialized");
    }

    fn shutdown_locked(&self, lifecycle: &mut Lifecycle) {
        if !lifecycle.core_ready {
            return;
        }
        self.engine().il_shut_down();
        lifecycle.core_ready = false;
        lifecycle.utility_ready = false;
        debug!("engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeEngine;

    fn runtime() -> (Runtime, FakeEngine) {
        let fake = FakeEngine::new();
        (Runtime::with_engine(Variant::current(), fake.clone()), fake)
    }

    #[test]
    fn nested_sessions_init_and_shut_down_once() {
        let (runtime, fake) = runtime();
        {
            let _outer = runtime.acquire();
            {
                let _inner = runtime.acquire();
                assert_eq!(runtime.ref_count(), 2);
            }
            assert!(runtime.is_initialized());
        }
        assert_eq!(runtime.ref_count(), 0);
        assert!(!runtime.is_initialized());
        assert_eq!(fake.calls(), ["ilInit", "iluInit", "ilShutDown"]);
    }

    #[test]
    fn initialize_is_idempotent() {
        let (runtime, fake) = runtime();
        runtime.initialize();
        runtime.initialize();
        let session = runtime.acquire();
        drop(session);
        assert_eq!(fake.calls(), ["ilInit", "iluInit", "ilShutDown"]);
    }

    #[test]
    fn shutdown_refused_while_sessions_live() {
        let (runtime, fake) = runtime();
        let session = runtime.acquire();
        assert!(matches!(
            runtime.shutdown(),
            Err(Error::PreconditionViolation(_))
        ));
        assert!(runtime.is_initialized());
        drop(session);
        runtime.shutdown().unwrap();
        assert_eq!(fake.count("ilShutDown"), 1);
    }

    #[test]
    fn shutdown_allows_full_reinit() {
        let (runtime, fake) = runtime();
        runtime.initialize();
        runtime.shutdown().unwrap();
        drop(runtime.acquire());
        assert_eq!(
            fake.calls(),
            ["ilInit", "iluInit", "ilShutDown", "ilInit", "iluInit", "ilShutDown"]
        );
    }

    #[test]
    fn missing_library_reports_unavailable() {
        let paths = LibraryPaths::defaults(Variant::current()).with_overrides(
            Some("/nonexistent/libIL-missing.so".into()),
            Some("/nonexistent/libILU-missing.so".into()),
        );
        match Runtime::load(Variant::current(), &paths) {
            Err(Error::NativeLibraryUnavailable { library, .. }) => {
                assert!(library.contains("libIL-missing"))
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("nonexistent library loaded"),
        }
    }
}
