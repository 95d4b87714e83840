// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Selection of the native build variant and the paths of its libraries.

use std::{env, fmt, path::PathBuf};

/// Environment variable overriding the core library path.
pub const CORE_LIBRARY_ENV: &str = "DEVIL_IL_LIBRARY";

/// Environment variable overriding the utility library path.
pub const UTILITY_LIBRARY_ENV: &str = "DEVIL_ILU_LIBRARY";

/// Pointer width of the native engine build.
///
/// The engine ships as two otherwise identical binaries. The variant is fixed
/// by the width of the process loading it, so it is decided at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Bits32,
    Bits64,
}

impl Variant {
    pub const fn current() -> Self {
        if cfg!(target_pointer_width = "64") {
            Variant::Bits64
        } else {
            Variant::Bits32
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variant::Bits32 => f.write_str("32-bit"),
            Variant::Bits64 => f.write_str("64-bit"),
        }
    }
}

/// Locations of the core and utility libraries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryPaths {
    pub core: PathBuf,
    pub utility: PathBuf,
}

impl LibraryPaths {
    /// Platform default library names for `variant`.
    ///
    /// Only Windows distinguishes the variants by file name; elsewhere the
    /// loader's search path picks the matching binary.
    pub fn defaults(variant: Variant) -> Self {
        let (core, utility) = if cfg!(windows) {
            match variant {
                Variant::Bits64 => ("DevIL64.dll", "ILU64.dll"),
                Variant::Bits32 => ("DevIL32.dll", "ILU32.dll"),
            }
        } else if cfg!(target_os = "macos") {
            ("libIL.1.dylib", "libILU.1.dylib")
        } else {
            ("libIL.so.1", "libILU.so.1")
        };
        Self {
            core: core.into(),
            utility: utility.into(),
        }
    }

    /// Defaults for `variant` with `DEVIL_IL_LIBRARY` and `DEVIL_ILU_LIBRARY`
    /// applied when set and non-empty.
    pub fn from_env(variant: Variant) -> Self {
        Self::defaults(variant).with_overrides(
            env::var_os(CORE_LIBRARY_ENV).map(PathBuf::from),
            env::var_os(UTILITY_LIBRARY_ENV).map(PathBuf::from),
        )
    }

    /// Replaces either path when an override is given.
    pub fn with_overrides(mut self, core: Option<PathBuf>, utility: Option<PathBuf>) -> Self {
        if let Some(core) = core.filter(|p| !p.as_os_str().is_empty()) {
            self.core = core;
        }
        if let Some(utility) = utility.filter(|p| !p.as_os_str().is_empty()) {
            self.utility = utility;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_matches_pointer_width() {
        let expected = if std::mem::size_of::<usize>() == 8 {
            Variant::Bits64
        } else {
            Variant::Bits32
        };
        assert_eq!(Variant::current(), expected);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn linux_defaults() {
        let paths = LibraryPaths::defaults(Variant::Bits64);
        assert_eq!(paths.core, PathBuf::from("libIL.so.1"));
        assert_eq!(paths.utility, PathBuf::from("libILU.so.1"));
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let paths = LibraryPaths::defaults(Variant::current())
            .with_overrides(Some("/opt/devil/libIL.so".into()), Some(PathBuf::new()));
        assert_eq!(paths.core, PathBuf::from("/opt/devil/libIL.so"));
        assert_eq!(
            paths.utility,
            LibraryPaths::defaults(Variant::current()).utility
        );
    }
}
