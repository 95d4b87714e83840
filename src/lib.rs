// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # DevIL Bindings
//!
//! Safe access to the DevIL image library and its ILU utility companion,
//! loaded at runtime from the platform's shared libraries.
//!
//! The native engine is a single, process-wide state machine: it holds a
//! current bound image, a stack of attribute settings and a last-error
//! register, and it is not safe to call concurrently. This crate wraps it in
//! a [`Runtime`] that serialises every call, counts its users and initialises
//! the engine on first use. Operations are methods on a [`Session`], a
//! counted handle obtained from the runtime.
//!
//! ## Features
//!
//! - **Library Resolution**: Picks the 32 or 64-bit build of the engine and
//!   honours the `DEVIL_IL_LIBRARY` and `DEVIL_ILU_LIBRARY` overrides.
//! - **Reference Counted Lifecycle**: The engine is initialised when the
//!   first session is acquired and shutdown is refused while sessions live.
//! - **Typed Value Tables**: Formats, types, modes and error codes are
//!   strongly typed while still carrying values the engine adds later.
//! - **Checked Transfers**: Pixel buffer sizes are computed and checked
//!   before they cross the boundary, and variable-size results use a
//!   size-query-then-fill protocol.
//! - **Borrowed Views**: Engine owned image and palette memory is exposed
//!   through views that keep the engine locked while they live.
//!
//! ## Example
//!
//! ```no_run
//! use devil::{DataFormat, DataType, ImageType, Runtime};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runtime = Runtime::global()?;
//! let session = runtime.acquire();
//!
//! let image = session.generate()?;
//! session.bind(image)?;
//! session.set_tex_image(2, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &[255; 16])?;
//! session.scale(4, 4, 1)?;
//! session.save(ImageType::PNG, "out.png")?;
//! session.delete(image)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! With the `testing` feature, `testing::FakeEngine` implements the native
//! interface in process so code built on this crate can be tested without
//! the shared libraries.
//!
//! ```toml
//! [dev-dependencies]
//! devil = { version = "0.0.0", features = ["testing"] }
//! ```
//!
//! ## Safety
//!
//! The native entry points are resolved with `libloading` in the
//! `devil-sys` crate. All unsafe calls are confined to the `native` module
//! and the borrowed views, which tie every engine pointer to the lock that
//! keeps it valid.

mod engine;
mod error;
mod handles;
mod info;
mod io;
mod native;
mod resolver;
mod runtime;
mod session;
mod sizing;
mod state;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod transfer;
mod transform;
mod types;

pub use devil_sys::{ILpointf, ILpointi};
pub use engine::Engine;
pub use error::{Error, Result};
pub use handles::{BlitRegion, ImageHandle};
pub use info::ImageInfo;
pub use resolver::{LibraryPaths, Variant, CORE_LIBRARY_ENV, UTILITY_LIBRARY_ENV};
pub use runtime::Runtime;
pub use session::Session;
pub use sizing::{
    bytes_per_component, component_count, dxtc_block_size, dxtc_byte_len, palette_component_count,
    PixelRegion,
};
pub use transfer::{DataView, DataViewMut, PaletteView};
pub use types::{
    AttributeBits, BooleanMode, Color, CompressedDataFormat, CompressionAlgorithm,
    CompressionHint, CubeMapFace, DataFormat, DataType, EnableCap, ErrorType, ImageType,
    IntegerMode, JpgSaveFormat, Language, MemoryHint, OriginLocation, PaletteType, Placement,
    Quantization, SamplingFilter, StringMode, SubImageType,
};
