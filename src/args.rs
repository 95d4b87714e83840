// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::{Parser, Subcommand};
use devil::{DataFormat, LibraryPaths, Variant};
use std::path::PathBuf;

/// Pixel layouts accepted by `convert --format`.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
pub enum Layout {
    Rgb,
    Rgba,
    Bgr,
    Bgra,
    Luminance,
}

impl From<Layout> for DataFormat {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Rgb => DataFormat::RGB,
            Layout::Rgba => DataFormat::RGBA,
            Layout::Bgr => DataFormat::BGR,
            Layout::Bgra => DataFormat::BGRA,
            Layout::Luminance => DataFormat::LUMINANCE,
        }
    }
}

/// Command-line arguments for the DevIL tool.
///
/// The library overrides can also be given through the same environment
/// variables the library itself reads.
///
/// # Example
///
/// ```bash
/// devil-tool info photo.png
/// devil-tool convert photo.png photo.tga --format rgb --scale 640 480
///
/// # Use a specific build of the engine
/// export DEVIL_IL_LIBRARY=/opt/devil/lib/libIL.so.1
/// devil-tool version
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the core DevIL library
    #[arg(long, env = "DEVIL_IL_LIBRARY")]
    pub il_library: Option<PathBuf>,

    /// Path to the ILU utility library
    #[arg(long, env = "DEVIL_ILU_LIBRARY")]
    pub ilu_library: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable Tracy profiler for performance analysis
    #[arg(long, env = "TRACY")]
    pub tracy: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the engine's version and supported file extensions
    Version,

    /// Print the properties of an image as JSON
    Info {
        /// Image file to inspect
        file: PathBuf,
    },

    /// Convert an image, choosing the output encoder from its extension
    Convert {
        /// Image file to read
        input: PathBuf,

        /// Image file to write
        output: PathBuf,

        /// Pixel layout to convert to before saving
        #[arg(long, value_enum)]
        format: Option<Layout>,

        /// Resize to the given dimensions (width height)
        #[arg(long, value_delimiter = ' ', num_args = 2)]
        scale: Option<Vec<u32>>,

        /// Replace the output file if it exists
        #[arg(long)]
        overwrite: bool,
    },
}

impl Args {
    /// Library paths for the running process with any overrides applied.
    pub fn library_paths(&self) -> LibraryPaths {
        LibraryPaths::defaults(Variant::current())
            .with_overrides(self.il_library.clone(), self.ilu_library.clone())
    }
}
