// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Byte size computation for pixel transfers.
//!
//! These are pure table lookups with no native call. Every known-size
//! transfer derives its buffer length from a [`PixelRegion`] through
//! [`PixelRegion::byte_len`] and never from a caller supplied length.

use crate::{
    error::{Error, Result},
    types::{CompressedDataFormat, DataFormat, DataType, PaletteType},
};

/// Number of components stored per pixel for `format`.
pub fn component_count(format: DataFormat) -> Result<u32> {
    match format {
        DataFormat::COLOUR_INDEX | DataFormat::ALPHA | DataFormat::LUMINANCE => Ok(1),
        DataFormat::LUMINANCE_ALPHA => Ok(2),
        DataFormat::RGB | DataFormat::BGR => Ok(3),
        DataFormat::RGBA | DataFormat::BGRA => Ok(4),
        other => Err(Error::invalid(format!("unsupported data format {other}"))),
    }
}

/// Storage size in bytes of one component of `ty`.
pub fn bytes_per_component(ty: DataType) -> Result<u32> {
    match ty {
        DataType::BYTE | DataType::UNSIGNED_BYTE => Ok(1),
        DataType::SHORT | DataType::UNSIGNED_SHORT | DataType::HALF => Ok(2),
        DataType::INT | DataType::UNSIGNED_INT | DataType::FLOAT => Ok(4),
        DataType::DOUBLE => Ok(8),
        other => Err(Error::invalid(format!("unsupported data type {other}"))),
    }
}

/// Bytes per palette entry for `palette`, zero when the image has no palette.
pub fn palette_component_count(palette: PaletteType) -> Result<u32> {
    match palette {
        PaletteType::NONE => Ok(0),
        PaletteType::RGB24 | PaletteType::BGR24 => Ok(3),
        PaletteType::RGB32 | PaletteType::BGR32 | PaletteType::RGBA32 | PaletteType::BGRA32 => {
            Ok(4)
        }
        other => Err(Error::invalid(format!("unsupported palette type {other}"))),
    }
}

/// Bytes per 4x4 block of `format`.
pub fn dxtc_block_size(format: CompressedDataFormat) -> Result<u32> {
    match format {
        CompressedDataFormat::DXT1 | CompressedDataFormat::DXT1A | CompressedDataFormat::ATI1N => {
            Ok(8)
        }
        CompressedDataFormat::DXT2
        | CompressedDataFormat::DXT3
        | CompressedDataFormat::DXT4
        | CompressedDataFormat::DXT5
        | CompressedDataFormat::THREE_DC
        | CompressedDataFormat::RXGB => Ok(16),
        other => Err(Error::invalid(format!("unsupported compressed format {other}"))),
    }
}

/// Size of a `width` x `height` x `depth` image compressed as `format`.
///
/// Partial blocks at the right and bottom edges count as whole blocks.
///
/// # Errors
///
/// Returns `InvalidArgument` for zero dimensions, an uncompressed format, or
/// a size that does not fit the engine's 32-bit length.
pub fn dxtc_byte_len(
    width: u32,
    height: u32,
    depth: u32,
    format: CompressedDataFormat,
) -> Result<usize> {
    if width == 0 || height == 0 || depth == 0 {
        return Err(Error::invalid(format!(
            "image dimensions must be at least 1, got {width}x{height}x{depth}"
        )));
    }
    let len = [
        dxtc_block_size(format)?,
        width.div_ceil(4),
        height.div_ceil(4),
        depth,
    ]
    .into_iter()
    .try_fold(1u32, |acc, n| acc.checked_mul(n))
    .ok_or_else(|| Error::invalid("compressed byte size overflows"))?;
    Ok(len as usize)
}

/// Rectangular region of the bound image together with the layout of the
/// caller's buffer.
///
/// Used for both directions of a known-size transfer: `copy_pixels` reads
/// the region out, `set_pixels` writes it in. The region is checked by
/// [`PixelRegion::byte_len`] before anything is sent to the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub format: DataFormat,
    pub ty: DataType,
}

impl PixelRegion {
    /// A region at the origin of a single slice.
    pub fn new(width: u32, height: u32, format: DataFormat, ty: DataType) -> Self {
        Self {
            x: 0,
            y: 0,
            z: 0,
            width,
            height,
            depth: 1,
            format,
            ty,
        }
    }

    pub fn with_offset(mut self, x: u32, y: u32, z: u32) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Rejects empty regions and unknown format or type values.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(Error::invalid(format!(
                "region dimensions must be at least 1, got {}x{}x{}",
                self.width, self.height, self.depth
            )));
        }
        component_count(self.format)?;
        bytes_per_component(self.ty)?;
        Ok(())
    }

    /// Exact number of bytes the region occupies in the caller's buffer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the region fails [`validate`](Self::validate)
    /// or when the size does not fit the engine's 32-bit length.
    pub fn byte_len(&self) -> Result<usize> {
        self.validate()?;
        let len = [
            component_count(self.format)?,
            bytes_per_component(self.ty)?,
            self.width,
            self.height,
            self.depth,
        ]
        .into_iter()
        .try_fold(1u32, |acc, n| acc.checked_mul(n))
        .ok_or_else(|| Error::invalid("region byte size overflows"))?;
        Ok(len as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FORMATS: [DataFormat; 8] = [
        DataFormat::COLOUR_INDEX,
        DataFormat::ALPHA,
        DataFormat::RGB,
        DataFormat::RGBA,
        DataFormat::LUMINANCE,
        DataFormat::LUMINANCE_ALPHA,
        DataFormat::BGR,
        DataFormat::BGRA,
    ];

    const TYPES: [DataType; 9] = [
        DataType::BYTE,
        DataType::UNSIGNED_BYTE,
        DataType::SHORT,
        DataType::UNSIGNED_SHORT,
        DataType::INT,
        DataType::UNSIGNED_INT,
        DataType::FLOAT,
        DataType::DOUBLE,
        DataType::HALF,
    ];

    #[test]
    fn rgba_ubyte_two_by_two() {
        let region = PixelRegion::new(2, 2, DataFormat::RGBA, DataType::UNSIGNED_BYTE);
        assert_eq!(region.byte_len().unwrap(), 16);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let region = PixelRegion::new(4, 4, DataFormat::RGB, DataType::FLOAT).with_depth(0);
        assert!(matches!(region.byte_len(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(component_count(DataFormat(0x1234)).is_err());
        assert!(bytes_per_component(DataType(0x1234)).is_err());
        assert!(palette_component_count(PaletteType(0x1234)).is_err());
    }

    #[test]
    fn overflow_is_rejected() {
        let region =
            PixelRegion::new(u32::MAX, 2, DataFormat::RGBA, DataType::DOUBLE).with_depth(2);
        assert!(matches!(region.byte_len(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn dxtc_sizes_round_up_to_blocks() {
        assert_eq!(dxtc_byte_len(4, 4, 1, CompressedDataFormat::DXT1).unwrap(), 8);
        assert_eq!(dxtc_byte_len(5, 4, 1, CompressedDataFormat::DXT5).unwrap(), 32);
        assert_eq!(dxtc_byte_len(1, 1, 3, CompressedDataFormat::DXT1A).unwrap(), 24);
        assert!(dxtc_byte_len(0, 4, 1, CompressedDataFormat::DXT1).is_err());
        assert!(dxtc_byte_len(4, 4, 1, CompressedDataFormat::NONE).is_err());
        assert!(dxtc_byte_len(u32::MAX, u32::MAX, 1, CompressedDataFormat::DXT5).is_err());
    }

    #[test]
    fn palette_sizes() {
        assert_eq!(palette_component_count(PaletteType::NONE).unwrap(), 0);
        assert_eq!(palette_component_count(PaletteType::BGR24).unwrap(), 3);
        assert_eq!(palette_component_count(PaletteType::RGBA32).unwrap(), 4);
    }

    proptest! {
        #[test]
        fn byte_len_matches_product(
            format in prop::sample::select(FORMATS.to_vec()),
            ty in prop::sample::select(TYPES.to_vec()),
            width in 1u32..64,
            height in 1u32..64,
            depth in 1u32..8,
        ) {
            let region = PixelRegion::new(width, height, format, ty).with_depth(depth);
            let expected = component_count(format).unwrap()
                * bytes_per_component(ty).unwrap()
                * width
                * height
                * depth;
            prop_assert_eq!(region.byte_len().unwrap(), expected as usize);
            prop_assert_eq!(region.byte_len().unwrap(), region.byte_len().unwrap());
        }

        #[test]
        fn empty_regions_never_size(
            format in prop::sample::select(FORMATS.to_vec()),
            ty in prop::sample::select(TYPES.to_vec()),
            dims in (0u32..4, 0u32..4, 0u32..4)
                .prop_filter("at least one zero", |(w, h, d)| *w == 0 || *h == 0 || *d == 0),
        ) {
            let (width, height, depth) = dims;
            let region = PixelRegion::new(width, height, format, ty).with_depth(depth);
            prop_assert!(region.byte_len().is_err());
        }
    }
}
