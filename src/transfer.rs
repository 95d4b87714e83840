// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Moving pixel, palette and compressed data across the boundary.
//!
//! Two shapes are used. Known-size transfers derive their length from a
//! [`PixelRegion`] and copy through a caller or locally owned buffer.
//! Query-then-fill transfers ask the engine for the size first, then fill a
//! buffer of exactly that size.
//!
//! Direct access to the engine's own image and palette memory is offered
//! only through the view types, which keep the engine locked and the session
//! mutably borrowed while they live.

use crate::{
    engine::Engine,
    error::{Error, Result},
    runtime::EngineGuard,
    session::{failure, Session},
    sizing::{component_count, dxtc_byte_len, palette_component_count, PixelRegion},
    types::{CompressedDataFormat, DataFormat, DataType, PaletteType},
};
use devil_sys as sys;
use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
    slice,
};
use tracing::warn;

/// Runs the two-phase size query and fill protocol.
///
/// `fill` is called with `None` to learn the size, then once more with a
/// buffer of exactly that size. A zero size stops after the first call. A
/// zero result from the second call is an error and is not retried.
pub(crate) fn query_then_fill(
    engine: &mut dyn Engine,
    operation: &'static str,
    mut fill: impl FnMut(&mut dyn Engine, Option<&mut [u8]>) -> u32,
) -> Result<Vec<u8>> {
    let expected = fill(engine, None);
    if expected == 0 {
        warn!("{} reported no data", operation);
        return Err(Error::NoData { operation });
    }
    let mut buffer = vec![0u8; expected as usize];
    let written = fill(engine, Some(&mut buffer));
    if written == 0 {
        warn!("{} wrote nothing after reporting {} bytes", operation, expected);
        return Err(Error::TransferFailed {
            operation,
            expected,
        });
    }
    buffer.truncate(written.min(expected) as usize);
    Ok(buffer)
}

fn signed(value: u32, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::invalid(format!("{what} {value} is out of range")))
}

/// Pointer and length of the bound image's data.
fn image_data_raw(engine: &mut dyn Engine) -> Result<(*mut u8, usize)> {
    let ptr = engine.il_get_data();
    if ptr.is_null() {
        return Err(Error::NoData {
            operation: "ilGetData",
        });
    }
    let len = engine.il_get_integer(sys::IL_IMAGE_SIZE_OF_DATA).max(0) as usize;
    Ok((ptr, len))
}

/// Pointer and length of the bound image's palette.
fn palette_raw(engine: &mut dyn Engine) -> Result<(*mut u8, usize)> {
    let palette = PaletteType(engine.il_get_integer(sys::IL_PALETTE_TYPE) as u32);
    let columns = engine.il_get_integer(sys::IL_PALETTE_NUM_COLS).max(0) as usize;
    let len = palette_component_count(palette)? as usize * columns;
    if len == 0 {
        return Err(Error::NoData {
            operation: "ilGetPalette",
        });
    }
    let ptr = engine.il_get_palette();
    if ptr.is_null() {
        return Err(Error::NoData {
            operation: "ilGetPalette",
        });
    }
    Ok((ptr, len))
}

/// Read-only view of engine owned memory.
///
/// The engine stays locked for the life of the view and the session it came
/// from cannot be used, so the memory cannot be moved or freed underneath
/// it. Another session on the same runtime blocks until the view is dropped.
pub struct DataView<'a> {
    _engine: EngineGuard<'a>,
    ptr: *const u8,
    len: usize,
    _session: PhantomData<&'a mut ()>,
}

impl Deref for DataView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr, self.len) }
    }
}

/// Writable view of the bound image's data; see [`DataView`].
pub struct DataViewMut<'a> {
    _engine: EngineGuard<'a>,
    ptr: *mut u8,
    len: usize,
    _session: PhantomData<&'a mut ()>,
}

impl Deref for DataViewMut<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr, self.len) }
    }
}

impl DerefMut for DataViewMut<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.ptr, self.len) }
    }
}

/// View of the bound image's palette together with its layout.
pub struct PaletteView<'a> {
    inner: DataView<'a>,
    palette: PaletteType,
}

impl PaletteView<'_> {
    pub fn palette_type(&self) -> PaletteType {
        self.palette
    }
}

impl Deref for PaletteView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.inner
    }
}

impl Session<'_> {
    /// Copies `region` of the bound image out, converted to the region's
    /// format and type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty region or unknown format or
    /// type, and `NativeCallFailed` when the engine copies nothing.
    pub fn copy_pixels(&self, region: &PixelRegion) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; region.byte_len()?];
        self.copy_pixels_into(region, &mut buffer)?;
        Ok(buffer)
    }

    /// Copies `region` of the bound image into `dest`.
    ///
    /// `dest` must be at least [`PixelRegion::byte_len`] bytes; only that
    /// prefix is written. Returns the number of bytes written.
    pub fn copy_pixels_into(&self, region: &PixelRegion, dest: &mut [u8]) -> Result<usize> {
        let len = region.byte_len()?;
        if dest.len() < len {
            return Err(Error::invalid(format!(
                "destination holds {} bytes, region needs {}",
                dest.len(),
                len
            )));
        }
        let mut engine = self.engine();
        let copied = engine.il_copy_pixels(
            region.x,
            region.y,
            region.z,
            region.width,
            region.height,
            region.depth,
            region.format.raw(),
            region.ty.raw(),
            &mut dest[..len],
        );
        if copied == 0 {
            return Err(failure(&mut **engine, "ilCopyPixels"));
        }
        Ok(len)
    }

    /// Writes `data` into `region` of the bound image.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `data` is exactly
    /// [`PixelRegion::byte_len`] bytes.
    pub fn set_pixels(&self, region: &PixelRegion, data: &[u8]) -> Result<()> {
        let len = region.byte_len()?;
        if data.len() != len {
            return Err(Error::invalid(format!(
                "pixel data is {} bytes, region needs {}",
                data.len(),
                len
            )));
        }
        let (x, y, z) = (
            signed(region.x, "x offset")?,
            signed(region.y, "y offset")?,
            signed(region.z, "z offset")?,
        );
        self.with(|e| {
            e.il_set_pixels(
                x,
                y,
                z,
                region.width,
                region.height,
                region.depth,
                region.format.raw(),
                region.ty.raw(),
                data,
            )
        });
        Ok(())
    }

    /// Replaces the bound image with a new `width` x `height` x `depth` image
    /// holding `data`.
    ///
    /// `data` must be exactly the size implied by the dimensions, format and
    /// type.
    pub fn set_tex_image(
        &self,
        width: u32,
        height: u32,
        depth: u32,
        format: DataFormat,
        ty: DataType,
        data: &[u8],
    ) -> Result<()> {
        let region = PixelRegion::new(width, height, format, ty).with_depth(depth);
        let len = region.byte_len()?;
        if data.len() != len {
            return Err(Error::invalid(format!(
                "image data is {} bytes, {}x{}x{} {} {} needs {}",
                data.len(),
                width,
                height,
                depth,
                format,
                ty,
                len
            )));
        }
        let bpp = component_count(format)? as u8;
        self.call("ilTexImage", |e| {
            e.il_tex_image(width, height, depth, bpp, format.raw(), ty.raw(), Some(data))
        })
    }

    /// Replaces the bound image with a new image of the given layout whose
    /// contents the engine allocates and clears.
    pub fn allocate_image(
        &self,
        width: u32,
        height: u32,
        depth: u32,
        format: DataFormat,
        ty: DataType,
    ) -> Result<()> {
        PixelRegion::new(width, height, format, ty)
            .with_depth(depth)
            .validate()?;
        let bpp = component_count(format)? as u8;
        self.call("ilTexImage", |e| {
            e.il_tex_image(width, height, depth, bpp, format.raw(), ty.raw(), None)
        })
    }

    /// Replaces the bound image with block compressed `data`.
    ///
    /// The engine takes no length for `data`, so it must be exactly the size
    /// of the given dimensions in `format`.
    pub fn set_tex_image_dxtc(
        &self,
        width: u32,
        height: u32,
        depth: u32,
        format: CompressedDataFormat,
        data: &[u8],
    ) -> Result<()> {
        let len = dxtc_byte_len(width, height, depth, format)?;
        if data.len() != len {
            return Err(Error::invalid(format!(
                "compressed data is {} bytes, {}x{}x{} {} needs {}",
                data.len(),
                width,
                height,
                depth,
                format,
                len
            )));
        }
        let (w, h, d) = (
            signed(width, "width")?,
            signed(height, "height")?,
            signed(depth, "depth")?,
        );
        self.call("ilTexImageDxtc", |e| {
            e.il_tex_image_dxtc(w, h, d, format.raw(), data)
        })
    }

    /// Overwrites the bound image's data in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `data` matches the image's current
    /// data size exactly.
    pub fn set_image_data(&self, data: &[u8]) -> Result<()> {
        let mut engine = self.engine();
        let expected = engine.il_get_integer(sys::IL_IMAGE_SIZE_OF_DATA).max(0) as usize;
        if data.len() != expected || expected == 0 {
            return Err(Error::invalid(format!(
                "image data is {} bytes, bound image holds {}",
                data.len(),
                expected
            )));
        }
        if engine.il_set_data(data) {
            Ok(())
        } else {
            Err(failure(&mut **engine, "ilSetData"))
        }
    }

    /// Copies the bound image's full data out.
    pub fn image_data(&self) -> Result<Vec<u8>> {
        let mut engine = self.engine();
        let (ptr, len) = image_data_raw(&mut **engine)?;
        Ok(unsafe { slice::from_raw_parts(ptr, len) }.to_vec())
    }

    /// Copies the bound image's palette out.
    pub fn palette_data(&self) -> Result<Vec<u8>> {
        let mut engine = self.engine();
        let (ptr, len) = palette_raw(&mut **engine)?;
        Ok(unsafe { slice::from_raw_parts(ptr, len) }.to_vec())
    }

    /// Borrows the bound image's data without copying.
    pub fn data_view(&mut self) -> Result<DataView<'_>> {
        let mut engine = self.engine();
        let (ptr, len) = image_data_raw(&mut **engine)?;
        Ok(DataView {
            _engine: engine,
            ptr,
            len,
            _session: PhantomData,
        })
    }

    /// Borrows the bound image's data for in-place modification.
    pub fn data_view_mut(&mut self) -> Result<DataViewMut<'_>> {
        let mut engine = self.engine();
        let (ptr, len) = image_data_raw(&mut **engine)?;
        Ok(DataViewMut {
            _engine: engine,
            ptr,
            len,
            _session: PhantomData,
        })
    }

    /// Borrows the bound image's palette.
    pub fn palette_view(&mut self) -> Result<PaletteView<'_>> {
        let mut engine = self.engine();
        let palette = PaletteType(engine.il_get_integer(sys::IL_PALETTE_TYPE) as u32);
        let (ptr, len) = palette_raw(&mut **engine)?;
        Ok(PaletteView {
            inner: DataView {
                _engine: engine,
                ptr,
                len,
                _session: PhantomData,
            },
            palette,
        })
    }

    /// Compresses the bound image to `format` and returns the blocks.
    pub fn dxtc_data(&self, format: CompressedDataFormat) -> Result<Vec<u8>> {
        let mut engine = self.engine();
        query_then_fill(&mut **engine, "ilGetDXTCData", |e, buffer| {
            e.il_get_dxtc_data(buffer, format.raw())
        })
    }
}
