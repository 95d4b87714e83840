// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    error::{Error, Result},
    session::{failure, Session},
    types::SubImageType,
};
use core::fmt;
use tracing::debug;

/// Identifier of an engine owned image.
///
/// Handles are plain integers issued by the engine; the image memory is
/// never touched directly. Negative values are never valid, and handle 0 is
/// the engine's default image which may be bound but never deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageHandle(pub i32);

impl ImageHandle {
    pub const INVALID: Self = Self(-1);

    /// The engine's built-in default image.
    pub const DEFAULT: Self = Self(0);

    pub const fn is_valid(self) -> bool {
        self.0 >= 0
    }

    pub const fn id(self) -> i32 {
        self.0
    }

    fn from_native(id: u32) -> Self {
        i32::try_from(id).map_or(Self::INVALID, Self)
    }

    fn native(self, what: &str) -> Result<u32> {
        u32::try_from(self.0)
            .map_err(|_| Error::invalid(format!("{what} handle {self} is negative")))
    }

    fn deletable(self) -> Result<u32> {
        if self == Self::DEFAULT {
            return Err(Error::invalid("the default image cannot be deleted"));
        }
        self.native("delete")
    }
}

impl Default for ImageHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source region and destination offset of a [`Session::blit`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlitRegion {
    pub dest_x: i32,
    pub dest_y: i32,
    pub dest_z: i32,
    pub src_x: u32,
    pub src_y: u32,
    pub src_z: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Session<'_> {
    /// Creates a new image and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns `NativeCallFailed` when the engine hands back handle 0, which
    /// it only does on failure.
    pub fn generate(&self) -> Result<ImageHandle> {
        let mut engine = self.engine();
        let id = engine.il_gen_image();
        if id == 0 {
            return Err(failure(&mut **engine, "ilGenImage"));
        }
        debug!("generated image {}", id);
        Ok(ImageHandle::from_native(id))
    }

    /// Creates `count` images in one native call.
    ///
    /// A zero count returns an empty list without calling the engine.
    pub fn generate_batch(&self, count: usize) -> Result<Vec<ImageHandle>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let mut ids = vec![0u32; count];
        let mut engine = self.engine();
        engine.il_gen_images(&mut ids);
        if ids.contains(&0) {
            return Err(failure(&mut **engine, "ilGenImages"));
        }
        debug!("generated {} images", count);
        Ok(ids.into_iter().map(ImageHandle::from_native).collect())
    }

    /// Makes `image` the target of every subsequent current-image operation.
    ///
    /// The engine creates the image if `image` names an id it has not issued.
    ///
    /// # Errors
    ///
    /// Negative handles are rejected with `InvalidArgument` before reaching
    /// the engine.
    pub fn bind(&self, image: ImageHandle) -> Result<()> {
        let id = image.native("bind")?;
        self.with(|e| e.il_bind_image(id));
        Ok(())
    }

    /// Deletes `image`.
    ///
    /// # Errors
    ///
    /// The default image (handle 0) and negative handles are refused with
    /// `InvalidArgument` and never reach the engine.
    pub fn delete(&self, image: ImageHandle) -> Result<()> {
        let id = image.deletable()?;
        self.with(|e| e.il_delete_image(id));
        debug!("deleted image {}", id);
        Ok(())
    }

    /// Deletes every image in `images` with one native call.
    ///
    /// All handles are checked first; if any is refused nothing is deleted.
    pub fn delete_batch(&self, images: &[ImageHandle]) -> Result<()> {
        let ids = images
            .iter()
            .map(|image| image.deletable())
            .collect::<Result<Vec<_>>>()?;
        if ids.is_empty() {
            return Ok(());
        }
        self.with(|e| e.il_delete_images(&ids));
        debug!("deleted {} images", ids.len());
        Ok(())
    }

    /// Reports whether the engine knows `image`.
    ///
    /// Negative handles are answered locally.
    pub fn is_image(&self, image: ImageHandle) -> bool {
        match u32::try_from(image.0) {
            Ok(id) => self.with(|e| e.il_is_image(id)),
            Err(_) => false,
        }
    }

    /// Duplicates the bound image into a new handle.
    pub fn clone_current(&self) -> Result<ImageHandle> {
        let mut engine = self.engine();
        let id = engine.il_clone_cur_image();
        if id == 0 {
            return Err(failure(&mut **engine, "ilCloneCurImage"));
        }
        debug!("cloned current image into {}", id);
        Ok(ImageHandle::from_native(id))
    }

    /// Replaces the bound image with a copy of `source`.
    pub fn copy_image(&self, source: ImageHandle) -> Result<()> {
        let id = source.native("copy source")?;
        self.call("ilCopyImage", |e| e.il_copy_image(id))
    }

    /// Draws `source` over the bound image at the given offset.
    pub fn overlay_image(&self, source: ImageHandle, x: i32, y: i32, z: i32) -> Result<()> {
        let id = source.native("overlay source")?;
        self.call("ilOverlayImage", |e| e.il_overlay_image(id, x, y, z))
    }

    /// Copies a region of `source` into the bound image.
    pub fn blit(&self, source: ImageHandle, region: &BlitRegion) -> Result<()> {
        let id = source.native("blit source")?;
        if region.width == 0 || region.height == 0 || region.depth == 0 {
            return Err(Error::invalid("blit region must be at least 1x1x1"));
        }
        self.call("ilBlit", |e| {
            e.il_blit(
                id,
                region.dest_x,
                region.dest_y,
                region.dest_z,
                region.src_x,
                region.src_y,
                region.src_z,
                region.width,
                region.height,
                region.depth,
            )
        })
    }

    /// Replaces the bound image with the engine's built-in placeholder.
    pub fn default_image(&self) -> Result<()> {
        self.call("ilDefaultImage", |e| e.il_default_image())
    }

    /// Attaches `count` sub-images of `kind` to the bound image.
    ///
    /// Returns the number of sub-images the engine created.
    pub fn create_sub_image(&self, kind: SubImageType, count: u32) -> Result<u32> {
        let mut engine = self.engine();
        let created = engine.il_create_sub_image(kind.raw(), count);
        if created == 0 && count > 0 {
            return Err(failure(&mut **engine, "ilCreateSubImage"));
        }
        Ok(created)
    }

    /// Selects cube map face `number` of the bound image.
    pub fn active_face(&self, number: u32) -> Result<()> {
        self.call("ilActiveFace", |e| e.il_active_face(number))
    }

    /// Selects animation frame `number` of the bound image.
    pub fn active_image(&self, number: u32) -> Result<()> {
        self.call("ilActiveImage", |e| e.il_active_image(number))
    }

    pub fn active_layer(&self, number: u32) -> Result<()> {
        self.call("ilActiveLayer", |e| e.il_active_layer(number))
    }

    pub fn active_mipmap(&self, number: u32) -> Result<()> {
        self.call("ilActiveMipmap", |e| e.il_active_mipmap(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_validity() {
        assert!(ImageHandle::DEFAULT.is_valid());
        assert!(!ImageHandle::INVALID.is_valid());
        assert_eq!(ImageHandle::default(), ImageHandle::INVALID);
    }

    #[test]
    fn default_handle_not_deletable() {
        assert!(ImageHandle(0).deletable().is_err());
        assert!(ImageHandle(-3).deletable().is_err());
        assert_eq!(ImageHandle(7).deletable().unwrap(), 7);
    }

    #[test]
    fn out_of_range_ids_map_to_invalid() {
        assert_eq!(ImageHandle::from_native(u32::MAX), ImageHandle::INVALID);
        assert_eq!(ImageHandle::from_native(5), ImageHandle(5));
    }
}
