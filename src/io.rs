// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    error::{Error, Result},
    session::{c_path, c_string, Session},
    transfer::query_then_fill,
    types::ImageType,
};
use std::{
    io::{Read, Write},
    path::Path,
};
use tracing::debug;

fn known(ty: ImageType) -> Result<ImageType> {
    if ty == ImageType::UNKNOWN {
        return Err(Error::invalid("image type must not be UNKNOWN"));
    }
    Ok(ty)
}

fn lump(data: &[u8]) -> Result<&[u8]> {
    if data.is_empty() {
        return Err(Error::invalid("image data must not be empty"));
    }
    if u32::try_from(data.len()).is_err() {
        return Err(Error::invalid(format!(
            "image data of {} bytes exceeds the engine's limit",
            data.len()
        )));
    }
    Ok(data)
}

/// Only luminance, RGB and RGBA raw dumps can be described to the engine.
fn raw_components(components: u8) -> Result<u8> {
    match components {
        1 | 3 | 4 => Ok(components),
        other => Err(Error::invalid(format!(
            "raw data must have 1, 3 or 4 components, got {other}"
        ))),
    }
}

fn raw_dimensions(width: u32, height: u32, depth: u32) -> Result<()> {
    if width == 0 || height == 0 || depth == 0 {
        return Err(Error::invalid(format!(
            "raw data dimensions must be at least 1, got {width}x{height}x{depth}"
        )));
    }
    Ok(())
}

impl Session<'_> {
    /// Loads `path` as an image of type `ty` into the bound image.
    pub fn load(&self, ty: ImageType, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = c_path(path)?;
        self.call("ilLoad", |e| e.il_load(ty.raw(), &file))?;
        debug!("loaded {} as {}", path.display(), ty);
        Ok(())
    }

    /// Loads `path`, letting the engine determine its type.
    pub fn load_image(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = c_path(path)?;
        self.call("ilLoadImage", |e| e.il_load_image(&file))?;
        debug!("loaded {}", path.display());
        Ok(())
    }

    /// Decodes an in-memory file of type `ty` into the bound image.
    ///
    /// `ImageType::UNKNOWN` asks the engine to detect the type.
    pub fn load_from_memory(&self, ty: ImageType, data: &[u8]) -> Result<()> {
        let data = lump(data)?;
        self.call("ilLoadL", |e| e.il_load_l(ty.raw(), data))
    }

    /// Reads `reader` to the end and decodes it into the bound image.
    ///
    /// With `ty` of `None` the type is detected from the content first.
    pub fn load_from_reader(&self, ty: Option<ImageType>, mut reader: impl Read) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let data = lump(&data)?;
        self.call("ilLoadL", |e| {
            let ty = match ty {
                Some(ty) => ty.raw(),
                None => e.il_determine_type_l(data),
            };
            e.il_load_l(ty, data)
        })
    }

    /// Saves the bound image to `path` encoded as `ty`.
    pub fn save(&self, ty: ImageType, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ty = known(ty)?;
        let file = c_path(path)?;
        self.call("ilSave", |e| e.il_save(ty.raw(), &file))?;
        debug!("saved {} as {}", path.display(), ty);
        Ok(())
    }

    /// Saves the bound image to `path`, choosing the encoder from the
    /// extension.
    pub fn save_image(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = c_path(path)?;
        self.call("ilSaveImage", |e| e.il_save_image(&file))?;
        debug!("saved {}", path.display());
        Ok(())
    }

    /// Encodes the bound image as `ty` into memory.
    ///
    /// # Errors
    ///
    /// Returns `NoData` when the engine reports a zero encoded size and
    /// `TransferFailed` when the encode after a non-zero size writes nothing.
    pub fn save_to_memory(&self, ty: ImageType) -> Result<Vec<u8>> {
        let ty = known(ty)?;
        let mut engine = self.engine();
        query_then_fill(&mut **engine, "ilSaveL", |e, buffer| {
            e.il_save_l(ty.raw(), buffer)
        })
    }

    /// Encodes the bound image as `ty` and writes it to `writer`.
    ///
    /// Returns the number of bytes written.
    pub fn save_to_writer(&self, ty: ImageType, mut writer: impl Write) -> Result<usize> {
        let encoded = self.save_to_memory(ty)?;
        writer.write_all(&encoded)?;
        Ok(encoded.len())
    }

    /// Loads headerless pixel data from `path`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for zero dimensions or a component count
    /// other than 1, 3 or 4.
    pub fn load_raw_data(
        &self,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        depth: u32,
        components: u8,
    ) -> Result<()> {
        raw_dimensions(width, height, depth)?;
        let components = raw_components(components)?;
        let file = c_path(path.as_ref())?;
        self.call("ilLoadData", |e| {
            e.il_load_data(&file, width, height, depth, components)
        })
    }

    /// Loads headerless pixel data from memory.
    pub fn load_raw_data_from_memory(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        depth: u32,
        components: u8,
    ) -> Result<()> {
        raw_dimensions(width, height, depth)?;
        let components = raw_components(components)?;
        let data = lump(data)?;
        self.call("ilLoadDataL", |e| {
            e.il_load_data_l(data, width, height, depth, components)
        })
    }

    /// Writes the bound image's pixel data to `path` with no header.
    pub fn save_raw_data(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = c_path(path.as_ref())?;
        self.call("ilSaveData", |e| e.il_save_data(&file))
    }

    /// Loads a palette file into the bound image.
    pub fn load_palette(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = c_path(path.as_ref())?;
        self.call("ilLoadPal", |e| e.il_load_pal(&file))
    }

    pub fn save_palette(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = c_path(path.as_ref())?;
        self.call("ilSavePal", |e| e.il_save_pal(&file))
    }

    /// Maps the bound image onto the palette stored in `path`.
    pub fn apply_palette(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = c_path(path.as_ref())?;
        self.call("ilApplyPal", |e| e.il_apply_pal(&file))
    }

    /// Detects the type of the file at `path` from its content.
    pub fn determine_type(&self, path: impl AsRef<Path>) -> Result<ImageType> {
        let file = c_path(path.as_ref())?;
        Ok(ImageType(self.with(|e| e.il_determine_type(&file))))
    }

    /// Detects the type of an in-memory file.
    pub fn determine_type_from_memory(&self, data: &[u8]) -> Result<ImageType> {
        let data = lump(data)?;
        Ok(ImageType(self.with(|e| e.il_determine_type_l(data))))
    }

    /// Maps a file name or bare extension to an image type.
    ///
    /// A bare extension such as `png` or `.png` is accepted.
    pub fn type_from_extension(&self, name: &str) -> Result<ImageType> {
        let name = if name.contains('.') {
            name.to_owned()
        } else {
            format!(".{name}")
        };
        let name = c_string("extension", &name)?;
        Ok(ImageType(self.with(|e| e.il_type_from_ext(&name))))
    }

    /// Checks whether the file at `path` is a valid `ty` image.
    pub fn is_valid(&self, ty: ImageType, path: impl AsRef<Path>) -> Result<bool> {
        let ty = known(ty)?;
        let file = c_path(path.as_ref())?;
        Ok(self.with(|e| e.il_is_valid(ty.raw(), &file)))
    }

    pub fn is_valid_memory(&self, ty: ImageType, data: &[u8]) -> Result<bool> {
        let ty = known(ty)?;
        let data = lump(data)?;
        Ok(self.with(|e| e.il_is_valid_l(ty.raw(), data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_component_counts() {
        for ok in [1, 3, 4] {
            assert_eq!(raw_components(ok).unwrap(), ok);
        }
        for bad in [0, 2, 5, 255] {
            assert!(raw_components(bad).is_err());
        }
    }

    #[test]
    fn empty_lumps_are_rejected() {
        assert!(lump(&[]).is_err());
        assert!(lump(&[1, 2, 3]).is_ok());
    }
}
