// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    engine::Engine,
    session::Session,
    types::{CompressedDataFormat, CubeMapFace, DataFormat, DataType, OriginLocation, PaletteType},
};
use devil_sys as sys;
use serde_json::{json, Value};

/// Snapshot of the bound image's properties.
///
/// Every field is read under a single engine lock, so the snapshot is
/// consistent even with other threads using the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: DataFormat,
    pub dxtc_format: CompressedDataFormat,
    pub data_type: DataType,
    pub palette_type: PaletteType,
    pub palette_base_type: DataFormat,
    pub cube_flags: CubeMapFace,
    pub origin: OriginLocation,
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub bits_per_pixel: i32,
    pub bytes_per_pixel: i32,
    pub channels: i32,
    pub duration: i32,
    pub size_of_data: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub plane_size: i32,
    /// Number of cube map faces, counting the image itself.
    pub face_count: i32,
    /// Number of animation frames, counting the image itself.
    pub image_count: i32,
    pub layer_count: i32,
    pub mipmap_count: i32,
    pub palette_bytes_per_pixel: i32,
    pub palette_column_count: i32,
}

impl ImageInfo {
    fn read(engine: &mut dyn Engine) -> Self {
        let mut get = |key| engine.il_get_integer(key);
        // The engine counts sub-images excluding the base image.
        Self {
            format: DataFormat(get(sys::IL_IMAGE_FORMAT) as u32),
            dxtc_format: CompressedDataFormat(get(sys::IL_DXTC_DATA_FORMAT) as u32),
            data_type: DataType(get(sys::IL_IMAGE_TYPE) as u32),
            palette_type: PaletteType(get(sys::IL_PALETTE_TYPE) as u32),
            palette_base_type: DataFormat(get(sys::IL_PALETTE_BASE_TYPE) as u32),
            cube_flags: CubeMapFace(get(sys::IL_IMAGE_CUBEFLAGS) as u32),
            origin: OriginLocation(get(sys::IL_IMAGE_ORIGIN) as u32),
            width: get(sys::IL_IMAGE_WIDTH),
            height: get(sys::IL_IMAGE_HEIGHT),
            depth: get(sys::IL_IMAGE_DEPTH),
            bits_per_pixel: get(sys::IL_IMAGE_BITS_PER_PIXEL),
            bytes_per_pixel: get(sys::IL_IMAGE_BYTES_PER_PIXEL),
            channels: get(sys::IL_IMAGE_CHANNELS),
            duration: get(sys::IL_IMAGE_DURATION),
            size_of_data: get(sys::IL_IMAGE_SIZE_OF_DATA),
            offset_x: get(sys::IL_IMAGE_OFFX),
            offset_y: get(sys::IL_IMAGE_OFFY),
            plane_size: get(sys::IL_IMAGE_PLANESIZE),
            face_count: get(sys::IL_NUM_FACES) + 1,
            image_count: get(sys::IL_NUM_IMAGES) + 1,
            layer_count: get(sys::IL_NUM_LAYERS) + 1,
            mipmap_count: get(sys::IL_NUM_MIPMAPS) + 1,
            palette_bytes_per_pixel: get(sys::IL_PALETTE_BPP),
            palette_column_count: get(sys::IL_PALETTE_NUM_COLS),
        }
    }

    pub fn has_palette(&self) -> bool {
        self.palette_type != PaletteType::NONE
    }

    /// JSON rendering with value tables spelled by name.
    pub fn to_json(&self) -> Value {
        json!({
            "format": self.format.to_string(),
            "dxtc_format": self.dxtc_format.to_string(),
            "data_type": self.data_type.to_string(),
            "palette_type": self.palette_type.to_string(),
            "palette_base_type": self.palette_base_type.to_string(),
            "cube_flags": self.cube_flags.to_string(),
            "origin": self.origin.to_string(),
            "width": self.width,
            "height": self.height,
            "depth": self.depth,
            "bits_per_pixel": self.bits_per_pixel,
            "bytes_per_pixel": self.bytes_per_pixel,
            "channels": self.channels,
            "duration": self.duration,
            "size_of_data": self.size_of_data,
            "offset_x": self.offset_x,
            "offset_y": self.offset_y,
            "plane_size": self.plane_size,
            "face_count": self.face_count,
            "image_count": self.image_count,
            "layer_count": self.layer_count,
            "mipmap_count": self.mipmap_count,
            "palette_bytes_per_pixel": self.palette_bytes_per_pixel,
            "palette_column_count": self.palette_column_count,
        })
    }
}

impl Session<'_> {
    pub fn image_info(&self) -> ImageInfo {
        self.with(ImageInfo::read)
    }
}
