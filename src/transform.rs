// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Whole-image operations on the bound image.
//!
//! The first group belongs to the core engine (conversion, alpha, block
//! compression). The rest are the utility subsystem's filters and geometric
//! transforms. All of them act on the currently bound image in place.

use crate::{
    error::{Error, Result},
    handles::ImageHandle,
    session::Session,
    types::{CompressedDataFormat, DataFormat, DataType, PaletteType},
};
use devil_sys::{ILpointf, ILpointi};

fn at_least_one(width: u32, height: u32, depth: u32) -> Result<()> {
    if width == 0 || height == 0 || depth == 0 {
        return Err(Error::invalid(format!(
            "dimensions must be at least 1, got {width}x{height}x{depth}"
        )));
    }
    Ok(())
}

impl Session<'_> {
    /// Converts the bound image to `format` and `ty`.
    pub fn convert_image(&self, format: DataFormat, ty: DataType) -> Result<()> {
        self.call("ilConvertImage", |e| {
            e.il_convert_image(format.raw(), ty.raw())
        })
    }

    /// Converts the bound image's palette to `palette`.
    pub fn convert_palette(&self, palette: PaletteType) -> Result<()> {
        self.call("ilConvertPal", |e| e.il_convert_pal(palette.raw()))
    }

    /// Fills the bound image with the clear colour.
    pub fn clear_image(&self) -> Result<()> {
        self.call("ilClearImage", |e| e.il_clear_image())
    }

    /// Clamps colour values to the NTSC safe range.
    pub fn clamp_ntsc(&self) -> Result<()> {
        self.call("ilClampNTSC", |e| e.il_clamp_ntsc())
    }

    /// Sets every pixel's alpha to `alpha`, adding an alpha channel if needed.
    pub fn set_alpha(&self, alpha: f64) -> Result<()> {
        self.call("ilSetAlpha", |e| e.il_set_alpha(alpha))
    }

    pub fn modulate_alpha(&self, alpha: f64) {
        self.with(|e| e.il_mod_alpha(alpha))
    }

    /// Display time of the bound frame in an animation, in milliseconds.
    pub fn set_duration(&self, duration: u32) -> Result<()> {
        self.call("ilSetDuration", |e| e.il_set_duration(duration))
    }

    /// Compresses every surface of the bound image, keeping the blocks
    /// alongside the pixel data.
    pub fn image_to_dxtc_data(&self, format: CompressedDataFormat) -> Result<()> {
        self.call("ilImageToDxtcData", |e| e.il_image_to_dxtc_data(format.raw()))
    }

    /// Compresses only the bound surface.
    pub fn surface_to_dxtc_data(&self, format: CompressedDataFormat) -> Result<()> {
        self.call("ilSurfaceToDxtcData", |e| {
            e.il_surface_to_dxtc_data(format.raw())
        })
    }

    /// Decompresses the kept blocks of every surface back into pixels.
    pub fn dxtc_data_to_image(&self) -> Result<()> {
        self.call("ilDxtcDataToImage", |e| e.il_dxtc_data_to_image())
    }

    pub fn dxtc_data_to_surface(&self) -> Result<()> {
        self.call("ilDxtcDataToSurface", |e| e.il_dxtc_data_to_surface())
    }

    pub fn flip_surface_dxtc_data(&self) {
        self.with(|e| e.il_flip_surface_dxtc_data())
    }

    pub fn invert_surface_dxtc_data_alpha(&self) -> Result<()> {
        self.call("ilInvertSurfaceDxtcDataAlpha", |e| {
            e.il_invert_surface_dxtc_data_alpha()
        })
    }

    pub fn alienify(&self) -> Result<()> {
        self.call("iluAlienify", |e| e.ilu_alienify())
    }

    pub fn blur_average(&self, iterations: u32) -> Result<()> {
        self.call("iluBlurAvg", |e| e.ilu_blur_avg(iterations))
    }

    pub fn blur_gaussian(&self, iterations: u32) -> Result<()> {
        self.call("iluBlurGaussian", |e| e.ilu_blur_gaussian(iterations))
    }

    /// Generates the full mipmap chain of the bound image.
    pub fn build_mipmaps(&self) -> Result<()> {
        self.call("iluBuildMipmaps", |e| e.ilu_build_mipmaps())
    }

    /// Number of distinct colours in the bound image.
    pub fn colours_used(&self) -> u32 {
        self.with(|e| e.ilu_colours_used())
    }

    /// Reports whether `other` holds the same pixels as the bound image.
    pub fn compare_image(&self, other: ImageHandle) -> Result<bool> {
        let id = u32::try_from(other.id())
            .map_err(|_| Error::invalid(format!("compare handle {other} is negative")))?;
        Ok(self.with(|e| e.ilu_compare_image(id)))
    }

    pub fn contrast(&self, contrast: f32) -> Result<()> {
        self.call("iluContrast", |e| e.ilu_contrast(contrast))
    }

    /// Applies a 3x3 convolution `matrix` given in row-major order.
    ///
    /// Each result is divided by `scale` and offset by `bias`.
    pub fn convolution(&self, matrix: &[i32], scale: i32, bias: i32) -> Result<()> {
        let matrix: &[i32; 9] = matrix.try_into().map_err(|_| {
            Error::invalid(format!(
                "convolution matrix must have 9 entries, got {}",
                matrix.len()
            ))
        })?;
        if scale == 0 {
            return Err(Error::invalid("convolution scale must not be zero"));
        }
        self.call("iluConvolution", |e| e.ilu_convolution(matrix, scale, bias))
    }

    /// Crops the bound image to the given box.
    pub fn crop(&self, x: u32, y: u32, z: u32, width: u32, height: u32, depth: u32) -> Result<()> {
        at_least_one(width, height, depth)?;
        self.call("iluCrop", |e| e.ilu_crop(x, y, z, width, height, depth))
    }

    pub fn edge_detect_embossed(&self) -> Result<()> {
        self.call("iluEdgeDetectE", |e| e.ilu_edge_detect_e())
    }

    /// Prewitt edge detection.
    pub fn edge_detect_prewitt(&self) -> Result<()> {
        self.call("iluEdgeDetectP", |e| e.ilu_edge_detect_p())
    }

    /// Sobel edge detection.
    pub fn edge_detect_sobel(&self) -> Result<()> {
        self.call("iluEdgeDetectS", |e| e.ilu_edge_detect_s())
    }

    pub fn emboss(&self) -> Result<()> {
        self.call("iluEmboss", |e| e.ilu_emboss())
    }

    /// Grows the canvas without scaling, anchored by the placement parameter.
    pub fn enlarge_canvas(&self, width: u32, height: u32, depth: u32) -> Result<()> {
        at_least_one(width, height, depth)?;
        self.call("iluEnlargeCanvas", |e| {
            e.ilu_enlarge_canvas(width, height, depth)
        })
    }

    /// Scales the bound image by the given factor along each axis.
    pub fn enlarge_image(&self, x: f32, y: f32, z: f32) -> Result<()> {
        if !(x > 0.0 && y > 0.0 && z > 0.0) {
            return Err(Error::invalid("enlarge factors must be positive"));
        }
        self.call("iluEnlargeImage", |e| e.ilu_enlarge_image(x, y, z))
    }

    pub fn equalize(&self) -> Result<()> {
        self.call("iluEqualize", |e| e.ilu_equalize())
    }

    /// Flips the bound image vertically.
    pub fn flip_image(&self) -> Result<()> {
        self.call("iluFlipImage", |e| e.ilu_flip_image())
    }

    pub fn gamma_correct(&self, gamma: f32) -> Result<()> {
        self.call("iluGammaCorrect", |e| e.ilu_gamma_correct(gamma))
    }

    pub fn invert_alpha(&self) -> Result<()> {
        self.call("iluInvertAlpha", |e| e.ilu_invert_alpha())
    }

    /// Mirrors the bound image horizontally.
    pub fn mirror(&self) -> Result<()> {
        self.call("iluMirror", |e| e.ilu_mirror())
    }

    pub fn negative(&self) -> Result<()> {
        self.call("iluNegative", |e| e.ilu_negative())
    }

    /// Adds random noise; `tolerance` is clamped to `0.0..=1.0`.
    pub fn noisify(&self, tolerance: f32) -> Result<()> {
        let tolerance = tolerance.clamp(0.0, 1.0);
        self.call("iluNoisify", |e| e.ilu_noisify(tolerance))
    }

    pub fn pixelize(&self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(Error::invalid("pixel size must be at least 1"));
        }
        self.call("iluPixelize", |e| e.ilu_pixelize(size))
    }

    /// Restricts subsequent utility operations to the polygon `points`.
    pub fn region(&self, points: &[ILpointf]) -> Result<()> {
        if points.len() < 3 {
            return Err(Error::invalid(format!(
                "a region needs at least 3 points, got {}",
                points.len()
            )));
        }
        self.with(|e| e.ilu_region_f(points));
        Ok(())
    }

    pub fn region_integer(&self, points: &[ILpointi]) -> Result<()> {
        if points.len() < 3 {
            return Err(Error::invalid(format!(
                "a region needs at least 3 points, got {}",
                points.len()
            )));
        }
        self.with(|e| e.ilu_region_i(points));
        Ok(())
    }

    /// Replaces colours within `tolerance` of the clear colour by the given
    /// colour.
    pub fn replace_colour(&self, red: u8, green: u8, blue: u8, tolerance: f32) -> Result<()> {
        self.call("iluReplaceColour", |e| {
            e.ilu_replace_colour(red, green, blue, tolerance)
        })
    }

    /// Rotates by `angle` degrees.
    pub fn rotate(&self, angle: f32) -> Result<()> {
        self.call("iluRotate", |e| e.ilu_rotate(angle))
    }

    pub fn rotate_3d(&self, x: f32, y: f32, z: f32, angle: f32) -> Result<()> {
        self.call("iluRotate3D", |e| e.ilu_rotate_3d(x, y, z, angle))
    }

    pub fn saturate(&self, saturation: f32) -> Result<()> {
        self.call("iluSaturate1f", |e| e.ilu_saturate_1f(saturation))
    }

    /// Saturation with per channel weights.
    pub fn saturate_weighted(&self, r: f32, g: f32, b: f32, saturation: f32) -> Result<()> {
        self.call("iluSaturate4f", |e| e.ilu_saturate_4f(r, g, b, saturation))
    }

    /// Resizes the bound image using the sampling filter parameter.
    pub fn scale(&self, width: u32, height: u32, depth: u32) -> Result<()> {
        at_least_one(width, height, depth)?;
        self.call("iluScale", |e| e.ilu_scale(width, height, depth))
    }

    pub fn scale_alpha(&self, scale: f32) -> Result<()> {
        self.call("iluScaleAlpha", |e| e.ilu_scale_alpha(scale))
    }

    pub fn scale_colours(&self, r: f32, g: f32, b: f32) -> Result<()> {
        self.call("iluScaleColours", |e| e.ilu_scale_colours(r, g, b))
    }

    pub fn sharpen(&self, factor: f32, iterations: u32) -> Result<()> {
        self.call("iluSharpen", |e| e.ilu_sharpen(factor, iterations))
    }

    /// Swaps the red and blue channels.
    pub fn swap_colours(&self) -> Result<()> {
        self.call("iluSwapColours", |e| e.ilu_swap_colours())
    }

    pub fn wave(&self, angle: f32) -> Result<()> {
        self.call("iluWave", |e| e.ilu_wave(angle))
    }
}
