// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{engine::Engine, error::Error, resolver::LibraryPaths};
use devil_sys::{ILpointf, ILpointi, IL, ILU, IL_FALSE};
use libc::c_void;
use std::{
    ffi::{c_char, CStr},
    ptr::null_mut,
};
use tracing::debug;

/// Dispatch table backed by the native core and utility libraries.
///
/// Holds both resolved entry-point tables; the libraries stay loaded for as
/// long as the engine lives. Every method is a single foreign call with the
/// slice arguments lowered to pointer and length.
pub struct NativeEngine {
    il: IL,
    ilu: ILU,
}

impl NativeEngine {
    /// Opens the core library at `paths.core` and the utility library at
    /// `paths.utility`, resolving every entry point of each.
    ///
    /// # Errors
    ///
    /// Returns `NativeLibraryUnavailable` naming whichever library failed to
    /// open or was missing a symbol.
    pub fn load(paths: &LibraryPaths) -> Result<Self, Error> {
        let il = unsafe { IL::new(&paths.core) }.map_err(|err| Error::NativeLibraryUnavailable {
            library: paths.core.display().to_string(),
            reason: err.to_string(),
        })?;
        let ilu =
            unsafe { ILU::new(&paths.utility) }.map_err(|err| Error::NativeLibraryUnavailable {
                library: paths.utility.display().to_string(),
                reason: err.to_string(),
            })?;
        debug!("bound {} and {}", paths.core.display(), paths.utility.display());
        Ok(Self { il, ilu })
    }
}

/// Lengths past the engine's 32-bit limit are clamped, never wrapped, so the
/// engine can only see a prefix of the buffer.
fn native_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn lump(data: &[u8]) -> (*const c_void, u32) {
    (data.as_ptr().cast(), native_len(data.len()))
}

fn out(buffer: Option<&mut [u8]>) -> (*mut c_void, u32) {
    match buffer {
        Some(buffer) => (buffer.as_mut_ptr().cast(), native_len(buffer.len())),
        None => (null_mut(), 0),
    }
}

impl Engine for NativeEngine {
    fn il_init(&mut self) {
        unsafe { self.il.ilInit() }
    }

    fn ilu_init(&mut self) {
        unsafe { self.ilu.iluInit() }
    }

    fn il_shut_down(&mut self) {
        unsafe { self.il.ilShutDown() }
    }

    fn il_get_error(&mut self) -> u32 {
        unsafe { self.il.ilGetError() }
    }

    fn il_gen_image(&mut self) -> u32 {
        unsafe { self.il.ilGenImage() }
    }

    fn il_gen_images(&mut self, images: &mut [u32]) {
        unsafe { self.il.ilGenImages(images.len(), images.as_mut_ptr()) }
    }

    fn il_bind_image(&mut self, image: u32) {
        unsafe { self.il.ilBindImage(image) }
    }

    fn il_delete_image(&mut self, image: u32) {
        unsafe { self.il.ilDeleteImage(image) }
    }

    fn il_delete_images(&mut self, images: &[u32]) {
        unsafe { self.il.ilDeleteImages(images.len(), images.as_ptr()) }
    }

    fn il_is_image(&mut self, image: u32) -> bool {
        unsafe { self.il.ilIsImage(image) != IL_FALSE }
    }

    fn il_clone_cur_image(&mut self) -> u32 {
        unsafe { self.il.ilCloneCurImage() }
    }

    fn il_copy_image(&mut self, source: u32) -> bool {
        unsafe { self.il.ilCopyImage(source) != IL_FALSE }
    }

    fn il_overlay_image(&mut self, source: u32, x: i32, y: i32, z: i32) -> bool {
        unsafe { self.il.ilOverlayImage(source, x, y, z) != IL_FALSE }
    }

    fn il_blit(
        &mut self,
        source: u32,
        dest_x: i32,
        dest_y: i32,
        dest_z: i32,
        src_x: u32,
        src_y: u32,
        src_z: u32,
        width: u32,
        height: u32,
        depth: u32,
    ) -> bool {
        unsafe {
            self.il.ilBlit(
                source, dest_x, dest_y, dest_z, src_x, src_y, src_z, width, height, depth,
            ) != IL_FALSE
        }
    }

    fn il_default_image(&mut self) -> bool {
        unsafe { self.il.ilDefaultImage() != IL_FALSE }
    }

    fn il_create_sub_image(&mut self, kind: u32, count: u32) -> u32 {
        unsafe { self.il.ilCreateSubImage(kind, count) }
    }

    fn il_active_face(&mut self, number: u32) -> bool {
        unsafe { self.il.ilActiveFace(number) != IL_FALSE }
    }

    fn il_active_image(&mut self, number: u32) -> bool {
        unsafe { self.il.ilActiveImage(number) != IL_FALSE }
    }

    fn il_active_layer(&mut self, number: u32) -> bool {
        unsafe { self.il.ilActiveLayer(number) != IL_FALSE }
    }

    fn il_active_mipmap(&mut self, number: u32) -> bool {
        unsafe { self.il.ilActiveMipmap(number) != IL_FALSE }
    }

    fn il_enable(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilEnable(mode) != IL_FALSE }
    }

    fn il_disable(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilDisable(mode) != IL_FALSE }
    }

    fn il_is_enabled(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilIsEnabled(mode) != IL_FALSE }
    }

    fn il_is_disabled(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilIsDisabled(mode) != IL_FALSE }
    }

    fn il_get_integer(&mut self, mode: u32) -> i32 {
        unsafe { self.il.ilGetInteger(mode) }
    }

    fn il_set_integer(&mut self, mode: u32, value: i32) {
        unsafe { self.il.ilSetInteger(mode, value) }
    }

    fn il_get_string(&mut self, mode: u32) -> *const c_char {
        unsafe { self.il.ilGetString(mode) }
    }

    fn il_set_string(&mut self, mode: u32, value: &CStr) {
        unsafe { self.il.ilSetString(mode, value.as_ptr()) }
    }

    fn il_format_func(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilFormatFunc(mode) != IL_FALSE }
    }

    fn il_type_func(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilTypeFunc(mode) != IL_FALSE }
    }

    fn il_origin_func(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilOriginFunc(mode) != IL_FALSE }
    }

    fn il_compress_func(&mut self, mode: u32) -> bool {
        unsafe { self.il.ilCompressFunc(mode) != IL_FALSE }
    }

    fn il_hint(&mut self, target: u32, mode: u32) {
        unsafe { self.il.ilHint(target, mode) }
    }

    fn il_push_attrib(&mut self, bits: u32) {
        unsafe { self.il.ilPushAttrib(bits) }
    }

    fn il_pop_attrib(&mut self) {
        unsafe { self.il.ilPopAttrib() }
    }

    fn il_key_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { self.il.ilKeyColour(red, green, blue, alpha) }
    }

    fn il_clear_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { self.il.ilClearColour(red, green, blue, alpha) }
    }

    fn il_copy_pixels(
        &mut self,
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        ty: u32,
        data: &mut [u8],
    ) -> u32 {
        unsafe {
            self.il.ilCopyPixels(
                x,
                y,
                z,
                width,
                height,
                depth,
                format,
                ty,
                data.as_mut_ptr().cast(),
            )
        }
    }

    fn il_set_pixels(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        ty: u32,
        data: &[u8],
    ) {
        // The engine only reads through this pointer.
        unsafe {
            self.il.ilSetPixels(
                x,
                y,
                z,
                width,
                height,
                depth,
                format,
                ty,
                data.as_ptr().cast_mut().cast(),
            )
        }
    }

    fn il_tex_image(
        &mut self,
        width: u32,
        height: u32,
        depth: u32,
        bpp: u8,
        format: u32,
        ty: u32,
        data: Option<&[u8]>,
    ) -> bool {
        let data = data.map_or(null_mut(), |data| data.as_ptr().cast_mut().cast());
        unsafe { self.il.ilTexImage(width, height, depth, bpp, format, ty, data) != IL_FALSE }
    }

    fn il_tex_image_dxtc(
        &mut self,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        data: &[u8],
    ) -> bool {
        unsafe {
            self.il
                .ilTexImageDxtc(width, height, depth, format, data.as_ptr())
                != IL_FALSE
        }
    }

    fn il_set_data(&mut self, data: &[u8]) -> bool {
        unsafe { self.il.ilSetData(data.as_ptr().cast_mut().cast()) != IL_FALSE }
    }

    fn il_get_data(&mut self) -> *mut u8 {
        unsafe { self.il.ilGetData() }
    }

    fn il_get_palette(&mut self) -> *mut u8 {
        unsafe { self.il.ilGetPalette() }
    }

    fn il_get_dxtc_data(&mut self, buffer: Option<&mut [u8]>, format: u32) -> u32 {
        let (ptr, len) = out(buffer);
        unsafe { self.il.ilGetDXTCData(ptr, len, format) }
    }

    fn il_save_l(&mut self, ty: u32, buffer: Option<&mut [u8]>) -> u32 {
        let (ptr, len) = out(buffer);
        unsafe { self.il.ilSaveL(ty, ptr, len) }
    }

    fn il_load(&mut self, ty: u32, file_name: &CStr) -> bool {
        unsafe { self.il.ilLoad(ty, file_name.as_ptr()) != IL_FALSE }
    }

    fn il_load_image(&mut self, file_name: &CStr) -> bool {
        unsafe { self.il.ilLoadImage(file_name.as_ptr()) != IL_FALSE }
    }

    fn il_load_l(&mut self, ty: u32, data: &[u8]) -> bool {
        let (ptr, len) = lump(data);
        unsafe { self.il.ilLoadL(ty, ptr, len) != IL_FALSE }
    }

    fn il_save(&mut self, ty: u32, file_name: &CStr) -> bool {
        unsafe { self.il.ilSave(ty, file_name.as_ptr()) != IL_FALSE }
    }

    fn il_save_image(&mut self, file_name: &CStr) -> bool {
        unsafe { self.il.ilSaveImage(file_name.as_ptr()) != IL_FALSE }
    }

    fn il_load_data(
        &mut self,
        file_name: &CStr,
        width: u32,
        height: u32,
        depth: u32,
        bpp: u8,
    ) -> bool {
        unsafe { self.il.ilLoadData(file_name.as_ptr(), width, height, depth, bpp) != IL_FALSE }
    }

    fn il_load_data_l(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        depth: u32,
        bpp: u8,
    ) -> bool {
        let (ptr, len) = lump(data);
        unsafe { self.il.ilLoadDataL(ptr, len, width, height, depth, bpp) != IL_FALSE }
    }

    fn il_save_data(&mut self, file_name: &CStr) -> bool {
        unsafe { self.il.ilSaveData(file_name.as_ptr()) != IL_FALSE }
    }

    fn il_load_pal(&mut self, file_name: &CStr) -> bool {
        unsafe { self.il.ilLoadPal(file_name.as_ptr()) != IL_FALSE }
    }

    fn il_save_pal(&mut self, file_name: &CStr) -> bool {
        unsafe { self.il.ilSavePal(file_name.as_ptr()) != IL_FALSE }
    }

    fn il_apply_pal(&mut self, file_name: &CStr) -> bool {
        unsafe { self.il.ilApplyPal(file_name.as_ptr()) != IL_FALSE }
    }

    fn il_determine_type(&mut self, file_name: &CStr) -> u32 {
        unsafe { self.il.ilDetermineType(file_name.as_ptr()) }
    }

    fn il_determine_type_l(&mut self, data: &[u8]) -> u32 {
        let (ptr, len) = lump(data);
        unsafe { self.il.ilDetermineTypeL(ptr, len) }
    }

    fn il_type_from_ext(&mut self, file_name: &CStr) -> u32 {
        unsafe { self.il.ilTypeFromExt(file_name.as_ptr()) }
    }

    fn il_is_valid(&mut self, ty: u32, file_name: &CStr) -> bool {
        unsafe { self.il.ilIsValid(ty, file_name.as_ptr()) != IL_FALSE }
    }

    fn il_is_valid_l(&mut self, ty: u32, data: &[u8]) -> bool {
        let (ptr, len) = lump(data);
        unsafe { self.il.ilIsValidL(ty, ptr, len) != IL_FALSE }
    }

    fn il_convert_image(&mut self, format: u32, ty: u32) -> bool {
        unsafe { self.il.ilConvertImage(format, ty) != IL_FALSE }
    }

    fn il_convert_pal(&mut self, format: u32) -> bool {
        unsafe { self.il.ilConvertPal(format) != IL_FALSE }
    }

    fn il_clear_image(&mut self) -> bool {
        unsafe { self.il.ilClearImage() != IL_FALSE }
    }

    fn il_clamp_ntsc(&mut self) -> bool {
        unsafe { self.il.ilClampNTSC() != IL_FALSE }
    }

    fn il_set_alpha(&mut self, alpha: f64) -> bool {
        unsafe { self.il.ilSetAlpha(alpha) != IL_FALSE }
    }

    fn il_mod_alpha(&mut self, alpha: f64) {
        unsafe { self.il.ilModAlpha(alpha) }
    }

    fn il_set_duration(&mut self, duration: u32) -> bool {
        unsafe { self.il.ilSetDuration(duration) != IL_FALSE }
    }

    fn il_image_to_dxtc_data(&mut self, format: u32) -> bool {
        unsafe { self.il.ilImageToDxtcData(format) != IL_FALSE }
    }

    fn il_surface_to_dxtc_data(&mut self, format: u32) -> bool {
        unsafe { self.il.ilSurfaceToDxtcData(format) != IL_FALSE }
    }

    fn il_dxtc_data_to_image(&mut self) -> bool {
        unsafe { self.il.ilDxtcDataToImage() != IL_FALSE }
    }

    fn il_dxtc_data_to_surface(&mut self) -> bool {
        unsafe { self.il.ilDxtcDataToSurface() != IL_FALSE }
    }

    fn il_flip_surface_dxtc_data(&mut self) {
        unsafe { self.il.ilFlipSurfaceDxtcData() }
    }

    fn il_invert_surface_dxtc_data_alpha(&mut self) -> bool {
        unsafe { self.il.ilInvertSurfaceDxtcDataAlpha() != IL_FALSE }
    }

    fn ilu_get_integer(&mut self, mode: u32) -> i32 {
        unsafe { self.ilu.iluGetInteger(mode) }
    }

    fn ilu_get_string(&mut self, name: u32) -> *const c_char {
        unsafe { self.ilu.iluGetString(name) }
    }

    fn ilu_error_string(&mut self, error: u32) -> *const c_char {
        unsafe { self.ilu.iluErrorString(error) }
    }

    fn ilu_image_parameter(&mut self, name: u32, value: u32) {
        unsafe { self.ilu.iluImageParameter(name, value) }
    }

    fn ilu_set_language(&mut self, language: u32) -> bool {
        unsafe { self.ilu.iluSetLanguage(language) != IL_FALSE }
    }

    fn ilu_alienify(&mut self) -> bool {
        unsafe { self.ilu.iluAlienify() != IL_FALSE }
    }

    fn ilu_blur_avg(&mut self, iterations: u32) -> bool {
        unsafe { self.ilu.iluBlurAvg(iterations) != IL_FALSE }
    }

    fn ilu_blur_gaussian(&mut self, iterations: u32) -> bool {
        unsafe { self.ilu.iluBlurGaussian(iterations) != IL_FALSE }
    }

    fn ilu_build_mipmaps(&mut self) -> bool {
        unsafe { self.ilu.iluBuildMipmaps() != IL_FALSE }
    }

    fn ilu_colours_used(&mut self) -> u32 {
        unsafe { self.ilu.iluColoursUsed() }
    }

    fn ilu_compare_image(&mut self, other: u32) -> bool {
        unsafe { self.ilu.iluCompareImage(other) != IL_FALSE }
    }

    fn ilu_contrast(&mut self, contrast: f32) -> bool {
        unsafe { self.ilu.iluContrast(contrast) != IL_FALSE }
    }

    fn ilu_convolution(&mut self, matrix: &[i32; 9], scale: i32, bias: i32) -> bool {
        // The engine copies the matrix before returning.
        let mut matrix = *matrix;
        unsafe { self.ilu.iluConvolution(matrix.as_mut_ptr(), scale, bias) != IL_FALSE }
    }

    fn ilu_crop(&mut self, x: u32, y: u32, z: u32, width: u32, height: u32, depth: u32) -> bool {
        unsafe { self.ilu.iluCrop(x, y, z, width, height, depth) != IL_FALSE }
    }

    fn ilu_edge_detect_e(&mut self) -> bool {
        unsafe { self.ilu.iluEdgeDetectE() != IL_FALSE }
    }

    fn ilu_edge_detect_p(&mut self) -> bool {
        unsafe { self.ilu.iluEdgeDetectP() != IL_FALSE }
    }

    fn ilu_edge_detect_s(&mut self) -> bool {
        unsafe { self.ilu.iluEdgeDetectS() != IL_FALSE }
    }

    fn ilu_emboss(&mut self) -> bool {
        unsafe { self.ilu.iluEmboss() != IL_FALSE }
    }

    fn ilu_enlarge_canvas(&mut self, width: u32, height: u32, depth: u32) -> bool {
        unsafe { self.ilu.iluEnlargeCanvas(width, height, depth) != IL_FALSE }
    }

    fn ilu_enlarge_image(&mut self, x: f32, y: f32, z: f32) -> bool {
        unsafe { self.ilu.iluEnlargeImage(x, y, z) != IL_FALSE }
    }

    fn ilu_equalize(&mut self) -> bool {
        unsafe { self.ilu.iluEqualize() != IL_FALSE }
    }

    fn ilu_flip_image(&mut self) -> bool {
        unsafe { self.ilu.iluFlipImage() != IL_FALSE }
    }

    fn ilu_gamma_correct(&mut self, gamma: f32) -> bool {
        unsafe { self.ilu.iluGammaCorrect(gamma) != IL_FALSE }
    }

    fn ilu_invert_alpha(&mut self) -> bool {
        unsafe { self.ilu.iluInvertAlpha() != IL_FALSE }
    }

    fn ilu_mirror(&mut self) -> bool {
        unsafe { self.ilu.iluMirror() != IL_FALSE }
    }

    fn ilu_negative(&mut self) -> bool {
        unsafe { self.ilu.iluNegative() != IL_FALSE }
    }

    fn ilu_noisify(&mut self, tolerance: f32) -> bool {
        unsafe { self.ilu.iluNoisify(tolerance) != IL_FALSE }
    }

    fn ilu_pixelize(&mut self, size: u32) -> bool {
        unsafe { self.ilu.iluPixelize(size) != IL_FALSE }
    }

    fn ilu_region_f(&mut self, points: &[ILpointf]) {
        unsafe {
            self.ilu
                .iluRegionfv(points.as_ptr().cast_mut(), native_len(points.len()))
        }
    }

    fn ilu_region_i(&mut self, points: &[ILpointi]) {
        unsafe {
            self.ilu
                .iluRegioniv(points.as_ptr().cast_mut(), native_len(points.len()))
        }
    }

    fn ilu_replace_colour(&mut self, red: u8, green: u8, blue: u8, tolerance: f32) -> bool {
        unsafe { self.ilu.iluReplaceColour(red, green, blue, tolerance) != IL_FALSE }
    }

    fn ilu_rotate(&mut self, angle: f32) -> bool {
        unsafe { self.ilu.iluRotate(angle) != IL_FALSE }
    }

    fn ilu_rotate_3d(&mut self, x: f32, y: f32, z: f32, angle: f32) -> bool {
        unsafe { self.ilu.iluRotate3D(x, y, z, angle) != IL_FALSE }
    }

    fn ilu_saturate_1f(&mut self, saturation: f32) -> bool {
        unsafe { self.ilu.iluSaturate1f(saturation) != IL_FALSE }
    }

    fn ilu_saturate_4f(&mut self, r: f32, g: f32, b: f32, saturation: f32) -> bool {
        unsafe { self.ilu.iluSaturate4f(r, g, b, saturation) != IL_FALSE }
    }

    fn ilu_scale(&mut self, width: u32, height: u32, depth: u32) -> bool {
        unsafe { self.ilu.iluScale(width, height, depth) != IL_FALSE }
    }

    fn ilu_scale_alpha(&mut self, scale: f32) -> bool {
        unsafe { self.ilu.iluScaleAlpha(scale) != IL_FALSE }
    }

    fn ilu_scale_colours(&mut self, r: f32, g: f32, b: f32) -> bool {
        unsafe { self.ilu.iluScaleColours(r, g, b) != IL_FALSE }
    }

    fn ilu_sharpen(&mut self, factor: f32, iterations: u32) -> bool {
        unsafe { self.ilu.iluSharpen(factor, iterations) != IL_FALSE }
    }

    fn ilu_swap_colours(&mut self) -> bool {
        unsafe { self.ilu.iluSwapColours() != IL_FALSE }
    }

    fn ilu_wave(&mut self, angle: f32) -> bool {
        unsafe { self.ilu.iluWave(angle) != IL_FALSE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_clamp_instead_of_wrapping() {
        assert_eq!(native_len(16), 16);
        assert_eq!(native_len(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(native_len(u32::MAX as usize + 2), u32::MAX);
    }
}
