// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! The dispatch table seam.
//!
//! [`Engine`] mirrors the native call surface one method per entry point,
//! with the raw pointer and length pairs replaced by slices. Everything above
//! this trait talks to the engine exclusively through it, so the native
//! library and the in-process `FakeEngine` of the `testing` feature are
//! interchangeable.
//!
//! Methods take `&mut self` because every entry point may touch the engine's
//! global state. Values are passed raw (`u32` enums, `bool` flags); typing
//! and validation happen in [`Session`](crate::Session).
//!
//! Query-then-fill entry points take `Option<&mut [u8]>`: `None` is the size
//! query (null pointer, zero length), `Some` is the fill.
//!
//! Three methods hand back engine owned memory as raw pointers
//! (`il_get_data`, `il_get_palette`, and the string getters). The pointee is
//! valid until the next mutating call; callers must copy or borrow it while
//! still holding the serialization lock.

use devil_sys::{ILpointf, ILpointi};
use std::ffi::{c_char, CStr};

pub trait Engine: Send {
    // Lifecycle.
    fn il_init(&mut self);
    fn ilu_init(&mut self);
    fn il_shut_down(&mut self);
    fn il_get_error(&mut self) -> u32;

    // Handles and binding.
    fn il_gen_image(&mut self) -> u32;
    fn il_gen_images(&mut self, images: &mut [u32]);
    fn il_bind_image(&mut self, image: u32);
    fn il_delete_image(&mut self, image: u32);
    fn il_delete_images(&mut self, images: &[u32]);
    fn il_is_image(&mut self, image: u32) -> bool;
    fn il_clone_cur_image(&mut self) -> u32;
    fn il_copy_image(&mut self, source: u32) -> bool;
    fn il_overlay_image(&mut self, source: u32, x: i32, y: i32, z: i32) -> bool;
    #[allow(clippy::too_many_arguments)]
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
    ) -> bool;
    fn il_default_image(&mut self) -> bool;
    fn il_create_sub_image(&mut self, kind: u32, count: u32) -> u32;
    fn il_active_face(&mut self, number: u32) -> bool;
    fn il_active_image(&mut self, number: u32) -> bool;
    fn il_active_layer(&mut self, number: u32) -> bool;
    fn il_active_mipmap(&mut self, number: u32) -> bool;

    // Global state.
    fn il_enable(&mut self, mode: u32) -> bool;
    fn il_disable(&mut self, mode: u32) -> bool;
    fn il_is_enabled(&mut self, mode: u32) -> bool;
    fn il_is_disabled(&mut self, mode: u32) -> bool;
    fn il_get_integer(&mut self, mode: u32) -> i32;
    fn il_set_integer(&mut self, mode: u32, value: i32);
    fn il_get_string(&mut self, mode: u32) -> *const c_char;
    fn il_set_string(&mut self, mode: u32, value: &CStr);
    fn il_format_func(&mut self, mode: u32) -> bool;
    fn il_type_func(&mut self, mode: u32) -> bool;
    fn il_origin_func(&mut self, mode: u32) -> bool;
    fn il_compress_func(&mut self, mode: u32) -> bool;
    fn il_hint(&mut self, target: u32, mode: u32);
    fn il_push_attrib(&mut self, bits: u32);
    fn il_pop_attrib(&mut self);
    fn il_key_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32);
    fn il_clear_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32);

    // Pixel transfer.
    #[allow(clippy::too_many_arguments)]
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
    ) -> u32;
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
    fn il_tex_image(
        &mut self,
        width: u32,
        height: u32,
        depth: u32,
        bpp: u8,
        format: u32,
        ty: u32,
        data: Option<&[u8]>,
    ) -> bool;
    fn il_tex_image_dxtc(
        &mut self,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        data: &[u8],
    ) -> bool;
    fn il_set_data(&mut self, data: &[u8]) -> bool;
    fn il_get_data(&mut self) -> *mut u8;
    fn il_get_palette(&mut self) -> *mut u8;
    fn il_get_dxtc_data(&mut self, buffer: Option<&mut [u8]>, format: u32) -> u32;
    fn il_save_l(&mut self, ty: u32, buffer: Option<&mut [u8]>) -> u32;

    // Files and memory lumps.
    fn il_load(&mut self, ty: u32, file_name: &CStr) -> bool;
    fn il_load_image(&mut self, file_name: &CStr) -> bool;
    fn il_load_l(&mut self, ty: u32, lump: &[u8]) -> bool;
    fn il_save(&mut self, ty: u32, file_name: &CStr) -> bool;
    fn il_save_image(&mut self, file_name: &CStr) -> bool;
    fn il_load_data(&mut self, file_name: &CStr, width: u32, height: u32, depth: u32, bpp: u8)
        -> bool;
    fn il_load_data_l(&mut self, lump: &[u8], width: u32, height: u32, depth: u32, bpp: u8)
        -> bool;
    fn il_save_data(&mut self, file_name: &CStr) -> bool;
    fn il_load_pal(&mut self, file_name: &CStr) -> bool;
    fn il_save_pal(&mut self, file_name: &CStr) -> bool;
    fn il_apply_pal(&mut self, file_name: &CStr) -> bool;
    fn il_determine_type(&mut self, file_name: &CStr) -> u32;
    fn il_determine_type_l(&mut self, lump: &[u8]) -> u32;
    fn il_type_from_ext(&mut self, file_name: &CStr) -> u32;
    fn il_is_valid(&mut self, ty: u32, file_name: &CStr) -> bool;
    fn il_is_valid_l(&mut self, ty: u32, lump: &[u8]) -> bool;

    // Whole image operations.
    fn il_convert_image(&mut self, format: u32, ty: u32) -> bool;
    fn il_convert_pal(&mut self, format: u32) -> bool;
    fn il_clear_image(&mut self) -> bool;
    fn il_clamp_ntsc(&mut self) -> bool;
    fn il_set_alpha(&mut self, alpha: f64) -> bool;
    fn il_mod_alpha(&mut self, alpha: f64);
    fn il_set_duration(&mut self, duration: u32) -> bool;
    fn il_image_to_dxtc_data(&mut self, format: u32) -> bool;
    fn il_surface_to_dxtc_data(&mut self, format: u32) -> bool;
    fn il_dxtc_data_to_image(&mut self) -> bool;
    fn il_dxtc_data_to_surface(&mut self) -> bool;
    fn il_flip_surface_dxtc_data(&mut self);
    fn il_invert_surface_dxtc_data_alpha(&mut self) -> bool;

    // Utility subsystem.
    fn ilu_get_integer(&mut self, mode: u32) -> i32;
    fn ilu_get_string(&mut self, name: u32) -> *const c_char;
    fn ilu_error_string(&mut self, error: u32) -> *const c_char;
    fn ilu_image_parameter(&mut self, name: u32, value: u32);
    fn ilu_set_language(&mut self, language: u32) -> bool;
    fn ilu_alienify(&mut self) -> bool;
    fn ilu_blur_avg(&mut self, iterations: u32) -> bool;
    fn ilu_blur_gaussian(&mut self, iterations: u32) -> bool;
    fn ilu_build_mipmaps(&mut self) -> bool;
    fn ilu_colours_used(&mut self) -> u32;
    fn ilu_compare_image(&mut self, other: u32) -> bool;
    fn ilu_contrast(&mut self, contrast: f32) -> bool;
    fn ilu_convolution(&mut self, matrix: &[i32; 9], scale: i32, bias: i32) -> bool;
    #[allow(clippy::too_many_arguments)]
    fn ilu_crop(&mut self, x: u32, y: u32, z: u32, width: u32, height: u32, depth: u32) -> bool;
    fn ilu_edge_detect_e(&mut self) -> bool;
    fn ilu_edge_detect_p(&mut self) -> bool;
    fn ilu_edge_detect_s(&mut self) -> bool;
    fn ilu_emboss(&mut self) -> bool;
    fn ilu_enlarge_canvas(&mut self, width: u32, height: u32, depth: u32) -> bool;
    fn ilu_enlarge_image(&mut self, x: f32, y: f32, z: f32) -> bool;
    fn ilu_equalize(&mut self) -> bool;
    fn ilu_flip_image(&mut self) -> bool;
    fn ilu_gamma_correct(&mut self, gamma: f32) -> bool;
    fn ilu_invert_alpha(&mut self) -> bool;
    fn ilu_mirror(&mut self) -> bool;
    fn ilu_negative(&mut self) -> bool;
    fn ilu_noisify(&mut self, tolerance: f32) -> bool;
    fn ilu_pixelize(&mut self, size: u32) -> bool;
    fn ilu_region_f(&mut self, points: &[ILpointf]);
    fn ilu_region_i(&mut self, points: &[ILpointi]);
    fn ilu_replace_colour(&mut self, red: u8, green: u8, blue: u8, tolerance: f32) -> bool;
    fn ilu_rotate(&mut self, angle: f32) -> bool;
    fn ilu_rotate_3d(&mut self, x: f32, y: f32, z: f32, angle: f32) -> bool;
    fn ilu_saturate_1f(&mut self, saturation: f32) -> bool;
    fn ilu_saturate_4f(&mut self, r: f32, g: f32, b: f32, saturation: f32) -> bool;
    fn ilu_scale(&mut self, width: u32, height: u32, depth: u32) -> bool;
    fn ilu_scale_alpha(&mut self, scale: f32) -> bool;
    fn ilu_scale_colours(&mut self, r: f32, g: f32, b: f32) -> bool;
    fn ilu_sharpen(&mut self, factor: f32, iterations: u32) -> bool;
    fn ilu_swap_colours(&mut self) -> bool;
    fn ilu_wave(&mut self, angle: f32) -> bool;
}
