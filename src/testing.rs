// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! In-process stand-in for the native engine.
//!
//! [`FakeEngine`] implements [`Engine`] over plain Rust state so the binding
//! layer can be exercised without the native libraries. It keeps real image
//! storage, a real attribute stack and a bounded error stack, and records
//! the name of every entry point it receives so tests can assert exactly
//! which native calls an operation made.
//!
//! The fake is a cheap handle: clones share state, so a test can hand one
//! clone to a [`Runtime`](crate::Runtime) and keep another to inspect.
//!
//! Behaviour worth knowing when writing tests:
//!
//! - Image 0 always exists and ids are issued from 1. Binding an unknown id
//!   creates it, as the engine does.
//! - Pixel copies only succeed in the image's stored format and type.
//! - Files and memory lumps use a small private container, so anything
//!   saved by the fake can be loaded back by it. `ilSave` refuses to replace
//!   an existing file unless `FILE_OVERWRITE` is enabled.
//! - Crop, flip, mirror, nearest-neighbour scale and same-type format
//!   conversions between the 8-bit colour layouts are performed for real;
//!   the other utility filters are recorded and report success.
//! - Errors stack up to the engine's depth and `ilGetError` pops the most
//!   recent one.
//! - Shutdown discards every image and resets all state except the call
//!   journal.

use crate::{
    engine::Engine,
    sizing::{bytes_per_component, component_count},
    types::{
        CompressionAlgorithm, DataFormat, DataType, EnableCap, ErrorType, Language,
        OriginLocation, PaletteType,
    },
};
use devil_sys::{self as sys, ILpointf, ILpointi};
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    ffi::{c_char, CStr, CString},
    fs,
    path::Path,
    ptr::{null, null_mut},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

const MAGIC: &[u8; 4] = b"FAKE";
const HEADER_LEN: usize = 4 + 5 * 4;

const KNOWN_CAPS: [EnableCap; 11] = [
    EnableCap::ORIGIN_SET,
    EnableCap::FORMAT_SET,
    EnableCap::TYPE_SET,
    EnableCap::FILE_OVERWRITE,
    EnableCap::CONV_PAL,
    EnableCap::DEFAULT_ON_FAIL,
    EnableCap::USE_KEY_COLOUR,
    EnableCap::BLIT_BLEND,
    EnableCap::SAVE_INTERLACED,
    EnableCap::NVIDIA_COMPRESS,
    EnableCap::SQUISH_COMPRESS,
];

#[derive(Clone, Debug, PartialEq)]
struct FakeImage {
    width: u32,
    height: u32,
    depth: u32,
    format: u32,
    ty: u32,
    data: Vec<u8>,
    palette_type: u32,
    palette: Vec<u8>,
    duration: u32,
    dxtc: Option<(u32, Vec<u8>)>,
    images: u32,
    mipmaps: u32,
    layers: u32,
}

impl FakeImage {
    fn new(width: u32, height: u32, depth: u32, format: u32, ty: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            depth,
            format,
            ty,
            data,
            palette_type: sys::IL_PAL_NONE,
            palette: Vec::new(),
            duration: 0,
            dxtc: None,
            images: 0,
            mipmaps: 0,
            layers: 0,
        }
    }

    fn blank() -> Self {
        Self::new(1, 1, 1, sys::IL_RGBA, sys::IL_UNSIGNED_BYTE, vec![0; 4])
    }

    fn bytes_per_pixel(&self) -> usize {
        let components = component_count(DataFormat(self.format)).unwrap_or(0);
        let bytes = bytes_per_component(DataType(self.ty)).unwrap_or(0);
        (components * bytes) as usize
    }

    /// Byte offset and length of every row inside the given box, or `None`
    /// if the box does not fit the image.
    fn rows(
        &self,
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Option<Vec<(usize, usize)>> {
        let fits = |offset: u32, len: u32, limit: u32| {
            u64::from(offset) + u64::from(len) <= u64::from(limit)
        };
        if !fits(x, width, self.width)
            || !fits(y, height, self.height)
            || !fits(z, depth, self.depth)
        {
            return None;
        }
        let bpp = self.bytes_per_pixel();
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = Vec::with_capacity(height as usize * depth as usize);
        for zz in z as usize..z as usize + depth as usize {
            for yy in y as usize..y as usize + height as usize {
                let start = ((zz * h + yy) * w + x as usize) * bpp;
                rows.push((start, width as usize * bpp));
            }
        }
        Some(rows)
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.data.len());
        out.extend_from_slice(MAGIC);
        for value in [self.width, self.height, self.depth, self.format, self.ty] {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out.extend_from_slice(&self.data);
        out
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_LEN || &bytes[..4] != MAGIC {
            return None;
        }
        let field = |i: usize| {
            let start = 4 + i * 4;
            u32::from_le_bytes([bytes[start], bytes[start + 1], bytes[start + 2], bytes[start + 3]])
        };
        let image = Self::new(
            field(0),
            field(1),
            field(2),
            field(3),
            field(4),
            bytes[HEADER_LEN..].to_vec(),
        );
        let expected = image.bytes_per_pixel()
            * image.width as usize
            * image.height as usize
            * image.depth as usize;
        (expected > 0 && expected == image.data.len()).then_some(image)
    }
}

#[derive(Clone, Debug, Default)]
struct Snapshot {
    integers: HashMap<u32, i32>,
    strings: HashMap<u32, CString>,
    enabled: HashSet<u32>,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<&'static str>,
    initialized: bool,
    images: BTreeMap<u32, FakeImage>,
    next_id: u32,
    bound: u32,
    errors: Vec<u32>,
    fail_next: Option<ErrorType>,
    integers: HashMap<u32, i32>,
    strings: HashMap<u32, CString>,
    enabled: HashSet<u32>,
    stack: Vec<Snapshot>,
    key_colour: [f32; 4],
    clear_colour: [f32; 4],
    utility: HashMap<u32, u32>,
    utility_strings: HashMap<u32, CString>,
    error_strings: HashMap<u32, CString>,
    transfer: Option<(u32, u32)>,
}

impl Inner {
    fn reset(&mut self) {
        self.initialized = false;
        self.images.clear();
        self.images.insert(0, FakeImage::blank());
        self.next_id = 1;
        self.bound = 0;
        self.errors.clear();
        self.fail_next = None;
        self.integers = HashMap::from([
            (sys::IL_FORMAT_MODE, sys::IL_BGRA as i32),
            (sys::IL_TYPE_MODE, sys::IL_UNSIGNED_BYTE as i32),
            (sys::IL_ORIGIN_MODE, sys::IL_ORIGIN_LOWER_LEFT as i32),
            (sys::IL_QUANTIZATION_MODE, sys::IL_WU_QUANT as i32),
            (sys::IL_JPG_QUALITY, 99),
            (sys::IL_JPG_SAVE_FORMAT, sys::IL_JFIF as i32),
            (sys::IL_DXTC_FORMAT, sys::IL_DXT1 as i32),
            (sys::IL_COMPRESS_MODE, sys::IL_COMPRESS_ZLIB as i32),
            (sys::IL_MEM_SPEED_HINT, sys::IL_FASTEST as i32),
            (sys::IL_COMPRESSION_HINT, sys::IL_USE_COMPRESSION as i32),
        ]);
        self.strings = HashMap::from([
            (sys::IL_VENDOR, CString::from(c"DevIL")),
            (sys::IL_VERSION_NUM, CString::from(c"Developer's Image Library (DevIL) 1.8.0")),
            (sys::IL_LOAD_EXT, CString::from(c"bmp dcmdds dds png raw tga")),
            (sys::IL_SAVE_EXT, CString::from(c"bmp dds png raw tga")),
        ]);
        self.enabled.clear();
        self.stack.clear();
        self.key_colour = [0.0; 4];
        self.clear_colour = [0.0; 4];
        self.utility = HashMap::from([
            (sys::ILU_FILTER, sys::ILU_NEAREST),
            (sys::ILU_PLACEMENT, sys::ILU_CENTER),
        ]);
        self.utility_strings = HashMap::from([
            (sys::ILU_VENDOR, CString::from(c"DevIL")),
            (sys::ILU_VERSION_NUM, CString::from(c"Developer's Image Library Utilities 1.8.0")),
        ]);
    }

    fn record(&mut self, name: &'static str) {
        self.calls.push(name);
    }

    /// Records `name` and consumes a scripted failure if one is pending.
    fn op(&mut self, name: &'static str) -> bool {
        self.calls.push(name);
        match self.fail_next.take() {
            Some(code) => self.fail(code),
            None => true,
        }
    }

    fn fail(&mut self, code: ErrorType) -> bool {
        if self.errors.len() == sys::IL_ERROR_STACK_SIZE {
            self.errors.remove(0);
        }
        self.errors.push(code.raw());
        false
    }

    fn current(&mut self) -> Option<&mut FakeImage> {
        self.images.get_mut(&self.bound)
    }

    /// Runs `f` on the bound image, failing with `ILLEGAL_OPERATION` when
    /// nothing is bound.
    fn with_current(&mut self, f: impl FnOnce(&mut FakeImage) -> Result<(), ErrorType>) -> bool {
        let outcome = match self.current() {
            Some(image) => f(image),
            None => Err(ErrorType::ILLEGAL_OPERATION),
        };
        match outcome {
            Ok(()) => true,
            Err(code) => self.fail(code),
        }
    }

    fn issue(&mut self, image: FakeImage) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.images.insert(id, image);
        id
    }

    fn replace_current(&mut self, image: FakeImage) {
        self.images.insert(self.bound, image);
    }

    fn load_bytes(&mut self, bytes: &[u8]) -> bool {
        match FakeImage::decode(bytes) {
            Some(image) => {
                self.replace_current(image);
                true
            }
            None => self.fail(ErrorType::INVALID_FILE_HEADER),
        }
    }

    fn load_file(&mut self, file_name: &CStr) -> bool {
        let path = file_name.to_string_lossy();
        match fs::read(&*path) {
            Ok(bytes) => self.load_bytes(&bytes),
            Err(_) => self.fail(ErrorType::COULD_NOT_OPEN_FILE),
        }
    }

    fn save_file(&mut self, file_name: &CStr) -> bool {
        let path = file_name.to_string_lossy().into_owned();
        if Path::new(&path).exists() && !self.enabled.contains(&sys::IL_FILE_OVERWRITE) {
            return self.fail(ErrorType::FILE_ALREADY_EXISTS);
        }
        let Some(encoded) = self.current().map(|image| image.encode()) else {
            return self.fail(ErrorType::ILLEGAL_OPERATION);
        };
        match fs::write(&path, encoded) {
            Ok(()) => true,
            Err(_) => self.fail(ErrorType::FILE_IO_ERROR),
        }
    }

    /// Serves a scripted query-then-fill exchange, if one is set.
    fn scripted_transfer(&mut self, buffer: Option<&mut [u8]>) -> Option<u32> {
        let (first, second) = self.transfer?;
        Some(match buffer {
            None => first,
            Some(buffer) => {
                let n = (second as usize).min(buffer.len());
                for (i, byte) in buffer[..n].iter_mut().enumerate() {
                    *byte = i as u8;
                }
                second
            }
        })
    }

    fn image_integer(&self, mode: u32) -> Option<i32> {
        let image = self.images.get(&self.bound)?;
        let bpp = image.bytes_per_pixel() as i32;
        let palette_bpp = crate::sizing::palette_component_count(PaletteType(image.palette_type))
            .unwrap_or(0) as i32;
        let value = match mode {
            sys::IL_IMAGE_WIDTH => image.width as i32,
            sys::IL_IMAGE_HEIGHT => image.height as i32,
            sys::IL_IMAGE_DEPTH => image.depth as i32,
            sys::IL_IMAGE_FORMAT => image.format as i32,
            sys::IL_IMAGE_TYPE => image.ty as i32,
            sys::IL_IMAGE_CHANNELS => component_count(DataFormat(image.format)).unwrap_or(0) as i32,
            sys::IL_IMAGE_BPC => bytes_per_component(DataType(image.ty)).unwrap_or(0) as i32,
            sys::IL_IMAGE_BYTES_PER_PIXEL => bpp,
            sys::IL_IMAGE_BITS_PER_PIXEL => bpp * 8,
            sys::IL_IMAGE_SIZE_OF_DATA => image.data.len() as i32,
            sys::IL_IMAGE_PLANESIZE => bpp * image.width as i32 * image.height as i32,
            sys::IL_IMAGE_DURATION => image.duration as i32,
            sys::IL_IMAGE_ORIGIN => self.integers.get(&sys::IL_ORIGIN_MODE).copied().unwrap_or(0),
            sys::IL_IMAGE_OFFX | sys::IL_IMAGE_OFFY | sys::IL_IMAGE_CUBEFLAGS => 0,
            sys::IL_PALETTE_TYPE => image.palette_type as i32,
            sys::IL_PALETTE_BPP => palette_bpp,
            sys::IL_PALETTE_NUM_COLS => match palette_bpp {
                0 => 0,
                n => image.palette.len() as i32 / n,
            },
            sys::IL_PALETTE_SIZE => image.palette.len() as i32,
            sys::IL_PALETTE_BASE_TYPE => match image.palette_type {
                sys::IL_PAL_RGB24 | sys::IL_PAL_RGB32 => sys::IL_RGB as i32,
                sys::IL_PAL_RGBA32 => sys::IL_RGBA as i32,
                sys::IL_PAL_BGR24 | sys::IL_PAL_BGR32 => sys::IL_BGR as i32,
                sys::IL_PAL_BGRA32 => sys::IL_BGRA as i32,
                _ => 0,
            },
            sys::IL_DXTC_DATA_FORMAT => image
                .dxtc
                .as_ref()
                .map_or(sys::IL_DXT_NO_COMP, |(format, _)| *format) as i32,
            sys::IL_NUM_IMAGES => image.images as i32,
            sys::IL_NUM_MIPMAPS => image.mipmaps as i32,
            sys::IL_NUM_LAYERS => image.layers as i32,
            sys::IL_NUM_FACES => 0,
            sys::IL_CUR_IMAGE => self.bound as i32,
            _ => return None,
        };
        Some(value)
    }
}

/// Size of the block compressed form of `image` in `format`.
fn dxtc_len(image: &FakeImage, format: u32) -> Option<usize> {
    let block = match format {
        sys::IL_DXT1 | sys::IL_DXT1A | sys::IL_ATI1N => 8,
        sys::IL_DXT2 | sys::IL_DXT3 | sys::IL_DXT4 | sys::IL_DXT5 => 16,
        sys::IL_3DC | sys::IL_RXGB => 16,
        _ => return None,
    };
    let blocks = image.width.div_ceil(4) as usize * image.height.div_ceil(4) as usize;
    Some(blocks * image.depth as usize * block)
}

/// Channel order of the 8-bit colour layouts as indices into RGBA.
fn channel_order(format: u32) -> Option<&'static [usize]> {
    match format {
        sys::IL_RGB => Some(&[0, 1, 2]),
        sys::IL_RGBA => Some(&[0, 1, 2, 3]),
        sys::IL_BGR => Some(&[2, 1, 0]),
        sys::IL_BGRA => Some(&[2, 1, 0, 3]),
        _ => None,
    }
}

fn convert_pixels(data: &[u8], from: u32, to: u32) -> Option<Vec<u8>> {
    let (src, dst) = (channel_order(from)?, channel_order(to)?);
    let mut out = Vec::with_capacity(data.len() / src.len() * dst.len());
    for pixel in data.chunks_exact(src.len()) {
        let mut rgba = [0, 0, 0, u8::MAX];
        for (value, &slot) in pixel.iter().zip(src) {
            rgba[slot] = *value;
        }
        out.extend(dst.iter().map(|&slot| rgba[slot]));
    }
    Some(out)
}

fn extension_type(file_name: &CStr) -> u32 {
    let name = file_name.to_string_lossy().to_ascii_lowercase();
    let ext = name.rsplit_once('.').map_or("", |(_, ext)| ext);
    match ext {
        "bmp" => sys::IL_BMP,
        "png" => sys::IL_PNG,
        "tga" => sys::IL_TGA,
        "jpg" | "jpeg" | "jpe" => sys::IL_JPG,
        "dds" => sys::IL_DDS,
        "raw" => sys::IL_RAW,
        "pal" => sys::IL_JASC_PAL,
        _ => sys::IL_TYPE_UNKNOWN,
    }
}

/// In-process engine for tests; see the module documentation.
#[derive(Clone, Debug)]
pub struct FakeEngine {
    inner: Arc<Mutex<Inner>>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeEngine {
    pub fn new() -> Self {
        let mut inner = Inner::default();
        inner.reset();
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Names of every entry point called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    /// How many times entry point `name` was called.
    pub fn count(&self, name: &str) -> usize {
        self.lock().calls.iter().filter(|call| **call == name).count()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Makes the next fallible entry point fail with `code`.
    pub fn fail_next(&self, code: ErrorType) {
        self.lock().fail_next = Some(code);
    }

    /// Scripts the size query and fill results of `ilSaveL` and
    /// `ilGetDXTCData`. The fill writes `0, 1, 2, ...` into the buffer.
    pub fn script_transfer(&self, first: u32, second: u32) {
        self.lock().transfer = Some((first, second));
    }

    /// Gives the bound image a palette.
    pub fn set_palette(&self, palette: PaletteType, data: Vec<u8>) {
        let mut inner = self.lock();
        if let Some(image) = inner.current() {
            image.palette_type = palette.raw();
            image.palette = data;
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    /// Number of images held, including the default image.
    pub fn image_count(&self) -> usize {
        self.lock().images.len()
    }

    pub fn bound(&self) -> u32 {
        self.lock().bound
    }

    pub fn stack_depth(&self) -> usize {
        self.lock().stack.len()
    }

    pub fn key_colour(&self) -> [f32; 4] {
        self.lock().key_colour
    }

    pub fn clear_colour(&self) -> [f32; 4] {
        self.lock().clear_colour
    }
}

impl Engine for FakeEngine {
    fn il_init(&mut self) {
        let mut inner = self.lock();
        inner.record("ilInit");
        inner.initialized = true;
    }

    fn ilu_init(&mut self) {
        self.lock().record("iluInit");
    }

    fn il_shut_down(&mut self) {
        let mut inner = self.lock();
        inner.record("ilShutDown");
        inner.reset();
    }

    fn il_get_error(&mut self) -> u32 {
        let mut inner = self.lock();
        inner.record("ilGetError");
        inner.errors.pop().unwrap_or(sys::IL_NO_ERROR)
    }

    fn il_gen_image(&mut self) -> u32 {
        let mut inner = self.lock();
        if !inner.op("ilGenImage") {
            return 0;
        }
        inner.issue(FakeImage::blank())
    }

    fn il_gen_images(&mut self, images: &mut [u32]) {
        let mut inner = self.lock();
        if !inner.op("ilGenImages") {
            images.fill(0);
            return;
        }
        for slot in images {
            *slot = inner.issue(FakeImage::blank());
        }
    }

    fn il_bind_image(&mut self, image: u32) {
        let mut inner = self.lock();
        inner.record("ilBindImage");
        inner.images.entry(image).or_insert_with(FakeImage::blank);
        inner.next_id = inner.next_id.max(image.saturating_add(1));
        inner.bound = image;
    }

    fn il_delete_image(&mut self, image: u32) {
        let mut inner = self.lock();
        inner.record("ilDeleteImage");
        if image == 0 {
            return;
        }
        inner.images.remove(&image);
        if inner.bound == image {
            inner.bound = 0;
        }
    }

    fn il_delete_images(&mut self, images: &[u32]) {
        let mut inner = self.lock();
        inner.record("ilDeleteImages");
        for &image in images.iter().filter(|id| **id != 0) {
            inner.images.remove(&image);
            if inner.bound == image {
                inner.bound = 0;
            }
        }
    }

    fn il_is_image(&mut self, image: u32) -> bool {
        let mut inner = self.lock();
        inner.record("ilIsImage");
        image != 0 && inner.images.contains_key(&image)
    }

    fn il_clone_cur_image(&mut self) -> u32 {
        let mut inner = self.lock();
        if !inner.op("ilCloneCurImage") {
            return 0;
        }
        match inner.current().cloned() {
            Some(image) => inner.issue(image),
            None => {
                inner.fail(ErrorType::ILLEGAL_OPERATION);
                0
            }
        }
    }

    fn il_copy_image(&mut self, source: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilCopyImage") {
            return false;
        }
        match inner.images.get(&source).cloned() {
            Some(image) => {
                inner.replace_current(image);
                true
            }
            None => inner.fail(ErrorType::ILLEGAL_OPERATION),
        }
    }

    fn il_overlay_image(&mut self, source: u32, _x: i32, _y: i32, _z: i32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilOverlayImage") {
            return false;
        }
        inner.images.contains_key(&source) || inner.fail(ErrorType::ILLEGAL_OPERATION)
    }

    fn il_blit(
        &mut self,
        source: u32,
        _dest_x: i32,
        _dest_y: i32,
        _dest_z: i32,
        _src_x: u32,
        _src_y: u32,
        _src_z: u32,
        _width: u32,
        _height: u32,
        _depth: u32,
    ) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilBlit") {
            return false;
        }
        inner.images.contains_key(&source) || inner.fail(ErrorType::ILLEGAL_OPERATION)
    }

    fn il_default_image(&mut self) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilDefaultImage") {
            return false;
        }
        let checker = (0..4u8)
            .flat_map(|i| {
                let v = if i % 3 == 0 { u8::MAX } else { 0 };
                [v, v, v, u8::MAX]
            })
            .collect();
        let image = FakeImage::new(2, 2, 1, sys::IL_RGBA, sys::IL_UNSIGNED_BYTE, checker);
        inner.replace_current(image);
        true
    }

    fn il_create_sub_image(&mut self, kind: u32, count: u32) -> u32 {
        let mut inner = self.lock();
        if !inner.op("ilCreateSubImage") {
            return 0;
        }
        let created = inner.with_current(|image| {
            match kind {
                sys::IL_SUB_NEXT => image.images = count,
                sys::IL_SUB_MIPMAP => image.mipmaps = count,
                sys::IL_SUB_LAYER => image.layers = count,
                _ => return Err(ErrorType::INVALID_ENUM),
            }
            Ok(())
        });
        if created {
            count
        } else {
            0
        }
    }

    fn il_active_face(&mut self, number: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilActiveFace") && (number == 0 || inner.fail(ErrorType::ILLEGAL_OPERATION))
    }

    fn il_active_image(&mut self, number: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilActiveImage")
            && inner.with_current(|image| {
                if number <= image.images {
                    Ok(())
                } else {
                    Err(ErrorType::ILLEGAL_OPERATION)
                }
            })
    }

    fn il_active_layer(&mut self, number: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilActiveLayer")
            && inner.with_current(|image| {
                if number <= image.layers {
                    Ok(())
                } else {
                    Err(ErrorType::ILLEGAL_OPERATION)
                }
            })
    }

    fn il_active_mipmap(&mut self, number: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilActiveMipmap")
            && inner.with_current(|image| {
                if number <= image.mipmaps {
                    Ok(())
                } else {
                    Err(ErrorType::ILLEGAL_OPERATION)
                }
            })
    }

    fn il_enable(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilEnable") {
            return false;
        }
        if !KNOWN_CAPS.contains(&EnableCap(mode)) {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.enabled.insert(mode);
        true
    }

    fn il_disable(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilDisable") {
            return false;
        }
        if !KNOWN_CAPS.contains(&EnableCap(mode)) {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.enabled.remove(&mode);
        true
    }

    fn il_is_enabled(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        inner.record("ilIsEnabled");
        inner.enabled.contains(&mode)
    }

    fn il_is_disabled(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        inner.record("ilIsDisabled");
        KNOWN_CAPS.contains(&EnableCap(mode)) && !inner.enabled.contains(&mode)
    }

    fn il_get_integer(&mut self, mode: u32) -> i32 {
        let mut inner = self.lock();
        inner.record("ilGetInteger");
        if mode == sys::IL_VERSION_NUM {
            return 180;
        }
        if let Some(value) = inner.image_integer(mode) {
            return value;
        }
        inner.integers.get(&mode).copied().unwrap_or(0)
    }

    fn il_set_integer(&mut self, mode: u32, value: i32) {
        let mut inner = self.lock();
        inner.record("ilSetInteger");
        inner.integers.insert(mode, value);
    }

    fn il_get_string(&mut self, mode: u32) -> *const c_char {
        let mut inner = self.lock();
        inner.record("ilGetString");
        inner.strings.get(&mode).map_or(null(), |value| value.as_ptr())
    }

    fn il_set_string(&mut self, mode: u32, value: &CStr) {
        let mut inner = self.lock();
        inner.record("ilSetString");
        inner.strings.insert(mode, value.to_owned());
    }

    fn il_format_func(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilFormatFunc") {
            return false;
        }
        if component_count(DataFormat(mode)).is_err() {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.integers.insert(sys::IL_FORMAT_MODE, mode as i32);
        true
    }

    fn il_type_func(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilTypeFunc") {
            return false;
        }
        if bytes_per_component(DataType(mode)).is_err() {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.integers.insert(sys::IL_TYPE_MODE, mode as i32);
        true
    }

    fn il_origin_func(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilOriginFunc") {
            return false;
        }
        if OriginLocation(mode).name().is_none() {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.integers.insert(sys::IL_ORIGIN_MODE, mode as i32);
        true
    }

    fn il_compress_func(&mut self, mode: u32) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilCompressFunc") {
            return false;
        }
        if CompressionAlgorithm(mode).name().is_none() {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.integers.insert(sys::IL_COMPRESS_MODE, mode as i32);
        true
    }

    fn il_hint(&mut self, target: u32, mode: u32) {
        let mut inner = self.lock();
        inner.record("ilHint");
        inner.integers.insert(target, mode as i32);
    }

    fn il_push_attrib(&mut self, _bits: u32) {
        let mut inner = self.lock();
        inner.record("ilPushAttrib");
        let snapshot = Snapshot {
            integers: inner.integers.clone(),
            strings: inner.strings.clone(),
            enabled: inner.enabled.clone(),
        };
        inner.stack.push(snapshot);
    }

    fn il_pop_attrib(&mut self) {
        let mut inner = self.lock();
        inner.record("ilPopAttrib");
        match inner.stack.pop() {
            Some(snapshot) => {
                inner.integers = snapshot.integers;
                inner.strings = snapshot.strings;
                inner.enabled = snapshot.enabled;
            }
            None => {
                inner.fail(ErrorType::STACK_UNDERFLOW);
            }
        }
    }

    fn il_key_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        let mut inner = self.lock();
        inner.record("ilKeyColour");
        inner.key_colour = [red, green, blue, alpha];
    }

    fn il_clear_colour(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        let mut inner = self.lock();
        inner.record("ilClearColour");
        inner.clear_colour = [red, green, blue, alpha];
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
        let mut inner = self.lock();
        if !inner.op("ilCopyPixels") {
            return 0;
        }
        let mut copied = 0;
        let ok = inner.with_current(|image| {
            if image.format != format || image.ty != ty {
                return Err(ErrorType::INVALID_CONVERSION);
            }
            let rows = image
                .rows(x, y, z, width, height, depth)
                .ok_or(ErrorType::INVALID_PARAM)?;
            for (start, len) in rows {
                let dest = data
                    .get_mut(copied..copied + len)
                    .ok_or(ErrorType::INVALID_PARAM)?;
                dest.copy_from_slice(&image.data[start..start + len]);
                copied += len;
            }
            Ok(())
        });
        if ok {
            copied as u32
        } else {
            0
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
        let mut inner = self.lock();
        inner.record("ilSetPixels");
        inner.with_current(|image| {
            if image.format != format || image.ty != ty {
                return Err(ErrorType::INVALID_CONVERSION);
            }
            let (x, y, z) = (
                u32::try_from(x).map_err(|_| ErrorType::INVALID_PARAM)?,
                u32::try_from(y).map_err(|_| ErrorType::INVALID_PARAM)?,
                u32::try_from(z).map_err(|_| ErrorType::INVALID_PARAM)?,
            );
            let rows = image
                .rows(x, y, z, width, height, depth)
                .ok_or(ErrorType::INVALID_PARAM)?;
            let mut read = 0;
            for (start, len) in rows {
                let src = data.get(read..read + len).ok_or(ErrorType::INVALID_PARAM)?;
                image.data[start..start + len].copy_from_slice(src);
                read += len;
            }
            Ok(())
        });
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
        let mut inner = self.lock();
        if !inner.op("ilTexImage") {
            return false;
        }
        let Ok(bytes) = bytes_per_component(DataType(ty)) else {
            return inner.fail(ErrorType::INVALID_ENUM);
        };
        if width == 0 || height == 0 || depth == 0 || bpp == 0 {
            return inner.fail(ErrorType::INVALID_PARAM);
        }
        let pixels = width as usize * height as usize * depth as usize;
        let len = pixels * usize::from(bpp) * bytes as usize;
        let pixels = match data {
            Some(data) if data.len() >= len => data[..len].to_vec(),
            Some(_) => return inner.fail(ErrorType::INVALID_PARAM),
            None => vec![0; len],
        };
        let image = FakeImage::new(width, height, depth, format, ty, pixels);
        inner.replace_current(image);
        true
    }

    fn il_tex_image_dxtc(
        &mut self,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        data: &[u8],
    ) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilTexImageDxtc") {
            return false;
        }
        let (Ok(w), Ok(h), Ok(d)) = (
            u32::try_from(width),
            u32::try_from(height),
            u32::try_from(depth),
        ) else {
            return inner.fail(ErrorType::INVALID_PARAM);
        };
        let pixels = vec![0; w as usize * h as usize * d as usize * 4];
        let mut image = FakeImage::new(w, h, d, sys::IL_RGBA, sys::IL_UNSIGNED_BYTE, pixels);
        match dxtc_len(&image, format) {
            Some(len) if len == data.len() => {
                image.dxtc = Some((format, data.to_vec()));
                inner.replace_current(image);
                true
            }
            Some(_) => inner.fail(ErrorType::INVALID_PARAM),
            None => inner.fail(ErrorType::INVALID_ENUM),
        }
    }

    fn il_set_data(&mut self, data: &[u8]) -> bool {
        let mut inner = self.lock();
        inner.op("ilSetData")
            && inner.with_current(|image| {
                if image.data.len() != data.len() {
                    return Err(ErrorType::INVALID_PARAM);
                }
                image.data.copy_from_slice(data);
                Ok(())
            })
    }

    fn il_get_data(&mut self) -> *mut u8 {
        let mut inner = self.lock();
        inner.record("ilGetData");
        match inner.current() {
            Some(image) if !image.data.is_empty() => image.data.as_mut_ptr(),
            _ => null_mut(),
        }
    }

    fn il_get_palette(&mut self) -> *mut u8 {
        let mut inner = self.lock();
        inner.record("ilGetPalette");
        match inner.current() {
            Some(image) if !image.palette.is_empty() => image.palette.as_mut_ptr(),
            _ => null_mut(),
        }
    }

    fn il_get_dxtc_data(&mut self, buffer: Option<&mut [u8]>, format: u32) -> u32 {
        let mut inner = self.lock();
        inner.record("ilGetDXTCData");
        let scripted = inner.transfer.is_some();
        if scripted {
            return inner.scripted_transfer(buffer).unwrap_or(0);
        }
        let blocks = match inner.current() {
            None => Err(ErrorType::ILLEGAL_OPERATION),
            Some(image) => match &image.dxtc {
                Some((stored, blocks)) if *stored == format => Ok(blocks.clone()),
                _ => dxtc_len(image, format)
                    .map(|len| vec![0; len])
                    .ok_or(ErrorType::INVALID_ENUM),
            },
        };
        let blocks = match blocks {
            Ok(blocks) => blocks,
            Err(code) => {
                inner.fail(code);
                return 0;
            }
        };
        match buffer {
            None => blocks.len() as u32,
            Some(buffer) if buffer.len() >= blocks.len() => {
                buffer[..blocks.len()].copy_from_slice(&blocks);
                blocks.len() as u32
            }
            Some(_) => 0,
        }
    }

    fn il_save_l(&mut self, _ty: u32, buffer: Option<&mut [u8]>) -> u32 {
        let mut inner = self.lock();
        inner.record("ilSaveL");
        let scripted = inner.transfer.is_some();
        if scripted {
            return inner.scripted_transfer(buffer).unwrap_or(0);
        }
        let Some(encoded) = inner.current().map(|image| image.encode()) else {
            inner.fail(ErrorType::ILLEGAL_OPERATION);
            return 0;
        };
        match buffer {
            None => encoded.len() as u32,
            Some(buffer) if buffer.len() >= encoded.len() => {
                buffer[..encoded.len()].copy_from_slice(&encoded);
                encoded.len() as u32
            }
            Some(_) => 0,
        }
    }

    fn il_load(&mut self, _ty: u32, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        inner.op("ilLoad") && inner.load_file(file_name)
    }

    fn il_load_image(&mut self, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        inner.op("ilLoadImage") && inner.load_file(file_name)
    }

    fn il_load_l(&mut self, _ty: u32, lump: &[u8]) -> bool {
        let mut inner = self.lock();
        inner.op("ilLoadL") && inner.load_bytes(lump)
    }

    fn il_save(&mut self, ty: u32, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilSave") {
            return false;
        }
        if ty == sys::IL_TYPE_UNKNOWN {
            return inner.fail(ErrorType::INVALID_ENUM);
        }
        inner.save_file(file_name)
    }

    fn il_save_image(&mut self, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilSaveImage") {
            return false;
        }
        if extension_type(file_name) == sys::IL_TYPE_UNKNOWN {
            return inner.fail(ErrorType::INVALID_EXTENSION);
        }
        inner.save_file(file_name)
    }

    fn il_load_data(
        &mut self,
        file_name: &CStr,
        width: u32,
        height: u32,
        depth: u32,
        bpp: u8,
    ) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilLoadData") {
            return false;
        }
        match fs::read(&*file_name.to_string_lossy()) {
            Ok(bytes) => load_raw(&mut inner, &bytes, width, height, depth, bpp),
            Err(_) => inner.fail(ErrorType::COULD_NOT_OPEN_FILE),
        }
    }

    fn il_load_data_l(
        &mut self,
        lump: &[u8],
        width: u32,
        height: u32,
        depth: u32,
        bpp: u8,
    ) -> bool {
        let mut inner = self.lock();
        inner.op("ilLoadDataL") && load_raw(&mut inner, lump, width, height, depth, bpp)
    }

    fn il_save_data(&mut self, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilSaveData") {
            return false;
        }
        let Some(data) = inner.current().map(|image| image.data.clone()) else {
            return inner.fail(ErrorType::ILLEGAL_OPERATION);
        };
        fs::write(&*file_name.to_string_lossy(), data).is_ok()
            || inner.fail(ErrorType::FILE_IO_ERROR)
    }

    fn il_load_pal(&mut self, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilLoadPal") {
            return false;
        }
        match fs::read(&*file_name.to_string_lossy()) {
            Ok(mut bytes) => inner.with_current(|image| {
                bytes.truncate(bytes.len() / 3 * 3);
                image.palette_type = sys::IL_PAL_RGB24;
                image.palette = bytes;
                Ok(())
            }),
            Err(_) => inner.fail(ErrorType::COULD_NOT_OPEN_FILE),
        }
    }

    fn il_save_pal(&mut self, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        if !inner.op("ilSavePal") {
            return false;
        }
        let palette = match inner.current() {
            Some(image) if !image.palette.is_empty() => image.palette.clone(),
            _ => return inner.fail(ErrorType::ILLEGAL_OPERATION),
        };
        fs::write(&*file_name.to_string_lossy(), palette).is_ok()
            || inner.fail(ErrorType::FILE_IO_ERROR)
    }

    fn il_apply_pal(&mut self, file_name: &CStr) -> bool {
        let mut inner = self.lock();
        inner.op("ilApplyPal")
            && (Path::new(&*file_name.to_string_lossy()).exists()
                || inner.fail(ErrorType::COULD_NOT_OPEN_FILE))
    }

    fn il_determine_type(&mut self, file_name: &CStr) -> u32 {
        let mut inner = self.lock();
        inner.record("ilDetermineType");
        match fs::read(&*file_name.to_string_lossy()) {
            Ok(bytes) if FakeImage::decode(&bytes).is_some() => sys::IL_RAW,
            _ => sys::IL_TYPE_UNKNOWN,
        }
    }

    fn il_determine_type_l(&mut self, lump: &[u8]) -> u32 {
        self.lock().record("ilDetermineTypeL");
        if FakeImage::decode(lump).is_some() {
            sys::IL_RAW
        } else {
            sys::IL_TYPE_UNKNOWN
        }
    }

    fn il_type_from_ext(&mut self, file_name: &CStr) -> u32 {
        self.lock().record("ilTypeFromExt");
        extension_type(file_name)
    }

    fn il_is_valid(&mut self, _ty: u32, file_name: &CStr) -> bool {
        self.lock().record("ilIsValid");
        fs::read(&*file_name.to_string_lossy())
            .map(|bytes| FakeImage::decode(&bytes).is_some())
            .unwrap_or(false)
    }

    fn il_is_valid_l(&mut self, _ty: u32, lump: &[u8]) -> bool {
        self.lock().record("ilIsValidL");
        FakeImage::decode(lump).is_some()
    }

    fn il_convert_image(&mut self, format: u32, ty: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilConvertImage")
            && inner.with_current(|image| {
                if image.format == format && image.ty == ty {
                    return Ok(());
                }
                if image.ty != ty || ty != sys::IL_UNSIGNED_BYTE {
                    return Err(ErrorType::INVALID_CONVERSION);
                }
                image.data = convert_pixels(&image.data, image.format, format)
                    .ok_or(ErrorType::INVALID_CONVERSION)?;
                image.format = format;
                Ok(())
            })
    }

    fn il_convert_pal(&mut self, format: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilConvertPal")
            && inner.with_current(|image| {
                if image.palette_type == sys::IL_PAL_NONE {
                    return Err(ErrorType::ILLEGAL_OPERATION);
                }
                if PaletteType(format).name().is_none() {
                    return Err(ErrorType::INVALID_ENUM);
                }
                Ok(())
            })
    }

    fn il_clear_image(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("ilClearImage")
            && inner.with_current(|image| {
                image.data.fill(0);
                Ok(())
            })
    }

    fn il_clamp_ntsc(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("ilClampNTSC") && inner.with_current(|_| Ok(()))
    }

    fn il_set_alpha(&mut self, _alpha: f64) -> bool {
        let mut inner = self.lock();
        inner.op("ilSetAlpha") && inner.with_current(|_| Ok(()))
    }

    fn il_mod_alpha(&mut self, _alpha: f64) {
        self.lock().record("ilModAlpha");
    }

    fn il_set_duration(&mut self, duration: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilSetDuration")
            && inner.with_current(|image| {
                image.duration = duration;
                Ok(())
            })
    }

    fn il_image_to_dxtc_data(&mut self, format: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilImageToDxtcData") && compress(&mut inner, format)
    }

    fn il_surface_to_dxtc_data(&mut self, format: u32) -> bool {
        let mut inner = self.lock();
        inner.op("ilSurfaceToDxtcData") && compress(&mut inner, format)
    }

    fn il_dxtc_data_to_image(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("ilDxtcDataToImage") && inner.with_current(has_dxtc)
    }

    fn il_dxtc_data_to_surface(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("ilDxtcDataToSurface") && inner.with_current(has_dxtc)
    }

    fn il_flip_surface_dxtc_data(&mut self) {
        self.lock().record("ilFlipSurfaceDxtcData");
    }

    fn il_invert_surface_dxtc_data_alpha(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("ilInvertSurfaceDxtcDataAlpha") && inner.with_current(has_dxtc)
    }

    fn ilu_get_integer(&mut self, mode: u32) -> i32 {
        let mut inner = self.lock();
        inner.record("iluGetInteger");
        if mode == sys::ILU_VERSION_NUM {
            return 180;
        }
        inner.utility.get(&mode).map_or(0, |value| *value as i32)
    }

    fn ilu_get_string(&mut self, name: u32) -> *const c_char {
        let mut inner = self.lock();
        inner.record("iluGetString");
        inner
            .utility_strings
            .get(&name)
            .map_or(null(), |value| value.as_ptr())
    }

    fn ilu_error_string(&mut self, error: u32) -> *const c_char {
        let mut inner = self.lock();
        inner.record("iluErrorString");
        let text = match ErrorType(error).name() {
            Some(name) => name.to_ascii_lowercase().replace('_', " "),
            None => "unknown error".to_owned(),
        };
        let entry = inner
            .error_strings
            .entry(error)
            .or_insert_with(|| CString::new(text).unwrap_or_default());
        entry.as_ptr()
    }

    fn ilu_image_parameter(&mut self, name: u32, value: u32) {
        let mut inner = self.lock();
        inner.record("iluImageParameter");
        inner.utility.insert(name, value);
    }

    fn ilu_set_language(&mut self, language: u32) -> bool {
        let mut inner = self.lock();
        inner.op("iluSetLanguage")
            && (Language(language).name().is_some() || inner.fail(ErrorType::INVALID_ENUM))
    }

    fn ilu_alienify(&mut self) -> bool {
        self.utility_filter("iluAlienify")
    }

    fn ilu_blur_avg(&mut self, _iterations: u32) -> bool {
        self.utility_filter("iluBlurAvg")
    }

    fn ilu_blur_gaussian(&mut self, _iterations: u32) -> bool {
        self.utility_filter("iluBlurGaussian")
    }

    fn ilu_build_mipmaps(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("iluBuildMipmaps")
            && inner.with_current(|image| {
                image.mipmaps = image.width.max(image.height).max(1).ilog2();
                Ok(())
            })
    }

    fn ilu_colours_used(&mut self) -> u32 {
        let mut inner = self.lock();
        inner.record("iluColoursUsed");
        match inner.current() {
            Some(image) => {
                let bpp = image.bytes_per_pixel().max(1);
                let colours: HashSet<&[u8]> = image.data.chunks_exact(bpp).collect();
                colours.len() as u32
            }
            None => 0,
        }
    }

    fn ilu_compare_image(&mut self, other: u32) -> bool {
        let mut inner = self.lock();
        inner.record("iluCompareImage");
        match (inner.images.get(&inner.bound), inner.images.get(&other)) {
            (Some(a), Some(b)) => {
                let layout = |i: &FakeImage| (i.width, i.height, i.depth, i.format, i.ty);
                layout(a) == layout(b) && a.data == b.data
            }
            _ => false,
        }
    }

    fn ilu_contrast(&mut self, _contrast: f32) -> bool {
        self.utility_filter("iluContrast")
    }

    fn ilu_convolution(&mut self, _matrix: &[i32; 9], _scale: i32, _bias: i32) -> bool {
        self.utility_filter("iluConvolution")
    }

    fn ilu_crop(&mut self, x: u32, y: u32, z: u32, width: u32, height: u32, depth: u32) -> bool {
        let mut inner = self.lock();
        inner.op("iluCrop")
            && inner.with_current(|image| {
                let rows = image
                    .rows(x, y, z, width, height, depth)
                    .ok_or(ErrorType::INVALID_PARAM)?;
                let data = rows
                    .into_iter()
                    .flat_map(|(start, len)| image.data[start..start + len].to_vec())
                    .collect();
                image.width = width;
                image.height = height;
                image.depth = depth;
                image.data = data;
                Ok(())
            })
    }

    fn ilu_edge_detect_e(&mut self) -> bool {
        self.utility_filter("iluEdgeDetectE")
    }

    fn ilu_edge_detect_p(&mut self) -> bool {
        self.utility_filter("iluEdgeDetectP")
    }

    fn ilu_edge_detect_s(&mut self) -> bool {
        self.utility_filter("iluEdgeDetectS")
    }

    fn ilu_emboss(&mut self) -> bool {
        self.utility_filter("iluEmboss")
    }

    fn ilu_enlarge_canvas(&mut self, width: u32, height: u32, depth: u32) -> bool {
        let mut inner = self.lock();
        inner.op("iluEnlargeCanvas")
            && inner.with_current(|image| {
                if width < image.width || height < image.height || depth < image.depth {
                    return Err(ErrorType::INVALID_PARAM);
                }
                let mut canvas =
                    FakeImage::new(width, height, depth, image.format, image.ty, Vec::new());
                canvas.data = vec![
                    0;
                    canvas.bytes_per_pixel()
                        * width as usize
                        * height as usize
                        * depth as usize
                ];
                let rows = canvas
                    .rows(0, 0, 0, image.width, image.height, image.depth)
                    .ok_or(ErrorType::INTERNAL_ERROR)?;
                let row_len = image.width as usize * image.bytes_per_pixel();
                for (i, (start, len)) in rows.into_iter().enumerate() {
                    canvas.data[start..start + len]
                        .copy_from_slice(&image.data[i * row_len..i * row_len + len]);
                }
                image.width = width;
                image.height = height;
                image.depth = depth;
                image.data = canvas.data;
                Ok(())
            })
    }

    fn ilu_enlarge_image(&mut self, x: f32, y: f32, z: f32) -> bool {
        let (width, height, depth) = {
            let mut inner = self.lock();
            match inner.current() {
                Some(image) => (
                    (image.width as f32 * x) as u32,
                    (image.height as f32 * y) as u32,
                    (image.depth as f32 * z) as u32,
                ),
                None => (0, 0, 0),
            }
        };
        self.lock().record("iluEnlargeImage");
        self.scale_current(width, height, depth)
    }

    fn ilu_equalize(&mut self) -> bool {
        self.utility_filter("iluEqualize")
    }

    fn ilu_flip_image(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("iluFlipImage")
            && inner.with_current(|image| {
                let row = image.width as usize * image.bytes_per_pixel();
                let plane = row * image.height as usize;
                let mut flipped = Vec::with_capacity(image.data.len());
                for slice in image.data.chunks(plane.max(1)) {
                    for line in slice.chunks(row.max(1)).rev() {
                        flipped.extend_from_slice(line);
                    }
                }
                image.data = flipped;
                Ok(())
            })
    }

    fn ilu_gamma_correct(&mut self, _gamma: f32) -> bool {
        self.utility_filter("iluGammaCorrect")
    }

    fn ilu_invert_alpha(&mut self) -> bool {
        self.utility_filter("iluInvertAlpha")
    }

    fn ilu_mirror(&mut self) -> bool {
        let mut inner = self.lock();
        inner.op("iluMirror")
            && inner.with_current(|image| {
                let bpp = image.bytes_per_pixel().max(1);
                let row = image.width as usize * bpp;
                let mut mirrored = Vec::with_capacity(image.data.len());
                for line in image.data.chunks(row.max(1)) {
                    for pixel in line.chunks(bpp).rev() {
                        mirrored.extend_from_slice(pixel);
                    }
                }
                image.data = mirrored;
                Ok(())
            })
    }

    fn ilu_negative(&mut self) -> bool {
        self.utility_filter("iluNegative")
    }

    fn ilu_noisify(&mut self, tolerance: f32) -> bool {
        let mut inner = self.lock();
        inner.op("iluNoisify")
            && ((0.0..=1.0).contains(&tolerance) || inner.fail(ErrorType::INVALID_PARAM))
    }

    fn ilu_pixelize(&mut self, _size: u32) -> bool {
        self.utility_filter("iluPixelize")
    }

    fn ilu_region_f(&mut self, _points: &[ILpointf]) {
        self.lock().record("iluRegionfv");
    }

    fn ilu_region_i(&mut self, _points: &[ILpointi]) {
        self.lock().record("iluRegioniv");
    }

    fn ilu_replace_colour(&mut self, _red: u8, _green: u8, _blue: u8, _tolerance: f32) -> bool {
        self.utility_filter("iluReplaceColour")
    }

    fn ilu_rotate(&mut self, _angle: f32) -> bool {
        self.utility_filter("iluRotate")
    }

    fn ilu_rotate_3d(&mut self, _x: f32, _y: f32, _z: f32, _angle: f32) -> bool {
        self.utility_filter("iluRotate3D")
    }

    fn ilu_saturate_1f(&mut self, _saturation: f32) -> bool {
        self.utility_filter("iluSaturate1f")
    }

    fn ilu_saturate_4f(&mut self, _r: f32, _g: f32, _b: f32, _saturation: f32) -> bool {
        self.utility_filter("iluSaturate4f")
    }

    fn ilu_scale(&mut self, width: u32, height: u32, depth: u32) -> bool {
        self.lock().record("iluScale");
        self.scale_current(width, height, depth)
    }

    fn ilu_scale_alpha(&mut self, _scale: f32) -> bool {
        self.utility_filter("iluScaleAlpha")
    }

    fn ilu_scale_colours(&mut self, _r: f32, _g: f32, _b: f32) -> bool {
        self.utility_filter("iluScaleColours")
    }

    fn ilu_sharpen(&mut self, _factor: f32, _iterations: u32) -> bool {
        self.utility_filter("iluSharpen")
    }

    fn ilu_swap_colours(&mut self) -> bool {
        self.utility_filter("iluSwapColours")
    }

    fn ilu_wave(&mut self, _angle: f32) -> bool {
        self.utility_filter("iluWave")
    }
}

impl FakeEngine {
    /// A filter that is recorded and succeeds whenever an image is bound.
    fn utility_filter(&mut self, name: &'static str) -> bool {
        let mut inner = self.lock();
        inner.op(name) && inner.with_current(|_| Ok(()))
    }

    /// Nearest-neighbour resize of the bound image.
    fn scale_current(&mut self, width: u32, height: u32, depth: u32) -> bool {
        let mut inner = self.lock();
        if let Some(code) = inner.fail_next.take() {
            return inner.fail(code);
        }
        inner.with_current(|image| {
            if width == 0 || height == 0 || depth == 0 {
                return Err(ErrorType::INVALID_PARAM);
            }
            let bpp = image.bytes_per_pixel();
            let mut data =
                Vec::with_capacity(bpp * width as usize * height as usize * depth as usize);
            for z in 0..depth {
                let sz = (z * image.depth / depth) as usize;
                for y in 0..height {
                    let sy = (y * image.height / height) as usize;
                    for x in 0..width {
                        let sx = (x * image.width / width) as usize;
                        let row = sz * image.height as usize + sy;
                        let start = (row * image.width as usize + sx) * bpp;
                        data.extend_from_slice(&image.data[start..start + bpp]);
                    }
                }
            }
            image.width = width;
            image.height = height;
            image.depth = depth;
            image.data = data;
            Ok(())
        })
    }
}

fn load_raw(
    inner: &mut Inner,
    bytes: &[u8],
    width: u32,
    height: u32,
    depth: u32,
    bpp: u8,
) -> bool {
    let format = match bpp {
        1 => sys::IL_LUMINANCE,
        3 => sys::IL_RGB,
        4 => sys::IL_RGBA,
        _ => return inner.fail(ErrorType::INVALID_PARAM),
    };
    let len = width as usize * height as usize * depth as usize * usize::from(bpp);
    if len == 0 || bytes.len() < len {
        return inner.fail(ErrorType::INVALID_PARAM);
    }
    let image = FakeImage::new(
        width,
        height,
        depth,
        format,
        sys::IL_UNSIGNED_BYTE,
        bytes[..len].to_vec(),
    );
    inner.replace_current(image);
    true
}

fn compress(inner: &mut Inner, format: u32) -> bool {
    inner.with_current(|image| {
        let len = dxtc_len(image, format).ok_or(ErrorType::INVALID_ENUM)?;
        image.dxtc = Some((format, vec![0; len]));
        Ok(())
    })
}

fn has_dxtc(image: &mut FakeImage) -> Result<(), ErrorType> {
    if image.dxtc.is_some() {
        Ok(())
    } else {
        Err(ErrorType::ILLEGAL_OPERATION)
    }
}
