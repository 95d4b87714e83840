// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Raw bindings to the DevIL core (`IL`) and utility (`ILU`) libraries.
//!
//! Both libraries are opened at runtime with `libloading`; nothing is linked
//! at build time. [`IL`] and [`ILU`] hold the library handle together with
//! every resolved entry point, and every method forwards verbatim to the
//! native function. All methods are `unsafe`: the caller is responsible for
//! pointer validity, buffer sizing and the engine's single-threaded contract.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

use libc::{c_char, c_double, c_float, c_int, c_uchar, c_uint, c_void, size_t};

pub type ILenum = c_uint;
pub type ILboolean = c_uchar;
pub type ILbitfield = c_uint;
pub type ILbyte = c_char;
pub type ILubyte = c_uchar;
pub type ILint = c_int;
pub type ILuint = c_uint;
pub type ILsizei = size_t;
pub type ILfloat = c_float;
pub type ILclampf = c_float;
pub type ILdouble = c_double;
pub type ILconst_string = *const c_char;

pub const IL_FALSE: ILboolean = 0;
pub const IL_TRUE: ILboolean = 1;

/// Point with float coordinates, as consumed by `iluRegionfv`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ILpointf {
    pub x: ILfloat,
    pub y: ILfloat,
}

/// Point with integer coordinates, as consumed by `iluRegioniv`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ILpointi {
    pub x: ILint,
    pub y: ILint,
}

// Data formats
pub const IL_COLOUR_INDEX: ILenum = 0x1900;
pub const IL_ALPHA: ILenum = 0x1906;
pub const IL_RGB: ILenum = 0x1907;
pub const IL_RGBA: ILenum = 0x1908;
pub const IL_LUMINANCE: ILenum = 0x1909;
pub const IL_LUMINANCE_ALPHA: ILenum = 0x190A;
pub const IL_BGR: ILenum = 0x80E0;
pub const IL_BGRA: ILenum = 0x80E1;

// Data types
pub const IL_BYTE: ILenum = 0x1400;
pub const IL_UNSIGNED_BYTE: ILenum = 0x1401;
pub const IL_SHORT: ILenum = 0x1402;
pub const IL_UNSIGNED_SHORT: ILenum = 0x1403;
pub const IL_INT: ILenum = 0x1404;
pub const IL_UNSIGNED_INT: ILenum = 0x1405;
pub const IL_FLOAT: ILenum = 0x1406;
pub const IL_DOUBLE: ILenum = 0x140A;
pub const IL_HALF: ILenum = 0x140B;

// Palette types
pub const IL_PAL_NONE: ILenum = 0x0400;
pub const IL_PAL_RGB24: ILenum = 0x0401;
pub const IL_PAL_RGB32: ILenum = 0x0402;
pub const IL_PAL_RGBA32: ILenum = 0x0403;
pub const IL_PAL_BGR24: ILenum = 0x0404;
pub const IL_PAL_BGR32: ILenum = 0x0405;
pub const IL_PAL_BGRA32: ILenum = 0x0406;

// Image (file) types
pub const IL_TYPE_UNKNOWN: ILenum = 0x0000;
pub const IL_BMP: ILenum = 0x0420;
pub const IL_CUT: ILenum = 0x0421;
pub const IL_DOOM: ILenum = 0x0422;
pub const IL_DOOM_FLAT: ILenum = 0x0423;
pub const IL_ICO: ILenum = 0x0424;
pub const IL_JPG: ILenum = 0x0425;
pub const IL_JFIF: ILenum = 0x0425;
pub const IL_ILBM: ILenum = 0x0426;
pub const IL_PCD: ILenum = 0x0427;
pub const IL_PCX: ILenum = 0x0428;
pub const IL_PIC: ILenum = 0x0429;
pub const IL_PNG: ILenum = 0x042A;
pub const IL_PNM: ILenum = 0x042B;
pub const IL_SGI: ILenum = 0x042C;
pub const IL_TGA: ILenum = 0x042D;
pub const IL_TIF: ILenum = 0x042E;
pub const IL_CHEAD: ILenum = 0x042F;
pub const IL_RAW: ILenum = 0x0430;
pub const IL_MDL: ILenum = 0x0431;
pub const IL_WAL: ILenum = 0x0432;
pub const IL_LIF: ILenum = 0x0434;
pub const IL_MNG: ILenum = 0x0435;
pub const IL_GIF: ILenum = 0x0436;
pub const IL_DDS: ILenum = 0x0437;
pub const IL_DCX: ILenum = 0x0438;
pub const IL_PSD: ILenum = 0x0439;
pub const IL_EXIF: ILenum = 0x043A;
pub const IL_PSP: ILenum = 0x043B;
pub const IL_PIX: ILenum = 0x043C;
pub const IL_PXR: ILenum = 0x043D;
pub const IL_XPM: ILenum = 0x043E;
pub const IL_HDR: ILenum = 0x043F;
pub const IL_ICNS: ILenum = 0x0440;
pub const IL_JP2: ILenum = 0x0441;
pub const IL_EXR: ILenum = 0x0442;
pub const IL_WDP: ILenum = 0x0443;
pub const IL_VTF: ILenum = 0x0444;
pub const IL_WBMP: ILenum = 0x0445;
pub const IL_SUN: ILenum = 0x0446;
pub const IL_IFF: ILenum = 0x0447;
pub const IL_TPL: ILenum = 0x0448;
pub const IL_FITS: ILenum = 0x0449;
pub const IL_DICOM: ILenum = 0x044A;
pub const IL_IWI: ILenum = 0x044B;
pub const IL_BLP: ILenum = 0x044C;
pub const IL_FTX: ILenum = 0x044D;
pub const IL_ROT: ILenum = 0x044E;
pub const IL_TEXTURE: ILenum = 0x044F;
pub const IL_DPX: ILenum = 0x0450;
pub const IL_UTX: ILenum = 0x0451;
pub const IL_MP3: ILenum = 0x0452;
pub const IL_JASC_PAL: ILenum = 0x0475;

// Error codes

/// Depth of the engine's error stack; older codes are dropped past it.
pub const IL_ERROR_STACK_SIZE: usize = 32;

pub const IL_NO_ERROR: ILenum = 0x0000;
pub const IL_INVALID_ENUM: ILenum = 0x0501;
pub const IL_OUT_OF_MEMORY: ILenum = 0x0502;
pub const IL_FORMAT_NOT_SUPPORTED: ILenum = 0x0503;
pub const IL_INTERNAL_ERROR: ILenum = 0x0504;
pub const IL_INVALID_VALUE: ILenum = 0x0505;
pub const IL_ILLEGAL_OPERATION: ILenum = 0x0506;
pub const IL_ILLEGAL_FILE_VALUE: ILenum = 0x0507;
pub const IL_INVALID_FILE_HEADER: ILenum = 0x0508;
pub const IL_INVALID_PARAM: ILenum = 0x0509;
pub const IL_COULD_NOT_OPEN_FILE: ILenum = 0x050A;
pub const IL_INVALID_EXTENSION: ILenum = 0x050B;
pub const IL_FILE_ALREADY_EXISTS: ILenum = 0x050C;
pub const IL_OUT_FORMAT_SAME: ILenum = 0x050D;
pub const IL_STACK_OVERFLOW: ILenum = 0x050E;
pub const IL_STACK_UNDERFLOW: ILenum = 0x050F;
pub const IL_INVALID_CONVERSION: ILenum = 0x0510;
pub const IL_BAD_DIMENSIONS: ILenum = 0x0511;
pub const IL_FILE_READ_ERROR: ILenum = 0x0512;
pub const IL_FILE_WRITE_ERROR: ILenum = 0x0512;
pub const IL_LIB_GIF_ERROR: ILenum = 0x05E1;
pub const IL_LIB_JPEG_ERROR: ILenum = 0x05E2;
pub const IL_LIB_PNG_ERROR: ILenum = 0x05E3;
pub const IL_LIB_TIFF_ERROR: ILenum = 0x05E4;
pub const IL_LIB_MNG_ERROR: ILenum = 0x05E5;
pub const IL_LIB_JP2_ERROR: ILenum = 0x05E6;
pub const IL_LIB_EXR_ERROR: ILenum = 0x05E7;
pub const IL_UNKNOWN_ERROR: ILenum = 0x05FF;

// Enable bits and their companion modes
pub const IL_ORIGIN_SET: ILenum = 0x0600;
pub const IL_ORIGIN_LOWER_LEFT: ILenum = 0x0601;
pub const IL_ORIGIN_UPPER_LEFT: ILenum = 0x0602;
pub const IL_ORIGIN_MODE: ILenum = 0x0603;
pub const IL_FORMAT_SET: ILenum = 0x0610;
pub const IL_FORMAT_MODE: ILenum = 0x0611;
pub const IL_TYPE_SET: ILenum = 0x0612;
pub const IL_TYPE_MODE: ILenum = 0x0613;
pub const IL_FILE_OVERWRITE: ILenum = 0x0620;
pub const IL_FILE_MODE: ILenum = 0x0621;
pub const IL_CONV_PAL: ILenum = 0x0630;
pub const IL_DEFAULT_ON_FAIL: ILenum = 0x0632;
pub const IL_USE_KEY_COLOUR: ILenum = 0x0635;
pub const IL_BLIT_BLEND: ILenum = 0x0636;
pub const IL_SAVE_INTERLACED: ILenum = 0x0639;
pub const IL_INTERLACE_MODE: ILenum = 0x063A;

// Quantization
pub const IL_QUANTIZATION_MODE: ILenum = 0x0640;
pub const IL_WU_QUANT: ILenum = 0x0641;
pub const IL_NEU_QUANT: ILenum = 0x0642;
pub const IL_NEU_QUANT_SAMPLE: ILenum = 0x0643;
pub const IL_MAX_QUANT_INDICES: ILenum = 0x0644;

// Hints
pub const IL_FASTEST: ILenum = 0x0660;
pub const IL_LESS_MEM: ILenum = 0x0661;
pub const IL_DONT_CARE: ILenum = 0x0662;
pub const IL_MEM_SPEED_HINT: ILenum = 0x0665;
pub const IL_USE_COMPRESSION: ILenum = 0x0666;
pub const IL_NO_COMPRESSION: ILenum = 0x0667;
pub const IL_COMPRESSION_HINT: ILenum = 0x0668;

pub const IL_NVIDIA_COMPRESS: ILenum = 0x0670;
pub const IL_SQUISH_COMPRESS: ILenum = 0x0671;

// Sub-image kinds
pub const IL_SUB_NEXT: ILenum = 0x0680;
pub const IL_SUB_MIPMAP: ILenum = 0x0681;
pub const IL_SUB_LAYER: ILenum = 0x0682;

// Compression algorithms
pub const IL_COMPRESS_MODE: ILenum = 0x0700;
pub const IL_COMPRESS_NONE: ILenum = 0x0701;
pub const IL_COMPRESS_RLE: ILenum = 0x0702;
pub const IL_COMPRESS_LZO: ILenum = 0x0703;
pub const IL_COMPRESS_ZLIB: ILenum = 0x0704;

// DXTC
pub const IL_DXTC_FORMAT: ILenum = 0x0705;
pub const IL_DXT1: ILenum = 0x0706;
pub const IL_DXT2: ILenum = 0x0707;
pub const IL_DXT3: ILenum = 0x0708;
pub const IL_DXT4: ILenum = 0x0709;
pub const IL_DXT5: ILenum = 0x070A;
pub const IL_DXT_NO_COMP: ILenum = 0x070B;
pub const IL_KEEP_DXTC_DATA: ILenum = 0x070C;
pub const IL_DXTC_DATA_FORMAT: ILenum = 0x070D;
pub const IL_3DC: ILenum = 0x070E;
pub const IL_RXGB: ILenum = 0x070F;
pub const IL_ATI1N: ILenum = 0x0710;
pub const IL_DXT1A: ILenum = 0x0711;

// Format-specific save settings
pub const IL_TGA_CREATE_STAMP: ILenum = 0x0710;
pub const IL_JPG_QUALITY: ILenum = 0x0711;
pub const IL_PNG_INTERLACE: ILenum = 0x0712;
pub const IL_TGA_RLE: ILenum = 0x0713;
pub const IL_BMP_RLE: ILenum = 0x0714;
pub const IL_SGI_RLE: ILenum = 0x0715;
pub const IL_TGA_ID_STRING: ILenum = 0x0717;
pub const IL_TGA_AUTHNAME_STRING: ILenum = 0x0718;
pub const IL_TGA_AUTHCOMMENT_STRING: ILenum = 0x0719;
pub const IL_PNG_AUTHNAME_STRING: ILenum = 0x071A;
pub const IL_PNG_TITLE_STRING: ILenum = 0x071B;
pub const IL_PNG_DESCRIPTION_STRING: ILenum = 0x071C;
pub const IL_TIF_DESCRIPTION_STRING: ILenum = 0x071D;
pub const IL_TIF_HOSTCOMPUTER_STRING: ILenum = 0x071E;
pub const IL_TIF_DOCUMENTNAME_STRING: ILenum = 0x071F;
pub const IL_TIF_AUTHNAME_STRING: ILenum = 0x0720;
pub const IL_JPG_SAVE_FORMAT: ILenum = 0x0721;
pub const IL_CHEAD_HEADER_STRING: ILenum = 0x0722;
pub const IL_PCD_PICNUM: ILenum = 0x0723;
pub const IL_PNG_ALPHA_INDEX: ILenum = 0x0724;
pub const IL_JPG_PROGRESSIVE: ILenum = 0x0725;
pub const IL_VTF_COMP: ILenum = 0x0726;

// Cube map faces
pub const IL_CUBEMAP_POSITIVEX: ILenum = 0x0000_0400;
pub const IL_CUBEMAP_NEGATIVEX: ILenum = 0x0000_0800;
pub const IL_CUBEMAP_POSITIVEY: ILenum = 0x0000_1000;
pub const IL_CUBEMAP_NEGATIVEY: ILenum = 0x0000_2000;
pub const IL_CUBEMAP_POSITIVEZ: ILenum = 0x0000_4000;
pub const IL_CUBEMAP_NEGATIVEZ: ILenum = 0x0000_8000;
pub const IL_SPHEREMAP: ILenum = 0x0001_0000;

// Integer / string query keys
pub const IL_VERSION_NUM: ILenum = 0x0DE2;
pub const IL_IMAGE_WIDTH: ILenum = 0x0DE4;
pub const IL_IMAGE_HEIGHT: ILenum = 0x0DE5;
pub const IL_IMAGE_DEPTH: ILenum = 0x0DE6;
pub const IL_IMAGE_SIZE_OF_DATA: ILenum = 0x0DE7;
pub const IL_IMAGE_BYTES_PER_PIXEL: ILenum = 0x0DE8;
pub const IL_IMAGE_BITS_PER_PIXEL: ILenum = 0x0DE9;
pub const IL_IMAGE_FORMAT: ILenum = 0x0DEA;
pub const IL_IMAGE_TYPE: ILenum = 0x0DEB;
pub const IL_PALETTE_TYPE: ILenum = 0x0DEC;
pub const IL_PALETTE_SIZE: ILenum = 0x0DED;
pub const IL_PALETTE_BPP: ILenum = 0x0DEE;
pub const IL_PALETTE_NUM_COLS: ILenum = 0x0DEF;
pub const IL_PALETTE_BASE_TYPE: ILenum = 0x0DF0;
pub const IL_NUM_FACES: ILenum = 0x0DE1;
pub const IL_NUM_IMAGES: ILenum = 0x0DF1;
pub const IL_NUM_MIPMAPS: ILenum = 0x0DF2;
pub const IL_NUM_LAYERS: ILenum = 0x0DF3;
pub const IL_ACTIVE_IMAGE: ILenum = 0x0DF4;
pub const IL_ACTIVE_MIPMAP: ILenum = 0x0DF5;
pub const IL_ACTIVE_LAYER: ILenum = 0x0DF6;
pub const IL_ACTIVE_FACE: ILenum = 0x0E00;
pub const IL_CUR_IMAGE: ILenum = 0x0DF7;
pub const IL_IMAGE_DURATION: ILenum = 0x0DF8;
pub const IL_IMAGE_PLANESIZE: ILenum = 0x0DF9;
pub const IL_IMAGE_BPC: ILenum = 0x0DFA;
pub const IL_IMAGE_OFFX: ILenum = 0x0DFB;
pub const IL_IMAGE_OFFY: ILenum = 0x0DFC;
pub const IL_IMAGE_CUBEFLAGS: ILenum = 0x0DFD;
pub const IL_IMAGE_ORIGIN: ILenum = 0x0DFE;
pub const IL_IMAGE_CHANNELS: ILenum = 0x0DFF;

pub const IL_VENDOR: ILenum = 0x1F00;
pub const IL_LOAD_EXT: ILenum = 0x1F01;
pub const IL_SAVE_EXT: ILenum = 0x1F02;

// Attribute stack bits
pub const IL_ORIGIN_BIT: ILbitfield = 0x0000_0001;
pub const IL_FILE_BIT: ILbitfield = 0x0000_0002;
pub const IL_PAL_BIT: ILbitfield = 0x0000_0004;
pub const IL_FORMAT_BIT: ILbitfield = 0x0000_0008;
pub const IL_TYPE_BIT: ILbitfield = 0x0000_0010;
pub const IL_COMPRESS_BIT: ILbitfield = 0x0000_0020;
pub const IL_LOADFAIL_BIT: ILbitfield = 0x0000_0040;
pub const IL_FORMAT_SPECIFIC_BIT: ILbitfield = 0x0000_0080;
pub const IL_ALL_ATTRIB_BITS: ILbitfield = 0x000F_FFFF;

// Utility subsystem parameters
pub const ILU_FILTER: ILenum = 0x2600;
pub const ILU_NEAREST: ILenum = 0x2601;
pub const ILU_LINEAR: ILenum = 0x2602;
pub const ILU_BILINEAR: ILenum = 0x2603;
pub const ILU_SCALE_BOX: ILenum = 0x2604;
pub const ILU_SCALE_TRIANGLE: ILenum = 0x2605;
pub const ILU_SCALE_BELL: ILenum = 0x2606;
pub const ILU_SCALE_BSPLINE: ILenum = 0x2607;
pub const ILU_SCALE_LANCZOS3: ILenum = 0x2608;
pub const ILU_SCALE_MITCHELL: ILenum = 0x2609;

pub const ILU_PLACEMENT: ILenum = 0x0700;
pub const ILU_LOWER_LEFT: ILenum = 0x0701;
pub const ILU_LOWER_RIGHT: ILenum = 0x0702;
pub const ILU_UPPER_LEFT: ILenum = 0x0703;
pub const ILU_UPPER_RIGHT: ILenum = 0x0704;
pub const ILU_CENTER: ILenum = 0x0705;

pub const ILU_ENGLISH: ILenum = 0x0800;
pub const ILU_ARABIC: ILenum = 0x0801;
pub const ILU_DUTCH: ILenum = 0x0802;
pub const ILU_JAPANESE: ILenum = 0x0803;
pub const ILU_SPANISH: ILenum = 0x0804;
pub const ILU_GERMAN: ILenum = 0x0805;
pub const ILU_FRENCH: ILenum = 0x0806;
pub const ILU_ITALIAN: ILenum = 0x0807;

pub const ILU_VERSION_NUM: ILenum = IL_VERSION_NUM;
pub const ILU_VENDOR: ILenum = IL_VENDOR;

/// Declares a runtime-loaded entry point table.
///
/// Each entry resolves `symbol` from the library at load time; a missing
/// symbol fails the whole load so a partially bound table never exists.
macro_rules! dynamic_library {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                pub fn $func:ident = $symbol:literal ($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            #[allow(dead_code)]
            __library: ::libloading::Library,
            $(
                $func: unsafe extern "system" fn($($ty),*) $(-> $ret)?,
            )*
        }

        impl $name {
            /// Opens the shared library at `path` and resolves every entry point.
            pub unsafe fn new<P>(path: P) -> Result<Self, ::libloading::Error>
            where
                P: AsRef<::std::ffi::OsStr>,
            {
                let library = ::libloading::Library::new(path)?;
                Self::from_library(library)
            }

            /// Resolves every entry point from an already opened library.
            pub unsafe fn from_library<L>(library: L) -> Result<Self, ::libloading::Error>
            where
                L: Into<::libloading::Library>,
            {
                let __library = library.into();
                $(
                    let $func = *__library
                        .get::<unsafe extern "system" fn($($ty),*) $(-> $ret)?>($symbol.as_bytes())?;
                )*
                Ok(Self {
                    __library,
                    $($func,)*
                })
            }

            $(
                pub unsafe fn $func(&self, $($arg: $ty),*) $(-> $ret)? {
                    (self.$func)($($arg),*)
                }
            )*
        }
    };
}

dynamic_library! {
    /// Entry points of the core engine (`DevIL`/`libIL`).
    pub struct IL {
        pub fn ilActiveFace = "ilActiveFace"(number: ILuint) -> ILboolean;
        pub fn ilActiveImage = "ilActiveImage"(number: ILuint) -> ILboolean;
        pub fn ilActiveLayer = "ilActiveLayer"(number: ILuint) -> ILboolean;
        pub fn ilActiveMipmap = "ilActiveMipmap"(number: ILuint) -> ILboolean;
        pub fn ilApplyPal = "ilApplyPal"(file_name: ILconst_string) -> ILboolean;
        pub fn ilBindImage = "ilBindImage"(image: ILuint);
        pub fn ilBlit = "ilBlit"(
            source: ILuint,
            dest_x: ILint,
            dest_y: ILint,
            dest_z: ILint,
            src_x: ILuint,
            src_y: ILuint,
            src_z: ILuint,
            width: ILuint,
            height: ILuint,
            depth: ILuint,
        ) -> ILboolean;
        pub fn ilClampNTSC = "ilClampNTSC"() -> ILboolean;
        pub fn ilClearColour = "ilClearColour"(red: ILclampf, green: ILclampf, blue: ILclampf, alpha: ILclampf);
        pub fn ilClearImage = "ilClearImage"() -> ILboolean;
        pub fn ilCloneCurImage = "ilCloneCurImage"() -> ILuint;
        pub fn ilCompressFunc = "ilCompressFunc"(mode: ILenum) -> ILboolean;
        pub fn ilConvertImage = "ilConvertImage"(dest_format: ILenum, dest_type: ILenum) -> ILboolean;
        pub fn ilConvertPal = "ilConvertPal"(dest_format: ILenum) -> ILboolean;
        pub fn ilCopyImage = "ilCopyImage"(src: ILuint) -> ILboolean;
        pub fn ilCopyPixels = "ilCopyPixels"(
            x_off: ILuint,
            y_off: ILuint,
            z_off: ILuint,
            width: ILuint,
            height: ILuint,
            depth: ILuint,
            format: ILenum,
            ty: ILenum,
            data: *mut c_void,
        ) -> ILuint;
        pub fn ilCreateSubImage = "ilCreateSubImage"(ty: ILenum, num: ILuint) -> ILuint;
        pub fn ilDefaultImage = "ilDefaultImage"() -> ILboolean;
        pub fn ilDeleteImage = "ilDeleteImage"(num: ILuint);
        pub fn ilDeleteImages = "ilDeleteImages"(num: ILsizei, images: *const ILuint);
        pub fn ilDetermineType = "ilDetermineType"(file_name: ILconst_string) -> ILenum;
        pub fn ilDetermineTypeL = "ilDetermineTypeL"(lump: *const c_void, size: ILuint) -> ILenum;
        pub fn ilDisable = "ilDisable"(mode: ILenum) -> ILboolean;
        pub fn ilDxtcDataToImage = "ilDxtcDataToImage"() -> ILboolean;
        pub fn ilDxtcDataToSurface = "ilDxtcDataToSurface"() -> ILboolean;
        pub fn ilEnable = "ilEnable"(mode: ILenum) -> ILboolean;
        pub fn ilFlipSurfaceDxtcData = "ilFlipSurfaceDxtcData"();
        pub fn ilFormatFunc = "ilFormatFunc"(mode: ILenum) -> ILboolean;
        pub fn ilGenImages = "ilGenImages"(num: ILsizei, images: *mut ILuint);
        pub fn ilGenImage = "ilGenImage"() -> ILuint;
        pub fn ilGetData = "ilGetData"() -> *mut ILubyte;
        pub fn ilGetDXTCData = "ilGetDXTCData"(buffer: *mut c_void, buffer_size: ILuint, dxtc_format: ILenum) -> ILuint;
        pub fn ilGetError = "ilGetError"() -> ILenum;
        pub fn ilGetInteger = "ilGetInteger"(mode: ILenum) -> ILint;
        pub fn ilGetPalette = "ilGetPalette"() -> *mut ILubyte;
        pub fn ilGetString = "ilGetString"(string_name: ILenum) -> ILconst_string;
        pub fn ilHint = "ilHint"(target: ILenum, mode: ILenum);
        pub fn ilImageToDxtcData = "ilImageToDxtcData"(format: ILenum) -> ILboolean;
        pub fn ilInit = "ilInit"();
        pub fn ilInvertSurfaceDxtcDataAlpha = "ilInvertSurfaceDxtcDataAlpha"() -> ILboolean;
        pub fn ilIsDisabled = "ilIsDisabled"(mode: ILenum) -> ILboolean;
        pub fn ilIsEnabled = "ilIsEnabled"(mode: ILenum) -> ILboolean;
        pub fn ilIsImage = "ilIsImage"(image: ILuint) -> ILboolean;
        pub fn ilIsValid = "ilIsValid"(ty: ILenum, file_name: ILconst_string) -> ILboolean;
        pub fn ilIsValidL = "ilIsValidL"(ty: ILenum, lump: *const c_void, size: ILuint) -> ILboolean;
        pub fn ilKeyColour = "ilKeyColour"(red: ILclampf, green: ILclampf, blue: ILclampf, alpha: ILclampf);
        pub fn ilLoad = "ilLoad"(ty: ILenum, file_name: ILconst_string) -> ILboolean;
        pub fn ilLoadData = "ilLoadData"(
            file_name: ILconst_string,
            width: ILuint,
            height: ILuint,
            depth: ILuint,
            bpp: ILubyte,
        ) -> ILboolean;
        pub fn ilLoadDataL = "ilLoadDataL"(
            lump: *const c_void,
            size: ILuint,
            width: ILuint,
            height: ILuint,
            depth: ILuint,
            bpp: ILubyte,
        ) -> ILboolean;
        pub fn ilLoadImage = "ilLoadImage"(file_name: ILconst_string) -> ILboolean;
        pub fn ilLoadL = "ilLoadL"(ty: ILenum, lump: *const c_void, size: ILuint) -> ILboolean;
        pub fn ilLoadPal = "ilLoadPal"(file_name: ILconst_string) -> ILboolean;
        pub fn ilModAlpha = "ilModAlpha"(alpha_value: ILdouble);
        pub fn ilOriginFunc = "ilOriginFunc"(mode: ILenum) -> ILboolean;
        pub fn ilOverlayImage = "ilOverlayImage"(source: ILuint, x_coord: ILint, y_coord: ILint, z_coord: ILint) -> ILboolean;
        pub fn ilPopAttrib = "ilPopAttrib"();
        pub fn ilPushAttrib = "ilPushAttrib"(bits: ILuint);
        pub fn ilSave = "ilSave"(ty: ILenum, file_name: ILconst_string) -> ILboolean;
        pub fn ilSaveData = "ilSaveData"(file_name: ILconst_string) -> ILboolean;
        pub fn ilSaveImage = "ilSaveImage"(file_name: ILconst_string) -> ILboolean;
        pub fn ilSaveL = "ilSaveL"(ty: ILenum, lump: *mut c_void, size: ILuint) -> ILuint;
        pub fn ilSavePal = "ilSavePal"(file_name: ILconst_string) -> ILboolean;
        pub fn ilSetAlpha = "ilSetAlpha"(alpha_value: ILdouble) -> ILboolean;
        pub fn ilSetData = "ilSetData"(data: *mut c_void) -> ILboolean;
        pub fn ilSetDuration = "ilSetDuration"(duration: ILuint) -> ILboolean;
        pub fn ilSetInteger = "ilSetInteger"(mode: ILenum, param: ILint);
        pub fn ilSetPixels = "ilSetPixels"(
            x_off: ILint,
            y_off: ILint,
            z_off: ILint,
            width: ILuint,
            height: ILuint,
            depth: ILuint,
            format: ILenum,
            ty: ILenum,
            data: *mut c_void,
        );
        pub fn ilSetString = "ilSetString"(mode: ILenum, string: ILconst_string);
        pub fn ilShutDown = "ilShutDown"();
        pub fn ilSurfaceToDxtcData = "ilSurfaceToDxtcData"(format: ILenum) -> ILboolean;
        pub fn ilTexImage = "ilTexImage"(
            width: ILuint,
            height: ILuint,
            depth: ILuint,
            bpp: ILubyte,
            format: ILenum,
            ty: ILenum,
            data: *mut c_void,
        ) -> ILboolean;
        pub fn ilTexImageDxtc = "ilTexImageDxtc"(
            width: ILint,
            height: ILint,
            depth: ILint,
            dxt_format: ILenum,
            data: *const ILubyte,
        ) -> ILboolean;
        pub fn ilTypeFromExt = "ilTypeFromExt"(file_name: ILconst_string) -> ILenum;
        pub fn ilTypeFunc = "ilTypeFunc"(mode: ILenum) -> ILboolean;
    }
}

dynamic_library! {
    /// Entry points of the utility subsystem (`ILU`/`libILU`).
    pub struct ILU {
        pub fn iluAlienify = "iluAlienify"() -> ILboolean;
        pub fn iluBlurAvg = "iluBlurAvg"(iter: ILuint) -> ILboolean;
        pub fn iluBlurGaussian = "iluBlurGaussian"(iter: ILuint) -> ILboolean;
        pub fn iluBuildMipmaps = "iluBuildMipmaps"() -> ILboolean;
        pub fn iluColoursUsed = "iluColoursUsed"() -> ILuint;
        pub fn iluCompareImage = "iluCompareImage"(comp: ILuint) -> ILboolean;
        pub fn iluContrast = "iluContrast"(contrast: ILfloat) -> ILboolean;
        pub fn iluConvolution = "iluConvolution"(matrix: *mut ILint, scale: ILint, bias: ILint) -> ILboolean;
        pub fn iluCrop = "iluCrop"(
            x_off: ILuint,
            y_off: ILuint,
            z_off: ILuint,
            width: ILuint,
            height: ILuint,
            depth: ILuint,
        ) -> ILboolean;
        pub fn iluEdgeDetectE = "iluEdgeDetectE"() -> ILboolean;
        pub fn iluEdgeDetectP = "iluEdgeDetectP"() -> ILboolean;
        pub fn iluEdgeDetectS = "iluEdgeDetectS"() -> ILboolean;
        pub fn iluEmboss = "iluEmboss"() -> ILboolean;
        pub fn iluEnlargeCanvas = "iluEnlargeCanvas"(width: ILuint, height: ILuint, depth: ILuint) -> ILboolean;
        pub fn iluEnlargeImage = "iluEnlargeImage"(x_dim: ILfloat, y_dim: ILfloat, z_dim: ILfloat) -> ILboolean;
        pub fn iluEqualize = "iluEqualize"() -> ILboolean;
        pub fn iluErrorString = "iluErrorString"(error: ILenum) -> ILconst_string;
        pub fn iluFlipImage = "iluFlipImage"() -> ILboolean;
        pub fn iluGammaCorrect = "iluGammaCorrect"(gamma: ILfloat) -> ILboolean;
        pub fn iluGetInteger = "iluGetInteger"(mode: ILenum) -> ILint;
        pub fn iluGetString = "iluGetString"(string_name: ILenum) -> ILconst_string;
        pub fn iluImageParameter = "iluImageParameter"(p_name: ILenum, param: ILenum);
        pub fn iluInit = "iluInit"();
        pub fn iluInvertAlpha = "iluInvertAlpha"() -> ILboolean;
        pub fn iluMirror = "iluMirror"() -> ILboolean;
        pub fn iluNegative = "iluNegative"() -> ILboolean;
        pub fn iluNoisify = "iluNoisify"(tolerance: ILclampf) -> ILboolean;
        pub fn iluPixelize = "iluPixelize"(pix_size: ILuint) -> ILboolean;
        pub fn iluRegionfv = "iluRegionfv"(points: *mut ILpointf, n: ILuint);
        pub fn iluRegioniv = "iluRegioniv"(points: *mut ILpointi, n: ILuint);
        pub fn iluReplaceColour = "iluReplaceColour"(red: ILubyte, green: ILubyte, blue: ILubyte, tolerance: ILfloat) -> ILboolean;
        pub fn iluRotate = "iluRotate"(angle: ILfloat) -> ILboolean;
        pub fn iluRotate3D = "iluRotate3D"(x: ILfloat, y: ILfloat, z: ILfloat, angle: ILfloat) -> ILboolean;
        pub fn iluSaturate1f = "iluSaturate1f"(saturation: ILfloat) -> ILboolean;
        pub fn iluSaturate4f = "iluSaturate4f"(r: ILfloat, g: ILfloat, b: ILfloat, saturation: ILfloat) -> ILboolean;
        pub fn iluScale = "iluScale"(width: ILuint, height: ILuint, depth: ILuint) -> ILboolean;
        pub fn iluScaleAlpha = "iluScaleAlpha"(scale: ILfloat) -> ILboolean;
        pub fn iluScaleColours = "iluScaleColours"(r: ILfloat, g: ILfloat, b: ILfloat) -> ILboolean;
        pub fn iluSetLanguage = "iluSetLanguage"(language: ILenum) -> ILboolean;
        pub fn iluSharpen = "iluSharpen"(factor: ILfloat, iter: ILuint) -> ILboolean;
        pub fn iluSwapColours = "iluSwapColours"() -> ILboolean;
        pub fn iluWave = "iluWave"(angle: ILfloat) -> ILboolean;
    }
}
