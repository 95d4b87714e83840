// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Value tables for the engine's enumerations.
//!
//! Each table is a transparent newtype over the raw `ILenum` with named
//! constants for the documented values. Unknown values are carried through
//! unchanged since the engine is the authority on what it accepts.

use core::fmt;
use devil_sys as sys;

macro_rules! value_table {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            $($(#[$vmeta])* pub const $variant: Self = Self($value);)*

            /// Raw engine value.
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Name of the constant this value matches, if any.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some(stringify!($variant)),)*
                    _ => None,
                }
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "0x{:04X}", self.0),
                }
            }
        }
    };
}

value_table! {
    /// Pixel component layout.
    DataFormat {
        COLOUR_INDEX = sys::IL_COLOUR_INDEX,
        ALPHA = sys::IL_ALPHA,
        RGB = sys::IL_RGB,
        RGBA = sys::IL_RGBA,
        LUMINANCE = sys::IL_LUMINANCE,
        LUMINANCE_ALPHA = sys::IL_LUMINANCE_ALPHA,
        BGR = sys::IL_BGR,
        BGRA = sys::IL_BGRA,
    }
}

value_table! {
    /// Per-component storage type.
    DataType {
        BYTE = sys::IL_BYTE,
        UNSIGNED_BYTE = sys::IL_UNSIGNED_BYTE,
        SHORT = sys::IL_SHORT,
        UNSIGNED_SHORT = sys::IL_UNSIGNED_SHORT,
        INT = sys::IL_INT,
        UNSIGNED_INT = sys::IL_UNSIGNED_INT,
        FLOAT = sys::IL_FLOAT,
        DOUBLE = sys::IL_DOUBLE,
        HALF = sys::IL_HALF,
    }
}

value_table! {
    /// Palette entry layout.
    PaletteType {
        NONE = sys::IL_PAL_NONE,
        RGB24 = sys::IL_PAL_RGB24,
        RGB32 = sys::IL_PAL_RGB32,
        RGBA32 = sys::IL_PAL_RGBA32,
        BGR24 = sys::IL_PAL_BGR24,
        BGR32 = sys::IL_PAL_BGR32,
        BGRA32 = sys::IL_PAL_BGRA32,
    }
}

value_table! {
    /// Block compression formats.
    CompressedDataFormat {
        DXT1 = sys::IL_DXT1,
        DXT2 = sys::IL_DXT2,
        DXT3 = sys::IL_DXT3,
        DXT4 = sys::IL_DXT4,
        DXT5 = sys::IL_DXT5,
        NONE = sys::IL_DXT_NO_COMP,
        THREE_DC = sys::IL_3DC,
        RXGB = sys::IL_RXGB,
        ATI1N = sys::IL_ATI1N,
        DXT1A = sys::IL_DXT1A,
    }
}

value_table! {
    /// File container types understood by the codecs.
    ImageType {
        UNKNOWN = sys::IL_TYPE_UNKNOWN,
        BMP = sys::IL_BMP,
        CUT = sys::IL_CUT,
        DOOM = sys::IL_DOOM,
        DOOM_FLAT = sys::IL_DOOM_FLAT,
        ICO = sys::IL_ICO,
        JPG = sys::IL_JPG,
        ILBM = sys::IL_ILBM,
        PCD = sys::IL_PCD,
        PCX = sys::IL_PCX,
        PIC = sys::IL_PIC,
        PNG = sys::IL_PNG,
        PNM = sys::IL_PNM,
        SGI = sys::IL_SGI,
        TGA = sys::IL_TGA,
        TIF = sys::IL_TIF,
        CHEAD = sys::IL_CHEAD,
        RAW = sys::IL_RAW,
        MDL = sys::IL_MDL,
        WAL = sys::IL_WAL,
        LIF = sys::IL_LIF,
        MNG = sys::IL_MNG,
        GIF = sys::IL_GIF,
        DDS = sys::IL_DDS,
        DCX = sys::IL_DCX,
        PSD = sys::IL_PSD,
        EXIF = sys::IL_EXIF,
        PSP = sys::IL_PSP,
        PIX = sys::IL_PIX,
        PXR = sys::IL_PXR,
        XPM = sys::IL_XPM,
        HDR = sys::IL_HDR,
        ICNS = sys::IL_ICNS,
        JP2 = sys::IL_JP2,
        EXR = sys::IL_EXR,
        WDP = sys::IL_WDP,
        VTF = sys::IL_VTF,
        WBMP = sys::IL_WBMP,
        SUN = sys::IL_SUN,
        IFF = sys::IL_IFF,
        TPL = sys::IL_TPL,
        FITS = sys::IL_FITS,
        DICOM = sys::IL_DICOM,
        IWI = sys::IL_IWI,
        BLP = sys::IL_BLP,
        FTX = sys::IL_FTX,
        ROT = sys::IL_ROT,
        TEXTURE = sys::IL_TEXTURE,
        DPX = sys::IL_DPX,
        UTX = sys::IL_UTX,
        MP3 = sys::IL_MP3,
        JASC_PAL = sys::IL_JASC_PAL,
    }
}

value_table! {
    /// Values of the engine's last-error channel.
    ErrorType {
        NO_ERROR = sys::IL_NO_ERROR,
        INVALID_ENUM = sys::IL_INVALID_ENUM,
        OUT_OF_MEMORY = sys::IL_OUT_OF_MEMORY,
        FORMAT_NOT_SUPPORTED = sys::IL_FORMAT_NOT_SUPPORTED,
        INTERNAL_ERROR = sys::IL_INTERNAL_ERROR,
        INVALID_VALUE = sys::IL_INVALID_VALUE,
        ILLEGAL_OPERATION = sys::IL_ILLEGAL_OPERATION,
        ILLEGAL_FILE_VALUE = sys::IL_ILLEGAL_FILE_VALUE,
        INVALID_FILE_HEADER = sys::IL_INVALID_FILE_HEADER,
        INVALID_PARAM = sys::IL_INVALID_PARAM,
        COULD_NOT_OPEN_FILE = sys::IL_COULD_NOT_OPEN_FILE,
        INVALID_EXTENSION = sys::IL_INVALID_EXTENSION,
        FILE_ALREADY_EXISTS = sys::IL_FILE_ALREADY_EXISTS,
        OUT_FORMAT_SAME = sys::IL_OUT_FORMAT_SAME,
        STACK_OVERFLOW = sys::IL_STACK_OVERFLOW,
        STACK_UNDERFLOW = sys::IL_STACK_UNDERFLOW,
        INVALID_CONVERSION = sys::IL_INVALID_CONVERSION,
        BAD_DIMENSIONS = sys::IL_BAD_DIMENSIONS,
        /// Read and write failures share one code.
        FILE_IO_ERROR = sys::IL_FILE_READ_ERROR,
        LIB_GIF_ERROR = sys::IL_LIB_GIF_ERROR,
        LIB_JPEG_ERROR = sys::IL_LIB_JPEG_ERROR,
        LIB_PNG_ERROR = sys::IL_LIB_PNG_ERROR,
        LIB_TIFF_ERROR = sys::IL_LIB_TIFF_ERROR,
        LIB_MNG_ERROR = sys::IL_LIB_MNG_ERROR,
        LIB_JP2_ERROR = sys::IL_LIB_JP2_ERROR,
        LIB_EXR_ERROR = sys::IL_LIB_EXR_ERROR,
        UNKNOWN_ERROR = sys::IL_UNKNOWN_ERROR,
    }
}

value_table! {
    /// Enable bits toggled with `enable`/`disable`.
    EnableCap {
        ORIGIN_SET = sys::IL_ORIGIN_SET,
        FORMAT_SET = sys::IL_FORMAT_SET,
        TYPE_SET = sys::IL_TYPE_SET,
        FILE_OVERWRITE = sys::IL_FILE_OVERWRITE,
        CONV_PAL = sys::IL_CONV_PAL,
        DEFAULT_ON_FAIL = sys::IL_DEFAULT_ON_FAIL,
        USE_KEY_COLOUR = sys::IL_USE_KEY_COLOUR,
        BLIT_BLEND = sys::IL_BLIT_BLEND,
        SAVE_INTERLACED = sys::IL_SAVE_INTERLACED,
        NVIDIA_COMPRESS = sys::IL_NVIDIA_COMPRESS,
        SQUISH_COMPRESS = sys::IL_SQUISH_COMPRESS,
    }
}

value_table! {
    /// Integer parameters readable through `ilGetInteger`.
    IntegerMode {
        VERSION_NUM = sys::IL_VERSION_NUM,
        ACTIVE_IMAGE = sys::IL_ACTIVE_IMAGE,
        ACTIVE_MIPMAP = sys::IL_ACTIVE_MIPMAP,
        ACTIVE_LAYER = sys::IL_ACTIVE_LAYER,
        ACTIVE_FACE = sys::IL_ACTIVE_FACE,
        CUR_IMAGE = sys::IL_CUR_IMAGE,
        IMAGE_WIDTH = sys::IL_IMAGE_WIDTH,
        IMAGE_HEIGHT = sys::IL_IMAGE_HEIGHT,
        IMAGE_DEPTH = sys::IL_IMAGE_DEPTH,
        IMAGE_SIZE_OF_DATA = sys::IL_IMAGE_SIZE_OF_DATA,
        IMAGE_BYTES_PER_PIXEL = sys::IL_IMAGE_BYTES_PER_PIXEL,
        IMAGE_BITS_PER_PIXEL = sys::IL_IMAGE_BITS_PER_PIXEL,
        IMAGE_FORMAT = sys::IL_IMAGE_FORMAT,
        IMAGE_TYPE = sys::IL_IMAGE_TYPE,
        IMAGE_DURATION = sys::IL_IMAGE_DURATION,
        IMAGE_PLANESIZE = sys::IL_IMAGE_PLANESIZE,
        IMAGE_BPC = sys::IL_IMAGE_BPC,
        IMAGE_OFFX = sys::IL_IMAGE_OFFX,
        IMAGE_OFFY = sys::IL_IMAGE_OFFY,
        IMAGE_CUBEFLAGS = sys::IL_IMAGE_CUBEFLAGS,
        IMAGE_ORIGIN = sys::IL_IMAGE_ORIGIN,
        IMAGE_CHANNELS = sys::IL_IMAGE_CHANNELS,
        PALETTE_TYPE = sys::IL_PALETTE_TYPE,
        PALETTE_SIZE = sys::IL_PALETTE_SIZE,
        PALETTE_BPP = sys::IL_PALETTE_BPP,
        PALETTE_NUM_COLS = sys::IL_PALETTE_NUM_COLS,
        PALETTE_BASE_TYPE = sys::IL_PALETTE_BASE_TYPE,
        NUM_FACES = sys::IL_NUM_FACES,
        NUM_IMAGES = sys::IL_NUM_IMAGES,
        NUM_MIPMAPS = sys::IL_NUM_MIPMAPS,
        NUM_LAYERS = sys::IL_NUM_LAYERS,
        ORIGIN_MODE = sys::IL_ORIGIN_MODE,
        FORMAT_MODE = sys::IL_FORMAT_MODE,
        TYPE_MODE = sys::IL_TYPE_MODE,
        FILE_MODE = sys::IL_FILE_MODE,
        INTERLACE_MODE = sys::IL_INTERLACE_MODE,
        QUANTIZATION_MODE = sys::IL_QUANTIZATION_MODE,
        NEU_QUANT_SAMPLE = sys::IL_NEU_QUANT_SAMPLE,
        MAX_QUANT_INDICES = sys::IL_MAX_QUANT_INDICES,
        MEM_SPEED_HINT = sys::IL_MEM_SPEED_HINT,
        COMPRESSION_HINT = sys::IL_COMPRESSION_HINT,
        COMPRESS_MODE = sys::IL_COMPRESS_MODE,
        DXTC_FORMAT = sys::IL_DXTC_FORMAT,
        DXTC_DATA_FORMAT = sys::IL_DXTC_DATA_FORMAT,
        JPG_QUALITY = sys::IL_JPG_QUALITY,
        JPG_SAVE_FORMAT = sys::IL_JPG_SAVE_FORMAT,
        PCD_PICNUM = sys::IL_PCD_PICNUM,
        PNG_ALPHA_INDEX = sys::IL_PNG_ALPHA_INDEX,
        VTF_COMP = sys::IL_VTF_COMP,
    }
}

value_table! {
    /// Integer parameters interpreted as flags (non-zero is `true`).
    BooleanMode {
        KEEP_DXTC_DATA = sys::IL_KEEP_DXTC_DATA,
        TGA_CREATE_STAMP = sys::IL_TGA_CREATE_STAMP,
        PNG_INTERLACE = sys::IL_PNG_INTERLACE,
        TGA_RLE = sys::IL_TGA_RLE,
        BMP_RLE = sys::IL_BMP_RLE,
        SGI_RLE = sys::IL_SGI_RLE,
        JPG_PROGRESSIVE = sys::IL_JPG_PROGRESSIVE,
    }
}

value_table! {
    /// String parameters readable through `ilGetString`.
    StringMode {
        VENDOR = sys::IL_VENDOR,
        VERSION_NUM = sys::IL_VERSION_NUM,
        LOAD_EXT = sys::IL_LOAD_EXT,
        SAVE_EXT = sys::IL_SAVE_EXT,
        TGA_ID_STRING = sys::IL_TGA_ID_STRING,
        TGA_AUTHNAME_STRING = sys::IL_TGA_AUTHNAME_STRING,
        TGA_AUTHCOMMENT_STRING = sys::IL_TGA_AUTHCOMMENT_STRING,
        PNG_AUTHNAME_STRING = sys::IL_PNG_AUTHNAME_STRING,
        PNG_TITLE_STRING = sys::IL_PNG_TITLE_STRING,
        PNG_DESCRIPTION_STRING = sys::IL_PNG_DESCRIPTION_STRING,
        TIF_DESCRIPTION_STRING = sys::IL_TIF_DESCRIPTION_STRING,
        TIF_HOSTCOMPUTER_STRING = sys::IL_TIF_HOSTCOMPUTER_STRING,
        TIF_DOCUMENTNAME_STRING = sys::IL_TIF_DOCUMENTNAME_STRING,
        TIF_AUTHNAME_STRING = sys::IL_TIF_AUTHNAME_STRING,
        CHEAD_HEADER_STRING = sys::IL_CHEAD_HEADER_STRING,
    }
}

value_table! {
    /// Where row zero of the pixel data sits.
    OriginLocation {
        LOWER_LEFT = sys::IL_ORIGIN_LOWER_LEFT,
        UPPER_LEFT = sys::IL_ORIGIN_UPPER_LEFT,
    }
}

value_table! {
    /// Palette generation algorithm used when converting to indexed colour.
    Quantization {
        WU = sys::IL_WU_QUANT,
        NEU = sys::IL_NEU_QUANT,
    }
}

value_table! {
    MemoryHint {
        FASTEST = sys::IL_FASTEST,
        LESS_MEMORY = sys::IL_LESS_MEM,
        DONT_CARE = sys::IL_DONT_CARE,
    }
}

value_table! {
    CompressionHint {
        USE_COMPRESSION = sys::IL_USE_COMPRESSION,
        NO_COMPRESSION = sys::IL_NO_COMPRESSION,
        DONT_CARE = sys::IL_DONT_CARE,
    }
}

value_table! {
    /// Compression used by formats that offer a choice.
    CompressionAlgorithm {
        NONE = sys::IL_COMPRESS_NONE,
        RLE = sys::IL_COMPRESS_RLE,
        LZO = sys::IL_COMPRESS_LZO,
        ZLIB = sys::IL_COMPRESS_ZLIB,
    }
}

value_table! {
    JpgSaveFormat {
        JFIF = sys::IL_JFIF,
        EXIF = sys::IL_EXIF,
    }
}

value_table! {
    /// Kind of sub-image chain created by `create_sub_image`.
    SubImageType {
        NEXT = sys::IL_SUB_NEXT,
        MIPMAP = sys::IL_SUB_MIPMAP,
        LAYER = sys::IL_SUB_LAYER,
    }
}

value_table! {
    CubeMapFace {
        NONE = 0,
        POSITIVE_X = sys::IL_CUBEMAP_POSITIVEX,
        NEGATIVE_X = sys::IL_CUBEMAP_NEGATIVEX,
        POSITIVE_Y = sys::IL_CUBEMAP_POSITIVEY,
        NEGATIVE_Y = sys::IL_CUBEMAP_NEGATIVEY,
        POSITIVE_Z = sys::IL_CUBEMAP_POSITIVEZ,
        NEGATIVE_Z = sys::IL_CUBEMAP_NEGATIVEZ,
        SPHERE_MAP = sys::IL_SPHEREMAP,
    }
}

value_table! {
    /// Language of the utility subsystem's error strings.
    Language {
        ENGLISH = sys::ILU_ENGLISH,
        ARABIC = sys::ILU_ARABIC,
        DUTCH = sys::ILU_DUTCH,
        JAPANESE = sys::ILU_JAPANESE,
        SPANISH = sys::ILU_SPANISH,
        GERMAN = sys::ILU_GERMAN,
        FRENCH = sys::ILU_FRENCH,
        ITALIAN = sys::ILU_ITALIAN,
    }
}

value_table! {
    /// Anchor used by canvas enlargement.
    Placement {
        LOWER_LEFT = sys::ILU_LOWER_LEFT,
        LOWER_RIGHT = sys::ILU_LOWER_RIGHT,
        UPPER_LEFT = sys::ILU_UPPER_LEFT,
        UPPER_RIGHT = sys::ILU_UPPER_RIGHT,
        CENTER = sys::ILU_CENTER,
    }
}

value_table! {
    /// Resampling filter used by scaling.
    SamplingFilter {
        NEAREST = sys::ILU_NEAREST,
        LINEAR = sys::ILU_LINEAR,
        BILINEAR = sys::ILU_BILINEAR,
        BOX = sys::ILU_SCALE_BOX,
        TRIANGLE = sys::ILU_SCALE_TRIANGLE,
        BELL = sys::ILU_SCALE_BELL,
        BSPLINE = sys::ILU_SCALE_BSPLINE,
        LANCZOS3 = sys::ILU_SCALE_LANCZOS3,
        MITCHELL = sys::ILU_SCALE_MITCHELL,
    }
}

/// Selects which attribute groups `push_attributes` saves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeBits(pub u32);

impl AttributeBits {
    pub const ORIGIN: Self = Self(sys::IL_ORIGIN_BIT);
    pub const FILE: Self = Self(sys::IL_FILE_BIT);
    pub const PALETTE: Self = Self(sys::IL_PAL_BIT);
    pub const FORMAT: Self = Self(sys::IL_FORMAT_BIT);
    pub const TYPE: Self = Self(sys::IL_TYPE_BIT);
    pub const COMPRESS: Self = Self(sys::IL_COMPRESS_BIT);
    pub const LOAD_FAIL: Self = Self(sys::IL_LOADFAIL_BIT);
    pub const FORMAT_SPECIFIC: Self = Self(sys::IL_FORMAT_SPECIFIC_BIT);
    pub const ALL: Self = Self(sys::IL_ALL_ATTRIB_BITS);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for AttributeBits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for AttributeBits {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// RGBA colour with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_constant_name() {
        assert_eq!(DataFormat::RGBA.to_string(), "RGBA");
        assert_eq!(ImageType::from(sys::IL_PNG).to_string(), "PNG");
        assert_eq!(DataType(0x9999).to_string(), "0x9999");
    }

    #[test]
    fn attribute_bits_combine() {
        let bits = AttributeBits::FORMAT | AttributeBits::TYPE;
        assert!(bits.contains(AttributeBits::FORMAT));
        assert!(bits.contains(AttributeBits::TYPE));
        assert!(!bits.contains(AttributeBits::ORIGIN));
        assert!(AttributeBits::ALL.contains(bits));
    }
}
