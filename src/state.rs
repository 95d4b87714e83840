// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Typed access to the engine's global parameter table.
//!
//! The engine keeps one set of parameters shared by every image: the
//! requested format, type and origin, enable bits, codec options, hints and
//! the attribute stack. Nothing here is mirrored locally; every getter asks
//! the engine.

use crate::{
    engine::Engine,
    error::{Error, Result},
    session::{c_string, owned_string, Session},
    types::{
        AttributeBits, BooleanMode, Color, CompressedDataFormat, CompressionAlgorithm,
        CompressionHint, DataFormat, DataType, EnableCap, ErrorType, IntegerMode, JpgSaveFormat,
        Language, MemoryHint, OriginLocation, Placement, Quantization, SamplingFilter, StringMode,
    },
};
use devil_sys as sys;
use tracing::debug;

impl Session<'_> {
    /// Turns on `cap`.
    pub fn enable(&self, cap: EnableCap) -> Result<()> {
        self.call("ilEnable", |e| e.il_enable(cap.raw()))
    }

    pub fn disable(&self, cap: EnableCap) -> Result<()> {
        self.call("ilDisable", |e| e.il_disable(cap.raw()))
    }

    /// Asks the engine whether `cap` is on.
    ///
    /// This is a separate query from [`is_disabled`](Self::is_disabled); the
    /// engine may answer `false` to both for a value it does not recognise.
    pub fn is_enabled(&self, cap: EnableCap) -> bool {
        self.with(|e| e.il_is_enabled(cap.raw()))
    }

    pub fn is_disabled(&self, cap: EnableCap) -> bool {
        self.with(|e| e.il_is_disabled(cap.raw()))
    }

    pub fn get_integer(&self, mode: IntegerMode) -> i32 {
        self.with(|e| e.il_get_integer(mode.raw()))
    }

    /// Stores `value` under `mode`. The engine gives no indication of
    /// whether the value was accepted.
    pub fn set_integer(&self, mode: IntegerMode, value: i32) {
        self.with(|e| e.il_set_integer(mode.raw(), value))
    }

    pub fn get_boolean(&self, mode: BooleanMode) -> bool {
        self.with(|e| e.il_get_integer(mode.raw())) != 0
    }

    pub fn set_boolean(&self, mode: BooleanMode, value: bool) {
        self.with(|e| e.il_set_integer(mode.raw(), i32::from(value)))
    }

    /// Reads a string parameter, copying it out of engine memory.
    ///
    /// Returns `None` when the engine has no value for `mode`.
    pub fn get_string(&self, mode: StringMode) -> Option<String> {
        self.with(|e| unsafe { owned_string(e.il_get_string(mode.raw())) })
    }

    /// Stores a string parameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `value` contains a NUL byte. An empty
    /// value is passed through and clears the parameter.
    pub fn set_string(&self, mode: StringMode, value: &str) -> Result<()> {
        let value = if value.is_empty() {
            Default::default()
        } else {
            c_string("string parameter", value)?
        };
        self.with(|e| e.il_set_string(mode.raw(), &value));
        Ok(())
    }

    /// Sets the format that loaded images are converted to when
    /// [`EnableCap::FORMAT_SET`] is on.
    pub fn set_data_format(&self, format: DataFormat) -> Result<()> {
        self.call("ilFormatFunc", |e| e.il_format_func(format.raw()))
    }

    pub fn data_format(&self) -> DataFormat {
        DataFormat(self.get_integer(IntegerMode::FORMAT_MODE) as u32)
    }

    pub fn set_data_type(&self, ty: DataType) -> Result<()> {
        self.call("ilTypeFunc", |e| e.il_type_func(ty.raw()))
    }

    pub fn data_type(&self) -> DataType {
        DataType(self.get_integer(IntegerMode::TYPE_MODE) as u32)
    }

    pub fn set_origin(&self, origin: OriginLocation) -> Result<()> {
        self.call("ilOriginFunc", |e| e.il_origin_func(origin.raw()))
    }

    pub fn origin(&self) -> OriginLocation {
        OriginLocation(self.get_integer(IntegerMode::ORIGIN_MODE) as u32)
    }

    pub fn set_compression(&self, algorithm: CompressionAlgorithm) -> Result<()> {
        self.call("ilCompressFunc", |e| e.il_compress_func(algorithm.raw()))
    }

    pub fn set_quantization(&self, mode: Quantization) {
        self.set_integer(IntegerMode::QUANTIZATION_MODE, mode.raw() as i32)
    }

    pub fn quantization(&self) -> Quantization {
        Quantization(self.get_integer(IntegerMode::QUANTIZATION_MODE) as u32)
    }

    pub fn set_memory_hint(&self, hint: MemoryHint) {
        self.with(|e| e.il_hint(sys::IL_MEM_SPEED_HINT, hint.raw()))
    }

    pub fn set_compression_hint(&self, hint: CompressionHint) {
        self.with(|e| e.il_hint(sys::IL_COMPRESSION_HINT, hint.raw()))
    }

    pub fn set_jpg_save_format(&self, format: JpgSaveFormat) {
        self.set_integer(IntegerMode::JPG_SAVE_FORMAT, format.raw() as i32)
    }

    pub fn jpg_save_format(&self) -> JpgSaveFormat {
        JpgSaveFormat(self.get_integer(IntegerMode::JPG_SAVE_FORMAT) as u32)
    }

    /// Compression used when saving DDS files.
    pub fn set_dxtc_format(&self, format: CompressedDataFormat) {
        self.set_integer(IntegerMode::DXTC_FORMAT, format.raw() as i32)
    }

    pub fn dxtc_format(&self) -> CompressedDataFormat {
        CompressedDataFormat(self.get_integer(IntegerMode::DXTC_FORMAT) as u32)
    }

    /// Colour treated as transparent when [`EnableCap::USE_KEY_COLOUR`] is on.
    pub fn set_key_colour(&self, colour: Color) {
        self.with(|e| e.il_key_colour(colour.r, colour.g, colour.b, colour.a))
    }

    /// Colour used by [`clear_image`](Self::clear_image).
    pub fn set_clear_colour(&self, colour: Color) {
        self.with(|e| e.il_clear_colour(colour.r, colour.g, colour.b, colour.a))
    }

    /// Saves the attribute groups selected by `bits` on the engine's stack.
    pub fn push_attributes(&self, bits: AttributeBits) {
        self.with(|e| e.il_push_attrib(bits.bits()));
        debug!("pushed attributes {:#x}", bits.bits());
    }

    /// Restores the most recently pushed attributes.
    ///
    /// The engine signals an empty stack only through its error channel, so
    /// the error is read straight after the pop. Codes left pending by
    /// earlier calls are discarded first, under the same lock, so they are
    /// not mistaken for the pop's own.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` when the stack was empty and
    /// `NativeCallFailed` for any other code the pop raises.
    pub fn pop_attributes(&self) -> Result<()> {
        let code = self.with(|e| {
            drain_errors(e);
            e.il_pop_attrib();
            ErrorType(e.il_get_error())
        });
        match code {
            ErrorType::NO_ERROR => {
                debug!("popped attributes");
                Ok(())
            }
            ErrorType::STACK_UNDERFLOW => Err(Error::PreconditionViolation(
                "attribute stack is empty".to_owned(),
            )),
            code => Err(Error::NativeCallFailed {
                operation: "ilPopAttrib",
                code,
            }),
        }
    }

    /// Reads and clears the engine's last error.
    pub fn last_error(&self) -> ErrorType {
        ErrorType(self.with(|e| e.il_get_error()))
    }

    /// Human readable description of `code` in the current language.
    pub fn error_string(&self, code: ErrorType) -> Option<String> {
        self.with(|e| unsafe { owned_string(e.ilu_error_string(code.raw())) })
    }

    pub fn vendor(&self) -> String {
        self.get_string(StringMode::VENDOR)
            .unwrap_or_else(|| "DevIL".to_owned())
    }

    pub fn version(&self) -> String {
        self.get_string(StringMode::VERSION_NUM)
            .unwrap_or_else(|| "Unknown Version".to_owned())
    }

    /// File extensions the engine can load, each with a leading dot.
    pub fn import_extensions(&self) -> Vec<String> {
        self.get_string(StringMode::LOAD_EXT)
            .map(|list| split_extensions(&list))
            .unwrap_or_default()
    }

    /// File extensions the engine can save, each with a leading dot.
    pub fn export_extensions(&self) -> Vec<String> {
        self.get_string(StringMode::SAVE_EXT)
            .map(|list| split_extensions(&list))
            .unwrap_or_default()
    }

    pub fn utility_vendor(&self) -> Option<String> {
        self.with(|e| unsafe { owned_string(e.ilu_get_string(sys::ILU_VENDOR)) })
    }

    pub fn utility_version(&self) -> Option<String> {
        self.with(|e| unsafe { owned_string(e.ilu_get_string(sys::ILU_VERSION_NUM)) })
    }

    /// Anchor used by [`enlarge_canvas`](Self::enlarge_canvas).
    pub fn set_placement(&self, placement: Placement) {
        self.with(|e| e.ilu_image_parameter(sys::ILU_PLACEMENT, placement.raw()))
    }

    pub fn placement(&self) -> Placement {
        Placement(self.with(|e| e.ilu_get_integer(sys::ILU_PLACEMENT)) as u32)
    }

    /// Filter used by [`scale`](Self::scale).
    pub fn set_sampling_filter(&self, filter: SamplingFilter) {
        self.with(|e| e.ilu_image_parameter(sys::ILU_FILTER, filter.raw()))
    }

    pub fn sampling_filter(&self) -> SamplingFilter {
        SamplingFilter(self.with(|e| e.ilu_get_integer(sys::ILU_FILTER)) as u32)
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.call("iluSetLanguage", |e| e.ilu_set_language(language.raw()))
    }
}

/// Empties the engine's error stack.
fn drain_errors(engine: &mut dyn Engine) {
    for _ in 0..sys::IL_ERROR_STACK_SIZE {
        let code = ErrorType(engine.il_get_error());
        if code == ErrorType::NO_ERROR {
            break;
        }
        debug!("discarding pending error {}", code);
    }
}

/// Splits the engine's space separated extension list.
///
/// The engine's import list runs `dcm` and `dds` together; `dds` is listed
/// separately as well, so the fused entry is cut back to `dcm`.
fn split_extensions(list: &str) -> Vec<String> {
    list.split_whitespace()
        .map(|ext| if ext == "dcmdds" { "dcm" } else { ext })
        .map(|ext| format!(".{ext}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_list_is_dotted() {
        assert_eq!(split_extensions("bmp  png jpg"), [".bmp", ".png", ".jpg"]);
    }

    #[test]
    fn fused_dicom_entry_is_split() {
        assert_eq!(split_extensions("dds dcmdds tga"), [".dds", ".dcm", ".tga"]);
    }

    #[test]
    fn empty_list() {
        assert!(split_extensions("").is_empty());
    }
}
