// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use devil::{
    testing::FakeEngine, AttributeBits, CompressedDataFormat, DataFormat, DataType, EnableCap,
    Error, ErrorType, ILpointf, ImageHandle, ImageType, IntegerMode, PaletteType, PixelRegion,
    Runtime, StringMode, SubImageType, Variant,
};
use proptest::prelude::*;
use std::{collections::HashSet, error::Error as StdError, io::Cursor, path::PathBuf, process};

fn fake_runtime() -> (FakeEngine, Runtime) {
    let fake = FakeEngine::new();
    let runtime = Runtime::with_engine(Variant::current(), fake.clone());
    (fake, runtime)
}

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("devil-{}-{}", process::id(), name))
}

/// 4x2 RGBA image whose bytes count up from zero.
fn ramp() -> Vec<u8> {
    (0..32).collect()
}

#[test]
fn test_round_trip() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    let image = session.generate()?;
    assert!(image.is_valid());
    session.bind(image)?;

    let pixels: Vec<u8> = (0..16).collect();
    session.set_tex_image(2, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &pixels)?;
    assert_eq!(session.image_data()?, pixels);

    let info = session.image_info();
    println!("{}", info.to_json());
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 2);
    assert_eq!(info.depth, 1);
    assert_eq!(info.channels, 4);
    assert_eq!(info.format, DataFormat::RGBA);
    assert_eq!(info.data_type, DataType::UNSIGNED_BYTE);
    assert_eq!(info.size_of_data, 16);
    assert_eq!(info.image_count, 1);
    assert_eq!(info.mipmap_count, 1);
    assert!(!info.has_palette());
    assert_eq!(info.to_json()["format"], "RGBA");

    session.delete(image)?;
    assert!(!session.is_image(image));
    Ok(())
}

#[test]
fn test_handle_validation() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    fake.clear_calls();

    assert!(matches!(
        session.delete(ImageHandle::DEFAULT),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        session.delete(ImageHandle(-5)),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        session.bind(ImageHandle::INVALID),
        Err(Error::InvalidArgument(_))
    ));
    assert!(!session.is_image(ImageHandle::INVALID));
    assert!(fake.calls().is_empty());

    // Unknown ids are created by the engine on bind.
    session.bind(ImageHandle(40))?;
    assert!(session.is_image(ImageHandle(40)));
    assert_eq!(fake.bound(), 40);
    Ok(())
}

proptest! {
    /// A batch of any size yields that many distinct, live handles.
    #[test]
    fn batch_generates_distinct_handles(count in 0usize..64) {
        let (fake, runtime) = fake_runtime();
        let session = runtime.acquire();

        let images = session.generate_batch(count)?;
        prop_assert_eq!(images.len(), count);
        prop_assert_eq!(images.iter().collect::<HashSet<_>>().len(), count);
        for image in &images {
            prop_assert!(image.is_valid());
            prop_assert!(session.is_image(*image));
        }
        // An empty batch never reaches the engine.
        prop_assert_eq!(fake.count("ilGenImages"), usize::from(count > 0));
    }
}

#[test]
fn test_batch_deletion() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    let images = session.generate_batch(3)?;

    // One refused handle stops the whole batch.
    let refused = session.delete_batch(&[images[0], ImageHandle::DEFAULT]);
    assert!(matches!(refused, Err(Error::InvalidArgument(_))));
    assert_eq!(fake.count("ilDeleteImages"), 0);
    assert!(session.is_image(images[0]));

    session.delete_batch(&images)?;
    assert_eq!(fake.count("ilDeleteImages"), 1);
    assert!(images.iter().all(|image| !session.is_image(*image)));

    session.delete_batch(&[])?;
    assert_eq!(fake.count("ilDeleteImages"), 1);
    Ok(())
}

#[test]
fn test_generate_failure() {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    fake.fail_next(ErrorType::OUT_OF_MEMORY);
    match session.generate() {
        Err(Error::NativeCallFailed { operation, code }) => {
            assert_eq!(operation, "ilGenImage");
            assert_eq!(code, ErrorType::OUT_OF_MEMORY);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_pixel_regions() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;
    session.set_tex_image(4, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &ramp())?;

    let region =
        PixelRegion::new(2, 2, DataFormat::RGBA, DataType::UNSIGNED_BYTE).with_offset(1, 0, 0);
    let copied = session.copy_pixels(&region)?;
    let expected: Vec<u8> = (4..12).chain(20..28).collect();
    assert_eq!(copied, expected);

    let mut dest = [0u8; 20];
    assert_eq!(session.copy_pixels_into(&region, &mut dest)?, 16);
    assert_eq!(&dest[..16], expected.as_slice());
    assert_eq!(&dest[16..], &[0; 4]);

    let mut short = [0u8; 8];
    assert!(matches!(
        session.copy_pixels_into(&region, &mut short),
        Err(Error::InvalidArgument(_))
    ));

    let pixel =
        PixelRegion::new(1, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE).with_offset(3, 1, 0);
    session.set_pixels(&pixel, &[9, 9, 9, 9])?;
    assert_eq!(&session.image_data()?[28..32], &[9, 9, 9, 9]);

    fake.clear_calls();
    assert!(matches!(
        session.set_pixels(&pixel, &[9, 9, 9]),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(fake.count("ilSetPixels"), 0);

    let rgb = PixelRegion::new(2, 2, DataFormat::RGB, DataType::UNSIGNED_BYTE);
    match session.copy_pixels(&rgb) {
        Err(Error::NativeCallFailed { operation, code }) => {
            assert_eq!(operation, "ilCopyPixels");
            assert_eq!(code, ErrorType::INVALID_CONVERSION);
        }
        other => panic!("unexpected result {other:?}"),
    }
    Ok(())
}

#[test]
fn test_tex_image_size_checks() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;
    fake.clear_calls();

    let rgb = DataFormat::RGB;
    let wrong = session.set_tex_image(2, 2, 1, rgb, DataType::UNSIGNED_BYTE, &[0; 16]);
    assert!(matches!(wrong, Err(Error::InvalidArgument(_))));
    let odd = DataFormat(0x1234);
    let unknown = session.set_tex_image(2, 2, 1, odd, DataType::UNSIGNED_BYTE, &[0; 16]);
    assert!(matches!(unknown, Err(Error::InvalidArgument(_))));
    assert_eq!(fake.count("ilTexImage"), 0);

    session.allocate_image(3, 3, 1, DataFormat::RGB, DataType::UNSIGNED_SHORT)?;
    assert_eq!(session.image_data()?, vec![0; 54]);

    assert!(matches!(
        session.set_image_data(&[1; 53]),
        Err(Error::InvalidArgument(_))
    ));
    session.set_image_data(&[1; 54])?;
    assert_eq!(session.image_data()?, vec![1; 54]);
    Ok(())
}

#[test]
fn test_views() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let mut session = runtime.acquire();
    session.bind(session.generate()?)?;
    session.set_tex_image(4, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &ramp())?;

    {
        let view = session.data_view()?;
        assert_eq!(view.len(), 32);
        assert_eq!(view[31], 31);
    }
    {
        let mut view = session.data_view_mut()?;
        view[0] = 200;
    }
    assert_eq!(session.image_data()?[0], 200);

    assert!(matches!(
        session.palette_data(),
        Err(Error::NoData { .. })
    ));

    fake.set_palette(PaletteType::RGB24, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(session.palette_data()?, vec![1, 2, 3, 4, 5, 6]);
    let palette = session.palette_view()?;
    assert_eq!(palette.palette_type(), PaletteType::RGB24);
    assert_eq!(&*palette, &[1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn test_query_then_fill() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;
    fake.clear_calls();

    fake.script_transfer(0, 0);
    assert!(matches!(
        session.save_to_memory(ImageType::PNG),
        Err(Error::NoData { operation: "ilSaveL" })
    ));
    assert_eq!(fake.count("ilSaveL"), 1);

    fake.clear_calls();
    fake.script_transfer(8, 0);
    assert!(matches!(
        session.save_to_memory(ImageType::PNG),
        Err(Error::TransferFailed {
            operation: "ilSaveL",
            expected: 8
        })
    ));
    assert_eq!(fake.count("ilSaveL"), 2);

    fake.script_transfer(8, 4);
    assert_eq!(session.save_to_memory(ImageType::PNG)?, vec![0, 1, 2, 3]);

    fake.script_transfer(6, 6);
    assert_eq!(
        session.dxtc_data(CompressedDataFormat::DXT5)?,
        vec![0, 1, 2, 3, 4, 5]
    );

    assert!(matches!(
        session.save_to_memory(ImageType::UNKNOWN),
        Err(Error::InvalidArgument(_))
    ));
    Ok(())
}

#[test]
fn test_memory_round_trip() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    let source = session.generate()?;
    session.bind(source)?;
    session.set_tex_image(4, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &ramp())?;

    let encoded = session.save_to_memory(ImageType::PNG)?;
    let mut written = Vec::new();
    assert_eq!(session.save_to_writer(ImageType::PNG, &mut written)?, encoded.len());
    assert_eq!(written, encoded);

    assert!(session.is_valid_memory(ImageType::PNG, &encoded)?);
    assert_eq!(session.determine_type_from_memory(&encoded)?, ImageType::RAW);

    let target = session.generate()?;
    session.bind(target)?;
    session.load_from_memory(ImageType::PNG, &encoded)?;
    assert_eq!(session.image_data()?, ramp());
    assert!(session.compare_image(source)?);

    session.bind(session.generate()?)?;
    session.load_from_reader(None, Cursor::new(encoded))?;
    assert_eq!(session.image_data()?, ramp());

    match session.load_from_memory(ImageType::PNG, b"not an image") {
        Err(Error::NativeCallFailed { code, .. }) => {
            assert_eq!(code, ErrorType::INVALID_FILE_HEADER)
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(matches!(
        session.load_from_memory(ImageType::PNG, &[]),
        Err(Error::InvalidArgument(_))
    ));
    Ok(())
}

#[test]
fn test_file_io() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;
    session.set_tex_image(4, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &ramp())?;

    let path = scratch_file("file_io.png");
    let _ = std::fs::remove_file(&path);

    session.save(ImageType::PNG, &path)?;
    assert!(session.is_valid(ImageType::PNG, &path)?);
    assert_eq!(session.determine_type(&path)?, ImageType::RAW);

    match session.save_image(&path) {
        Err(Error::NativeCallFailed { code, .. }) => {
            assert_eq!(code, ErrorType::FILE_ALREADY_EXISTS)
        }
        other => panic!("unexpected result {other:?}"),
    }
    session.enable(EnableCap::FILE_OVERWRITE)?;
    session.save_image(&path)?;

    session.bind(session.generate()?)?;
    session.load_image(&path)?;
    assert_eq!(session.image_data()?, ramp());

    let raw = scratch_file("file_io.raw");
    session.save_raw_data(&raw)?;
    session.load_raw_data(&raw, 8, 1, 1, 4)?;
    assert_eq!(session.image_info().width, 8);
    assert!(matches!(
        session.load_raw_data(&raw, 8, 1, 1, 2),
        Err(Error::InvalidArgument(_))
    ));

    std::fs::remove_file(&path)?;
    std::fs::remove_file(&raw)?;

    match session.load(ImageType::PNG, &path) {
        Err(Error::NativeCallFailed { code, .. }) => {
            assert_eq!(code, ErrorType::COULD_NOT_OPEN_FILE)
        }
        other => panic!("unexpected result {other:?}"),
    }
    Ok(())
}

#[test]
fn test_type_from_extension() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    assert_eq!(session.type_from_extension("png")?, ImageType::PNG);
    assert_eq!(session.type_from_extension(".tga")?, ImageType::TGA);
    assert_eq!(session.type_from_extension("photo.JPG")?, ImageType::JPG);
    assert_eq!(session.type_from_extension("xyz")?, ImageType::UNKNOWN);
    assert!(session.type_from_extension("a\0b").is_err());
    Ok(())
}

#[test]
fn test_attribute_stack() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    let quality = session.get_integer(IntegerMode::JPG_QUALITY);
    session.push_attributes(AttributeBits::ALL);
    session.set_integer(IntegerMode::JPG_QUALITY, quality - 10);
    session.enable(EnableCap::FILE_OVERWRITE)?;
    assert_eq!(session.get_integer(IntegerMode::JPG_QUALITY), quality - 10);
    assert_eq!(fake.stack_depth(), 1);

    session.pop_attributes()?;
    assert_eq!(session.get_integer(IntegerMode::JPG_QUALITY), quality);
    assert!(session.is_disabled(EnableCap::FILE_OVERWRITE));
    assert_eq!(fake.stack_depth(), 0);

    assert!(matches!(
        session.pop_attributes(),
        Err(Error::PreconditionViolation(_))
    ));
    // The underflow is consumed by the pop.
    assert_eq!(session.last_error(), ErrorType::NO_ERROR);
    Ok(())
}

#[test]
fn test_pop_ignores_pending_errors() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    let image = session.generate()?;
    session.bind(image)?;
    session.set_tex_image(2, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &[0; 16])?;

    // Writing RGB into an RGBA image is refused, but only through the error
    // channel; more refusals than the error stack holds are left pending.
    let region = PixelRegion::new(1, 1, DataFormat::RGB, DataType::UNSIGNED_BYTE);
    for _ in 0..40 {
        session.set_pixels(&region, &[1, 2, 3])?;
    }

    let quality = session.get_integer(IntegerMode::JPG_QUALITY);
    session.push_attributes(AttributeBits::ALL);
    session.set_integer(IntegerMode::JPG_QUALITY, 50);
    session.pop_attributes()?;

    assert_eq!(fake.stack_depth(), 0);
    assert_eq!(session.get_integer(IntegerMode::JPG_QUALITY), quality);
    assert_eq!(session.last_error(), ErrorType::NO_ERROR);

    // An underflow is still reported when earlier errors are pending.
    session.set_pixels(&region, &[1, 2, 3])?;
    assert!(matches!(
        session.pop_attributes(),
        Err(Error::PreconditionViolation(_))
    ));
    Ok(())
}

#[test]
fn test_error_stack_order() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.set_tex_image(1, 1, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &[0; 4])?;

    let wrong_format = PixelRegion::new(1, 1, DataFormat::RGB, DataType::UNSIGNED_BYTE);
    session.set_pixels(&wrong_format, &[1, 2, 3])?;
    let outside = PixelRegion::new(1, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE)
        .with_offset(5, 0, 0);
    session.set_pixels(&outside, &[1, 2, 3, 4])?;

    // Most recent first.
    assert_eq!(session.last_error(), ErrorType::INVALID_PARAM);
    assert_eq!(session.last_error(), ErrorType::INVALID_CONVERSION);
    assert_eq!(session.last_error(), ErrorType::NO_ERROR);
    Ok(())
}

#[test]
fn test_state() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();

    session.set_string(StringMode::TGA_ID_STRING, "devil")?;
    assert_eq!(
        session.get_string(StringMode::TGA_ID_STRING).as_deref(),
        Some("devil")
    );
    assert!(session.set_string(StringMode::TGA_ID_STRING, "a\0b").is_err());
    assert_eq!(session.get_string(StringMode::PNG_TITLE_STRING), None);

    assert_eq!(session.vendor(), "DevIL");
    let imports = session.import_extensions();
    assert!(imports.contains(&".dcm".to_owned()));
    assert!(imports.contains(&".dds".to_owned()));
    assert!(!imports.iter().any(|ext| ext == ".dcmdds"));
    assert!(session.export_extensions().contains(&".png".to_owned()));

    session.set_data_format(DataFormat::RGB)?;
    assert_eq!(session.data_format(), DataFormat::RGB);
    session.set_data_type(DataType::FLOAT)?;
    assert_eq!(session.data_type(), DataType::FLOAT);

    match session.enable(EnableCap(0x9999)) {
        Err(Error::NativeCallFailed { operation, code }) => {
            assert_eq!(operation, "ilEnable");
            assert_eq!(code, ErrorType::INVALID_ENUM);
        }
        other => panic!("unexpected result {other:?}"),
    }

    session.set_key_colour(devil::Color::new(1.0, 0.5, 0.25, 1.0));
    assert_eq!(fake.key_colour(), [1.0, 0.5, 0.25, 1.0]);

    assert_eq!(
        session.error_string(ErrorType::STACK_UNDERFLOW).as_deref(),
        Some("stack underflow")
    );
    Ok(())
}

#[test]
fn test_transforms() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;
    session.set_tex_image(4, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &ramp())?;

    session.mirror()?;
    assert_eq!(&session.image_data()?[..4], &[12, 13, 14, 15]);
    session.mirror()?;

    session.flip_image()?;
    assert_eq!(&session.image_data()?[..4], &[16, 17, 18, 19]);
    session.flip_image()?;

    session.scale(8, 4, 1)?;
    assert_eq!(session.image_info().size_of_data, 128);
    session.scale(4, 2, 1)?;
    assert_eq!(session.image_data()?, ramp());

    session.crop(1, 1, 0, 2, 1, 1)?;
    let info = session.image_info();
    assert_eq!((info.width, info.height), (2, 1));
    assert_eq!(session.image_data()?, (20..28).collect::<Vec<u8>>());

    session.convert_image(DataFormat::BGR, DataType::UNSIGNED_BYTE)?;
    assert_eq!(session.image_data()?, vec![22, 21, 20, 26, 25, 24]);
    assert_eq!(session.colours_used(), 2);
    Ok(())
}

#[test]
fn test_transform_validation() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;
    fake.clear_calls();

    let invalid = |result: devil::Result<()>| matches!(result, Err(Error::InvalidArgument(_)));
    assert!(invalid(session.convolution(&[1; 8], 1, 0)));
    assert!(invalid(session.convolution(&[1; 9], 0, 0)));
    assert!(invalid(session.region(&[ILpointf { x: 0.0, y: 0.0 }; 2])));
    assert!(invalid(session.pixelize(0)));
    assert!(invalid(session.enlarge_image(0.0, 1.0, 1.0)));
    assert!(invalid(session.scale(0, 1, 1)));
    assert!(invalid(session.crop(0, 0, 0, 0, 1, 1)));
    assert!(fake.calls().is_empty());

    session.convolution(&[0, -1, 0, -1, 5, -1, 0, -1, 0], 1, 0)?;
    session.region(&[ILpointf { x: 0.0, y: 0.0 }; 3])?;
    // Out of range tolerances are clamped before reaching the engine.
    session.noisify(5.0)?;
    assert_eq!(
        fake.calls(),
        ["iluConvolution", "iluRegionfv", "iluNoisify"]
    );

    fake.fail_next(ErrorType::OUT_OF_MEMORY);
    match session.build_mipmaps() {
        Err(Error::NativeCallFailed { operation, code }) => {
            assert_eq!(operation, "iluBuildMipmaps");
            assert_eq!(code, ErrorType::OUT_OF_MEMORY);
        }
        other => panic!("unexpected result {other:?}"),
    }
    Ok(())
}

#[test]
fn test_dxtc() -> Result<(), Box<dyn StdError>> {
    let (fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;

    session.allocate_image(5, 5, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE)?;
    assert_eq!(session.dxtc_data(CompressedDataFormat::DXT1)?.len(), 32);
    assert_eq!(session.dxtc_data(CompressedDataFormat::DXT5)?.len(), 64);

    assert!(session.dxtc_data_to_image().is_err());
    session.image_to_dxtc_data(CompressedDataFormat::DXT3)?;
    session.dxtc_data_to_image()?;
    assert_eq!(session.image_info().dxtc_format, CompressedDataFormat::DXT3);

    session.set_tex_image_dxtc(4, 4, 1, CompressedDataFormat::DXT1, &[7; 8])?;
    assert_eq!(session.dxtc_data(CompressedDataFormat::DXT1)?, vec![7; 8]);
    assert!(matches!(
        session.set_tex_image_dxtc(4, 4, 1, CompressedDataFormat::DXT1, &[]),
        Err(Error::InvalidArgument(_))
    ));

    // The engine reads as many bytes as the dimensions imply, so a short or
    // long buffer never reaches it.
    let calls = fake.count("ilTexImageDxtc");
    for len in [7, 9, 16] {
        assert!(matches!(
            session.set_tex_image_dxtc(4, 4, 1, CompressedDataFormat::DXT1, &vec![0; len]),
            Err(Error::InvalidArgument(_))
        ));
    }
    assert!(matches!(
        session.set_tex_image_dxtc(u32::MAX, u32::MAX, 1, CompressedDataFormat::DXT5, &[0; 16]),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(fake.count("ilTexImageDxtc"), calls);
    session.set_tex_image_dxtc(5, 5, 1, CompressedDataFormat::DXT5, &[1; 64])?;
    assert_eq!(session.image_info().width, 5);
    Ok(())
}

#[test]
fn test_sub_images() -> Result<(), Box<dyn StdError>> {
    let (_fake, runtime) = fake_runtime();
    let session = runtime.acquire();
    session.bind(session.generate()?)?;

    assert_eq!(session.create_sub_image(SubImageType::NEXT, 2)?, 2);
    assert_eq!(session.image_info().image_count, 3);
    session.active_image(2)?;
    match session.active_image(3) {
        Err(Error::NativeCallFailed { code, .. }) => {
            assert_eq!(code, ErrorType::ILLEGAL_OPERATION)
        }
        other => panic!("unexpected result {other:?}"),
    }

    let copy = session.clone_current()?;
    assert!(session.is_image(copy));
    assert!(session.compare_image(copy)?);
    Ok(())
}
