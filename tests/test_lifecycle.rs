// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use devil::{
    testing::FakeEngine, DataFormat, DataType, Error, ImageType, LibraryPaths, Runtime, Variant,
};
use proptest::prelude::*;
use serial_test::serial;
use std::{error::Error as StdError, thread};

#[derive(Clone, Debug)]
enum Step {
    Acquire,
    Release,
    Initialize,
    Shutdown,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Acquire),
        3 => Just(Step::Release),
        1 => Just(Step::Initialize),
        1 => Just(Step::Shutdown),
    ]
}

proptest! {
    /// Any interleaving of sessions and explicit lifecycle calls keeps the
    /// engine initialised exactly while it is needed.
    #[test]
    fn lifecycle_matches_model(steps in prop::collection::vec(step(), 0..64)) {
        let fake = FakeEngine::new();
        let runtime = Runtime::with_engine(Variant::current(), fake.clone());
        let mut sessions = Vec::new();
        let mut ready = false;
        let mut inits = 0;
        let mut shutdowns = 0;

        for step in steps {
            match step {
                Step::Acquire => {
                    if sessions.is_empty() && !ready {
                        inits += 1;
                        ready = true;
                    }
                    sessions.push(runtime.acquire());
                }
                Step::Release => {
                    if sessions.pop().is_some() && sessions.is_empty() && ready {
                        shutdowns += 1;
                        ready = false;
                    }
                }
                Step::Initialize => {
                    if !ready {
                        inits += 1;
                        ready = true;
                    }
                    runtime.initialize();
                }
                Step::Shutdown => {
                    let result = runtime.shutdown();
                    if sessions.is_empty() {
                        prop_assert!(result.is_ok());
                        if ready {
                            shutdowns += 1;
                            ready = false;
                        }
                    } else {
                        prop_assert!(matches!(result, Err(Error::PreconditionViolation(_))));
                    }
                }
            }

            prop_assert_eq!(runtime.ref_count(), sessions.len());
            prop_assert_eq!(runtime.is_initialized(), ready);
            prop_assert_eq!(fake.is_initialized(), ready);
            prop_assert_eq!(fake.count("ilInit"), inits);
            prop_assert_eq!(fake.count("iluInit"), inits);
            prop_assert_eq!(fake.count("ilShutDown"), shutdowns);
        }

        // Releasing the last session shuts down; an explicit initialize
        // with no sessions stays up until shutdown.
        let live = !sessions.is_empty();
        drop(sessions);
        prop_assert_eq!(runtime.ref_count(), 0);
        prop_assert_eq!(runtime.is_initialized(), ready && !live);
    }
}

#[test]
fn test_shared_across_threads() -> Result<(), Box<dyn StdError>> {
    let fake = FakeEngine::new();
    let runtime = Runtime::with_engine(Variant::current(), fake.clone());

    thread::scope(|scope| -> devil::Result<()> {
        let mut workers = Vec::new();
        for worker in 0..8u8 {
            let runtime = &runtime;
            workers.push(scope.spawn(move || -> devil::Result<()> {
                for _ in 0..16 {
                    let session = runtime.acquire();
                    let image = session.generate()?;
                    session.bind(image)?;
                    let pixels = [worker; 4];
                    session.set_tex_image(
                        1,
                        1,
                        1,
                        DataFormat::RGBA,
                        DataType::UNSIGNED_BYTE,
                        &pixels,
                    )?;
                    // Another worker may bind its own image between calls,
                    // and every worker's image has the same size.
                    assert_eq!(session.image_info().size_of_data, 4);
                    session.delete(image)?;
                }
                Ok(())
            }));
        }
        for worker in workers {
            worker.join().expect("worker panicked")?;
        }
        Ok(())
    })?;

    assert_eq!(runtime.ref_count(), 0);
    assert!(!runtime.is_initialized());
    assert_eq!(fake.count("ilInit"), fake.count("ilShutDown"));
    Ok(())
}

#[test]
fn test_bound_image_is_shared() -> Result<(), Box<dyn StdError>> {
    let fake = FakeEngine::new();
    let runtime = Runtime::with_engine(Variant::current(), fake.clone());
    let first = runtime.acquire();
    let second = runtime.acquire();

    let image = first.generate()?;
    first.bind(image)?;
    first.set_tex_image(1, 1, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &[1; 4])?;

    // A bind through any session retargets every session.
    let other = second.generate()?;
    second.bind(other)?;
    second.set_tex_image(2, 1, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &[2; 8])?;
    assert_eq!(fake.bound(), other.id() as u32);
    assert_eq!(first.image_info().width, 2);

    first.bind(image)?;
    assert_eq!(second.image_data()?, vec![1; 4]);
    Ok(())
}

#[test]
fn test_nested_sessions_share_one_init() {
    let fake = FakeEngine::new();
    let runtime = Runtime::with_engine(Variant::current(), fake.clone());

    let outer = runtime.acquire();
    {
        let _inner = runtime.acquire();
        assert_eq!(runtime.ref_count(), 2);
    }
    assert!(runtime.is_initialized());
    assert!(matches!(
        runtime.shutdown(),
        Err(Error::PreconditionViolation(_))
    ));
    drop(outer);

    assert_eq!(fake.calls(), ["ilInit", "iluInit", "ilShutDown"]);
    assert!(runtime.shutdown().is_ok());
    assert_eq!(fake.count("ilShutDown"), 1);
}

#[test]
fn test_missing_library() {
    let paths = LibraryPaths::defaults(Variant::current()).with_overrides(
        Some("/nonexistent/libIL.so".into()),
        Some("/nonexistent/libILU.so".into()),
    );
    match Runtime::load(Variant::current(), &paths) {
        Err(Error::NativeLibraryUnavailable { library, .. }) => {
            assert!(library.contains("nonexistent"));
        }
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("loaded a library that does not exist"),
    }
}

/// Exercises the installed DevIL libraries.
#[test]
#[serial]
#[ignore = "requires the DevIL shared libraries"]
fn test_native_engine() -> Result<(), Box<dyn StdError>> {
    let runtime = Runtime::global()?;
    let session = runtime.acquire();
    println!("{} {}", session.vendor(), session.version());

    let image = session.generate()?;
    session.bind(image)?;
    let pixels: Vec<u8> = (0..16).collect();
    session.set_tex_image(2, 2, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &pixels)?;
    assert_eq!(session.image_data()?, pixels);

    let info = session.image_info();
    assert_eq!((info.width, info.height, info.channels), (2, 2, 4));

    let encoded = session.save_to_memory(ImageType::TGA)?;
    assert!(!encoded.is_empty());

    session.scale(4, 4, 1)?;
    assert_eq!(session.image_info().size_of_data, 64);

    session.delete(image)?;
    Ok(())
}
