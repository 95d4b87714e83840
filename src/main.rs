// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

mod args;

use args::{Args, Command, Layout};
use clap::Parser;
use devil::{DataType, EnableCap, Runtime, Session, Variant};
use serde_json::json;
use std::{error::Error, path::Path, process};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("devil=debug,devil_tool=debug,warn")
        } else {
            EnvFilter::new("devil=info,devil_tool=info,warn")
        }
    });

    #[cfg(target_os = "linux")]
    let journald = tracing_journald::layer().ok();
    #[cfg(not(target_os = "linux"))]
    let journald: Option<tracing_subscriber::layer::Identity> = None;

    let tracy = if args.tracy {
        tracy_client::Client::start();
        Some(tracing_tracy::TracyLayer::default())
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(journald)
        .with(tracy)
        .init();
}

fn version(session: &Session) -> Result<(), Box<dyn Error>> {
    let report = json!({
        "variant": session.runtime().variant().to_string(),
        "vendor": session.vendor(),
        "version": session.version(),
        "utility_vendor": session.utility_vendor(),
        "utility_version": session.utility_version(),
        "import_extensions": session.import_extensions(),
        "export_extensions": session.export_extensions(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn info(session: &Session, file: &Path) -> Result<(), Box<dyn Error>> {
    let image = session.generate()?;
    session.bind(image)?;
    let result = session.load_image(file).map(|()| session.image_info());
    session.delete(image)?;

    let mut report = result?.to_json();
    report["file"] = json!(file.display().to_string());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn convert(
    session: &Session,
    input: &Path,
    output: &Path,
    format: Option<Layout>,
    scale: Option<&[u32]>,
    overwrite: bool,
) -> Result<(), Box<dyn Error>> {
    let image = session.generate()?;
    session.bind(image)?;
    let result = (|| -> devil::Result<()> {
        session.load_image(input)?;
        if let Some(format) = format {
            session.convert_image(format.into(), DataType::UNSIGNED_BYTE)?;
        }
        if let Some(&[width, height]) = scale {
            session.scale(width, height, 1)?;
        }
        if overwrite {
            session.enable(EnableCap::FILE_OVERWRITE)?;
        }
        session.save_image(output)
    })();
    session.delete(image)?;
    result?;

    info!("converted {} to {}", input.display(), output.display());
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let paths = args.library_paths();
    debug!(
        "loading engine from {} and {}",
        paths.core.display(),
        paths.utility.display()
    );
    let runtime = Runtime::load(Variant::current(), &paths)?;

    {
        let session = runtime.acquire();
        match &args.command {
            Command::Version => version(&session)?,
            Command::Info { file } => info(&session, file)?,
            Command::Convert {
                input,
                output,
                format,
                scale,
                overwrite,
            } => convert(
                &session,
                input,
                output,
                *format,
                scale.as_deref(),
                *overwrite,
            )?,
        }
    }

    runtime.shutdown()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}
