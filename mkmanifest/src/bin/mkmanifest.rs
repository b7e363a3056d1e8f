// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! mkmanifest
#![deny(missing_docs)]

use anyhow::Result;
use clap::{self, Parser};
use fastq_manifest::{DEFAULT_OUTPUT_DIR, Pipeline, generate_manifest};
use log::LevelFilter;
use mkmanifest::logging::setup_logging;
use mkmanifest::prompt::{choose_fastq_dir, choose_pipeline};
use mkmanifest::utils::print_error_chain;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use strum::IntoEnumIterator;

const CMD: &str = "mkmanifest";

/// Write a pipeline samplesheet from a directory of paired FASTQ files
#[derive(Parser, Debug)]
#[clap(name = CMD, version)]
struct MkManifest {
    /// Pipeline to write the samplesheet for (name or alias). Prompted for
    /// when omitted.
    #[clap(long, value_parser = Pipeline::lookup)]
    pipeline: Option<Pipeline>,

    /// Directory holding the FASTQ files. Prompted for when omitted.
    #[clap(long)]
    fastqs: Option<PathBuf>,

    /// Directory the samplesheet is written to. Created if missing.
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the supported pipelines and exit.
    #[clap(long)]
    list_pipelines: bool,

    /// Only log warnings and errors.
    #[clap(long)]
    quiet: bool,
}

fn list_pipelines() {
    for pipeline in Pipeline::iter() {
        let spec = pipeline.spec();
        println!(
            "{} ({}) - {} -> {}",
            spec.name, spec.alias, spec.description, spec.filename
        );
    }
}

fn inner_main(args: MkManifest) -> Result<()> {
    if args.list_pipelines {
        list_pipelines();
        return Ok(());
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let pipeline = match args.pipeline {
        Some(pipeline) => pipeline,
        None => choose_pipeline(&mut input, &mut output)?,
    };
    let fastq_path = match args.fastqs {
        Some(path) => path,
        None => choose_fastq_dir(&mut input, &mut output)?,
    };

    let summary = generate_manifest(pipeline, &fastq_path, &args.output_dir)?;
    println!("{summary}");
    Ok(())
}

fn main() -> ExitCode {
    let args = MkManifest::parse();
    setup_logging(if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    });

    match inner_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error_chain(&err);
            ExitCode::FAILURE
        }
    }
}
