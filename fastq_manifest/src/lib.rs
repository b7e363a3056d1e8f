// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Build pipeline samplesheets from a directory of paired FASTQ files.
//! Major functionality includes:
//! * A registry of supported pipelines and their samplesheet layouts
//! * Recognizing sample and read from each pipeline's filename convention
//! * Grouping forward/reverse files per sample and writing the CSV samplesheet

pub mod errors;
pub mod filenames;
pub mod manifest;
pub mod pipeline;

pub use crate::errors::{ManifestError, SkippedInput};
use crate::filenames::detect_samples;
use crate::manifest::oncoanalyser::OncoanalyserSheet;
use crate::manifest::rnaseq::RnaseqSheet;
use crate::manifest::sarek::SarekSheet;
use crate::manifest::viralcon::ViralconSheet;
pub use crate::manifest::{ManifestFormat, ManifestSummary};
pub use crate::pipeline::{Pipeline, PipelineSpec};
use anyhow::Result;
use std::path::Path;

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Scan `fastq_path` and write the samplesheet for `pipeline` into
/// `output_dir`.
pub fn generate_manifest(
    pipeline: Pipeline,
    fastq_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<ManifestSummary> {
    match pipeline {
        Pipeline::Sarek => run(&SarekSheet, fastq_path, output_dir),
        Pipeline::Oncoanalyser => run(&OncoanalyserSheet, fastq_path, output_dir),
        Pipeline::Rnaseq => run(&RnaseqSheet, fastq_path, output_dir),
        Pipeline::Viralcon => run(&ViralconSheet, fastq_path, output_dir),
    }
}

fn run<F: ManifestFormat>(
    format: &F,
    fastq_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<ManifestSummary> {
    let detected = detect_samples(fastq_path, format)?;
    manifest::write_manifest(format, detected, output_dir)
}
