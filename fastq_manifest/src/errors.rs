// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Errors raised while building a samplesheet.

use std::path::PathBuf;

/// Conditions that abort a run.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    #[error("Directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Unknown pipeline '{name}'. The pipeline needs to be one of: {available}")]
    UnknownPipeline { name: String, available: String },
}

/// Inputs that were left out of the samplesheet. These never abort a run; they
/// are logged and reported in the summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkippedInput {
    #[error("Skipping unrecognized file format: {filename}")]
    UnrecognizedFilename { filename: String },

    #[error("Skipping incomplete sample: {sample}")]
    IncompleteSample { sample: String },
}

impl SkippedInput {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, SkippedInput::UnrecognizedFilename { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, SkippedInput::IncompleteSample { .. })
    }
}
