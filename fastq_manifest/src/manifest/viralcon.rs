// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Samplesheet for the viralcon viral genome pipeline.

use super::{LANE_SEPARATOR, ManifestFormat, join_paths};
use crate::filenames::library::LibraryFastqFile;
use crate::filenames::{ReadDirection, ReadFileSet, RecognizeFastq};
use crate::pipeline::Pipeline;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ViralconRow {
    pub sample: String,
    pub fastq_1: String,
    pub fastq_2: String,
}

pub struct ViralconSheet;

impl RecognizeFastq for ViralconSheet {
    type Key = String;

    fn recognize(&self, filename: &str) -> Option<(String, ReadDirection)> {
        let fastq = LibraryFastqFile::new(filename)?;
        Some((fastq.sample, fastq.read))
    }
}

impl ManifestFormat for ViralconSheet {
    type Row = ViralconRow;

    fn pipeline(&self) -> Pipeline {
        Pipeline::Viralcon
    }

    fn describe(&self, key: &String) -> String {
        key.clone()
    }

    fn make_row(&self, key: &String, files: &ReadFileSet) -> ViralconRow {
        ViralconRow {
            sample: key.clone(),
            fastq_1: join_paths(&files.forward, LANE_SEPARATOR),
            fastq_2: join_paths(&files.reverse, LANE_SEPARATOR),
        }
    }
}
