// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Samplesheet for nf-core/rnaseq. All lanes of a sample share one row.

use super::{LANE_SEPARATOR, ManifestFormat, join_paths};
use crate::filenames::illumina::IlmnFastqFile;
use crate::filenames::{ReadDirection, ReadFileSet, RecognizeFastq};
use crate::pipeline::Pipeline;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RnaseqRow {
    pub sample: String,
    pub fastq_1: String,
    pub fastq_2: String,
    pub strandedness: String,
}

pub struct RnaseqSheet;

impl RecognizeFastq for RnaseqSheet {
    type Key = String;

    fn recognize(&self, filename: &str) -> Option<(String, ReadDirection)> {
        let fastq = IlmnFastqFile::new(filename)?;
        Some((fastq.sample, fastq.read))
    }
}

impl ManifestFormat for RnaseqSheet {
    type Row = RnaseqRow;

    fn pipeline(&self) -> Pipeline {
        Pipeline::Rnaseq
    }

    fn describe(&self, key: &String) -> String {
        key.clone()
    }

    fn make_row(&self, key: &String, files: &ReadFileSet) -> RnaseqRow {
        RnaseqRow {
            sample: key.clone(),
            fastq_1: join_paths(&files.forward, LANE_SEPARATOR),
            fastq_2: join_paths(&files.reverse, LANE_SEPARATOR),
            strandedness: self.default_value("strandedness"),
        }
    }
}
