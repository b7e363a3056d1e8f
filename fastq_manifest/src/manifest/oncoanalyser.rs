// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Samplesheet for nf-core/oncoanalyser. Unlike the other pipelines each lane
//! gets its own row, and both reads share the `filepath` column.

use super::{ManifestFormat, PAIR_SEPARATOR, join_paths};
use crate::filenames::illumina::IlmnFastqFile;
use crate::filenames::{ReadDirection, ReadFileSet, RecognizeFastq};
use crate::pipeline::Pipeline;
use serde::Serialize;

const GROUP_PREFIX: &str = "P";
const GROUP_SUFFIX: &str = "_tso500";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OncoanalyserKey {
    pub sample_id: String,
    pub sequence_type: String,
    pub lane: String,
}

impl OncoanalyserKey {
    /// Subject part of the sample id, before any `_`.
    pub fn subject_id(&self) -> &str {
        self.sample_id
            .split('_')
            .next()
            .unwrap_or(&self.sample_id)
    }
}

#[derive(Debug, Serialize)]
pub struct OncoanalyserRow {
    pub group_id: String,
    pub subject_id: String,
    pub sample_id: String,
    pub sample_type: String,
    pub sequence_type: String,
    pub filetype: String,
    pub info: String,
    pub filepath: String,
}

pub struct OncoanalyserSheet;

impl RecognizeFastq for OncoanalyserSheet {
    type Key = OncoanalyserKey;

    fn recognize(&self, filename: &str) -> Option<(OncoanalyserKey, ReadDirection)> {
        let fastq = IlmnFastqFile::new(filename)?;
        // The filename says nothing about the assay, so every file gets the
        // pipeline's sequence type.
        let key = OncoanalyserKey {
            sample_id: fastq.sample,
            sequence_type: self.default_value("sequence_type"),
            lane: fastq.lane,
        };
        Some((key, fastq.read))
    }
}

impl ManifestFormat for OncoanalyserSheet {
    type Row = OncoanalyserRow;

    fn pipeline(&self) -> Pipeline {
        Pipeline::Oncoanalyser
    }

    fn describe(&self, key: &OncoanalyserKey) -> String {
        format!("{} ({}, {})", key.sample_id, key.sequence_type, key.lane)
    }

    fn make_row(&self, key: &OncoanalyserKey, files: &ReadFileSet) -> OncoanalyserRow {
        let subject_id = key.subject_id();
        let mut paths: Vec<_> = files.forward.iter().chain(&files.reverse).collect();
        paths.sort();

        OncoanalyserRow {
            group_id: format!("{GROUP_PREFIX}{subject_id}{GROUP_SUFFIX}"),
            subject_id: subject_id.to_string(),
            sample_id: key.sample_id.clone(),
            sample_type: self.default_value("sample_type"),
            sequence_type: key.sequence_type.clone(),
            filetype: self.default_value("filetype"),
            info: format!("library_id:{}_library;lane:{}", key.sample_id, key.lane),
            filepath: join_paths(paths, PAIR_SEPARATOR),
        }
    }
}
