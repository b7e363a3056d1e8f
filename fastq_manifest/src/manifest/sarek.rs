// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Samplesheet for nf-core/sarek (tumour/normal variant calling).

use super::{LANE_SEPARATOR, ManifestFormat, join_paths};
use crate::filenames::clinical::{ClinicalFastqFile, TissueStatus};
use crate::filenames::{ReadDirection, ReadFileSet, RecognizeFastq};
use crate::pipeline::Pipeline;
use serde::Serialize;

const PATIENT_PREFIX: &str = "Patient_";

/// One row per patient and tissue.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SarekKey {
    pub patient: String,
    pub status: TissueStatus,
}

#[derive(Debug, Serialize)]
pub struct SarekRow {
    pub patient: String,
    pub sex: String,
    pub status: &'static str,
    pub sample: &'static str,
    pub lane: String,
    pub fastq_1: String,
    pub fastq_2: String,
}

pub struct SarekSheet;

impl RecognizeFastq for SarekSheet {
    type Key = SarekKey;

    fn recognize(&self, filename: &str) -> Option<(SarekKey, ReadDirection)> {
        let fastq = ClinicalFastqFile::new(filename)?;
        let key = SarekKey {
            patient: format!("{PATIENT_PREFIX}{}", fastq.subject_id),
            status: fastq.status(),
        };
        Some((key, fastq.read))
    }
}

impl ManifestFormat for SarekSheet {
    type Row = SarekRow;

    fn pipeline(&self) -> Pipeline {
        Pipeline::Sarek
    }

    fn describe(&self, key: &SarekKey) -> String {
        format!("{} ({})", key.patient, key.status.sample_type())
    }

    fn make_row(&self, key: &SarekKey, files: &ReadFileSet) -> SarekRow {
        SarekRow {
            patient: key.patient.clone(),
            sex: self.default_value("sex"),
            status: key.status.code(),
            sample: key.status.sample_type(),
            lane: self.default_value("lane"),
            fastq_1: join_paths(&files.forward, LANE_SEPARATOR),
            fastq_2: join_paths(&files.reverse, LANE_SEPARATOR),
        }
    }
}
