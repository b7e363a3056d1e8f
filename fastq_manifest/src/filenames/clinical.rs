// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Tumour/normal FASTQs named after the patient, e.g. `13-N_R1_001.fastq.gz`.

use super::ReadDirection;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLINICAL_REGEX: Regex =
        Regex::new(r"^(\d+)(?:-([A-Za-z]+))?_?(R[12])_001\.f(?:ast)?q\.gz$").unwrap();
}

/// Tag marking the normal sample of a tumour/normal pair.
const NORMAL_TAG: &str = "N";

/// Whether a FASTQ comes from normal or tumour tissue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TissueStatus {
    Normal,
    Tumour,
}

impl TissueStatus {
    /// Numeric status code used in the samplesheet.
    pub fn code(self) -> &'static str {
        match self {
            TissueStatus::Normal => "0",
            TissueStatus::Tumour => "1",
        }
    }

    pub fn sample_type(self) -> &'static str {
        match self {
            TissueStatus::Normal => "Normal",
            TissueStatus::Tumour => "Tumour",
        }
    }
}

/// A parsed `<subject>[-<tag>]_R<n>_001.fastq.gz` filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClinicalFastqFile {
    pub subject_id: String,
    /// Tissue tag following the subject id, if any
    pub tag: Option<String>,
    pub read: ReadDirection,
}

impl ClinicalFastqFile {
    pub fn new(filename: &str) -> Option<ClinicalFastqFile> {
        let cap = CLINICAL_REGEX.captures(filename)?;
        Some(ClinicalFastqFile {
            subject_id: cap[1].to_string(),
            tag: cap.get(2).map(|m| m.as_str().to_string()),
            read: ReadDirection::from_label(&cap[3])?,
        })
    }

    /// `N` is the normal sample. Anything else, including no tag, is tumour.
    pub fn status(&self) -> TissueStatus {
        match self.tag.as_deref() {
            Some(NORMAL_TAG) => TissueStatus::Normal,
            _ => TissueStatus::Tumour,
        }
    }
}
