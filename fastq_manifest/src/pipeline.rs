// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! The registry of pipelines we can write a samplesheet for.

use crate::errors::ManifestError;
use itertools::Itertools;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Static description of a pipeline's samplesheet.
#[derive(Debug, PartialEq, Eq)]
pub struct PipelineSpec {
    pub name: &'static str,
    /// Alternative name accepted on the command line
    pub alias: &'static str,
    /// Samplesheet columns, in output order
    pub columns: &'static [&'static str],
    /// Values for fields that cannot be derived from a filename
    pub defaults: &'static [(&'static str, &'static str)],
    /// Name of the samplesheet inside the output directory
    pub filename: &'static str,
    pub description: &'static str,
}

impl PipelineSpec {
    /// The declared default for `field`, if any.
    pub fn default_value(&self, field: &str) -> Option<&'static str> {
        self.defaults
            .iter()
            .find(|(name, _)| *name == field)
            .map(|&(_, value)| value)
    }
}

const SAREK: PipelineSpec = PipelineSpec {
    name: "sarek",
    alias: "clinical",
    columns: &[
        "patient", "sex", "status", "sample", "lane", "fastq_1", "fastq_2",
    ],
    defaults: &[("sex", "XX"), ("lane", "lane_1")],
    filename: "samplesheet.csv",
    description: "Sarek pipeline for variant calling (WES/WGS)",
};

const ONCOANALYSER: PipelineSpec = PipelineSpec {
    name: "oncoanalyser",
    alias: "cancer-analysis",
    columns: &[
        "group_id",
        "subject_id",
        "sample_id",
        "sample_type",
        "sequence_type",
        "filetype",
        "info",
        "filepath",
    ],
    defaults: &[
        ("filetype", "fastq"),
        ("sample_type", "tumor"),
        ("sequence_type", "dna"),
    ],
    filename: "onco_samplesheet.csv",
    description: "Oncoanalyser pipeline for cancer analysis (DNA/RNA)",
};

const RNASEQ: PipelineSpec = PipelineSpec {
    name: "rnaseq",
    alias: "transcriptome",
    columns: &["sample", "fastq_1", "fastq_2", "strandedness"],
    defaults: &[("strandedness", "auto")],
    filename: "rnaseq_samplesheet.csv",
    description: "RNAseq pipeline for transcriptome analysis",
};

const VIRALCON: PipelineSpec = PipelineSpec {
    name: "viralcon",
    alias: "viral-genome",
    columns: &["sample", "fastq_1", "fastq_2"],
    defaults: &[],
    filename: "viral_samplesheet.csv",
    description: "Viralcon pipeline for viral genome analysis",
};

/// Supported pipelines, in the order they are offered to the user.
#[derive(
    EnumIter, EnumString, Display, Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord,
)]
pub enum Pipeline {
    #[strum(to_string = "sarek", serialize = "clinical")]
    Sarek,
    #[strum(to_string = "oncoanalyser", serialize = "cancer-analysis")]
    Oncoanalyser,
    #[strum(to_string = "rnaseq", serialize = "transcriptome")]
    Rnaseq,
    #[strum(to_string = "viralcon", serialize = "viral-genome")]
    Viralcon,
}

impl Pipeline {
    pub fn spec(self) -> &'static PipelineSpec {
        match self {
            Pipeline::Sarek => &SAREK,
            Pipeline::Oncoanalyser => &ONCOANALYSER,
            Pipeline::Rnaseq => &RNASEQ,
            Pipeline::Viralcon => &VIRALCON,
        }
    }

    /// Look up a pipeline by name or alias.
    pub fn lookup(name: &str) -> Result<Pipeline, ManifestError> {
        Pipeline::from_str(name).map_err(|_| ManifestError::UnknownPipeline {
            name: name.to_string(),
            available: Pipeline::iter().join(", "),
        })
    }

    /// Select a pipeline by its 1-based position in the registry.
    pub fn from_ordinal(ordinal: usize) -> Option<Pipeline> {
        ordinal.checked_sub(1).and_then(|i| Pipeline::iter().nth(i))
    }
}
