// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! FASTQs following the Illumina `bcl2fastq` naming convention,
//! e.g. `heart_S1_L002_R2_001.fastq.gz`.

use super::ReadDirection;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BCL2FASTQ_REGEX: Regex =
        Regex::new(r"^.+?_S\d+_L(\d+)_R([12])_001\.f(?:ast)?q\.gz$").unwrap();
}

/// A parsed representation of a FASTQ file produced by
/// Illumina's bcl2fastq tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IlmnFastqFile {
    /// First underscore-delimited token of the filename
    pub sample: String,
    /// Lane digits as written in the filename, e.g. `002`
    pub lane: String,
    pub read: ReadDirection,
}

impl IlmnFastqFile {
    /// Attempt to parse `filename` as a bcl2fastq-produced paired FASTQ.
    /// Index reads (`I1`/`I2`) and `R3` are not recognized.
    pub fn new(filename: &str) -> Option<IlmnFastqFile> {
        let cap = BCL2FASTQ_REGEX.captures(filename)?;
        let sample = filename.split('_').next()?;
        Some(IlmnFastqFile {
            sample: sample.to_string(),
            lane: cap[1].to_string(),
            read: ReadDirection::from_label(&cap[2])?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        let r = IlmnFastqFile::new("heart_S1_L002_R2_001.fastq.gz");
        assert_eq!(
            r,
            Some(IlmnFastqFile {
                sample: "heart".to_string(),
                lane: "002".to_string(),
                read: ReadDirection::Reverse,
            })
        );
    }

    #[test]
    fn test_sample_is_first_token() {
        let r = IlmnFastqFile::new("heart_1k_v3_S1_L001_R1_001.fq.gz").unwrap();
        assert_eq!(r.sample, "heart");
        assert_eq!(r.lane, "001");
        assert_eq!(r.read, ReadDirection::Forward);

        let r = IlmnFastqFile::new("heart-1k-v3_S1_L001_R1_001.fastq.gz").unwrap();
        assert_eq!(r.sample, "heart-1k-v3");
    }

    #[test]
    fn test_bad() {
        for filename in [
            "weird_name.fastq.gz",
            "S1_R1_001.fastq.gz",
            "heart_S1_R1_001.fastq.gz",
            "heart_S1_LA_R2_001.fastq.gz",
            "heart_S1_L002_I1_001.fastq.gz",
            "heart_S1_L002_R3_001.fastq.gz",
            "heart_S1_L002_R1_001.fastq.lz4",
        ] {
            assert!(IlmnFastqFile::new(filename).is_none(), "{filename}");
        }
    }
}
