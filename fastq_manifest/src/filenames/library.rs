// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! FASTQs from a sequencing provider that tags each library,
//! e.g. `NG-A2794_TS219_libLAI2558_1.fastq.gz`.

use super::ReadDirection;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LIBRARY_REGEX: Regex =
        Regex::new(r"^.+?_(.+?)_libLAI\d+_([12])\.f(?:ast)?q\.gz$").unwrap();
}

/// A parsed `<project>_<sample>_libLAI<n>_<1|2>.fastq.gz` filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryFastqFile {
    pub sample: String,
    pub read: ReadDirection,
}

impl LibraryFastqFile {
    pub fn new(filename: &str) -> Option<LibraryFastqFile> {
        let cap = LIBRARY_REGEX.captures(filename)?;
        Some(LibraryFastqFile {
            sample: cap[1].to_string(),
            read: ReadDirection::from_label(&cap[2])?,
        })
    }
}
