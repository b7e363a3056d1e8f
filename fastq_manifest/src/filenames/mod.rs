// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Utilities for finding paired FASTQ files on disk and grouping them by sample.

pub mod clinical;
pub mod illumina;
pub mod library;

use crate::errors::{ManifestError, SkippedInput};
use anyhow::{Context, Result, bail};
use glob::{MatchOptions, Pattern};
use itertools::Itertools;
use lazy_static::lazy_static;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

lazy_static! {
    /// Anything that looks like a compressed FASTQ: `.fastq.gz`, `.fq.gz`, ...
    static ref FASTQ_GLOB: Pattern = Pattern::new("*.f*q*.gz").unwrap();
}

const FASTQ_GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Which member of a read pair a file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadDirection {
    /// Read 1
    Forward,
    /// Read 2
    Reverse,
}

impl ReadDirection {
    /// Parse a read label as it appears in a filename: `R1`, `R2`, `1` or `2`.
    pub fn from_label(label: &str) -> Option<ReadDirection> {
        match label.strip_prefix('R').unwrap_or(label) {
            "1" => Some(ReadDirection::Forward),
            "2" => Some(ReadDirection::Reverse),
            _ => None,
        }
    }
}

/// The forward and reverse files collected for one sample.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadFileSet {
    pub forward: Vec<PathBuf>,
    pub reverse: Vec<PathBuf>,
}

impl ReadFileSet {
    pub fn push(&mut self, read: ReadDirection, path: PathBuf) {
        match read {
            ReadDirection::Forward => self.forward.push(path),
            ReadDirection::Reverse => self.reverse.push(path),
        }
    }

    /// Both members of the pair are present.
    pub fn is_complete(&self) -> bool {
        !self.forward.is_empty() && !self.reverse.is_empty()
    }

    fn sort(&mut self) {
        self.forward.sort();
        self.reverse.sort();
    }
}

/// Files grouped by sample key.
pub type SampleMap<K> = BTreeMap<K, ReadFileSet>;

/// Maps a FASTQ filename to the sample it belongs to and the read it holds.
/// Each pipeline names its files differently, so each one provides its own
/// implementation.
pub trait RecognizeFastq {
    type Key: Ord + Clone + Debug;

    fn recognize(&self, filename: &str) -> Option<(Self::Key, ReadDirection)>;
}

/// Result of scanning a directory.
#[derive(Debug)]
pub struct DetectedSamples<K> {
    pub samples: SampleMap<K>,
    /// FASTQ-looking files the recognizer could not parse
    pub skipped: Vec<SkippedInput>,
}

/// Find the files directly inside `path` that look like compressed FASTQs.
/// The result is sorted.
pub fn find_fastq_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| path.display().to_string())?
        .map_ok(|f| f.path())
        .filter_ok(|f| f.is_file() && filename(f).is_some_and(is_fastq_name))
        .try_collect()
        .with_context(|| path.display().to_string())?;
    files.sort();
    Ok(files)
}

fn filename(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}

fn is_fastq_name(name: &str) -> bool {
    FASTQ_GLOB.matches_with(name, FASTQ_GLOB_OPTIONS)
}

/// Scan `fastq_path` and group every recognized FASTQ under its sample key.
/// Files that look like FASTQs but are not recognized are logged and returned
/// in `skipped`.
pub fn detect_samples<R: RecognizeFastq>(
    fastq_path: impl AsRef<Path>,
    recognizer: &R,
) -> Result<DetectedSamples<R::Key>> {
    let fastq_path = fastq_path.as_ref();
    if !fastq_path.is_dir() {
        bail!(ManifestError::DirectoryNotFound {
            path: fastq_path.to_path_buf(),
        });
    }

    let mut samples = SampleMap::new();
    let mut skipped = Vec::new();

    for path in find_fastq_files(fastq_path)? {
        let Some(name) = filename(&path) else {
            continue;
        };
        match recognizer.recognize(name) {
            Some((key, read)) => {
                debug!("{name}: {key:?} {read:?}");
                samples.entry(key).or_default().push(read, path);
            }
            None => {
                let skip = SkippedInput::UnrecognizedFilename {
                    filename: name.to_string(),
                };
                warn!("{skip}");
                skipped.push(skip);
            }
        }
    }

    for files in samples.values_mut() {
        files.sort();
    }

    Ok(DetectedSamples { samples, skipped })
}
