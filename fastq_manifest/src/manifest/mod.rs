// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Writing grouped FASTQs out as a pipeline samplesheet.

pub mod oncoanalyser;
pub mod rnaseq;
pub mod sarek;
pub mod viralcon;

use crate::errors::SkippedInput;
use crate::filenames::{DetectedSamples, ReadFileSet, RecognizeFastq};
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Joins the files of one read direction when a sample spans several lanes.
pub const LANE_SEPARATOR: &str = ",";
/// Joins forward and reverse files that share a single column.
pub const PAIR_SEPARATOR: &str = ";";

/// A pipeline-specific samplesheet layout. The recognizer half decides which
/// files belong together; `make_row` turns one complete group into a row.
pub trait ManifestFormat: RecognizeFastq {
    /// Fields must be declared in the same order as the pipeline's columns.
    type Row: Serialize;

    fn pipeline(&self) -> Pipeline;

    /// Human readable sample name used when reporting a skipped sample.
    fn describe(&self, key: &Self::Key) -> String;

    /// Build the row for a sample. `files` is always complete.
    fn make_row(&self, key: &Self::Key, files: &ReadFileSet) -> Self::Row;

    /// Pipeline default for a field the filenames do not provide.
    fn default_value(&self, field: &str) -> String {
        self.pipeline()
            .spec()
            .default_value(field)
            .unwrap_or_default()
            .to_string()
    }
}

/// Join file paths with `separator`.
pub fn join_paths<'a>(paths: impl IntoIterator<Item = &'a PathBuf>, separator: &str) -> String {
    paths.into_iter().map(|p| p.display()).join(separator)
}

/// What ended up in a samplesheet and what was left out.
#[derive(Debug)]
pub struct ManifestSummary {
    pub pipeline: Pipeline,
    pub path: PathBuf,
    pub rows_written: usize,
    pub skipped: Vec<SkippedInput>,
}

impl ManifestSummary {
    pub fn unrecognized_files(&self) -> usize {
        self.skipped.iter().filter(|s| s.is_unrecognized()).count()
    }

    pub fn incomplete_samples(&self) -> usize {
        self.skipped.iter().filter(|s| s.is_incomplete()).count()
    }
}

impl fmt::Display for ManifestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} samplesheet at: {}",
            self.pipeline,
            self.path.display()
        )?;
        writeln!(f, "  samples written:            {}", self.rows_written)?;
        writeln!(f, "  unrecognized files skipped: {}", self.unrecognized_files())?;
        write!(f, "  incomplete samples skipped: {}", self.incomplete_samples())
    }
}

/// Write the samplesheet for `detected` into `output_dir`, creating the
/// directory if needed. Samples missing either read are skipped. The header is
/// written even when no sample is complete.
pub fn write_manifest<F: ManifestFormat>(
    format: &F,
    detected: DetectedSamples<F::Key>,
    output_dir: impl AsRef<Path>,
) -> Result<ManifestSummary> {
    let output_dir = output_dir.as_ref();
    let spec = format.pipeline().spec();

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Creating output directory {}", output_dir.display()))?;
    let path = output_dir.join(spec.filename);

    // csv::Writer only emits a header once the first row is serialized, so an
    // empty samplesheet would come out blank. Write the header ourselves.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| path.display().to_string())?;
    writer.write_record(spec.columns)?;

    let DetectedSamples {
        samples,
        mut skipped,
    } = detected;
    let mut rows_written = 0;
    for (key, files) in &samples {
        if !files.is_complete() {
            let skip = SkippedInput::IncompleteSample {
                sample: format.describe(key),
            };
            warn!("{skip}");
            skipped.push(skip);
            continue;
        }
        writer
            .serialize(format.make_row(key, files))
            .with_context(|| path.display().to_string())?;
        rows_written += 1;
    }
    writer.flush().with_context(|| path.display().to_string())?;

    info!(
        "Wrote {rows_written} samples to {} ({} inputs skipped)",
        path.display(),
        skipped.len()
    );
    Ok(ManifestSummary {
        pipeline: format.pipeline(),
        path,
        rows_written,
        skipped,
    })
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::filenames::{ReadDirection, SampleMap};
    use pretty_assertions::assert_eq;

    /// Serialize one row with the same writer settings as `write_manifest`.
    pub(crate) fn row_to_csv<R: Serialize>(row: &R) -> String {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(row).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    /// Header a serde row type would produce, to compare with the declared columns.
    pub(crate) fn row_header<R: Serialize>(row: &R) -> Vec<String> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(row).unwrap();
        let data = writer.into_inner().unwrap();
        let mut reader = csv::Reader::from_reader(data.as_slice());
        reader.headers().unwrap().iter().map(String::from).collect()
    }

    struct Pairs;

    impl RecognizeFastq for Pairs {
        type Key = String;

        fn recognize(&self, _filename: &str) -> Option<(String, ReadDirection)> {
            None
        }
    }

    #[derive(Serialize)]
    struct PairsRow {
        sample: String,
        fastq_1: String,
        fastq_2: String,
    }

    impl ManifestFormat for Pairs {
        type Row = PairsRow;

        fn pipeline(&self) -> Pipeline {
            Pipeline::Viralcon
        }

        fn describe(&self, key: &String) -> String {
            key.clone()
        }

        fn make_row(&self, key: &String, files: &ReadFileSet) -> PairsRow {
            PairsRow {
                sample: key.clone(),
                fastq_1: join_paths(&files.forward, LANE_SEPARATOR),
                fastq_2: join_paths(&files.reverse, LANE_SEPARATOR),
            }
        }
    }

    fn files(forward: &[&str], reverse: &[&str]) -> ReadFileSet {
        ReadFileSet {
            forward: forward.iter().map(PathBuf::from).collect(),
            reverse: reverse.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn test_join_paths() {
        let paths = [PathBuf::from("/a/x_1.fq.gz"), PathBuf::from("/a/y_1.fq.gz")];
        assert_eq!(
            join_paths(&paths, LANE_SEPARATOR),
            "/a/x_1.fq.gz,/a/y_1.fq.gz"
        );
        assert_eq!(join_paths(&paths[..1], PAIR_SEPARATOR), "/a/x_1.fq.gz");
    }

    #[test]
    fn test_write_quotes_multi_lane_fields() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut samples = SampleMap::new();
        samples.insert(
            "s1".to_string(),
            files(&["/d/s1_L1_1.fq.gz", "/d/s1_L2_1.fq.gz"], &["/d/s1_L1_2.fq.gz"]),
        );
        let detected = DetectedSamples {
            samples,
            skipped: vec![],
        };

        let summary = write_manifest(&Pairs, detected, dir.path())?;
        assert_eq!(summary.rows_written, 1);
        assert_eq!(summary.path, dir.path().join("viral_samplesheet.csv"));

        let text = std::fs::read_to_string(&summary.path)?;
        assert_eq!(
            text,
            "sample,fastq_1,fastq_2\n\
             s1,\"/d/s1_L1_1.fq.gz,/d/s1_L2_1.fq.gz\",/d/s1_L1_2.fq.gz\n"
        );

        // The comma-joined lanes come back as a single field.
        let mut reader = csv::Reader::from_path(&summary.path)?;
        let record = reader.records().next().unwrap()?;
        assert_eq!(record.len(), 3);
        assert_eq!(&record[1], "/d/s1_L1_1.fq.gz,/d/s1_L2_1.fq.gz");
        Ok(())
    }

    #[test]
    fn test_incomplete_samples_are_skipped() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut samples = SampleMap::new();
        samples.insert("fwd_only".to_string(), files(&["/d/a_1.fq.gz"], &[]));
        samples.insert("rev_only".to_string(), files(&[], &["/d/b_2.fq.gz"]));
        samples.insert(
            "paired".to_string(),
            files(&["/d/c_1.fq.gz"], &["/d/c_2.fq.gz"]),
        );
        let detected = DetectedSamples {
            samples,
            skipped: vec![SkippedInput::UnrecognizedFilename {
                filename: "weird.fastq.gz".to_string(),
            }],
        };

        let out = dir.path().join("nested").join("output");
        let summary = write_manifest(&Pairs, detected, &out)?;
        assert_eq!(summary.rows_written, 1);
        assert_eq!(summary.unrecognized_files(), 1);
        assert_eq!(summary.incomplete_samples(), 2);
        assert_eq!(
            summary.skipped[1],
            SkippedInput::IncompleteSample {
                sample: "fwd_only".to_string()
            }
        );

        let text = std::fs::read_to_string(out.join("viral_samplesheet.csv"))?;
        assert_eq!(
            text,
            "sample,fastq_1,fastq_2\npaired,/d/c_1.fq.gz,/d/c_2.fq.gz\n"
        );
        Ok(())
    }

    #[test]
    fn test_empty_writes_header() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let detected = DetectedSamples {
            samples: SampleMap::new(),
            skipped: vec![],
        };
        let summary = write_manifest(&Pairs, detected, dir.path())?;
        assert_eq!(summary.rows_written, 0);
        assert_eq!(
            std::fs::read_to_string(&summary.path)?,
            "sample,fastq_1,fastq_2\n"
        );
        Ok(())
    }

    #[test]
    fn test_summary_display() {
        let summary = ManifestSummary {
            pipeline: Pipeline::Rnaseq,
            path: PathBuf::from("output/rnaseq_samplesheet.csv"),
            rows_written: 3,
            skipped: vec![SkippedInput::UnrecognizedFilename {
                filename: "x.fastq.gz".to_string(),
            }],
        };
        assert_eq!(
            summary.to_string(),
            "Generated rnaseq samplesheet at: output/rnaseq_samplesheet.csv\n  \
             samples written:            3\n  \
             unrecognized files skipped: 1\n  \
             incomplete samples skipped: 0"
        );
    }
}
