// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Interactive prompts for the pipeline and the FASTQ directory.

use anyhow::{Context, Result, bail};
use fastq_manifest::Pipeline;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// The numbered list of pipelines shown before asking for a choice.
pub fn pipeline_menu() -> String {
    let mut menu = String::from("Available pipelines:\n");
    for (i, pipeline) in Pipeline::iter().enumerate() {
        menu += &format!("{}. {pipeline} - {}\n", i + 1, pipeline.spec().description);
    }
    menu
}

/// Read one trimmed line. Running out of input is an error.
fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line).context("Reading from stdin")? == 0 {
        bail!("Reached end of input while waiting for an answer");
    }
    Ok(line.trim().to_string())
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    read_answer(input)
}

/// Ask for a pipeline by its number until a valid one is given.
pub fn choose_pipeline(input: &mut impl BufRead, output: &mut impl Write) -> Result<Pipeline> {
    write!(output, "{}", pipeline_menu())?;
    loop {
        let answer = ask(input, output, "Enter pipeline number: ")?;
        if let Some(pipeline) = answer.parse().ok().and_then(Pipeline::from_ordinal) {
            return Ok(pipeline);
        }
        writeln!(output, "Invalid selection. Please try again.")?;
    }
}

/// Ask for the FASTQ directory until an existing directory is given.
pub fn choose_fastq_dir(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    loop {
        let answer = ask(
            input,
            output,
            "Enter the full path to the directory containing FastQ files: ",
        )?;
        let path = PathBuf::from(&answer);
        if !answer.is_empty() && path.is_dir() {
            return Ok(path);
        }
        writeln!(
            output,
            "Error: Directory not found: {answer}. Please try again."
        )?;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_menu() {
        assert_eq!(
            pipeline_menu(),
            "Available pipelines:\n\
             1. sarek - Sarek pipeline for variant calling (WES/WGS)\n\
             2. oncoanalyser - Oncoanalyser pipeline for cancer analysis (DNA/RNA)\n\
             3. rnaseq - RNAseq pipeline for transcriptome analysis\n\
             4. viralcon - Viralcon pipeline for viral genome analysis\n"
        );
    }

    #[test]
    fn test_choose_pipeline_reprompts() -> Result<()> {
        let mut input = Cursor::new("rnaseq\n0\n9\n  3 \n");
        let mut output = Vec::new();
        let pipeline = choose_pipeline(&mut input, &mut output)?;
        assert_eq!(pipeline, Pipeline::Rnaseq);

        let output = String::from_utf8(output)?;
        assert_eq!(
            output.matches("Invalid selection. Please try again.").count(),
            3
        );
        assert_eq!(output.matches("Enter pipeline number: ").count(), 4);
        Ok(())
    }

    #[test]
    fn test_choose_pipeline_eof() {
        let mut input = Cursor::new("x\n");
        let mut output = Vec::new();
        assert!(choose_pipeline(&mut input, &mut output).is_err());
    }

    #[test]
    fn test_choose_fastq_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing");
        let answers = format!("\n{}\n{}\n", missing.display(), dir.path().display());
        let mut input = Cursor::new(answers);
        let mut output = Vec::new();

        let path = choose_fastq_dir(&mut input, &mut output)?;
        assert_eq!(path, dir.path());

        let output = String::from_utf8(output)?;
        assert!(output.contains(&format!(
            "Error: Directory not found: {}. Please try again.",
            missing.display()
        )));
        assert_eq!(output.matches("Error: Directory not found").count(), 2);
        Ok(())
    }
}
