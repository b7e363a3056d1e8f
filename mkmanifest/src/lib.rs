// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Command line front end for `fastq_manifest`.
#![deny(missing_docs)]

pub mod logging;
pub mod prompt;
pub mod utils;
