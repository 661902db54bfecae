//! File-level conversion and parallel batch runs.
//!
//! The caller decides which files to convert and where images go; this module
//! only reads each input, runs the pipeline, writes the PNG, and keeps a
//! tally. One bad artifact never stops a batch.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::ConversionConfig;
use crate::error::{RasterError, Result};
use crate::io::error::IoError;
use crate::io::read_artifact;
use crate::pipeline::convert_bytes;
use crate::raster::ImageGeometry;

/// One input artifact and the image path it converts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// `<dir>/<base-name>.png` next to the input.
    ///
    /// For an input that is already a `.png` this names the input itself;
    /// [`convert_file`] refuses such a job.
    pub fn beside(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = input.with_extension("png");
        Self { input, output }
    }

    /// `<out_dir>/<base-name>.png`.
    pub fn into_dir(input: impl Into<PathBuf>, out_dir: &Path) -> Self {
        let input = input.into();
        let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
        name.push(".png");
        let output = out_dir.join(name);
        Self { input, output }
    }
}

/// Details of one written image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub output: PathBuf,
    pub geometry: ImageGeometry,
    pub payload_len: usize,
    /// SHA-256 of the written PNG
    pub sha256: String,
}

/// Per-job result of a batch run.
#[derive(Debug)]
pub enum JobOutcome {
    Converted(ArtifactReport),
    /// No usable payload; nothing written
    Skipped(RasterError),
    Failed(RasterError),
}

/// Tally of a batch run, with outcomes in job order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<(ConversionJob, JobOutcome)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Convert one file on disk and write its PNG, creating parent directories.
///
/// A job whose output is the input file fails with
/// [`RasterError::OutputIsInput`] before anything is read or written.
pub fn convert_file(job: &ConversionJob, config: &ConversionConfig) -> Result<ArtifactReport> {
    if same_file(&job.input, &job.output) {
        return Err(RasterError::OutputIsInput {
            path: job.output.clone(),
        });
    }
    let data = read_artifact(&job.input, &config.io).map_err(|e| map_io_error(&job.input, e))?;
    let conversion = convert_bytes(&data, config)?;

    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RasterError::io(parent, e))?;
    }
    std::fs::write(&job.output, conversion.image.as_png())
        .map_err(|e| RasterError::io(&job.output, e))?;

    debug!(
        input = %job.input.display(),
        output = %job.output.display(),
        payload = conversion.payload_len,
        "Wrote image"
    );

    Ok(ArtifactReport {
        output: job.output.clone(),
        geometry: conversion.image.geometry(),
        payload_len: conversion.payload_len,
        sha256: conversion.image.sha256_hex(),
    })
}

/// Convert every job in parallel and tally the results.
pub fn run_batch(jobs: Vec<ConversionJob>, config: &ConversionConfig) -> BatchSummary {
    info!(jobs = jobs.len(), strategy = ?config.strategy, "Starting batch");

    let outcomes: Vec<(ConversionJob, JobOutcome)> = jobs
        .into_par_iter()
        .map(|job| {
            let outcome = match convert_file(&job, config) {
                Ok(report) => JobOutcome::Converted(report),
                Err(err) if err.is_skip() => {
                    warn!(input = %job.input.display(), reason = %err, "Skipped artifact");
                    JobOutcome::Skipped(err)
                }
                Err(err) => {
                    warn!(input = %job.input.display(), error = %err, "Failed to convert artifact");
                    JobOutcome::Failed(err)
                }
            };
            (job, outcome)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (_, outcome) in &outcomes {
        match outcome {
            JobOutcome::Converted(_) => summary.converted += 1,
            JobOutcome::Skipped(_) => summary.skipped += 1,
            JobOutcome::Failed(_) => summary.failed += 1,
        }
    }
    summary.outcomes = outcomes;

    info!(
        total = summary.total(),
        converted = summary.converted,
        skipped = summary.skipped,
        failed = summary.failed,
        "Batch complete"
    );
    summary
}

// Equal paths, or two spellings of one existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn map_io_error(path: &Path, err: IoError) -> RasterError {
    match err {
        IoError::ArtifactTooLarge { limit, found } => RasterError::InputTooLarge {
            path: path.to_path_buf(),
            limit,
            found,
        },
        IoError::Read(e) => RasterError::io(path, e),
    }
}
