use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// One configured unit of work over exactly one input table. Immutable
/// once read; one `JobSpec` drives one pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSpec {
    /// Input file name, resolved relative to the data directory.
    pub file_name: String,
    /// Cap on the number of data rows read. Zero or below means unlimited.
    #[serde(default)]
    pub lines_to_read: i64,
    /// Columns to process, in order. Absent means the job is skipped.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub other_parameters: OtherParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherParams {
    /// Exclusion terms: a requested column containing any of these as a
    /// substring is dropped from processing.
    #[serde(default)]
    pub do_not_include: Vec<String>,
    /// When true, min-max normalize each column and write a
    /// `*_transformed.csv` next to the summary.
    #[serde(default)]
    pub normalize: bool,
}

/// Load the JSON job file: an object mapping job keys to job specs,
/// returned in file order. Failure here is fatal to the whole run.
pub fn load_job_list(path: &Path) -> Result<Vec<(String, JobSpec)>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to open job file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse job file {}", path.display()))?;
    let object = value
        .as_object()
        .context("job file must be a JSON object of job-key to job spec")?;

    let mut jobs = Vec::with_capacity(object.len());
    for (key, spec) in object {
        let spec: JobSpec = serde_json::from_value(spec.clone())
            .with_context(|| format!("invalid job spec for key {:?}", key))?;
        jobs.push((key.clone(), spec));
    }
    Ok(jobs)
}
