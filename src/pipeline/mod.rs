// Per-file column pipeline: select columns, cap rows, coerce cells,
// summarize, optionally normalize and emit transformed data.
pub mod coerce;
pub mod columns;
pub mod limit;
pub mod normalize;
pub mod stats;

use std::path::Path;

use tracing::info;

use crate::diag::{DiagEvent, Diagnostics};
use crate::errors::JobError;
use crate::job::JobSpec;
use crate::output::{self, SummaryRecord};
use crate::table;

/// What one job produced, for logging and tests.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct JobReport {
    pub summary_written: bool,
    pub transformed_written: bool,
    pub columns_summarized: usize,
}

/// Run every job in list order. A failing job is reported through
/// `diag` and the batch moves on; nothing a single job does can abort
/// the run. Returns the number of failed jobs.
pub fn run_batch(
    data_dir: &Path,
    jobs: &[(String, JobSpec)],
    diag: &mut dyn Diagnostics,
) -> usize {
    let mut failures = 0;
    for (key, spec) in jobs {
        if run_job(data_dir, key, spec, diag).is_err() {
            failures += 1;
        }
    }
    failures
}

/// Run a single job end to end: resolve effective columns, load the
/// table, cap rows, coerce cell by cell, write the summary, and when
/// requested normalize and write the transformed file. Cell-scoped
/// failures only cost the single value; a `JobError` means the input
/// table itself was unusable.
#[tracing::instrument(level = "info", skip_all, fields(job = %key, file = %spec.file_name))]
pub fn run_job(
    data_dir: &Path,
    key: &str,
    spec: &JobSpec,
    diag: &mut dyn Diagnostics,
) -> Result<JobReport, JobError> {
    let Some(requested) = spec.columns.as_deref() else {
        diag.report(DiagEvent::JobSkipped {
            key: key.to_string(),
        });
        return Ok(JobReport::default());
    };

    let effective = columns::select(requested, &spec.other_parameters.do_not_include);

    let input_path = data_dir.join(&spec.file_name);
    info!(path = %input_path.display(), lines = spec.lines_to_read, "processing");

    let table = match table::load_table(&input_path) {
        Ok(table) => table,
        Err(err) => {
            diag.report(match &err {
                JobError::FileAccess { path, source } => DiagEvent::FileOpenFailed {
                    path: path.clone(),
                    reason: source.to_string(),
                },
                JobError::EmptyTable { path } => DiagEvent::EmptyTable { path: path.clone() },
            });
            return Err(err);
        }
    };

    let index = table.header_index();
    let rows = limit::limit(table.rows, spec.lines_to_read);

    // One value vector per effective column. Failed or missing cells
    // insert nothing, so column lengths may diverge.
    let mut numeric: Vec<Vec<f64>> = vec![Vec::new(); effective.len()];
    for row in &rows {
        for (slot, name) in effective.iter().enumerate() {
            match index.get(name) {
                Some(&pos) if pos < row.len() => match coerce::coerce(&row[pos]) {
                    Ok(value) => numeric[slot].push(value),
                    Err(err) => diag.report(DiagEvent::BadCell {
                        file: spec.file_name.clone(),
                        column: name.clone(),
                        cell: row[pos].clone(),
                        reason: err.to_string(),
                    }),
                },
                _ => diag.report(DiagEvent::MissingColumn {
                    file: spec.file_name.clone(),
                    column: name.clone(),
                }),
            }
        }
    }

    let mut records = Vec::new();
    for (name, values) in effective.iter().zip(&numeric) {
        if values.is_empty() {
            continue;
        }
        let (mean, stddev) = stats::summarize(values);
        info!(column = %name, mean, stddev, "column summary");
        records.push(SummaryRecord {
            column_name: name.clone(),
            mean,
            stddev,
            param_count: spec.lines_to_read,
        });
    }

    let mut report = JobReport {
        columns_summarized: records.len(),
        ..JobReport::default()
    };

    // An output that cannot be opened costs only that output; the job
    // still attempts the other one.
    let stem = output::output_stem(&spec.file_name);
    let summary_path = data_dir.join(format!("{}_summary.csv", stem));
    match output::write_summary(&summary_path, &records) {
        Ok(()) => {
            info!(path = %summary_path.display(), "summary written");
            report.summary_written = true;
        }
        Err(JobError::FileAccess { path, source }) => diag.report(DiagEvent::FileOpenFailed {
            path,
            reason: source.to_string(),
        }),
        Err(other) => return Err(other),
    }

    if spec.other_parameters.normalize {
        let mut header = Vec::new();
        let mut body = Vec::new();
        for (name, mut values) in effective.iter().zip(numeric) {
            if values.is_empty() {
                continue;
            }
            normalize::normalize(&mut values);
            header.push(name.clone());
            body.push(values);
        }

        if !header.is_empty() {
            let transformed_path = data_dir.join(format!("{}_transformed.csv", stem));
            match output::write_transformed(&transformed_path, &header, &body) {
                Ok(()) => {
                    info!(path = %transformed_path.display(), "transformed data written");
                    report.transformed_written = true;
                }
                Err(JobError::FileAccess { path, source }) => {
                    diag.report(DiagEvent::FileOpenFailed {
                        path,
                        reason: source.to_string(),
                    });
                }
                Err(other) => return Err(other),
            }
        }
    }

    Ok(report)
}
