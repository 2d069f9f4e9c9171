use csvcrunch::diag::{DiagEvent, MemoryDiagnostics};
use csvcrunch::{job, pipeline};
use std::fs;
use tempfile::tempdir;

/// Whole-batch run over real files: one normalized job, one plain job,
/// one job with no columns entry, and one job whose input is missing.
#[test]
fn batch_produces_best_effort_partial_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("measurements.csv"),
        "a,b\n1,2\n3,x\n5,6\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("ages.csv"),
        "age,age_group,income\n30,young,100\n40,old,200\n50,old,300\n",
    )
    .unwrap();

    let job_file = dir.path().join("parameters.json");
    fs::write(
        &job_file,
        r#"{
            "measurements.csv": {
                "file_name": "measurements.csv",
                "lines_to_read": 0,
                "columns": ["a", "b"],
                "other_parameters": { "normalize": true }
            },
            "ages.csv": {
                "file_name": "ages.csv",
                "lines_to_read": 2,
                "columns": ["age", "age_group", "income"],
                "other_parameters": { "do_not_include": ["group"] }
            },
            "no-columns": {
                "file_name": "ages.csv",
                "lines_to_read": 0
            },
            "missing": {
                "file_name": "nowhere.csv",
                "lines_to_read": 0,
                "columns": ["a"]
            }
        }"#,
    )
    .unwrap();

    let jobs = job::load_job_list(&job_file).unwrap();
    assert_eq!(jobs.len(), 4);

    let mut diag = MemoryDiagnostics::default();
    let failures = pipeline::run_batch(dir.path(), &jobs, &mut diag);
    assert_eq!(failures, 1, "only the missing-input job fails");

    // job 1: summary from the raw values, transformed from normalization
    let summary = fs::read_to_string(dir.path().join("measurements_summary.csv")).unwrap();
    assert_eq!(
        summary,
        "column_name,mean,stddev,param_count\na,3.00,1.63,0\nb,4.00,2.00,0\n"
    );
    let transformed =
        fs::read_to_string(dir.path().join("measurements_transformed.csv")).unwrap();
    assert_eq!(transformed, "a,b\n0,0\n0.5,1\n1,\n");

    // job 2: row cap applies, excluded column is absent, param_count is
    // the requested cap
    let summary = fs::read_to_string(dir.path().join("ages_summary.csv")).unwrap();
    assert_eq!(
        summary,
        "column_name,mean,stddev,param_count\nage,35.00,5.00,2\nincome,150.00,50.00,2\n"
    );
    assert!(!dir.path().join("ages_transformed.csv").exists());

    // job 3 produced nothing and job 4 failed, both without stopping
    // the batch
    assert!(diag
        .events
        .iter()
        .any(|e| matches!(e, DiagEvent::JobSkipped { key } if key == "no-columns")));
    assert!(diag
        .events
        .iter()
        .any(|e| matches!(e, DiagEvent::FileOpenFailed { path, .. } if path.contains("nowhere.csv"))));
    assert!(diag
        .events
        .iter()
        .any(|e| matches!(e, DiagEvent::BadCell { cell, .. } if cell == "x")));
}
