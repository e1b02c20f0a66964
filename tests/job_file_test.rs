use row_roster::utils::validation::Validate;
use row_roster::{JobConfig, JobRunner};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_demo_job_file() -> anyhow::Result<()> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/class_demo.toml");
    let config = JobConfig::from_file(&path)?;
    config.validate()?;

    let report = JobRunner::new(config).run();

    assert_eq!(report.job, "class-demo");
    assert_eq!(report.rows[0].value, Some(-45));
    // Trailing letter fails the integer-literal check.
    assert!(report.rows[1].error.is_some());
    assert_eq!(report.rows[2].value, Some(-20));

    let testcase3 = &report.rosters[2];
    let first_names = testcase3.first_names.as_ref().unwrap();
    assert_eq!(first_names.len(), 21);
    assert_eq!(first_names[0], "Alexandra");
    assert!(first_names.contains(&"Daniel".to_string()));
    assert_eq!(report.failure_count(), 1);
    Ok(())
}

#[test]
fn test_job_file_with_env_substitution() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("job.toml");
    std::env::set_var("ROW_ROSTER_TEST_JOB_NAME", "from-env");
    std::fs::write(
        &path,
        r#"
rows = ["99"]

[job]
name = "${ROW_ROSTER_TEST_JOB_NAME}"

[[rosters]]
name = "small"
names = ["zoe Quinn", "Adam West"]
"#,
    )?;

    let config = JobConfig::from_file(&path)?;
    config.validate()?;
    let report = JobRunner::new(config).run();

    assert_eq!(report.job, "from-env");
    assert_eq!(report.rows[0].value, Some(9 - 45));
    assert_eq!(
        report.rosters[0].first_names,
        Some(vec!["Adam".to_string(), "Zoe".to_string()])
    );
    assert!(!report.has_failures());
    Ok(())
}

#[test]
fn test_missing_job_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = JobConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_report_serializes_to_json() -> anyhow::Result<()> {
    let config = JobConfig::from_toml_str("rows = [\"1234\", \"x\"]\n[job]\nname = \"json\"\n")?;
    let report = JobRunner::new(config).run();
    let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

    assert_eq!(json["job"], "json");
    assert_eq!(json["rows"][0]["value"], -20);
    assert!(json["rows"][0].get("error").is_none());
    assert!(json["rows"][1]["error"].is_string());

    let text = report.render_text();
    assert!(text.contains("1234 => -20"));
    assert!(text.contains("x => error:"));
    Ok(())
}
