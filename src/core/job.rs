use crate::config::toml_config::{JobConfig, RosterConfig};
use crate::core::first_names::find_first_names;
use crate::core::row_value::calc_row_value;
use crate::domain::model::{JobReport, RosterOutcome, RowOutcome};

/// Runs every row and roster of a job. A failing entry is recorded in the
/// report and the rest of the batch keeps going.
pub struct JobRunner {
    config: JobConfig,
}

impl JobRunner {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> JobReport {
        tracing::info!("Starting job '{}'", self.config.job.name);

        tracing::info!("Scoring {} rows...", self.config.rows.len());
        let rows: Vec<RowOutcome> = self.config.rows.iter().map(|row| score_row(row)).collect();

        tracing::info!("Parsing {} rosters...", self.config.rosters.len());
        let rosters: Vec<RosterOutcome> = self.config.rosters.iter().map(parse_roster).collect();

        let report = JobReport {
            job: self.config.job.name.clone(),
            rows,
            rosters,
        };

        if report.has_failures() {
            tracing::warn!(
                "Job '{}' finished with {} failed entries",
                report.job,
                report.failure_count()
            );
        } else {
            tracing::info!("Job '{}' finished", report.job);
        }
        report
    }
}

fn score_row(row: &str) -> RowOutcome {
    match calc_row_value(row) {
        Ok(value) => RowOutcome {
            input: row.to_string(),
            value: Some(value),
            error: None,
        },
        Err(e) => RowOutcome {
            input: row.to_string(),
            value: None,
            error: Some(e.to_string()),
        },
    }
}

fn parse_roster(roster: &RosterConfig) -> RosterOutcome {
    match find_first_names(roster.names.as_slice()) {
        Ok(first_names) => {
            tracing::debug!("Roster '{}': {} first names", roster.name, first_names.len());
            RosterOutcome {
                name: roster.name.clone(),
                first_names: Some(first_names),
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!("Roster '{}' failed: {}", roster.name, e);
            RosterOutcome {
                name: roster.name.clone(),
                first_names: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(name: &str, names: &[&str]) -> RosterConfig {
        RosterConfig {
            name: name.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_run_scores_rows_and_rosters() {
        let config = JobConfig::from_parts(
            "unit",
            vec!["1234".to_string(), "abc".to_string()],
            vec![roster("class", &["Nicholas Jones", "ashley Parker"])],
        );
        let report = JobRunner::new(config).run();

        assert_eq!(report.job, "unit");
        assert_eq!(report.rows[0].value, Some(-20));
        assert!(report.rows[1].error.is_some());
        assert_eq!(
            report.rosters[0].first_names,
            Some(vec!["Ashley".to_string(), "Nicholas".to_string()])
        );
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_failing_roster_does_not_stop_the_batch() {
        let config = JobConfig::from_parts(
            "unit",
            vec![],
            vec![roster("broken", &["Ann Lee", ""]), roster("ok", &["Bo Chen"])],
        );
        let report = JobRunner::new(config).run();

        assert!(report.rosters[0].error.is_some());
        assert_eq!(report.rosters[1].first_names, Some(vec!["Bo".to_string()]));
        assert!(report.has_failures());
    }
}
