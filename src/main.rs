use anyhow::Context;
use clap::Parser;
use row_roster::utils::error::{ErrorSeverity, RowRosterError};
use row_roster::utils::{logger, validation::Validate};
use row_roster::{CliConfig, JobConfig, JobRunner, RosterConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting row-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let job = match &config.config {
        Some(path) => JobConfig::from_file(path)
            .with_context(|| format!("failed to load job file {}", path))?,
        None => {
            let rosters = if config.names.is_empty() {
                Vec::new()
            } else {
                vec![RosterConfig {
                    name: "cli".to_string(),
                    names: config.names.clone(),
                }]
            };
            JobConfig::from_parts("cli", config.rows.clone(), rosters)
        }
    };

    if let Err(e) = job.validate() {
        tracing::error!("❌ Job validation failed: {}", e);
        exit_with(&e);
    }

    let report = JobRunner::new(job).run();

    if config.json {
        match report.to_json() {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                tracing::error!("❌ Report encoding failed: {}", e);
                exit_with(&e);
            }
        }
    } else {
        print!("{}", report.render_text());
    }

    if report.has_failures() {
        std::process::exit(ErrorSeverity::High.exit_code());
    }

    Ok(())
}

fn exit_with(e: &RowRosterError) -> ! {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.severity().exit_code());
}
