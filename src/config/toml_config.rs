use crate::utils::error::{Result, RowRosterError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch job description loaded from a TOML file.
///
/// `rows` is a top-level key, so it has to appear before the `[job]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub rows: Vec<String>,
    pub job: JobSection,
    #[serde(default)]
    pub rosters: Vec<RosterConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub name: String,
    #[serde(default)]
    pub names: Vec<String>,
}

impl JobConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RowRosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RowRosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RowRosterError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds an ad-hoc job from command-line rows and rosters.
    pub fn from_parts(name: &str, rows: Vec<String>, rosters: Vec<RosterConfig>) -> Self {
        Self {
            rows,
            job: JobSection {
                name: name.to_string(),
                description: None,
            },
            rosters,
        }
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;

        for roster in &self.rosters {
            validation::validate_non_empty_string("rosters.name", &roster.name)?;
        }
        validation::validate_unique("rosters.name", self.rosters.iter().map(|r| r.name.as_str()))?;

        if self.rows.is_empty() && self.rosters.is_empty() {
            return Err(RowRosterError::MissingConfigError {
                field: "rows or rosters".to_string(),
            });
        }

        Ok(())
    }
}
