pub mod first_names;
pub mod job;
pub mod row_value;

pub use crate::domain::model::{DigitEntry, JobReport, RosterOutcome, RowOutcome};
pub use crate::utils::error::Result;
