// New cycle form: validates raw user input before the start command is issued.
//
// The store trusts its caller, so every path that starts a cycle from user input goes through here.

use serde::{Deserialize, Serialize};

pub const MIN_MINUTES_AMOUNT: i64 = 5;
pub const MAX_MINUTES_AMOUNT: i64 = 60;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCycleForm {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub minutes_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid input: {} field error(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewCycle {
    pub task: String,
    pub minutes_amount: u32,
}

impl NewCycleForm {
    pub fn validate(self) -> Result<ValidNewCycle, ValidationErrors> {
        let mut errors = Vec::new();
        let task = self.task.trim().to_string();
        if task.is_empty() {
            errors.push(FieldError {
                field: "task",
                message: "Inform the task",
            });
        }
        if self.minutes_amount < MIN_MINUTES_AMOUNT {
            errors.push(FieldError {
                field: "minutesAmount",
                message: "The cycle must be at least 5 minutes.",
            });
        } else if self.minutes_amount > MAX_MINUTES_AMOUNT {
            errors.push(FieldError {
                field: "minutesAmount",
                message: "The cycle must be at most 60 minutes.",
            });
        }
        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }
        Ok(ValidNewCycle {
            task,
            minutes_amount: self.minutes_amount as u32,
        })
    }
}
