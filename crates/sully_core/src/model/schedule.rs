//! Schedule app records: supervised to-do tasks and anniversaries.
//!
//! # Invariants
//! - `Task.completed_at` is `Some` exactly when `is_completed` is true.
//! - Deadline and anniversary dates are `YYYY-MM-DD` strings.
//! - Reminder phrasing driven by `tone` lives in external logic; the tone is
//!   plain data here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::character::CharacterId;
use crate::model::new_id;
use crate::model::timefmt::is_calendar_date;

/// How the supervising character phrases reminders for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupervisionTone {
    Gentle,
    Strict,
    Tsundere,
}

/// A to-do item supervised by a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Weak reference to the supervising `CharacterProfile.id`.
    pub supervisor_id: CharacterId,
    pub tone: SupervisionTone,
    /// Optional deadline day, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub is_completed: bool,
    /// Present exactly when `is_completed` is true. Epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an open task with a fresh id and no deadline.
    pub fn new(
        title: impl Into<String>,
        supervisor_id: impl Into<CharacterId>,
        tone: SupervisionTone,
        now: i64,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            supervisor_id: supervisor_id.into(),
            tone,
            deadline: None,
            is_completed: false,
            completed_at: None,
            created_at: now,
        }
    }

    /// Marks the task done, recording the completion time.
    pub fn complete(&mut self, now: i64) {
        self.is_completed = true;
        self.completed_at = Some(now);
    }

    /// Reopens a completed task, clearing the completion time.
    pub fn reopen(&mut self) {
        self.is_completed = false;
        self.completed_at = None;
    }

    /// Checks the completion-timestamp invariant and the deadline format.
    pub fn validate(&self) -> Result<(), ScheduleValidationError> {
        match (self.is_completed, self.completed_at) {
            (true, None) => return Err(ScheduleValidationError::MissingCompletionTimestamp),
            (false, Some(at)) => {
                return Err(ScheduleValidationError::UnexpectedCompletionTimestamp(at));
            }
            _ => {}
        }
        if let Some(deadline) = &self.deadline {
            if !is_calendar_date(deadline) {
                return Err(ScheduleValidationError::InvalidDate {
                    field: "deadline",
                    value: deadline.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A dated event tied to a character, with a cached AI reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anniversary {
    pub id: String,
    pub title: String,
    /// Event day, `YYYY-MM-DD`.
    pub date: String,
    /// Weak reference to `CharacterProfile.id`.
    pub char_id: CharacterId,
    /// Cached generated reflection. Invalidation policy is external.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_thought: Option<String>,
    /// When `ai_thought` was generated. Epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_thought_generated_at: Option<i64>,
}

impl Anniversary {
    /// Creates an anniversary with a fresh id and no cached reflection.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        char_id: impl Into<CharacterId>,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            date: date.into(),
            char_id: char_id.into(),
            ai_thought: None,
            last_thought_generated_at: None,
        }
    }

    /// Stores a freshly generated reflection and its generation time.
    pub fn cache_thought(&mut self, thought: impl Into<String>, now: i64) {
        self.ai_thought = Some(thought.into());
        self.last_thought_generated_at = Some(now);
    }

    /// Checks the event date format.
    pub fn validate(&self) -> Result<(), ScheduleValidationError> {
        if !is_calendar_date(&self.date) {
            return Err(ScheduleValidationError::InvalidDate {
                field: "date",
                value: self.date.clone(),
            });
        }
        Ok(())
    }
}

/// Shape violation on a schedule record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleValidationError {
    MissingCompletionTimestamp,
    UnexpectedCompletionTimestamp(i64),
    InvalidDate { field: &'static str, value: String },
}

impl Display for ScheduleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCompletionTimestamp => {
                write!(f, "completed task is missing its completion timestamp")
            }
            Self::UnexpectedCompletionTimestamp(at) => {
                write!(f, "open task carries a completion timestamp ({at})")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} `{value}` is not a YYYY-MM-DD calendar date")
            }
        }
    }
}

impl Error for ScheduleValidationError {}
