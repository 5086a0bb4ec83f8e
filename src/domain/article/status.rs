use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Workflow state of an article version. The integer codes are the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum WorkflowStatus {
    /// Matches every status; only meaningful as a query filter.
    Any,
    Approved,
    Pending,
    Draft,
    Expired,
    Denied,
    Inactive,
    Incomplete,
    Scheduled,
    InTrash,
}

impl WorkflowStatus {
    pub fn code(&self) -> i32 {
        match self {
            WorkflowStatus::Any => -1,
            WorkflowStatus::Approved => 0,
            WorkflowStatus::Pending => 1,
            WorkflowStatus::Draft => 2,
            WorkflowStatus::Expired => 3,
            WorkflowStatus::Denied => 4,
            WorkflowStatus::Inactive => 5,
            WorkflowStatus::Incomplete => 6,
            WorkflowStatus::Scheduled => 7,
            WorkflowStatus::InTrash => 8,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        let status = match code {
            -1 => WorkflowStatus::Any,
            0 => WorkflowStatus::Approved,
            1 => WorkflowStatus::Pending,
            2 => WorkflowStatus::Draft,
            3 => WorkflowStatus::Expired,
            4 => WorkflowStatus::Denied,
            5 => WorkflowStatus::Inactive,
            6 => WorkflowStatus::Incomplete,
            7 => WorkflowStatus::Scheduled,
            8 => WorkflowStatus::InTrash,
            _ => return None,
        };
        Some(status)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Any => "any",
            WorkflowStatus::Approved => "approved",
            WorkflowStatus::Pending => "pending",
            WorkflowStatus::Draft => "draft",
            WorkflowStatus::Expired => "expired",
            WorkflowStatus::Denied => "denied",
            WorkflowStatus::Inactive => "inactive",
            WorkflowStatus::Incomplete => "incomplete",
            WorkflowStatus::Scheduled => "scheduled",
            WorkflowStatus::InTrash => "in_trash",
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, WorkflowStatus::Any)
    }
}

impl TryFrom<i32> for WorkflowStatus {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        WorkflowStatus::from_code(code)
            .ok_or_else(|| DomainError::Validation(format!("unknown workflow status {code}")))
    }
}

impl From<WorkflowStatus> for i32 {
    fn from(value: WorkflowStatus) -> Self {
        value.code()
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the author asked the workflow to do with a submitted version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowAction {
    #[default]
    Publish,
    SaveDraft,
}

impl WorkflowAction {
    pub fn resulting_status(&self) -> WorkflowStatus {
        match self {
            WorkflowAction::Publish => WorkflowStatus::Approved,
            WorkflowAction::SaveDraft => WorkflowStatus::Draft,
        }
    }
}

impl FromStr for WorkflowAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(WorkflowAction::Publish),
            "save_draft" => Ok(WorkflowAction::SaveDraft),
            other => Err(DomainError::Validation(format!(
                "unknown workflow action '{other}'"
            ))),
        }
    }
}
