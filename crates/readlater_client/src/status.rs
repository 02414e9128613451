use serde::Deserialize;

/// Server-side state of a saving request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavingRequestStatus {
    Processing,
    Succeeded,
    Failed,
}

/// Client-facing status of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveArticleStatus {
    Succeeded,
    Processing { job_id: String },
    Failed,
}

impl SaveArticleStatus {
    pub fn make(job_id: impl Into<String>, status: SavingRequestStatus) -> Self {
        match status {
            SavingRequestStatus::Processing => SaveArticleStatus::Processing {
                job_id: job_id.into(),
            },
            SavingRequestStatus::Succeeded => SaveArticleStatus::Succeeded,
            SavingRequestStatus::Failed => SaveArticleStatus::Failed,
        }
    }

    /// A terminal status will not change on further polls.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SaveArticleStatus::Processing { .. })
    }

    pub fn job_id(&self) -> Option<&str> {
        match self {
            SaveArticleStatus::Processing { job_id } => Some(job_id),
            _ => None,
        }
    }
}
