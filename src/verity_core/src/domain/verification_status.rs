use std::fmt;

/// Status reported by the provider after a code check.
///
/// Unknown values are kept verbatim so they can be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Approved,
    Pending,
    Canceled,
    MaxAttemptsReached,
    Deleted,
    Failed,
    Expired,
    Other(String),
}

impl VerificationStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Canceled => "canceled",
            Self::MaxAttemptsReached => "max_attempts_reached",
            Self::Deleted => "deleted",
            Self::Failed => "failed",
            Self::Expired => "expired",
            Self::Other(status) => status,
        }
    }
}

impl From<&str> for VerificationStatus {
    fn from(status: &str) -> Self {
        match status {
            "approved" => Self::Approved,
            "pending" => Self::Pending,
            "canceled" => Self::Canceled,
            "max_attempts_reached" => Self::MaxAttemptsReached,
            "deleted" => Self::Deleted,
            "failed" => Self::Failed,
            "expired" => Self::Expired,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
