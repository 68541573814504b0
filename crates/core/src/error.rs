use chrono::NaiveDate;

/// Which external service a collaborator failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collaborator {
    Patients,
    Notes,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collaborator::Patients => write!(f, "patient service"),
            Collaborator::Notes => write!(f, "notes service"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("patient not found: {0}")]
    PatientNotFound(String),
    #[error("birthdate {birthdate} is after the reference date {as_of}")]
    InvalidDate {
        birthdate: NaiveDate,
        as_of: NaiveDate,
    },
    #[error("{collaborator} unavailable: {reason}")]
    CollaboratorUnavailable {
        collaborator: Collaborator,
        reason: String,
    },
}

impl AssessmentError {
    /// Shorthand for a transport or protocol failure talking to a collaborator.
    pub fn unavailable(collaborator: Collaborator, reason: impl std::fmt::Display) -> Self {
        AssessmentError::CollaboratorUnavailable {
            collaborator,
            reason: reason.to_string(),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, AssessmentError>;
