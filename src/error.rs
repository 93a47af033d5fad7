use std::path::PathBuf;

use thiserror::Error;

/// Failures while pulling an import file off disk.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    pub fn code(&self) -> &'static str {
        match self {
            ImportError::Unreadable { .. } => "file_unreadable",
        }
    }
}

/// Refusals raised by the wizard controller. None of them touch session state.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("student not on roster: {0}")]
    UnknownStudent(String),

    #[error("competence not in active rubric: {0}")]
    UnknownCompetence(String),

    #[error("score must be between 1 and 4, got {0}")]
    ScoreOutOfRange(i64),

    #[error("cannot leave {step} step: {reason}")]
    StepBlocked {
        step: &'static str,
        reason: &'static str,
    },
}

impl SessionError {
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::Import(e) => e.code(),
            SessionError::UnknownStudent(_) | SessionError::UnknownCompetence(_) => "not_found",
            SessionError::ScoreOutOfRange(_) => "bad_params",
            SessionError::StepBlocked { .. } => "step_blocked",
        }
    }
}
