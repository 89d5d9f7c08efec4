use thiserror::Error;

/// A field value (or a statistics snapshot) violated its stated constraint.
///
/// Raised at the point of construction or mutation; the state that was being
/// changed is always left as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Course cannot be empty")]
    EmptyCourse,

    #[error("Marks must be between 0 and 100 (got {0})")]
    MarksOutOfRange(f64),

    #[error("Unknown grade '{0}' (expected one of A+, A, B, C, D, F)")]
    UnknownGrade(String),

    #[error("Inconsistent statistics: {0}")]
    InconsistentStatistics(String),
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
