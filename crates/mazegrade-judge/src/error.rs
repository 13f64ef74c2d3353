//! Failure taxonomy for grading.

use std::fmt;

use mazegrade_core::Cell;
use mazegrade_env::GenerateError;

/// Every distinguishable reason a trial can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    EmptyPath,
    WrongStart,
    WrongEnd,
    IllegalJump,
    Collision,
    Suboptimal,
    AccessDenied,
    SolverCrashed,
    QueryBudgetExceeded,
}

impl ErrorKind {
    /// Whether the solver returned a path that failed validation, as
    /// opposed to misbehaving while searching.
    pub fn is_validation(self) -> bool {
        matches!(
            self,
            Self::EmptyPath
                | Self::WrongStart
                | Self::WrongEnd
                | Self::IllegalJump
                | Self::Collision
                | Self::Suboptimal
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EmptyPath => "empty path",
            Self::WrongStart => "wrong start",
            Self::WrongEnd => "wrong end",
            Self::IllegalJump => "illegal jump",
            Self::Collision => "collision",
            Self::Suboptimal => "suboptimal",
            Self::AccessDenied => "access denied",
            Self::SolverCrashed => "solver crashed",
            Self::QueryBudgetExceeded => "query budget exceeded",
        };
        f.write_str(s)
    }
}

/// Why a candidate path was rejected.
///
/// `index` is the position in the path of the offending cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyPath,
    WrongStart { expected: Cell, found: Cell },
    WrongEnd { expected: Cell, found: Cell },
    IllegalJump { index: usize, from: Cell, to: Cell },
    Collision { index: usize, from: Cell, to: Cell },
    Suboptimal { actual: usize, minimum: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPath => ErrorKind::EmptyPath,
            Self::WrongStart { .. } => ErrorKind::WrongStart,
            Self::WrongEnd { .. } => ErrorKind::WrongEnd,
            Self::IllegalJump { .. } => ErrorKind::IllegalJump,
            Self::Collision { .. } => ErrorKind::Collision,
            Self::Suboptimal { .. } => ErrorKind::Suboptimal,
        }
    }

    /// Path index of the failing step, for movement failures.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::IllegalJump { index, .. } | Self::Collision { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(
                f,
                "empty path: the result must be a non-empty sequence of cells"
            ),
            Self::WrongStart { expected, found } => write!(
                f,
                "invalid start: path must start at {expected}, but started at {found}"
            ),
            Self::WrongEnd { expected, found } => write!(
                f,
                "invalid end: path must end at {expected}, but ended at {found}"
            ),
            Self::IllegalJump { index, from, to } => write!(
                f,
                "illegal jump at step {index}: movement from {from} to {to} is not adjacent"
            ),
            Self::Collision { index, from, to } => write!(
                f,
                "collision at step {index}: {to} is a wall or out of bounds from {from}"
            ),
            Self::Suboptimal { actual, minimum } => write!(
                f,
                "suboptimal path: your path took {actual} steps, but the best possible is {minimum}"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of a failed trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The solver returned a path that does not hold up.
    Invalid(ValidationError),
    /// The solver tried to read the grid of a blind maze.
    AccessDenied,
    /// The solver panicked or returned an error.
    SolverCrashed(String),
    /// The solver exhausted its successor-query budget.
    QueryBudgetExceeded { limit: usize },
}

impl Failure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid(e) => e.kind(),
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::SolverCrashed(_) => ErrorKind::SolverCrashed,
            Self::QueryBudgetExceeded { .. } => ErrorKind::QueryBudgetExceeded,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::AccessDenied => write!(
                f,
                "access denied: the maze is blind, explore it with successors()"
            ),
            Self::SolverCrashed(msg) => {
                write!(f, "solver crashed with an unexpected error: {msg}")
            }
            Self::QueryBudgetExceeded { limit } => {
                write!(f, "solver exceeded its budget of {limit} successor queries")
            }
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

/// The first failing trial of a batch, escalated to a hard stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialFailure {
    /// Zero-based trial index.
    pub index: usize,
    /// Seed of the failing maze; `None` for the fixed maze.
    pub seed: Option<u64>,
    pub failure: Failure,
}

impl fmt::Display for TrialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = if self.failure.kind().is_validation() {
            "validation failed"
        } else {
            "solver failed"
        };
        write!(f, "{what} on test {}", self.index + 1)?;
        if let Some(seed) = self.seed {
            write!(f, " (seed {seed})")?;
        }
        write!(f, ": {}", self.failure)
    }
}

impl std::error::Error for TrialFailure {}

/// Errors returned by [`Judge`](crate::Judge) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeError {
    /// The maze could not be generated.
    Generate(GenerateError),
    /// A trial failed and the judge is configured to escalate.
    Trial(TrialFailure),
}

impl JudgeError {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Generate(_) => None,
            Self::Trial(t) => Some(t.failure.kind()),
        }
    }
}

impl fmt::Display for JudgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate(e) => write!(f, "{e}"),
            Self::Trial(t) => write!(f, "{t}"),
        }
    }
}

impl std::error::Error for JudgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generate(e) => Some(e),
            Self::Trial(t) => Some(t),
        }
    }
}

impl From<GenerateError> for JudgeError {
    fn from(e: GenerateError) -> Self {
        Self::Generate(e)
    }
}

impl From<TrialFailure> for JudgeError {
    fn from(t: TrialFailure) -> Self {
        Self::Trial(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        let e = ValidationError::Collision {
            index: 1,
            from: Cell::new(0, 0),
            to: Cell::new(0, 1),
        };
        assert_eq!(e.kind(), ErrorKind::Collision);
        assert_eq!(e.index(), Some(1));
        assert_eq!(Failure::from(e).kind(), ErrorKind::Collision);
        assert_eq!(ValidationError::EmptyPath.index(), None);
        assert_eq!(
            Failure::QueryBudgetExceeded { limit: 3 }.kind(),
            ErrorKind::QueryBudgetExceeded
        );
    }

    #[test]
    fn validation_and_solver_kinds_are_separate() {
        assert!(ErrorKind::Suboptimal.is_validation());
        assert!(ErrorKind::EmptyPath.is_validation());
        assert!(!ErrorKind::SolverCrashed.is_validation());
        assert!(!ErrorKind::AccessDenied.is_validation());
    }

    #[test]
    fn messages_carry_numbers() {
        let e = ValidationError::Suboptimal {
            actual: 10,
            minimum: 8,
        };
        let msg = e.to_string();
        assert!(msg.contains("10") && msg.contains('8'), "{msg}");

        let t = TrialFailure {
            index: 2,
            seed: Some(44),
            failure: Failure::SolverCrashed("boom".into()),
        };
        assert_eq!(
            t.to_string(),
            "solver failed on test 3 (seed 44): solver crashed with an unexpected error: boom"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn error_kind_round_trip() {
        let json = serde_json::to_string(&ErrorKind::IllegalJump).unwrap();
        let back: ErrorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorKind::IllegalJump);
    }
}
