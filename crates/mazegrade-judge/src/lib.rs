//! Grading of learner-supplied maze solvers.
//!
//! The [`Judge`] hands each solver a [`RestrictedView`] of a maze, then checks
//! the returned path with the [`Validator`]:
//!
//! | Check | Failure |
//! |---|---|
//! | path present and non-empty | [`ErrorKind::EmptyPath`] |
//! | first / last cell | [`ErrorKind::WrongStart`] / [`ErrorKind::WrongEnd`] |
//! | every step is one axis-aligned move | [`ErrorKind::IllegalJump`] |
//! | every step lands on a successor | [`ErrorKind::Collision`] |
//! | step count equals the BFS minimum ([`Mode::Optimal`]) | [`ErrorKind::Suboptimal`] |
//!
//! Solver misbehaviour is reported separately: [`ErrorKind::AccessDenied`],
//! [`ErrorKind::SolverCrashed`] and [`ErrorKind::QueryBudgetExceeded`].

mod error;
mod judge;
mod solver;
mod validator;
mod view;

pub use error::{ErrorKind, Failure, JudgeError, TrialFailure, ValidationError};
pub use judge::{BatchReport, Judge, JudgeConfig, TrialReport};
pub use solver::{GridSolver, Solver, SolverError, SolverResult, VisibleGrid};
pub use validator::{Mode, Validator, Verdict};
pub use view::RestrictedView;
