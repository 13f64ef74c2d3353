//! The composition root: generate a maze, run the solver, grade the path.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};
use mazegrade_core::Cell;
use mazegrade_env::{AccessDenied, MazeEnv, MazeGenerator};

use crate::error::{ErrorKind, Failure, JudgeError, TrialFailure, ValidationError};
use crate::solver::Solver;
use crate::validator::{Mode, Validator, Verdict};
use crate::view::RestrictedView;

/// Judge settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeConfig {
    /// Validation mode applied to solver output.
    pub mode: Mode,
    /// Base seed for random batches; trial `i` uses `seed + i`. `None` draws
    /// a fresh seed per trial.
    pub seed: Option<u64>,
    /// Number of random trials per batch.
    pub trials: usize,
    /// Return the first failing trial as an error instead of a report.
    pub escalate: bool,
    /// Maximum successor queries per trial.
    pub query_limit: Option<usize>,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Optimal,
            seed: Some(42),
            trials: 1,
            escalate: false,
            query_limit: None,
        }
    }
}

/// Result of grading one trial: a success flag plus, on failure, the
/// structured reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialReport {
    /// Zero-based trial index.
    pub index: usize,
    /// Seed of the maze; `None` for the fixed maze or a caller-supplied one.
    pub seed: Option<u64>,
    pub passed: bool,
    /// Present when the path was accepted.
    pub verdict: Option<Verdict>,
    /// Present when the trial failed.
    pub failure: Option<Failure>,
    /// Successor queries the solver made.
    pub queries: usize,
}

impl TrialReport {
    fn pass(index: usize, seed: Option<u64>, verdict: Verdict, queries: usize) -> Self {
        Self {
            index,
            seed,
            passed: true,
            verdict: Some(verdict),
            failure: None,
            queries,
        }
    }

    fn fail(index: usize, seed: Option<u64>, failure: Failure, queries: usize) -> Self {
        Self {
            index,
            seed,
            passed: false,
            verdict: None,
            failure: Some(failure),
            queries,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.failure.as_ref().map(Failure::kind)
    }

    pub fn message(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }

    /// Convert a failed report into a [`TrialFailure`].
    pub fn into_failure(self) -> Option<TrialFailure> {
        let failure = self.failure?;
        Some(TrialFailure {
            index: self.index,
            seed: self.seed,
            failure,
        })
    }
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test {}", self.index + 1)?;
        if let Some(seed) = self.seed {
            write!(f, " (seed {seed})")?;
        }
        match (&self.failure, &self.verdict) {
            (Some(failure), _) if failure.kind().is_validation() => {
                write!(f, " failed: {failure}")
            }
            (Some(failure), _) => write!(f, " crashed: {failure}"),
            (None, Some(v)) => write!(f, " passed in {} steps", v.steps),
            (None, None) => write!(f, " passed"),
        }
    }
}

/// Outcome of a batch of trials. The batch stops at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Trials requested.
    pub requested: usize,
    /// Trials actually run, in order.
    pub trials: Vec<TrialReport>,
}

impl BatchReport {
    pub fn all_passed(&self) -> bool {
        self.trials.len() == self.requested && self.trials.iter().all(|t| t.passed)
    }

    pub fn first_failure(&self) -> Option<&TrialReport> {
        self.trials.iter().find(|t| !t.passed)
    }

    /// One-line outcome of the batch.
    pub fn summary(&self) -> String {
        match self.first_failure() {
            Some(t) => format!(
                "stopped at test {}/{}: {}",
                t.index + 1,
                self.requested,
                t.kind().map_or_else(|| "failed".to_string(), |k| k.to_string())
            ),
            None => format!("all {} tests passed", self.requested),
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.trials {
            writeln!(f, "{t}")?;
        }
        write!(f, "{}", self.summary())
    }
}

/// Pass/fail gate for learner solvers.
pub struct Judge<G> {
    generator: G,
    config: JudgeConfig,
    validator: Validator,
}

impl<G: MazeGenerator> Judge<G> {
    pub fn new(generator: G, config: JudgeConfig) -> Self {
        Self {
            generator,
            config,
            validator: Validator::new(),
        }
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Validate a path directly, bypassing any solver.
    pub fn validate<E: MazeEnv + ?Sized>(
        &mut self,
        path: Option<&[Cell]>,
        env: &E,
        mode: Mode,
    ) -> Result<Verdict, ValidationError> {
        self.validator.validate(path, env, mode)
    }

    /// Run `solver` on a caller-supplied environment and grade the result.
    pub fn run_trial<S, E>(&mut self, solver: &mut S, env: &E) -> TrialReport
    where
        S: Solver + ?Sized,
        E: MazeEnv + ?Sized,
    {
        self.trial(solver, env, 0, None)
    }

    /// One trial on the generator's fixed maze.
    ///
    /// Failures come back inside the report unless
    /// [`escalate`](JudgeConfig::escalate) is set.
    pub fn test_fixed<S: Solver + ?Sized>(&mut self, solver: &mut S) -> Result<TrialReport, JudgeError> {
        let env = self.generator.generate_fixed()?;
        let report = self.trial(solver, &env, 0, None);
        self.escalate(report)
    }

    /// Run [`trials`](JudgeConfig::trials) random mazes, stopping at the first
    /// failing one.
    pub fn test_on_random<S: Solver + ?Sized>(&mut self, solver: &mut S) -> Result<BatchReport, JudgeError> {
        let n = self.config.trials;
        info!("running {n} random test(s)");

        let mut batch = BatchReport {
            requested: n,
            trials: Vec::with_capacity(n),
        };
        for i in 0..n {
            let seed = match self.config.seed {
                Some(base) => base.wrapping_add(i as u64),
                None => rand_seed(),
            };
            let env = self.generator.generate_random(seed)?;
            let report = self.trial(solver, &env, i, Some(seed));
            let report = self.escalate(report)?;
            let passed = report.passed;
            batch.trials.push(report);
            if !passed {
                return Ok(batch);
            }
        }

        info!("all {n} tests passed");
        Ok(batch)
    }

    fn escalate(&self, report: TrialReport) -> Result<TrialReport, JudgeError> {
        match report.failure {
            Some(failure) if self.config.escalate => Err(JudgeError::Trial(TrialFailure {
                index: report.index,
                seed: report.seed,
                failure,
            })),
            failure => Ok(TrialReport { failure, ..report }),
        }
    }

    fn trial<S, E>(&mut self, solver: &mut S, env: &E, index: usize, seed: Option<u64>) -> TrialReport
    where
        S: Solver + ?Sized,
        E: MazeEnv + ?Sized,
    {
        let view = RestrictedView::new(env, self.config.query_limit);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| solver.search(&view)));
        let queries = view.queries();
        debug!("test {}: solver made {queries} successor queries", index + 1);

        let failure = if view.exhausted() {
            // The budget is only set when a limit exists.
            Some(Failure::QueryBudgetExceeded {
                limit: self.config.query_limit.unwrap_or(queries),
            })
        } else if view.denied() {
            Some(Failure::AccessDenied)
        } else {
            None
        };

        let report = match (failure, outcome) {
            (Some(failure), _) => TrialReport::fail(index, seed, failure, queries),
            (None, Err(payload)) => {
                let failure = Failure::SolverCrashed(panic_message(payload.as_ref()));
                TrialReport::fail(index, seed, failure, queries)
            }
            (None, Ok(Err(e))) => {
                let failure = if e.is::<AccessDenied>() {
                    Failure::AccessDenied
                } else {
                    Failure::SolverCrashed(e.to_string())
                };
                TrialReport::fail(index, seed, failure, queries)
            }
            (None, Ok(Ok(path))) => match self.validator.validate(path.as_deref(), env, self.config.mode) {
                Ok(verdict) => TrialReport::pass(index, seed, verdict, queries),
                Err(e) => TrialReport::fail(index, seed, e.into(), queries),
            },
        };

        if report.passed {
            info!("{report}");
        } else {
            warn!("{report}");
        }
        report
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

fn rand_seed() -> u64 {
    use rand::RngExt;
    rand::rng().random()
}
