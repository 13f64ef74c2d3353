//! Command-line options for the `mazegrade` binary.

use std::error::Error;

use clap::{Arg, ArgAction, Command, value_parser};
use mazegrade_core::GridError;
use mazegrade_env::{Generator, HeuristicKind};
use mazegrade_judge::{JudgeConfig, Mode};

use crate::solvers::SolverKind;

fn make_options_parser() -> Command {
    Command::new("mazegrade")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Grade a maze solver on the fixed maze and a batch of random ones")
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("N")
                .help("Base seed for random mazes, or `random` for fresh seeds")
                .default_value("42"),
        )
        .arg(
            Arg::new("trials")
                .short('n')
                .long("trials")
                .value_name("COUNT")
                .help("Number of random mazes")
                .value_parser(value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("Accept any legal path, or only shortest ones")
                .value_parser(["feasible", "optimal"])
                .default_value("optimal"),
        )
        .arg(
            Arg::new("solver")
                .long("solver")
                .help("Reference solver to grade")
                .value_parser(SolverKind::NAMES)
                .default_value("bfs"),
        )
        .arg(
            Arg::new("faulty")
                .long("faulty")
                .help("Use the inadmissible heuristic")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("visible")
                .long("visible")
                .help("Let solvers read the full grid")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("escalate")
                .long("escalate")
                .help("Abort with an error on the first failing test")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("query-limit")
                .long("query-limit")
                .value_name("N")
                .help("Successor queries allowed per test")
                .value_parser(value_parser!(usize)),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub seed: Option<u64>,
    pub trials: usize,
    pub mode: Mode,
    pub solver: SolverKind,
    pub faulty: bool,
    pub visible: bool,
    pub escalate: bool,
    pub query_limit: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        let config = JudgeConfig::default();
        Options {
            seed: config.seed,
            trials: config.trials,
            mode: config.mode,
            solver: SolverKind::default(),
            faulty: false,
            visible: false,
            escalate: config.escalate,
            query_limit: config.query_limit,
        }
    }
}

impl Options {
    pub fn parse_from_args<I, T>(flags: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(flags)?;

        let seed = match matches.get_one::<String>("seed").map(String::as_str) {
            Some("random") | None => None,
            Some(s) => Some(s.parse::<u64>()?),
        };
        let mode = match matches.get_one::<String>("mode").map(String::as_str) {
            Some("feasible") => Mode::Feasible,
            _ => Mode::Optimal,
        };
        let solver = matches
            .get_one::<String>("solver")
            .and_then(|s| SolverKind::from_name(s))
            .unwrap_or_default();

        Ok(Options {
            seed,
            trials: matches.get_one::<usize>("trials").copied().unwrap_or(1),
            mode,
            solver,
            faulty: matches.get_flag("faulty"),
            visible: matches.get_flag("visible"),
            escalate: matches.get_flag("escalate"),
            query_limit: matches.get_one::<usize>("query-limit").copied(),
        })
    }

    pub fn judge_config(&self) -> JudgeConfig {
        JudgeConfig {
            mode: self.mode,
            seed: self.seed,
            trials: self.trials,
            escalate: self.escalate,
            query_limit: self.query_limit,
        }
    }

    pub fn generator(&self) -> Result<Generator, GridError> {
        let heuristic = if self.faulty {
            HeuristicKind::Faulty
        } else {
            HeuristicKind::Manhattan
        };
        Ok(Generator::standard()?
            .with_heuristic(heuristic)
            .with_visible(self.visible))
    }
}
