//! Grade a reference solver on the fixed maze and a batch of random mazes.
//!
//! Run: cargo run --bin mazegrade -- --trials 10 --solver astar --faulty
//!
//! Judge narration goes through `log`; set `RUST_LOG=info` to see it.

use crossterm::style::Stylize;
use mazegrade_demos::Options;
use mazegrade_judge::{BatchReport, Judge, TrialReport};

fn print_trial(report: &TrialReport) {
    let tag = match report.kind() {
        None => "PASS".green().bold(),
        Some(kind) if kind.is_validation() => "FAIL".red().bold(),
        Some(_) => "CRASH".magenta().bold(),
    };
    println!("  [{tag}] {report}");
}

fn print_summary(batch: &BatchReport) {
    let summary = batch.summary();
    if batch.all_passed() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red());
    }
}

fn run(options: &Options) -> Result<bool, Box<dyn std::error::Error>> {
    let mut judge = Judge::new(options.generator()?, options.judge_config());
    let mut solver = options.solver.build();

    println!(
        "{} {}",
        "Fixed maze".bold(),
        format!("(solver {}, {:?})", options.solver, options.mode).dim()
    );
    let fixed = judge.test_fixed(solver.as_mut())?;
    print_trial(&fixed);

    println!(
        "{}",
        format!("Running {} random test(s)", options.trials).bold()
    );
    let batch = judge.test_on_random(solver.as_mut())?;
    for t in &batch.trials {
        print_trial(t);
    }
    print_summary(&batch);

    Ok(fixed.passed && batch.all_passed())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match Options::parse_from_args(std::env::args_os().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            if let Some(e) = e.downcast_ref::<clap::Error>() {
                e.exit();
            }
            eprintln!("{} {e}", "Error:".red().bold());
            std::process::exit(2);
        }
    };
    log::debug!("options: {options:?}");

    match run(&options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            std::process::exit(1);
        }
    }
}
