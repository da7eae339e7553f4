use std::{path::PathBuf, sync::Arc, thread, time::Duration};

use caravel_optimizer::{
    parsers::{parser::DatasetParser, solomon::SolomonParser},
    solver::{
        solver::Solver,
        solver_params::{SolverParams, Termination, Threads},
    },
};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use jiff::SpanRelativeTo;
use tracing::info;

#[derive(Args)]
pub struct OptimizeArgs {
    /// The Solomon instance file to optimize
    #[arg(short, long)]
    input: PathBuf,

    /// Stop after this many accepted improvements
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Timeout for the solver (e.g., "30s", "5m", "PT1H30M", or plain seconds)
    #[arg(short, long, value_parser = parse_timeout)]
    timeout: Option<jiff::SignedDuration>,

    /// The number of evaluation threads (0 = one per core)
    #[arg(long, default_value_t = 1)]
    threads: u8,

    /// Write the best solution to this file as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Accepts friendly durations ("30s"), ISO 8601 spans ("PT1H30M"), and bare
/// second counts ("30").
fn parse_timeout(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(span) = input.parse::<jiff::Span>()
        && let Ok(duration) = span.to_duration(SpanRelativeTo::days_are_24_hours())
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<u32>() {
        return Ok(jiff::SignedDuration::from_secs(seconds as i64));
    }

    Err(format!("cannot parse {input:?} as a timeout"))
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing {:?}", args.input);

    let problem = SolomonParser.parse(&args.input)?;

    let mut terminations = Vec::new();
    if let Some(iterations) = args.iterations {
        terminations.push(Termination::Iterations(iterations));
    }
    if let Some(timeout) = args.timeout {
        terminations.push(Termination::Duration(timeout));
    }

    let evaluation_threads = match args.threads {
        0 => Threads::Auto,
        1 => Threads::Single,
        n => Threads::Multi(n as usize),
    };

    let mut solver = Solver::new(
        problem,
        SolverParams {
            terminations,
            evaluation_threads,
        },
    )?;

    solver.on_best_solution(|best| {
        info!(
            iteration = best.iteration,
            objective = best.objective_value,
            "improved solution accepted"
        );
    });

    let ticker = args.timeout.map(|timeout| {
        let seconds = timeout.as_secs().max(0) as u64;
        let bar = Arc::new(ProgressBar::new(seconds));

        bar.enable_steady_tick(Duration::from_secs(1));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40}] ({elapsed}/{len}s)")
                .unwrap(),
        );

        let t_bar = Arc::clone(&bar);
        let handle = thread::spawn(move || {
            for i in 0..seconds {
                t_bar.set_position(i);
                thread::sleep(Duration::from_secs(1));
            }
        });

        (bar, handle)
    });

    let best = solver.solve()?;

    if let Some((bar, handle)) = ticker {
        bar.finish_and_clear();
        handle.join().unwrap();
    }

    info!(
        objective = best.objective_value,
        iterations = best.iteration,
        routes = best.solution.routes().len(),
        "search finished"
    );

    for (vehicle, route) in best.solution.routes().iter().enumerate() {
        let stops = route
            .customers()
            .iter()
            .map(|&index| solver.problem().customer(index).external_id())
            .collect::<Vec<_>>()
            .join(" -> ");

        info!("vehicle {vehicle}: depot -> {stops} -> depot");
    }

    if let Some(output) = args.output {
        std::fs::write(&output, serde_json::to_string_pretty(&best)?)?;
        info!("Solution written to {:?}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_accepts_all_forms() {
        assert_eq!(
            parse_timeout("30s").unwrap(),
            jiff::SignedDuration::from_secs(30)
        );
        assert_eq!(
            parse_timeout("PT1H30M").unwrap(),
            jiff::SignedDuration::from_mins(90)
        );
        assert_eq!(
            parse_timeout("45").unwrap(),
            jiff::SignedDuration::from_secs(45)
        );
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(parse_timeout("soon").is_err());
        assert!(parse_timeout("-5x").is_err());
    }
}
