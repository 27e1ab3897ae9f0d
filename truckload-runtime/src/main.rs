use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, Command};
use std::{fs, io, path::PathBuf, time::Duration};
use truckload_algorithms::knapsack::Algorithm;
use truckload_challenges::knapsack::load_challenge;
use truckload_runtime::{
    load_settings, load_solution, run_benchmarks, solve_with_timeout, write_report,
    write_solution, BenchmarkSettings,
};

fn cli() -> Command {
    Command::new("truckload-runtime")
        .about("Selects pallets for a truck, verifies selections and benchmarks solvers")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(
                    arg!(<PALLETS> "Path to the pallets csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<TRUCK> "Path to the truck csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--algorithm [ALGORITHM] "Algorithm to run (see list_algorithms)")
                        .default_value("dynamic_programming")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--timeout [SECONDS] "Give up after this many seconds")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "Save the solution to this path as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--json "Print the solution as json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<PALLETS> "Path to the pallets csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<TRUCK> "Path to the truck csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("benchmark")
                .about("Times every algorithm on every dataset and writes a csv report")
                .arg(
                    arg!([SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(Command::new("list_algorithms").about("Lists the available algorithms"))
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<PathBuf>("PALLETS").unwrap().clone(),
            sub_m.get_one::<PathBuf>("TRUCK").unwrap().clone(),
            sub_m.get_one::<String>("algorithm").unwrap().clone(),
            sub_m.get_one::<f64>("timeout").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("json"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<PathBuf>("PALLETS").unwrap().clone(),
            sub_m.get_one::<PathBuf>("TRUCK").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("benchmark", sub_m)) => benchmark(sub_m.get_one::<String>("SETTINGS").cloned()),
        Some(("list_algorithms", _)) => list_algorithms(),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn compute_solution(
    pallets_path: PathBuf,
    truck_path: PathBuf,
    algorithm: String,
    timeout: Option<f64>,
    output_file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    let timeout = timeout
        .map(|secs| {
            Duration::try_from_secs_f64(secs)
                .map_err(|e| anyhow!("Invalid timeout ({}): {}", secs, e))
        })
        .transpose()?;
    let challenge = load_challenge(&pallets_path, &truck_path)?;

    let run = match solve_with_timeout(algorithm, &challenge, timeout)? {
        Some(run) => run,
        None => {
            eprintln!("No solution found: {} timed out", algorithm);
            std::process::exit(85);
        }
    };
    challenge
        .verify_solution(&run.solution)
        .map_err(|e| anyhow!("{} produced an invalid solution: {}", algorithm, e))?;

    if let Some(path) = output_file {
        fs::write(&path, serde_json::to_string(&run.solution)?)?;
        println!("solution written to: {:?}", path);
    }
    if json {
        println!("{}", serde_json::to_string(&run.solution)?);
    } else {
        println!("Elapsed time: {:.6} seconds\n", run.elapsed.as_secs_f64());
        println!("{} solution:", algorithm.label());
        write_solution(io::stdout().lock(), &run.solution)?;
    }
    Ok(())
}

pub fn verify_solution(pallets_path: PathBuf, truck_path: PathBuf, solution: String) -> Result<()> {
    let challenge = load_challenge(&pallets_path, &truck_path)?;
    let solution = load_solution(&solution)?;

    match challenge.verify_solution(&solution) {
        Ok(summary) => {
            println!("Solution is valid");
            println!("Total weight = {}", summary.total_weight);
            println!("Total profit = {}", summary.total_profit);
        }
        Err(e) => {
            eprintln!("Verification error: Invalid solution: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

pub fn benchmark(settings: Option<String>) -> Result<()> {
    let settings = match settings {
        Some(settings) => load_settings(&settings)?,
        None => BenchmarkSettings::default(),
    };
    let results = run_benchmarks(&settings)?;

    let file = fs::File::create(&settings.output)
        .with_context(|| format!("Failed to create {}", settings.output.display()))?;
    write_report(io::BufWriter::new(file), &results)?;
    println!("benchmark written to: {:?}", settings.output);
    Ok(())
}

pub fn list_algorithms() -> Result<()> {
    for algorithm in Algorithm::ALL {
        println!("{:<20} {}", algorithm.name(), algorithm.label());
    }
    Ok(())
}
