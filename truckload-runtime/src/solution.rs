use anyhow::{Context, Result};
use std::{fs, io::Read};
use truckload_challenges::knapsack::Solution;

/// Reads a json solution from `reader`.
pub fn read_solution<R: Read>(mut reader: R) -> Result<Solution> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("Failed to read solution")?;
    serde_json::from_str::<Solution>(&buffer).context("Failed to parse solution")
}

/// Reads a solution from stdin when the argument is `-`, from a path ending in
/// `.json`, or parses the argument as a json string.
pub fn load_solution(solution: &str) -> Result<Solution> {
    if solution == "-" {
        return read_solution(std::io::stdin().lock());
    }
    let solution = if solution.ends_with(".json") {
        fs::read_to_string(solution)
            .with_context(|| format!("Failed to read solution file: {}", solution))?
    } else {
        solution.to_string()
    };

    serde_json::from_str::<Solution>(&solution).context("Failed to parse solution")
}
