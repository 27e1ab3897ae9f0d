use super::solve_with_timeout;
use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use truckload_algorithms::knapsack::Algorithm;
use truckload_challenges::knapsack::{dataset_paths, load_challenge};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BenchmarkSettings {
    /// Directory holding `Pallets_XX.csv` and `TruckAndPallets_XX.csv`.
    pub data_dir: PathBuf,
    pub datasets: Vec<u32>,
    pub algorithms: Vec<Algorithm>,
    /// Wall-clock limit per run.
    pub timeout_secs: f64,
    pub output: PathBuf,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            datasets: (1..=10).collect(),
            algorithms: Algorithm::ALL.to_vec(),
            timeout_secs: 2.0,
            output: PathBuf::from("benchmark.csv"),
        }
    }
}

impl BenchmarkSettings {
    pub fn timeout(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.timeout_secs)
            .map_err(|e| anyhow!("Invalid timeout_secs ({}): {}", self.timeout_secs, e))
    }

    pub fn validate(&self) -> Result<()> {
        self.timeout()?;
        if self.datasets.is_empty() {
            return Err(anyhow!("No datasets selected"));
        }
        if self.algorithms.is_empty() {
            return Err(anyhow!("No algorithms selected"));
        }
        Ok(())
    }
}

/// Reads settings from a path ending in `.json`, or parses the argument as a
/// json string.
pub fn load_settings(settings: &str) -> Result<BenchmarkSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .with_context(|| format!("Failed to read settings file: {}", settings))?
    } else {
        settings.to_string()
    };

    serde_json::from_str::<BenchmarkSettings>(&settings).context("Failed to parse settings")
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub dataset: u32,
    /// `None` when the run timed out or failed.
    pub time_seconds: Option<f64>,
}

/// Times every selected algorithm on every selected dataset. Datasets are
/// parsed once, before any solver runs; a missing or malformed dataset aborts
/// the benchmark.
pub fn run_benchmarks(settings: &BenchmarkSettings) -> Result<Vec<BenchmarkResult>> {
    settings.validate()?;
    let timeout = settings.timeout()?;

    let mut results = Vec::with_capacity(settings.datasets.len() * settings.algorithms.len());
    for &dataset in &settings.datasets {
        let (pallets, truck) = dataset_paths(&settings.data_dir, dataset);
        let challenge = load_challenge(&pallets, &truck)
            .with_context(|| format!("Failed to load dataset {}", dataset))?;

        for &algorithm in &settings.algorithms {
            let time_seconds = match solve_with_timeout(algorithm, &challenge, Some(timeout)) {
                Ok(Some(run)) => {
                    info!(
                        "{} on dataset {}: profit {} in {:.6}s",
                        algorithm,
                        dataset,
                        run.solution.total_profit(),
                        run.elapsed.as_secs_f64()
                    );
                    Some(run.elapsed.as_secs_f64())
                }
                Ok(None) => {
                    warn!(
                        "{} on dataset {}: timed out after {:?}",
                        algorithm, dataset, timeout
                    );
                    None
                }
                Err(e) => {
                    warn!("{} on dataset {}: {}", algorithm, dataset, e);
                    None
                }
            };
            results.push(BenchmarkResult {
                algorithm,
                dataset,
                time_seconds,
            });
        }
    }
    Ok(results)
}
