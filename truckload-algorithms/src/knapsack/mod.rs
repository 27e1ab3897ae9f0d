pub mod approximation;
pub mod backtracking;
pub mod branch_and_bound;
pub mod dynamic_programming;
pub mod exhaustive_search;
pub mod utils;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use truckload_challenges::knapsack::{Challenge, Solution};

pub type SolveChallengeFn = fn(&Challenge) -> Result<Solution>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    ExhaustiveSearch,
    Backtracking,
    DynamicProgramming,
    Approximation,
    BranchAndBound,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::ExhaustiveSearch,
        Algorithm::Backtracking,
        Algorithm::DynamicProgramming,
        Algorithm::Approximation,
        Algorithm::BranchAndBound,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::ExhaustiveSearch => "exhaustive_search",
            Algorithm::Backtracking => "backtracking",
            Algorithm::DynamicProgramming => "dynamic_programming",
            Algorithm::Approximation => "approximation",
            Algorithm::BranchAndBound => "branch_and_bound",
        }
    }

    /// Label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::ExhaustiveSearch => "Exhaustive Search",
            Algorithm::Backtracking => "Backtracking",
            Algorithm::DynamicProgramming => "Dynamic Programming",
            Algorithm::Approximation => "Approximation",
            Algorithm::BranchAndBound => "ILP",
        }
    }

    /// Exact algorithms return a maximum-profit selection of minimum weight.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Algorithm::Approximation)
    }

    pub fn solver(&self) -> SolveChallengeFn {
        match self {
            Algorithm::ExhaustiveSearch => exhaustive_search::solve_challenge,
            Algorithm::Backtracking => backtracking::solve_challenge,
            Algorithm::DynamicProgramming => dynamic_programming::solve_challenge,
            Algorithm::Approximation => approximation::solve_challenge,
            Algorithm::BranchAndBound => branch_and_bound::solve_challenge,
        }
    }

    pub fn solve(&self, challenge: &Challenge) -> Result<Solution> {
        (self.solver())(challenge)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown algorithm '{}'. Expected one of: {}",
                    s,
                    Algorithm::ALL
                        .iter()
                        .map(Algorithm::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
