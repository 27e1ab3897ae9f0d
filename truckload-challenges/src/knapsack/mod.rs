mod parser;
pub use parser::*;

use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A pallet that can be loaded onto the truck.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: u32,
    pub profit: u32,
}

impl Item {
    pub fn new(weight: u32, profit: u32) -> Self {
        Self { weight, profit }
    }
}

impl From<(u32, u32)> for Item {
    fn from((weight, profit): (u32, u32)) -> Self {
        Self { weight, profit }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_items: usize,
}

/// Position-preserving selection: slot `i` holds the input item when it was
/// loaded and `None` otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub items: Vec<Option<Item>>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Nothing selected.
    pub fn empty(num_items: usize) -> Self {
        Self {
            items: vec![None; num_items],
        }
    }

    pub fn from_selection(challenge: &Challenge, selected: &[bool]) -> Self {
        Self {
            items: challenge
                .items
                .iter()
                .zip(selected)
                .map(|(&item, &taken)| if taken { Some(item) } else { None })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_ref().map(|item| (i, item)))
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected().map(|(i, _)| i).collect()
    }

    pub fn num_selected(&self) -> usize {
        self.selected().count()
    }

    pub fn total_weight(&self) -> u64 {
        self.selected().map(|(_, item)| item.weight as u64).sum()
    }

    pub fn total_profit(&self) -> u64 {
        self.selected().map(|(_, item)| item.profit as u64).sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionSummary {
    pub num_selected: usize,
    pub total_weight: u64,
    pub total_profit: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub items: Vec<Item>,
    pub capacity: u32,
}

impl Challenge {
    pub fn new(items: Vec<Item>, capacity: u32) -> Self {
        Self { items, capacity }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        let mut rng = SmallRng::from_seed(seed.clone());

        // Weights in [1, 50], profits in [1, 100]
        let items: Vec<Item> = (0..difficulty.num_items)
            .map(|_| Item {
                weight: rng.gen_range(1..=50),
                profit: rng.gen_range(1..=100),
            })
            .collect();

        let total_weight: u64 = items.iter().map(|item| item.weight as u64).sum();
        let capacity = u32::try_from(total_weight / 2)
            .map_err(|_| anyhow!("Capacity ({}) does not fit in u32", total_weight / 2))?;

        Ok(Challenge { items, capacity })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<SolutionSummary> {
        if solution.len() != self.items.len() {
            return Err(anyhow!(
                "Solution has {} entries, expected {}",
                solution.len(),
                self.items.len()
            ));
        }

        for (i, (entry, item)) in solution.items.iter().zip(&self.items).enumerate() {
            if let Some(entry) = entry {
                if entry != item {
                    return Err(anyhow!(
                        "Entry {} ({:?}) does not match item {:?}",
                        i,
                        entry,
                        item
                    ));
                }
            }
        }

        let total_weight = solution.total_weight();
        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }

        Ok(SolutionSummary {
            num_selected: solution.num_selected(),
            total_weight,
            total_profit: solution.total_profit(),
        })
    }
}
