use super::utils::is_better;
use anyhow::{anyhow, Result};
use log::debug;
use logging_timer::time;
use truckload_challenges::knapsack::*;

/// Largest instance whose subsets can be enumerated with a `u64` mask.
pub const MAX_ITEMS: usize = u64::BITS as usize - 1;

#[time]
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let num_items = challenge.num_items();
    if num_items > MAX_ITEMS {
        return Err(anyhow!(
            "Exhaustive search supports at most {} items, got {}",
            MAX_ITEMS,
            num_items
        ));
    }
    let capacity = challenge.capacity as u64;

    let mut best_mask = 0u64;
    let mut best_profit = 0u64;
    let mut best_weight = 0u64;

    for mask in 0..(1u64 << num_items) {
        let mut total_weight = 0u64;
        let mut total_profit = 0u64;
        for (i, item) in challenge.items.iter().enumerate() {
            if (mask >> i) & 1 == 1 {
                total_weight += item.weight as u64;
                total_profit += item.profit as u64;
            }
        }

        if total_weight <= capacity
            && is_better(total_profit, total_weight, best_profit, best_weight)
        {
            best_mask = mask;
            best_profit = total_profit;
            best_weight = total_weight;
        }
    }
    debug!(
        "exhaustive search: best profit {} at weight {} over {} items",
        best_profit, best_weight, num_items
    );

    let selected: Vec<bool> = (0..num_items).map(|i| (best_mask >> i) & 1 == 1).collect();
    Ok(Solution::from_selection(challenge, &selected))
}
