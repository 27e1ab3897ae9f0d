use super::utils::{density_order, greedy_fill, profit_order, Incumbent};
use anyhow::Result;
use log::debug;
use logging_timer::time;
use truckload_challenges::knapsack::*;

fn fill(challenge: &Challenge, order: &[usize]) -> Incumbent {
    let mut incumbent = Incumbent::with_free_items(&challenge.items);
    greedy_fill(
        &challenge.items,
        order,
        challenge.capacity as u64,
        &mut incumbent,
    );
    incumbent
}

/// Greedy fill by profit/weight, highest first.
pub fn density_greedy(challenge: &Challenge) -> Solution {
    let incumbent = fill(challenge, &density_order(&challenge.items));
    Solution::from_selection(challenge, &incumbent.selected)
}

/// Greedy fill by profit, highest first, lighter items first on ties.
pub fn profit_greedy(challenge: &Challenge) -> Solution {
    let incumbent = fill(challenge, &profit_order(&challenge.items));
    Solution::from_selection(challenge, &incumbent.selected)
}

/// Runs both greedy fills and keeps the more profitable one, the density
/// fill on a tie.
#[time]
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let by_density = density_greedy(challenge);
    let by_profit = profit_greedy(challenge);
    let (density_profit, profit_profit) = (by_density.total_profit(), by_profit.total_profit());
    debug!(
        "approximation: density fill {} / profit fill {}",
        density_profit, profit_profit
    );

    Ok(if profit_profit > density_profit {
        by_profit
    } else {
        by_density
    })
}
