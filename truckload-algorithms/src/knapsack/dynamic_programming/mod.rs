use anyhow::{anyhow, Result};
use log::debug;
use logging_timer::time;
use truckload_challenges::knapsack::*;

/// Bottom-up table over (item prefix, weight budget), stored row-major in a
/// single buffer of `(n + 1) * (capacity + 1)` cells.
#[time]
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let items = &challenge.items;
    let num_items = items.len();
    let width = (challenge.capacity as usize)
        .checked_add(1)
        .ok_or_else(|| anyhow!("Capacity ({}) is too large", challenge.capacity))?;
    let cells = (num_items + 1).checked_mul(width).ok_or_else(|| {
        anyhow!(
            "Table for {} items and capacity {} overflows",
            num_items,
            challenge.capacity
        )
    })?;

    let mut dp: Vec<u64> = Vec::new();
    dp.try_reserve_exact(cells)
        .map_err(|e| anyhow!("Failed to allocate table of {} cells: {}", cells, e))?;
    dp.resize(cells, 0);

    for (i, item) in items.iter().enumerate() {
        let (done, rest) = dp.split_at_mut((i + 1) * width);
        let prev = &done[i * width..];
        let row = &mut rest[..width];
        let item_weight = item.weight as usize;
        let item_profit = item.profit as u64;
        for w in 0..width {
            row[w] = if item_weight <= w {
                prev[w].max(prev[w - item_weight] + item_profit)
            } else {
                prev[w]
            };
        }
    }

    // Lightest budget reaching the best profit
    let last = &dp[num_items * width..];
    let best_profit = last.iter().copied().max().unwrap_or(0);
    let mut w = last.iter().position(|&v| v == best_profit).unwrap_or(0);
    debug!(
        "dynamic programming: best profit {} at weight {} ({} cells)",
        best_profit, w, cells
    );

    let mut selected = vec![false; num_items];
    for i in (1..=num_items).rev() {
        if dp[i * width + w] != dp[(i - 1) * width + w] {
            selected[i - 1] = true;
            w -= items[i - 1].weight as usize;
        }
    }

    Ok(Solution::from_selection(challenge, &selected))
}
