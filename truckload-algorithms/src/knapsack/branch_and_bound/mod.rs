use super::utils::{density_order, greedy_fill, Incumbent};
use anyhow::Result;
use log::debug;
use logging_timer::time;
use truckload_challenges::knapsack::*;

/// Fractional knapsack bound over items sorted by density, highest first.
/// Whole items are added until one overflows, then the affordable fraction of
/// that item, rounded down since profits are integral. Prefix sums locate the
/// overflowing item by binary search.
pub struct LpBound<'a> {
    items: &'a [Item],
    weights: Vec<u64>,
    profits: Vec<u64>,
}

impl<'a> LpBound<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        let mut weights = Vec::with_capacity(items.len() + 1);
        let mut profits = Vec::with_capacity(items.len() + 1);
        let (mut weight, mut profit) = (0u64, 0u64);
        weights.push(weight);
        profits.push(profit);
        for item in items {
            weight += item.weight as u64;
            profit += item.profit as u64;
            weights.push(weight);
            profits.push(profit);
        }
        Self {
            items,
            weights,
            profits,
        }
    }

    /// Bound on the profit obtainable from `items[start..]` with `remaining`
    /// capacity.
    pub fn bound(&self, start: usize, remaining: u64) -> u64 {
        let limit = self.weights[start] + remaining;
        // items[start..end] fit whole
        let end = start + self.weights[start + 1..].partition_point(|&w| w <= limit);
        let mut bound = self.profits[end] - self.profits[start];
        if let Some(item) = self.items.get(end) {
            bound += item.profit as u64 * (limit - self.weights[end]) / item.weight as u64;
        }
        bound
    }
}

struct Search<'a> {
    items: &'a [Item],
    bound: LpBound<'a>,
    capacity: u64,
    selected: Vec<bool>,
    best: Incumbent,
    nodes: u64,
    pruned: u64,
}

impl Search<'_> {
    fn recurse(&mut self, index: usize, weight: u64, profit: u64) {
        self.nodes += 1;

        // Completions weigh at least `weight`, so an equal bound only helps
        // while we are lighter than the incumbent.
        let bound = profit + self.bound.bound(index, self.capacity - weight);
        if bound < self.best.profit || (bound == self.best.profit && weight >= self.best.weight) {
            self.pruned += 1;
            return;
        }

        if index == self.items.len() {
            if self.best.improves(profit, weight) {
                self.best.replace(profit, weight, &self.selected);
            }
            return;
        }

        let item = self.items[index];
        let next_weight = weight + item.weight as u64;
        if next_weight <= self.capacity {
            self.selected[index] = true;
            self.recurse(index + 1, next_weight, profit + item.profit as u64);
            self.selected[index] = false;
        }
        self.recurse(index + 1, weight, profit);
    }
}

/// Depth-first branch and bound over items sorted by density, seeded with the
/// density greedy fill.
#[time]
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let order = density_order(&challenge.items);
    let items: Vec<Item> = order.iter().map(|&i| challenge.items[i]).collect();
    let num_sorted = items.len();
    let capacity = challenge.capacity as u64;

    let mut seed = Incumbent::empty(num_sorted);
    let identity: Vec<usize> = (0..num_sorted).collect();
    greedy_fill(&items, &identity, capacity, &mut seed);

    let mut search = Search {
        items: &items,
        bound: LpBound::new(&items),
        capacity,
        selected: vec![false; num_sorted],
        best: seed,
        nodes: 0,
        pruned: 0,
    };
    search.recurse(0, 0, 0);
    debug!(
        "branch and bound: best profit {} at weight {}, {} nodes, {} pruned",
        search.best.profit, search.best.weight, search.nodes, search.pruned
    );

    // Zero-weight items never enter the search
    let mut result = Incumbent::with_free_items(&challenge.items);
    for (k, &i) in order.iter().enumerate() {
        if search.best.selected[k] {
            result.take(i, &challenge.items[i]);
        }
    }

    Ok(Solution::from_selection(challenge, &result.selected))
}
