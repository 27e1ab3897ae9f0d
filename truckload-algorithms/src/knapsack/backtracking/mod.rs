use super::utils::Incumbent;
use anyhow::Result;
use log::debug;
use logging_timer::time;
use truckload_challenges::knapsack::*;

struct Search<'a> {
    items: &'a [Item],
    capacity: u64,
    selected: Vec<bool>,
    best: Incumbent,
    leaves: u64,
}

impl Search<'_> {
    fn recurse(&mut self, index: usize, weight: u64, profit: u64) {
        if index == self.items.len() {
            self.leaves += 1;
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

#[time]
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let num_items = challenge.num_items();
    let mut search = Search {
        items: &challenge.items,
        capacity: challenge.capacity as u64,
        selected: vec![false; num_items],
        best: Incumbent::empty(num_items),
        leaves: 0,
    };
    search.recurse(0, 0, 0);
    debug!(
        "backtracking: best profit {} at weight {} after {} leaves",
        search.best.profit, search.best.weight, search.leaves
    );

    Ok(Solution::from_selection(challenge, &search.best.selected))
}
