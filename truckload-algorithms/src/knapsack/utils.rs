use std::cmp::Ordering;
use truckload_challenges::knapsack::Item;

/// `true` when (`profit`, `weight`) beats (`best_profit`, `best_weight`):
/// strictly more profit, or equal profit at strictly lower weight.
pub fn is_better(profit: u64, weight: u64, best_profit: u64, best_weight: u64) -> bool {
    profit > best_profit || (profit == best_profit && weight < best_weight)
}

/// Best selection seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    pub profit: u64,
    pub weight: u64,
    pub selected: Vec<bool>,
}

impl Incumbent {
    pub fn empty(num_items: usize) -> Self {
        Self {
            profit: 0,
            weight: 0,
            selected: vec![false; num_items],
        }
    }

    /// Zero-weight items cost no capacity, so every one of them with a profit
    /// is taken up front. Zero/zero items are left out.
    pub fn with_free_items(items: &[Item]) -> Self {
        let selected: Vec<bool> = items
            .iter()
            .map(|item| item.weight == 0 && item.profit > 0)
            .collect();
        let profit = items
            .iter()
            .zip(&selected)
            .filter(|(_, &taken)| taken)
            .map(|(item, _)| item.profit as u64)
            .sum();
        Self {
            profit,
            weight: 0,
            selected,
        }
    }

    pub fn improves(&self, profit: u64, weight: u64) -> bool {
        is_better(profit, weight, self.profit, self.weight)
    }

    pub fn replace(&mut self, profit: u64, weight: u64, selected: &[bool]) {
        self.profit = profit;
        self.weight = weight;
        self.selected.copy_from_slice(selected);
    }

    pub fn take(&mut self, index: usize, item: &Item) {
        self.selected[index] = true;
        self.weight += item.weight as u64;
        self.profit += item.profit as u64;
    }
}

/// Orders two items by profit/weight using cross-multiplication.
/// Both weights must be non-zero.
pub fn cmp_density(a: &Item, b: &Item) -> Ordering {
    (a.profit as u64 * b.weight as u64).cmp(&(b.profit as u64 * a.weight as u64))
}

/// Indices of the non-zero-weight items by density, highest first. Ties keep
/// input order.
pub fn density_order(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).filter(|&i| items[i].weight > 0).collect();
    order.sort_by(|&a, &b| cmp_density(&items[b], &items[a]));
    order
}

/// Indices of the non-zero-weight items by profit descending, then weight
/// ascending.
pub fn profit_order(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).filter(|&i| items[i].weight > 0).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .profit
            .cmp(&items[a].profit)
            .then(items[a].weight.cmp(&items[b].weight))
    });
    order
}

/// Adds items in `order` to `incumbent` while they fit within `capacity` and
/// stops at the first one that does not.
pub fn greedy_fill(items: &[Item], order: &[usize], capacity: u64, incumbent: &mut Incumbent) {
    for &i in order {
        if incumbent.weight + items[i].weight as u64 > capacity {
            break;
        }
        incumbent.take(i, &items[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(u32, u32)]) -> Vec<Item> {
        pairs.iter().map(|&pair| Item::from(pair)).collect()
    }

    #[test]
    fn test_is_better() {
        assert!(is_better(5, 10, 4, 1));
        assert!(is_better(5, 3, 5, 4));
        assert!(!is_better(5, 4, 5, 4));
        assert!(!is_better(4, 0, 5, 9));
    }

    #[test]
    fn test_density_order_is_stable() {
        let items = items(&[(2, 2), (1, 3), (4, 4), (0, 9), (3, 1)]);
        assert_eq!(density_order(&items), vec![1, 0, 2, 4]);
    }

    #[test]
    fn test_profit_order() {
        let items = items(&[(5, 6), (2, 6), (1, 1), (0, 7), (3, 4)]);
        assert_eq!(profit_order(&items), vec![1, 0, 4, 2]);
    }

    #[test]
    fn test_greedy_fill_stops_at_first_overflow() {
        let items = items(&[(3, 9), (4, 8), (1, 1)]);
        let mut incumbent = Incumbent::empty(3);
        greedy_fill(&items, &[0, 1, 2], 5, &mut incumbent);
        // item 2 would fit but the fill stops at item 1
        assert_eq!(incumbent.selected, vec![true, false, false]);
        assert_eq!((incumbent.profit, incumbent.weight), (9, 3));
    }

    #[test]
    fn test_with_free_items() {
        let items = items(&[(0, 4), (0, 0), (2, 3)]);
        let incumbent = Incumbent::with_free_items(&items);
        assert_eq!(incumbent.selected, vec![true, false, false]);
        assert_eq!((incumbent.profit, incumbent.weight), (4, 0));
    }
}
