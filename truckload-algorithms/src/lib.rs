#[cfg(feature = "c001")]
pub mod knapsack;
#[cfg(feature = "c001")]
pub use knapsack as c001;
