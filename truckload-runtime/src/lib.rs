mod benchmark;
pub use benchmark::*;
mod report;
pub use report::*;
mod solution;
pub use solution::*;
mod timeout;
pub use timeout::*;
