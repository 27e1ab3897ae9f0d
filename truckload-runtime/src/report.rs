use crate::BenchmarkResult;
use anyhow::Result;
use std::io::Write;
use truckload_challenges::knapsack::Solution;

/// Lists the selected pallets as `<1-based position> <weight> <profit>`,
/// followed by the totals.
pub fn write_solution<W: Write>(mut writer: W, solution: &Solution) -> Result<()> {
    for (i, item) in solution.selected() {
        writeln!(writer, "{} {} {}", i + 1, item.weight, item.profit)?;
    }
    writeln!(writer, "Total weight = {}", solution.total_weight())?;
    writeln!(writer, "Total profit = {}", solution.total_profit())?;
    writer.flush()?;
    Ok(())
}

/// CSV report with one row per run; timed out runs are written as `-1`.
pub fn write_report<W: Write>(mut writer: W, results: &[BenchmarkResult]) -> Result<()> {
    writeln!(writer, "Algorithm,Dataset,Time(sec)")?;
    for result in results {
        match result.time_seconds {
            Some(time_seconds) => writeln!(
                writer,
                "{},{},{}",
                result.algorithm.label(),
                result.dataset,
                time_seconds
            )?,
            None => writeln!(writer, "{},{},-1", result.algorithm.label(), result.dataset)?,
        }
    }
    writer.flush()?;
    Ok(())
}
