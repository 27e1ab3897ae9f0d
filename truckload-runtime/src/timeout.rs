use anyhow::{anyhow, Result};
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};
use truckload_algorithms::knapsack::Algorithm;
use truckload_challenges::knapsack::{Challenge, Solution};

/// Stack for solver threads. Backtracking and branch and bound recurse once per
/// item, which overflows the default thread stack on large instances.
pub const SOLVER_STACK_SIZE: usize = 256 << 20;

fn spawn_solver<T, F>(f: F) -> Result<Receiver<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name("truckload-solver".to_string())
        .stack_size(SOLVER_STACK_SIZE)
        .spawn(move || {
            // The receiver is gone when the caller already timed out
            let _ = sender.send(f());
        })
        .map_err(|e| anyhow!("Failed to spawn solver thread: {}", e))?;
    Ok(receiver)
}

/// Runs `f` on a dedicated thread and waits at most `timeout` for its result.
///
/// Returns `Ok(None)` on timeout. The thread is not cancelled: it keeps running
/// in the background and whatever it returns is dropped.
pub fn run_with_timeout<T, F>(f: F, timeout: Duration) -> Result<Option<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match spawn_solver(f)?.recv_timeout(timeout) {
        Ok(value) => Ok(Some(value)),
        Err(RecvTimeoutError::Timeout) => Ok(None),
        Err(RecvTimeoutError::Disconnected) => Err(anyhow!("Solver thread panicked")),
    }
}

/// Runs `f` on a dedicated thread and waits for its result.
pub fn run_to_completion<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    spawn_solver(f)?
        .recv()
        .map_err(|_| anyhow!("Solver thread panicked"))
}

#[derive(Debug, Clone)]
pub struct TimedRun {
    pub solution: Solution,
    pub elapsed: Duration,
}

fn timed_solve(algorithm: Algorithm, challenge: &Challenge) -> Result<TimedRun> {
    let start = Instant::now();
    let solution = algorithm.solve(challenge)?;
    Ok(TimedRun {
        solution,
        elapsed: start.elapsed(),
    })
}

/// Solves `challenge` with `algorithm` on a solver thread, giving up after
/// `timeout` when one is set. Elapsed time is measured on the solving thread.
pub fn solve_with_timeout(
    algorithm: Algorithm,
    challenge: &Challenge,
    timeout: Option<Duration>,
) -> Result<Option<TimedRun>> {
    let challenge = challenge.clone();
    let solve = move || timed_solve(algorithm, &challenge);
    match timeout {
        None => run_to_completion(solve)?.map(Some),
        Some(timeout) => match run_with_timeout(solve, timeout)? {
            Some(run) => run.map(Some),
            None => Ok(None),
        },
    }
}
