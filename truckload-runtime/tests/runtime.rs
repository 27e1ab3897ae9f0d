use std::{
    fs,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};
use truckload_algorithms::knapsack::Algorithm;
use truckload_challenges::knapsack::*;
use truckload_runtime::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "truckload-runtime-{}-{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_dataset(dir: &PathBuf, dataset: u32, pallets: &[(u32, u32)], capacity: u32) {
    let (pallets_path, truck_path) = dataset_paths(dir, dataset);
    let mut csv = String::from("Pallet,Weight,Profit\n");
    for (i, (weight, profit)) in pallets.iter().enumerate() {
        csv.push_str(&format!("{},{},{}\n", i + 1, weight, profit));
    }
    fs::write(pallets_path, csv).unwrap();
    fs::write(truck_path, format!("Capacity,Pallets\n{},{}\n", capacity, pallets.len())).unwrap();
}

#[test]
fn test_run_with_timeout_returns_result() {
    let value = run_with_timeout(|| 21 * 2, Duration::from_secs(5)).unwrap();
    assert_eq!(value, Some(42));
}

#[test]
fn test_run_with_timeout_gives_up() {
    let start = Instant::now();
    let value = run_with_timeout(
        || {
            thread::sleep(Duration::from_secs(2));
            1
        },
        Duration::from_millis(50),
    )
    .unwrap();
    assert_eq!(value, None);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_run_with_timeout_reports_panic() {
    let result = run_with_timeout(|| -> u32 { panic!("boom") }, Duration::from_secs(5));
    assert!(result.is_err());
}

#[test]
fn test_solve_with_timeout() {
    let challenge = Challenge::new(
        vec![
            Item::new(2, 3),
            Item::new(3, 4),
            Item::new(4, 5),
            Item::new(5, 6),
        ],
        5,
    );
    for timeout in [None, Some(Duration::from_secs(5))] {
        let run = solve_with_timeout(Algorithm::BranchAndBound, &challenge, timeout)
            .unwrap()
            .unwrap();
        assert_eq!(run.solution.total_profit(), 7);
    }
}

#[test]
fn test_solve_with_timeout_propagates_solver_error() {
    let challenge = Challenge::new(vec![Item::new(1, 1); 64], 10);
    let result = solve_with_timeout(
        Algorithm::ExhaustiveSearch,
        &challenge,
        Some(Duration::from_secs(5)),
    );
    assert!(result.is_err());
}

#[test]
fn test_run_to_completion() {
    assert_eq!(run_to_completion(|| 21 * 2).unwrap(), 42);
    assert!(run_to_completion(|| -> u32 { panic!("boom") }).is_err());
}

#[test]
fn test_solve_with_timeout_handles_deep_search() {
    // Branch and bound recurses once per item
    let challenge = Challenge::new(vec![Item::new(1, 1); 200_000], 200_000);
    for timeout in [None, Some(Duration::from_secs(60))] {
        let run = solve_with_timeout(Algorithm::BranchAndBound, &challenge, timeout)
            .unwrap()
            .unwrap();
        assert_eq!(run.solution.total_profit(), 200_000);
        assert_eq!(run.solution.num_selected(), 200_000);
    }
}

#[test]
fn test_load_solution() {
    let json = r#"{"items":[null,{"weight":3,"profit":4}]}"#;
    let expected = Solution {
        items: vec![None, Some(Item::new(3, 4))],
    };
    assert_eq!(load_solution(json).unwrap(), expected);
    assert_eq!(read_solution(json.as_bytes()).unwrap(), expected);

    let dir = scratch_dir("solution");
    let path = dir.join("solution.json");
    fs::write(&path, json).unwrap();
    assert_eq!(load_solution(path.to_str().unwrap()).unwrap(), expected);

    assert!(load_solution(r#"{"items": [1]}"#).is_err());
    assert!(read_solution("not json".as_bytes()).is_err());
    assert!(load_solution("missing-solution.json").is_err());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_computed_solution_verifies_from_file() {
    let dir = scratch_dir("compute");
    write_dataset(&dir, 1, &[(2, 3), (3, 4), (4, 5), (5, 6)], 5);
    let (pallets, truck) = dataset_paths(&dir, 1);
    let challenge = load_challenge(&pallets, &truck).unwrap();

    let run = solve_with_timeout(
        Algorithm::DynamicProgramming,
        &challenge,
        Some(Duration::from_secs(5)),
    )
    .unwrap()
    .unwrap();
    let path = dir.join("solution.json");
    fs::write(&path, serde_json::to_string(&run.solution).unwrap()).unwrap();

    let solution = load_solution(path.to_str().unwrap()).unwrap();
    let summary = challenge.verify_solution(&solution).unwrap();
    assert_eq!(summary.total_profit, 7);
    assert_eq!(summary.total_weight, 5);

    let tampered = Solution {
        items: vec![
            Some(Item::new(2, 3)),
            Some(Item::new(3, 4)),
            Some(Item::new(4, 5)),
            None,
        ],
    };
    assert!(challenge.verify_solution(&tampered).is_err());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_write_solution() {
    let challenge = Challenge::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)], 6);
    let solution = Solution::from_selection(&challenge, &[true, false, true]);
    let mut buffer = Vec::new();
    write_solution(&mut buffer, &solution).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "1 2 3\n3 4 5\nTotal weight = 6\nTotal profit = 8\n"
    );
}

#[test]
fn test_write_report() {
    let results = vec![
        BenchmarkResult {
            algorithm: Algorithm::ExhaustiveSearch,
            dataset: 1,
            time_seconds: None,
        },
        BenchmarkResult {
            algorithm: Algorithm::BranchAndBound,
            dataset: 2,
            time_seconds: Some(0.5),
        },
    ];
    let mut buffer = Vec::new();
    write_report(&mut buffer, &results).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "Algorithm,Dataset,Time(sec)\nExhaustive Search,1,-1\nILP,2,0.5\n"
    );
}

#[test]
fn test_load_settings() {
    let settings =
        load_settings(r#"{"datasets": [3], "algorithms": ["approximation"], "timeout_secs": 0.5}"#)
            .unwrap();
    assert_eq!(settings.datasets, vec![3]);
    assert_eq!(settings.algorithms, vec![Algorithm::Approximation]);
    assert_eq!(settings.timeout().unwrap(), Duration::from_millis(500));
    assert_eq!(settings.output, BenchmarkSettings::default().output);

    let defaults = load_settings("{}").unwrap();
    assert_eq!(defaults, BenchmarkSettings::default());
    assert_eq!(defaults.datasets, (1..=10).collect::<Vec<u32>>());
    assert_eq!(defaults.algorithms, Algorithm::ALL.to_vec());

    assert!(load_settings(r#"{"algorithms": ["simplex"]}"#).is_err());
    assert!(load_settings("missing-settings.json").is_err());
}

#[test]
fn test_settings_validation() {
    let mut settings = BenchmarkSettings::default();
    assert!(settings.validate().is_ok());
    settings.timeout_secs = -1.0;
    assert!(settings.validate().is_err());
    settings.timeout_secs = 1.0;
    settings.datasets.clear();
    assert!(settings.validate().is_err());
}

#[test]
fn test_run_benchmarks() {
    let dir = scratch_dir("benchmark");
    write_dataset(&dir, 1, &[(2, 3), (3, 4), (4, 5), (5, 6)], 5);
    write_dataset(&dir, 2, &[(1, 1), (1, 1)], 100);

    let settings = BenchmarkSettings {
        data_dir: dir.clone(),
        datasets: vec![1, 2],
        algorithms: Algorithm::ALL.to_vec(),
        timeout_secs: 5.0,
        output: dir.join("benchmark.csv"),
    };
    let results = run_benchmarks(&settings).unwrap();
    assert_eq!(results.len(), 10);
    assert!(results.iter().all(|result| result.time_seconds.is_some()));
    assert_eq!(results[0].dataset, 1);
    assert_eq!(results[0].algorithm, Algorithm::ExhaustiveSearch);
    assert_eq!(results[9].dataset, 2);
    assert_eq!(results[9].algorithm, Algorithm::BranchAndBound);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_run_benchmarks_missing_dataset() {
    let dir = scratch_dir("missing");
    let settings = BenchmarkSettings {
        data_dir: dir.clone(),
        datasets: vec![7],
        ..BenchmarkSettings::default()
    };
    let err = run_benchmarks(&settings).unwrap_err();
    assert!(err.to_string().contains("dataset 7"));
    fs::remove_dir_all(&dir).unwrap();
}
