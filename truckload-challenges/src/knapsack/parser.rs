use super::{Challenge, Item};
use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Parses a pallets table. The first line is a header, every following
/// non-blank line is `id,weight,profit`.
pub fn parse_pallets(contents: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (i, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(anyhow!(
                "Line {}: expected 'id,weight,profit', got '{}'",
                i + 1,
                line
            ));
        }
        let weight = parse_field(fields[1], "weight", i + 1)?;
        let profit = parse_field(fields[2], "profit", i + 1)?;
        items.push(Item { weight, profit });
    }
    Ok(items)
}

/// Parses a truck table. The first line is a header, the capacity is the first
/// field of the second line.
pub fn parse_capacity(contents: &str) -> Result<u32> {
    let line = contents
        .lines()
        .nth(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| anyhow!("Missing truck capacity row"))?;
    let field = line.split(',').next().unwrap_or_default().trim();
    parse_field(field, "capacity", 2)
}

fn parse_field(field: &str, name: &str, line_number: usize) -> Result<u32> {
    field.parse::<u32>().map_err(|e| {
        anyhow!(
            "Line {}: invalid {} '{}': {}",
            line_number,
            name,
            field,
            e
        )
    })
}

pub fn load_pallets(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pallets file: {}", path.display()))?;
    parse_pallets(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_capacity(path: impl AsRef<Path>) -> Result<u32> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read truck file: {}", path.display()))?;
    parse_capacity(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_challenge(pallets: impl AsRef<Path>, truck: impl AsRef<Path>) -> Result<Challenge> {
    Ok(Challenge {
        items: load_pallets(pallets)?,
        capacity: load_capacity(truck)?,
    })
}

/// `Pallets_XX.csv` and `TruckAndPallets_XX.csv` for dataset `XX`.
pub fn dataset_paths(dir: impl AsRef<Path>, dataset: u32) -> (PathBuf, PathBuf) {
    let dir = dir.as_ref();
    (
        dir.join(format!("Pallets_{:02}.csv", dataset)),
        dir.join(format!("TruckAndPallets_{:02}.csv", dataset)),
    )
}
