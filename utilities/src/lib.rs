use std::fs::File;
use std::io::{BufRead, BufReader};

use ordered_float::NotNan;

pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    pub fn from_file(filename: &str) -> std::io::Result<Dataset> {
        let file = File::open(filename)?;

        let values: Vec<f64> = BufReader::new(file)
            .lines()
            .map(|line| line.unwrap())
            .filter(|line| !line.starts_with("#"))
            .map(|line| line.parse::<f64>().unwrap())
            .collect();

        Ok(Dataset { values: values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .map(|v| NotNan::new(*v).unwrap())
            .max()
            .unwrap()
            .into_inner()
    }
}

/// Reference bin assignment: a linear scan for the first edge strictly
/// greater than each value. Slow, but independent of the binary search
/// it is used to verify.
pub fn slow_assign(edges: &[f64], values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|v| {
            let i = edges
                .iter()
                .position(|e| e > v)
                .unwrap_or(edges.len());
            edges[i.saturating_sub(1)]
        })
        .collect()
}
