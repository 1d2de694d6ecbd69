//! Sample data that exercises every chart.

use tabviz::{Plotter, Table};
use tracing::info;

use crate::report;

const N: usize = 60;

/// Deterministic linear congruential noise in `[-0.5, 0.5)`.
struct Noise(u64);

impl Noise {
    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64 - 0.5
    }
}

pub fn run(plotter: &Plotter) -> anyhow::Result<()> {
    let mut noise = Noise(42);

    let x: Vec<f64> = (0..N).map(|i| i as f64 / 6.0).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() + noise.next() * 0.4).collect();
    let z: Vec<f64> = x.iter().zip(&y).map(|(a, b)| a.cos() * b).collect();
    let size: Vec<f64> = (0..N).map(|_| 50.0 + noise.next() * 20.0).collect();
    let kind: Vec<&str> = (0..N)
        .map(|i| ["alpha", "beta", "gamma", "beta"][i % 4])
        .collect();

    let counts = plotter.category_frequency(kind.clone()).map_err(report)?;
    info!(path = %counts.path.display(), total = counts.total(), "category frequency");

    plotter.line_1d(&y).map_err(report)?;
    plotter.scatter_2d(&x, &y).map_err(report)?;
    plotter.scatter_3d(&x, &y, &z).map_err(report)?;

    let table = Table::from_columns([("x", x), ("y", y), ("z", z), ("size", size)])
        .and_then(|t| t.with_column("kind", kind))
        .map_err(report)?;

    plotter.themed_scatter(&table).map_err(report)?;
    plotter.interactive_scatter(&table).map_err(report)?;
    let exploration = plotter.explore(&table).map_err(report)?;
    info!(artifacts = exploration.artifacts.len(), "exploration");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_bounded_and_repeatable() {
        let (mut a, mut b) = (Noise(7), Noise(7));
        for _ in 0..100 {
            let v = a.next();
            assert!((-0.5..0.5).contains(&v));
            assert_eq!(v, b.next());
        }
    }
}
