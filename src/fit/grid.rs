//! Lazy enumeration of the parameter grid.
//!
//! The sweep is a deterministic nested-loop walk over the active ranges,
//! expressed as a cartesian product so the (potentially billions of)
//! candidates never materialize as a collection.

use itertools::Itertools;

use crate::domain::{Candidate, SweepConfig};

/// Enumerate every candidate of the config's grid, in sweep precedence
/// order: `λ1` is the outermost (slowest) loop and the last active range
/// the innermost.
///
/// The iterator is lazy and restartable; enumerating the same config twice
/// yields the same sequence.
pub fn candidates(config: &SweepConfig) -> impl Iterator<Item = Candidate> {
    let model = config.model;
    config
        .active_ranges()
        .into_iter()
        .map(|range| range.values())
        .multi_cartesian_product()
        .map(move |values| Candidate::from_values(model, &values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelKind, ParamRange};
    use std::path::PathBuf;

    fn config(model: ModelKind, bounds: [(f64, f64); 6], step: f64) -> SweepConfig {
        let range = |name, (min, max)| ParamRange::new(name, min, max, step).unwrap();
        SweepConfig {
            model,
            log_path: PathBuf::from("out.log"),
            lambda_one: range("lambda_one", bounds[0]),
            lambda_two: range("lambda_two", bounds[1]),
            r_i: range("r_i", bounds[2]),
            r_s: range("r_s", bounds[3]),
            r: range("r", bounds[4]),
            sigma: range("sigma", bounds[5]),
        }
    }

    fn reference_config(model: ModelKind) -> SweepConfig {
        config(
            model,
            [
                (5.0, 12.0),
                (2.5, 6.0),
                (3.0, 10.0),
                (3.0, 10.0),
                (1.0, 5.0),
                (1.0, 5.0),
            ],
            0.1,
        )
    }

    #[test]
    fn enumeration_matches_nested_loop_order() {
        let config = config(
            ModelKind::Reduced,
            [
                (8.0, 8.2),
                (4.0, 4.15),
                (6.0, 6.1),
                (1.0, 1.1),
                (1.0, 1.1),
                (1.0, 1.1),
            ],
            0.1,
        );

        let got: Vec<Vec<f64>> = candidates(&config).map(|c| c.values()).collect();
        let expected = [
            [8.0, 4.0, 6.0],
            [8.0, 4.1, 6.0],
            [8.1, 4.0, 6.0],
            [8.1, 4.1, 6.0],
        ];

        assert_eq!(got.len(), expected.len());
        for (row, want) in got.iter().zip(expected.iter()) {
            for (a, b) in row.iter().zip(want.iter()) {
                assert!((a - b).abs() < 1e-9, "{row:?} vs {want:?}");
            }
        }
    }

    #[test]
    fn enumeration_is_restartable() {
        let config = config(
            ModelKind::Reduced,
            [
                (5.0, 5.3),
                (2.5, 2.8),
                (3.0, 3.2),
                (1.0, 1.1),
                (1.0, 1.1),
                (1.0, 1.1),
            ],
            0.1,
        );

        let first: Vec<Candidate> = candidates(&config).collect();
        let second: Vec<Candidate> = candidates(&config).collect();
        assert_eq!(first, second);
        assert_eq!(first.len() as u64, config.candidate_count());
    }

    #[test]
    fn full_enumeration_count_matches_range_product() {
        let config = config(
            ModelKind::Full,
            [
                (5.0, 5.3),
                (2.5, 2.7),
                (3.0, 3.2),
                (3.0, 3.1),
                (1.0, 1.2),
                (1.0, 1.1),
            ],
            0.1,
        );

        // Ceil counting over binary floats rounds some of these spans up
        // (2.7 - 2.5 = 0.20000000000000018, so the quotient tops 2): the
        // lens are 3, 3, 3, 2, 2, 2 and the enumerator must agree with
        // their product.
        assert_eq!(
            config.active_ranges().iter().map(ParamRange::len).collect::<Vec<_>>(),
            vec![3, 3, 3, 2, 2, 2]
        );
        assert_eq!(config.candidate_count(), 216);
        assert_eq!(candidates(&config).count() as u64, 216);
    }

    #[test]
    fn reference_grid_counts() {
        let full = reference_config(ModelKind::Full);
        assert_eq!(
            full.active_ranges().iter().map(ParamRange::len).collect::<Vec<_>>(),
            vec![70, 35, 70, 70, 40, 40]
        );
        assert_eq!(full.candidate_count(), 19_208_000_000);

        let reduced = reference_config(ModelKind::Reduced);
        assert_eq!(reduced.candidate_count(), 171_500);
    }

    #[test]
    fn enumeration_is_lazy() {
        // Taking the head of the 1.9e10-point grid must not enumerate it.
        let config = reference_config(ModelKind::Full);
        let head: Vec<Candidate> = candidates(&config).take(2).collect();

        assert_eq!(head.len(), 2);
        let first = head[0].values();
        for (value, want) in first.iter().zip([5.0, 2.5, 3.0, 3.0, 1.0, 1.0]) {
            assert!((value - want).abs() < 1e-9);
        }
        // Only the innermost parameter has advanced.
        assert!((head[1].values()[5] - 1.1).abs() < 1e-9);
    }
}
