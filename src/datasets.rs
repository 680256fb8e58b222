use ndarray::{Array1, Array2};

use rand::seq::SliceRandom;
use rand::Rng;

use rand_distr::{Distribution, Normal, Uniform};

use num::{Float, FromPrimitive};

use std::fs::read_to_string;
use std::path::Path;

use crate::error::{ArfError, ArfResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataModel {
    TwoGaussians,
    FourGaussians,
    Checkerboard,
}

impl DataModel {
    pub fn from_code(code: u8) -> Option<DataModel> {
        match code {
            0 => Some(DataModel::TwoGaussians),
            1 => Some(DataModel::FourGaussians),
            2 => Some(DataModel::Checkerboard),
            _ => None,
        }
    }
}

/// Draws a labeled 2D dataset from one of three generative models, perturbs both
/// coordinates with `Normal(0, epsilon)` noise and returns the rows in random order.
pub fn gen_arti(
    center: f64,
    sigma: f64,
    nbex: usize,
    model: DataModel,
    epsilon: f64,
    rng: &mut impl Rng,
) -> (Array2<f64>, Array1<f64>) {
    let mut data = Array2::<f64>::zeros((nbex, 2));
    let mut labels = Array1::<f64>::zeros(nbex);

    let n_pos = nbex / 2;
    let n_neg = nbex - n_pos;

    match model {
        DataModel::TwoGaussians => {
            let blocks = [
                ((center, center), n_pos, 1.),
                ((-center, -center), n_neg, -1.),
            ];
            fill_gaussians(&mut data, &mut labels, &blocks, sigma, rng);
        }
        DataModel::FourGaussians => {
            let blocks = [
                ((center, center), n_pos / 2, 1.),
                ((-center, -center), n_pos - n_pos / 2, 1.),
                ((-center, center), n_neg / 2, -1.),
                ((center, -center), n_neg - n_neg / 2, -1.),
            ];
            fill_gaussians(&mut data, &mut labels, &blocks, sigma, rng);
        }
        DataModel::Checkerboard => {
            let uniform = Uniform::new(-4., 4.);
            for i in 0..nbex {
                let x = uniform.sample(rng);
                let y = uniform.sample(rng);
                data[[i, 0]] = x;
                data[[i, 1]] = y;
                labels[i] = checkerboard_label(x, y);
            }
        }
    }

    // noise goes on top of already assigned labels
    let noise = Normal::new(0., epsilon).unwrap();
    for v in data.iter_mut() {
        *v += noise.sample(rng);
    }

    // break any correlation between generation order and label
    let mut idx: Vec<usize> = (0..nbex).collect();
    idx.shuffle(rng);

    let shuffled_data = Array2::from_shape_fn((nbex, 2), |(i, j)| data[[idx[i], j]]);
    let shuffled_labels = Array1::from_shape_fn(nbex, |i| labels[idx[i]]);

    (shuffled_data, shuffled_labels)
}

pub fn checkerboard_label(x: f64, y: f64) -> f64 {
    let parity = ((x.ceil() + y.ceil()) as i64).rem_euclid(2);
    (2 * parity - 1) as f64
}

// sigma is the variance of the diagonal covariance, as in the course handouts
fn fill_gaussians(
    data: &mut Array2<f64>,
    labels: &mut Array1<f64>,
    blocks: &[((f64, f64), usize, f64)],
    sigma: f64,
    rng: &mut impl Rng,
) {
    let normal = Normal::new(0., sigma.sqrt()).unwrap();

    let mut row = 0;
    for &((cx, cy), count, label) in blocks {
        for _ in 0..count {
            data[[row, 0]] = cx + normal.sample(rng);
            data[[row, 1]] = cy + normal.sample(rng);
            labels[row] = label;
            row += 1;
        }
    }
}

/// Reads a whitespace-separated text dataset: header line discarded, column 0 is
/// the label, the rest are features. Lines with two or fewer tokens are skipped.
pub fn load_usps<T, P>(path: P) -> ArfResult<(Array2<T>, Array1<i64>)>
where
    T: Float + FromPrimitive,
    P: AsRef<Path>,
{
    let contents = read_to_string(path)?;

    let mut features: Vec<T> = Vec::new();
    let mut labels: Vec<i64> = Vec::new();
    let mut width: Option<usize> = None;

    for (line_no, line) in contents.lines().enumerate().skip(1) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= 2 {
            continue;
        }

        let mut row: Vec<f64> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let value = token.parse().map_err(|_| ArfError::Parse {
                line: line_no + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }

        match width {
            None => width = Some(row.len() - 1),
            Some(w) if w != row.len() - 1 => {
                return Err(ArfError::DimensionMismatch(format!(
                    "line {}: expected {} features, got {}",
                    line_no + 1,
                    w,
                    row.len() - 1
                )));
            }
            Some(_) => {}
        }

        labels.push(row[0] as i64);
        features.extend(row[1..].iter().map(|&x| T::from_f64(x).unwrap()));
    }

    let data = Array2::from_shape_vec((labels.len(), width.unwrap_or(0)), features)
        .map_err(|e| ArfError::DimensionMismatch(e.to_string()))?;

    Ok((data, Array1::from_vec(labels)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn model_codes_match_the_course_selectors() {
        assert_eq!(DataModel::from_code(0), Some(DataModel::TwoGaussians));
        assert_eq!(DataModel::from_code(1), Some(DataModel::FourGaussians));
        assert_eq!(DataModel::from_code(2), Some(DataModel::Checkerboard));
        assert_eq!(DataModel::from_code(3), None);
    }

    #[test]
    fn two_gaussians_labels_follow_the_centers() {
        let mut rng = StdRng::seed_from_u64(42);
        let (data, labels) = gen_arti(3., 0.01, 200, DataModel::TwoGaussians, 0., &mut rng);

        assert_eq!(data.dim(), (200, 2));
        assert_eq!(labels.len(), 200);
        assert_eq!(labels.iter().filter(|&&l| l == 1.).count(), 100);
        assert_eq!(labels.iter().filter(|&&l| l == -1.).count(), 100);

        // centers are far apart relative to the spread, so the sign of the
        // coordinate sum recovers the label
        for (row, &label) in data.outer_iter().zip(labels.iter()) {
            assert_eq!((row[0] + row[1]).signum(), label);
        }
    }

    #[test]
    fn four_gaussians_counts_sum_to_nbex() {
        let mut rng = StdRng::seed_from_u64(7);
        let (data, labels) = gen_arti(1., 0.1, 1001, DataModel::FourGaussians, 0.02, &mut rng);

        assert_eq!(data.nrows(), 1001);
        assert_eq!(labels.len(), 1001);
        assert!(labels.iter().all(|&l| l == 1. || l == -1.));
        assert_eq!(labels.iter().filter(|&&l| l == 1.).count(), 500);
    }

    #[test]
    fn checkerboard_labels_are_parity_derived() {
        let mut rng = StdRng::seed_from_u64(3);
        let (data, labels) = gen_arti(1., 0.1, 500, DataModel::Checkerboard, 0., &mut rng);

        // with zero noise the coordinates are untouched, so the parity rule
        // must reproduce every label exactly
        for (row, &label) in data.outer_iter().zip(labels.iter()) {
            assert_eq!(checkerboard_label(row[0], row[1]), label);
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);

        let (data_a, labels_a) = gen_arti(1., 0.1, 64, DataModel::TwoGaussians, 0.02, &mut a);
        let (data_b, labels_b) = gen_arti(1., 0.1, 64, DataModel::TwoGaussians, 0.02, &mut b);

        assert_eq!(data_a, data_b);
        assert_eq!(labels_a, labels_b);
    }

    #[test]
    fn loader_skips_header_and_short_lines() {
        let path = std::env::temp_dir().join("arftools_loader_ok.txt");
        std::fs::write(&path, "label f0 f1 f2\n1 0.5 0.25 0.125\n9\n2 1.0 2.0 3.0\n").unwrap();

        let (data, labels) = load_usps::<f64, _>(&path).unwrap();

        assert_eq!(data.dim(), (2, 3));
        assert_eq!(labels.to_vec(), vec![1, 2]);
        assert_eq!(data[[0, 0]], 0.5);
        assert_eq!(data[[1, 2]], 3.0);
    }

    #[test]
    fn loader_reports_the_offending_line() {
        let path = std::env::temp_dir().join("arftools_loader_bad.txt");
        std::fs::write(&path, "header\n1 0.5 0.25\n2 oops 0.5\n").unwrap();

        match load_usps::<f64, _>(&path) {
            Err(ArfError::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "oops");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn loader_rejects_ragged_rows() {
        let path = std::env::temp_dir().join("arftools_loader_ragged.txt");
        std::fs::write(&path, "header\n1 0.5 0.25\n2 1.0 2.0 3.0\n").unwrap();

        assert!(matches!(
            load_usps::<f64, _>(&path),
            Err(ArfError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn loader_surfaces_missing_files() {
        let missing = std::env::temp_dir().join("arftools_no_such_file.txt");
        assert!(matches!(
            load_usps::<f64, _>(&missing),
            Err(ArfError::Io(_))
        ));
    }
}
