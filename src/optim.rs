use ndarray::{Array1, Array2, ArrayView1};

use rand::Rng;
use rand_distr::StandardNormal;

/// An optimization objective: value function, gradient and dimensionality.
pub struct Objective<F, G> {
    pub f: F,
    pub grad: G,
    pub dim: usize,
}

impl<F, G> Objective<F, G>
where
    F: Fn(ArrayView1<f64>) -> f64,
    G: Fn(ArrayView1<f64>) -> Array1<f64>,
{
    pub fn new(f: F, grad: G, dim: usize) -> Self {
        Objective { f, grad, dim }
    }
}

/// One row per optimization step: position, objective value and gradient.
#[derive(Debug, Clone)]
pub struct GradTrace {
    pub positions: Array2<f64>,
    pub values: Array1<f64>,
    pub gradients: Array2<f64>,
}

impl GradTrace {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fixed-step gradient descent for `max_iter` steps at learning rate `eps`.
///
/// No line search and no stopping criterion; the whole trace is materialized.
/// Starts from `xinit` when given, otherwise from a standard normal draw.
pub fn optimize_grad<F, G>(
    objective: &Objective<F, G>,
    eps: f64,
    max_iter: usize,
    xinit: Option<Array1<f64>>,
    rng: &mut impl Rng,
) -> GradTrace
where
    F: Fn(ArrayView1<f64>) -> f64,
    G: Fn(ArrayView1<f64>) -> Array1<f64>,
{
    let dim = objective.dim;

    let mut positions = Array2::zeros((max_iter, dim));
    let mut values = Array1::zeros(max_iter);
    let mut gradients = Array2::zeros((max_iter, dim));

    if max_iter == 0 {
        return GradTrace {
            positions,
            values,
            gradients,
        };
    }

    let xinit: Array1<f64> =
        xinit.unwrap_or_else(|| (0..dim).map(|_| rng.sample(StandardNormal)).collect());
    assert_eq!(xinit.len(), dim, "initial point does not match objective.dim");

    positions.row_mut(0).assign(&xinit);
    values[0] = (objective.f)(xinit.view());
    gradients.row_mut(0).assign(&(objective.grad)(xinit.view()));

    for i in 0..max_iter - 1 {
        let next: Array1<f64> = positions.row(i).to_owned() - gradients.row(i).to_owned() * eps;

        values[i + 1] = (objective.f)(next.view());
        gradients.row_mut(i + 1).assign(&(objective.grad)(next.view()));
        positions.row_mut(i + 1).assign(&next);
    }

    GradTrace {
        positions,
        values,
        gradients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bowl() -> Objective<impl Fn(ArrayView1<f64>) -> f64, impl Fn(ArrayView1<f64>) -> Array1<f64>>
    {
        Objective::new(|x: ArrayView1<f64>| x.dot(&x), |x: ArrayView1<f64>| &x * 2., 2)
    }

    #[test]
    fn trace_length_equals_the_iteration_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let trace = optimize_grad(&bowl(), 0.1, 37, None, &mut rng);

        assert_eq!(trace.len(), 37);
        assert_eq!(trace.positions.dim(), (37, 2));
        assert_eq!(trace.values.len(), 37);
        assert_eq!(trace.gradients.dim(), (37, 2));
    }

    #[test]
    fn first_row_logs_the_initial_point() {
        let mut rng = StdRng::seed_from_u64(42);
        let trace = optimize_grad(&bowl(), 0.1, 10, Some(array![1., -1.]), &mut rng);

        assert_eq!(trace.positions.row(0).to_owned(), array![1., -1.]);
        assert_abs_diff_eq!(trace.values[0], 2.);
        assert_eq!(trace.gradients.row(0).to_owned(), array![2., -2.]);
    }

    #[test]
    fn descent_on_a_bowl_reaches_the_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let trace = optimize_grad(&bowl(), 0.1, 100, Some(array![1., 1.]), &mut rng);

        for w in trace.values.to_vec().windows(2) {
            assert!(w[1] <= w[0], "values must be non-increasing on a bowl");
        }
        assert_abs_diff_eq!(trace.values[99], 0., epsilon = 1e-6);
    }

    #[test]
    fn random_start_is_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);

        let trace_a = optimize_grad(&bowl(), 0.05, 5, None, &mut a);
        let trace_b = optimize_grad(&bowl(), 0.05, 5, None, &mut b);

        assert_eq!(trace_a.positions, trace_b.positions);
    }

    #[test]
    fn zero_iterations_yield_an_empty_trace() {
        let mut rng = StdRng::seed_from_u64(0);
        let trace = optimize_grad(&bowl(), 0.1, 0, None, &mut rng);

        assert!(trace.is_empty());
        assert_eq!(trace.positions.dim(), (0, 2));
    }
}
