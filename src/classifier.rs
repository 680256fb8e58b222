use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{ArfError, ArfResult};

/// Common contract for the course's classifiers: learn with `fit`, label with
/// `predict`, evaluate with `score`. Stubbed methods report
/// [`ArfError::NotImplemented`] so they stay distinguishable from computation
/// errors.
pub trait Classifier {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> ArfResult<()>;

    fn predict(&self, x: ArrayView2<f64>) -> ArfResult<Array1<f64>>;

    /// Fraction of examples whose prediction matches the label.
    fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> ArfResult<f64> {
        let predictions = self.predict(x)?;
        if predictions.len() != y.len() {
            return Err(ArfError::DimensionMismatch(format!(
                "{} predictions for {} labels",
                predictions.len(),
                y.len()
            )));
        }
        if y.is_empty() {
            return Err(ArfError::DimensionMismatch(
                "no examples to score".to_string(),
            ));
        }

        let hits = predictions
            .iter()
            .zip(y.iter())
            .filter(|(prediction, label)| prediction == label)
            .count();

        Ok(hits as f64 / y.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use ndarray::array;

    struct Stub;

    impl Classifier for Stub {
        fn fit(&mut self, _x: ArrayView2<f64>, _y: ArrayView1<f64>) -> ArfResult<()> {
            Err(ArfError::NotImplemented("fit"))
        }

        fn predict(&self, _x: ArrayView2<f64>) -> ArfResult<Array1<f64>> {
            Err(ArfError::NotImplemented("predict"))
        }
    }

    struct Constant(f64);

    impl Classifier for Constant {
        fn fit(&mut self, _x: ArrayView2<f64>, _y: ArrayView1<f64>) -> ArfResult<()> {
            Ok(())
        }

        fn predict(&self, x: ArrayView2<f64>) -> ArfResult<Array1<f64>> {
            Ok(Array1::from_elem(x.nrows(), self.0))
        }
    }

    #[test]
    fn stubbed_methods_are_distinguishable() {
        let mut stub = Stub;
        let x = array![[0., 0.]];
        let y = array![1.];

        assert!(matches!(
            stub.fit(x.view(), y.view()),
            Err(ArfError::NotImplemented("fit"))
        ));
        assert!(matches!(
            stub.predict(x.view()),
            Err(ArfError::NotImplemented("predict"))
        ));
        // score goes through predict and must carry the same signal
        assert!(matches!(
            stub.score(x.view(), y.view()),
            Err(ArfError::NotImplemented("predict"))
        ));
    }

    #[test]
    fn score_is_the_agreement_fraction() {
        let classifier = Constant(1.);
        let x = array![[0., 0.], [1., 1.], [2., 2.], [3., 3.]];
        let y = array![1., 1., -1., 1.];

        let score = classifier.score(x.view(), y.view()).unwrap();
        assert_abs_diff_eq!(score, 0.75);
    }

    #[test]
    fn score_rejects_mismatched_shapes() {
        let classifier = Constant(1.);
        let x = array![[0., 0.], [1., 1.]];
        let y = array![1.];

        assert!(matches!(
            classifier.score(x.view(), y.view()),
            Err(ArfError::DimensionMismatch(_))
        ));
    }
}
