//! Finite-difference first-derivative stencils on `(ny, nx)` arrays.
//!
//! `Axis(0)` differentiates along y (rows), `Axis(1)` along x (columns).

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// First-derivative discretization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stencil {
    /// `(η[k+1] − η[k−1]) / 2h`, indices wrapped periodically.
    CenteredPeriodic,
    /// `(η[k] − η[k−1]) / h`, indices wrapped periodically. On a C-grid this
    /// is the derivative at the face between `k−1` and `k`.
    BackwardPeriodic,
    /// Centered in the interior, first-order one-sided at the two edges,
    /// no wrapping.
    OneSidedEdges,
}

impl Stencil {
    /// Short name used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Stencil::CenteredPeriodic => "centered-periodic",
            Stencil::BackwardPeriodic => "backward-periodic",
            Stencil::OneSidedEdges => "one-sided-edges",
        }
    }

    /// Derivative of `field` along `axis` with grid spacing `h`.
    ///
    /// The result has the same shape as `field`. A direction with a single
    /// point has zero derivative.
    pub fn derivative(self, field: &Array2<f64>, axis: Axis, h: f64) -> Array2<f64> {
        let n = field.len_of(axis);
        let along_rows = axis == Axis(0);

        Array2::from_shape_fn(field.dim(), |(j, i)| {
            let k = if along_rows { j } else { i };
            let at = |m: usize| {
                if along_rows {
                    field[[m, i]]
                } else {
                    field[[j, m]]
                }
            };
            let prev = (k + n - 1) % n;
            let next = (k + 1) % n;

            match self {
                Stencil::CenteredPeriodic => (at(next) - at(prev)) / (2.0 * h),
                Stencil::BackwardPeriodic => (at(k) - at(prev)) / h,
                Stencil::OneSidedEdges => {
                    if n < 2 {
                        0.0
                    } else if k == 0 {
                        (at(1) - at(0)) / h
                    } else if k == n - 1 {
                        (at(n - 1) - at(n - 2)) / h
                    } else {
                        (at(k + 1) - at(k - 1)) / (2.0 * h)
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_linear_field_exact_in_interior() {
        // η = 3x on 5 columns, h = 2
        let field = Array2::from_shape_fn((2, 5), |(_, i)| 3.0 * 2.0 * i as f64);
        for stencil in [
            Stencil::CenteredPeriodic,
            Stencil::BackwardPeriodic,
            Stencil::OneSidedEdges,
        ] {
            let d = stencil.derivative(&field, Axis(1), 2.0);
            assert!((d[[1, 2]] - 3.0).abs() < 1e-12, "{}", stencil.name());
        }
    }

    #[test]
    fn test_centered_wraps() {
        let field = array![[1.0, 2.0, 4.0, 8.0]];
        let d = Stencil::CenteredPeriodic.derivative(&field, Axis(1), 1.0);
        assert_eq!(d[[0, 0]], (2.0 - 8.0) / 2.0);
        assert_eq!(d[[0, 3]], (1.0 - 4.0) / 2.0);
    }

    #[test]
    fn test_backward_wraps() {
        let field = array![[1.0], [2.0], [4.0]];
        let d = Stencil::BackwardPeriodic.derivative(&field, Axis(0), 0.5);
        assert_eq!(d[[0, 0]], (1.0 - 4.0) / 0.5);
        assert_eq!(d[[2, 0]], (4.0 - 2.0) / 0.5);
    }

    #[test]
    fn test_one_sided_edges_do_not_wrap() {
        let field = array![[1.0, 2.0, 4.0, 8.0]];
        let d = Stencil::OneSidedEdges.derivative(&field, Axis(1), 1.0);
        assert_eq!(d.row(0).to_vec(), vec![1.0, 1.5, 3.0, 4.0]);
    }

    #[test]
    fn test_single_point_direction() {
        let field = array![[5.0, 6.0]];
        for stencil in [
            Stencil::CenteredPeriodic,
            Stencil::BackwardPeriodic,
            Stencil::OneSidedEdges,
        ] {
            let d = stencil.derivative(&field, Axis(0), 1.0);
            assert_eq!(d, array![[0.0, 0.0]]);
        }
    }
}
