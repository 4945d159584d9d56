//! Weighted decision matrix.
//!
//! Scoring reduces to a single matrix-vector product:
//!
//! ```text
//! composite = S · w
//! ```
//!
//! where `S` is the `n × 3` matrix of normalized sub-scores (one row per
//! candidate, columns cost/carbon/security) and `w` is the effective weight
//! vector. Row order is preserved, so each composite lines up with its input row.

use nalgebra::{DMatrix, DVector};

/// Build the `n × k` decision matrix from per-candidate rows.
pub fn decision_matrix<const K: usize>(rows: &[[f64; K]]) -> DMatrix<f64> {
    DMatrix::from_fn(rows.len(), K, |i, j| rows[i][j])
}

/// Weighted sum of each row: `S · w`.
///
/// Rows and weights share the column count `K`, so the product always lines up.
pub fn weighted_rows<const K: usize>(rows: &[[f64; K]], weights: &[f64; K]) -> DVector<f64> {
    decision_matrix(rows) * DVector::from_row_slice(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_rows_is_row_dot_weights() {
        let out = weighted_rows(&[[1.0, 0.0, 0.5], [0.0, 1.0, 0.5]], &[0.5, 0.25, 0.25]);
        assert_eq!(out.len(), 2);
        assert!((out[0] - 0.625).abs() < 1e-12);
        assert!((out[1] - 0.375).abs() < 1e-12);
    }

    #[test]
    fn decision_matrix_keeps_row_order() {
        let m = decision_matrix(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn no_rows_give_an_empty_vector() {
        let rows: [[f64; 3]; 0] = [];
        assert!(weighted_rows(&rows, &[1.0, 0.0, 0.0]).is_empty());
    }
}
