//! Ordering strategies over arithmetic expressions. Every strategy fully evaluates
//! both expressions first, so any evaluation failure (empty tree, dimension
//! mismatch, overflow) propagates to the caller instead of being swallowed by the
//! comparison.

use crate::expression::arithmetic_expression::ArithmeticExpression;
use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;
use std::cmp::Ordering;

/// Three-way comparator over expressions defining a total order.
pub trait ExpressionComparer {
    /// Compare two expressions by evaluating both. Evaluation and shape failures
    /// propagate as errors.
    fn compare(
        &self,
        a: &ArithmeticExpression,
        b: &ArithmeticExpression,
    ) -> Result<Ordering, MatrixError>;

    /// Comparer name for diagnostics/logging.
    fn name(&self) -> &str {
        "unnamed_comparer"
    }
}

/// Main-diagonal sum times anti-diagonal sum of a square matrix.
///
/// Fails with `Arithmetic` for non-square input. An empty matrix is square and
/// yields 0.
pub fn diagonal_product(matrix: &Matrix) -> Result<f64, MatrixError> {
    if !matrix.is_square() {
        return Err(MatrixError::Arithmetic(
            "Matrix is not square for diagonal product calculation".to_string(),
        ));
    }
    let n = matrix.rows();
    let mut main_sum = 0.0;
    let mut anti_sum = 0.0;
    for i in 0..n {
        main_sum += matrix.get(i, i)?;
        anti_sum += matrix.get(i, n - i - 1)?;
    }
    Ok(main_sum * anti_sum)
}

/// Lexicographic comparison in row-major order over the overlapping
/// (min-rows x min-cols) region; the first differing cell decides. Still-tied
/// matrices rank by fewer rows first, then fewer columns.
pub fn compare_matrices_lex(a: &Matrix, b: &Matrix) -> Result<Ordering, MatrixError> {
    let min_rows = a.rows().min(b.rows());
    let min_cols = a.cols().min(b.cols());
    for i in 0..min_rows {
        for j in 0..min_cols {
            let x = a.get(i, j)?;
            let y = b.get(i, j)?;
            if x < y {
                return Ok(Ordering::Less);
            }
            if x > y {
                return Ok(Ordering::Greater);
            }
        }
    }
    Ok(a.rows().cmp(&b.rows()).then(a.cols().cmp(&b.cols())))
}

/// Orders expressions by the diagonal product of their evaluated matrices. Equal
/// products (and incomparable NaN products) rank as equal.
pub struct DiagonalProductComparer;

impl ExpressionComparer for DiagonalProductComparer {
    fn compare(
        &self,
        a: &ArithmeticExpression,
        b: &ArithmeticExpression,
    ) -> Result<Ordering, MatrixError> {
        let m1 = a.evaluate()?;
        let m2 = b.evaluate()?;
        let product1 = diagonal_product(&m1)?;
        let product2 = diagonal_product(&m2)?;
        Ok(match product1.partial_cmp(&product2) {
            Some(Ordering::Less) => Ordering::Less,
            Some(Ordering::Greater) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }

    fn name(&self) -> &str {
        "diagonal_product"
    }
}

/// Same primary key as [`DiagonalProductComparer`], but ties fall through to the
/// lexicographic cell comparison of the evaluated matrices.
pub struct DiagonalProductThenLexComparer;

impl ExpressionComparer for DiagonalProductThenLexComparer {
    fn compare(
        &self,
        a: &ArithmeticExpression,
        b: &ArithmeticExpression,
    ) -> Result<Ordering, MatrixError> {
        let m1 = a.evaluate()?;
        let m2 = b.evaluate()?;
        let product1 = diagonal_product(&m1)?;
        let product2 = diagonal_product(&m2)?;
        match product1.partial_cmp(&product2) {
            Some(Ordering::Less) => Ok(Ordering::Less),
            Some(Ordering::Greater) => Ok(Ordering::Greater),
            _ => compare_matrices_lex(&m1, &m2),
        }
    }

    fn name(&self) -> &str {
        "diagonal_product_then_lex"
    }
}
