//! # Dense Matrix Module
//!
//! Core numeric value type of the crate: a dense 2-D matrix of `f64` cells
//! with a checked arithmetic contract and a textual bracket-literal form.
//! Every matrix owns its cell storage exclusively (plain `Vec<f64>`), so
//! copies are deep and there is no aliasing between values.
//!
//! ## Main Structures and Methods
//!
//! ### `Matrix` Struct
//! - **Storage**: one contiguous row-major buffer indexed `row * cols + col`
//!   (no per-row allocation), shape invariants enforced at construction
//! - **Construction**: `new` (empty), `zeros`, `from_rows`, `from_scalar`,
//!   `from_text` / `str::parse`
//! - **Checked arithmetic**: `checked_add`, `checked_sub`, `checked_mul`,
//!   `checked_div` - dimension and overflow checks happen *before* any
//!   cell is computed, so a failed operation never partially computes
//! - **Text form**: `[v11,v12,...;v21,v22,...;...]` - rows separated by
//!   `;`, cells by `,`; `Display` renders it and `from_text` parses it
//!   back, round-tripping for every finite matrix
//!
//! ## Interesting Code Features
//!
//! 1. **Sign-aware overflow prediction**: addition/subtraction test
//!    `(b > 0 && a > MAX - b) || (b < 0 && a < -MAX - b)` per cell instead
//!    of checking the result after the fact
//!
//! 2. **Magnitude-ratio product check**: multiplication rejects any
//!    elementwise product with `|a| > MAX / |b|` before multiplying
//!
//! 3. **Sum-based ordering**: `<`, `>`, `<=`, `>=` compare the *sum of all
//!    cells* while `==` stays exact structural equality - see the
//!    `PartialOrd` impl for why this asymmetry is intentional

use crate::matrix::matrix_errors::MatrixError;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Divisor cells with magnitude below this threshold count as zero.
pub const DIVISION_EPSILON: f64 = 1e-10;

// Predicts whether a + b leaves the representable f64 range. Subtraction
// reuses this with b negated.
fn will_overflow(a: f64, b: f64) -> bool {
    (b > 0.0 && a > f64::MAX - b) || (b < 0.0 && a < -f64::MAX - b)
}

/// Dense 2-D matrix of `f64` values with checked arithmetic.
///
/// The invariant `data.len() == rows * cols` holds for every constructed
/// value; a zero extent in either dimension collapses to the canonical
/// empty matrix (`rows == 0 && cols == 0`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates the explicitly empty matrix (0 rows, 0 columns).
    pub fn new() -> Matrix {
        Matrix {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates a zero-filled matrix of the given shape.
    ///
    /// A zero extent in either dimension yields the empty matrix.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        if rows == 0 || cols == 0 {
            return Matrix::new();
        }
        Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix from an existing cell grid.
    ///
    /// Every row must have the same length; a jagged grid fails with
    /// `InvalidFormat`, which is how the rectangular-shape invariant is
    /// enforced at construction time.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        if rows.is_empty() {
            return Ok(Matrix::new());
        }
        let cols = rows[0].len();
        if rows.iter().any(|row| row.len() != cols) {
            return Err(MatrixError::InvalidFormat(
                "Inconsistent number of columns".to_string(),
            ));
        }
        if cols == 0 {
            return Ok(Matrix::new());
        }
        let row_count = rows.len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Ok(Matrix {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Wraps a single number as a 1x1 matrix.
    pub fn from_scalar(value: f64) -> Matrix {
        Matrix {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Parses the bracketed text form `[v11,v12,...;v21,v22,...;...]`.
    ///
    /// Rows are separated by `;` and cells by `,`; the literal and each
    /// cell are whitespace-trimmed so file lines with trailing line
    /// endings still parse. `[]` yields the empty matrix.
    ///
    /// # Errors
    /// - `InvalidFormat` - missing enclosing brackets, a non-numeric
    ///   cell, or rows with different cell counts
    /// - `Overflow` - a cell literal outside the representable range
    ///   (anything that parses to a non-finite value)
    pub fn from_text(text: &str) -> Result<Matrix, MatrixError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !trimmed.starts_with('[') || !trimmed.ends_with(']') {
            return Err(MatrixError::InvalidFormat(
                "Matrix must start with '[' and end with ']'".to_string(),
            ));
        }
        let interior = &trimmed[1..trimmed.len() - 1];
        if interior.trim().is_empty() {
            return Ok(Matrix::new());
        }

        let mut data: Vec<f64> = Vec::new();
        let mut rows = 0usize;
        let mut cols = 0usize;
        for row_text in interior.split(';') {
            let mut cells_in_row = 0usize;
            for cell in row_text.split(',') {
                let cell = cell.trim();
                let value = cell.parse::<f64>().map_err(|_| {
                    MatrixError::InvalidFormat(format!(
                        "Non-numeric value encountered: '{}'",
                        cell
                    ))
                })?;
                if !value.is_finite() {
                    return Err(MatrixError::Overflow("Value out of range".to_string()));
                }
                data.push(value);
                cells_in_row += 1;
            }
            if rows == 0 {
                cols = cells_in_row;
            } else if cells_in_row != cols {
                return Err(MatrixError::InvalidFormat(
                    "Inconsistent number of columns".to_string(),
                ));
            }
            rows += 1;
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for the explicitly empty matrix.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// True when row and column counts coincide (the empty matrix counts
    /// as square).
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Errors
    /// `OutOfBounds` for indices past the matrix shape.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds(format!(
                "cell ({}, {}) in a {}x{} matrix",
                row, col, self.rows, self.cols
            )));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Writes the cell at `(row, col)`.
    ///
    /// # Errors
    /// `OutOfBounds` for indices past the matrix shape.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds(format!(
                "cell ({}, {}) in a {}x{} matrix",
                row, col, self.rows, self.cols
            )));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Borrows one row as a slice.
    ///
    /// # Errors
    /// `OutOfBounds` for a row index past the matrix shape.
    pub fn row(&self, row: usize) -> Result<&[f64], MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::OutOfBounds(format!(
                "row {} in a {}x{} matrix",
                row, self.rows, self.cols
            )));
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    // Aggregate of all cells; this is the ordering key for PartialOrd.
    fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Elementwise addition.
    ///
    /// # Errors
    /// - `DimensionMismatch` for different shapes
    /// - `Overflow` when any elementwise sum would leave the
    ///   representable range (predicted per cell before computing)
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch(
                "Cannot add matrices of different dimensions".to_string(),
            ));
        }
        let mut result = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.data.len() {
            let (a, b) = (self.data[i], other.data[i]);
            if will_overflow(a, b) {
                return Err(MatrixError::Overflow("Addition overflow".to_string()));
            }
            result.data[i] = a + b;
        }
        Ok(result)
    }

    /// Elementwise subtraction.
    ///
    /// # Errors
    /// - `DimensionMismatch` for different shapes
    /// - `Overflow` when any elementwise difference would leave the
    ///   representable range
    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch(
                "Cannot subtract matrices of different dimensions".to_string(),
            ));
        }
        let mut result = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.data.len() {
            let (a, b) = (self.data[i], other.data[i]);
            if will_overflow(a, -b) {
                return Err(MatrixError::Overflow("Subtraction overflow".to_string()));
            }
            result.data[i] = a - b;
        }
        Ok(result)
    }

    /// Matrix product `result[i][j] = sum_k a[i][k] * b[k][j]`, dimension
    /// checked as equal shapes on both operands.
    ///
    /// The equal-shape rule (instead of the standard columns-of-A ==
    /// rows-of-B rule) is a deliberate restriction carried over from the
    /// original design: products are only defined between same-shaped
    /// square matrices, and squareness is part of the dimension check
    /// because the accumulation index runs over rows and columns at once.
    ///
    /// # Errors
    /// - `DimensionMismatch` for different shapes or non-square operands
    /// - `Overflow` when any intermediate product fails the
    ///   magnitude-ratio test `|a| > MAX / |b|`
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch(
                "Cannot multiply matrices of different dimensions".to_string(),
            ));
        }
        if self.rows != self.cols {
            return Err(MatrixError::DimensionMismatch(
                "Cannot multiply non-square matrices".to_string(),
            ));
        }
        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    let a = self.data[i * self.cols + k];
                    let b = other.data[k * other.cols + j];
                    if a != 0.0 && b != 0.0 && a.abs() > f64::MAX / b.abs() {
                        return Err(MatrixError::Overflow(
                            "Multiplication overflow".to_string(),
                        ));
                    }
                    acc += a * b;
                }
                result.data[i * other.cols + j] = acc;
            }
        }
        Ok(result)
    }

    /// Elementwise division.
    ///
    /// # Errors
    /// - `DimensionMismatch` for different shapes
    /// - `DivisionByZero` when any divisor cell has magnitude below
    ///   [`DIVISION_EPSILON`]
    pub fn checked_div(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch(
                "Cannot divide matrices of different dimensions".to_string(),
            ));
        }
        let mut result = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.data.len() {
            if other.data[i].abs() < DIVISION_EPSILON {
                return Err(MatrixError::DivisionByZero(
                    "Division by zero in matrix element".to_string(),
                ));
            }
            result.data[i] = self.data[i] / other.data[i];
        }
        Ok(result)
    }
}

/// Ordering compares the *sum of all cells*, not the structure.
///
/// This is an intentional total preorder over aggregate magnitude: two
/// matrices with equal sums but different shapes compare as `Equal` here
/// while `==` (exact shape + cell equality) says they differ. Keep that
/// asymmetry in mind when mixing `==` with `<`/`>`. A NaN sum makes the
/// comparison return `None`, so all four ordering operators are false.
impl PartialOrd for Matrix {
    fn partial_cmp(&self, other: &Matrix) -> Option<Ordering> {
        self.sum().partial_cmp(&other.sum())
    }
}

/// Renders the parseable text form: `[1,2;3,4]`. Rendering and
/// `from_text` are exact inverses for every finite matrix.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "[]");
        }
        let body = self
            .data
            .chunks(self.cols)
            .map(|row| row.iter().join(","))
            .join(";");
        write!(f, "[{}]", body)
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Matrix, MatrixError> {
        Matrix::from_text(s)
    }
}
