use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::complex::{ComplexNumber, ONE, ZERO},
    },
};

/// A dense, row-major matrix of complex numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<ComplexNumber>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows,
               cols,
               data: vec![ZERO; rows * cols] }
    }

    /// Creates the `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = ONE;
        }
        m
    }

    /// Creates a `1 × 1` matrix holding `value`.
    #[must_use]
    pub fn scalar(value: ComplexNumber) -> Self {
        Self { rows: 1,
               cols: 1,
               data: vec![value] }
    }

    /// Builds a matrix from rows of scalars.
    ///
    /// All rows must have the same length.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::{complex::ComplexNumber, matrix::Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()],
    ///                                vec![3.0.into(), 4.0.into()]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0), Some(ComplexNumber::from(3.0)));
    ///
    /// assert!(Matrix::from_rows(vec![vec![1.0.into()], vec![]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<ComplexNumber>>) -> EvalResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut data = Vec::with_capacity(height * cols);
        for row in rows {
            if row.len() != cols {
                return Err(RuntimeError::DimensionMismatch { operation:  "matrix literal",
                                                             left_rows:  1,
                                                             left_cols:  cols,
                                                             right_rows: 1,
                                                             right_cols: row.len(), });
            }
            data.extend(row);
        }
        Ok(Self { rows: height,
                  cols,
                  data })
    }

    /// Concatenates matrices left to right; all blocks need the same height.
    pub fn hconcat(blocks: &[Self]) -> EvalResult<Self> {
        let Some(first) = blocks.first() else {
            return Ok(Self::zeros(0, 0));
        };
        let rows = first.rows;
        if let Some(bad) = blocks.iter().find(|b| b.rows != rows) {
            return Err(RuntimeError::DimensionMismatch { operation:  "horizontal concatenation",
                                                         left_rows:  first.rows,
                                                         left_cols:  first.cols,
                                                         right_rows: bad.rows,
                                                         right_cols: bad.cols, });
        }
        let cols = blocks.iter().map(|b| b.cols).sum();
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for block in blocks {
                data.extend_from_slice(block.row(r));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Stacks matrices top to bottom; all blocks need the same width.
    pub fn vconcat(blocks: &[Self]) -> EvalResult<Self> {
        let Some(first) = blocks.first() else {
            return Ok(Self::zeros(0, 0));
        };
        let cols = first.cols;
        if let Some(bad) = blocks.iter().find(|b| b.cols != cols) {
            return Err(RuntimeError::DimensionMismatch { operation:  "vertical concatenation",
                                                         left_rows:  first.rows,
                                                         left_cols:  first.cols,
                                                         right_rows: bad.rows,
                                                         right_cols: bad.cols, });
        }
        let rows = blocks.iter().map(|b| b.rows).sum();
        let data = blocks.iter()
                         .flat_map(|b| b.data.iter().copied())
                         .collect();
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` for a matrix with no element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<ComplexNumber> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Returns one row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[ComplexNumber] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// All elements in row-major order.
    #[must_use]
    pub fn elements(&self) -> &[ComplexNumber] {
        &self.data
    }

    /// Applies `f` to every element.
    #[must_use]
    pub fn map(&self, f: impl Fn(ComplexNumber) -> ComplexNumber) -> Self {
        Self { rows: self.rows,
               cols: self.cols,
               data: self.data.iter().copied().map(f).collect() }
    }

    /// Combines two same-shaped matrices element by element.
    pub fn zip_with(&self,
                    other: &Self,
                    operation: &'static str,
                    f: impl Fn(ComplexNumber, ComplexNumber) -> ComplexNumber)
                    -> EvalResult<Self> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(other, operation));
        }
        Ok(Self { rows: self.rows,
                  cols: self.cols,
                  data: self.data
                            .iter()
                            .zip(&other.data)
                            .map(|(&a, &b)| f(a, b))
                            .collect() })
    }

    /// Matrix product `self · other`.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()],
    ///                                vec![3.0.into(), 4.0.into()]]).unwrap();
    /// let b = Matrix::identity(2);
    /// assert_eq!(a.matmul(&b).unwrap(), a);
    /// assert!(a.matmul(&Matrix::identity(3)).is_err());
    /// ```
    pub fn matmul(&self, other: &Self) -> EvalResult<Self> {
        if self.cols != other.rows {
            return Err(self.mismatch(other, "multiplication"));
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a.is_zero() {
                    continue;
                }
                for j in 0..other.cols {
                    out.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Inverts a square matrix by Gauss–Jordan elimination with partial
    /// pivoting.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{error::RuntimeError, interpreter::value::matrix::Matrix};
    ///
    /// let a = Matrix::from_rows(vec![vec![2.0.into(), 0.0.into()],
    ///                                vec![0.0.into(), 4.0.into()]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv.get(0, 0), Some(0.5.into()));
    /// assert_eq!(inv.get(1, 1), Some(0.25.into()));
    ///
    /// let singular = Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()],
    ///                                       vec![2.0.into(), 4.0.into()]]).unwrap();
    /// assert_eq!(singular.inverse(), Err(RuntimeError::SingularMatrix));
    /// ```
    pub fn inverse(&self) -> EvalResult<Self> {
        const EPSILON: f64 = 1e-12;

        self.require_square("inversion")?;
        let n = self.rows;
        let mut work = self.clone();
        let mut inv = Self::identity(n);

        for col in 0..n {
            let pivot = (col..n).max_by(|&a, &b| {
                                    work.data[a * n + col].abs()
                                                          .total_cmp(&work.data[b * n + col].abs())
                                })
                                .ok_or(RuntimeError::SingularMatrix)?;
            if work.data[pivot * n + col].abs() < EPSILON {
                return Err(RuntimeError::SingularMatrix);
            }
            work.swap_rows(pivot, col);
            inv.swap_rows(pivot, col);

            let p = work.data[col * n + col];
            for j in 0..n {
                work.data[col * n + j] = work.data[col * n + j] / p;
                inv.data[col * n + j] = inv.data[col * n + j] / p;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = work.data[row * n + col];
                if factor.is_zero() {
                    continue;
                }
                for j in 0..n {
                    work.data[row * n + j] = work.data[row * n + j] - factor * work.data[col * n + j];
                    inv.data[row * n + j] = inv.data[row * n + j] - factor * inv.data[col * n + j];
                }
            }
        }
        Ok(inv)
    }

    /// Raises a square matrix to an integer power; negative powers invert
    /// first.
    pub fn powi(&self, exp: i64) -> EvalResult<Self> {
        self.require_square("exponentiation")?;
        let mut base = if exp < 0 { self.inverse()? } else { self.clone() };
        let mut result = Self::identity(self.rows);
        let mut n = exp.unsigned_abs();
        while n > 0 {
            if n % 2 == 1 {
                result = result.matmul(&base)?;
            }
            n /= 2;
            if n > 0 {
                base = base.matmul(&base)?;
            }
        }
        Ok(result)
    }

    fn require_square(&self, operation: &'static str) -> EvalResult<()> {
        if self.rows == self.cols {
            Ok(())
        } else {
            Err(RuntimeError::NotSquare { operation,
                                          rows: self.rows,
                                          cols: self.cols })
        }
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    const fn mismatch(&self, other: &Self, operation: &'static str) -> RuntimeError {
        RuntimeError::DimensionMismatch { operation,
                                          left_rows: self.rows,
                                          left_cols: self.cols,
                                          right_rows: other.rows,
                                          right_cols: other.cols }
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, "; ")?;
            }
            for (c, value) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
        }
        write!(f, "]")
    }
}
