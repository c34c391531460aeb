//! 2x2 matrix type for curve-space Jacobians.
//!
//! [`Mat2`] is the Jacobian type of the Newton solver and of the
//! view-space transforms used when authoring gain curves.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | xx xy |   | x |   | xx*x + xy*y |
//! | yx yy | * | y | = | yx*x + yy*y |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hatm_math::{Mat2, Vec2};
//!
//! let m = Mat2::from_rows([[2.0, 0.0], [0.0, 4.0]]);
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv * Vec2::new(2.0, 4.0), Vec2::new(1.0, 1.0));
//! ```

use crate::Vec2;
use std::ops::{Index, Mul};

/// A 2x2 matrix in double precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat2 {
    /// Matrix elements in row-major order: [row0, row1]
    pub m: [[f64; 2]; 2],
}

impl Mat2 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 2]; 2] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0], [0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f64; 2]; 2]) -> Self {
        Self {
            m: [[cols[0][0], cols[1][0]], [cols[0][1], cols[1][1]]],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64) -> Self {
        Self::from_rows([[d0, 0.0], [0.0, d1]])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([[self.m[0][0], self.m[1][0]], [self.m[0][1], self.m[1][1]]])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular or the result is not finite.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = Self::from_glam(self.to_glam().inverse());
        inv.is_finite().then_some(inv)
    }

    /// Transforms a Vec2 by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..2 {
            for j in 0..2 {
                result.m[i][j] = self.m[i][0] * other.m[0][j] + self.m[i][1] * other.m[1][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat2 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat2 {
        glam::DMat2::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0]],
            [self.m[0][1], self.m[1][1]],
        ])
    }

    /// Creates from glam DMat2.
    #[inline]
    pub fn from_glam(m: glam::DMat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat2 * Vec2
impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}

// Mat2 * Mat2
impl Mul for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat2 {
    type Output = [f64; 2];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 2] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat2_identity() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(Mat2::IDENTITY * v, v);
    }

    #[test]
    fn test_mat2_transpose() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let t = m.transpose();
        assert_eq!(t.m[0][1], 3.0);
        assert_eq!(t.m[1][0], 2.0);
        assert_eq!(Mat2::from_cols([[1.0, 3.0], [2.0, 4.0]]), m);
    }

    #[test]
    fn test_mat2_inverse() {
        let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert!((m.determinant() - 10.0).abs() < 1e-12);
        let inv = m.inverse().unwrap();
        let result = m * inv;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((result.m[i][j] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_mat2_singular() {
        let m = Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat2_glam_roundtrip() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Mat2::from_glam(m.to_glam()), m);
        let v = Vec2::new(1.0, 1.0);
        assert_eq!(m * v, Vec2::from_glam(m.to_glam() * v.to_glam()));
    }
}
