use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};
use core::fmt;

use crate::traits::Scalar;

use super::DynMatrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Column manipulation ─────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// New matrix whose column `k` is column `order[k]` of `self`.
    ///
    /// Panics if any index in `order` is out of range.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let p = m.select_cols(&[2, 0]);
    /// assert_eq!(p.as_slice(), &[3.0, 1.0, 6.0, 4.0]);
    /// ```
    pub fn select_cols(&self, order: &[usize]) -> Self {
        DynMatrix::from_fn(self.nrows, order.len(), |i, k| self[(i, order[k])])
    }

    /// Overwrite column `j` with zeros.
    pub fn zero_col(&mut self, j: usize) {
        for i in 0..self.nrows {
            self[(i, j)] = T::zero();
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|x| match precision {
                Some(p) => format!("{:.*}", p, x),
                None => format!("{}", x),
            })
            .collect();

        // Right-align each column to its widest cell
        let mut widths = vec![0usize; self.ncols];
        for (k, cell) in cells.iter().enumerate() {
            let j = k % self.ncols;
            widths[j] = widths[j].max(cell.chars().count());
        }

        for (i, row) in cells.chunks(self.ncols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "│")?;
            for (j, cell) in row.iter().enumerate() {
                let sep = if j > 0 { "  " } else { "" };
                write!(f, "{}{:>w$}", sep, cell, w = widths[j])?;
            }
            write!(f, "│")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_type_change() {
        let m = DynMatrix::from_rows(1, 3, &[1.5_f64, 2.5, 3.5]).unwrap();
        let r: DynMatrix<i64> = m.map(|x| x as i64);
        assert_eq!(r.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn select_cols_permutes() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let p = m.select_cols(&[1, 2, 0]);
        assert_eq!(p.shape(), (2, 3));
        assert_eq!(p.as_slice(), &[2.0, 3.0, 1.0, 5.0, 6.0, 4.0]);
    }

    #[test]
    fn zero_column() {
        let mut m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        m.zero_col(0);
        assert_eq!(m.as_slice(), &[0.0, 2.0, 0.0, 4.0]);
    }

    #[test]
    fn display() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let s = format!("{}", m);
        assert_eq!(s, "│1  2│\n│3  4│");
    }

    #[test]
    fn display_alignment() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 100.0, -3.5, 4.0]).unwrap();
        let s = format!("{}", m);
        assert_eq!(s, "│   1  100│\n│-3.5    4│");
    }

    #[test]
    fn display_precision() {
        let m = DynMatrix::from_rows(1, 2, &[1.0_f64, -0.5]).unwrap();
        let s = format!("{:.2}", m);
        assert_eq!(s, "│1.00  -0.50│");
    }
}
