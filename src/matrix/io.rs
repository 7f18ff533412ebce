//! Plain-text matrix format.
//!
//! One row per non-empty line, values separated by whitespace, no header or
//! dimension line. Blank lines are skipped on input; all rows must carry
//! the same number of values.

use core::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar + FromStr> Matrix<T> {
    /// Parse a matrix from a whitespace-delimited text file.
    ///
    /// Fails with [`Error::Io`] if the file cannot be read, and with
    /// [`Error::InvalidShape`] if the rows have unequal lengths, the file
    /// holds no values, or a token is not a number.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut rows: Vec<Vec<T>> = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value = token.parse::<T>().map_err(|_| {
                    Error::InvalidShape(format!(
                        "line {}: invalid value {:?}",
                        lineno + 1,
                        token,
                    ))
                })?;
                row.push(value);
            }
            rows.push(row);
        }
        Self::from_nested(&rows)
    }
}

impl<T: Scalar + fmt::Display> Matrix<T> {
    /// Write the matrix in the text format, six decimals per value.
    ///
    /// Loading the file back yields the original within the printed
    /// precision.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = String::new();
        for i in 0..self.nrows {
            for (j, x) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{x:.6}"));
            }
            out.push('\n');
        }
        fs::write(path, out).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Right-aligned table rendering for terminal inspection.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            let row = &self.data[i * self.ncols..(i + 1) * self.ncols];
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{x:>12.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
