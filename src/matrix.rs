//! Response matrix types for calificar.
//!
//! Provides [`ResponseMatrix`], the validated 0/1 matrix every analysis
//! starts from. Rows index persons (test-takers), columns index items
//! (questions). The matrix is immutable once constructed.

use std::path::Path;

use crate::error::{Error, Result};

/// A validated rectangular matrix of binary responses.
///
/// Invariants enforced at construction: at least one row, all rows the
/// same length (at least one column), every cell 0 or 1.
///
/// The wire format accepted by [`ResponseMatrix::parse`] is stricter than
/// the type itself: newline-delimited rows of comma-separated `0`/`1`
/// tokens, at least two non-empty lines. Programmatic construction via
/// [`ResponseMatrix::new`] accepts a single row, which is what degenerate
/// single-person analyses use.
///
/// # Example
///
/// ```
/// use calificar::ResponseMatrix;
///
/// let matrix = ResponseMatrix::parse("1,0,1\n0,1,1\n").unwrap();
/// assert_eq!(matrix.num_persons(), 2);
/// assert_eq!(matrix.num_items(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMatrix {
    rows: Vec<Vec<u8>>,
    num_items: usize,
}

impl ResponseMatrix {
    /// Creates a matrix from pre-built rows, enforcing the type invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rows` is empty, or the first row has no columns
    /// - any row has a different length than the first
    /// - any cell is not 0 or 1
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::empty_matrix("matrix has no rows"));
        };
        let num_items = first.len();
        if num_items == 0 {
            return Err(Error::empty_matrix("matrix rows have no columns"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_items {
                return Err(Error::malformed_matrix(
                    i + 1,
                    render_row(row),
                    format!("expected {} columns, found {}", num_items, row.len()),
                ));
            }
            if let Some(cell) = row.iter().find(|&&v| v > 1) {
                return Err(Error::malformed_matrix(
                    i + 1,
                    render_row(row),
                    format!("value {} is not 0 or 1", cell),
                ));
            }
        }

        Ok(Self { rows, num_items })
    }

    /// Parses the canonical wire format: newline-delimited rows of
    /// comma-separated `0`/`1` tokens.
    ///
    /// Tokens are trimmed of surrounding whitespace; blank lines are
    /// skipped. All rows must have the same column count and at least two
    /// non-empty lines are required. There is no partial parse: the first
    /// violation fails the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMatrix`] carrying the 1-based line number
    /// and the offending line for non-binary tokens and ragged rows, or
    /// [`Error::EmptyMatrix`] when fewer than two non-empty lines exist.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut expected_width: Option<usize> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_number = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut row = Vec::new();
            for token in line.split(',') {
                match token.trim() {
                    "0" => row.push(0),
                    "1" => row.push(1),
                    other => {
                        return Err(Error::malformed_matrix(
                            line_number,
                            line,
                            format!("token {:?} is not 0 or 1", other),
                        ));
                    }
                }
            }

            match expected_width {
                None => expected_width = Some(row.len()),
                Some(width) if row.len() != width => {
                    return Err(Error::malformed_matrix(
                        line_number,
                        line,
                        format!("expected {} columns, found {}", width, row.len()),
                    ));
                }
                Some(_) => {}
            }

            rows.push(row);
        }

        match rows.len() {
            0 => Err(Error::empty_matrix("input contains no non-empty lines")),
            1 => Err(Error::empty_matrix(
                "at least 2 non-empty lines required, found 1",
            )),
            _ => Self::new(rows),
        }
    }

    /// Loads a matrix from a file in the canonical wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content fails
    /// [`ResponseMatrix::parse`].
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::parse(&text)
    }

    /// Returns the number of persons (rows).
    #[must_use]
    pub fn num_persons(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of items (columns).
    #[must_use]
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Returns one person's responses, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, person: usize) -> Option<&[u8]> {
        self.rows.get(person).map(Vec::as_slice)
    }

    /// Returns a single response, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, person: usize, item: usize) -> Option<u8> {
        self.rows.get(person).and_then(|r| r.get(item)).copied()
    }

    /// Iterates over all rows in person order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the count of correct responses per column.
    #[must_use]
    pub fn column_sums(&self) -> Vec<usize> {
        let mut sums = vec![0usize; self.num_items];
        for row in &self.rows {
            for (sum, &value) in sums.iter_mut().zip(row.iter()) {
                *sum += usize::from(value);
            }
        }
        sums
    }

    /// Returns the total count of correct responses across the matrix.
    #[must_use]
    pub fn total_correct(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| usize::from(v)).sum::<usize>())
            .sum()
    }
}

/// Render a row the way the wire format would spell it, for error context.
fn render_row(row: &[u8]) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
