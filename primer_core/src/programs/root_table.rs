//! # Root Table Generator
//!
//! Builds a table whose rows are the multiples of an increment up to 100 and
//! whose columns are the square, cube, ... `(n+1)`-th roots of each value.
//!
//! ## Layout
//!
//! - Column width is `max(7, 5 + precision)`.
//! - The value column is 5 wide.
//! - Header labels are `x^1/` right-aligned in `width - 1` followed by the
//!   root index; once the index has two or more digits the label field
//!   shrinks to `width - 2`. Existing output depends on this exact shape.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::programs::root_table::{calculate, render, RootTableInput};
//!
//! let input = RootTableInput { root_count: 2, increment: 50, precision: 2 };
//! let table = calculate(&input).unwrap();
//! assert_eq!(table.rows.len(), 2);
//! print!("{}", render(&table));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PrimerError, PrimerResult};
use crate::format;

/// Largest value in the table
pub const MAX_VALUE: i64 = 100;

/// Narrowest allowed root column
pub const MIN_COLUMN_WIDTH: usize = 7;

/// Width of the leading value column
pub const VALUE_WIDTH: usize = 5;

/// Input parameters for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTableInput {
    /// Number of root columns; the last column is the `(root_count + 1)`-th root
    pub root_count: i64,
    /// Step between successive values
    pub increment: i64,
    /// Digits after the decimal point
    pub precision: usize,
}

impl RootTableInput {
    /// Validate input parameters.
    ///
    /// Only applied when the caller asks for strict checking; see
    /// [`calculate`] for the checks that always run.
    pub fn validate(&self) -> PrimerResult<()> {
        if self.root_count < 1 {
            return Err(PrimerError::invalid_input(
                "root_count",
                self.root_count.to_string(),
                "Number of roots must be at least 1",
            ));
        }
        check_increment(self.increment)
    }

    /// Root indices shown as columns: `2 ..= root_count + 1`
    pub fn root_indices(&self) -> std::ops::RangeInclusive<i64> {
        2..=self.root_count.saturating_add(1)
    }
}

/// One table row: a value and its roots in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootRow {
    pub value: i64,
    pub roots: Vec<f64>,
}

/// The computed table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootTable {
    pub input: RootTableInput,
    pub column_width: usize,
    pub rows: Vec<RootRow>,
}

/// Column width for a given precision.
pub fn column_width(precision: usize) -> usize {
    (VALUE_WIDTH + precision).max(MIN_COLUMN_WIDTH)
}

fn check_increment(increment: i64) -> PrimerResult<()> {
    if increment < 1 {
        return Err(PrimerError::invalid_input(
            "increment",
            increment.to_string(),
            "Increment must be a positive integer",
        ));
    }
    Ok(())
}

/// Compute every row of the table.
///
/// A non-positive increment is rejected even without strict validation,
/// since the row sequence would never reach 100.
pub fn calculate(input: &RootTableInput) -> PrimerResult<RootTable> {
    check_increment(input.increment)?;

    let rows: Vec<RootRow> = (1..)
        .map(|k| k * input.increment)
        .take_while(|&value| value <= MAX_VALUE)
        .map(|value| RootRow {
            value,
            roots: input
                .root_indices()
                .map(|root| (value as f64).powf(1.0 / root as f64))
                .collect(),
        })
        .collect();

    tracing::debug!(rows = rows.len(), columns = input.root_count.max(0), "built root table");

    Ok(RootTable {
        input: *input,
        column_width: column_width(input.precision),
        rows,
    })
}

/// Render the header line (without trailing newline).
pub fn render_header(input: &RootTableInput, width: usize) -> String {
    let mut line = String::from("Value");
    for root in input.root_indices() {
        let label_width = if root < 10 { width - 1 } else { width - 2 };
        line.push_str(&format::right("x^1/", label_width));
        line.push_str(&root.to_string());
    }
    line
}

/// Render a single data row (without trailing newline).
pub fn render_row(row: &RootRow, precision: usize, width: usize) -> String {
    let mut line = format::right(row.value, VALUE_WIDTH);
    for root in &row.roots {
        line.push_str(&format::right(format::fixed(*root, precision), width));
    }
    line
}

/// Render the full table, one line per row, newline-terminated.
pub fn render(table: &RootTable) -> String {
    let mut out = render_header(&table.input, table.column_width);
    out.push('\n');
    for row in &table.rows {
        out.push_str(&render_row(row, table.input.precision, table.column_width));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(root_count: i64, increment: i64, precision: usize) -> RootTableInput {
        RootTableInput { root_count, increment, precision }
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(0), 7);
        assert_eq!(column_width(2), 7);
        assert_eq!(column_width(3), 8);
        assert_eq!(column_width(10), 15);
    }

    #[test]
    fn test_row_and_column_counts() {
        for (n, inc, p) in [(2, 1, 0), (3, 7, 2), (9, 33, 4), (1, 100, 1)] {
            let table = calculate(&input(n, inc, p)).unwrap();
            assert_eq!(table.rows.len() as i64, 100 / inc);
            assert!(table.rows.iter().all(|r| r.roots.len() as i64 == n));
        }
    }

    #[test]
    fn test_increment_over_100_has_no_rows() {
        let table = calculate(&input(2, 101, 2)).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_root_values() {
        let table = calculate(&input(3, 4, 3)).unwrap();
        let row = table.rows.iter().find(|r| r.value == 64).unwrap();
        assert!((row.roots[0] - 8.0).abs() < 1e-9);
        assert!((row.roots[1] - 4.0).abs() < 1e-9);
        assert!((row.roots[2] - 64f64.powf(0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_increment_rejected() {
        let err = calculate(&input(2, 0, 2)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(calculate(&input(2, -5, 2)).is_err());
    }

    #[test]
    fn test_validate_root_count() {
        assert!(input(0, 10, 2).validate().is_err());
        assert!(input(1, 10, 2).validate().is_ok());
        // Unvalidated, zero roots just means no root columns
        let table = calculate(&input(0, 50, 2)).unwrap();
        assert!(table.rows.iter().all(|r| r.roots.is_empty()));
    }

    #[test]
    fn test_render_small_table() {
        let table = calculate(&input(2, 50, 2)).unwrap();
        let expected = concat!(
            "Value  x^1/2  x^1/3\n",
            "   50   7.07   3.68\n",
            "  100  10.00   4.64\n",
        );
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn test_header_two_digit_roots() {
        let header = render_header(&input(9, 10, 2), 7);
        assert!(header.ends_with("  x^1/9 x^1/10"));
        // Every label stays 7 characters wide
        assert_eq!(header.len(), "Value".len() + 9 * 7);
    }

    #[test]
    fn test_render_row_widens_with_precision() {
        let row = RootRow { value: 2, roots: vec![2f64.sqrt()] };
        assert_eq!(render_row(&row, 4, column_width(4)), "    2   1.4142");
    }
}
