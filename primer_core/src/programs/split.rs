//! # Array Splitter
//!
//! Partitions a list of integers into negative values (`< 0`) and
//! non-negative values (`>= 0`), keeping the original relative order in
//! each list. Zero is non-negative.
//!
//! The split is done in two passes: count each side, allocate exactly that
//! many slots, then copy. After copying, the number of elements written to
//! each side is checked against the count; a difference is reported as
//! [`PrimerError::PartitionMismatch`].
//!
//! ## Example
//!
//! ```rust
//! use primer_core::programs::split::{calculate, SplitInput};
//!
//! let partition = calculate(&SplitInput::new(vec![3, -1, 0, -5, 2])).unwrap();
//! assert_eq!(partition.negative, vec![-1, -5]);
//! assert_eq!(partition.non_negative, vec![3, 0, 2]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PrimerError, PrimerResult};

/// The integers to split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitInput {
    pub values: Vec<i64>,
}

impl SplitInput {
    pub fn new(values: Vec<i64>) -> Self {
        SplitInput { values }
    }
}

/// The two sides of the split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub negative: Vec<i64>,
    pub non_negative: Vec<i64>,
}

/// Which side of the split a value belongs to.
pub fn is_negative(value: i64) -> bool {
    value < 0
}

/// First pass: number of negative and non-negative values.
pub fn count_signs(values: &[i64]) -> (usize, usize) {
    let negative = values.iter().filter(|&&v| is_negative(v)).count();
    (negative, values.len() - negative)
}

/// Second pass: copy `values` into buffers of exactly `sizes.0` negative
/// and `sizes.1` non-negative slots, then check both were filled exactly.
pub fn split_counted(values: &[i64], sizes: (usize, usize)) -> PrimerResult<Partition> {
    let (size_neg, size_non_neg) = sizes;
    let mut negative = vec![0; size_neg];
    let mut non_negative = vec![0; size_non_neg];
    let mut copied_neg = 0;
    let mut copied_non_neg = 0;

    for &value in values {
        let (buffer, copied) = if is_negative(value) {
            (&mut negative, &mut copied_neg)
        } else {
            (&mut non_negative, &mut copied_non_neg)
        };
        if let Some(slot) = buffer.get_mut(*copied) {
            *slot = value;
        }
        *copied += 1;
    }

    if copied_neg != size_neg {
        return Err(PrimerError::partition_mismatch("negative", size_neg, copied_neg));
    }
    if copied_non_neg != size_non_neg {
        return Err(PrimerError::partition_mismatch("non-negative", size_non_neg, copied_non_neg));
    }

    Ok(Partition { negative, non_negative })
}

/// Count, allocate and copy.
pub fn calculate(input: &SplitInput) -> PrimerResult<Partition> {
    let sizes = count_signs(&input.values);
    tracing::debug!(negative = sizes.0, non_negative = sizes.1, "counted signs");
    split_counted(&input.values, sizes)
}

/// Render a list as one line, each element preceded by a space.
pub fn render_list(values: &[i64]) -> String {
    values.iter().map(|v| format!(" {}", v)).collect()
}

/// Render both lists under their headings.
pub fn render(partition: &Partition) -> String {
    format!(
        "Negative elements:\n{}\nNon-negative elements:\n{}\n",
        render_list(&partition.negative),
        render_list(&partition.non_negative)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(values: &[i64]) -> Partition {
        calculate(&SplitInput::new(values.to_vec())).unwrap()
    }

    #[test]
    fn test_basic_split() {
        let p = split(&[3, -1, 0, -5, 2]);
        assert_eq!(p.negative, vec![-1, -5]);
        assert_eq!(p.non_negative, vec![3, 0, 2]);
    }

    #[test]
    fn test_zero_is_non_negative() {
        let p = split(&[0, 0]);
        assert!(p.negative.is_empty());
        assert_eq!(p.non_negative, vec![0, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split(&[]), Partition::default());
    }

    #[test]
    fn test_partition_is_exact() {
        let values = [7, -7, i64::MIN, i64::MAX, -1, 1, 0, -1, 7];
        let p = split(&values);
        assert_eq!(p.negative.len() + p.non_negative.len(), values.len());

        let mut merged: Vec<i64> = p.negative.iter().chain(&p.non_negative).copied().collect();
        let mut original = values.to_vec();
        merged.sort();
        original.sort();
        assert_eq!(merged, original);

        // Relative order within each side
        let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();
        assert_eq!(p.negative, negatives);
    }

    #[test]
    fn test_count_signs() {
        assert_eq!(count_signs(&[3, -1, 0, -5, 2]), (2, 3));
        assert_eq!(count_signs(&[]), (0, 0));
    }

    #[test]
    fn test_mismatch_detected() {
        let err = split_counted(&[-1, -2, 3], (1, 1)).unwrap_err();
        assert_eq!(err, PrimerError::partition_mismatch("negative", 1, 2));

        let err = split_counted(&[-1, 3], (1, 2)).unwrap_err();
        assert_eq!(err, PrimerError::partition_mismatch("non-negative", 2, 1));
    }

    #[test]
    fn test_render() {
        let p = split(&[3, -1, 0, -5, 2]);
        assert_eq!(render(&p), "Negative elements:\n -1 -5\nNon-negative elements:\n 3 0 2\n");
        assert_eq!(render_list(&[]), "");
    }
}
