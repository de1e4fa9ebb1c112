//! Array splitter driver.

use std::io::{BufRead, Write};

use primer_core::errors::PrimerResult;
use primer_core::programs::split::{self, Partition, SplitInput};

use crate::prompt::Prompter;

pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> PrimerResult<Partition> {
    let count: usize = prompter.prompt("Enter number of elements: ", "count")?;
    prompter.line("Enter list:")?;

    // Grows as values arrive
    let mut values = Vec::new();
    for _ in 0..count {
        values.push(prompter.next("element")?);
    }

    // Nothing is printed unless both lists were filled exactly
    let partition = split::calculate(&SplitInput::new(values))?;
    prompter.write(&split::render(&partition))?;
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_run() {
        let mut p = Prompter::new(Cursor::new(b"5\n3 -1 0\n-5 2\n".to_vec()), Vec::new());
        let partition = run(&mut p).unwrap();
        assert_eq!(partition.negative, vec![-1, -5]);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            out,
            "Enter number of elements: Enter list:\nNegative elements:\n -1 -5\nNon-negative elements:\n 3 0 2\n"
        );
    }

    #[test]
    fn test_short_list_is_missing_input() {
        let mut p = Prompter::new(Cursor::new(b"3\n1 2\n".to_vec()), Vec::new());
        let err = run(&mut p).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_huge_count_runs_out_of_input() {
        let mut p = Prompter::new(Cursor::new(b"2000000000000000000\n1 2\n".to_vec()), Vec::new());
        let err = run(&mut p).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }
}
