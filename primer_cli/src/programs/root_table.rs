//! Root table driver.

use std::io::{BufRead, Write};

use primer_core::errors::PrimerResult;
use primer_core::programs::root_table::{self, RootTable, RootTableInput};

use crate::prompt::Prompter;

pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, strict: bool) -> PrimerResult<RootTable> {
    let input = RootTableInput {
        root_count: prompter.prompt("Enter number of roots: ", "root_count")?,
        increment: prompter.prompt("Enter value increment (integer): ", "increment")?,
        precision: prompter.prompt("Enter precision: ", "precision")?,
    };
    prompter.line("")?;

    if strict {
        input.validate()?;
    }
    let table = root_table::calculate(&input)?;
    prompter.write(&root_table::render(&table))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str, strict: bool) -> (PrimerResult<RootTable>, String) {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(&mut p, strict);
        (result, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn test_run() {
        let (table, out) = run_with("2\n50\n2\n", false);
        assert_eq!(table.unwrap().rows.len(), 2);
        assert_eq!(
            out,
            concat!(
                "Enter number of roots: Enter value increment (integer): Enter precision: \n",
                "Value  x^1/2  x^1/3\n",
                "   50   7.07   3.68\n",
                "  100  10.00   4.64\n",
            )
        );
    }

    #[test]
    fn test_zero_increment_fails_without_output() {
        let (result, out) = run_with("2 0 2\n", false);
        assert!(result.is_err());
        assert!(!out.contains("Value"));
    }

    #[test]
    fn test_strict_rejects_zero_roots() {
        let (result, _) = run_with("0 10 2\n", true);
        assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");

        let (result, out) = run_with("0 10 2\n", false);
        assert!(result.is_ok());
        assert!(out.contains("Value\n   10\n"));
    }

    #[test]
    fn test_negative_precision_rejected() {
        let (result, _) = run_with("2 10 -1\n", false);
        assert!(result.unwrap_err().is_input_error());
    }
}
