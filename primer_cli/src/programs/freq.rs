//! Letter frequency counter driver.

use std::io::{BufRead, Write};

use primer_core::errors::PrimerResult;
use primer_core::programs::letter_freq::{self, LetterFreqInput, LetterTally};

use crate::prompt::Prompter;

pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> PrimerResult<LetterTally> {
    let text = prompter.prompt_line("Enter your text: ")?;
    let tally = letter_freq::calculate(&LetterFreqInput::new(text));
    prompter.write(&letter_freq::render_table(&tally, letter_freq::COLUMN_WIDTH))?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_run() {
        let mut p = Prompter::new(Cursor::new(b"Hello, World! 123\n".to_vec()), Vec::new());
        let tally = run(&mut p).unwrap();
        assert_eq!(tally.consonants, 7);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            out,
            "Enter your text:  a,  e,  i,  o,  u,  y\n 0,  1,  0,  2,  0,  0\nThere are 7 consonants.\n"
        );
    }

    #[test]
    fn test_run_skips_non_utf8_bytes() {
        let mut p = Prompter::new(Cursor::new(b"caf\xe9 ok\n".to_vec()), Vec::new());
        let tally = run(&mut p).unwrap();
        assert_eq!(tally.consonants, 3);
        assert_eq!(tally.total_letters(), 5);
    }
}
