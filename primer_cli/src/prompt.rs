//! Prompt-and-read helpers.
//!
//! [`Prompter`] writes a prompt, then reads whitespace-separated tokens the
//! way a formatted input stream does: several values may be typed on one
//! line, and a value may be on a later line than its prompt.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use primer_core::errors::{PrimerError, PrimerResult};

/// Reads typed values from `R`, writing prompts and output to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write `text` as-is and flush, so prompts appear before input is read.
    pub fn write(&mut self, text: &str) -> PrimerResult<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| PrimerError::file_error("write", "stdout", e.to_string()))
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) -> PrimerResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Prompt, then read the rest of the line verbatim.
    ///
    /// End of input yields an empty string.
    pub fn prompt_line(&mut self, prompt: &str) -> PrimerResult<String> {
        self.write(prompt)?;
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(rest.join(" "));
        }
        let mut buf = String::new();
        self.read_raw(&mut buf)?;
        Ok(buf.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Prompt, then read and parse one token.
    pub fn prompt<T: FromStr>(&mut self, prompt: &str, field: &str) -> PrimerResult<T> {
        self.write(prompt)?;
        self.next(field)
    }

    /// Read and parse one token without prompting.
    pub fn next<T: FromStr>(&mut self, field: &str) -> PrimerResult<T> {
        let token = self.next_token(field)?;
        token.parse().map_err(|_| {
            PrimerError::invalid_input(
                field,
                token.as_str(),
                format!("Expected {}", type_label::<T>()),
            )
        })
    }

    /// Next whitespace-separated token, reading more lines as needed.
    pub fn next_token(&mut self, field: &str) -> PrimerResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut buf = String::new();
            if self.read_raw(&mut buf)? == 0 {
                return Err(PrimerError::missing_input(field));
            }
            self.pending.extend(buf.split_whitespace().map(str::to_string));
        }
    }

    /// Consume the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line; bytes that are not UTF-8 become U+FFFD.
    fn read_raw(&mut self, buf: &mut String) -> PrimerResult<usize> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .map_err(|e| PrimerError::file_error("read", "stdin", e.to_string()))?;
        buf.push_str(&String::from_utf8_lossy(&bytes));
        Ok(read)
    }
}

fn type_label<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    match name {
        "f64" | "f32" => "a number",
        "alloc::string::String" => "text",
        n if n.starts_with('i') || n.starts_with('u') => "an integer",
        _ => "a value",
    }
}
