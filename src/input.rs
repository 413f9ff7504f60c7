//! Prompted numeric input
//!
//! [`Prompter`] asks for a value, and keeps asking until the reply parses.
//! It is generic over its reader and writer so scripted sessions can drive
//! it in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{Result, ToolkitError};
use crate::units::EngValue;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter reading the process's stdin and writing to stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line without its line ending
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so such a
    /// line reads as a reply that does not parse rather than as an error.
    ///
    /// # Errors
    /// An `Io` error of kind `UnexpectedEof` once the input is exhausted.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        let reply = String::from_utf8_lossy(&buf);
        Ok(reply.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read a finite number, accepting SI prefixes such as `4.7k` or `100n`
    pub fn float(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let reply = self.line(prompt)?;
            match reply.parse::<EngValue>() {
                Ok(v) if v.value().is_finite() => return Ok(v.value()),
                _ => {
                    log::debug!("Rejected non-numeric reply {:?}", reply);
                    writeln!(self.output, "Error: Invalid input. Please enter a number.")?;
                }
            }
        }
    }

    /// Read a whole number
    pub fn integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let reply = self.line(prompt)?;
            match reply.trim().parse::<i64>() {
                Ok(v) => return Ok(v),
                Err(_) => {
                    log::debug!("Rejected non-integer reply {:?}", reply);
                    writeln!(
                        self.output,
                        "Error: Invalid input. Please enter an integer."
                    )?;
                }
            }
        }
    }
}

/// True for the error a [`Prompter`] returns once its input is exhausted
pub fn is_end_of_input(err: &ToolkitError) -> bool {
    matches!(err, ToolkitError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
