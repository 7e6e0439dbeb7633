use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::session::MoveSource;

pub const MOVE_QUESTION: &str = "Please input row and column:";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please input the row and column as two numbers separated by a space, got {0:?}")]
    Malformed(String),
}

/// Line-based question/answer prompt over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and reads one answer line, `None` once input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Asks until the answer parses as a non-negative number.
    pub fn ask_number(&mut self, question: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(number) => return Ok(Some(number)),
                Err(err) => {
                    log::debug!("rejected answer {:?}: {}", answer, err);
                    writeln!(self.output, "{answer:?} is not a valid number.")?;
                }
            }
        }
    }

    /// `true` only for `y` or `yes`, in any case.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        Ok(self
            .ask(question)?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

impl<R: BufRead, W: Write> MoveSource for Prompt<R, W> {
    fn next_move(&mut self) -> io::Result<Option<String>> {
        self.ask(MOVE_QUESTION)
    }
}

/// Parses a free-form `row col` answer into raw signed coordinates.
pub fn parse_move(line: &str) -> Result<(i64, i64), InputError> {
    let malformed = || InputError::Malformed(line.to_owned());
    let mut tokens = line.split_whitespace();

    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let row = row.parse().map_err(|_| malformed())?;
    let col = col.parse().map_err(|_| malformed())?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parse_move_accepts_any_whitespace() {
        assert_eq!(parse_move("1 2"), Ok((1, 2)));
        assert_eq!(parse_move("  3\t 4  "), Ok((3, 4)));
        assert_eq!(parse_move("-1 20"), Ok((-1, 20)));
    }

    #[test]
    fn parse_move_rejects_malformed_input() {
        for line in ["", "1", "1 2 3", "a b", "1,2"] {
            assert_eq!(parse_move(line), Err(InputError::Malformed(line.to_owned())));
        }
    }

    #[test]
    fn ask_number_reprompts_until_valid() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("ten\n-3\n10\n"), &mut output);

        assert_eq!(prompt.ask_number("Number of rows:").unwrap(), Some(10));

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Number of rows:").count(), 3);
        assert!(output.contains("\"ten\" is not a valid number."));
    }

    #[test]
    fn ask_yes_no_accepts_short_and_long_forms() {
        let mut prompt = Prompt::new(Cursor::new("Yes\ny\nno\n"), io::sink());

        assert!(prompt.ask_yes_no("again?").unwrap());
        assert!(prompt.ask_yes_no("again?").unwrap());
        assert!(!prompt.ask_yes_no("again?").unwrap());
        assert!(!prompt.ask_yes_no("again?").unwrap());
    }

    #[test]
    fn next_move_returns_none_at_end_of_input() {
        let mut prompt = Prompt::new(Cursor::new("0 1\n"), io::sink());

        assert_eq!(prompt.next_move().unwrap().as_deref(), Some("0 1"));
        assert_eq!(prompt.next_move().unwrap(), None);
    }
}
