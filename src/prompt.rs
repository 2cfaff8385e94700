//! Interactive input boundary.
//!
//! Parsing is separated from I/O: the `parse_*` functions are pure and
//! return [`InputFormatError`] on malformed input, and the `read_*`
//! functions own the stdin re-prompt loop that calls them. A parse error
//! never escapes this module - the loop reports it and asks again - so the
//! core pipeline only ever sees validated parameters.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::catalog::SortOrder;

/// Malformed interactive input. Always recoverable by re-prompting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputFormatError {
    /// The choice was not one of the offered menu options.
    #[error("unrecognized option: {0:?}")]
    UnknownOption(String),

    /// A selection token did not parse as an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// A selection id fell outside the valid range.
    #[error("id {id} out of range 1..={max}")]
    OutOfRange {
        /// The offending id
        id: u32,
        /// Largest valid id for this listing
        max: usize,
    },
}

/// Map a sorting menu choice to an order: `1` descending, `2` ascending.
pub fn parse_sort_choice(raw: &str) -> Result<SortOrder, InputFormatError> {
    match raw.trim() {
        "1" => Ok(SortOrder::Descending),
        "2" => Ok(SortOrder::Ascending),
        other => Err(InputFormatError::UnknownOption(other.to_string())),
    }
}

/// Parse a literal `yes` or `no` answer.
pub fn parse_yes_no(raw: &str) -> Result<bool, InputFormatError> {
    match raw.trim() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(InputFormatError::UnknownOption(other.to_string())),
    }
}

/// Parse a whitespace-separated list of 1-based selection ids.
///
/// Every token must parse as an integer within `[1, max]`; one bad token
/// rejects the whole line, as does an empty line.
pub fn parse_selection(raw: &str, max: usize) -> Result<Vec<u32>, InputFormatError> {
    let mut ids = Vec::new();
    for token in raw.split_whitespace() {
        let id: u32 = token
            .trim()
            .parse()
            .map_err(|_| InputFormatError::NotANumber(token.to_string()))?;
        if id == 0 || id as usize > max {
            return Err(InputFormatError::OutOfRange { id, max });
        }
        ids.push(id);
    }
    if ids.is_empty() {
        return Err(InputFormatError::NotANumber(raw.trim().to_string()));
    }
    Ok(ids)
}

/// Ask for the extension filter.
///
/// Any line is accepted verbatim after trimming; an empty line means no
/// filter. The word is used without a leading dot (`txt`, not `.txt`).
pub fn read_extension<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    writeln!(out, "Enter file format:")?;
    out.flush()?;
    let line = read_line(input)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Show the sorting menu once, then ask until the answer parses.
pub fn read_sort_order<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<SortOrder> {
    writeln!(out, "Size sorting option:")?;
    writeln!(out, "1. Descending")?;
    writeln!(out, "2. Ascending")?;
    loop {
        writeln!(out, "Enter a sorting option:")?;
        out.flush()?;
        match parse_sort_choice(&read_line(input)?) {
            Ok(order) => return Ok(order),
            Err(err) => {
                log::debug!("rejected sorting option: {err}");
                writeln!(out, "Wrong option")?;
            }
        }
    }
}

/// Ask a yes/no question until the answer parses.
pub fn read_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    writeln!(out, "{question}")?;
    loop {
        out.flush()?;
        match parse_yes_no(&read_line(input)?) {
            Ok(answer) => return Ok(answer),
            Err(err) => {
                log::debug!("rejected answer: {err}");
                writeln!(out, "Wrong option")?;
            }
        }
    }
}

/// Ask for selection ids until a whole line parses.
///
/// `max` is the largest valid id, i.e. the duplicate listing length.
pub fn read_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    max: usize,
) -> io::Result<Vec<u32>> {
    writeln!(out, "Enter file numbers to delete:")?;
    loop {
        out.flush()?;
        match parse_selection(&read_line(input)?, max) {
            Ok(ids) => return Ok(ids),
            Err(err) => {
                log::debug!("rejected selection: {err}");
                writeln!(out, "Wrong format")?;
            }
        }
    }
}

/// Read one line, treating a closed stream as an error rather than
/// spinning on the re-prompt loop forever.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_sort_choice() {
        assert_eq!(parse_sort_choice("1").unwrap(), SortOrder::Descending);
        assert_eq!(parse_sort_choice("2\n").unwrap(), SortOrder::Ascending);
        assert!(parse_sort_choice("3").is_err());
        assert!(parse_sort_choice("descending").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("yes\n").unwrap());
        assert!(!parse_yes_no("no").unwrap());
        assert!(parse_yes_no("YES").is_err());
        assert!(parse_yes_no("").is_err());
    }

    #[test]
    fn test_parse_selection_accepts_bounds() {
        assert_eq!(parse_selection("1 3", 3).unwrap(), vec![1, 3]);
        assert_eq!(parse_selection("  2\t1 ", 3).unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_parse_selection_rejects_out_of_range() {
        assert_eq!(
            parse_selection("0", 3).unwrap_err(),
            InputFormatError::OutOfRange { id: 0, max: 3 }
        );
        assert_eq!(
            parse_selection("4", 3).unwrap_err(),
            InputFormatError::OutOfRange { id: 4, max: 3 }
        );
    }

    #[test]
    fn test_parse_selection_one_bad_token_rejects_line() {
        assert!(parse_selection("1 two 3", 3).is_err());
        assert!(parse_selection("", 3).is_err());
        assert!(parse_selection("   ", 3).is_err());
    }

    #[test]
    fn test_read_sort_order_reprompts_until_valid() {
        let mut input = Cursor::new("5\nnope\n2\n");
        let mut out = Vec::new();
        let order = read_sort_order(&mut input, &mut out).unwrap();
        assert_eq!(order, SortOrder::Ascending);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Wrong option").count(), 2);
        assert_eq!(text.matches("Enter a sorting option:").count(), 3);
        // the menu itself is shown once
        assert_eq!(text.matches("1. Descending").count(), 1);
    }

    #[test]
    fn test_read_extension_empty_means_no_filter() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        assert_eq!(read_extension(&mut input, &mut out).unwrap(), None);

        let mut input = Cursor::new("txt\n");
        let mut out = Vec::new();
        assert_eq!(
            read_extension(&mut input, &mut out).unwrap(),
            Some("txt".to_string())
        );
    }

    #[test]
    fn test_read_yes_no_reprompts() {
        let mut input = Cursor::new("maybe\nyes\n");
        let mut out = Vec::new();
        assert!(read_yes_no(&mut input, &mut out, "Check for duplicates?").unwrap());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Check for duplicates?\n"));
        assert_eq!(text.matches("Wrong option").count(), 1);
    }

    #[test]
    fn test_read_selection_reprompts_on_bad_line() {
        let mut input = Cursor::new("1 99\n2\n");
        let mut out = Vec::new();
        let ids = read_selection(&mut input, &mut out, 3).unwrap();
        assert_eq!(ids, vec![2]);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Wrong format").count(), 1);
    }

    #[test]
    fn test_closed_stream_is_an_error() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = read_yes_no(&mut input, &mut out, "Delete files?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
