#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text: the 1-based line a token started on and
/// its byte offset from the start of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub offset: u32,
}

impl Position {
    pub fn new(line: u32, offset: u32) -> Self {
        Position { line, offset }
    }

    pub fn null() -> Self {
        Position { line: 0, offset: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at_offset(source: &str, offset: u32) -> (usize, String, usize) {
    let pos = (offset as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

pub fn display_error(error: &Error, source: &str) {
    /*
        error: message
           |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_offset(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_offset() {
        let source = "typedef int myInt;\nnamespace A {\n    int x;\n}\n";

        let (line_number, line, line_pos) = super::get_line_at_offset(source, 8);
        assert_eq!(line_number, 1);
        assert_eq!(line, "typedef int myInt;\n");
        assert_eq!(line_pos, 8);

        let (line_number, line, line_pos) = super::get_line_at_offset(source, 37);
        assert_eq!(line_number, 3);
        assert_eq!(line, "    int x;\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (trimmed, removed) = super::remove_starting_whitespace("    int x;");
        assert_eq!(trimmed, "int x;");
        assert_eq!(removed, 4);
    }
}
