//! Line-oriented terminal input and output.
//!
//! `Console` wraps a buffered reader and a writer so the whole interactive
//! surface can be driven by tests through in-memory buffers. The validated
//! readers re-prompt until they get acceptable input; the loops are
//! iterative, so hostile input replay can't grow the stack.

use std::io::{BufRead, Write};

use crate::db::{is_date_valid, split_tags};

/// The read-line / write-line capability the menus are built on.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write text without a trailing newline and flush, for inline prompts.
    pub fn write(&mut self, text: &str) {
        let _ = write!(self.writer, "{text}");
        let _ = self.writer.flush();
    }

    /// Write a full line.
    pub fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{line}");
    }

    /// Read one line, stripped of its line ending. Once the input stream is
    /// closed no further input can ever arrive, so the process exits rather
    /// than re-prompting forever.
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                eprintln!("Input stream closed.");
                std::process::exit(1);
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            }
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        line
    }

    /// Read a string, displaying the prompt provided.
    pub fn read_string(&mut self, prompt: &str) -> String {
        self.write(prompt);
        self.read_line()
    }

    /// Read an integer, re-prompting until the input parses.
    pub fn read_integer(&mut self, prompt: &str) -> i64 {
        loop {
            match self.read_string(prompt).parse::<i64>() {
                Ok(value) => return value,
                Err(_) => self.write_line("Please enter a valid integer."),
            }
        }
    }

    /// Read an integer within an inclusive range, re-prompting until valid.
    pub fn read_integer_in(&mut self, prompt: &str, min: i64, max: i64) -> i64 {
        loop {
            let value = self.read_integer(prompt);
            if value >= min && value <= max {
                return value;
            }
            self.write_line("Please enter a valid integer within the specified range.");
        }
    }

    /// Read a `YYYY-MM-DD` date, re-prompting until it is a real calendar date.
    pub fn read_date(&mut self, prompt: &str) -> String {
        loop {
            let date = self.read_string(prompt);
            if is_date_valid(&date) {
                return date;
            }
            self.write_line("Please enter a valid date in the format YYYY-MM-DD.");
        }
    }

    /// Read a comma-separated tag list.
    pub fn read_tags(&mut self, prompt: &str) -> Vec<String> {
        split_tags(&self.read_string(prompt))
    }

    /// Consume the console and hand back the writer, for tests that inspect
    /// what was printed.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(con: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(con.writer).unwrap()
    }

    #[test]
    fn read_integer_retries_until_it_parses() {
        let mut con = console("abc\n\n42\n");
        assert_eq!(con.read_integer("n: "), 42);
        let out = output(con);
        assert_eq!(out.matches("Please enter a valid integer.").count(), 2);
    }

    #[test]
    fn read_integer_in_rejects_out_of_range_values() {
        let mut con = console("0\n9\n3\n");
        assert_eq!(con.read_integer_in("choice: ", 1, 4), 3);
        let out = output(con);
        assert_eq!(
            out.matches("Please enter a valid integer within the specified range.")
                .count(),
            2
        );
    }

    #[test]
    fn read_date_retries_until_valid() {
        let mut con = console("2023-02-30\n2023-02-28\n");
        assert_eq!(con.read_date("date: "), "2023-02-28");
        assert!(output(con).contains("Please enter a valid date in the format YYYY-MM-DD."));
    }

    #[test]
    fn read_tags_splits_literally() {
        let mut con = console("home,errands\n");
        assert_eq!(con.read_tags("tags: "), vec!["home", "errands"]);
        let mut con = console("\n");
        assert_eq!(con.read_tags("tags: "), vec![String::new()]);
    }
}
