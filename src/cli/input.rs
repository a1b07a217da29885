//! Line-oriented input reading for the shell.

use std::io::BufRead;

use crate::error::Result;

/// Reads lines from any buffered source. Generic so the shell can be driven
/// by a scripted buffer in tests as well as by stdin.
pub struct InputReader<R> {
    source: R,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Next line without its trailing newline, or `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.source.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_without_newlines() {
        let mut reader = InputReader::new(Cursor::new("first\nsecond\r\n"));
        assert_eq!(reader.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_keeps_interior_whitespace() {
        let mut reader = InputReader::new(Cursor::new("Condé Nast\n"));
        assert_eq!(reader.read_line().unwrap(), Some("Condé Nast".to_string()));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = InputReader::new(Cursor::new("8"));
        assert_eq!(reader.read_line().unwrap(), Some("8".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
    }
}
