//! Trace file loading
//!
//! A trace is one hex byte dump per line, exactly as the sniffer wrote it.
//! Only line terminators are stripped; trailing spaces are part of the data.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use crate::error::{Result, TagscopeError};

/// An immutable, fully loaded trace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    lines: Vec<String>,
}

impl Trace {
    /// Load a trace file into memory
    ///
    /// # Errors
    /// * `FileNotFound` - If the file does not exist
    /// * `TraceRead` - If the file cannot be read as text
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TagscopeError::FileNotFound {
                path: path.display().to_string(),
                source: Some(e),
            },
            _ => TagscopeError::TraceRead {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let trace = Self::parse(&contents);
        info!("Loaded {} lines from {}", trace.len(), path.display());
        Ok(trace)
    }

    /// Split text into trace lines, dropping `\n` and `\r\n` terminators
    pub fn parse(contents: &str) -> Self {
        Self::from_lines(contents.lines())
    }

    /// Build a trace from in-memory lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Trace {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_keeps_trailing_spaces() {
        let trace = Trace::parse("26\n93 20 \n88 04 \n");
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.line(1), Some("93 20 "));
        assert_eq!(trace.line(2), Some("88 04 "));
    }

    #[test]
    fn test_parse_strips_crlf() {
        let trace = Trace::parse("26\r\n93 20 \r\n");
        assert_eq!(trace.lines(), &["26".to_string(), "93 20 ".to_string()]);
    }

    #[test]
    fn test_parse_without_final_newline() {
        let trace = Trace::parse("AA\nBB");
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.line(1), Some("BB"));
        assert_eq!(trace.line(2), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "04 00\n08 B6 DD\n").unwrap();

        let trace = Trace::load(file.path()).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.line(0), Some("04 00"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Trace::load(&dir.path().join("nfc_case.txt")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_non_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

        let err = Trace::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "TRACE_READ");
    }
}
