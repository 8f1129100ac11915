//! Line scanning shared by the plain-text mesh readers.

use std::fmt::Display;
use std::io::{BufRead, Lines};
use std::str::FromStr;

use glam::DVec2;

use crate::error::{MeshError, Result};
use crate::types::Vertex;

/// A non-blank, non-comment line split on whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based line number in the source.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    /// Raw text of the field at `index`.
    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            MeshError::parse(
                self.line,
                format!(
                    "expected at least {} fields, found {}",
                    index + 1,
                    self.fields.len()
                ),
            )
        })
    }

    /// Parse the field at `index`.
    pub fn parse<T>(&self, index: usize) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.field(index)?;
        raw.parse()
            .map_err(|e| MeshError::parse(self.line, format!("field {} ({raw:?}): {e}", index + 1)))
    }

    /// Parse the coordinate pair at `index` and `index + 1`, keeping the
    /// field text so it can be written back unchanged.
    pub fn vertex(&self, index: usize) -> Result<Vertex> {
        Ok(Vertex {
            position: DVec2::new(self.parse(index)?, self.parse(index + 1)?),
            text: [
                self.field(index)?.to_owned(),
                self.field(index + 1)?.to_owned(),
            ],
        })
    }
}

/// Iterator over the records of a text mesh file.
///
/// Empty lines, whitespace-only lines, and lines whose first non-blank
/// character is `#` are skipped.
pub struct Records<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Line number of the last line consumed.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next record, or a parse error naming `what` if the input has ended.
    pub fn expect(&mut self, what: &str) -> Result<Record> {
        match self.next() {
            Some(record) => record,
            None => Err(MeshError::parse(self.line, format!("missing {what}"))),
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return Some(Ok(Record {
                line: self.line,
                fields: trimmed.split_whitespace().map(str::to_owned).collect(),
            }));
        }
    }
}
