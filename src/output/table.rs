// ABOUTME: Column-aligned table rendering with elastic tab stops.
// ABOUTME: Pads every cell but the last in a line to its column width plus a fixed gap.

use std::fmt;
use std::io::{self, Write};

/// A header, a dash separator and data rows, aligned into columns.
///
/// Alignment follows elastic tab stops: each column is as wide as its widest
/// cell plus [`Table::PADDING`] spaces. The last cell of a line is written
/// unpadded and does not take part in column sizing.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Minimum gap between columns.
    pub const PADDING: usize = 4;
    /// Dash group written under each column name.
    pub const SEPARATOR: &'static str = "----";

    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn separator(&self) -> Vec<String> {
        vec![Self::SEPARATOR.to_string(); self.columns.len()]
    }

    fn widths(&self, lines: &[&[String]]) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for line in lines {
            let Some((_, sized)) = line.split_last() else {
                continue;
            };
            for (i, cell) in sized.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Write the header, separator and rows, one `\n`-terminated line each.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.separator();
        let mut lines: Vec<&[String]> = vec![self.columns.as_slice(), separator.as_slice()];
        lines.extend(self.rows.iter().map(Vec::as_slice));

        let widths = self.widths(&lines);
        for line in lines {
            let last = line.len().saturating_sub(1);
            for (i, cell) in line.iter().enumerate() {
                if i == last {
                    write!(f, "{cell}")?;
                } else {
                    let width = widths[i] + Self::PADDING;
                    write!(f, "{cell:<width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_separator_only() {
        let table = Table::new(["ID", "Name"]);
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "ID      Name\n----    ----\n");
    }

    #[test]
    fn columns_widen_to_longest_cell() {
        let mut table = Table::new(["Driver", "Name", "refCount"]);
        table.push_row(["local", "pgdata-long-name", "1"]);
        table.push_row(["local", "cache", "0"]);

        let expected = "\
Driver    Name                refCount
----      ----                ----
local     pgdata-long-name    1
local     cache               0
";
        assert_eq!(table.to_string(), expected);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn last_column_is_not_padded() {
        let mut table = Table::new(["A", "B"]);
        table.push_row(["x", "a much longer trailing value"]);
        for line in table.to_string().lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn width_counts_chars() {
        let mut table = Table::new(["Name", "X"]);
        table.push_row(["café", "1"]);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "café    1");
    }

    #[test]
    fn write_to_matches_display() {
        let mut table = Table::new(["ID", "Name"]);
        table.push_row(["abc", "web"]);

        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), table.to_string());
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let mut table = Table::new(["A", "B", "C"]);
        table.push_row(["only"]);
        let rendered = table.to_string();
        assert!(rendered.ends_with("only\n"));
    }
}
