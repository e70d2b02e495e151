//! Minimal CSV parsing for sheet export payloads. Quote-aware and CRLF
//! tolerant; no separator sniffing, the export endpoints always emit commas.

use std::mem::take;

pub(crate) fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush the trailing row even when the payload lacks a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields_and_lines() {
        let rows = parse_rows("a,b,c\n1,2,3\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b", "c"]);
        assert_eq!(rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let rows = parse_rows("\"seo, tools\",\"line\nbreak\"\nx,y");
        assert_eq!(rows[0], vec!["seo, tools", "line\nbreak"]);
        assert_eq!(rows[1], vec!["x", "y"]);
    }

    #[test]
    fn doubled_quotes_unescape() {
        let rows = parse_rows("\"say \"\"hi\"\"\",2");
        assert_eq!(rows[0], vec!["say \"hi\"", "2"]);
    }

    #[test]
    fn crlf_and_missing_trailing_newline() {
        let rows = parse_rows("a,b\r\n1,2");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let rows = parse_rows("a,b\n\n1,2\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn empty_cells_survive() {
        let rows = parse_rows("a,,c\n");
        assert_eq!(rows[0], vec!["a", "", "c"]);
    }
}
