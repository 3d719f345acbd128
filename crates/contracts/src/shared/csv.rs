//! CSV encoding for client-side exports. Every cell is quoted and embedded
//! quotes are doubled.

/// Types that can be written as a CSV row
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values in header order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Quote one cell
pub fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn join_row<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|cell| quote_cell(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header row plus one row per item, joined by `\n` (no trailing newline)
pub fn to_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_row(T::headers()));
    for row in rows {
        lines.push(join_row(row.to_csv_row()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Qty"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_quote_cell() {
        assert_eq!(quote_cell("plain"), "\"plain\"");
        assert_eq!(quote_cell("5\" pipe"), "\"5\"\" pipe\"");
        assert_eq!(quote_cell("a,b"), "\"a,b\"");
        assert_eq!(quote_cell(""), "\"\"");
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&[Row("Seeds", 3), Row("Say \"hi\"", 1)]);
        assert_eq!(
            csv,
            "\"Name\",\"Qty\"\n\"Seeds\",\"3\"\n\"Say \"\"hi\"\"\",\"1\""
        );
    }

    #[test]
    fn test_to_csv_empty_has_header_only() {
        let csv = to_csv::<Row>(&[]);
        assert_eq!(csv, "\"Name\",\"Qty\"");
    }
}
