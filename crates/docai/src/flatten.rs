//! Rebuilds flat tables from a processed document.

use finmerge_core::Table;

use crate::model::{DocTable, Document, TextAnchor};

/// Flattens every table on every page: header rows, then body rows.
///
/// Cell text is the anchored segments joined with a single space, then
/// trimmed. Tables left with no non-empty row are skipped.
#[must_use]
pub fn flatten_tables(document: &Document) -> Vec<Table> {
    let text = CharIndex::new(&document.text);
    document
        .pages
        .iter()
        .flat_map(|page| page.tables.iter())
        .filter_map(|table| flatten_table(table, &text))
        .collect()
}

fn flatten_table(table: &DocTable, text: &CharIndex<'_>) -> Option<Table> {
    let rows = table
        .header_rows
        .iter()
        .chain(&table.body_rows)
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| Some(anchor_text(&cell.layout.text_anchor, text)))
                .collect::<Vec<_>>()
        });
    Table::from_raw_cells(rows)
}

fn anchor_text(anchor: &TextAnchor, text: &CharIndex<'_>) -> String {
    anchor
        .text_segments
        .iter()
        .map(|seg| text.slice(seg.start_index, seg.end_index))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Character-offset slicing over a UTF-8 string.
struct CharIndex<'a> {
    text: &'a str,
    /// Byte offset of each character, plus the total length.
    offsets: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Characters `start..end`, clamped to the text.
    fn slice(&self, start: u64, end: u64) -> &'a str {
        let chars = self.offsets.len() - 1;
        let clamp = |i: u64| usize::try_from(i).map_or(chars, |i| i.min(chars));
        let (start, end) = (clamp(start), clamp(end));
        if start >= end {
            return "";
        }
        &self.text[self.offsets[start]..self.offsets[end]]
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn document(json: &str) -> Document {
        serde_json::from_str(json).expect("document")
    }

    fn rows(table: &Table) -> Vec<Vec<&str>> {
        table
            .rows()
            .iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect()
    }

    const STATEMENT: &str = r#"{
        "text": "Revenue\n2024\nSales\n1000\n",
        "pages": [{
            "tables": [{
                "headerRows": [{"cells": [
                    {"layout": {"textAnchor": {"textSegments": [{"endIndex": "8"}]}}},
                    {"layout": {"textAnchor": {"textSegments": [{"startIndex": "8", "endIndex": "13"}]}}}
                ]}],
                "bodyRows": [{"cells": [
                    {"layout": {"textAnchor": {"textSegments": [{"startIndex": "13", "endIndex": "19"}]}}},
                    {"layout": {"textAnchor": {"textSegments": [{"startIndex": "19", "endIndex": "24"}]}}}
                ]}]
            }]
        }]
    }"#;

    #[test]
    fn test_header_rows_then_body_rows() {
        let tables = flatten_tables(&document(STATEMENT));
        assert_eq!(tables.len(), 1);
        assert_eq!(rows(&tables[0]), vec![vec!["Revenue", "2024"], vec!["Sales", "1000"]]);
    }

    #[test]
    fn test_multiple_segments_joined_with_space() {
        let doc = document(
            r#"{
            "text": "Net\nIncome",
            "pages": [{"tables": [{"bodyRows": [{"cells": [
                {"layout": {"textAnchor": {"textSegments": [
                    {"startIndex": "0", "endIndex": "3"},
                    {"startIndex": "4", "endIndex": "10"}
                ]}}}
            ]}]}]}]
        }"#,
        );
        let tables = flatten_tables(&doc);
        assert_eq!(rows(&tables[0]), vec![vec!["Net Income"]]);
    }

    #[test]
    fn test_offsets_are_characters() {
        let doc = document(
            r#"{
            "text": "€ 5\nCash",
            "pages": [{"tables": [{"bodyRows": [{"cells": [
                {"layout": {"textAnchor": {"textSegments": [{"startIndex": "4", "endIndex": "8"}]}}}
            ]}]}]}]
        }"#,
        );
        assert_eq!(rows(&flatten_tables(&doc)[0]), vec![vec!["Cash"]]);
    }

    #[test]
    fn test_empty_cells_keep_position_and_blank_tables_are_skipped() {
        let doc = document(
            r#"{
            "text": "Cash",
            "pages": [
                {"tables": [{"bodyRows": [{"cells": [
                    {"layout": {}},
                    {"layout": {"textAnchor": {"textSegments": [{"endIndex": "4"}]}}}
                ]}]}]},
                {"tables": [{"bodyRows": [{"cells": [{"layout": {}}]}]}, {}]}
            ]
        }"#,
        );
        let tables = flatten_tables(&doc);
        assert_eq!(tables.len(), 1);
        assert_eq!(rows(&tables[0]), vec![vec!["", "Cash"]]);
    }

    #[rstest]
    #[case(0, 3, "abc")]
    #[case(1, 99, "bc")]
    #[case(5, 9, "")]
    #[case(2, 1, "")]
    #[case(u64::MAX, u64::MAX, "")]
    fn test_slice_is_clamped(#[case] start: u64, #[case] end: u64, #[case] expected: &str) {
        assert_eq!(CharIndex::new("abc").slice(start, end), expected);
    }
}
