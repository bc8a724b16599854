//! In-memory table that runs cells through column renderers per pass

mod sort;

use std::borrow::Cow;
use std::io::Read;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::render::{ColumnRenderer, Plain, RenderContext, cell_text};

pub use sort::{SortOrder, compare_sort_values};

static NULL: Value = Value::Null;

/// A named column and the renderer that formats its cells
pub struct Column {
    name: String,
    renderer: Box<dyn ColumnRenderer>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            renderer: Box::new(Plain),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    /// Raw cell value for this column; missing keys read as null
    pub fn cell<'a>(&self, row: &'a Value) -> &'a Value {
        row.get(&self.name).unwrap_or(&NULL)
    }

    /// Cell value as seen by the given render pass
    pub fn render<'a>(&self, row: &'a Value, context: RenderContext) -> Cow<'a, Value> {
        self.renderer.render(self.cell(row), context, row)
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

/// Rows of JSON objects with an ordered set of columns
#[derive(Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Value>,
}

impl Table {
    /// Load a JSON array of row objects
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        match value {
            Value::Array(rows) => Self::from_rows(rows),
            _ => Err(Error::NotAnArray),
        }
    }

    /// Build a table from row objects; columns are the union of their keys
    /// in first-seen order
    pub fn from_rows(rows: Vec<Value>) -> Result<Self> {
        let mut columns: Vec<Column> = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let Value::Object(map) = row else {
                return Err(Error::RowNotObject { index });
            };
            for key in map.keys() {
                if !columns.iter().any(|c| &c.name == key) {
                    columns.push(Column::new(key.as_str()));
                }
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Replace the renderer of a column
    pub fn set_renderer<R: ColumnRenderer + 'static>(
        &mut self,
        column: &str,
        renderer: R,
    ) -> Result<()> {
        let index = self.column_index(column)?;
        self.columns[index].renderer = Box::new(renderer);
        Ok(())
    }

    /// Keep rows where some cell's filter value contains `needle`, ignoring case
    pub fn filter(&mut self, needle: &str) {
        let needle = needle.to_lowercase();
        let columns = &self.columns;

        self.rows.retain(|row| {
            columns.iter().any(|col| {
                cell_text(&col.render(row, RenderContext::Filter))
                    .to_lowercase()
                    .contains(&needle)
            })
        });
    }

    /// Stable sort of rows by a column's sort value
    pub fn sort_by(&mut self, column: &str, order: SortOrder) -> Result<()> {
        let index = self.column_index(column)?;
        let col = &self.columns[index];

        self.rows.sort_by(|a, b| {
            let ordering = compare_sort_values(
                &col.render(a, RenderContext::Sort),
                &col.render(b, RenderContext::Sort),
            );
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        Ok(())
    }

    /// Every row rendered for a pass, one value per column
    pub fn rendered_rows(&self, context: RenderContext) -> Vec<Vec<Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| col.render(row, context).into_owned())
                    .collect()
            })
            .collect()
    }

    pub fn display_rows(&self) -> Vec<Vec<Value>> {
        self.rendered_rows(RenderContext::Display)
    }

    pub fn export_rows(&self) -> Vec<Vec<Value>> {
        self.rendered_rows(RenderContext::Export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Ellipsis, EllipsisConfig};
    use serde_json::json;

    fn sample() -> Table {
        Table::from_json(
            r#"[
                {"id": 3, "title": "Zebra crossings in the city"},
                {"id": 1, "title": "Apple orchards"},
                {"id": 2, "title": "Mango season", "note": "<ripe>"}
            ]"#
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_columns_in_first_seen_order() {
        let table = sample();
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["id", "title", "note"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_missing_cells_are_null() {
        let table = sample();
        let note = &table.columns()[2];
        assert_eq!(note.cell(&table.rows()[0]), &Value::Null);
        assert_eq!(note.cell(&table.rows()[2]), &json!("<ripe>"));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = Table::from_json(r#"{"id": 1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::NotAnArray));
    }

    #[test]
    fn test_rejects_non_object_row() {
        let err = Table::from_json(r#"[{"id": 1}, 5]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RowNotObject { index: 1 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Table::from_json("[{".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_set_renderer_unknown_column() {
        let mut table = sample();
        let err = table
            .set_renderer("missing", Ellipsis::new(EllipsisConfig::new(5)))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown column 'missing'");
    }

    #[test]
    fn test_display_uses_renderer() {
        let mut table = sample();
        table
            .set_renderer("title", Ellipsis::new(EllipsisConfig::new(10).wordbreak(true)))
            .unwrap();

        let rows = table.display_rows();
        assert_eq!(
            rows[0][1],
            json!("<span title=\"Zebra crossings in the city\">Zebra &#8230;</span>")
        );
        // Plain columns escape display strings
        assert_eq!(rows[2][2], json!("&lt;ripe&gt;"));
        assert_eq!(rows[0][2], Value::Null);
    }

    #[test]
    fn test_export_sees_original_values() {
        let mut table = sample();
        table
            .set_renderer("title", Ellipsis::new(EllipsisConfig::new(5)))
            .unwrap();

        let rows = table.export_rows();
        assert_eq!(rows[0][1], json!("Zebra crossings in the city"));
        assert_eq!(rows[2][2], json!("<ripe>"));
    }

    #[test]
    fn test_sort_uses_untruncated_values() {
        let mut table = Table::from_json(
            r#"[{"t": "abcdef-2"}, {"t": "abcdef-1"}, {"t": "abcdef-3"}]"#.as_bytes(),
        )
        .unwrap();
        // Every display value would be identical after truncation
        table
            .set_renderer("t", Ellipsis::new(EllipsisConfig::new(4)))
            .unwrap();

        table.sort_by("t", SortOrder::Ascending).unwrap();
        let order: Vec<&Value> = table.rows().iter().map(|r| &r["t"]).collect();
        assert_eq!(
            order,
            vec![&json!("abcdef-1"), &json!("abcdef-2"), &json!("abcdef-3")]
        );

        table.sort_by("t", SortOrder::Descending).unwrap();
        assert_eq!(table.rows()[0]["t"], json!("abcdef-3"));
    }

    #[test]
    fn test_sort_numbers_numerically() {
        let mut table = sample();
        table.sort_by("id", SortOrder::Ascending).unwrap();
        let ids: Vec<i64> = table
            .rows()
            .iter()
            .filter_map(|r| r["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_unknown_column() {
        let mut table = sample();
        assert!(matches!(
            table.sort_by("nope", SortOrder::Ascending),
            Err(Error::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_filter_matches_full_value() {
        let mut table = sample();
        table
            .set_renderer("title", Ellipsis::new(EllipsisConfig::new(5)))
            .unwrap();

        // "city" is past the cutoff but the filter pass sees the whole value
        table.filter("CITY");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0]["id"], json!(3));
    }

    #[test]
    fn test_filter_matches_numbers() {
        let mut table = sample();
        table.filter("2");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0]["title"], json!("Mango season"));
    }
}
