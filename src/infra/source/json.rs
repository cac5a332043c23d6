use std::collections::HashSet;

use crate::domain::entities::row::{CellValue, Dataset, Row};
use crate::usecase::ports::source::LoadError;

/// Parses a JSON array of row objects. Every row needs an `id`, unique across the document.
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LoadError::malformed("dataset document is empty"));
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)
        .map_err(|err| LoadError::malformed(format!("invalid json: {err}")))?;
    let serde_json::Value::Array(items) = value else {
        return Err(LoadError::malformed("dataset must be a json array of objects"));
    };

    let mut rows = Vec::with_capacity(items.len());
    let mut seen_ids = HashSet::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let row_num = idx + 1;
        if !item.is_object() {
            return Err(LoadError::malformed(format!(
                "row {row_num} is not a json object"
            )));
        }
        let row: Row = serde_json::from_value(item)
            .map_err(|err| LoadError::malformed(format!("row {row_num}: {err}")))?;

        if matches!(row.id, CellValue::Empty) {
            return Err(LoadError::malformed(format!("row {row_num} has no id")));
        }
        let id = row.id.to_display_string();
        if !seen_ids.insert(id.clone()) {
            return Err(LoadError::DuplicateId { id, row: row_num });
        }
        rows.push(row);
    }

    Ok(rows)
}
